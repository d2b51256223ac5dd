//! Data packets: short-lived dots flowing outward from the focused particle.

use super::types::Point;

/// A dot travelling from `start` to `target`.
#[derive(Clone, Debug)]
pub struct Packet {
	/// Focused particle's position at spawn.
	pub start: Point,
	/// Neighbor's position at spawn.
	pub target: Point,
	/// Fraction of the path covered, in [0, 1).
	pub progress: f64,
	/// Progress gained per frame.
	pub speed: f64,
}

impl Packet {
	/// New packet at `start`. Negative speeds are clamped to zero.
	pub fn new(start: Point, target: Point, speed: f64) -> Self {
		Self {
			start,
			target,
			progress: 0.0,
			speed: speed.max(0.0),
		}
	}

	/// Move `frames` worth of progress along the path.
	pub fn advance(&mut self, frames: f64) {
		self.progress += self.speed * frames;
	}

	/// Reached the target.
	pub fn is_done(&self) -> bool {
		self.progress >= 1.0
	}

	/// Current point on the straight path.
	pub fn position(&self) -> Point {
		self.start.lerp(self.target, self.progress)
	}
}

/// Advance every packet and drop the ones that arrived.
pub fn advance_all(packets: &mut Vec<Packet>, frames: f64) {
	for packet in packets.iter_mut() {
		packet.advance(frames);
	}
	packets.retain(|p| !p.is_done());
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn progress_is_monotonic_and_removed_on_arrival() {
		let mut packets = vec![Packet::new(
			Point::new(0.0, 0.0),
			Point::new(100.0, 0.0),
			0.3,
		)];
		let mut last = 0.0;
		for _ in 0..3 {
			advance_all(&mut packets, 1.0);
			assert_eq!(packets.len(), 1);
			assert!(packets[0].progress >= last);
			last = packets[0].progress;
		}
		assert_relative_eq!(packets[0].position().x, 90.0, epsilon = 1e-9);
		advance_all(&mut packets, 1.0);
		assert!(packets.is_empty());
	}

	#[test]
	fn exact_arrival_is_removed() {
		let mut packets = vec![Packet::new(Point::default(), Point::new(1.0, 1.0), 0.5)];
		advance_all(&mut packets, 1.0);
		assert_eq!(packets.len(), 1);
		advance_all(&mut packets, 1.0);
		assert!(packets.is_empty());
	}

	#[test]
	fn negative_speed_is_clamped() {
		let mut p = Packet::new(Point::default(), Point::new(1.0, 0.0), -0.2);
		p.advance(1.0);
		assert_eq!(p.progress, 0.0);
	}
}
