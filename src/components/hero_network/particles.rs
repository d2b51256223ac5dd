//! Drifting particles: creation, tiering, and per-frame motion.

use super::config::{Interaction, NetworkConfig, TierConfig};
use super::random::RandomSource;
use super::types::Point;

/// Visual class of a particle, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
	/// Rare, large, brightest nodes.
	Hub,
	/// The bulk of the network.
	Standard,
	/// Small, faint nodes.
	DataPoint,
}

impl Tier {
	/// Classify a uniform `rank` draw; thresholds are exclusive.
	pub fn from_rank(rank: f64, tiers: &TierConfig) -> Self {
		if rank > tiers.hub_threshold {
			Tier::Hub
		} else if rank > tiers.standard_threshold {
			Tier::Standard
		} else {
			Tier::DataPoint
		}
	}
}

/// A single drifting node of the network.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Index at creation, stable until the next reset.
	pub id: usize,
	/// Horizontal position in CSS pixels.
	pub x: f64,
	/// Vertical position in CSS pixels.
	pub y: f64,
	/// Horizontal velocity in pixels per reference frame.
	pub vx: f64,
	/// Vertical velocity in pixels per reference frame.
	pub vy: f64,
	/// Radius in CSS pixels.
	pub size: f64,
	/// Visual class.
	pub tier: Tier,
	/// Indices of particles connected to this one in the current frame.
	pub neighbors: Vec<usize>,
}

impl Particle {
	/// Create a particle at a uniformly random position inside `width × height`.
	///
	/// Draw order: x, y, rank, size, speed, vx, vy.
	pub fn spawn(
		id: usize,
		width: f64,
		height: f64,
		config: &NetworkConfig,
		rng: &mut impl RandomSource,
	) -> Self {
		let x = rng.unit() * width;
		let y = rng.unit() * height;

		let tier = Tier::from_rank(rng.unit(), &config.tiers);
		let size_span = match tier {
			Tier::Hub => config.tiers.hub_size,
			Tier::Standard => config.tiers.standard_size,
			Tier::DataPoint => config.tiers.data_point_size,
		};
		let size = size_span.sample(rng.unit());

		let speed = config.speed.sample(rng.unit());
		let vx = (rng.unit() - 0.5) * speed;
		let vy = (rng.unit() - 0.5) * speed;

		Self {
			id,
			x,
			y,
			vx,
			vy,
			size,
			tier,
			neighbors: Vec::new(),
		}
	}

	/// Current position as a [`Point`].
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Advance by `frames` worth of velocity, reflecting off the bounds.
	pub fn drift(&mut self, frames: f64, width: f64, height: f64) {
		self.x += self.vx * frames;
		self.y += self.vy * frames;
		(self.x, self.vx) = reflect(self.x, self.vx, width);
		(self.y, self.vy) = reflect(self.y, self.vy, height);
	}

	/// Apply `frames` worth of the pointer's nudge, if the pointer is in range.
	pub fn nudge(&mut self, frames: f64, interaction: &Interaction, pointer: Point) {
		if let Some((dx, dy)) = interaction.displacement(self.position(), pointer) {
			self.x += dx * frames;
			self.y += dy * frames;
		}
	}
}

/// Mirror a coordinate that left `[0, bound]` and point its velocity back inside.
fn reflect(pos: f64, vel: f64, bound: f64) -> (f64, f64) {
	if pos < 0.0 {
		((-pos).min(bound), vel.abs())
	} else if pos > bound {
		((2.0 * bound - pos).max(0.0), -vel.abs())
	} else {
		(pos, vel)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::hero_network::random::{Scripted, SeededRandom};
	use approx::assert_relative_eq;

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			id: 0,
			x,
			y,
			vx,
			vy,
			size: 2.0,
			tier: Tier::Standard,
			neighbors: Vec::new(),
		}
	}

	#[test]
	fn rank_thresholds_are_strict() {
		let tiers = TierConfig::default();
		assert_eq!(Tier::from_rank(0.95, &tiers), Tier::Hub);
		assert_eq!(Tier::from_rank(0.9, &tiers), Tier::Standard);
		assert_eq!(Tier::from_rank(0.41, &tiers), Tier::Standard);
		assert_eq!(Tier::from_rank(0.4, &tiers), Tier::DataPoint);
		assert_eq!(Tier::from_rank(0.0, &tiers), Tier::DataPoint);
	}

	#[test]
	fn spawn_follows_scripted_draws() {
		let config = NetworkConfig::query();
		// x, y, rank, size, speed, vx, vy
		let mut rng = Scripted::new(vec![0.5, 0.25, 0.95, 0.5, 1.0, 1.0, 0.0]);
		let p = Particle::spawn(3, 200.0, 100.0, &config, &mut rng);

		assert_eq!(p.id, 3);
		assert_relative_eq!(p.x, 100.0);
		assert_relative_eq!(p.y, 25.0);
		assert_eq!(p.tier, Tier::Hub);
		assert_relative_eq!(p.size, 4.0);
		assert_relative_eq!(p.vx, 0.5 * 0.2);
		assert_relative_eq!(p.vy, -0.5 * 0.2);
	}

	#[test]
	fn spawned_particles_stay_in_bounds_and_ranges() {
		let config = NetworkConfig::query();
		let mut rng = SeededRandom::new(9);
		for id in 0..500 {
			let p = Particle::spawn(id, 640.0, 360.0, &config, &mut rng);
			assert!((0.0..640.0).contains(&p.x));
			assert!((0.0..360.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.1 && p.vy.abs() <= 0.1);
			let span = match p.tier {
				Tier::Hub => config.tiers.hub_size,
				Tier::Standard => config.tiers.standard_size,
				Tier::DataPoint => config.tiers.data_point_size,
			};
			assert!(p.size >= span.min && p.size < span.max);
		}
	}

	#[test]
	fn drift_without_crossing_keeps_velocity() {
		let mut p = particle(50.0, 50.0, 1.5, -2.0);
		p.drift(1.0, 100.0, 100.0);
		assert_relative_eq!(p.x, 51.5);
		assert_relative_eq!(p.y, 48.0);
		assert_relative_eq!(p.vx, 1.5);
		assert_relative_eq!(p.vy, -2.0);
	}

	#[test]
	fn bounce_flips_only_crossed_axis() {
		let mut p = particle(99.0, 50.0, 3.0, 0.4);
		p.drift(1.0, 100.0, 100.0);
		assert_relative_eq!(p.x, 98.0);
		assert_relative_eq!(p.vx, -3.0);
		assert_relative_eq!(p.y, 50.4);
		assert_relative_eq!(p.vy, 0.4);

		let mut q = particle(50.0, 0.5, 0.2, -1.5);
		q.drift(1.0, 100.0, 100.0);
		assert_relative_eq!(q.y, 1.0);
		assert_relative_eq!(q.vy, 1.5);
		assert_relative_eq!(q.vx, 0.2);
	}

	#[test]
	fn bounce_preserves_speed() {
		let mut p = particle(0.2, 99.9, -0.3, 0.4);
		let before = p.vx.hypot(p.vy);
		p.drift(1.0, 100.0, 100.0);
		assert_relative_eq!(p.vx.hypot(p.vy), before);
		assert!(p.vx > 0.0 && p.vy < 0.0);
	}

	#[test]
	fn nudge_moves_position_not_velocity() {
		let mut p = particle(100.0, 100.0, 0.1, 0.1);
		let attract = Interaction::Attract {
			radius: 200.0,
			coefficient: 0.01,
		};
		p.nudge(1.0, &attract, Point::new(150.0, 100.0));
		assert_relative_eq!(p.x, 100.375);
		assert_relative_eq!(p.vx, 0.1);
		assert_relative_eq!(p.vy, 0.1);
	}

	#[test]
	fn nudge_scales_with_frames() {
		let attract = Interaction::Attract {
			radius: 200.0,
			coefficient: 0.01,
		};
		let mut half = particle(100.0, 100.0, 0.0, 0.0);
		half.nudge(0.5, &attract, Point::new(150.0, 100.0));
		assert_relative_eq!(half.x, 100.1875);

		let mut none = particle(100.0, 100.0, 0.0, 0.0);
		none.nudge(0.0, &attract, Point::new(150.0, 100.0));
		assert_relative_eq!(none.x, 100.0);
	}
}
