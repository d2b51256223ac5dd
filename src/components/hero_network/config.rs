//! Tunables for the particle network.
//!
//! Every constant the animation depends on lives here, grouped into a single
//! [`NetworkConfig`]. Values are fixed at build time through the preset
//! constructors; the host page may only pick which preset to use.
//!
//! # Units
//!
//! - Distances and sizes are canvas CSS pixels.
//! - Speeds are pixels (or progress) per reference frame of 1/60 s.
//! - Thresholds on random draws are compared against uniform values in [0, 1).

use super::types::{Point, Variant};

/// Below this pointer distance the repel direction is undefined.
pub const REPEL_EPSILON: f64 = 1e-6;

/// How the pointer displaces nearby particles each frame.
///
/// The displacement is a one-frame positional nudge; velocities are never
/// changed by the pointer.
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
	/// Pull particles toward the pointer by a fraction of the offset.
	Attract {
		/// Pointer reach in pixels.
		radius: f64,
		/// Fraction of the offset covered per frame at full force.
		coefficient: f64,
	},
	/// Push particles away from the pointer along the unit direction.
	Repel {
		/// Pointer reach in pixels.
		radius: f64,
		/// Pixels moved per frame at full force.
		strength: f64,
	},
}

impl Interaction {
	/// Distance beyond which the pointer has no effect.
	pub fn radius(&self) -> f64 {
		match self {
			Interaction::Attract { radius, .. } | Interaction::Repel { radius, .. } => *radius,
		}
	}

	/// Falloff in [0, 1]: 1 at the pointer, 0 at the radius.
	pub fn force(&self, distance: f64) -> f64 {
		let radius = self.radius();
		(radius - distance) / radius
	}

	/// Positional nudge for a particle at `particle`, or `None` when the
	/// pointer is out of range.
	pub fn displacement(&self, particle: Point, pointer: Point) -> Option<(f64, f64)> {
		let (dx, dy) = (pointer.x - particle.x, pointer.y - particle.y);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance >= self.radius() {
			return None;
		}
		let force = self.force(distance);

		match self {
			Interaction::Attract { coefficient, .. } => {
				Some((dx * force * coefficient, dy * force * coefficient))
			}
			Interaction::Repel { strength, .. } => {
				if distance <= REPEL_EPSILON {
					return None;
				}
				let (ux, uy) = (dx / distance, dy / distance);
				Some((-ux * force * strength, -uy * force * strength))
			}
		}
	}
}

/// A half-open range `[min, max)` sampled with a unit draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
	/// Inclusive lower bound.
	pub min: f64,
	/// Exclusive upper bound.
	pub max: f64,
}

impl Span {
	/// Range from `min` to `max`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Map a unit draw in [0, 1) onto the span.
	pub fn sample(&self, unit: f64) -> f64 {
		self.min + unit * (self.max - self.min)
	}
}

/// Rank thresholds and radius ranges for each particle tier.
#[derive(Clone, Debug, PartialEq)]
pub struct TierConfig {
	/// Ranks strictly above this become hubs.
	pub hub_threshold: f64,
	/// Ranks strictly above this (and not hubs) become standard nodes.
	pub standard_threshold: f64,
	/// Radius range for hubs.
	pub hub_size: Span,
	/// Radius range for standard nodes.
	pub standard_size: Span,
	/// Radius range for data points.
	pub data_point_size: Span,
}

/// Data packets travelling along highlighted edges.
#[derive(Clone, Debug, PartialEq)]
pub struct PacketConfig {
	/// Chance per highlighted edge per frame of spawning a packet.
	pub spawn_probability: f64,
	/// Progress gained per frame.
	pub speed: Span,
}

impl PacketConfig {
	/// Spawn chance for a tick covering `frames` reference frames, so the
	/// packet rate per second does not depend on the display refresh rate.
	pub fn spawn_chance(&self, frames: f64) -> f64 {
		1.0 - (1.0 - self.spawn_probability).powf(frames.max(0.0))
	}
}

/// Complete set of tunables for one network variant.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
	/// Viewport area (px²) per particle.
	pub density_divisor: f64,
	/// Lower bound on the particle count.
	pub min_particles: usize,
	/// Upper bound on the particle count.
	pub max_particles: usize,
	/// Drift speed range; each velocity component is `(unit - 0.5) * speed`.
	pub speed: Span,
	/// Squared distance below which two particles are connected.
	pub connection_threshold_sq: f64,
	/// Pointer effect on nearby particles.
	pub interaction: Interaction,
	/// Only particles closer than this to the pointer can be focused.
	pub focus_radius: f64,
	/// Tier assignment and sizes.
	pub tiers: TierConfig,
	/// `None` disables packets entirely.
	pub packets: Option<PacketConfig>,
}

impl NetworkConfig {
	/// Attraction toward the pointer with packets on focused edges.
	pub fn query() -> Self {
		Self {
			density_divisor: 12000.0,
			min_particles: 40,
			max_particles: 120,
			speed: Span::new(0.05, 0.2),
			connection_threshold_sq: 15000.0,
			interaction: Interaction::Attract {
				radius: 150.0,
				coefficient: 0.01,
			},
			focus_radius: 100.0,
			tiers: TierConfig::default(),
			packets: Some(PacketConfig {
				spawn_probability: 0.04,
				speed: Span::new(0.015, 0.035),
			}),
		}
	}

	/// Repulsion from the pointer, more particles, no packets.
	pub fn drift() -> Self {
		Self {
			max_particles: 150,
			speed: Span::new(0.1, 0.5),
			interaction: Interaction::Repel {
				radius: 200.0,
				strength: 2.0,
			},
			packets: None,
			..Self::query()
		}
	}

	/// Preset for a host-selected [`Variant`].
	pub fn for_variant(variant: Variant) -> Self {
		match variant {
			Variant::Query => Self::query(),
			Variant::Drift => Self::drift(),
		}
	}

	/// `clamp(round(width * height / density_divisor), min, max)`.
	pub fn target_particle_count(&self, width: f64, height: f64) -> usize {
		let raw = (width.max(0.0) * height.max(0.0) / self.density_divisor).round();
		let raw = if raw.is_finite() { raw as usize } else { 0 };
		raw.clamp(self.min_particles, self.max_particles)
	}

	/// Edge length at which opacity reaches zero.
	pub fn connection_distance(&self) -> f64 {
		self.connection_threshold_sq.sqrt()
	}
}

impl Default for TierConfig {
	fn default() -> Self {
		Self {
			hub_threshold: 0.9,
			standard_threshold: 0.4,
			hub_size: Span::new(3.0, 5.0),
			standard_size: Span::new(1.5, 3.0),
			data_point_size: Span::new(1.0, 2.0),
		}
	}
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self::query()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn count_for_typical_desktop_viewport() {
		let config = NetworkConfig::query();
		assert_eq!(config.target_particle_count(1200.0, 800.0), 80);
	}

	#[test]
	fn count_is_clamped() {
		let query = NetworkConfig::query();
		assert_eq!(query.target_particle_count(320.0, 480.0), 40);
		assert_eq!(query.target_particle_count(0.0, 0.0), 40);
		assert_eq!(query.target_particle_count(3840.0, 2160.0), 120);

		let drift = NetworkConfig::drift();
		assert_eq!(drift.target_particle_count(3840.0, 2160.0), 150);
	}

	#[test]
	fn count_rounds_to_nearest() {
		let config = NetworkConfig::query();
		// 12000 * 60.5 = 726000
		assert_eq!(config.target_particle_count(726000.0, 1.0), 61);
		assert_eq!(config.target_particle_count(725000.0, 1.0), 60);
	}

	#[test]
	fn force_factor_scales_linearly() {
		let repel = Interaction::Repel {
			radius: 200.0,
			strength: 1.0,
		};
		assert_relative_eq!(repel.force(50.0), 0.75);
		assert_relative_eq!(repel.force(0.0), 1.0);
		assert_relative_eq!(repel.force(200.0), 0.0);
	}

	#[test]
	fn attraction_pulls_toward_pointer() {
		let attract = Interaction::Attract {
			radius: 200.0,
			coefficient: 0.01,
		};
		let (dx, dy) = attract
			.displacement(Point::new(100.0, 100.0), Point::new(150.0, 100.0))
			.unwrap();
		assert_relative_eq!(dx, 50.0 * 0.75 * 0.01);
		assert_relative_eq!(dy, 0.0);
	}

	#[test]
	fn repulsion_pushes_away_along_unit_direction() {
		let repel = Interaction::Repel {
			radius: 200.0,
			strength: 2.0,
		};
		let (dx, dy) = repel
			.displacement(Point::new(100.0, 100.0), Point::new(100.0, 150.0))
			.unwrap();
		assert_relative_eq!(dx, 0.0);
		assert_relative_eq!(dy, -0.75 * 2.0);
	}

	#[test]
	fn repulsion_at_pointer_is_guarded() {
		let repel = Interaction::Repel {
			radius: 200.0,
			strength: 2.0,
		};
		let p = Point::new(10.0, 10.0);
		assert_eq!(repel.displacement(p, p), None);
	}

	#[test]
	fn no_displacement_outside_radius() {
		let attract = NetworkConfig::query().interaction;
		assert_eq!(
			attract.displacement(Point::new(0.0, 0.0), Point::new(150.0, 0.0)),
			None
		);
		assert!(
			attract
				.displacement(Point::new(0.0, 0.0), Point::new(149.0, 0.0))
				.is_some()
		);
	}

	#[test]
	fn variants_differ_where_expected() {
		let (query, drift) = (NetworkConfig::query(), NetworkConfig::drift());
		assert!(query.packets.is_some());
		assert!(drift.packets.is_none());
		assert_eq!(drift.connection_threshold_sq, query.connection_threshold_sq);
		assert_eq!(NetworkConfig::for_variant(Variant::Drift), drift);
		assert_eq!(NetworkConfig::default(), query);
	}

	#[test]
	fn spawn_chance_compounds_over_partial_frames() {
		let packets = NetworkConfig::query().packets.unwrap();
		assert_relative_eq!(packets.spawn_chance(1.0), 0.04);
		assert_relative_eq!(packets.spawn_chance(0.0), 0.0);

		// Two half frames without a spawn are as likely as one full frame without one.
		let half = packets.spawn_chance(0.5);
		assert_relative_eq!((1.0 - half) * (1.0 - half), 0.96, epsilon = 1e-12);
	}

	#[test]
	fn span_sampling() {
		let span = Span::new(1.5, 3.0);
		assert_relative_eq!(span.sample(0.0), 1.5);
		assert_relative_eq!(span.sample(0.5), 2.25);
	}
}
