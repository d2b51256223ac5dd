//! Plain data structures shared across the network modules, plus host options
//! read from the page.

use serde::Deserialize;

/// A position in canvas-local CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the canvas's left edge.
	pub x: f64,
	/// Vertical offset from the canvas's top edge.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Squared Euclidean distance, for threshold comparisons.
	pub fn distance_sq(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		dx * dx + dy * dy
	}

	/// Euclidean distance.
	pub fn distance(self, other: Point) -> f64 {
		self.distance_sq(other).sqrt()
	}

	/// Linear interpolation from `self` (t = 0) to `other` (t = 1).
	pub fn lerp(self, other: Point, t: f64) -> Point {
		Point {
			x: self.x + (other.x - self.x) * t,
			y: self.y + (other.y - self.y) * t,
		}
	}
}

/// Named bundles of tunables. See [`NetworkConfig::for_variant`](super::config::NetworkConfig::for_variant).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
	/// Pointer gently attracts particles and packets flow along focused edges.
	#[default]
	Query,
	/// Pointer pushes particles away; denser, faster, no packets.
	Drift,
}

/// Host-supplied options, read from a JSON script element in the page.
///
/// ```json
/// { "variant": "drift", "seed": 42, "pointer_scope": ".hero" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroOptions {
	/// Tunable preset to run.
	pub variant: Variant,
	/// Fixed seed for reproducible layouts. Random per page load when absent.
	pub seed: Option<u64>,
	/// CSS selector for the element whose pointer movement is tracked.
	pub pointer_scope: Option<String>,
}

impl HeroOptions {
	/// Selector used when the options leave `pointer_scope` unset.
	pub const DEFAULT_POINTER_SCOPE: &'static str = ".hero";

	/// Pointer scope selector, or [`Self::DEFAULT_POINTER_SCOPE`].
	pub fn pointer_scope(&self) -> &str {
		self.pointer_scope
			.as_deref()
			.unwrap_or(Self::DEFAULT_POINTER_SCOPE)
	}

	/// Parse options from the script element's JSON text.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		let options = HeroOptions::from_json("{}").unwrap();
		assert_eq!(options, HeroOptions::default());
		assert_eq!(options.variant, Variant::Query);
		assert_eq!(options.pointer_scope(), ".hero");
	}

	#[test]
	fn parses_variant_and_seed() {
		let options =
			HeroOptions::from_json(r##"{ "variant": "drift", "seed": 7, "pointer_scope": "#top" }"##)
				.unwrap();
		assert_eq!(options.variant, Variant::Drift);
		assert_eq!(options.seed, Some(7));
		assert_eq!(options.pointer_scope(), "#top");
	}

	#[test]
	fn rejects_unknown_variant() {
		assert!(HeroOptions::from_json(r#"{ "variant": "swarm" }"#).is_err());
		assert!(HeroOptions::from_json("not json").is_err());
	}

	#[test]
	fn lerp_hits_endpoints() {
		let (a, b) = (Point::new(0.0, 10.0), Point::new(20.0, 30.0));
		assert_eq!(a.lerp(b, 0.0), a);
		assert_eq!(a.lerp(b, 1.0), b);
		assert_eq!(a.lerp(b, 0.5), Point::new(10.0, 20.0));
		assert_eq!(a.distance_sq(b), 800.0);
	}
}
