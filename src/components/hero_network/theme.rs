//! Visual theming for the particle network.
//!
//! Colors for each particle tier, edges, packets, and the focus highlight.

use super::particles::Tier;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, replaced alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string: hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill plus optional shadow glow for a node or packet.
#[derive(Clone, Debug)]
pub struct Glow {
	/// Fill color.
	pub fill: Color,
	/// Shadow color.
	pub shadow: Color,
	/// Shadow blur in pixels (0 = no glow).
	pub blur: f64,
}

/// Base colors for idle particles, by tier.
#[derive(Clone, Debug)]
pub struct TierColors {
	/// Hub fill.
	pub hub: Color,
	/// Standard fill.
	pub standard: Color,
	/// Data point fill.
	pub data_point: Color,
}

impl TierColors {
	/// Fill for `tier`.
	pub fn get(&self, tier: Tier) -> Color {
		match tier {
			Tier::Hub => self.hub,
			Tier::Standard => self.standard,
			Tier::DataPoint => self.data_point,
		}
	}
}

/// Edge stroke style. Alpha comes from the per-edge opacity.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Stroke for ordinary edges.
	pub color: Color,
	/// Stroke for edges touching the focused particle.
	pub highlight_color: Color,
	/// Line width for ordinary edges.
	pub width: f64,
	/// Line width for highlighted edges.
	pub highlight_width: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Idle particle fills.
	pub tiers: TierColors,
	/// Edge strokes.
	pub edge: EdgeStyle,
	/// Focused particle.
	pub focused: Glow,
	/// Neighbors of the focused particle.
	pub connected: Glow,
	/// Packets in flight.
	pub packet: Glow,
	/// Packet dot radius.
	pub packet_radius: f64,
}

impl Theme {
	/// Green accent palette used on the home page hero.
	pub fn accent() -> Self {
		Self {
			tiers: TierColors {
				hub: Color::rgba(74, 222, 128, 0.9),
				standard: Color::rgba(45, 134, 89, 0.7),
				data_point: Color::rgba(212, 244, 221, 0.4),
			},
			edge: EdgeStyle {
				color: Color::rgb(45, 134, 89),
				highlight_color: Color::rgb(74, 222, 128),
				width: 0.8,
				highlight_width: 1.5,
			},
			focused: Glow {
				fill: Color::rgb(255, 255, 255),
				shadow: Color::rgb(74, 222, 128),
				blur: 15.0,
			},
			connected: Glow {
				fill: Color::rgba(74, 222, 128, 0.9),
				shadow: Color::rgba(45, 134, 89, 0.8),
				blur: 10.0,
			},
			packet: Glow {
				fill: Color::rgb(255, 255, 255),
				shadow: Color::rgb(74, 222, 128),
				blur: 8.0,
			},
			packet_radius: 1.5,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::accent()
	}
}
