//! Canvas rendering for the particle network.
//!
//! Draws a [`Scene`] in three passes so nodes sit on top:
//! 1. Edges
//! 2. Packets
//! 3. Nodes (idle, connected, focused)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{Emphasis, NodeMark, Scene};
use super::theme::{Glow, Theme};
use super::types::Point;

/// Renders one frame. `width`/`height` are CSS pixels.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);

	draw_edges(scene, ctx, theme);
	draw_packets(scene, ctx, theme);
	draw_nodes(scene, ctx, theme);
}

fn draw_edges(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.edge;
	for edge in &scene.edges {
		let (color, width) = if edge.highlighted {
			(style.highlight_color, style.highlight_width)
		} else {
			(style.color, style.width)
		};
		ctx.set_stroke_style_str(&color.with_alpha(edge.opacity).to_css());
		ctx.set_line_width(width);

		ctx.begin_path();
		ctx.move_to(edge.from.x, edge.from.y);
		ctx.line_to(edge.to.x, edge.to.y);
		ctx.stroke();
	}
}

fn draw_packets(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for &at in &scene.packets {
		draw_dot(ctx, at, theme.packet_radius, &theme.packet);
	}
}

fn draw_nodes(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	for NodeMark { at, size, emphasis } in &scene.nodes {
		match emphasis {
			Emphasis::Focused => draw_dot(ctx, *at, *size, &theme.focused),
			Emphasis::Connected => draw_dot(ctx, *at, *size, &theme.connected),
			Emphasis::Idle(tier) => {
				ctx.begin_path();
				let _ = ctx.arc(at.x, at.y, *size, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(&theme.tiers.get(*tier).to_css());
				ctx.fill();
			}
		}
	}
}

fn draw_dot(ctx: &CanvasRenderingContext2d, at: Point, radius: f64, glow: &Glow) {
	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&glow.fill.to_css());
	if glow.blur > 0.0 {
		ctx.set_shadow_blur(glow.blur);
		ctx.set_shadow_color(&glow.shadow.to_css());
	}
	ctx.fill();
	ctx.set_shadow_blur(0.0);
}
