//! Network simulation state and per-frame scene construction.
//!
//! [`NetworkState::tick`] runs one frame of the animation without touching the
//! DOM: particles drift and bounce, the pointer nudges nearby particles, the
//! particle nearest the pointer becomes focused, and every close pair is
//! connected. The result is a [`Scene`] the renderer draws in order (edges,
//! packets, nodes).

use super::config::NetworkConfig;
use super::packets::{self, Packet};
use super::particles::{Particle, Tier};
use super::random::RandomSource;
use super::types::Point;

/// Reference frame rate the per-frame tunables are expressed in.
pub const FRAMES_PER_SECOND: f64 = 60.0;

/// Upper bound on frames simulated by one tick, so a backgrounded tab does
/// not teleport particles when it resumes.
pub const MAX_FRAME_STEPS: f64 = 6.0;

/// Opacity multipliers for edges, depending on focus.
const EDGE_IDLE_ALPHA: f64 = 0.3;
const EDGE_HIGHLIGHT_ALPHA: f64 = 0.9;
const EDGE_DIMMED_ALPHA: f64 = 0.1;

/// One connection to draw this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeSegment {
	/// Endpoint at the lower-indexed particle.
	pub from: Point,
	/// Endpoint at the higher-indexed particle.
	pub to: Point,
	/// Stroke alpha in `(0, 1)`.
	pub opacity: f64,
	/// Touches the focused particle.
	pub highlighted: bool,
}

/// How a particle is drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
	/// Nearest particle to the pointer.
	Focused,
	/// Neighbor of the focused particle.
	Connected,
	/// Drawn with its tier color.
	Idle(Tier),
}

/// One particle to draw this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeMark {
	/// Center.
	pub at: Point,
	/// Radius.
	pub size: f64,
	/// Fill and glow selection.
	pub emphasis: Emphasis,
}

/// Everything the renderer needs for one frame, in draw order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
	/// Connections, drawn first.
	pub edges: Vec<EdgeSegment>,
	/// Packet positions, drawn over edges.
	pub packets: Vec<Point>,
	/// One mark per particle, drawn last.
	pub nodes: Vec<NodeMark>,
	/// Index of the focused particle.
	pub focused: Option<usize>,
}

impl Scene {
	fn clear(&mut self) {
		self.edges.clear();
		self.packets.clear();
		self.nodes.clear();
		self.focused = None;
	}
}

/// Owns every piece of mutable animation state.
///
/// Created when the canvas is attached and regenerated via [`reset`](Self::reset)
/// whenever the canvas is resized.
pub struct NetworkState<R: RandomSource> {
	config: NetworkConfig,
	rng: R,
	width: f64,
	height: f64,
	particles: Vec<Particle>,
	packets: Vec<Packet>,
	pointer: Option<Point>,
	scene: Scene,
}

impl<R: RandomSource> NetworkState<R> {
	/// Populate a `width × height` viewport from `config`.
	pub fn new(config: NetworkConfig, rng: R, width: f64, height: f64) -> Self {
		let mut state = Self {
			config,
			rng,
			width,
			height,
			particles: Vec::new(),
			packets: Vec::new(),
			pointer: None,
			scene: Scene::default(),
		};
		state.reset(width, height);
		state
	}

	/// Discard every particle and packet and repopulate for a new viewport.
	pub fn reset(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;

		let count = self.config.target_particle_count(width, height);
		self.particles.clear();
		self.particles.reserve(count);
		for id in 0..count {
			let particle = Particle::spawn(id, width, height, &self.config, &mut self.rng);
			self.particles.push(particle);
		}
		self.packets.clear();
		self.scene.clear();
	}

	/// Record the pointer in canvas-local coordinates.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some(Point::new(x, y));
	}

	/// Forget the pointer, e.g. when it leaves the tracked element.
	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Last recorded pointer position.
	pub fn pointer(&self) -> Option<Point> {
		self.pointer
	}

	/// Every live particle, indexed by id.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	#[cfg(test)]
	pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
		&mut self.particles
	}

	/// Packets still in flight.
	pub fn packets(&self) -> &[Packet] {
		&self.packets
	}

	/// Viewport size the particles were spawned for.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// The particle focused during the last tick.
	pub fn focused(&self) -> Option<usize> {
		self.scene.focused
	}

	/// Scene built by the last tick.
	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	/// Advance the animation by `dt` seconds and rebuild the scene.
	pub fn tick(&mut self, dt: f64) -> &Scene {
		let frames = (dt * FRAMES_PER_SECOND).clamp(0.0, MAX_FRAME_STEPS);
		self.scene.clear();

		self.move_particles(frames);
		let focused = self.find_focus();
		self.scene.focused = focused;
		self.connect(focused, frames);
		self.update_packets(frames);
		self.emit_nodes(focused);

		&self.scene
	}

	fn move_particles(&mut self, frames: f64) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.drift(frames, width, height);
			if let Some(pointer) = self.pointer {
				p.nudge(frames, &self.config.interaction, pointer);
			}
		}
	}

	fn find_focus(&self) -> Option<usize> {
		let pointer = self.pointer?;
		let mut best: Option<(usize, f64)> = None;
		for (i, p) in self.particles.iter().enumerate() {
			let dist = p.position().distance(pointer);
			if dist < self.config.focus_radius && best.is_none_or(|(_, d)| dist < d) {
				best = Some((i, dist));
			}
		}
		best.map(|(i, _)| i)
	}

	fn connect(&mut self, focused: Option<usize>, frames: f64) {
		for p in &mut self.particles {
			p.neighbors.clear();
		}

		let threshold_sq = self.config.connection_threshold_sq;
		let max_distance = self.config.connection_distance();
		let packet_config = self.config.packets.as_ref();
		let spawn_chance = packet_config.map_or(0.0, |pc| pc.spawn_chance(frames));

		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let (a, b) = (self.particles[i].position(), self.particles[j].position());
				let distance_sq = a.distance_sq(b);
				if distance_sq >= threshold_sq {
					continue;
				}

				self.particles[i].neighbors.push(j);
				self.particles[j].neighbors.push(i);

				let highlighted = focused.is_some_and(|f| f == i || f == j);
				let base = 1.0 - distance_sq.sqrt() / max_distance;
				let opacity = match (focused, highlighted) {
					(None, _) => base * EDGE_IDLE_ALPHA,
					(Some(_), true) => base * EDGE_HIGHLIGHT_ALPHA,
					(Some(_), false) => base * EDGE_DIMMED_ALPHA,
				};

				if let Some(pc) = packet_config.filter(|_| highlighted) {
					if self.rng.unit() < spawn_chance {
						// Flow outward from the focused particle.
						let (start, target) = if focused == Some(i) { (a, b) } else { (b, a) };
						let speed = pc.speed.sample(self.rng.unit());
						self.packets.push(Packet::new(start, target, speed));
					}
				}

				self.scene.edges.push(EdgeSegment {
					from: a,
					to: b,
					opacity,
					highlighted,
				});
			}
		}
	}

	fn update_packets(&mut self, frames: f64) {
		packets::advance_all(&mut self.packets, frames);
		self.scene
			.packets
			.extend(self.packets.iter().map(Packet::position));
	}

	fn emit_nodes(&mut self, focused: Option<usize>) {
		let connected: &[usize] = focused
			.map(|f| self.particles[f].neighbors.as_slice())
			.unwrap_or(&[]);

		for (i, p) in self.particles.iter().enumerate() {
			let emphasis = if focused == Some(i) {
				Emphasis::Focused
			} else if connected.contains(&i) {
				Emphasis::Connected
			} else {
				Emphasis::Idle(p.tier)
			};
			self.scene.nodes.push(NodeMark {
				at: p.position(),
				size: p.size,
				emphasis,
			});
		}
	}
}
