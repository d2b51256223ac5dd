//! Browser driver: sizes the canvas, wires DOM events, and runs the frame loop.
//!
//! A [`NetworkAnimation`] owns everything it registers with the page. Listeners
//! and the pending `requestAnimationFrame` are released by [`stop`](NetworkAnimation::stop)
//! or when the handle is dropped.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use super::config::NetworkConfig;
use super::error::MountError;
use super::lifecycle::{Lifecycle, Scheduler};
use super::random::SeededRandom;
use super::render;
use super::state::{FRAMES_PER_SECOND, NetworkState};
use super::theme::Theme;
use super::types::HeroOptions;

/// Canvas element plus its context, sized in CSS pixels.
struct Surface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl Surface {
	/// Match the parent's layout size, with a backing store scaled for the
	/// device pixel ratio so strokes stay crisp.
	fn fit(&mut self, window: &Window) -> Result<(), MountError> {
		let parent = self.canvas.parent_element().ok_or(MountError::NoParent)?;
		let (w, h) = match parent.dyn_ref::<HtmlElement>() {
			Some(el) => (el.offset_width() as f64, el.offset_height() as f64),
			None => (parent.client_width() as f64, parent.client_height() as f64),
		};
		let dpr = match window.device_pixel_ratio() {
			dpr if dpr > 0.0 => dpr,
			_ => 1.0,
		};

		self.canvas.set_width((w * dpr) as u32);
		self.canvas.set_height((h * dpr) as u32);
		let style = self.canvas.style();
		style.set_property("width", &format!("{w}px"))?;
		style.set_property("height", &format!("{h}px"))?;
		self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;

		self.width = w;
		self.height = h;
		Ok(())
	}
}

/// Mutable state shared between the frame loop and event handlers.
struct Runtime {
	state: NetworkState<SeededRandom>,
	surface: Surface,
	theme: Theme,
	last_timestamp: Option<f64>,
}

impl Runtime {
	fn frame(&mut self, timestamp: f64) {
		let dt = match self.last_timestamp.replace(timestamp) {
			Some(prev) => (timestamp - prev) / 1000.0,
			None => 1.0 / FRAMES_PER_SECOND,
		};
		let scene = self.state.tick(dt);
		render::render(scene, &self.surface.ctx, &self.theme, self.surface.width, self.surface.height);
	}

	fn resize(&mut self, window: &Window) {
		if let Err(e) = self.surface.fit(window) {
			debug!("hero-network: resize skipped: {e}");
			return;
		}
		self.state.reset(self.surface.width, self.surface.height);
		debug!(
			"hero-network: resized to {}x{}, {} particles",
			self.surface.width,
			self.surface.height,
			self.state.particles().len()
		);
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type TimerCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`Scheduler`] over `requestAnimationFrame` and `setTimeout`.
///
/// The callbacks are filled in after the [`Lifecycle`] exists, since they
/// capture it.
#[derive(Clone)]
struct BrowserScheduler {
	window: Window,
	frame: FrameCallback,
	resize: TimerCallback,
}

impl BrowserScheduler {
	/// Drop both callbacks; each holds a handle back to the lifecycle.
	fn release(&self) {
		self.frame.borrow_mut().take();
		self.resize.borrow_mut().take();
	}
}

impl Scheduler for BrowserScheduler {
	fn request_frame(&self) -> Option<i32> {
		let cb = self.frame.borrow();
		let cb = cb.as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&self, id: i32) {
		let _ = self.window.cancel_animation_frame(id);
	}

	fn set_timeout(&self, delay_ms: i32) -> Option<i32> {
		let cb = self.resize.borrow();
		let cb = cb.as_ref()?;
		self.window
			.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay_ms)
			.ok()
	}

	fn clear_timeout(&self, id: i32) {
		self.window.clear_timeout_with_handle(id);
	}
}

/// A running (or stopped) particle network bound to one canvas.
pub struct NetworkAnimation {
	window: Window,
	pointer_scope: Element,
	runtime: Rc<RefCell<Runtime>>,
	lifecycle: Rc<Lifecycle<BrowserScheduler>>,
	on_resize: Closure<dyn FnMut()>,
	on_pointer_move: Closure<dyn FnMut(MouseEvent)>,
	on_pointer_leave: Closure<dyn FnMut(MouseEvent)>,
}

impl NetworkAnimation {
	/// Attach to the canvas with the given id in the current document.
	pub fn mount(canvas_id: &str, options: &HeroOptions) -> Result<Self, MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		let element = document
			.get_element_by_id(canvas_id)
			.ok_or_else(|| MountError::CanvasNotFound(canvas_id.to_string()))?;
		let canvas: HtmlCanvasElement = element
			.dyn_into()
			.map_err(|_| MountError::NotACanvas(canvas_id.to_string()))?;
		Self::attach(canvas, options)
	}

	/// Attach to a canvas element the caller already holds. The animation is
	/// created stopped; call [`start`](Self::start).
	pub fn attach(canvas: HtmlCanvasElement, options: &HeroOptions) -> Result<Self, MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let parent = canvas.parent_element().ok_or(MountError::NoParent)?;
		let pointer_scope = canvas
			.closest(options.pointer_scope())
			.ok()
			.flatten()
			.unwrap_or(parent);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(MountError::NoContext)?
			.dyn_into()
			.map_err(|_| MountError::NoContext)?;

		let mut surface = Surface {
			canvas,
			ctx,
			width: 0.0,
			height: 0.0,
		};
		surface.fit(&window)?;

		let rng = options
			.seed
			.map(SeededRandom::new)
			.unwrap_or_else(SeededRandom::from_entropy);
		let state = NetworkState::new(
			NetworkConfig::for_variant(options.variant),
			rng,
			surface.width,
			surface.height,
		);
		info!(
			"hero-network: attached {}x{} ({:?}), {} particles",
			surface.width,
			surface.height,
			options.variant,
			state.particles().len()
		);

		let runtime = Rc::new(RefCell::new(Runtime {
			state,
			surface,
			theme: Theme::default(),
			last_timestamp: None,
		}));

		let scheduler = BrowserScheduler {
			window: window.clone(),
			frame: Rc::new(RefCell::new(None)),
			resize: Rc::new(RefCell::new(None)),
		};
		let lifecycle = Rc::new(Lifecycle::new(scheduler.clone()));

		let (runtime_frame, lifecycle_frame) = (runtime.clone(), lifecycle.clone());
		*scheduler.frame.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			if !lifecycle_frame.begin_frame() {
				return;
			}
			runtime_frame.borrow_mut().frame(timestamp);
			lifecycle_frame.end_frame();
		}));

		let (runtime_fire, lifecycle_fire, window_fire) =
			(runtime.clone(), lifecycle.clone(), window.clone());
		*scheduler.resize.borrow_mut() = Some(Closure::new(move || {
			if lifecycle_fire.resize_fired() {
				runtime_fire.borrow_mut().resize(&window_fire);
			}
		}));

		let lifecycle_resize = lifecycle.clone();
		let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
			lifecycle_resize.resize_requested();
		});

		let runtime_move = runtime.clone();
		let on_pointer_move: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
			let mut rt = runtime_move.borrow_mut();
			let rect = rt.surface.canvas.get_bounding_client_rect();
			rt.state.set_pointer(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
		});

		let runtime_leave = runtime.clone();
		let on_pointer_leave: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |_: MouseEvent| {
			runtime_leave.borrow_mut().state.clear_pointer();
		});

		Ok(Self {
			window,
			pointer_scope,
			runtime,
			lifecycle,
			on_resize,
			on_pointer_move,
			on_pointer_leave,
		})
	}

	/// Register listeners and schedule the first frame. No-op while running.
	pub fn start(&self) {
		if !self.lifecycle.start() {
			return;
		}
		self.runtime.borrow_mut().last_timestamp = None;

		let _ = self
			.window
			.add_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		let _ = self.pointer_scope.add_event_listener_with_callback(
			"mousemove",
			self.on_pointer_move.as_ref().unchecked_ref(),
		);
		let _ = self.pointer_scope.add_event_listener_with_callback(
			"mouseleave",
			self.on_pointer_leave.as_ref().unchecked_ref(),
		);
	}

	/// Remove listeners, drop any pending resize, and cancel the pending frame.
	/// Safe to call repeatedly.
	pub fn stop(&self) {
		if !self.lifecycle.stop() {
			return;
		}

		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
		let _ = self.pointer_scope.remove_event_listener_with_callback(
			"mousemove",
			self.on_pointer_move.as_ref().unchecked_ref(),
		);
		let _ = self.pointer_scope.remove_event_listener_with_callback(
			"mouseleave",
			self.on_pointer_leave.as_ref().unchecked_ref(),
		);
		self.runtime.borrow_mut().state.clear_pointer();
		debug!("hero-network: stopped");
	}

	/// Whether a frame loop is currently scheduled.
	pub fn is_running(&self) -> bool {
		self.lifecycle.is_running()
	}
}

impl Drop for NetworkAnimation {
	fn drop(&mut self) {
		self.stop();
		self.lifecycle.scheduler().release();
	}
}
