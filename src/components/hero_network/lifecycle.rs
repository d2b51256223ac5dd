//! Frame-loop bookkeeping, independent of the browser.
//!
//! [`Lifecycle`] tracks whether the animation is running, which frame request
//! is outstanding, and which debounced resize is pending. The host's timers
//! sit behind [`Scheduler`], so start/stop/resize sequencing is tested
//! natively.

use std::cell::Cell;

/// Quiet period after the last `resize` event before the network is rebuilt.
pub const RESIZE_DEBOUNCE_MS: i32 = 100;

/// Host timer primitives. Ids are opaque handles returned by the host.
pub trait Scheduler {
	/// Ask for the frame callback to run before the next repaint.
	fn request_frame(&self) -> Option<i32>;
	/// Withdraw a frame request. Ids that already ran are ignored.
	fn cancel_frame(&self, id: i32);
	/// Arm the resize callback to run after `delay_ms`.
	fn set_timeout(&self, delay_ms: i32) -> Option<i32>;
	/// Disarm a resize timer. Ids that already fired are ignored.
	fn clear_timeout(&self, id: i32);
}

/// Running flag plus at most one pending frame and one pending resize.
///
/// Dropping a lifecycle stops it, so nothing it scheduled outlives it.
pub struct Lifecycle<S: Scheduler> {
	scheduler: S,
	running: Cell<bool>,
	frame_id: Cell<Option<i32>>,
	resize_timer: Cell<Option<i32>>,
}

impl<S: Scheduler> Lifecycle<S> {
	/// A stopped lifecycle that schedules through `scheduler`.
	pub fn new(scheduler: S) -> Self {
		Self {
			scheduler,
			running: Cell::new(false),
			frame_id: Cell::new(None),
			resize_timer: Cell::new(None),
		}
	}

	/// The host scheduler.
	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	/// Whether a frame loop is active.
	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Schedule the first frame. Returns `false`, doing nothing, when already running.
	pub fn start(&self) -> bool {
		if self.running.replace(true) {
			return false;
		}
		self.request_frame();
		true
	}

	/// Cancel the pending frame and resize. Returns whether it was running.
	pub fn stop(&self) -> bool {
		let was_running = self.running.replace(false);
		if let Some(id) = self.frame_id.take() {
			self.scheduler.cancel_frame(id);
		}
		if let Some(id) = self.resize_timer.take() {
			self.scheduler.clear_timeout(id);
		}
		was_running
	}

	/// Called when a frame callback fires. Returns whether to simulate and draw.
	pub fn begin_frame(&self) -> bool {
		self.frame_id.set(None);
		self.running.get()
	}

	/// Called after drawing; requests the next frame while running.
	pub fn end_frame(&self) {
		if self.running.get() && self.frame_id.get().is_none() {
			self.request_frame();
		}
	}

	/// A `resize` event arrived: restart the debounce window.
	pub fn resize_requested(&self) {
		if let Some(id) = self.resize_timer.take() {
			self.scheduler.clear_timeout(id);
		}
		if self.running.get() {
			self.resize_timer
				.set(self.scheduler.set_timeout(RESIZE_DEBOUNCE_MS));
		}
	}

	/// The debounce timer fired. Returns whether a rebuild is due.
	pub fn resize_fired(&self) -> bool {
		self.resize_timer.take().is_some() && self.running.get()
	}

	fn request_frame(&self) {
		self.frame_id.set(self.scheduler.request_frame());
	}
}

impl<S: Scheduler> Drop for Lifecycle<S> {
	fn drop(&mut self) {
		self.stop();
	}
}
