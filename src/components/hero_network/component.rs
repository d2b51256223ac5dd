//! Leptos component wrapping the particle network canvas.
//!
//! The component renders a `<canvas>` and, once it is in the DOM, attaches a
//! [`NetworkAnimation`] to it. The animation lives as long as the component's
//! effect; dropping it removes every listener and cancels the frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use web_sys::HtmlCanvasElement;

use super::driver::NetworkAnimation;
use super::types::HeroOptions;

/// Renders the animated particle network, sized to its parent element.
///
/// Pointer movement is tracked over the closest ancestor matching
/// `options.pointer_scope` (default `.hero`), falling back to the parent.
#[component]
pub fn NetworkCanvas(
	/// Variant, seed and pointer scope.
	#[prop(default = HeroOptions::default())]
	options: HeroOptions,
	/// Element id of the rendered canvas.
	#[prop(default = "hero-network")]
	id: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animation: Rc<RefCell<Option<NetworkAnimation>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animation.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		match NetworkAnimation::attach(canvas, &options) {
			Ok(anim) => {
				anim.start();
				*animation.borrow_mut() = Some(anim);
			}
			Err(e) if e.is_missing_anchor() => debug!("hero-network: not mounted: {e}"),
			Err(e) => warn!("hero-network: failed to mount: {e}"),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id=id
			class="hero-network"
			aria-hidden="true"
			style="display: block; position: absolute; inset: 0;"
		/>
	}
}
