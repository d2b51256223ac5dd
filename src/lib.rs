//! hero-network: animated particle network for the consultancy site hero.
//!
//! This crate provides a WASM-based canvas animation that renders a drifting,
//! pointer-reactive network of particles. Pages can either call
//! `initNetworkAnimation()` from JS to attach to an existing `#hero-network`
//! canvas, or mount the Leptos [`App`].

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::hero_network::{
	HeroOptions, MountError, NetworkAnimation, NetworkCanvas, NetworkState, Variant,
};

/// Id of the canvas element the JS entry point attaches to.
pub const CANVAS_ID: &str = "hero-network";

/// Id of the optional JSON script element holding [`HeroOptions`].
pub const OPTIONS_ID: &str = "hero-network-options";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hero-network: logging initialized");
}

/// Load host options from a script element with id="hero-network-options".
/// Falls back to defaults when the element is missing or malformed.
fn load_options() -> HeroOptions {
	let Some(text) = options_text() else {
		return HeroOptions::default();
	};

	match HeroOptions::from_json(&text) {
		Ok(options) => {
			info!("hero-network: loaded options ({:?})", options.variant);
			options
		}
		Err(e) => {
			warn!("hero-network: failed to parse options: {}", e);
			HeroOptions::default()
		}
	}
}

fn options_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(OPTIONS_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// JS-owned handle to a mounted animation.
#[wasm_bindgen]
pub struct HeroNetwork {
	animation: NetworkAnimation,
}

#[wasm_bindgen]
impl HeroNetwork {
	/// Resume the frame loop and reattach listeners. No-op while running.
	pub fn start(&self) {
		self.animation.start();
	}

	/// Stop the frame loop and detach listeners. Safe to call repeatedly.
	pub fn stop(&self) {
		self.animation.stop();
	}

	/// Whether a frame loop is currently scheduled.
	#[wasm_bindgen(js_name = isRunning)]
	pub fn is_running(&self) -> bool {
		self.animation.is_running()
	}
}

/// Attach the animation to `#hero-network` and start it.
///
/// Returns `undefined` when the page has no such canvas (or it has no parent).
#[wasm_bindgen(js_name = initNetworkAnimation)]
pub fn init_network_animation() -> Option<HeroNetwork> {
	let options = load_options();
	match NetworkAnimation::mount(CANVAS_ID, &options) {
		Ok(animation) => {
			animation.start();
			Some(HeroNetwork { animation })
		}
		Err(e) if e.is_missing_anchor() => {
			debug!("hero-network: not mounted: {}", e);
			None
		}
		Err(e) => {
			warn!("hero-network: failed to mount: {}", e);
			None
		}
	}
}

/// Main application component.
/// Renders the hero section hosting the particle network.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = load_options();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Hero Network" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero" style="position: relative; min-height: 100vh; overflow: hidden;">
			<NetworkCanvas options=options />
			<div class="hero-overlay">
				<h1>"Connected data, circular materials"</h1>
				<p class="subtitle">"Move the pointer over the network to inspect a node and its connections."</p>
			</div>
		</section>
	}
}
