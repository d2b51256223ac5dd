//! Reasons the animation could not attach to the page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure to bind a [`NetworkAnimation`](super::NetworkAnimation) to a canvas.
#[derive(Debug, Error)]
pub enum MountError {
	/// Not running in a browser window.
	#[error("no global window")]
	NoWindow,
	/// Window without a document.
	#[error("window has no document")]
	NoDocument,
	/// No element carries the requested id.
	#[error("no element with id `{0}`")]
	CanvasNotFound(String),
	/// The element exists but is not a `<canvas>`.
	#[error("element `{0}` is not a canvas")]
	NotACanvas(String),
	/// Canvas is detached, so there is nothing to size against.
	#[error("canvas has no parent element")]
	NoParent,
	/// `getContext("2d")` returned nothing.
	#[error("2d rendering context unavailable")]
	NoContext,
	/// A DOM call threw.
	#[error("DOM call failed: {0}")]
	Dom(String),
}

impl MountError {
	/// The page simply does not host the animation; not worth a warning.
	pub fn is_missing_anchor(&self) -> bool {
		matches!(
			self,
			MountError::CanvasNotFound(_) | MountError::NoParent | MountError::NoWindow | MountError::NoDocument
		)
	}
}

impl From<JsValue> for MountError {
	fn from(value: JsValue) -> Self {
		MountError::Dom(format!("{value:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_anchors_are_quiet() {
		assert!(MountError::CanvasNotFound("hero-network".into()).is_missing_anchor());
		assert!(MountError::NoParent.is_missing_anchor());
		assert!(!MountError::NoContext.is_missing_anchor());
		assert!(!MountError::Dom("boom".into()).is_missing_anchor());
	}

	#[test]
	fn messages_name_the_anchor() {
		let err = MountError::CanvasNotFound("hero-network".into());
		assert_eq!(err.to_string(), "no element with id `hero-network`");
	}
}
