//! Viewport classification behind a swappable probe.
//!
//! The layout never measures anything itself; it is handed a
//! [`ViewportClass`]. Production code asks the browser window, tests use
//! [`FixedViewport`].

use wasm_bindgen::JsValue;

use super::layout::{DEFAULT_BREAKPOINT, ViewportClass};

/// Source of the current breakpoint classification.
pub trait ViewportProbe {
	fn viewport_class(&self) -> ViewportClass;
}

/// Always reports the same class.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedViewport(pub ViewportClass);

impl ViewportProbe for FixedViewport {
	fn viewport_class(&self) -> ViewportClass {
		self.0
	}
}

/// Reads `window.innerWidth`. Reports [`ViewportClass::Wide`] when there is no
/// window to ask.
#[derive(Clone, Copy, Debug)]
pub struct WindowViewport {
	pub breakpoint: f64,
}

impl Default for WindowViewport {
	fn default() -> Self {
		Self {
			breakpoint: DEFAULT_BREAKPOINT,
		}
	}
}

impl WindowViewport {
	fn inner_width() -> Option<f64> {
		let width: JsValue = web_sys::window()?.inner_width().ok()?;
		width.as_f64()
	}
}

impl ViewportProbe for WindowViewport {
	fn viewport_class(&self) -> ViewportClass {
		Self::inner_width()
			.map(|w| ViewportClass::from_width(w, self.breakpoint))
			.unwrap_or_default()
	}
}
