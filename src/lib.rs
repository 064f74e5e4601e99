//! # Sabor & Alma
//!
//! Client-side behavior of the Sabor & Alma restaurant website, compiled to
//! WebAssembly and loaded by the static pages.
//!
//! ## What the page does
//!
//! - The navbar switches to its compact style once the visitor scrolls past
//!   100px, and a scroll-to-top control appears past 300px
//! - The nav link of the section in view is highlighted
//! - The mobile menu toggles open and closed; following a link closes it
//! - In-page anchors scroll smoothly, stopping 80px above the target to clear
//!   the fixed navbar
//! - Marked elements fade in the first time they scroll into view
//! - The reservation form validates each field on blur, re-validates flagged
//!   fields while they are corrected, and hands a valid reservation to the
//!   configured delivery backend
//!
//! ## Configuration
//!
//! Defaults match the published site. A page may override them with a JSON
//! document in `<script type="application/json" id="site-settings">`; see
//! [`pages::SiteSettings`].
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` (default) - readable panic messages in the
//!   browser console
//!
//! ## Crates
//!
//! - [`forms`] - field keys, validators and the reservation payload
//! - [`mail`] - delivery backends
//! - [`pages`] - the page controller and its DOM bindings

pub mod forms;
pub mod mail;
pub mod pages;

pub use sabor_forms::{ReservationField, ReservationRequest, ValidatorTable};
pub use sabor_mail::{DeliveryError, DeliverySettings, ReservationBackend};
pub use sabor_pages::{PageController, PageError, SiteSettings, SubmitOutcome};

#[cfg(target_arch = "wasm32")]
mod entry {
	use sabor_pages::{error_log, load_settings, mount};
	use wasm_bindgen::prelude::*;

	/// WASM entry point
	#[wasm_bindgen(start)]
	pub fn main() -> Result<(), JsValue> {
		// Set panic hook for better error messages in console
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		// Route `tracing` events from the delivery backends to the console
		tracing_wasm::set_as_global_default();

		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| JsValue::from_str("No document object"))?;

		match mount(load_settings(&document)) {
			Ok(page) => {
				std::mem::forget(page); // Keep observer alive
				Ok(())
			}
			Err(e) => {
				error_log!("Failed to mount page: {}", e);
				Err(e.into())
			}
		}
	}
}
