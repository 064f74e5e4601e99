//! Page-level errors

use sabor_mail::DeliveryError;

/// Errors raised while configuring or mounting the page.
///
/// None of these reach the visitor: a failed mount leaves the static page
/// usable, and field or delivery problems are shown as messages instead.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PageError {
	#[error("Settings error: {0}")]
	Settings(#[from] serde_json::Error),

	#[error("Delivery error: {0}")]
	Delivery(#[from] DeliveryError),

	#[error("Browser API unavailable: {0}")]
	Unavailable(&'static str),

	#[error("JavaScript error: {0}")]
	Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		PageError::Js(format!("{:?}", value))
	}
}

#[cfg(target_arch = "wasm32")]
impl From<PageError> for wasm_bindgen::JsValue {
	fn from(error: PageError) -> Self {
		wasm_bindgen::JsValue::from_str(&error.to_string())
	}
}
