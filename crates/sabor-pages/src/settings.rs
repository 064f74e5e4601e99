//! Site settings
//!
//! Every value defaults to what the published site uses, so the page works
//! with no configuration at all. A page may override any subset by embedding
//! a JSON document:
//!
//! ```html
//! <script type="application/json" id="site-settings">
//!   { "delivery": { "backend": "emailjs", "service_id": "...",
//!                   "template_id": "...", "public_key": "..." } }
//! </script>
//! ```

use crate::error::PageError;
use sabor_mail::DeliverySettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Id of the element carrying the settings JSON.
pub const SETTINGS_ELEMENT_ID: &str = "site-settings";

/// Site settings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	/// Scroll offset (px) past which the navbar switches to its scrolled style
	pub navbar_scroll_threshold: f64,

	/// Scroll offset (px) past which the scroll-to-top control appears
	pub scroll_top_threshold: f64,

	/// Height (px) cleared above an anchor target, for the fixed navbar
	pub anchor_offset: f64,

	/// Distance (px) a section's highlight range starts above the section
	pub section_offset: f64,

	/// How long a banner stays visible, in milliseconds
	pub banner_timeout_ms: u64,

	pub reveal: RevealSettings,
	pub messages: Messages,
	pub delivery: DeliverySettings,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			navbar_scroll_threshold: 100.0,
			scroll_top_threshold: 300.0,
			anchor_offset: 80.0,
			section_offset: 100.0,
			banner_timeout_ms: 5000,
			reveal: RevealSettings::default(),
			messages: Messages::default(),
			delivery: DeliverySettings::default(),
		}
	}
}

impl SiteSettings {
	/// Parses settings from JSON; missing keys keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use sabor_pages::SiteSettings;
	///
	/// let settings = SiteSettings::from_json(r#"{"banner_timeout_ms": 8000}"#).unwrap();
	/// assert_eq!(settings.banner_timeout_ms, 8000);
	/// assert_eq!(settings.anchor_offset, 80.0);
	/// ```
	pub fn from_json(json: &str) -> Result<Self, PageError> {
		Ok(serde_json::from_str(json)?)
	}

	/// How long a banner stays visible.
	pub fn banner_timeout(&self) -> Duration {
		Duration::from_millis(self.banner_timeout_ms)
	}
}

/// Fade-in observer options.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
	/// Fraction of the element that must be visible
	pub threshold: f64,

	/// CSS margin applied to the viewport before intersecting
	pub root_margin: String,

	/// Selector of the elements that fade in
	pub selector: String,
}

impl Default for RevealSettings {
	fn default() -> Self {
		Self {
			threshold: 0.1,
			root_margin: "0px 0px -50px 0px".to_string(),
			selector: ".fade-up".to_string(),
		}
	}
}

/// Visitor-facing texts of the reservation form.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
	pub invalid_form: String,
	pub sent: String,
	pub failed: String,
	pub busy_label: String,
}

impl Default for Messages {
	fn default() -> Self {
		Self {
			invalid_form: "Please correct the errors in the form".to_string(),
			sent: "Reservation sent! We will contact you shortly to confirm.".to_string(),
			failed: "Something went wrong. Please try again or contact us directly."
				.to_string(),
			busy_label: "Sending...".to_string(),
		}
	}
}
