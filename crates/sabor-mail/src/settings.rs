//! Delivery settings

use crate::emailjs::EMAILJS_SEND_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delivery settings
///
/// `backend` selects the implementation returned by
/// [`backend_from_settings`](crate::backend_from_settings):
/// `"simulated"`, `"console"`, `"memory"` or `"emailjs"`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliverySettings {
	pub backend: String,

	/// Delay of the simulated backend, in milliseconds
	pub simulated_delay_ms: u64,

	/// EmailJS service ID
	pub service_id: Option<String>,

	/// EmailJS template ID
	pub template_id: Option<String>,

	/// EmailJS public key (sent as `user_id`)
	pub public_key: Option<String>,

	/// EmailJS send endpoint
	pub endpoint: String,
}

impl Default for DeliverySettings {
	fn default() -> Self {
		Self {
			backend: "simulated".to_string(),
			simulated_delay_ms: 1500,
			service_id: None,
			template_id: None,
			public_key: None,
			endpoint: EMAILJS_SEND_URL.to_string(),
		}
	}
}

impl DeliverySettings {
	/// Settings selecting the EmailJS backend.
	pub fn emailjs(
		service_id: impl Into<String>,
		template_id: impl Into<String>,
		public_key: impl Into<String>,
	) -> Self {
		Self {
			backend: "emailjs".to_string(),
			service_id: Some(service_id.into()),
			template_id: Some(template_id.into()),
			public_key: Some(public_key.into()),
			..Self::default()
		}
	}

	/// Settings selecting the given backend name with default values.
	pub fn with_backend(mut self, backend: impl Into<String>) -> Self {
		self.backend = backend.into();
		self
	}

	/// Delay of the simulated backend.
	pub fn simulated_delay(&self) -> Duration {
		Duration::from_millis(self.simulated_delay_ms)
	}
}
