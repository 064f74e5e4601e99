//! EmailJS delivery backend
//!
//! Posts the reservation as template parameters to the EmailJS REST API:
//!
//! ```text
//! POST https://api.emailjs.com/api/v1.0/email/send
//! {
//!   "service_id": "...",
//!   "template_id": "...",
//!   "user_id": "<public key>",
//!   "template_params": { "name": "...", "partySize": "...", ... }
//! }
//! ```
//!
//! Uses `gloo-net` in the browser and `reqwest` elsewhere.

use crate::backends::ReservationBackend;
use crate::settings::DeliverySettings;
use crate::{DeliveryError, DeliveryResult};
use async_trait::async_trait;
use sabor_forms::ReservationRequest;
use serde::Serialize;

/// EmailJS REST endpoint for sending a templated email.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Account identifiers for EmailJS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
	pub service_id: String,
	pub template_id: String,
	pub public_key: String,
	pub endpoint: String,
}

impl EmailJsConfig {
	pub fn new(
		service_id: impl Into<String>,
		template_id: impl Into<String>,
		public_key: impl Into<String>,
	) -> Self {
		Self {
			service_id: service_id.into(),
			template_id: template_id.into(),
			public_key: public_key.into(),
			endpoint: EMAILJS_SEND_URL.to_string(),
		}
	}

	/// Overrides the endpoint (self-hosted proxies, tests).
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	/// Reads the EmailJS identifiers from delivery settings.
	///
	/// # Errors
	///
	/// [`DeliveryError::Configuration`] naming the first missing or blank key.
	pub fn from_settings(settings: &DeliverySettings) -> DeliveryResult<Self> {
		fn required(value: &Option<String>, key: &str) -> DeliveryResult<String> {
			match value.as_deref().map(str::trim) {
				Some(v) if !v.is_empty() => Ok(v.to_string()),
				_ => Err(DeliveryError::Configuration(format!(
					"EmailJS backend requires '{}'",
					key
				))),
			}
		}

		Ok(Self::new(
			required(&settings.service_id, "service_id")?,
			required(&settings.template_id, "template_id")?,
			required(&settings.public_key, "public_key")?,
		)
		.with_endpoint(settings.endpoint.clone()))
	}
}

#[derive(Debug, Serialize)]
pub(crate) struct SendBody<'a> {
	service_id: &'a str,
	template_id: &'a str,
	user_id: &'a str,
	template_params: &'a ReservationRequest,
}

impl<'a> SendBody<'a> {
	pub(crate) fn new(config: &'a EmailJsConfig, request: &'a ReservationRequest) -> Self {
		Self {
			service_id: &config.service_id,
			template_id: &config.template_id,
			user_id: &config.public_key,
			template_params: request,
		}
	}
}

/// Sends reservations through EmailJS.
pub struct EmailJsBackend {
	config: EmailJsConfig,
	#[cfg(not(target_arch = "wasm32"))]
	client: reqwest::Client,
}

impl EmailJsBackend {
	pub fn new(config: EmailJsConfig) -> Self {
		Self {
			config,
			#[cfg(not(target_arch = "wasm32"))]
			client: reqwest::Client::new(),
		}
	}

	pub fn config(&self) -> &EmailJsConfig {
		&self.config
	}

	#[cfg(target_arch = "wasm32")]
	async fn post(&self, body: &SendBody<'_>) -> DeliveryResult<()> {
		use gloo_net::http::Request;

		let response = Request::post(&self.config.endpoint)
			.json(body)
			.map_err(|e| DeliveryError::Serialization(e.to_string()))?
			.send()
			.await
			.map_err(|e| DeliveryError::Http(e.to_string()))?;

		if response.ok() {
			Ok(())
		} else {
			let status = response.status();
			let body = response.text().await.unwrap_or_default();
			Err(DeliveryError::Rejected { status, body })
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	async fn post(&self, body: &SendBody<'_>) -> DeliveryResult<()> {
		let response = self
			.client
			.post(&self.config.endpoint)
			.json(body)
			.send()
			.await
			.map_err(|e| DeliveryError::Http(e.to_string()))?;

		let status = response.status();
		if status.is_success() {
			Ok(())
		} else {
			let body = response.text().await.unwrap_or_default();
			Err(DeliveryError::Rejected {
				status: status.as_u16(),
				body,
			})
		}
	}
}

#[async_trait(?Send)]
impl ReservationBackend for EmailJsBackend {
	async fn send(&self, request: &ReservationRequest) -> DeliveryResult<()> {
		let body = SendBody::new(&self.config, request);
		tracing::debug!(
			endpoint = %self.config.endpoint,
			service_id = %self.config.service_id,
			"sending reservation through EmailJS"
		);
		let result = self.post(&body).await;
		if let Err(e) = &result {
			tracing::warn!(error = %e, "EmailJS delivery failed");
		}
		result
	}

	fn name(&self) -> &'static str {
		"emailjs"
	}
}
