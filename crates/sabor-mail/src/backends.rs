//! Reservation delivery backends

use crate::emailjs::{EmailJsBackend, EmailJsConfig};
use crate::settings::DeliverySettings;
use crate::{DeliveryError, DeliveryResult};
use async_trait::async_trait;
use sabor_forms::ReservationRequest;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Delivers a reservation to whoever handles bookings.
///
/// The browser drives these futures on a single thread, so they are not
/// required to be `Send`.
#[async_trait(?Send)]
pub trait ReservationBackend {
	/// Send one reservation. `Ok(())` means it was accepted for delivery.
	async fn send(&self, request: &ReservationRequest) -> DeliveryResult<()>;

	/// Short backend name used in log lines.
	fn name(&self) -> &'static str;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
	gloo_timers::future::sleep(delay).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
	tokio::time::sleep(delay).await;
}

/// Waits a fixed delay and reports success.
///
/// Stands in for a real delivery service while the site has none configured.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
	delay: Duration,
}

impl Default for SimulatedBackend {
	fn default() -> Self {
		Self::new(Duration::from_millis(1500))
	}
}

impl SimulatedBackend {
	pub fn new(delay: Duration) -> Self {
		Self { delay }
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}
}

#[async_trait(?Send)]
impl ReservationBackend for SimulatedBackend {
	async fn send(&self, request: &ReservationRequest) -> DeliveryResult<()> {
		tracing::debug!(
			delay_ms = self.delay.as_millis() as u64,
			date = %request.date,
			"simulating reservation delivery"
		);
		sleep(self.delay).await;
		Ok(())
	}

	fn name(&self) -> &'static str {
		"simulated"
	}
}

/// Logs each reservation instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleBackend;

#[async_trait(?Send)]
impl ReservationBackend for ConsoleBackend {
	async fn send(&self, request: &ReservationRequest) -> DeliveryResult<()> {
		let params = serde_json::to_string_pretty(request)
			.map_err(|e| DeliveryError::Serialization(e.to_string()))?;
		tracing::info!(reservation = %params, "reservation received");
		Ok(())
	}

	fn name(&self) -> &'static str {
		"console"
	}
}

/// Keeps delivered reservations in memory.
///
/// Clones share the same storage, so a test can hand one clone to the page
/// controller and inspect another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
	sent: Arc<Mutex<Vec<ReservationRequest>>>,
	failure: Option<String>,
}

impl MemoryBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// A backend whose every send fails with [`DeliveryError::Unavailable`].
	pub fn failing(reason: impl Into<String>) -> Self {
		Self {
			sent: Arc::default(),
			failure: Some(reason.into()),
		}
	}

	/// Reservations accepted so far.
	pub fn sent(&self) -> Vec<ReservationRequest> {
		self.sent.lock().unwrap_or_else(|e| e.into_inner()).clone()
	}

	pub fn count(&self) -> usize {
		self.sent.lock().unwrap_or_else(|e| e.into_inner()).len()
	}

	pub fn clear(&self) {
		self.sent.lock().unwrap_or_else(|e| e.into_inner()).clear();
	}
}

#[async_trait(?Send)]
impl ReservationBackend for MemoryBackend {
	async fn send(&self, request: &ReservationRequest) -> DeliveryResult<()> {
		if let Some(reason) = &self.failure {
			return Err(DeliveryError::Unavailable(reason.clone()));
		}
		self.sent
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.push(request.clone());
		Ok(())
	}

	fn name(&self) -> &'static str {
		"memory"
	}
}

/// Create a backend from settings
///
/// # Errors
///
/// Returns [`DeliveryError::Configuration`] for an unknown backend name or
/// an EmailJS backend missing its service ID, template ID or public key.
pub fn backend_from_settings(
	settings: &DeliverySettings,
) -> DeliveryResult<Rc<dyn ReservationBackend>> {
	match settings.backend.as_str() {
		"simulated" => Ok(Rc::new(SimulatedBackend::new(settings.simulated_delay()))),
		"console" => Ok(Rc::new(ConsoleBackend)),
		"memory" => Ok(Rc::new(MemoryBackend::new())),
		"emailjs" => {
			let config = EmailJsConfig::from_settings(settings)?;
			Ok(Rc::new(EmailJsBackend::new(config)))
		}
		other => Err(DeliveryError::Configuration(format!(
			"Unknown delivery backend: {}",
			other
		))),
	}
}
