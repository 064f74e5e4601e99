//! # Sabor & Alma reservation delivery
//!
//! Sends a validated [`ReservationRequest`] somewhere a human will read it.
//! The page controller only sees the [`ReservationBackend`] trait, so the
//! backends below are interchangeable.
//!
//! ## Backends
//!
//! - **Simulated**: waits a fixed delay, then succeeds (the default)
//! - **Console**: logs the reservation and succeeds
//! - **Memory**: records reservations in memory, optionally failing (tests)
//! - **EmailJS**: posts the reservation to the EmailJS REST API
//!
//! ## Example
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), sabor_mail::DeliveryError> {
//! use sabor_forms::ReservationRequest;
//! use sabor_mail::{DeliverySettings, backend_from_settings};
//!
//! let backend = backend_from_settings(&DeliverySettings::default())?;
//! let request = ReservationRequest::builder()
//!     .name("Ana García")
//!     .email("ana@example.com")
//!     .build();
//!
//! backend.send(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod backends;
pub mod emailjs;
pub mod settings;

use thiserror::Error;

pub use backends::{
	ConsoleBackend, MemoryBackend, ReservationBackend, SimulatedBackend, backend_from_settings,
};
pub use emailjs::{EMAILJS_SEND_URL, EmailJsBackend, EmailJsConfig};
pub use sabor_forms::ReservationRequest;
pub use settings::DeliverySettings;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
	#[error("HTTP error: {0}")]
	Http(String),

	#[error("Delivery rejected with status {status}: {body}")]
	Rejected { status: u16, body: String },

	#[error("Configuration error: {0}")]
	Configuration(String),

	#[error("Serialization error: {0}")]
	Serialization(String),

	#[error("Delivery unavailable: {0}")]
	Unavailable(String),
}

pub type DeliveryResult<T> = std::result::Result<T, DeliveryError>;
