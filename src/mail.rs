//! Reservation delivery
//!
//! Backends that hand a reservation to whoever handles bookings:
//!
//! - **Simulated**: waits a fixed delay and succeeds (the default)
//! - **Console**: logs the reservation
//! - **Memory**: keeps reservations for inspection in tests
//! - **EmailJS**: posts the reservation to the EmailJS REST API

// Re-export all sabor-mail functionality
pub use sabor_mail::*;
