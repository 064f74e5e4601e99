//! Reservation form fields and validation
//!
//! Field keys, the per-field validator table and the reservation payload
//! built from a valid form.

// Re-export all sabor-forms functionality
pub use sabor_forms::*;
