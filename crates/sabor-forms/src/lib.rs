//! Reservation form processing for the Sabor & Alma site
//!
//! This crate holds everything about the reservation form that does not
//! touch the DOM:
//! - [`ReservationField`]: the closed set of validated form fields
//! - [`ValidatorTable`]: one validator per field, built once per page
//! - [`ReservationRequest`]: the payload handed to a delivery backend
//! - [`Clock`]: the source of "today" for the date validator
//!
//! ## Example
//!
//! ```
//! use sabor_forms::{FixedClock, ReservationField, ValidatorTable};
//! use chrono::NaiveDate;
//! use std::sync::Arc;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let table = ValidatorTable::with_clock(Arc::new(FixedClock::new(today)));
//!
//! assert!(table.validate(ReservationField::Name, "Ana").is_ok());
//! assert!(table.validate(ReservationField::Date, "2024-06-14").is_err());
//! ```

pub mod clock;
pub mod field;
pub mod request;
pub mod validators;

pub use clock::{Clock, FixedClock, SystemClock};
pub use field::{FormError, ReservationField};
pub use request::{NO_COMMENTS, ReservationRequest};
pub use validators::{
	DateValidator, EmailValidator, FieldValidator, NameValidator, PhoneValidator,
	RequiredValidator, ValidatorTable,
};
