//! Reservation field validators
//!
//! Every validated [`ReservationField`] has exactly one [`FieldValidator`].
//! The [`ValidatorTable`] is built once per page and never mutated.
//!
//! ## Security Note
//!
//! These validators only improve the booking experience in the browser.
//! Whatever receives the reservation must validate it again.

use crate::clock::{Clock, SystemClock};
use crate::field::ReservationField;
use chrono::NaiveDate;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

// local@domain.tld, no whitespace and a single '@'.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Optional '+', optional parenthesized area code, then 3/3/3-6 digit groups
// separated by '-', '.' or whitespace.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{3,6}$")
		.expect("PHONE_REGEX: invalid regex pattern")
});

/// Minimum number of characters in a guest name.
pub const NAME_MIN_LENGTH: usize = 3;

/// Validates the current value of a single form field.
pub trait FieldValidator: Send + Sync {
	/// Validate a field value
	///
	/// # Returns
	///
	/// `Ok(())` if validation passes, `Err(message)` with a non-empty,
	/// human-readable message otherwise.
	fn validate(&self, value: &str) -> Result<(), String>;
}

/// Guest name: required, at least [`NAME_MIN_LENGTH`] characters once trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl FieldValidator for NameValidator {
	fn validate(&self, value: &str) -> Result<(), String> {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			return Err("Please enter your name".to_string());
		}
		if trimmed.chars().count() < NAME_MIN_LENGTH {
			return Err(format!(
				"Your name must be at least {} characters long",
				NAME_MIN_LENGTH
			));
		}
		Ok(())
	}
}

/// Contact email: required, `local@domain.tld` shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl FieldValidator for EmailValidator {
	fn validate(&self, value: &str) -> Result<(), String> {
		if value.trim().is_empty() {
			return Err("Please enter your email".to_string());
		}
		if !EMAIL_REGEX.is_match(value) {
			return Err("Please enter a valid email address".to_string());
		}
		Ok(())
	}
}

/// Contact phone: required, checked with all whitespace removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneValidator;

impl FieldValidator for PhoneValidator {
	fn validate(&self, value: &str) -> Result<(), String> {
		if value.trim().is_empty() {
			return Err("Please enter your phone number".to_string());
		}
		let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
		if !PHONE_REGEX.is_match(&compact) {
			return Err("Please enter a valid phone number".to_string());
		}
		Ok(())
	}
}

/// A select-style field that only has to carry some value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
	message: String,
}

impl RequiredValidator {
	/// Creates a validator that reports `message` when the value is empty.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl FieldValidator for RequiredValidator {
	fn validate(&self, value: &str) -> Result<(), String> {
		if value.is_empty() {
			Err(self.message.clone())
		} else {
			Ok(())
		}
	}
}

/// Reservation date: required, `YYYY-MM-DD`, not before today.
///
/// Comparison is by calendar day, so today itself is accepted.
pub struct DateValidator {
	clock: Arc<dyn Clock>,
}

impl DateValidator {
	/// Creates a date validator reading "today" from `clock`.
	pub fn new(clock: Arc<dyn Clock>) -> Self {
		Self { clock }
	}
}

impl FieldValidator for DateValidator {
	fn validate(&self, value: &str) -> Result<(), String> {
		if value.is_empty() {
			return Err("Please select a date".to_string());
		}
		let selected = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
			.map_err(|_| "Please select a valid date".to_string())?;
		if selected < self.clock.today() {
			return Err("Please select a future date".to_string());
		}
		Ok(())
	}
}

/// Field-keyed validator table.
///
/// Built once when the page controller is created and read on every
/// blur, input and submit event.
pub struct ValidatorTable {
	validators: HashMap<ReservationField, Arc<dyn FieldValidator>>,
}

impl Default for ValidatorTable {
	fn default() -> Self {
		Self::new()
	}
}

impl ValidatorTable {
	/// Creates the table with the system clock.
	pub fn new() -> Self {
		Self::with_clock(Arc::new(SystemClock))
	}

	/// Creates the table with an explicit clock for the date validator.
	pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
		let mut validators: HashMap<ReservationField, Arc<dyn FieldValidator>> = HashMap::new();
		validators.insert(ReservationField::Name, Arc::new(NameValidator));
		validators.insert(ReservationField::Email, Arc::new(EmailValidator));
		validators.insert(ReservationField::Phone, Arc::new(PhoneValidator));
		validators.insert(
			ReservationField::PartySize,
			Arc::new(RequiredValidator::new("Please select the number of guests")),
		);
		validators.insert(ReservationField::Date, Arc::new(DateValidator::new(clock)));
		validators.insert(
			ReservationField::Time,
			Arc::new(RequiredValidator::new("Please select a time")),
		);
		Self { validators }
	}

	/// Get the validator of a field.
	pub fn get(&self, field: ReservationField) -> Option<Arc<dyn FieldValidator>> {
		self.validators.get(&field).cloned()
	}

	/// Validate a value of a known field.
	pub fn validate(&self, field: ReservationField, value: &str) -> Result<(), String> {
		match self.validators.get(&field) {
			Some(validator) => validator.validate(value),
			None => Ok(()),
		}
	}

	/// Validate a value by raw field key. Unknown keys always pass.
	///
	/// # Examples
	///
	/// ```
	/// use sabor_forms::ValidatorTable;
	///
	/// let table = ValidatorTable::new();
	/// assert!(table.validate_key("comments", "").is_ok());
	/// assert!(table.validate_key("name", "").is_err());
	/// ```
	pub fn validate_key(&self, key: &str, value: &str) -> Result<(), String> {
		match key.parse::<ReservationField>() {
			Ok(field) => self.validate(field, value),
			Err(_) => Ok(()),
		}
	}

	/// Returns the text shown under the field: empty when the value is valid.
	pub fn message(&self, field: ReservationField, value: &str) -> String {
		self.validate(field, value).err().unwrap_or_default()
	}

	/// Returns the number of registered validators.
	pub fn len(&self) -> usize {
		self.validators.len()
	}

	/// Returns true if no validators are registered.
	pub fn is_empty(&self) -> bool {
		self.validators.is_empty()
	}
}
