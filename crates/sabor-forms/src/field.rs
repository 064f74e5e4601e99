//! Reservation form field keys

use std::fmt;
use std::str::FromStr;

/// Errors raised while resolving form fields.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("Unknown form field: {0}")]
	UnknownField(String),
}

/// A field of the reservation form that carries a validator.
///
/// The string form of each variant is the `id` of the corresponding input
/// element in the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReservationField {
	Name,
	Email,
	Phone,
	PartySize,
	Date,
	Time,
}

impl ReservationField {
	/// All validated fields, in document order.
	pub const ALL: [ReservationField; 6] = [
		ReservationField::Name,
		ReservationField::Email,
		ReservationField::Phone,
		ReservationField::PartySize,
		ReservationField::Date,
		ReservationField::Time,
	];

	/// Returns the field key (also the input element id).
	///
	/// # Examples
	///
	/// ```
	/// use sabor_forms::ReservationField;
	///
	/// assert_eq!(ReservationField::PartySize.as_str(), "party-size");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			ReservationField::Name => "name",
			ReservationField::Email => "email",
			ReservationField::Phone => "phone",
			ReservationField::PartySize => "party-size",
			ReservationField::Date => "date",
			ReservationField::Time => "time",
		}
	}

	/// Returns the id of the element that displays this field's error message.
	///
	/// # Examples
	///
	/// ```
	/// use sabor_forms::ReservationField;
	///
	/// assert_eq!(ReservationField::Email.error_element_id(), "emailError");
	/// ```
	pub fn error_element_id(&self) -> String {
		format!("{}Error", self.as_str())
	}
}

impl fmt::Display for ReservationField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ReservationField {
	type Err = FormError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ReservationField::ALL
			.into_iter()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| FormError::UnknownField(s.to_string()))
	}
}
