//! Reservation payload handed to delivery backends

use crate::field::ReservationField;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value sent as `comments` when the guest left the field blank.
pub const NO_COMMENTS: &str = "No comments";

/// A validated reservation, serialized as the template parameters of the
/// delivery backend.
///
/// # Examples
///
/// ```
/// use sabor_forms::{ReservationRequest, NO_COMMENTS};
///
/// let request = ReservationRequest::builder()
///     .name("Ana García")
///     .email("ana@example.com")
///     .phone("612345678")
///     .party_size("4")
///     .date("2024-06-20")
///     .time("21:00")
///     .build();
///
/// assert_eq!(request.comments, NO_COMMENTS);
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["partySize"], "4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub party_size: String,
	pub date: String,
	pub time: String,
	pub comments: String,
}

impl ReservationRequest {
	/// Starts building a request field by field.
	pub fn builder() -> ReservationRequestBuilder {
		ReservationRequestBuilder::default()
	}

	/// Builds a request from the current values of the form, keyed by
	/// [`ReservationField`], plus the free-text comments.
	///
	/// Missing fields become empty strings; blank comments become
	/// [`NO_COMMENTS`].
	pub fn from_values(
		values: &HashMap<ReservationField, String>,
		comments: Option<&str>,
	) -> Self {
		let get = |field: ReservationField| values.get(&field).cloned().unwrap_or_default();
		Self {
			name: get(ReservationField::Name),
			email: get(ReservationField::Email),
			phone: get(ReservationField::Phone),
			party_size: get(ReservationField::PartySize),
			date: get(ReservationField::Date),
			time: get(ReservationField::Time),
			comments: normalize_comments(comments),
		}
	}

	/// Template parameters as a JSON object.
	pub fn template_params(&self) -> serde_json::Value {
		serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
	}
}

fn normalize_comments(comments: Option<&str>) -> String {
	match comments.map(str::trim) {
		Some(text) if !text.is_empty() => text.to_string(),
		_ => NO_COMMENTS.to_string(),
	}
}

/// Builder for [`ReservationRequest`].
#[derive(Debug, Clone, Default)]
pub struct ReservationRequestBuilder {
	values: HashMap<ReservationField, String>,
	comments: Option<String>,
}

impl ReservationRequestBuilder {
	/// Sets the value of any validated field.
	pub fn field(mut self, field: ReservationField, value: impl Into<String>) -> Self {
		self.values.insert(field, value.into());
		self
	}

	/// Sets the guest name.
	pub fn name(self, value: impl Into<String>) -> Self {
		self.field(ReservationField::Name, value)
	}

	/// Sets the contact email.
	pub fn email(self, value: impl Into<String>) -> Self {
		self.field(ReservationField::Email, value)
	}

	/// Sets the contact phone.
	pub fn phone(self, value: impl Into<String>) -> Self {
		self.field(ReservationField::Phone, value)
	}

	/// Sets the number of guests.
	pub fn party_size(self, value: impl Into<String>) -> Self {
		self.field(ReservationField::PartySize, value)
	}

	/// Sets the reservation date.
	pub fn date(self, value: impl Into<String>) -> Self {
		self.field(ReservationField::Date, value)
	}

	/// Sets the reservation time.
	pub fn time(self, value: impl Into<String>) -> Self {
		self.field(ReservationField::Time, value)
	}

	/// Sets the free-text comments.
	pub fn comments(mut self, value: impl Into<String>) -> Self {
		self.comments = Some(value.into());
		self
	}

	/// Finishes the request.
	pub fn build(self) -> ReservationRequest {
		ReservationRequest::from_values(&self.values, self.comments.as_deref())
	}
}
