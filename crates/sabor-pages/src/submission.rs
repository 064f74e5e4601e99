//! Reservation form submission
//!
//! A submit validates every field, then hands the reservation to the
//! delivery backend while the submit control shows a busy label. Whatever the
//! outcome, the control gets its label back and is re-enabled.

use crate::controller::PageController;
use crate::view::{BannerKind, PageView};
use crate::{debug_log, error_log, info_log};
use sabor_forms::{ReservationField, ReservationRequest};
use sabor_mail::DeliveryError;
use std::collections::HashMap;

/// Whether a reservation is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
	#[default]
	Idle,
	Submitting,
}

/// What a submit attempt ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Another submission was still in flight; nothing happened.
	Ignored,
	/// At least one field failed validation; nothing was sent.
	Invalid,
	/// The backend accepted the reservation and the form was reset.
	Sent,
	/// The backend failed; the form keeps its values.
	Failed(DeliveryError),
}

impl SubmitOutcome {
	pub fn is_sent(&self) -> bool {
		matches!(self, SubmitOutcome::Sent)
	}
}

/// Puts the submit control back the way it was, however the send ended.
struct BusyGuard<'a, V: PageView> {
	controller: &'a PageController<V>,
	label: String,
}

impl<V: PageView> Drop for BusyGuard<'_, V> {
	fn drop(&mut self) {
		let view = &self.controller.view;
		view.set_submit_label(&self.label);
		view.set_submit_disabled(false);
		self.controller.state.set(SubmissionState::Idle);
	}
}

impl<V: PageView + 'static> PageController<V> {
	pub fn submission_state(&self) -> SubmissionState {
		self.state.get()
	}

	pub fn is_submitting(&self) -> bool {
		self.state.get() == SubmissionState::Submitting
	}

	/// Validates every field present on the page, updating both its error
	/// text and its `error` class. Returns whether all of them are valid.
	///
	/// Fields missing from the page are skipped.
	pub fn validate_all(&self) -> bool {
		let mut all_valid = true;
		for field in ReservationField::ALL {
			let Some(value) = self.view.field_value(field) else {
				continue;
			};
			let valid = self.validate_field(field, &value);
			self.view.set_error_class(field, !valid);
			all_valid &= valid;
		}
		all_valid
	}

	/// Current form contents as a reservation.
	pub fn collect_request(&self) -> ReservationRequest {
		let values: HashMap<ReservationField, String> = ReservationField::ALL
			.into_iter()
			.filter_map(|field| self.view.field_value(field).map(|value| (field, value)))
			.collect();
		ReservationRequest::from_values(&values, self.view.comments().as_deref())
	}

	/// Handles a submit of the reservation form.
	///
	/// A submit arriving while another one is in flight is ignored.
	pub async fn submit(&self) -> SubmitOutcome {
		if self.is_submitting() {
			debug_log!("submit ignored, a reservation is already being sent");
			return SubmitOutcome::Ignored;
		}

		if !self.validate_all() {
			self.show_banner(&self.settings.messages.invalid_form, BannerKind::Error);
			return SubmitOutcome::Invalid;
		}

		self.state.set(SubmissionState::Submitting);
		let _guard = BusyGuard {
			controller: self,
			label: self.view.submit_label(),
		};
		self.view.set_submit_label(&self.settings.messages.busy_label);
		self.view.set_submit_disabled(true);

		let request = self.collect_request();
		match self.backend.send(&request).await {
			Ok(()) => {
				info_log!("reservation sent via {}", self.backend.name());
				self.show_banner(&self.settings.messages.sent, BannerKind::Success);
				self.view.reset_form();
				SubmitOutcome::Sent
			}
			Err(err) => {
				error_log!("reservation delivery via {} failed: {}", self.backend.name(), err);
				self.show_banner(&self.settings.messages.failed, BannerKind::Error);
				SubmitOutcome::Failed(err)
			}
		}
	}
}
