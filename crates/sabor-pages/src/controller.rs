//! Page controller
//!
//! One [`PageController`] per page owns everything the event handlers share:
//! the validator table, the delivery backend, the submission state and the
//! last scroll offset. Event bindings hold it behind an `Rc` and forward each
//! DOM event to one of its methods.
//!
//! The handlers are split by concern:
//! - validation (this module)
//! - submission ([`crate::submission`])
//! - scroll effects ([`crate::scroll`])
//! - navigation ([`crate::navigation`])

use crate::settings::SiteSettings;
use crate::submission::SubmissionState;
use crate::timers::Timers;
use crate::view::{BannerKind, PageView};
use crate::{debug_log, info_log};
use chrono::{Days, NaiveDate};
use sabor_forms::{Clock, ReservationField, SystemClock, ValidatorTable};
use sabor_mail::{ReservationBackend, backend_from_settings};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

/// Controller of the restaurant page.
pub struct PageController<V: PageView> {
	pub(crate) view: Rc<V>,
	pub(crate) settings: SiteSettings,
	pub(crate) validators: ValidatorTable,
	pub(crate) clock: Arc<dyn Clock>,
	pub(crate) backend: Rc<dyn ReservationBackend>,
	pub(crate) timers: Rc<dyn Timers>,
	pub(crate) state: Cell<SubmissionState>,
	pub(crate) last_scroll: Cell<f64>,
	banner_generation: Rc<Cell<u64>>,
}

impl<V: PageView + 'static> PageController<V> {
	/// Starts building a controller for `view`.
	pub fn builder(view: Rc<V>, timers: Rc<dyn Timers>) -> PageControllerBuilder<V> {
		PageControllerBuilder {
			view,
			timers,
			settings: SiteSettings::default(),
			clock: None,
			backend: None,
		}
	}

	pub fn view(&self) -> &Rc<V> {
		&self.view
	}

	pub fn settings(&self) -> &SiteSettings {
		&self.settings
	}

	pub fn validators(&self) -> &ValidatorTable {
		&self.validators
	}

	/// Name of the delivery backend in use.
	pub fn backend_name(&self) -> &'static str {
		self.backend.name()
	}

	/// One-time page setup: date lower bound and the console greeting.
	pub fn start(&self) {
		let min = min_reservation_date(self.clock.today());
		self.view.set_min_date(&min.format("%Y-%m-%d").to_string());
		info_log!("Sabor & Alma 🍽️");
		info_log!("Crafted with love and a passion for good food");
	}

	/// Validates `value` for `field` and writes the result into the field's
	/// error-display element. Returns whether the value is valid.
	pub fn validate_field(&self, field: ReservationField, value: &str) -> bool {
		let message = self.validators.message(field, value);
		self.view.set_error_text(field, &message);
		message.is_empty()
	}

	/// Like [`validate_field`](Self::validate_field), keyed by the raw field
	/// id. Unknown ids are valid and touch nothing.
	pub fn validate_key(&self, key: &str, value: &str) -> bool {
		match key.parse::<ReservationField>() {
			Ok(field) => self.validate_field(field, value),
			Err(_) => true,
		}
	}

	/// Blur always validates.
	pub fn on_field_blur(&self, field: ReservationField, value: &str) {
		self.validate_field(field, value);
	}

	/// Typing only re-validates a field already flagged as erroneous.
	pub fn on_field_input(&self, field: ReservationField, value: &str) {
		if self.view.has_error_class(field) {
			self.validate_field(field, value);
		}
	}

	/// Shows a banner and schedules it to hide after the configured timeout.
	///
	/// A banner shown later cancels the pending hide of an earlier one.
	pub fn show_banner(&self, message: &str, kind: BannerKind) {
		self.view.show_banner(message, kind);

		let generation = self.banner_generation.get().wrapping_add(1);
		self.banner_generation.set(generation);

		let current = Rc::clone(&self.banner_generation);
		let view = Rc::clone(&self.view);
		self.timers.schedule(
			self.settings.banner_timeout(),
			Box::new(move || {
				if current.get() == generation {
					view.hide_banner();
				} else {
					debug_log!("banner {} superseded, not hiding", generation);
				}
			}),
		);
	}
}

/// Earliest date offered by the date picker: tomorrow.
pub fn min_reservation_date(today: NaiveDate) -> NaiveDate {
	today.checked_add_days(Days::new(1)).unwrap_or(today)
}

/// Builder for [`PageController`].
pub struct PageControllerBuilder<V: PageView> {
	view: Rc<V>,
	timers: Rc<dyn Timers>,
	settings: SiteSettings,
	clock: Option<Arc<dyn Clock>>,
	backend: Option<Rc<dyn ReservationBackend>>,
}

impl<V: PageView + 'static> PageControllerBuilder<V> {
	pub fn settings(mut self, settings: SiteSettings) -> Self {
		self.settings = settings;
		self
	}

	/// Source of "today" (defaults to the system clock).
	pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = Some(clock);
		self
	}

	/// Delivery backend (defaults to the one named in the delivery settings).
	pub fn backend(mut self, backend: Rc<dyn ReservationBackend>) -> Self {
		self.backend = Some(backend);
		self
	}

	/// # Errors
	///
	/// Fails only when no backend was given and the delivery settings do not
	/// describe a usable one.
	pub fn build(self) -> Result<PageController<V>, crate::PageError> {
		let backend = match self.backend {
			Some(backend) => backend,
			None => backend_from_settings(&self.settings.delivery)?,
		};
		let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

		Ok(PageController {
			view: self.view,
			validators: ValidatorTable::with_clock(Arc::clone(&clock)),
			clock,
			backend,
			timers: self.timers,
			settings: self.settings,
			state: Cell::new(SubmissionState::Idle),
			last_scroll: Cell::new(0.0),
			banner_generation: Rc::new(Cell::new(0)),
		})
	}
}
