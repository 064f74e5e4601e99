//! Source of the current calendar date

use chrono::NaiveDate;

/// Provides "today" to validators that compare against the current date.
pub trait Clock: Send + Sync {
	/// The current local calendar date.
	fn today(&self) -> NaiveDate;
}

/// Reads the local date from the system (the browser clock on wasm32).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn today(&self) -> NaiveDate {
		chrono::Local::now().date_naive()
	}
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
	today: NaiveDate,
}

impl FixedClock {
	/// Creates a clock frozen at `today`.
	pub fn new(today: NaiveDate) -> Self {
		Self { today }
	}
}

impl Clock for FixedClock {
	fn today(&self) -> NaiveDate {
		self.today
	}
}
