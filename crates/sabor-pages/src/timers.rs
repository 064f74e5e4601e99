//! Deferred callbacks
//!
//! Banner auto-hide is the only timer on the page. It goes through [`Timers`]
//! so tests can fire it by hand.

use std::time::Duration;

/// Runs a callback once after a delay.
pub trait Timers {
	fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

/// `setTimeout`-backed timers.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

#[cfg(target_arch = "wasm32")]
impl Timers for BrowserTimers {
	fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		gloo_timers::callback::Timeout::new(millis, callback).forget();
	}
}
