//! # Sabor & Alma Pages
//!
//! Client-side behavior of the Sabor & Alma restaurant site, compiled to
//! WebAssembly.
//!
//! ## Overview
//!
//! A single [`PageController`] reacts to page events:
//!
//! - **Navigation**: navbar style and scroll-to-top control follow the
//!   scroll offset, the nav link of the section in view is highlighted, the
//!   mobile menu toggles, and in-page anchors scroll smoothly below the fixed
//!   navbar.
//! - **Fade-in**: elements fade in the first time they scroll into view.
//! - **Reservations**: fields are validated on blur and while being
//!   corrected; a valid form is handed to a [`ReservationBackend`] while the
//!   submit control shows a busy label.
//!
//! The controller only talks to the page through the traits in [`view`].
//! In the browser, `mount` binds it to the live DOM;
//! natively, [`testing::MemoryView`] stands in for the page.
//!
//! ## Example
//!
//! ```
//! use sabor_forms::ReservationField;
//! use sabor_pages::PageController;
//! use sabor_pages::testing::{ManualTimers, MemoryView};
//! use std::rc::Rc;
//!
//! let view = Rc::new(MemoryView::new());
//! let controller = PageController::builder(Rc::clone(&view), Rc::new(ManualTimers::new()))
//!     .build()
//!     .unwrap();
//!
//! assert!(!controller.validate_field(ReservationField::Email, "not-an-email"));
//! assert_eq!(view.error_text(ReservationField::Email), "Please enter a valid email address");
//! ```

pub mod controller;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod scroll;
pub mod settings;
pub mod submission;
pub mod testing;
pub mod timers;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod mount;

pub use controller::{PageController, PageControllerBuilder, min_reservation_date};
pub use error::PageError;
pub use navigation::anchor_target;
pub use scroll::{active_section, is_past};
pub use settings::{Messages, RevealSettings, SETTINGS_ELEMENT_ID, SiteSettings};
pub use submission::{SubmissionState, SubmitOutcome};
pub use timers::Timers;
pub use view::{
	BannerKind, FormView, NavView, PageView, RevealEntry, RevealView, ScrollView, SectionBounds,
};

#[cfg(target_arch = "wasm32")]
pub use dom::{DomView, load_settings};
#[cfg(target_arch = "wasm32")]
pub use mount::{DomController, MountedPage, mount};
#[cfg(target_arch = "wasm32")]
pub use timers::BrowserTimers;

pub use sabor_mail::ReservationBackend;

// Logging macros are exported at the crate root via #[macro_export]:
// sabor_pages::debug_log!, sabor_pages::info_log!, etc.
