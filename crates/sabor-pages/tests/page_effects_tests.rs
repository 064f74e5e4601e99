//! Page effects integration tests
//!
//! Field validation triggers, scroll-driven chrome, section highlighting,
//! the mobile menu, in-page anchors, fade-in, banners and page setup.

#![cfg(not(target_arch = "wasm32"))]

use chrono::NaiveDate;
use rstest::{fixture, rstest};
use sabor_forms::{FixedClock, ReservationField};
use sabor_mail::{DeliverySettings, MemoryBackend};
use sabor_pages::testing::{ManualTimers, MemoryView};
use sabor_pages::{
	BannerKind, FormView, NavView, PageController, PageError, RevealEntry, SiteSettings,
};
use std::rc::Rc;
use std::sync::Arc;

struct Page {
	view: Rc<MemoryView>,
	timers: Rc<ManualTimers>,
	controller: PageController<MemoryView>,
}

#[fixture]
fn page() -> Page {
	let view = Rc::new(MemoryView::new());
	view.add_section("home", 0.0, 700.0);
	view.add_section("menu", 700.0, 900.0);
	view.add_section("reservations", 1600.0, 800.0);

	let timers = Rc::new(ManualTimers::new());
	let controller = PageController::builder(Rc::clone(&view), timers.clone())
		.clock(Arc::new(FixedClock::new(
			NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
		)))
		.backend(Rc::new(MemoryBackend::new()))
		.build()
		.unwrap();
	Page {
		view,
		timers,
		controller,
	}
}

// --- validation triggers ---

#[rstest]
fn test_blur_writes_error_text_only(page: Page) {
	// Act
	page.controller.on_field_blur(ReservationField::Phone, "12ab");

	// Assert
	assert_eq!(
		page.view.error_text(ReservationField::Phone),
		"Please enter a valid phone number"
	);
	assert!(!page.view.has_error_class(ReservationField::Phone));
}

#[rstest]
fn test_blur_with_valid_value_clears_text(page: Page) {
	page.controller.on_field_blur(ReservationField::Name, "");
	assert_eq!(page.view.error_text(ReservationField::Name), "Please enter your name");

	page.controller.on_field_blur(ReservationField::Name, "Lucía");
	assert_eq!(page.view.error_text(ReservationField::Name), "");
}

#[rstest]
fn test_input_ignored_without_error_class(page: Page) {
	page.controller.on_field_input(ReservationField::Email, "not-an-email");

	assert_eq!(page.view.error_text(ReservationField::Email), "");
}

#[rstest]
fn test_input_revalidates_flagged_field(page: Page) {
	// Arrange
	page.view.set_error_class(ReservationField::Email, true);
	page.view.set_error_text(ReservationField::Email, "Please enter your email");

	// Act
	page.controller.on_field_input(ReservationField::Email, "ana@example");
	let partial = page.view.error_text(ReservationField::Email);
	page.controller.on_field_input(ReservationField::Email, "ana@example.com");

	// Assert
	assert_eq!(partial, "Please enter a valid email address");
	assert_eq!(page.view.error_text(ReservationField::Email), "");
	// The class is only cleared by the next submit.
	assert!(page.view.has_error_class(ReservationField::Email));
}

#[rstest]
#[case("name", "Jo", false)]
#[case("party-size", "2", true)]
#[case("date", "2024-06-14", false)]
#[case("date", "2024-06-15", true)]
#[case("comments", "", true)]
#[case("unknown", "anything", true)]
fn test_validate_key(page: Page, #[case] key: &str, #[case] value: &str, #[case] valid: bool) {
	assert_eq!(page.controller.validate_key(key, value), valid);
}

// --- scroll ---

#[rstest]
fn test_scroll_sequence(page: Page) {
	// Scroll to 150
	page.view.set_scroll_offset(150.0);
	page.controller.on_scroll();
	assert!(page.view.is_navbar_scrolled());
	assert!(!page.view.is_scroll_top_visible());
	assert_eq!(page.controller.last_scroll(), 150.0);

	// Scroll to 350
	page.view.set_scroll_offset(350.0);
	page.controller.on_scroll();
	assert!(page.view.is_navbar_scrolled());
	assert!(page.view.is_scroll_top_visible());

	// Back up to 50
	page.view.set_scroll_offset(50.0);
	page.controller.on_scroll();
	assert!(!page.view.is_navbar_scrolled());
	assert!(!page.view.is_scroll_top_visible());
	assert_eq!(page.controller.last_scroll(), 50.0);
}

#[rstest]
#[case(100.0, false, false)]
#[case(101.0, true, false)]
#[case(300.0, true, false)]
#[case(301.0, true, true)]
fn test_scroll_thresholds_are_strict(
	page: Page,
	#[case] offset: f64,
	#[case] navbar: bool,
	#[case] scroll_top: bool,
) {
	page.view.set_scroll_offset(offset);
	page.controller.on_scroll();

	assert_eq!(page.view.is_navbar_scrolled(), navbar);
	assert_eq!(page.view.is_scroll_top_visible(), scroll_top);
}

#[rstest]
#[case(0.0, "home")]
#[case(599.0, "home")]
#[case(600.0, "menu")]
#[case(1499.0, "menu")]
#[case(1500.0, "reservations")]
fn test_active_link_follows_sections(page: Page, #[case] offset: f64, #[case] expected: &str) {
	page.view.set_scroll_offset(offset);
	page.controller.on_scroll();

	assert_eq!(page.view.active_link().as_deref(), Some(expected));
}

#[rstest]
fn test_active_link_kept_past_last_section(page: Page) {
	page.view.set_scroll_offset(1800.0);
	page.controller.on_scroll();
	assert_eq!(page.view.active_link().as_deref(), Some("reservations"));

	page.view.set_scroll_offset(5000.0);
	page.controller.on_scroll();

	assert_eq!(page.view.active_link().as_deref(), Some("reservations"));
}

#[rstest]
fn test_scroll_to_top(page: Page) {
	page.controller.scroll_to_top();

	assert_eq!(page.view.scrolled_to(), vec![0.0]);
}

// --- navigation ---

#[rstest]
fn test_menu_toggle_and_close(page: Page) {
	page.controller.toggle_menu();
	assert!(page.view.is_menu_open());

	page.controller.toggle_menu();
	assert!(!page.view.is_menu_open());

	page.controller.toggle_menu();
	page.controller.close_menu();
	page.controller.close_menu();
	assert!(!page.view.is_menu_open());
}

#[rstest]
fn test_anchor_scrolls_below_navbar(page: Page) {
	assert!(page.controller.on_anchor_click("#menu"));

	assert_eq!(page.view.scrolled_to(), vec![620.0]);
}

#[rstest]
#[case("#")]
#[case("#missing")]
#[case("")]
fn test_anchor_without_target_is_noop(page: Page, #[case] href: &str) {
	assert!(!page.controller.on_anchor_click(href));

	assert!(page.view.scrolled_to().is_empty());
}

// --- fade-in ---

#[rstest]
fn test_reveal_marks_only_intersecting(page: Page) {
	// Act
	page.controller.reveal(vec![
		RevealEntry {
			target: "dish-1".to_string(),
			is_intersecting: true,
		},
		RevealEntry {
			target: "dish-2".to_string(),
			is_intersecting: false,
		},
	]);
	page.controller.reveal(vec![RevealEntry {
		target: "dish-1".to_string(),
		is_intersecting: false,
	}]);

	// Assert
	assert!(page.view.is_visible("dish-1"));
	assert!(!page.view.is_visible("dish-2"));
}

// --- banners ---

#[rstest]
fn test_newer_banner_survives_older_timer(page: Page) {
	// Arrange
	page.controller.show_banner("first", BannerKind::Error);
	page.controller.show_banner("second", BannerKind::Success);

	// Act
	page.timers.fire_next();

	// Assert
	assert_eq!(
		page.view.banner(),
		Some(("second".to_string(), BannerKind::Success))
	);
	page.timers.fire_next();
	assert_eq!(page.view.banner(), None);
}

// --- setup ---

#[rstest]
fn test_start_sets_min_date_to_tomorrow(page: Page) {
	page.controller.start();

	assert_eq!(page.view.min_date().as_deref(), Some("2024-06-16"));
}

#[rstest]
fn test_builder_uses_delivery_settings() {
	let mut settings = SiteSettings::default();
	settings.delivery = DeliverySettings::default().with_backend("console");

	let controller = PageController::builder(Rc::new(MemoryView::new()), Rc::new(ManualTimers::new()))
		.settings(settings)
		.build()
		.unwrap();

	assert_eq!(controller.backend_name(), "console");
}

#[rstest]
#[case("carrier-pigeon")]
#[case("emailjs")]
fn test_builder_rejects_unusable_backend(#[case] name: &str) {
	let mut settings = SiteSettings::default();
	settings.delivery = DeliverySettings::default().with_backend(name);

	let result = PageController::builder(Rc::new(MemoryView::new()), Rc::new(ManualTimers::new()))
		.settings(settings)
		.build();

	assert!(matches!(result, Err(PageError::Delivery(_))));
}
