//! Browser tests for the DOM-backed page view
//!
//! Run with `wasm-pack test --headless --chrome crates/sabor-pages`.

#[cfg(target_arch = "wasm32")]
mod wasm_tests {
	use sabor_forms::ReservationField;
	use sabor_pages::{BannerKind, DomView, FormView, NavView, ScrollView, load_settings};
	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;
	use web_sys::{Document, HtmlElement, HtmlInputElement};

	wasm_bindgen_test_configure!(run_in_browser);

	const MARKUP: &str = r##"
		<nav id="navbar">
			<button id="navToggle" aria-expanded="false"></button>
			<ul id="navMenu">
				<li><a class="nav-link" href="#home">Home</a></li>
				<li><a class="nav-link" href="#menu">Menu</a></li>
			</ul>
		</nav>
		<section id="home" style="height: 400px">Home</section>
		<section id="menu" style="height: 400px">Menu</section>
		<form id="reservationForm">
			<input id="name" value="Ana">
			<span id="nameError"></span>
			<select id="party-size"><option value="">-</option><option value="2" selected>2</option></select>
			<textarea id="comments">Birthday</textarea>
			<button type="submit" class="btn-submit">Book a table</button>
		</form>
		<div id="formMessage" class="form-message" style="display: none"></div>
	"##;

	fn setup() -> (DomView, Document) {
		let window = web_sys::window().unwrap();
		let document = window.document().unwrap();
		document.body().unwrap().set_inner_html(MARKUP);
		(DomView::new(window, document.clone()), document)
	}

	#[wasm_bindgen_test]
	fn test_reads_control_values() {
		let (view, _) = setup();

		assert_eq!(view.field_value(ReservationField::Name).as_deref(), Some("Ana"));
		assert_eq!(view.field_value(ReservationField::PartySize).as_deref(), Some("2"));
		assert_eq!(view.field_value(ReservationField::Email), None);
		assert_eq!(view.comments().as_deref(), Some("Birthday"));
	}

	#[wasm_bindgen_test]
	fn test_error_text_and_class() {
		let (view, document) = setup();

		view.set_error_text(ReservationField::Name, "Please enter your name");
		view.set_error_class(ReservationField::Name, true);

		let text = document.get_element_by_id("nameError").unwrap().text_content();
		assert_eq!(text.as_deref(), Some("Please enter your name"));
		assert!(view.has_error_class(ReservationField::Name));

		view.set_error_class(ReservationField::Name, false);
		assert!(!view.has_error_class(ReservationField::Name));

		// No error element on the page for email.
		view.set_error_text(ReservationField::Email, "ignored");
	}

	#[wasm_bindgen_test]
	fn test_banner_show_and_hide() {
		let (view, document) = setup();
		let banner = document
			.get_element_by_id("formMessage")
			.unwrap()
			.dyn_into::<HtmlElement>()
			.unwrap();

		view.show_banner("Reservation sent!", BannerKind::Success);
		assert_eq!(banner.class_name(), "form-message success");
		assert_eq!(banner.style().get_property_value("display").unwrap(), "block");

		view.hide_banner();
		assert_eq!(banner.style().get_property_value("display").unwrap(), "none");
	}

	#[wasm_bindgen_test]
	fn test_submit_control() {
		let (view, _) = setup();

		assert_eq!(view.submit_label(), "Book a table");
		view.set_submit_label("Sending...");
		view.set_submit_disabled(true);
		assert_eq!(view.submit_label(), "Sending...");
	}

	#[wasm_bindgen_test]
	fn test_reset_form() {
		let (view, document) = setup();
		let name = document
			.get_element_by_id("name")
			.unwrap()
			.dyn_into::<HtmlInputElement>()
			.unwrap();
		name.set_value("Changed");

		view.reset_form();

		assert_eq!(name.value(), "Ana");
	}

	#[wasm_bindgen_test]
	fn test_menu_state_and_aria() {
		let (view, document) = setup();
		let toggle = document.get_element_by_id("navToggle").unwrap();

		view.set_menu_open(true);
		assert!(view.is_menu_open());
		assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
		assert!(document.get_element_by_id("navMenu").unwrap().class_list().contains("active"));

		view.set_menu_open(false);
		assert!(!view.is_menu_open());
		assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
	}

	#[wasm_bindgen_test]
	fn test_active_link() {
		let (view, document) = setup();
		let links = document.query_selector_all(".nav-link").unwrap();

		view.set_active_link("menu");

		let active: Vec<bool> = (0..links.length())
			.map(|i| {
				links
					.item(i)
					.unwrap()
					.dyn_into::<web_sys::Element>()
					.unwrap()
					.class_list()
					.contains("active")
			})
			.collect();
		assert_eq!(active, vec![false, true]);
	}

	#[wasm_bindgen_test]
	fn test_sections_in_document_order() {
		let (view, _) = setup();

		let ids: Vec<String> = view.sections().into_iter().map(|s| s.id).collect();

		assert_eq!(ids, vec!["home".to_string(), "menu".to_string()]);
		assert!(view.element_top("menu").unwrap() > view.element_top("home").unwrap());
		assert_eq!(view.element_top("missing"), None);
	}

	#[wasm_bindgen_test]
	fn test_settings_fall_back_to_defaults() {
		let (_, document) = setup();
		let script = document.create_element("script").unwrap();
		script.set_id("site-settings");
		script.set_text_content(Some("{ broken"));
		document.body().unwrap().append_child(&script).unwrap();

		let settings = load_settings(&document);

		assert_eq!(settings, sabor_pages::SiteSettings::default());
	}
}
