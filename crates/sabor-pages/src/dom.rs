//! Browser DOM implementation of the page views
//!
//! Elements are looked up on every call, so markup that is missing a piece
//! (no comments field, no scroll-to-top button) simply turns the matching
//! operation into a no-op.

use crate::settings::{SETTINGS_ELEMENT_ID, SiteSettings};
use crate::view::{BannerKind, FormView, NavView, RevealView, ScrollView, SectionBounds};
use crate::warn_log;
use sabor_forms::ReservationField;
use wasm_bindgen::JsCast;
use web_sys::{
	Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
	HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window,
};

pub(crate) const NAVBAR_ID: &str = "navbar";
pub(crate) const NAV_TOGGLE_ID: &str = "navToggle";
pub(crate) const NAV_MENU_ID: &str = "navMenu";
pub(crate) const NAV_LINK_SELECTOR: &str = ".nav-link";
pub(crate) const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub(crate) const SCROLL_TOP_ID: &str = "scrollTop";
pub(crate) const FORM_ID: &str = "reservationForm";
const FORM_MESSAGE_ID: &str = "formMessage";
const SUBMIT_SELECTOR: &str = ".btn-submit";
const SECTION_SELECTOR: &str = "section[id]";
const COMMENTS_ID: &str = "comments";

/// Current value of an input, select or textarea.
pub fn control_value(element: &Element) -> Option<String> {
	if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
		Some(input.value())
	} else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
		Some(select.value())
	} else {
		element
			.dyn_ref::<HtmlTextAreaElement>()
			.map(HtmlTextAreaElement::value)
	}
}

/// Every element matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
	let Ok(list) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Reads the settings embedded in the page.
///
/// A page without a settings element uses the defaults. So does a page whose
/// settings do not parse, after logging a warning.
pub fn load_settings(document: &Document) -> SiteSettings {
	let Some(text) = document
		.get_element_by_id(SETTINGS_ELEMENT_ID)
		.and_then(|element| element.text_content())
	else {
		return SiteSettings::default();
	};
	SiteSettings::from_json(&text).unwrap_or_else(|e| {
		warn_log!("Ignoring site settings: {}", e);
		SiteSettings::default()
	})
}

fn set_class(element: &Element, class: &str, on: bool) {
	let _ = element.class_list().toggle_with_force(class, on);
}

/// The live page.
#[derive(Debug, Clone)]
pub struct DomView {
	window: Window,
	document: Document,
}

impl DomView {
	pub fn new(window: Window, document: Document) -> Self {
		Self { window, document }
	}

	pub fn window(&self) -> &Window {
		&self.window
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	pub(crate) fn by_id(&self, id: &str) -> Option<Element> {
		self.document.get_element_by_id(id)
	}

	fn form(&self) -> Option<HtmlFormElement> {
		self.by_id(FORM_ID)?.dyn_into::<HtmlFormElement>().ok()
	}

	fn submit_control(&self) -> Option<Element> {
		self.form()?.query_selector(SUBMIT_SELECTOR).ok().flatten()
	}

	fn banner_element(&self) -> Option<HtmlElement> {
		self.by_id(FORM_MESSAGE_ID)?.dyn_into::<HtmlElement>().ok()
	}
}

impl FormView for DomView {
	fn field_value(&self, field: ReservationField) -> Option<String> {
		control_value(&self.by_id(field.as_str())?)
	}

	fn comments(&self) -> Option<String> {
		control_value(&self.by_id(COMMENTS_ID)?)
	}

	fn set_error_text(&self, field: ReservationField, message: &str) {
		if let Some(element) = self.by_id(&field.error_element_id()) {
			element.set_text_content(Some(message));
		}
	}

	fn has_error_class(&self, field: ReservationField) -> bool {
		self.by_id(field.as_str())
			.is_some_and(|element| element.class_list().contains("error"))
	}

	fn set_error_class(&self, field: ReservationField, on: bool) {
		if let Some(element) = self.by_id(field.as_str()) {
			set_class(&element, "error", on);
		}
	}

	fn show_banner(&self, message: &str, kind: BannerKind) {
		if let Some(banner) = self.banner_element() {
			banner.set_text_content(Some(message));
			banner.set_class_name(&format!("form-message {}", kind.as_class()));
			let _ = banner.style().set_property("display", "block");
		}
	}

	fn hide_banner(&self) {
		if let Some(banner) = self.banner_element() {
			let _ = banner.style().set_property("display", "none");
		}
	}

	fn submit_label(&self) -> String {
		self.submit_control()
			.and_then(|button| button.text_content())
			.unwrap_or_default()
	}

	fn set_submit_label(&self, label: &str) {
		if let Some(button) = self.submit_control() {
			button.set_text_content(Some(label));
		}
	}

	fn set_submit_disabled(&self, disabled: bool) {
		if let Some(button) = self
			.submit_control()
			.and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
		{
			button.set_disabled(disabled);
		}
	}

	fn reset_form(&self) {
		if let Some(form) = self.form() {
			form.reset();
		}
	}

	fn set_min_date(&self, date: &str) {
		if let Some(input) = self.by_id(ReservationField::Date.as_str()) {
			let _ = input.set_attribute("min", date);
		}
	}
}

impl NavView for DomView {
	fn is_menu_open(&self) -> bool {
		self.by_id(NAV_TOGGLE_ID)
			.is_some_and(|toggle| toggle.class_list().contains("active"))
	}

	fn set_menu_open(&self, open: bool) {
		if let Some(toggle) = self.by_id(NAV_TOGGLE_ID) {
			set_class(&toggle, "active", open);
			let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
		}
		if let Some(menu) = self.by_id(NAV_MENU_ID) {
			set_class(&menu, "active", open);
		}
	}

	fn set_active_link(&self, section_id: &str) {
		let target = format!("#{}", section_id);
		for link in query_all(&self.document, NAV_LINK_SELECTOR) {
			let active = link.get_attribute("href").as_deref() == Some(target.as_str());
			set_class(&link, "active", active);
		}
	}
}

impl ScrollView for DomView {
	fn scroll_offset(&self) -> f64 {
		self.window.scroll_y().unwrap_or(0.0)
	}

	fn scroll_to(&self, top: f64) {
		let options = ScrollToOptions::new();
		options.set_top(top);
		options.set_behavior(ScrollBehavior::Smooth);
		self.window.scroll_to_with_scroll_to_options(&options);
	}

	fn set_navbar_scrolled(&self, scrolled: bool) {
		if let Some(navbar) = self.by_id(NAVBAR_ID) {
			set_class(&navbar, "scrolled", scrolled);
		}
	}

	fn set_scroll_top_visible(&self, visible: bool) {
		if let Some(button) = self.by_id(SCROLL_TOP_ID) {
			set_class(&button, "visible", visible);
		}
	}

	fn sections(&self) -> Vec<SectionBounds> {
		query_all(&self.document, SECTION_SELECTOR)
			.into_iter()
			.filter_map(|element| element.dyn_into::<HtmlElement>().ok())
			.map(|section| {
				SectionBounds::new(
					section.id(),
					f64::from(section.offset_top()),
					f64::from(section.offset_height()),
				)
			})
			.collect()
	}

	fn element_top(&self, id: &str) -> Option<f64> {
		let element = self.by_id(id)?.dyn_into::<HtmlElement>().ok()?;
		Some(f64::from(element.offset_top()))
	}
}

impl RevealView for DomView {
	type Target = Element;

	fn mark_visible(&self, target: &Element) {
		let _ = target.class_list().add_1("visible");
	}
}
