//! View interfaces
//!
//! The page controller never touches the DOM directly. It talks to the page
//! through these traits, implemented by `DomView` in
//! the browser and by [`MemoryView`](crate::testing::MemoryView) in tests.
//!
//! Implementations treat missing elements as no-ops: setters do nothing and
//! getters return `None` or a neutral value.

use sabor_forms::ReservationField;

/// Style of the banner shown under the reservation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
	Success,
	Error,
}

impl BannerKind {
	/// CSS class added next to `form-message`.
	pub fn as_class(&self) -> &'static str {
		match self {
			BannerKind::Success => "success",
			BannerKind::Error => "error",
		}
	}
}

/// Vertical geometry of a page section with an id.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub height: f64,
}

impl SectionBounds {
	pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
		Self {
			id: id.into(),
			top,
			height,
		}
	}
}

/// One observation reported by the visibility observer.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealEntry<T> {
	pub target: T,
	pub is_intersecting: bool,
}

/// The reservation form.
pub trait FormView {
	/// Current value of a field, `None` if the field is not on the page.
	fn field_value(&self, field: ReservationField) -> Option<String>;

	/// Free-text comments, `None` if the page has no comments field.
	fn comments(&self) -> Option<String>;

	/// Writes the text of the field's error-display element.
	fn set_error_text(&self, field: ReservationField, message: &str);

	/// Whether the field currently carries the `error` class.
	fn has_error_class(&self, field: ReservationField) -> bool;

	fn set_error_class(&self, field: ReservationField, on: bool);

	/// Shows the banner with the given text and style.
	fn show_banner(&self, message: &str, kind: BannerKind);

	fn hide_banner(&self);

	fn submit_label(&self) -> String;

	fn set_submit_label(&self, label: &str);

	fn set_submit_disabled(&self, disabled: bool);

	/// Clears every form control back to its initial value.
	fn reset_form(&self);

	/// Sets the `min` attribute of the date input (`YYYY-MM-DD`).
	fn set_min_date(&self, date: &str);
}

/// Navigation menu and its links.
pub trait NavView {
	fn is_menu_open(&self) -> bool;

	/// Sets the `active` state of toggle and menu and mirrors it in
	/// `aria-expanded`.
	fn set_menu_open(&self, open: bool);

	/// Clears every nav link's `active` state, then marks the link pointing
	/// at `#section_id`, if there is one.
	fn set_active_link(&self, section_id: &str);
}

/// Window scrolling and scroll-dependent chrome.
pub trait ScrollView {
	/// Vertical scroll offset of the window, in px.
	fn scroll_offset(&self) -> f64;

	/// Smoothly scrolls the window to `top`.
	fn scroll_to(&self, top: f64);

	fn set_navbar_scrolled(&self, scrolled: bool);

	fn set_scroll_top_visible(&self, visible: bool);

	/// Sections with an id, in document order.
	fn sections(&self) -> Vec<SectionBounds>;

	/// Document offset of the element with this id.
	fn element_top(&self, id: &str) -> Option<f64>;
}

/// Elements that fade in when they scroll into view.
pub trait RevealView {
	/// Handle of an observed element.
	type Target;

	/// Adds the `visible` class to the target.
	fn mark_visible(&self, target: &Self::Target);
}

/// Everything the page controller needs from the page.
pub trait PageView: FormView + NavView + ScrollView + RevealView {}

impl<T: FormView + NavView + ScrollView + RevealView> PageView for T {}
