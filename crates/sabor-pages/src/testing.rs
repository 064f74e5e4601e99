//! Testing utilities
//!
//! [`MemoryView`] is a page held entirely in memory and [`ManualTimers`]
//! fires scheduled callbacks only when asked. Together they let the page
//! controller run natively, without a browser.

use crate::timers::Timers;
use crate::view::{BannerKind, FormView, NavView, RevealView, ScrollView, SectionBounds};
use sabor_forms::ReservationField;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Default label of the submit control.
pub const SUBMIT_LABEL: &str = "Book a table";

#[derive(Debug, Clone)]
struct PageState {
	values: HashMap<ReservationField, String>,
	comments: Option<String>,
	error_texts: HashMap<ReservationField, String>,
	error_classes: HashSet<ReservationField>,
	banner: Option<(String, BannerKind)>,
	banner_history: Vec<(String, BannerKind)>,
	submit_label: String,
	submit_disabled: bool,
	reset_count: usize,
	min_date: Option<String>,
	menu_open: bool,
	active_link: Option<String>,
	scroll_offset: f64,
	scrolled_to: Vec<f64>,
	navbar_scrolled: bool,
	scroll_top_visible: bool,
	sections: Vec<SectionBounds>,
	element_tops: HashMap<String, f64>,
	visible: HashSet<String>,
}

/// In-memory page with every reservation field present and empty.
#[derive(Debug, Clone)]
pub struct MemoryView {
	state: RefCell<PageState>,
}

impl Default for MemoryView {
	fn default() -> Self {
		Self::new()
	}
}

impl MemoryView {
	pub fn new() -> Self {
		Self {
			state: RefCell::new(PageState {
				values: ReservationField::ALL
					.into_iter()
					.map(|field| (field, String::new()))
					.collect(),
				comments: Some(String::new()),
				error_texts: HashMap::new(),
				error_classes: HashSet::new(),
				banner: None,
				banner_history: Vec::new(),
				submit_label: SUBMIT_LABEL.to_string(),
				submit_disabled: false,
				reset_count: 0,
				min_date: None,
				menu_open: false,
				active_link: None,
				scroll_offset: 0.0,
				scrolled_to: Vec::new(),
				navbar_scrolled: false,
				scroll_top_visible: false,
				sections: Vec::new(),
				element_tops: HashMap::new(),
				visible: HashSet::new(),
			}),
		}
	}

	/// Sets what the visitor typed into a field.
	pub fn set_value(&self, field: ReservationField, value: impl Into<String>) {
		self.state.borrow_mut().values.insert(field, value.into());
	}

	/// Removes a field from the page.
	pub fn remove_field(&self, field: ReservationField) {
		self.state.borrow_mut().values.remove(&field);
	}

	pub fn set_comments(&self, comments: Option<&str>) {
		self.state.borrow_mut().comments = comments.map(str::to_string);
	}

	pub fn set_scroll_offset(&self, offset: f64) {
		self.state.borrow_mut().scroll_offset = offset;
	}

	/// Adds a section, also making it an anchor target.
	pub fn add_section(&self, id: &str, top: f64, height: f64) {
		let mut state = self.state.borrow_mut();
		state.sections.push(SectionBounds::new(id, top, height));
		state.element_tops.insert(id.to_string(), top);
	}

	pub fn error_text(&self, field: ReservationField) -> String {
		self.state
			.borrow()
			.error_texts
			.get(&field)
			.cloned()
			.unwrap_or_default()
	}

	pub fn banner(&self) -> Option<(String, BannerKind)> {
		self.state.borrow().banner.clone()
	}

	/// Every banner shown so far, oldest first.
	pub fn banner_history(&self) -> Vec<(String, BannerKind)> {
		self.state.borrow().banner_history.clone()
	}

	pub fn is_submit_disabled(&self) -> bool {
		self.state.borrow().submit_disabled
	}

	/// Number of times the form was reset.
	pub fn reset_count(&self) -> usize {
		self.state.borrow().reset_count
	}

	pub fn min_date(&self) -> Option<String> {
		self.state.borrow().min_date.clone()
	}

	pub fn active_link(&self) -> Option<String> {
		self.state.borrow().active_link.clone()
	}

	/// Targets of every programmatic scroll so far.
	pub fn scrolled_to(&self) -> Vec<f64> {
		self.state.borrow().scrolled_to.clone()
	}

	pub fn is_navbar_scrolled(&self) -> bool {
		self.state.borrow().navbar_scrolled
	}

	pub fn is_scroll_top_visible(&self) -> bool {
		self.state.borrow().scroll_top_visible
	}

	pub fn is_visible(&self, target: &str) -> bool {
		self.state.borrow().visible.contains(target)
	}
}

impl FormView for MemoryView {
	fn field_value(&self, field: ReservationField) -> Option<String> {
		self.state.borrow().values.get(&field).cloned()
	}

	fn comments(&self) -> Option<String> {
		self.state.borrow().comments.clone()
	}

	fn set_error_text(&self, field: ReservationField, message: &str) {
		self.state
			.borrow_mut()
			.error_texts
			.insert(field, message.to_string());
	}

	fn has_error_class(&self, field: ReservationField) -> bool {
		self.state.borrow().error_classes.contains(&field)
	}

	fn set_error_class(&self, field: ReservationField, on: bool) {
		let mut state = self.state.borrow_mut();
		if on {
			state.error_classes.insert(field);
		} else {
			state.error_classes.remove(&field);
		}
	}

	fn show_banner(&self, message: &str, kind: BannerKind) {
		let mut state = self.state.borrow_mut();
		state.banner = Some((message.to_string(), kind));
		state.banner_history.push((message.to_string(), kind));
	}

	fn hide_banner(&self) {
		self.state.borrow_mut().banner = None;
	}

	fn submit_label(&self) -> String {
		self.state.borrow().submit_label.clone()
	}

	fn set_submit_label(&self, label: &str) {
		self.state.borrow_mut().submit_label = label.to_string();
	}

	fn set_submit_disabled(&self, disabled: bool) {
		self.state.borrow_mut().submit_disabled = disabled;
	}

	fn reset_form(&self) {
		let mut state = self.state.borrow_mut();
		for value in state.values.values_mut() {
			value.clear();
		}
		if let Some(comments) = state.comments.as_mut() {
			comments.clear();
		}
		state.reset_count += 1;
	}

	fn set_min_date(&self, date: &str) {
		self.state.borrow_mut().min_date = Some(date.to_string());
	}
}

impl NavView for MemoryView {
	fn is_menu_open(&self) -> bool {
		self.state.borrow().menu_open
	}

	fn set_menu_open(&self, open: bool) {
		self.state.borrow_mut().menu_open = open;
	}

	fn set_active_link(&self, section_id: &str) {
		self.state.borrow_mut().active_link = Some(section_id.to_string());
	}
}

impl ScrollView for MemoryView {
	fn scroll_offset(&self) -> f64 {
		self.state.borrow().scroll_offset
	}

	fn scroll_to(&self, top: f64) {
		self.state.borrow_mut().scrolled_to.push(top);
	}

	fn set_navbar_scrolled(&self, scrolled: bool) {
		self.state.borrow_mut().navbar_scrolled = scrolled;
	}

	fn set_scroll_top_visible(&self, visible: bool) {
		self.state.borrow_mut().scroll_top_visible = visible;
	}

	fn sections(&self) -> Vec<SectionBounds> {
		self.state.borrow().sections.clone()
	}

	fn element_top(&self, id: &str) -> Option<f64> {
		self.state.borrow().element_tops.get(id).copied()
	}
}

impl RevealView for MemoryView {
	type Target = String;

	fn mark_visible(&self, target: &String) {
		self.state.borrow_mut().visible.insert(target.clone());
	}
}

/// Timers that hold callbacks until [`fire_all`](Self::fire_all).
#[derive(Default)]
pub struct ManualTimers {
	pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualTimers {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn pending(&self) -> usize {
		self.pending.borrow().len()
	}

	/// Delays of the callbacks still waiting, in scheduling order.
	pub fn delays(&self) -> Vec<Duration> {
		self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
	}

	/// Runs the oldest pending callback. Returns `false` if there was none.
	pub fn fire_next(&self) -> bool {
		let next = {
			let mut pending = self.pending.borrow_mut();
			if pending.is_empty() {
				None
			} else {
				Some(pending.remove(0))
			}
		};
		match next {
			Some((_, callback)) => {
				callback();
				true
			}
			None => false,
		}
	}

	/// Runs every pending callback in scheduling order.
	pub fn fire_all(&self) {
		let pending = std::mem::take(&mut *self.pending.borrow_mut());
		for (_, callback) in pending {
			callback();
		}
	}
}

impl Timers for ManualTimers {
	fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
		self.pending.borrow_mut().push((delay, callback));
	}
}
