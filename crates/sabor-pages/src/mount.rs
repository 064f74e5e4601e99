//! Event wiring for the live page
//!
//! [`mount`] builds the page controller over the DOM and binds every page
//! event to it. Listeners stay attached for the lifetime of the page.

use crate::controller::PageController;
use crate::dom::{
	ANCHOR_SELECTOR, DomView, FORM_ID, NAV_LINK_SELECTOR, NAV_TOGGLE_ID, SCROLL_TOP_ID,
	control_value, query_all,
};
use crate::error::PageError;
use crate::settings::SiteSettings;
use crate::timers::BrowserTimers;
use crate::view::RevealEntry;
use crate::{debug_log, info_log};
use sabor_forms::ReservationField;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// The page controller of a mounted page.
pub type DomController = PageController<DomView>;

/// A page with its listeners attached.
pub struct MountedPage {
	controller: Rc<DomController>,
	observer: Option<IntersectionObserver>,
}

impl MountedPage {
	pub fn controller(&self) -> &Rc<DomController> {
		&self.controller
	}

	/// Observer driving the fade-in effect, if the browser has one.
	pub fn observer(&self) -> Option<&IntersectionObserver> {
		self.observer.as_ref()
	}
}

/// Attaches `handler` to `target` for the rest of the page's life.
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
	F: FnMut(Event) + 'static,
{
	let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
	target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}

/// Builds the page controller and binds the page's events to it.
///
/// # Errors
///
/// Fails when there is no window or document, when the delivery settings do
/// not describe a usable backend, or when the browser refuses a listener.
pub fn mount(settings: SiteSettings) -> Result<MountedPage, PageError> {
	let window = web_sys::window().ok_or(PageError::Unavailable("window"))?;
	let document = window
		.document()
		.ok_or(PageError::Unavailable("document"))?;

	let view = Rc::new(DomView::new(window.clone(), document.clone()));
	let controller = Rc::new(
		PageController::builder(Rc::clone(&view), Rc::new(BrowserTimers))
			.settings(settings)
			.build()?,
	);
	info_log!("delivering reservations via {}", controller.backend_name());

	bind_scroll(&window, &controller)?;
	bind_navigation(&view, &controller)?;
	bind_form(&view, &controller)?;
	let observer = bind_reveal(&view, &controller)?;

	controller.start();
	Ok(MountedPage {
		controller,
		observer,
	})
}

fn bind_scroll(window: &web_sys::Window, controller: &Rc<DomController>) -> Result<(), PageError> {
	let on_scroll = Rc::clone(controller);
	listen(window, "scroll", move |_| on_scroll.on_scroll())
}

fn bind_navigation(view: &DomView, controller: &Rc<DomController>) -> Result<(), PageError> {
	if let Some(toggle) = view.by_id(NAV_TOGGLE_ID) {
		let c = Rc::clone(controller);
		listen(&toggle, "click", move |_| c.toggle_menu())?;
	}

	for link in query_all(view.document(), NAV_LINK_SELECTOR) {
		let c = Rc::clone(controller);
		listen(&link, "click", move |_| c.close_menu())?;
	}

	for anchor in query_all(view.document(), ANCHOR_SELECTOR) {
		let c = Rc::clone(controller);
		let href = anchor.get_attribute("href").unwrap_or_default();
		listen(&anchor, "click", move |event| {
			event.prevent_default();
			if !c.on_anchor_click(&href) {
				debug_log!("no scroll target for {}", href);
			}
		})?;
	}

	if let Some(button) = view.by_id(SCROLL_TOP_ID) {
		let c = Rc::clone(controller);
		listen(&button, "click", move |_| c.scroll_to_top())?;
	}

	Ok(())
}

fn bind_form(view: &DomView, controller: &Rc<DomController>) -> Result<(), PageError> {
	let Some(form) = view.by_id(FORM_ID) else {
		debug_log!("no reservation form on this page");
		return Ok(());
	};

	for field in ReservationField::ALL {
		let Some(element) = view.by_id(field.as_str()) else {
			continue;
		};

		let c = Rc::clone(controller);
		let source = element.clone();
		listen(&element, "blur", move |_| {
			if let Some(value) = control_value(&source) {
				c.on_field_blur(field, &value);
			}
		})?;

		let c = Rc::clone(controller);
		let source = element.clone();
		listen(&element, "input", move |_| {
			if let Some(value) = control_value(&source) {
				c.on_field_input(field, &value);
			}
		})?;
	}

	let c = Rc::clone(controller);
	listen(&form, "submit", move |event| {
		event.prevent_default();
		let controller = Rc::clone(&c);
		wasm_bindgen_futures::spawn_local(async move {
			controller.submit().await;
		});
	})
}

fn bind_reveal(
	view: &DomView,
	controller: &Rc<DomController>,
) -> Result<Option<IntersectionObserver>, PageError> {
	let reveal = &controller.settings().reveal;
	let targets = query_all(view.document(), &reveal.selector);
	if targets.is_empty() {
		return Ok(None);
	}

	let c = Rc::clone(controller);
	let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
		let entries = entries
			.iter()
			.filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
			.map(|entry| RevealEntry {
				target: entry.target(),
				is_intersecting: entry.is_intersecting(),
			});
		c.reveal(entries);
	}) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(reveal.threshold));
	options.set_root_margin(&reveal.root_margin);
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
	callback.forget();

	for target in &targets {
		observer.observe(target);
	}
	debug_log!("observing {} elements for fade-in", targets.len());

	Ok(Some(observer))
}
