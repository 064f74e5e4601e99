//! Mobile navigation and in-page anchors

use crate::controller::PageController;
use crate::view::PageView;

/// Section id an in-page anchor points at, if it points at one.
///
/// `"#"` alone and anything not starting with `#` have no target.
pub fn anchor_target(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

impl<V: PageView + 'static> PageController<V> {
	/// Flips the menu between open and closed.
	pub fn toggle_menu(&self) {
		let open = !self.view.is_menu_open();
		self.view.set_menu_open(open);
	}

	/// Closes the menu, e.g. after a nav link was followed.
	pub fn close_menu(&self) {
		self.view.set_menu_open(false);
	}

	/// Handles a click on an in-page anchor. The binding suppresses the
	/// browser's own jump in every case.
	///
	/// Returns whether the page scrolled.
	pub fn on_anchor_click(&self, href: &str) -> bool {
		let Some(id) = anchor_target(href) else {
			return false;
		};
		let Some(top) = self.view.element_top(id) else {
			return false;
		};
		self.view.scroll_to(top - self.settings.anchor_offset);
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("#menu", Some("menu"))]
	#[case("#", None)]
	#[case("", None)]
	#[case("/menu", None)]
	#[case("https://example.com/#menu", None)]
	fn test_anchor_target(#[case] href: &str, #[case] expected: Option<&str>) {
		assert_eq!(anchor_target(href), expected);
	}
}
