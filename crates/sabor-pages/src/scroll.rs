//! Scroll-driven effects
//!
//! Navbar style, scroll-to-top visibility and the active-section highlight
//! all derive from the window's scroll offset. The fade-in reveal is driven
//! by visibility reports instead.

use crate::controller::PageController;
use crate::view::{PageView, RevealEntry, SectionBounds};

/// Whether `offset` is strictly past `threshold`.
pub fn is_past(offset: f64, threshold: f64) -> bool {
	offset > threshold
}

/// Id of the section whose highlight range contains `offset`.
///
/// A section's range is `[top - section_offset, top - section_offset + height)`.
/// When ranges overlap, the last matching section in document order wins.
pub fn active_section(
	offset: f64,
	sections: &[SectionBounds],
	section_offset: f64,
) -> Option<&str> {
	sections
		.iter()
		.filter(|section| {
			let start = section.top - section_offset;
			offset >= start && offset < start + section.height
		})
		.last()
		.map(|section| section.id.as_str())
}

impl<V: PageView + 'static> PageController<V> {
	/// Scroll offset seen by the last scroll event.
	pub fn last_scroll(&self) -> f64 {
		self.last_scroll.get()
	}

	/// Handles a window scroll event.
	pub fn on_scroll(&self) {
		let offset = self.view.scroll_offset();
		let settings = &self.settings;

		self.view
			.set_navbar_scrolled(is_past(offset, settings.navbar_scroll_threshold));
		self.view
			.set_scroll_top_visible(is_past(offset, settings.scroll_top_threshold));

		let sections = self.view.sections();
		// No match keeps whatever link is currently highlighted.
		if let Some(id) = active_section(offset, &sections, settings.section_offset) {
			self.view.set_active_link(id);
		}

		self.last_scroll.set(offset);
	}

	/// Smoothly scrolls back to the top of the page.
	pub fn scroll_to_top(&self) {
		self.view.scroll_to(0.0);
	}

	/// Handles a batch of visibility reports. Elements that entered the
	/// viewport become visible; leaving it again changes nothing.
	pub fn reveal<I>(&self, entries: I)
	where
		I: IntoIterator<Item = RevealEntry<V::Target>>,
	{
		for entry in entries {
			if entry.is_intersecting {
				self.view.mark_visible(&entry.target);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn sections() -> Vec<SectionBounds> {
		vec![
			SectionBounds::new("home", 0.0, 600.0),
			SectionBounds::new("menu", 600.0, 800.0),
			SectionBounds::new("reservations", 1400.0, 700.0),
		]
	}

	#[rstest]
	#[case(100.0, 100.0, false)]
	#[case(100.5, 100.0, true)]
	#[case(0.0, 300.0, false)]
	#[case(301.0, 300.0, true)]
	fn test_is_past(#[case] offset: f64, #[case] threshold: f64, #[case] expected: bool) {
		assert_eq!(is_past(offset, threshold), expected);
	}

	#[rstest]
	#[case(0.0, Some("home"))]
	#[case(499.0, Some("home"))]
	#[case(500.0, Some("menu"))]
	#[case(1299.0, Some("menu"))]
	#[case(1300.0, Some("reservations"))]
	#[case(1999.0, Some("reservations"))]
	#[case(2000.0, None)]
	fn test_active_section(#[case] offset: f64, #[case] expected: Option<&str>) {
		assert_eq!(active_section(offset, &sections(), 100.0), expected);
	}

	#[rstest]
	fn test_active_section_above_first_range() {
		let sections = vec![SectionBounds::new("about", 400.0, 300.0)];
		assert_eq!(active_section(299.0, &sections, 100.0), None);
		assert_eq!(active_section(300.0, &sections, 100.0), Some("about"));
	}

	#[rstest]
	fn test_active_section_overlap_last_wins() {
		let sections = vec![
			SectionBounds::new("outer", 0.0, 1000.0),
			SectionBounds::new("inner", 300.0, 200.0),
		];
		assert_eq!(active_section(250.0, &sections, 100.0), Some("inner"));
		assert_eq!(active_section(450.0, &sections, 100.0), Some("outer"));
	}
}
