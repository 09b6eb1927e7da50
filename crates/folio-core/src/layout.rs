#![forbid(unsafe_code)]

//! The document/viewport collaborator.
//!
//! [`LayoutSource`] is the only surface through which the tracker and router
//! touch their environment: live measurements in, scroll and fragment requests
//! out. `folio-web` implements it over the DOM; [`StaticLayout`] implements it
//! in memory for tests and native harnesses.

use crate::nav::NavItem;
use crate::section::Section;

/// How a requested scroll should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated by the rendering engine; not awaited.
    #[default]
    Smooth,
    /// Jump immediately.
    Instant,
}

impl ScrollBehavior {
    /// Name as used by `ScrollToOptions.behavior`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Instant => "instant",
        }
    }
}

/// An absolute vertical scroll request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub top: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    #[must_use]
    pub const fn smooth(top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Smooth,
        }
    }

    #[must_use]
    pub const fn instant(top: f64) -> Self {
        Self {
            top,
            behavior: ScrollBehavior::Instant,
        }
    }
}

/// Read and drive the page layout.
///
/// Every read must reflect the layout *now*; implementations may cache within
/// one event turn but never across turns.
pub trait LayoutSource {
    /// Measure every identifiable section, in document order.
    fn sections(&self) -> Vec<Section>;

    /// Measure one section by id.
    fn section(&self, id: &str) -> Option<Section> {
        self.sections().into_iter().find(|s| s.id == id)
    }

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    /// Rendered height of the navigation bar, or `None` before it mounts.
    fn nav_bar_height(&self) -> Option<f64>;

    /// Request a scroll. Animated scrolls are not awaited.
    fn scroll_to(&mut self, request: ScrollRequest);

    /// Replace the location fragment with `#<id>` without a history entry.
    fn replace_fragment(&mut self, id: &str);
}

/// Nav items whose target section is absent from the document.
///
/// Such items can never become active by scrolling. Hosts call this in
/// development builds and log each miss.
#[must_use]
pub fn check_nav_integrity<'a, L: LayoutSource + ?Sized>(
    items: &'a [NavItem],
    layout: &L,
) -> Vec<&'a NavItem> {
    let sections = layout.sections();
    items
        .iter()
        .filter(|item| !sections.iter().any(|s| s.id == item.id))
        .collect()
}

/// In-memory document for tests, benches, and native harnesses.
///
/// Scroll requests move the offset immediately (animations complete
/// instantly) unless [`Self::hold_scrolls`] is set, in which case they are
/// only recorded, modeling an animation that has not finished yet.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    pub sections: Vec<Section>,
    pub scroll: f64,
    pub nav_height: Option<f64>,
    pub hold_scrolls: bool,
    pub scroll_requests: Vec<ScrollRequest>,
    pub fragment: Option<String>,
    pub fragment_writes: usize,
}

#[cfg(any(test, feature = "test-helpers"))]
impl StaticLayout {
    /// Build a layout from `(id, top, height)` triples with a mounted nav bar.
    #[must_use]
    pub fn new(nav_height: f64, sections: &[(&str, f64, f64)]) -> Self {
        Self {
            sections: sections
                .iter()
                .map(|&(id, top, height)| Section::new(id, top, height))
                .collect(),
            nav_height: Some(nav_height),
            ..Self::default()
        }
    }

    /// Contiguous sections stacked from offset zero.
    #[must_use]
    pub fn stacked(nav_height: f64, sections: &[(&str, f64)]) -> Self {
        let mut top = 0.0;
        let mut out = Vec::with_capacity(sections.len());
        for &(id, height) in sections {
            out.push(Section::new(id, top, height));
            top += height;
        }
        Self {
            sections: out,
            nav_height: Some(nav_height),
            ..Self::default()
        }
    }

    /// Total document height covered by sections.
    #[must_use]
    pub fn document_height(&self) -> f64 {
        self.sections
            .iter()
            .map(Section::bottom)
            .fold(0.0, f64::max)
    }

    /// Simulate the user scrolling.
    pub fn set_scroll(&mut self, offset: f64) {
        self.scroll = offset.max(0.0);
    }

    /// Last scroll request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<ScrollRequest> {
        self.scroll_requests.last().copied()
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl LayoutSource for StaticLayout {
    fn sections(&self) -> Vec<Section> {
        self.sections.clone()
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn nav_bar_height(&self) -> Option<f64> {
        self.nav_height
    }

    fn scroll_to(&mut self, request: ScrollRequest) {
        self.scroll_requests.push(request);
        if !self.hold_scrolls {
            self.scroll = request.top.max(0.0);
        }
    }

    fn replace_fragment(&mut self, id: &str) {
        self.fragment = Some(format!("#{id}"));
        self.fragment_writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::PORTFOLIO_NAV;
    use pretty_assertions::assert_eq;

    #[test]
    fn stacked_layout_is_contiguous() {
        let layout = StaticLayout::stacked(60.0, &[("home", 800.0), ("service", 800.0)]);
        assert_eq!(layout.sections[1].top, 800.0);
        assert_eq!(layout.document_height(), 1600.0);
    }

    #[test]
    fn default_section_lookup_uses_live_sections() {
        let mut layout = StaticLayout::stacked(60.0, &[("home", 800.0), ("service", 800.0)]);
        assert_eq!(layout.section("service").map(|s| s.top), Some(800.0));
        layout.sections[0].height = 1000.0;
        layout.sections[1].top = 1000.0;
        assert_eq!(layout.section("service").map(|s| s.top), Some(1000.0));
        assert_eq!(layout.section("contact"), None);
    }

    #[test]
    fn integrity_check_reports_missing_targets() {
        let layout = StaticLayout::stacked(60.0, &[("home", 800.0), ("skills", 800.0)]);
        let missing: Vec<_> = check_nav_integrity(&PORTFOLIO_NAV, &layout)
            .into_iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(missing, vec!["service", "education", "projects", "contact"]);
    }

    #[test]
    fn held_scrolls_do_not_move_viewport() {
        let mut layout = StaticLayout::stacked(60.0, &[("home", 800.0)]);
        layout.hold_scrolls = true;
        layout.scroll_to(ScrollRequest::smooth(500.0));
        assert_eq!(layout.scroll, 0.0);
        assert_eq!(layout.last_request(), Some(ScrollRequest::smooth(500.0)));
    }

    #[test]
    fn behavior_names_match_dom() {
        assert_eq!(ScrollBehavior::Smooth.as_str(), "smooth");
        assert_eq!(ScrollBehavior::Instant.as_str(), "instant");
    }
}
