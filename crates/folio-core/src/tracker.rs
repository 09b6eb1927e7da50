#![forbid(unsafe_code)]

//! Active-section tracking.
//!
//! The tracker answers one question on every scroll, resize, or mount: which
//! section sits just beneath the fixed navigation bar? It probes a single
//! point,
//!
//! ```text
//! probe = scroll_offset + nav_bar_height + probe_bias
//! ```
//!
//! and picks the section whose half-open band `[top, top + height)` holds it.
//! The bias keeps a section from activating while its top edge is still
//! exactly under the bar.
//!
//! # Invariants
//!
//! - Exactly one id is active at all times, and it is always a navigation
//!   target. With no match, the configured default (`home`) is active.
//! - If bands overlap, the *last* match in document order wins.
//! - A section without a nav link (`hire-me` on the portfolio page) credits
//!   the nearest linked section that starts above the probe point, so some
//!   link stays highlighted while it is on screen.
//! - Measurements are read fresh from the [`LayoutSource`] on every call;
//!   nothing positional is kept between calls.
//!
//! # Example
//!
//! ```
//! use folio_core::{ActiveSectionTracker, StaticLayout, TrackerConfig, Trigger};
//!
//! let mut layout = StaticLayout::stacked(
//!     60.0,
//!     &[("home", 800.0), ("service", 800.0), ("skills", 800.0)],
//! );
//! let mut tracker = ActiveSectionTracker::new(TrackerConfig::default());
//! tracker.mount(&layout);
//! assert_eq!(tracker.active_id(), "home");
//!
//! layout.set_scroll(750.0);
//! tracker.recompute(&layout, Trigger::Scroll);
//! assert_eq!(tracker.active_id(), "service");
//! ```

use crate::config::TrackerConfig;
use crate::layout::LayoutSource;
use crate::logging::{debug, trace};
use crate::nav::{NavItem, PORTFOLIO_NAV};
use crate::section::Section;

/// What caused a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    Scroll,
    Resize,
    Click,
}

impl Trigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mount => "mount",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::Click => "click",
        }
    }
}

/// Observable tracker state.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerState {
    pub active_id: String,
    /// Nav bar height used by the most recent computation.
    pub nav_bar_height: f64,
}

/// Emitted when the active id actually changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveChange {
    pub previous: String,
    pub current: String,
    pub trigger: Trigger,
}

/// The probe point for a given scroll offset.
#[inline]
#[must_use]
pub fn probe_point(scroll_offset: f64, nav_bar_height: f64, bias: f64) -> f64 {
    scroll_offset + nav_bar_height + bias
}

/// Id of the last section containing `probe`, or `default_id`.
///
/// When that section is not a target (`is_target` returns `false`), the
/// linked section with the greatest `top` at or above `probe` is used instead,
/// falling back to `default_id` if there is none.
#[must_use]
pub fn resolve_active<'a>(
    sections: &'a [Section],
    probe: f64,
    is_target: impl Fn(&str) -> bool,
    default_id: &'a str,
) -> &'a str {
    let Some(hit) = sections.iter().rev().find(|section| section.contains(probe)) else {
        return default_id;
    };
    if is_target(&hit.id) {
        return &hit.id;
    }
    sections
        .iter()
        .filter(|section| section.height > 0.0 && section.top <= probe && is_target(&section.id))
        .max_by(|a, b| a.top.total_cmp(&b.top))
        .map_or(default_id, |section| section.id.as_str())
}

/// Keeps the active section id in sync with the viewport.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    config: TrackerConfig,
    state: TrackerState,
    /// Ids that may become active: the nav items plus the default.
    targets: Vec<String>,
    recomputes: u64,
}

impl ActiveSectionTracker {
    /// Create a tracker for [`PORTFOLIO_NAV`] with the default id active.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self::with_nav(config, &PORTFOLIO_NAV)
    }

    /// Create a tracker whose active id is always one of `items` (or the
    /// configured default).
    #[must_use]
    pub fn with_nav(config: TrackerConfig, items: &[NavItem]) -> Self {
        let state = TrackerState {
            active_id: config.default_id.clone(),
            nav_bar_height: config.fallback_nav_height_px,
        };
        let mut targets: Vec<String> = items.iter().map(|item| item.id.to_owned()).collect();
        if !targets.contains(&config.default_id) {
            targets.push(config.default_id.clone());
        }
        Self {
            config,
            state,
            targets,
            recomputes: 0,
        }
    }

    /// Whether `id` may become active, either by measurement or by a click.
    #[must_use]
    pub fn is_target(&self, id: &str) -> bool {
        self.targets.iter().any(|target| target == id)
    }

    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    #[must_use]
    pub fn active_id(&self) -> &str {
        &self.state.active_id
    }

    /// Number of completed (non-skipped) recomputations.
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Nav bar height from `layout`, or the configured fallback.
    #[must_use]
    pub fn nav_bar_height<L: LayoutSource + ?Sized>(&self, layout: &L) -> f64 {
        layout
            .nav_bar_height()
            .filter(|h| h.is_finite() && *h >= 0.0)
            .unwrap_or(self.config.fallback_nav_height_px)
    }

    /// Initial computation, run once before any event arrives.
    pub fn mount<L: LayoutSource + ?Sized>(&mut self, layout: &L) -> Option<ActiveChange> {
        self.recompute(layout, Trigger::Mount)
    }

    /// Recompute the active id from fresh measurements.
    ///
    /// Returns `Some` only if the active id changed. When the document has no
    /// measurable sections yet, the computation is skipped and the current id
    /// is kept.
    pub fn recompute<L: LayoutSource + ?Sized>(
        &mut self,
        layout: &L,
        trigger: Trigger,
    ) -> Option<ActiveChange> {
        let sections = layout.sections();
        if sections.is_empty() {
            trace!(trigger = trigger.as_str(), "no sections mounted, skipping");
            return None;
        }

        let nav_height = self.nav_bar_height(layout);
        let scroll = layout.scroll_offset();
        let probe = probe_point(scroll, nav_height, self.config.probe_bias_px);
        let next = resolve_active(
            &sections,
            probe,
            |id| self.is_target(id),
            &self.config.default_id,
        )
        .to_owned();

        self.recomputes += 1;
        self.state.nav_bar_height = nav_height;
        trace!(
            trigger = trigger.as_str(),
            scroll,
            nav_height,
            probe,
            active = %next,
            "recomputed active section"
        );
        self.assign(next, trigger)
    }

    /// Set the active id directly, bypassing measurement.
    pub fn force_active(&mut self, id: &str, trigger: Trigger) -> Option<ActiveChange> {
        self.assign(id.to_owned(), trigger)
    }

    fn assign(&mut self, next: String, trigger: Trigger) -> Option<ActiveChange> {
        if next == self.state.active_id {
            return None;
        }
        let previous = std::mem::replace(&mut self.state.active_id, next);
        debug!(
            from = %previous,
            to = %self.state.active_id,
            trigger = trigger.as_str(),
            "active section changed"
        );
        Some(ActiveChange {
            previous,
            current: self.state.active_id.clone(),
            trigger,
        })
    }
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StaticLayout;
    use pretty_assertions::assert_eq;

    fn three_sections() -> StaticLayout {
        StaticLayout::new(
            60.0,
            &[
                ("home", 0.0, 800.0),
                ("service", 800.0, 800.0),
                ("skills", 1600.0, 800.0),
            ],
        )
    }

    fn active_at(scroll: f64) -> String {
        let mut layout = three_sections();
        layout.set_scroll(scroll);
        let mut tracker = ActiveSectionTracker::default();
        tracker.recompute(&layout, Trigger::Scroll);
        tracker.active_id().to_owned()
    }

    #[test]
    fn probe_adds_bar_and_bias() {
        assert_eq!(probe_point(750.0, 60.0, 5.0), 815.0);
        assert_eq!(probe_point(0.0, 60.0, 5.0), 65.0);
    }

    #[test]
    fn scenario_offsets() {
        assert_eq!(active_at(750.0), "service");
        assert_eq!(active_at(795.0), "service");
        assert_eq!(active_at(0.0), "home");
    }

    #[test]
    fn switch_happens_once_bias_clears_the_edge() {
        // probe 799 at scroll 734, probe 800 at scroll 735.
        assert_eq!(active_at(734.0), "home");
        assert_eq!(active_at(735.0), "service");
    }

    #[test]
    fn falls_back_to_default_above_first_section() {
        let mut layout = StaticLayout::new(60.0, &[("service", 500.0, 400.0)]);
        let mut tracker = ActiveSectionTracker::default();
        assert_eq!(tracker.mount(&layout), None);
        assert_eq!(tracker.active_id(), "home");

        layout.set_scroll(600.0);
        tracker.recompute(&layout, Trigger::Scroll);
        assert_eq!(tracker.active_id(), "service");

        layout.set_scroll(5000.0);
        let change = tracker.recompute(&layout, Trigger::Scroll).unwrap();
        assert_eq!(change.previous, "service");
        assert_eq!(change.current, "home");
    }

    #[test]
    fn last_overlapping_match_wins() {
        let sections = vec![
            Section::new("a", 0.0, 1000.0),
            Section::new("b", 500.0, 1000.0),
        ];
        let any = |_: &str| true;
        assert_eq!(resolve_active(&sections, 600.0, any, "home"), "b");
        assert_eq!(resolve_active(&sections, 100.0, any, "home"), "a");
        assert_eq!(resolve_active(&sections, 5000.0, any, "home"), "home");
    }

    #[test]
    fn unlinked_section_credits_the_linked_section_above() {
        let sections = vec![
            Section::new("home", 0.0, 800.0),
            Section::new("education", 800.0, 800.0),
            Section::new("hire-me", 1600.0, 400.0),
            Section::new("skills", 2000.0, 800.0),
        ];
        let linked = |id: &str| id != "hire-me";
        assert_eq!(resolve_active(&sections, 1700.0, linked, "home"), "education");
        assert_eq!(resolve_active(&sections, 2000.0, linked, "home"), "skills");

        // Nothing linked above the probe: default.
        let only_home_linked = |id: &str| id == "home";
        let tail = &sections[2..];
        assert_eq!(resolve_active(tail, 1700.0, only_home_linked, "home"), "home");
    }

    #[test]
    fn portfolio_scroll_always_highlights_exactly_one_link() {
        use crate::nav::link_views;
        use crate::section::SectionRegistry;

        let registry = SectionRegistry::portfolio();
        let heights: Vec<(&str, f64)> = registry
            .ids()
            .iter()
            .map(|id| (id.as_str(), 800.0))
            .collect();
        let mut layout = StaticLayout::stacked(60.0, &heights);
        let mut tracker = ActiveSectionTracker::default();

        // hire-me spans [2400, 3200); probe 2565 sits inside it.
        layout.set_scroll(2500.0);
        tracker.recompute(&layout, Trigger::Scroll);
        assert_eq!(tracker.active_id(), "education");

        let end = layout.document_height() as u32;
        for scroll in (0..end).step_by(50) {
            layout.set_scroll(f64::from(scroll));
            tracker.recompute(&layout, Trigger::Scroll);
            let current = link_views(&PORTFOLIO_NAV, tracker.active_id())
                .into_iter()
                .filter(|view| view.current)
                .count();
            assert_eq!(current, 1, "scroll {scroll} active {}", tracker.active_id());
        }
    }

    #[test]
    fn targets_are_nav_ids_plus_default() {
        let config = TrackerConfig {
            default_id: "intro".into(),
            ..TrackerConfig::default()
        };
        let tracker = ActiveSectionTracker::with_nav(config, &PORTFOLIO_NAV[..2]);
        assert!(tracker.is_target("home"));
        assert!(tracker.is_target("service"));
        assert!(tracker.is_target("intro"));
        assert!(!tracker.is_target("skills"));
        assert!(!tracker.is_target("hire-me"));
    }

    #[test]
    fn unchanged_id_reports_no_change() {
        let layout = three_sections();
        let mut tracker = ActiveSectionTracker::default();
        assert_eq!(tracker.recompute(&layout, Trigger::Scroll), None);
        assert_eq!(tracker.recompute(&layout, Trigger::Resize), None);
        assert_eq!(tracker.recompute_count(), 2);
    }

    #[test]
    fn unmounted_nav_uses_fallback_height() {
        let mut layout = three_sections();
        layout.nav_height = None;
        layout.set_scroll(735.0);
        let mut tracker = ActiveSectionTracker::default();
        tracker.recompute(&layout, Trigger::Scroll);
        assert_eq!(tracker.state().nav_bar_height, 60.0);
        assert_eq!(tracker.active_id(), "service");
    }

    #[test]
    fn taller_nav_bar_shifts_the_probe() {
        let mut layout = three_sections();
        layout.nav_height = Some(70.0);
        layout.set_scroll(725.0);
        let mut tracker = ActiveSectionTracker::default();
        tracker.recompute(&layout, Trigger::Resize);
        assert_eq!(tracker.active_id(), "service");
        assert_eq!(tracker.state().nav_bar_height, 70.0);
    }

    #[test]
    fn no_sections_skips_computation() {
        let layout = StaticLayout::default();
        let mut tracker = ActiveSectionTracker::default();
        tracker.force_active("skills", Trigger::Click);
        assert_eq!(tracker.recompute(&layout, Trigger::Scroll), None);
        assert_eq!(tracker.active_id(), "skills");
        assert_eq!(tracker.recompute_count(), 0);
    }

    #[test]
    fn reflow_is_picked_up_without_caching() {
        let mut layout = three_sections();
        layout.set_scroll(900.0);
        let mut tracker = ActiveSectionTracker::default();
        tracker.recompute(&layout, Trigger::Scroll);
        assert_eq!(tracker.active_id(), "service");

        // Home grows (late image load); service now starts further down.
        layout.sections[0].height = 1200.0;
        layout.sections[1].top = 1200.0;
        layout.sections[2].top = 2000.0;
        let change = tracker.recompute(&layout, Trigger::Resize).unwrap();
        assert_eq!(change.current, "home");
        assert_eq!(change.trigger, Trigger::Resize);
    }
}
