#![forbid(unsafe_code)]

//! Click-to-scroll routing.
//!
//! A navigation click must leave the page in its final state *before* the
//! scroll animation runs: the clicked id is active and the URL fragment names
//! it. The scroll itself is requested and then left to the rendering engine.
//!
//! Order of effects for [`ScrollRouter::navigate`]:
//!
//! 1. measure the target section and the nav bar,
//! 2. request a scroll to `section.top - nav_bar_height`,
//! 3. replace the URL fragment with `#<id>`,
//! 4. force the tracker's active id to `id`.
//!
//! Suppressing the browser's own anchor jump happens in the caller, before
//! step 1. An id outside the tracker's nav targets is reported as
//! [`NavError::NotNavigable`], a missing section as
//! [`NavError::MissingSection`]; neither causes any side effect.

use crate::error::NavError;
use crate::layout::{LayoutSource, ScrollBehavior, ScrollRequest};
use crate::logging::debug;
use crate::tracker::{ActiveSectionTracker, Trigger};

/// Result of a successful navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavOutcome {
    /// Requested absolute scroll offset.
    pub destination: f64,
    pub previous_active: String,
    pub active: String,
}

impl NavOutcome {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous_active != self.active
    }
}

/// Parse a location hash (`#skills`, `skills`, or empty) into a target id.
#[must_use]
pub fn initial_target(fragment: &str) -> Option<&str> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    crate::section::is_valid_id(id).then_some(id)
}

/// Routes navigation requests to scrolls and keeps the tracker consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollRouter {
    behavior: ScrollBehavior,
}

impl ScrollRouter {
    /// A router issuing smooth scrolls.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// A router issuing scrolls with `behavior`.
    #[must_use]
    pub const fn with_behavior(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    #[must_use]
    pub const fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Scroll offset that puts `id`'s top edge flush under the nav bar.
    pub fn destination<L: LayoutSource + ?Sized>(
        &self,
        tracker: &ActiveSectionTracker,
        layout: &L,
        id: &str,
    ) -> Result<f64, NavError> {
        if !tracker.is_target(id) {
            return Err(NavError::NotNavigable(id.to_owned()));
        }
        let section = layout
            .section(id)
            .ok_or_else(|| NavError::MissingSection(id.to_owned()))?;
        let nav_height = tracker.nav_bar_height(layout);
        Ok((section.top - nav_height).max(0.0))
    }

    /// Navigate to the section `id`.
    ///
    /// Calling this repeatedly with the same id re-issues the same scroll and
    /// leaves the state unchanged.
    pub fn navigate<L: LayoutSource + ?Sized>(
        &self,
        tracker: &mut ActiveSectionTracker,
        layout: &mut L,
        id: &str,
    ) -> Result<NavOutcome, NavError> {
        let destination = self.destination(tracker, layout, id)?;
        let previous_active = tracker.active_id().to_owned();

        layout.scroll_to(ScrollRequest {
            top: destination,
            behavior: self.behavior,
        });
        layout.replace_fragment(id);
        tracker.force_active(id, Trigger::Click);

        debug!(
            target_id = id,
            destination,
            behavior = self.behavior.as_str(),
            "navigated to section"
        );
        Ok(NavOutcome {
            destination,
            previous_active,
            active: tracker.active_id().to_owned(),
        })
    }
}
