#![forbid(unsafe_code)]

//! Coalescing of scroll and resize bursts.
//!
//! Browsers can fire dozens of scroll events between two frames. A
//! recomputation is cheap (one pass over the sections), so by default every
//! event recomputes immediately. With coalescing enabled, events within one
//! frame collapse into a single pending trigger that the host drains once per
//! animation frame.
//!
//! Coalescing never loses the final position: the last event of a burst
//! always leaves a pending trigger, and draining it measures the layout as it
//! is at that moment.

use crate::tracker::Trigger;

/// Merges trigger bursts into at most one recomputation per frame.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoalescer {
    enabled: bool,
    pending: Option<Trigger>,
    event_count: u32,
}

impl ScrollCoalescer {
    /// Create a coalescer. When `enabled` is false every push passes through.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feed a trigger.
    ///
    /// Returns `Some(trigger)` if the caller should recompute now, or `None`
    /// if it was folded into the pending frame. Mount and click triggers are
    /// never deferred.
    pub fn push(&mut self, trigger: Trigger) -> Option<Trigger> {
        if !self.enabled || matches!(trigger, Trigger::Mount | Trigger::Click) {
            return Some(trigger);
        }
        // A resize anywhere in the burst is reported as a resize.
        self.pending = match (self.pending, trigger) {
            (Some(Trigger::Resize), _) => Some(Trigger::Resize),
            (_, latest) => Some(latest),
        };
        self.event_count = self.event_count.saturating_add(1);
        None
    }

    /// Drain the pending trigger for this frame.
    ///
    /// Returns the trigger and the number of events it stands for.
    pub fn drain(&mut self) -> Option<(Trigger, u32)> {
        let trigger = self.pending.take()?;
        let count = std::mem::take(&mut self.event_count);
        Some((trigger, count))
    }

    /// Whether a frame-end drain is needed.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
