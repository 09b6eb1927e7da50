//! Bounded journal of active-section changes for host consumption.
//!
//! The page itself never reads this. Embedders and replay harnesses drain it
//! as JSONL to check what the tracker decided and why.

use folio_core::{ActiveChange, TrackerState};
use serde::Serialize;

/// Max changes retained between drains.
pub const MAX_JOURNAL_ENTRIES: usize = 256;

/// One recorded change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    pub seq: u64,
    pub from: String,
    pub to: String,
    pub trigger: &'static str,
    pub scroll_offset: f64,
}

/// Current state as exposed to JavaScript.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSnapshot<'a> {
    pub active_id: &'a str,
    pub nav_bar_height: f64,
    pub recomputes: u64,
    pub mounted: bool,
}

impl<'a> NavSnapshot<'a> {
    #[must_use]
    pub fn new(state: &'a TrackerState, recomputes: u64, mounted: bool) -> Self {
        Self {
            active_id: &state.active_id,
            nav_bar_height: state.nav_bar_height,
            recomputes,
            mounted,
        }
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn push_bounded<T>(queue: &mut Vec<T>, item: T, limit: usize) {
    if queue.len() >= limit {
        let overflow = queue.len() - limit + 1;
        queue.drain(..overflow);
    }
    queue.push(item);
}

/// Ring of recent [`ActiveChange`]s.
#[derive(Debug, Clone, Default)]
pub struct ChangeJournal {
    entries: Vec<JournalEntry>,
    next_seq: u64,
}

impl ChangeJournal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change observed at `scroll_offset`.
    pub fn record(&mut self, change: &ActiveChange, scroll_offset: f64) {
        let entry = JournalEntry {
            seq: self.next_seq,
            from: change.previous.clone(),
            to: change.current.clone(),
            trigger: change.trigger.as_str(),
            scroll_offset,
        };
        self.next_seq += 1;
        push_bounded(&mut self.entries, entry, MAX_JOURNAL_ENTRIES);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain all entries as JSONL, one object per line.
    pub fn drain_jsonl(&mut self) -> String {
        let mut out = String::new();
        for entry in self.entries.drain(..) {
            if let Ok(line) = serde_json::to_string(&entry) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}
