//! Activity log - most-recent-first record of dashboard actions.
//!
//! Entries are prepended as they happen and stamped with the local wall-clock
//! time. Storage is unbounded, but the display only ever reads the newest
//! [`ACTIVITY_DISPLAY_LIMIT`] entries.

use chrono::Local;

/// Maximum number of entries the activity panel displays.
pub const ACTIVITY_DISPLAY_LIMIT: usize = 5;

/// A single timestamped activity record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    /// Human-readable description of what happened
    pub description: String,
    /// Local hour:minute the entry was recorded, pre-formatted for display
    pub time: String,
}

/// Append-at-the-head log of human-readable events.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry stamped with the current local time.
    pub fn record(&mut self, description: impl Into<String>) {
        let time = Local::now().format("%H:%M").to_string();
        self.entries.insert(
            0,
            ActivityEntry {
                description: description.into(),
                time,
            },
        );
    }

    /// The newest entries, most recent first, capped at
    /// [`ACTIVITY_DISPLAY_LIMIT`].
    #[must_use]
    pub fn recent(&self) -> &[ActivityEntry] {
        let end = self.entries.len().min(ACTIVITY_DISPLAY_LIMIT);
        &self.entries[..end]
    }

    /// Total number of recorded entries, including those past the display cap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
