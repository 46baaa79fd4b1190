//! In-memory run history.
//!
//! An explicit service object owned by the hosting driver; the core
//! pipeline never touches it. Completed bundles are appended newest-first
//! and kept whole so a declined or failed publish can be retried later
//! without re-running extraction. Nothing persists across restarts.

use crate::types::bundle::ResultBundle;

/// Newest-first sequence of completed runs.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<ResultBundle>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed run. Newest entries come first.
    pub fn record(&mut self, bundle: ResultBundle) {
        self.entries.insert(0, bundle);
    }

    /// All recorded runs, newest first.
    pub fn entries(&self) -> &[ResultBundle] {
        &self.entries
    }

    /// The most recent run, if any.
    pub fn latest(&self) -> Option<&ResultBundle> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::bundle::Artifact;
    use crate::types::summary::MeetingSummary;
    use chrono::Utc;

    fn bundle(source: &str) -> ResultBundle {
        ResultBundle {
            artifact: Artifact::Meeting(MeetingSummary::placeholder(source)),
            tasks: None,
            accuracy: 0.0,
            processing_time_secs: 0.1,
            source_duration_minutes: 1.0,
            source: source.to_string(),
            completed_at: Utc::now(),
        }
    }

    #[test]
    fn test_newest_first_ordering() {
        let mut history = History::new();
        history.record(bundle("first"));
        history.record(bundle("second"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().source, "second");
        assert_eq!(history.entries()[1].source, "first");
    }

    #[test]
    fn test_empty_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
