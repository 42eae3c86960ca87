//! Alert-Set Change Tracking
//!
//! The sound cue fires when the *set* of alerting zones changes between
//! consecutive renders. Backend order is not trusted: both sides are sorted
//! before comparison, so `[2, 1]` and `[1, 2]` are the same set.

use super::cmp_zone_ids;

/// Remembers the alert set from the previous render. The baseline is
/// replaced on every render, whether or not a sound played.
#[derive(Debug, Default)]
pub struct AlertTracker {
    last: Vec<String>,
}

impl AlertTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the alert set for this render. Returns whether the sound cue
    /// should play: the set is non-empty and differs from the previous one.
    pub fn observe(&mut self, alerts: &[String]) -> bool {
        let mut current = alerts.to_vec();
        current.sort_by(|a, b| cmp_zone_ids(a, b));
        current.dedup();
        let play = !current.is_empty() && current != self.last;
        self.last = current;
        play
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_alert_plays() {
        let mut tracker = AlertTracker::new();
        assert!(!tracker.observe(&ids(&[])));
        assert!(tracker.observe(&ids(&["1"])));
    }

    #[test]
    fn test_unchanged_set_is_silent() {
        let mut tracker = AlertTracker::new();
        assert!(tracker.observe(&ids(&["1", "2"])));
        assert!(!tracker.observe(&ids(&["1", "2"])));
        assert!(!tracker.observe(&ids(&["1", "2"])));
    }

    #[test]
    fn test_reordered_set_is_silent() {
        let mut tracker = AlertTracker::new();
        assert!(tracker.observe(&ids(&["2", "1"])));
        assert!(!tracker.observe(&ids(&["1", "2"])));
    }

    #[test]
    fn test_changed_set_plays() {
        let mut tracker = AlertTracker::new();
        assert!(tracker.observe(&ids(&["1"])));
        assert!(tracker.observe(&ids(&["1", "2"])));
        assert!(tracker.observe(&ids(&["2"])));
    }

    #[test]
    fn test_clearing_is_silent_but_resets_the_baseline() {
        let mut tracker = AlertTracker::new();
        assert!(tracker.observe(&ids(&["1"])));
        assert!(!tracker.observe(&ids(&[])));
        // the same zone alerting again is a fresh change
        assert!(tracker.observe(&ids(&["1"])));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let mut tracker = AlertTracker::new();
        assert!(tracker.observe(&ids(&["1", "1"])));
        assert!(!tracker.observe(&ids(&["1"])));
    }
}
