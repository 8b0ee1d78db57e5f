//! The transient celebration shown when a day's required meals are all
//! checked.
//!
//! States are idle and active. Activating while already active is a no-op:
//! the deadline is neither restarted nor extended. Deactivation is purely
//! time-based, with no cancellation path.

use std::time::{Duration, Instant};

/// How long a celebration stays active.
pub const CELEBRATION_DURATION: Duration = Duration::from_secs(3);

/// Time-boxed celebration signal.
#[derive(Debug, Default)]
pub struct Celebration {
    deadline: Option<Instant>,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the celebration if idle at `now`. Returns whether it fired.
    pub fn activate(&mut self, now: Instant) -> bool {
        if self.is_active(now) {
            return false;
        }
        self.deadline = Some(now + CELEBRATION_DURATION);
        true
    }

    /// True while the deadline has not passed.
    pub fn is_active(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now < deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_initially() {
        let celebration = Celebration::new();
        assert!(!celebration.is_active(Instant::now()));
    }

    #[test]
    fn test_activate_fires_once() {
        let mut celebration = Celebration::new();
        let now = Instant::now();

        assert!(celebration.activate(now));
        assert!(celebration.is_active(now));
        assert!(celebration.is_active(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_activate_while_active_does_not_extend() {
        let mut celebration = Celebration::new();
        let now = Instant::now();

        assert!(celebration.activate(now));
        // A second qualifying event one second in must not move the deadline.
        assert!(!celebration.activate(now + Duration::from_secs(1)));
        assert!(!celebration.is_active(now + Duration::from_secs(3)));
    }

    #[test]
    fn test_expires_after_duration() {
        let mut celebration = Celebration::new();
        let now = Instant::now();

        celebration.activate(now);
        assert!(!celebration.is_active(now + CELEBRATION_DURATION));
    }

    #[test]
    fn test_rearms_after_expiry() {
        let mut celebration = Celebration::new();
        let now = Instant::now();

        celebration.activate(now);
        let later = now + Duration::from_secs(4);
        assert!(!celebration.is_active(later));
        assert!(celebration.activate(later));
        assert!(celebration.is_active(later + Duration::from_secs(2)));
    }
}
