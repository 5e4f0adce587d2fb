//! Cancellable periodic timers on virtual time
//!
//! The session drives both of its periodic tasks (the game clock and the
//! result reveal) through these handles. A stopped timer never fires again
//! until restarted, and a restart begins a fresh period with no backlog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicTimer {
    period_ms: u64,
    /// Virtual time of the next fire (None = stopped)
    next_due_ms: Option<u64>,
}

impl PeriodicTimer {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// (Re)start; the first fire happens one full period after `now_ms`
    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms + self.period_ms);
    }

    pub fn stop(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Consume the fire due at or before `now_ms`, scheduling the next one
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            Some(due) if due <= now_ms => {
                self.next_due_ms = Some(due + self.period_ms);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_period() {
        let mut t = PeriodicTimer::new(50);
        assert!(!t.fire_if_due(1000));

        t.start(100);
        assert_eq!(t.next_due(), Some(150));
        assert!(!t.fire_if_due(149));
        assert!(t.fire_if_due(150));
        assert!(!t.fire_if_due(150));
        assert_eq!(t.next_due(), Some(200));
    }

    #[test]
    fn test_stop_cancels() {
        let mut t = PeriodicTimer::new(100);
        t.start(0);
        t.stop();
        assert!(!t.is_running());
        assert!(!t.fire_if_due(10_000));
    }

    #[test]
    fn test_restart_drops_backlog() {
        let mut t = PeriodicTimer::new(50);
        t.start(0);
        // Restart far in the future: next fire is one period out, not a burst
        t.start(1000);
        assert!(!t.fire_if_due(1049));
        assert!(t.fire_if_due(1050));
        assert!(!t.fire_if_due(1050));
    }
}
