use std::collections::VecDeque;
use tracing::debug;

/// Entries kept before the oldest is dropped
pub const MAX_EVENTS: usize = 100;

/// Bounded log of recent notable simulation events.
///
/// Every entry is also emitted through `tracing` at debug level.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(MAX_EVENTS),
        }
    }

    /// Record an event
    pub fn record(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        debug!(target: "gridlife::events", "{}", msg);

        if self.events.len() >= MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(msg);
    }

    /// Up to `count` most recent events, oldest first
    pub fn recent(&self, count: usize) -> Vec<String> {
        let skip = self.events.len().saturating_sub(count);
        self.events.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_returns_newest_in_order() {
        let mut log = EventLog::new();
        for i in 0..5 {
            log.record(format!("event {}", i));
        }
        assert_eq!(log.recent(2), vec!["event 3", "event 4"]);
        assert_eq!(log.recent(10).len(), 5);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = EventLog::new();
        for i in 0..(MAX_EVENTS + 20) {
            log.record(format!("event {}", i));
        }
        assert_eq!(log.len(), MAX_EVENTS);
        assert_eq!(log.recent(1), vec![format!("event {}", MAX_EVENTS + 19)]);
        assert_eq!(log.recent(MAX_EVENTS)[0], "event 20");
    }

    #[test]
    fn test_clear() {
        let mut log = EventLog::default();
        log.record("x");
        log.clear();
        assert!(log.is_empty());
        assert!(log.recent(5).is_empty());
    }
}
