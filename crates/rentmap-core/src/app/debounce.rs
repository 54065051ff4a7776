//! Trailing-edge debounce on a logical millisecond clock

/// Coalesces bursts of events into one trailing firing.
///
/// Each [`Debouncer::schedule`] pushes the deadline out; [`Debouncer::fire`]
/// reports `true` once per burst, after the deadline has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    due_ms: Option<u64>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            due_ms: None,
        }
    }

    /// Record an event at `at_ms`, replacing any pending deadline
    pub fn schedule(&mut self, at_ms: u64) -> u64 {
        let due = at_ms.saturating_add(self.delay_ms);
        self.due_ms = Some(due);
        due
    }

    /// Consume the pending deadline if it has passed at `now_ms`
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if due <= now_ms => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> Option<u64> {
        self.due_ms
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }
}
