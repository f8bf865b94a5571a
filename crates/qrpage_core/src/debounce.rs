use std::time::Duration;

/// Quiet period after the last edit before the input counts as settled.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Identifies one scheduled settle. Only the most recently issued ticket is live.
pub type Ticket = u64;

/// Ticket gate for debounced input.
///
/// The timer itself lives with the effect runner; this side decides which
/// firing is allowed through. Restarting invalidates any earlier ticket, so a
/// timer that fires after being superseded is ignored even if its
/// cancellation lost the race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    window: Duration,
    last_issued: Ticket,
    pending: Option<Ticket>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_issued: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Issues a new ticket and makes it the only pending one.
    pub fn restart(&mut self) -> Ticket {
        self.last_issued += 1;
        self.pending = Some(self.last_issued);
        self.last_issued
    }

    /// Consumes `ticket` if it is the pending one.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;

    #[test]
    fn only_latest_ticket_settles() {
        let mut debouncer = Debouncer::default();
        let first = debouncer.restart();
        let second = debouncer.restart();

        assert!(!debouncer.settle(first));
        assert!(debouncer.settle(second));
        assert!(!debouncer.settle(first));
    }

    #[test]
    fn ticket_settles_once() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.restart();

        assert!(debouncer.settle(ticket));
        assert!(!debouncer.settle(ticket));
    }
}
