//! Scroll/Highlight Restorer
//!
//! A [`HighlightTicket`] is posted when a list row is opened and taken back
//! by the next list mount. The ticket is not `Clone`; taking it empties the
//! mailbox, so a later unrelated visit cannot replay it.

use super::timer::{TimerBackend, TimerSlot};

#[derive(Debug, PartialEq)]
pub struct HighlightTicket {
    pub scroll_y: f64,
    pub question_id: u32,
}

/// Application-level single-slot handoff; outlives the list view
#[derive(Debug, Default)]
pub struct TicketMailbox {
    slot: Option<HighlightTicket>,
}

impl TicketMailbox {
    /// Record the row being left. A newer ticket replaces an unread one.
    pub fn post(&mut self, ticket: HighlightTicket) {
        self.slot = Some(ticket);
    }

    pub fn take(&mut self) -> Option<HighlightTicket> {
        self.slot.take()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

/// Holds the taken ticket until the list has data to scroll to
#[derive(Debug, Default)]
pub struct HighlightRestorer {
    pending: Option<HighlightTicket>,
}

impl HighlightRestorer {
    pub fn new(ticket: Option<HighlightTicket>) -> Self {
        Self { pending: ticket }
    }

    /// Release the ticket once loading has finished with data; at most once
    pub fn poll(&mut self, is_loading: bool, has_loaded: bool) -> Option<HighlightTicket> {
        if is_loading || !has_loaded {
            return None;
        }
        self.pending.take()
    }

    #[cfg(test)]
    fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }
}

/// Marks one row highlighted and clears the mark after a fixed duration
pub struct RowHighlighter<B: TimerBackend> {
    clear: TimerSlot<B>,
    duration_ms: u32,
}

impl<B: TimerBackend> RowHighlighter<B> {
    pub fn new(backend: B, duration_ms: u32) -> Self {
        Self { clear: TimerSlot::new(backend), duration_ms }
    }

    pub fn highlight(&mut self, question_id: u32, set: impl Fn(Option<u32>) + 'static) {
        set(Some(question_id));
        self.clear.replace(self.duration_ms, move || set(None));
    }

    pub fn cancel(&mut self) {
        self.clear.cancel();
    }
}
