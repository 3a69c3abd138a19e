//! Debounce Scheduler
//!
//! Trailing-edge debounce, one timer per channel, latest arguments win.
//! [`SearchDebounce`] adds the search box rules on top: clearing is
//! immediate and an edit back to the effective value schedules nothing.

use super::timer::{TimerBackend, TimerSlot};

pub struct Debouncer<B: TimerBackend> {
    slot: TimerSlot<B>,
}

impl<B: TimerBackend> Debouncer<B> {
    pub fn new(backend: B) -> Self {
        Self { slot: TimerSlot::new(backend) }
    }

    /// Invoke `callback(value)` once nothing else is scheduled for `delay_ms`
    pub fn schedule<V: 'static>(&mut self, value: V, delay_ms: u32, callback: impl FnOnce(V) + 'static) {
        self.slot.replace(delay_ms, move || callback(value));
    }

    pub fn cancel(&mut self) {
        self.slot.cancel();
    }
}

/// What a raw search edit means for the effective search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchUpdate {
    /// Raw text is back to the effective value; nothing to schedule
    Keep,
    /// Box cleared: effective search becomes empty right away
    ClearNow,
    Debounce(String),
}

pub fn plan_search_update(raw: &str, effective: &str) -> SearchUpdate {
    if raw.is_empty() {
        SearchUpdate::ClearNow
    } else if raw == effective {
        SearchUpdate::Keep
    } else {
        SearchUpdate::Debounce(raw.to_string())
    }
}

pub struct SearchDebounce<B: TimerBackend> {
    debouncer: Debouncer<B>,
    delay_ms: u32,
}

impl<B: TimerBackend> SearchDebounce<B> {
    pub fn new(backend: B, delay_ms: u32) -> Self {
        Self { debouncer: Debouncer::new(backend), delay_ms }
    }

    /// Feed a raw edit. Returns the effective search to apply immediately, if
    /// any; otherwise `apply` runs later with the settled value.
    pub fn on_raw_change(&mut self, raw: &str, effective: &str, apply: impl FnOnce(String) + 'static) -> Option<String> {
        match plan_search_update(raw, effective) {
            SearchUpdate::Keep => {
                // A stale pending value must not land after the user typed back
                self.debouncer.cancel();
                None
            }
            SearchUpdate::ClearNow => {
                self.debouncer.cancel();
                Some(String::new())
            }
            SearchUpdate::Debounce(value) => {
                self.debouncer.schedule(value, self.delay_ms, apply);
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
