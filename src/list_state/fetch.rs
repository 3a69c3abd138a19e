//! Fetch Orchestrator
//!
//! Loading/result/error state of the question list. Every request gets a
//! ticket; only the newest ticket may settle the state. A failed request
//! keeps the last good page on screen.

use futures::future::AbortHandle;

use crate::models::{Paged, Question};

/// Sequence number identifying one list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// How a response was taken in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Loaded { count: usize },
    /// Failure recorded, previous data kept
    Failed,
    /// Superseded or closed; the response was dropped
    Stale,
}

#[derive(Debug, Default)]
pub struct QuestionListState {
    pub questions: Vec<Question>,
    pub page_count: u32,
    pub is_loading: bool,
    /// At least one request has succeeded since mount
    pub has_loaded: bool,
    pub last_error: Option<String>,
    latest: u64,
    closed: bool,
    in_flight: Option<AbortHandle>,
}

impl QuestionListState {
    /// Start a request. Aborts the one it supersedes.
    pub fn begin(&mut self, abort: AbortHandle) -> RequestTicket {
        if let Some(previous) = self.in_flight.replace(abort) {
            previous.abort();
        }
        self.latest += 1;
        self.is_loading = true;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.closed && ticket.0 == self.latest
    }

    pub fn settle<E: std::fmt::Display>(&mut self, ticket: RequestTicket, result: Result<Paged<Question>, E>) -> Settled {
        if !self.is_current(ticket) {
            return Settled::Stale;
        }
        self.is_loading = false;
        self.in_flight = None;
        match result {
            Ok(page) => {
                let count = page.data.len();
                self.questions = page.data;
                self.page_count = page.page_count;
                self.has_loaded = true;
                self.last_error = None;
                Settled::Loaded { count }
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                Settled::Failed
            }
        }
    }

    /// View unmounted: abort the in-flight request, drop anything that still arrives
    pub fn close(&mut self) {
        self.closed = true;
        self.is_loading = false;
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    /// Pagination bound; never below one page
    pub fn page_count(&self) -> u32 {
        self.page_count.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityRef;

    fn question(id: u32) -> Question {
        Question {
            id,
            title: format!("Question {}", id),
            content: String::new(),
            created_date: String::new(),
            category: EntityRef { id: 1, name: "General".into() },
            tags: vec![],
        }
    }

    fn page(ids: &[u32], page_count: u32) -> Result<Paged<Question>, String> {
        Ok(Paged { data: ids.iter().copied().map(question).collect(), page_count })
    }

    fn handle() -> AbortHandle {
        AbortHandle::new_pair().0
    }

    #[test]
    fn test_loading_then_loaded() {
        let mut state = QuestionListState::default();
        let ticket = state.begin(handle());
        assert!(state.is_loading);
        assert!(!state.has_loaded);

        assert_eq!(state.settle(ticket, page(&[1, 2], 3)), Settled::Loaded { count: 2 });
        assert!(!state.is_loading);
        assert!(state.has_loaded);
        assert_eq!(state.page_count(), 3);
    }

    #[test]
    fn test_out_of_order_response_is_dropped() {
        let mut state = QuestionListState::default();
        let first = state.begin(handle());
        let second = state.begin(handle());

        // Newer request resolves first, older one straggles in afterwards
        assert_eq!(state.settle(second, page(&[20], 1)), Settled::Loaded { count: 1 });
        assert_eq!(state.settle(first, page(&[10], 1)), Settled::Stale);
        assert_eq!(state.questions[0].id, 20);
    }

    #[test]
    fn test_superseded_request_is_aborted() {
        let mut state = QuestionListState::default();
        let (first, _registration) = AbortHandle::new_pair();
        state.begin(first.clone());
        state.begin(handle());
        assert!(first.is_aborted());
        assert!(state.is_loading);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state = QuestionListState::default();
        let ok = state.begin(handle());
        state.settle(ok, page(&[1, 2, 3], 2));

        let failing = state.begin(handle());
        let result: Result<Paged<Question>, String> = Err("HTTP 500".into());
        assert_eq!(state.settle(failing, result), Settled::Failed);
        assert!(!state.is_loading);
        assert_eq!(state.questions.len(), 3);
        assert_eq!(state.last_error.as_deref(), Some("HTTP 500"));

        let recovered = state.begin(handle());
        state.settle(recovered, page(&[4], 2));
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_close_drops_late_responses() {
        let mut state = QuestionListState::default();
        let (in_flight, _registration) = AbortHandle::new_pair();
        let ticket = state.begin(in_flight.clone());
        state.close();
        assert!(in_flight.is_aborted());
        assert_eq!(state.settle(ticket, page(&[1], 1)), Settled::Stale);
        assert!(state.questions.is_empty());
    }

    #[test]
    fn test_empty_result_still_has_one_page() {
        let mut state = QuestionListState::default();
        let ticket = state.begin(handle());
        state.settle(ticket, page(&[], 0));
        assert_eq!(state.page_count(), 1);
    }
}
