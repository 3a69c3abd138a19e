//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::list_state::{HighlightTicket, TicketMailbox};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever categories or tags change on the backend
    set_catalog_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(set_catalog_version: WriteSignal<u32>) -> Self {
        Self { set_catalog_version }
    }

    /// Trigger a reload of categories and tags
    pub fn reload_catalog(&self) {
        self.set_catalog_version.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Handoff from a clicked list row to the next list mount.
/// Lives at the app root so it survives the list view being unmounted.
#[derive(Clone, Copy)]
pub struct HighlightMailbox(StoredValue<TicketMailbox>);

impl HighlightMailbox {
    pub fn new() -> Self {
        Self(StoredValue::new(TicketMailbox::default()))
    }

    pub fn post(&self, ticket: HighlightTicket) {
        log::debug!("[HIGHLIGHT] Posted ticket for question {}", ticket.question_id);
        self.0.try_update_value(|mailbox| mailbox.post(ticket));
    }

    /// Take the pending ticket; a second call returns `None`
    pub fn take(&self) -> Option<HighlightTicket> {
        self.0.try_update_value(|mailbox| mailbox.take()).flatten()
    }
}

impl Default for HighlightMailbox {
    fn default() -> Self {
        Self::new()
    }
}
