//! Question List State
//!
//! Everything the question list view knows about itself: the query, its URL
//! form, the search debounce, the request sequencing and the scroll/highlight
//! handoff. Only `controller` touches the reactive graph.

mod controller;
mod debounce;
mod fetch;
mod highlight;
mod query;
mod timer;
mod url;

pub use controller::ListController;
pub use highlight::{HighlightTicket, TicketMailbox};
