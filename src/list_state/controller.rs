//! List Controller
//!
//! Wires the list-state pieces into the reactive graph for one mount of the
//! question list: intents in, URL + fetch + highlight out.

use futures::future::{AbortHandle, Abortable};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use super::debounce::SearchDebounce;
use super::fetch::{QuestionListState, Settled};
use super::highlight::{HighlightRestorer, HighlightTicket, RowHighlighter};
use super::query::{ListIntent, ListQuery};
use super::timer::BrowserTimers;
use super::url::{needs_write, UrlQuery};
use crate::api::{use_api, ApiClient};
use crate::config::AppConfig;
use crate::context::HighlightMailbox;

type Navigate = Box<dyn Fn(&str, NavigateOptions)>;

#[derive(Clone, Copy)]
pub struct ListController {
    pub query: RwSignal<ListQuery>,
    pub list: RwSignal<QuestionListState>,
    /// Row currently flashing after a return from its detail page
    pub highlighted: RwSignal<Option<u32>>,
    /// Bumped to refetch the current page with an unchanged query
    revision: RwSignal<u32>,
    list_path: StoredValue<String>,
    location_search: Memo<String>,
    mailbox: HighlightMailbox,
    navigate: StoredValue<Navigate, LocalStorage>,
    search_debounce: StoredValue<SearchDebounce<BrowserTimers>, LocalStorage>,
    highlighter: StoredValue<RowHighlighter<BrowserTimers>, LocalStorage>,
    restorer: StoredValue<HighlightRestorer>,
    scroll_restore_delay_ms: u32,
}

impl ListController {
    /// Set up the controller for the current list mount
    pub fn mount() -> Self {
        let config = expect_context::<AppConfig>();
        let mailbox = expect_context::<HighlightMailbox>();
        let api = use_api();
        let location = use_location();
        let query_map = use_query_map();
        let per_page = config.questions_per_page;

        // Seeded from the URL, so there is no initial state -> URL write
        let seeded = query_map.with_untracked(|q| UrlQuery::from_lookup(|key| q.get(key), per_page));
        log::debug!("[LIST] Mounted with {}", seeded.to_query_string());

        let controller = Self {
            query: RwSignal::new(ListQuery::from_url(seeded)),
            list: RwSignal::new(QuestionListState::default()),
            highlighted: RwSignal::new(None),
            revision: RwSignal::new(0),
            list_path: StoredValue::new(location.pathname.get_untracked()),
            location_search: location.search,
            mailbox,
            navigate: StoredValue::new_local(Box::new(use_navigate()) as Navigate),
            search_debounce: StoredValue::new_local(SearchDebounce::new(BrowserTimers, config.search_debounce_ms)),
            highlighter: StoredValue::new_local(RowHighlighter::new(BrowserTimers, config.highlight_ms)),
            restorer: StoredValue::new(HighlightRestorer::new(mailbox.take())),
            scroll_restore_delay_ms: config.scroll_restore_delay_ms,
        };

        controller.sync_from_url(query_map, location.pathname, per_page);
        controller.fetch_on_key_change(api);
        controller.restore_highlight_after_load();

        on_cleanup(move || {
            controller.search_debounce.try_update_value(|d| d.cancel());
            controller.highlighter.try_update_value(|h| h.cancel());
            controller.list.try_update(|s| s.close());
        });

        controller
    }

    // ========================
    // Intents
    // ========================

    pub fn set_search(&self, text: String) {
        self.dispatch(ListIntent::SetSearch(text));
    }

    pub fn set_category_filter(&self, category_id: String) {
        self.dispatch(ListIntent::SetCategoryFilter(category_id));
    }

    pub fn set_page(&self, page: u32) {
        self.dispatch(ListIntent::SetPage(page));
    }

    pub fn set_per_page(&self, per_page: u32) {
        self.dispatch(ListIntent::SetPerPage(per_page));
    }

    pub fn clear_all_filters(&self) {
        self.dispatch(ListIntent::ClearAllFilters);
    }

    /// Refetch after a mutation made elsewhere (e.g. a question was added)
    pub fn refresh(&self) {
        self.revision.update(|r| *r += 1);
    }

    /// The single entry point for list state changes
    pub fn dispatch(&self, intent: ListIntent) {
        let writes_url = intent.writes_url();
        let replace = intent.replaces_history();
        let feeds_debounce = matches!(intent, ListIntent::SetSearch(_));
        let drops_pending = matches!(intent, ListIntent::ClearAllFilters | ListIntent::Restore(_));

        let changed = self
            .query
            .try_maybe_update(|q| {
                let changed = q.apply(intent);
                (changed, changed)
            })
            .unwrap_or(false);
        if !changed {
            return;
        }

        if drops_pending {
            self.search_debounce.try_update_value(|d| d.cancel());
        }
        if writes_url {
            self.write_url(replace);
        }
        if feeds_debounce {
            self.debounce_search();
        }
    }

    fn debounce_search(&self) {
        let Some((raw, effective)) = self.query.try_with_untracked(|q| (q.search.clone(), q.debounced_search.clone())) else {
            return;
        };
        let this = *self;
        let immediate = self
            .search_debounce
            .try_update_value(|d| {
                d.on_raw_change(&raw, &effective, move |settled| {
                    log::debug!("[LIST] Search settled on {:?}", settled);
                    this.dispatch(ListIntent::ApplyDebouncedSearch(settled));
                })
            })
            .flatten();
        if let Some(value) = immediate {
            self.dispatch(ListIntent::ApplyDebouncedSearch(value));
        }
    }

    fn write_url(&self, replace: bool) {
        let Some(next) = self.query.try_with_untracked(|q| q.url_query().to_query_string()) else {
            return;
        };
        let current = self.location_search.get_untracked();
        if !needs_write(&current, &next) {
            return;
        }
        let target = format!("{}?{}", self.list_path.get_value(), next);
        log::debug!("[LIST] URL -> {} (replace={})", target, replace);
        self.navigate.with_value(|navigate| {
            navigate(&target, NavigateOptions { replace, scroll: false, ..Default::default() })
        });
    }

    // ========================
    // Highlight
    // ========================

    /// Remember the row being opened so the next list mount can return to it
    pub fn remember_row(&self, question_id: u32) {
        let scroll_y = window().scroll_y().unwrap_or_default();
        self.mailbox.post(HighlightTicket { scroll_y, question_id });
    }

    pub fn is_highlighted(&self, question_id: u32) -> bool {
        self.highlighted.get() == Some(question_id)
    }

    // ========================
    // Effects
    // ========================

    /// URL -> state: back/forward and bookmarks become `Restore` intents
    fn sync_from_url(&self, query_map: Memo<leptos_router::params::ParamsMap>, pathname: Memo<String>, per_page: u32) {
        let this = *self;
        Effect::new(move |_| {
            let url = query_map.with(|q| UrlQuery::from_lookup(|key| q.get(key), per_page));
            // Leaving the list also empties the query; that is not a filter change
            if pathname.get() != this.list_path.get_value() {
                return;
            }
            this.dispatch(ListIntent::Restore(url));
        });
    }

    fn fetch_on_key_change(&self, api: ApiClient) {
        let query = self.query;
        let list = self.list;
        let revision = self.revision;
        let fetch_key = Memo::new(move |_| query.with(|q| q.fetch_key()));

        Effect::new(move |_| {
            let key = fetch_key.get();
            revision.track();
            let (abort, registration) = AbortHandle::new_pair();
            let Some(ticket) = list.try_update(|s| s.begin(abort)) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                log::debug!("[LIST] Fetching {:?}", key);
                match Abortable::new(api.fetch_questions(&key), registration).await {
                    Ok(result) => {
                        if let Err(err) = &result {
                            log::error!("[LIST] There was an error fetching the questions: {}", err);
                        }
                        match list.try_update(|s| s.settle(ticket, result)) {
                            Some(Settled::Loaded { count }) => log::debug!("[LIST] Loaded {} questions", count),
                            Some(Settled::Stale) => log::debug!("[LIST] Dropped stale response"),
                            _ => {}
                        }
                    }
                    Err(_) => log::debug!("[LIST] Request aborted"),
                }
            });
        });
    }

    fn restore_highlight_after_load(&self) {
        let this = *self;
        Effect::new(move |_| {
            let (is_loading, has_loaded) = this.list.with(|s| (s.is_loading, s.has_loaded));
            let Some(ticket) = this.restorer.try_update_value(|r| r.poll(is_loading, has_loaded)).flatten() else {
                return;
            };
            spawn_local(async move {
                // Let the freshly loaded rows render before scrolling
                TimeoutFuture::new(this.scroll_restore_delay_ms).await;
                scroll_window_to(ticket.scroll_y);
                let highlighted = this.highlighted;
                this.highlighter.try_update_value(|h| {
                    h.highlight(ticket.question_id, move |value| {
                        highlighted.try_set(value);
                    })
                });
            });
        });
    }
}

fn scroll_window_to(y: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(y);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
