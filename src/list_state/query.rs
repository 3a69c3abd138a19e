//! Query-State Store
//!
//! What the question list should display. Every change is a [`ListIntent`]
//! applied by [`ListQuery::apply`]; there are no other mutators.

use super::url::UrlQuery;
use crate::api::QuestionQuery;

/// Things that can happen to the list query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIntent {
    /// Raw search text edited (every keystroke)
    SetSearch(String),
    /// Debounce settled on a new effective search
    ApplyDebouncedSearch(String),
    SetCategoryFilter(String),
    SetPage(u32),
    SetPerPage(u32),
    ClearAllFilters,
    /// Address bar changed underneath us (back/forward, bookmark)
    Restore(UrlQuery),
}

impl ListIntent {
    /// Intents coming from the URL must never be written back to it
    pub fn writes_url(&self) -> bool {
        !matches!(self, ListIntent::Restore(_) | ListIntent::ApplyDebouncedSearch(_))
    }

    /// Search edits replace the current history entry instead of pushing one
    pub fn replaces_history(&self) -> bool {
        matches!(self, ListIntent::SetSearch(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub debounced_search: String,
    pub category_id: String,
}

impl ListQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            search: String::new(),
            debounced_search: String::new(),
            category_id: String::new(),
        }
    }

    /// Seed from the address bar; restored searches are effective immediately
    pub fn from_url(url: UrlQuery) -> Self {
        Self {
            page: url.page,
            per_page: url.per_page,
            debounced_search: url.search.clone(),
            search: url.search,
            category_id: url.category_id,
        }
    }

    /// Apply an intent. Returns whether anything changed.
    pub fn apply(&mut self, intent: ListIntent) -> bool {
        match intent {
            ListIntent::SetSearch(search) => {
                if self.search == search {
                    return false;
                }
                self.search = search;
                self.page = 1;
                true
            }
            ListIntent::ApplyDebouncedSearch(search) => {
                if self.debounced_search == search {
                    return false;
                }
                // Page was already reset by the keystroke; a page picked
                // since then stays, because the URL still shows it
                self.debounced_search = search;
                true
            }
            ListIntent::SetCategoryFilter(category_id) => {
                if self.category_id == category_id {
                    return false;
                }
                self.category_id = category_id;
                self.page = 1;
                true
            }
            ListIntent::SetPage(page) => {
                let page = page.max(1);
                if self.page == page {
                    return false;
                }
                self.page = page;
                true
            }
            ListIntent::SetPerPage(per_page) => {
                let per_page = per_page.max(1);
                if self.per_page == per_page {
                    return false;
                }
                self.per_page = per_page;
                self.page = 1;
                true
            }
            ListIntent::ClearAllFilters => {
                if !self.has_filters() {
                    return false;
                }
                self.search.clear();
                self.debounced_search.clear();
                self.category_id.clear();
                self.page = 1;
                true
            }
            ListIntent::Restore(url) => {
                let mut changed = false;
                if self.search != url.search {
                    self.debounced_search = url.search.clone();
                    self.search = url.search;
                    changed = true;
                }
                if self.category_id != url.category_id {
                    self.category_id = url.category_id;
                    changed = true;
                }
                if self.per_page != url.per_page {
                    self.per_page = url.per_page;
                    changed = true;
                }
                // Page last: the URL's page wins over any reset above
                if self.page != url.page {
                    self.page = url.page;
                    changed = true;
                }
                changed
            }
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || !self.debounced_search.is_empty() || !self.category_id.is_empty()
    }

    /// The part of the state that lives in the address bar
    pub fn url_query(&self) -> UrlQuery {
        UrlQuery {
            page: self.page,
            per_page: self.per_page,
            search: self.search.clone(),
            category_id: self.category_id.clone(),
        }
    }

    /// What the list fetches on; raw search is deliberately absent
    pub fn fetch_key(&self) -> QuestionQuery {
        QuestionQuery {
            page: self.page,
            per_page: self.per_page,
            search: self.debounced_search.clone(),
            category_id: self.category_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_page(page: u32) -> ListQuery {
        let mut query = ListQuery::new(20);
        query.page = page;
        query
    }

    #[test]
    fn test_search_resets_page_in_same_update() {
        let mut query = at_page(3);
        assert!(query.apply(ListIntent::SetSearch("rust".into())));
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "rust");
        // Effective search is untouched until the debounce settles
        assert_eq!(query.debounced_search, "");
    }

    #[test]
    fn test_category_resets_page() {
        let mut query = at_page(4);
        assert!(query.apply(ListIntent::SetCategoryFilter("5".into())));
        assert_eq!(query.page, 1);
        assert_eq!(query.category_id, "5");
    }

    #[test]
    fn test_same_category_is_noop() {
        let mut query = at_page(4);
        query.category_id = "5".into();
        assert!(!query.apply(ListIntent::SetCategoryFilter("5".into())));
        assert_eq!(query.page, 4);
    }

    #[test]
    fn test_filter_sequences_always_land_on_page_one() {
        let intents = [
            ListIntent::SetSearch("a".into()),
            ListIntent::SetPage(6),
            ListIntent::SetCategoryFilter("2".into()),
            ListIntent::SetPage(3),
            ListIntent::SetSearch("ab".into()),
            ListIntent::SetPage(2),
            ListIntent::SetCategoryFilter("".into()),
        ];
        let mut query = ListQuery::new(20);
        for intent in intents {
            let is_filter = matches!(intent, ListIntent::SetSearch(_) | ListIntent::SetCategoryFilter(_));
            query.apply(intent);
            if is_filter {
                assert_eq!(query.page, 1);
            }
        }
    }

    #[test]
    fn test_set_page_clamps_to_one() {
        let mut query = at_page(2);
        assert!(query.apply(ListIntent::SetPage(0)));
        assert_eq!(query.page, 1);
        assert!(!query.apply(ListIntent::SetPage(1)));
    }

    #[test]
    fn test_clear_all_is_idempotent() {
        let mut query = at_page(3);
        query.apply(ListIntent::SetSearch("abc".into()));
        query.apply(ListIntent::ApplyDebouncedSearch("abc".into()));
        query.apply(ListIntent::SetCategoryFilter("7".into()));

        assert!(query.apply(ListIntent::ClearAllFilters));
        assert_eq!(query, ListQuery::new(20));
        assert!(!query.apply(ListIntent::ClearAllFilters));
    }

    #[test]
    fn test_clear_all_without_filters_keeps_page() {
        let mut query = at_page(5);
        assert!(!query.apply(ListIntent::ClearAllFilters));
        assert_eq!(query.page, 5);
    }

    #[test]
    fn test_fetch_key_ignores_raw_search() {
        let mut query = at_page(3);
        let before = query.fetch_key();
        query.apply(ListIntent::SetSearch("abc".into()));
        let typed = query.fetch_key();
        assert_eq!(typed.search, "");
        assert_eq!(typed.page, 1);
        assert_ne!(before, typed);

        // Further keystrokes on page 1 leave the fetch key alone
        query.apply(ListIntent::SetSearch("abcd".into()));
        assert_eq!(query.fetch_key(), typed);

        query.apply(ListIntent::ApplyDebouncedSearch("abcd".into()));
        let settled = query.fetch_key();
        assert_eq!(settled.page, 1);
        assert_eq!(settled.search, "abcd");
    }

    #[test]
    fn test_restore_only_touches_differing_fields() {
        let mut query = at_page(2);
        query.apply(ListIntent::SetSearch("ab".into()));
        query.apply(ListIntent::SetPage(2));
        // Debounce window still open: effective differs from raw
        let same_url = query.url_query();
        assert!(!query.apply(ListIntent::Restore(same_url)));
        assert_eq!(query.debounced_search, "");

        let back = UrlQuery { page: 4, per_page: 20, search: "x".into(), category_id: "3".into() };
        assert!(query.apply(ListIntent::Restore(back.clone())));
        assert_eq!(query.url_query(), back);
        assert_eq!(query.debounced_search, "x");
        assert_eq!(query.page, 4);
    }

    #[test]
    fn test_intent_url_policy() {
        assert!(ListIntent::SetPage(2).writes_url());
        assert!(ListIntent::SetSearch("a".into()).replaces_history());
        assert!(!ListIntent::SetCategoryFilter("1".into()).replaces_history());
        assert!(!ListIntent::ApplyDebouncedSearch("a".into()).writes_url());
        assert!(!ListIntent::Restore(UrlQuery::defaults(20)).writes_url());
    }

    #[test]
    fn test_url_matches_state_after_debounce_settles() {
        let mut query = ListQuery::new(20);
        let mut written = query.url_query().to_query_string();
        let intents = [
            ListIntent::SetSearch("abc".into()),
            ListIntent::SetPage(2),
            ListIntent::ApplyDebouncedSearch("abc".into()),
            ListIntent::SetPage(3),
            ListIntent::SetSearch("".into()),
            ListIntent::ApplyDebouncedSearch("".into()),
        ];
        for intent in intents {
            let writes_url = intent.writes_url();
            if query.apply(intent) && writes_url {
                written = query.url_query().to_query_string();
            }
            assert_eq!(query.url_query().to_query_string(), written);
        }
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_settled_search_keeps_page_picked_during_debounce() {
        let mut query = at_page(4);
        query.apply(ListIntent::SetSearch("abc".into()));
        query.apply(ListIntent::SetPage(2));
        assert!(query.apply(ListIntent::ApplyDebouncedSearch("abc".into())));
        assert_eq!(query.page, 2);
        assert_eq!(query.fetch_key().search, "abc");
    }
}
