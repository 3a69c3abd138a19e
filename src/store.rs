//! Catalog Store
//!
//! Categories and tags shared by the filter panel, the editor forms and the
//! settings page. Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, ApiError};
use crate::models::{Category, Tag};

#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Flat category list in backend order
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    /// Last catalog load failure, cleared on the next success
    pub load_error: Option<String>,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog() -> CatalogStore {
    expect_context::<CatalogStore>()
}

impl CatalogState {
    /// Take the result of one catalog load. A failed half keeps what was
    /// loaded before; the first failure becomes `load_error`.
    pub fn apply_load(&mut self, categories: Result<Vec<Category>, ApiError>, tags: Result<Vec<Tag>, ApiError>) {
        let mut failure: Option<ApiError> = None;

        match categories {
            Ok(loaded) => {
                log::debug!("[CATALOG] Loaded {} categories", loaded.len());
                self.categories = loaded;
            }
            Err(err) => {
                log::error!("[CATALOG] There was an error fetching the categories: {}", err);
                failure = Some(err);
            }
        }
        match tags {
            Ok(loaded) => {
                log::debug!("[CATALOG] Loaded {} tags", loaded.len());
                self.tags = loaded;
            }
            Err(err) => {
                log::error!("[CATALOG] There was an error fetching the tags: {}", err);
                failure.get_or_insert(err);
            }
        }
        self.load_error = failure.map(|err| err.to_string());
    }
}

/// Fetch categories and tags into the store
pub async fn load_catalog(store: CatalogStore, api: ApiClient) {
    let categories = api.fetch_categories().await;
    let tags = api.fetch_tags().await;
    store.try_update(|state| state.apply_load(categories, tags));
}
