//! Interview Questions App
//!
//! Root component: shared context, catalog loading and routes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::Header;
use crate::config::AppConfig;
use crate::context::{AppContext, HighlightMailbox};
use crate::pages::{NotFoundPage, QuestionDetailPage, QuestionListPage, QuestionSettingsPage};
use crate::store::{load_catalog, CatalogState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = ApiClient::new(config.api_base_url.clone());
    let (catalog_version, set_catalog_version) = signal(0u32);
    let catalog = Store::new(CatalogState::default());

    // Provide context to all children
    provide_context(config);
    provide_context(AppContext::new(set_catalog_version));
    provide_context(HighlightMailbox::new());
    provide_context(catalog);

    // Load categories and tags on mount and whenever settings change them
    Effect::new(move |_| {
        let version = catalog_version.get();
        log::debug!("[APP] Loading catalog, version={}", version);
        spawn_local(load_catalog(catalog, api.clone()));
    });

    view! {
        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/questions"/> }/>
                    <Route path=path!("/questions") view=QuestionListPage/>
                    <Route path=path!("/questions/:id") view=QuestionDetailPage/>
                    <Route path=path!("/settings") view=QuestionSettingsPage/>
                </Routes>
            </main>
        </Router>
    }
}
