//! Route Pages

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{CategoryList, QuestionDetail, QuestionList, TagList};
use crate::context::use_app_context;
use crate::store::{use_catalog, CatalogStateStoreFields};

#[component]
pub fn QuestionListPage() -> impl IntoView {
    view! { <QuestionList/> }
}

#[component]
pub fn QuestionDetailPage() -> impl IntoView {
    view! { <QuestionDetail/> }
}

#[component]
pub fn QuestionSettingsPage() -> impl IntoView {
    let catalog = use_catalog();
    let ctx = use_app_context();

    view! {
        <div class="settings-page">
            {move || catalog.load_error().get().map(|msg| view! {
                <div class="error-banner" role="alert">
                    "Could not load categories and tags: " {msg}
                    <button type="button" class="btn" on:click=move |_| ctx.reload_catalog()>
                        "Retry"
                    </button>
                </div>
            })}
            <CategoryList/>
            <TagList/>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href="/questions">"Back to questions"</A>
        </div>
    }
}
