//! Questions Filter Panel
//!
//! Search box, category filter and "Clear all filters". All changes go to
//! the list controller as intents.

use leptos::html::Input;
use leptos::prelude::*;

use crate::list_state::ListController;

use super::CategorySelect;

#[component]
pub fn QuestionsFilterPanel(controller: ListController) -> impl IntoView {
    let query = controller.query;
    let search_ref = NodeRef::<Input>::new();

    // Focus the search box once on mount
    Effect::new(move |_| {
        if let Some(input) = search_ref.get() {
            let _ = input.focus();
        }
    });

    let selected_category = Signal::derive(move || query.with(|q| q.category_id.parse::<u32>().ok()));
    let has_search = move || query.with(|q| !q.search.is_empty());
    let has_filters = move || query.with(|q| q.has_filters());

    view! {
        <div class="filter-panel">
            <div class="search-box">
                <input
                    node_ref=search_ref
                    type="search"
                    placeholder="Search questions"
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| controller.set_search(event_target_value(&ev))
                />
                <Show when=has_search>
                    <button
                        type="button"
                        class="search-clear"
                        title="Clear search"
                        on:click=move |_| controller.set_search(String::new())
                    >
                        "×"
                    </button>
                </Show>
            </div>
            <CategorySelect
                selected=selected_category
                none_label="All categories"
                on_change={move |id: Option<u32>| {
                    controller.set_category_filter(id.map(|id| id.to_string()).unwrap_or_default())
                }}
            />
            <button
                type="button"
                class="btn"
                disabled=move || !has_filters()
                on:click=move |_| controller.clear_all_filters()
            >
                "Clear all filters"
            </button>
        </div>
    }
}
