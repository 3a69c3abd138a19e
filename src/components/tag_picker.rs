//! Tag Picker Component
//!
//! Multi-select over the tag catalog with fuzzy search. Selected tags show as
//! removable chips; suggestions toggle on click or Enter.

use leptos::prelude::*;

use crate::models::Tag;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

/// Tags offered for `query`, catalog order kept; everything when the query is blank
pub fn suggest_tags(all_tags: &[Tag], query: &str) -> Vec<Tag> {
    let query = query.trim();
    all_tags
        .iter()
        .filter(|tag| query.is_empty() || fuzzy_match(query, &tag.name))
        .cloned()
        .collect()
}

#[component]
pub fn TagPicker(
    #[prop(into)] all_tags: Signal<Vec<Tag>>,
    #[prop(into)] selected: Signal<Vec<u32>>,
    #[prop(into)] on_toggle: Callback<Tag>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);
    let (active_idx, set_active_idx) = signal(0usize);

    let suggestions = Memo::new(move |_| all_tags.with(|tags| suggest_tags(tags, &query.get())));

    let selected_tags = move || {
        let ids = selected.get();
        all_tags.with(|tags| tags.iter().filter(|t| ids.contains(&t.id)).cloned().collect::<Vec<_>>())
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let count = suggestions.with(|s| s.len());
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_open.set(true);
                let idx = active_idx.get();
                if idx + 1 < count {
                    set_active_idx.set(idx + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let idx = active_idx.get();
                if idx > 0 {
                    set_active_idx.set(idx - 1);
                }
            }
            "Enter" => {
                // Keep the surrounding form from submitting
                ev.prevent_default();
                if let Some(tag) = suggestions.with(|s| s.get(active_idx.get()).cloned()) {
                    on_toggle.run(tag);
                }
            }
            "Escape" => set_open.set(false),
            _ => {}
        }
    };

    view! {
        <div class="tag-picker">
            <div class="tag-chips">
                {move || {
                    selected_tags()
                        .into_iter()
                        .map(|tag| {
                            let name = tag.name.clone();
                            view! {
                                <span class="chip chip-outlined">
                                    {name}
                                    <button
                                        type="button"
                                        class="chip-delete"
                                        on:click=move |_| on_toggle.run(tag.clone())
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <input
                type="text"
                placeholder="Choose tags"
                autocomplete="off"
                prop:value=move || query.get()
                on:focus=move |_| set_open.set(true)
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_active_idx.set(0);
                    set_open.set(true);
                }
                on:keydown=on_keydown
            />
            <Show when=move || open.get()>
                <div class="autocomplete-list">
                    {move || {
                        let active = active_idx.get();
                        let ids = selected.get();
                        let items = suggestions.get();
                        if items.is_empty() {
                            return view! { <div class="autocomplete-empty">"No tags"</div> }.into_any();
                        }
                        items
                            .into_iter()
                            .enumerate()
                            .map(|(i, tag)| {
                                let checked = ids.contains(&tag.id);
                                let name = tag.name.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="autocomplete-item"
                                        class:selected=i == active
                                        on:mousedown=|ev| ev.prevent_default()
                                        on:click=move |_| on_toggle.run(tag.clone())
                                    >
                                        <span class="checkbox">{if checked { "☑" } else { "☐" }}</span>
                                        {name}
                                    </button>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                    <button type="button" class="autocomplete-done" on:click=move |_| set_open.set(false)>
                        "Done"
                    </button>
                </div>
            </Show>
        </div>
    }
}
