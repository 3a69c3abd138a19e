//! Category Select Component
//!
//! `<select>` over the category tree, children indented under their parent.

use leptos::prelude::*;
use std::collections::HashSet;

use crate::store::{use_catalog, CatalogStateStoreFields};
use crate::tree::with_nesting_levels;

const INDENT: &str = "\u{a0}\u{a0}\u{a0}";

/// Option label: three non-breaking spaces per level, then an arrow for nested entries
pub fn indented_label(name: &str, level: usize) -> String {
    if level == 0 {
        name.to_string()
    } else {
        format!("{}↳ {}", INDENT.repeat(level), name)
    }
}

/// Category picker
///
/// Props:
/// - selected: currently selected category id (None = the `none_label` entry)
/// - none_label: text of the empty entry ("All categories", "No parent", ...)
/// - exclude: ids that must not be offered (e.g. a category's own subtree)
#[component]
pub fn CategorySelect(
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<Option<u32>>,
    #[prop(into)] none_label: String,
    #[prop(optional)] exclude: HashSet<u32>,
) -> impl IntoView {
    let catalog = use_catalog();
    let exclude = StoredValue::new(exclude);

    let options = Memo::new(move |_| {
        let leveled = catalog.categories().with(|categories| with_nesting_levels(categories));
        exclude.with_value(|exclude| {
            leveled
                .into_iter()
                .filter(|entry| !exclude.contains(&entry.category.id))
                .map(|entry| (entry.category.id, indented_label(&entry.category.name, entry.level)))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <select
            class="category-select"
            on:change=move |ev| on_change.run(event_target_value(&ev).parse::<u32>().ok())
        >
            <option value="" prop:selected=move || selected.get().is_none()>
                {none_label}
            </option>
            <For
                each=move || options.get()
                key=|(id, label)| (*id, label.clone())
                children=move |(category_id, label)| {
                    view! {
                        <option
                            value=category_id.to_string()
                            prop:selected=move || selected.get() == Some(category_id)
                        >
                            {label}
                        </option>
                    }
                }
            />
        </select>
    }
}
