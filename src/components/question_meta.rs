//! Question Meta Component
//!
//! Created date, category chip and the first few tag chips of a question.
//! Remaining tags are behind a "+N more" toggle.

use leptos::prelude::*;

use crate::config::MAX_VISIBLE_TAGS;
use crate::models::Tag;
use crate::text::format_created_date;

/// Tags split into the always-visible head and the collapsed rest
pub fn split_tags(tags: &[Tag]) -> (&[Tag], &[Tag]) {
    tags.split_at(tags.len().min(MAX_VISIBLE_TAGS))
}

fn tag_chip(tag: &Tag) -> impl IntoView {
    view! { <span class="chip chip-outlined">{tag.name.clone()}</span> }
}

#[component]
pub fn QuestionMeta(
    #[prop(into)] created_date: String,
    #[prop(into)] category_name: String,
    tags: Vec<Tag>,
) -> impl IntoView {
    let (show_hidden, set_show_hidden) = signal(false);
    let (visible, hidden) = split_tags(&tags);
    let visible_view = visible.iter().map(tag_chip).collect_view();
    let hidden = hidden.to_vec();
    let hidden_count = hidden.len();

    view! {
        <div class="question-meta">
            <span class="question-date">{format_created_date(&created_date)}</span>
            <div class="question-chips">
                <span class="chip chip-primary">{category_name}</span>
                {visible_view}
                {(hidden_count > 0).then(|| {
                    view! {
                        <button
                            type="button"
                            class="chip chip-more"
                            on:click=move |_| set_show_hidden.update(|v| *v = !*v)
                        >
                            {format!("+{} more", hidden_count)}
                        </button>
                        <Show when=move || show_hidden.get()>
                            <div class="chip-popover">{hidden.iter().map(tag_chip).collect_view()}</div>
                        </Show>
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags() {
        let tags: Vec<Tag> = (1..=7).map(|id| Tag { id, name: format!("t{}", id) }).collect();
        let (visible, hidden) = split_tags(&tags);
        assert_eq!(visible.len(), 5);
        assert_eq!(hidden.iter().map(|t| t.id).collect::<Vec<_>>(), vec![6, 7]);

        let (visible, hidden) = split_tags(&tags[..2]);
        assert_eq!(visible.len(), 2);
        assert!(hidden.is_empty());
    }
}
