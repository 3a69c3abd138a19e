//! Question Items Component
//!
//! Rows of the question list. Titles highlight the active search, and the row
//! returned to from a detail page flashes briefly.

use leptos::prelude::*;

use crate::list_state::ListController;
use crate::models::Question;
use crate::text::highlight_segments;

use super::QuestionMeta;

/// Placeholder rows for the page being fetched, zero once it has settled
fn skeleton_rows(is_loading: bool, per_page: u32) -> usize {
    if is_loading {
        per_page.max(1) as usize
    } else {
        0
    }
}

/// Title with the first match of `search` wrapped in `<mark>`
#[component]
pub fn HighlightedTitle(#[prop(into)] title: String, #[prop(into)] search: String) -> impl IntoView {
    match highlight_segments(&title, &search) {
        Some((before, matched, after)) => view! {
            {before.to_string()}
            <mark class="search-match">{matched.to_string()}</mark>
            {after.to_string()}
        }
        .into_any(),
        None => title.clone().into_any(),
    }
}

/// Plain left clicks navigate this tab; modified or middle clicks open a new one
fn opens_in_place(button: i16, modified: bool) -> bool {
    button == 0 && !modified
}

#[component]
fn QuestionRow(question: Question, controller: ListController) -> impl IntoView {
    let id = question.id;
    let title = question.title.clone();

    view! {
        <li class="question-item" class:highlighted=move || controller.is_highlighted(id)>
            <a
                class="question-title"
                href=format!("/questions/{}", id)
                on:click=move |ev: web_sys::MouseEvent| {
                    if opens_in_place(ev.button(), ev.ctrl_key() || ev.meta_key() || ev.shift_key()) {
                        controller.remember_row(id);
                    }
                }
            >
                {move || {
                    let search = controller.query.with(|q| q.debounced_search.clone());
                    view! { <HighlightedTitle title=title.clone() search/> }
                }}
            </a>
            <QuestionMeta
                created_date=question.created_date.clone()
                category_name=question.category.name.clone()
                tags=question.tags.clone()
            />
        </li>
    }
}

#[component]
pub fn QuestionItemsList(controller: ListController) -> impl IntoView {
    let list = controller.list;
    let skeletons = Memo::new(move |_| {
        let per_page = controller.query.with(|q| q.per_page);
        list.with(|s| skeleton_rows(s.is_loading, per_page))
    });
    let is_empty = move || list.with(|s| s.has_loaded && s.questions.is_empty());

    view! {
        <Show
            when=move || skeletons.get() == 0
            fallback=move || view! {
                <ul class="question-items">
                    {move || (0..skeletons.get()).map(|_| view! { <li class="question-item skeleton"></li> }).collect_view()}
                </ul>
            }
        >
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty-state">"No questions found"</p> }
            >
                <ul class="question-items">
                    <For
                        each=move || list.with(|s| s.questions.clone())
                        key=|question| (question.id, question.title.clone(), question.tags.len())
                        children=move |question| view! { <QuestionRow question controller/> }
                    />
                </ul>
            </Show>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_rows_follow_page_size() {
        assert_eq!(skeleton_rows(true, 20), 20);
        assert_eq!(skeleton_rows(true, 50), 50);
        assert_eq!(skeleton_rows(false, 20), 0);
    }

    #[test]
    fn test_only_plain_left_click_opens_in_place() {
        assert!(opens_in_place(0, false));
        assert!(!opens_in_place(0, true));
        assert!(!opens_in_place(1, false));
    }
}
