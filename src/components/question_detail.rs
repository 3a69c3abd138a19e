//! Question Detail Component
//!
//! One question rendered from markdown, with update and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::api::use_api;
use crate::context::HighlightMailbox;
use crate::forms::QuestionDraft;
use crate::markdown::parse_markdown;
use crate::models::{Question, QuestionPayload};
use crate::text::format_created_date;

use super::{ConfirmDialog, Dialog, QuestionEditorForm};

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded,
    NotFound,
    Failed(String),
}

/// Go back in history; straight to the list when the app was opened here
fn go_back(navigate: &dyn Fn(&str, NavigateOptions)) {
    match window().history() {
        Ok(history) if history.length().unwrap_or(0) > 1 => {
            let _ = history.back();
        }
        _ => navigate("/questions", Default::default()),
    }
}

#[component]
pub fn QuestionDetail() -> impl IntoView {
    let api = use_api();
    let mailbox = expect_context::<HighlightMailbox>();
    let navigate = StoredValue::new_local(use_navigate());
    let params = use_params_map();
    let question_id = Memo::new(move |_| params.with(|p| p.get("id")).and_then(|id| id.parse::<u32>().ok()));

    let (question, set_question) = signal::<Option<Question>>(None);
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (revision, set_revision) = signal(0u32);

    let (editing, set_editing) = signal(false);
    let (confirming_delete, set_confirming_delete) = signal(false);
    let (busy, set_busy) = signal(false);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    // Load on mount, on id change and after an update
    {
        let api = api.clone();
        Effect::new(move |_| {
            revision.track();
            let Some(id) = question_id.get() else {
                set_load_state.set(LoadState::NotFound);
                return;
            };
            if question.with_untracked(|q| q.as_ref().map(|q| q.id)) != Some(id) {
                set_load_state.set(LoadState::Loading);
            }
            let api = api.clone();
            spawn_local(async move {
                match api.fetch_question(id).await {
                    Ok(loaded) => {
                        set_question.set(Some(loaded));
                        set_load_state.set(LoadState::Loaded);
                    }
                    Err(err) if err.status() == Some(404) => {
                        log::warn!("[DETAIL] Question {} not found", id);
                        set_load_state.set(LoadState::NotFound);
                    }
                    Err(err) => {
                        log::error!("[DETAIL] There was an error fetching the question with id {}: {}", id, err);
                        set_load_state.set(LoadState::Failed(err.to_string()));
                    }
                }
            });
        });
    }

    let close_dialogs = move || {
        set_editing.set(false);
        set_confirming_delete.set(false);
        set_action_error.set(None);
    };

    let update_question = {
        let api = api.clone();
        Callback::new(move |payload: QuestionPayload| {
            let Some(id) = question_id.get_untracked() else { return };
            let api = api.clone();
            set_busy.set(true);
            spawn_local(async move {
                match api.update_question(id, &payload).await {
                    Ok(()) => {
                        log::info!("[DETAIL] Updated question {}", id);
                        close_dialogs();
                        set_revision.update(|r| *r += 1);
                    }
                    Err(err) => {
                        log::error!("[DETAIL] There was an error updating question with id {}: {}", id, err);
                        set_action_error.set(Some(err.to_string()));
                    }
                }
                set_busy.set(false);
            });
        })
    };

    let delete_question = Callback::new(move |_: ()| {
        let Some(id) = question_id.get_untracked() else { return };
        let api = api.clone();
        set_busy.set(true);
        spawn_local(async move {
            match api.delete_question(id).await {
                Ok(()) => {
                    log::info!("[DETAIL] Deleted question {}", id);
                    // The row is gone; nothing to highlight on the way back
                    mailbox.take();
                    set_busy.set(false);
                    navigate.with_value(|navigate| navigate("/questions", Default::default()));
                }
                Err(err) => {
                    log::error!("[DETAIL] There was an error deleting the question with id {}: {}", id, err);
                    set_action_error.set(Some(err.to_string()));
                    set_busy.set(false);
                }
            }
        });
    });

    view! {
        <article class="question-detail">
            <button type="button" class="btn btn-back" on:click=move |_| navigate.with_value(|navigate| go_back(navigate))>
                "‹ Back"
            </button>
            {move || match load_state.get() {
                LoadState::Loading => view! { <div class="skeleton skeleton-detail"></div> }.into_any(),
                LoadState::NotFound => view! { <p class="empty-state">"Question not found"</p> }.into_any(),
                LoadState::Failed(msg) => view! {
                    <div class="error-banner" role="alert">"Could not load the question: " {msg}</div>
                }
                .into_any(),
                LoadState::Loaded => question
                    .get()
                    .map(|q| {
                        let tags = q.tags.clone();
                        view! {
                            <h1>{q.title.clone()}</h1>
                            <div class="detail-meta">
                                <span class="question-date">{format_created_date(&q.created_date)}</span>
                                <div class="detail-chips">
                                    <strong>"Category:"</strong>
                                    <span class="chip chip-primary">{q.category.name.clone()}</span>
                                </div>
                                <div class="detail-chips">
                                    <strong>"Tags:"</strong>
                                    {if tags.is_empty() {
                                        view! { <span>"No Tags"</span> }.into_any()
                                    } else {
                                        tags.into_iter()
                                            .map(|t| view! { <span class="chip chip-outlined">{t.name}</span> })
                                            .collect_view()
                                            .into_any()
                                    }}
                                </div>
                            </div>
                            <div class="markdown-body" inner_html=parse_markdown(&q.content)></div>
                            <div class="detail-actions">
                                <button type="button" class="btn btn-primary" on:click=move |_| set_editing.set(true)>
                                    "Update"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-danger"
                                    on:click=move |_| set_confirming_delete.set(true)
                                >
                                    "Delete"
                                </button>
                            </div>
                        }
                    })
                    .into_any(),
            }}

            <Show when=move || editing.get()>
                {move || question.get().map(|q| view! {
                    <Dialog title="Update question" on_close=move |_| close_dialogs()>
                        <QuestionEditorForm
                            initial=QuestionDraft::from_question(&q)
                            on_submit=update_question
                            on_cancel=move |_| close_dialogs()
                            submit_error=action_error
                            busy=busy
                            submit_text="Update"
                        />
                    </Dialog>
                })}
            </Show>

            <Show when=move || confirming_delete.get()>
                <ConfirmDialog
                    title="Delete question"
                    message="Are you sure you want to delete this question?"
                    on_confirm=delete_question
                    on_cancel=move |_| close_dialogs()
                    error=action_error
                    busy=busy
                />
            </Show>
        </article>
    }
}
