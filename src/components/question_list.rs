//! Question List Component
//!
//! Filter panel, rows and pagination around one [`ListController`], plus the
//! "Add new question" dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::forms::QuestionDraft;
use crate::list_state::ListController;
use crate::models::QuestionPayload;

use super::{Dialog, Pagination, QuestionEditorForm, QuestionItemsList, QuestionsFilterPanel};

const PER_PAGE_OPTIONS: [u32; 3] = [10, 20, 50];

#[component]
pub fn QuestionList() -> impl IntoView {
    let controller = ListController::mount();
    let api = use_api();

    let (adding, set_adding) = signal(false);
    let (saving, set_saving) = signal(false);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);

    let page = Signal::derive(move || controller.query.with(|q| q.page));
    let page_count = Signal::derive(move || controller.list.with(|s| s.page_count()));
    let load_error = move || controller.list.with(|s| s.last_error.clone());

    let close_dialog = move || {
        set_adding.set(false);
        set_submit_error.set(None);
    };

    let create_question = Callback::new(move |payload: QuestionPayload| {
        let api = api.clone();
        set_saving.set(true);
        spawn_local(async move {
            match api.create_question(&payload).await {
                Ok(()) => {
                    log::info!("[LIST] Created question {:?}", payload.title);
                    set_adding.set(false);
                    set_submit_error.set(None);
                    controller.refresh();
                }
                Err(err) => {
                    log::error!("[LIST] There was an error adding new question: {}", err);
                    set_submit_error.set(Some(err.to_string()));
                }
            }
            set_saving.set(false);
        });
    });

    view! {
        <section class="question-list">
            <div class="list-toolbar">
                <QuestionsFilterPanel controller/>
                <button type="button" class="btn btn-primary" on:click=move |_| set_adding.set(true)>
                    "Add new question"
                </button>
            </div>

            {move || load_error().map(|msg| view! {
                <div class="error-banner" role="alert">
                    "Could not load questions: " {msg}
                </div>
            })}

            <QuestionItemsList controller/>

            <div class="list-footer">
                <Show when={move || page_count.get() > 1}>
                    <Pagination page page_count on_change=move |p: u32| controller.set_page(p)/>
                </Show>
                <label class="per-page">
                    "Rows per page "
                    <select on:change=move |ev| {
                        if let Ok(per_page) = event_target_value(&ev).parse::<u32>() {
                            controller.set_per_page(per_page);
                        }
                    }>
                        {PER_PAGE_OPTIONS
                            .into_iter()
                            .map(|n| view! {
                                <option
                                    value=n.to_string()
                                    prop:selected=move || controller.query.with(|q| q.per_page == n)
                                >
                                    {n}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <Show when=move || adding.get()>
                <Dialog title="Add new question" on_close=move |_| close_dialog()>
                    <QuestionEditorForm
                        initial=QuestionDraft::default()
                        on_submit=create_question
                        on_cancel=move |_| close_dialog()
                        submit_error=submit_error
                        busy=saving
                        submit_text="Add"
                    />
                </Dialog>
            </Show>
        </section>
    }
}
