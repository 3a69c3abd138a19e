//! Tag List Component
//!
//! Settings view of all tags with add, rename and delete.

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{use_api, ApiError};
use crate::context::use_app_context;
use crate::forms::{FormError, TagDraft};
use crate::models::{Tag, TagPayload};
use crate::store::{use_catalog, CatalogStateStoreFields};

use super::{ConfirmDialog, Dialog};

#[derive(Debug, Clone, PartialEq)]
enum TagDialog {
    Add,
    Edit(Tag),
    Delete(Tag),
}

#[component]
pub fn TagEditorForm(
    initial: TagDraft,
    #[prop(into)] on_submit: Callback<TagPayload>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] submit_error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] submit_text: String,
) -> impl IntoView {
    let (name, set_name) = signal(initial.name);
    let (name_error, set_name_error) = signal::<Option<FormError>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match (TagDraft { name: name.get_untracked() }).validate() {
            Ok(payload) => {
                set_name_error.set(None);
                on_submit.run(payload);
            }
            Err(err) => set_name_error.set(Some(err)),
        }
    };

    view! {
        <form class="editor-form" on:submit=submit>
            <label class="form-field">
                <span>"Name"</span>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                {move || name_error.get().map(|err| view! { <span class="field-error">{err.to_string()}</span> })}
            </label>
            {move || submit_error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <div class="dialog-actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {submit_text}
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn TagList() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = use_catalog();
    let api = use_api();

    let (dialog, set_dialog) = signal::<Option<TagDialog>>(None);
    let (busy, set_busy) = signal(false);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let close_dialog = move || {
        set_dialog.set(None);
        set_action_error.set(None);
    };

    let run = move |action: &'static str, request: LocalBoxFuture<'static, Result<(), ApiError>>| {
        set_busy.set(true);
        spawn_local(async move {
            match request.await {
                Ok(()) => {
                    log::info!("[SETTINGS] Tag {} succeeded", action);
                    close_dialog();
                    ctx.reload_catalog();
                }
                Err(err) => {
                    log::error!("[SETTINGS] There was an error during tag {}: {}", action, err);
                    set_action_error.set(Some(err.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    let save = {
        let api = api.clone();
        Callback::new(move |payload: TagPayload| {
            let api = api.clone();
            match dialog.get_untracked() {
                Some(TagDialog::Edit(tag)) => {
                    run("update", async move { api.update_tag(tag.id, &payload).await }.boxed_local())
                }
                _ => run("create", async move { api.create_tag(&payload).await }.boxed_local()),
            }
        })
    };

    let delete = Callback::new(move |_: ()| {
        if let Some(TagDialog::Delete(tag)) = dialog.get_untracked() {
            let api = api.clone();
            run("delete", async move { api.delete_tag(tag.id).await }.boxed_local());
        }
    });

    view! {
        <section class="settings-section">
            <div class="section-header">
                <h2>"Tags"</h2>
                <button type="button" class="btn btn-primary" on:click=move |_| set_dialog.set(Some(TagDialog::Add))>
                    "Add tag"
                </button>
            </div>
            <ul class="settings-list">
                <For
                    each=move || catalog.tags().get()
                    key=|tag| (tag.id, tag.name.clone())
                    children=move |tag| {
                        let for_edit = tag.clone();
                        let for_delete = tag.clone();
                        view! {
                            <li class="settings-row">
                                <span class="chip chip-outlined">{tag.name}</span>
                                <button
                                    type="button"
                                    class="btn btn-small"
                                    on:click=move |_| set_dialog.set(Some(TagDialog::Edit(for_edit.clone())))
                                >
                                    "Edit"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-small btn-danger"
                                    on:click=move |_| set_dialog.set(Some(TagDialog::Delete(for_delete.clone())))
                                >
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            {move || match dialog.get() {
                Some(TagDialog::Add) => view! {
                    <Dialog title="Add tag" on_close=move |_| close_dialog()>
                        <TagEditorForm
                            initial=TagDraft::default()
                            on_submit=save
                            on_cancel=move |_| close_dialog()
                            submit_error=action_error
                            busy=busy
                            submit_text="Add"
                        />
                    </Dialog>
                }
                .into_any(),
                Some(TagDialog::Edit(tag)) => view! {
                    <Dialog title="Edit tag" on_close=move |_| close_dialog()>
                        <TagEditorForm
                            initial=TagDraft { name: tag.name.clone() }
                            on_submit=save
                            on_cancel=move |_| close_dialog()
                            submit_error=action_error
                            busy=busy
                            submit_text="Save"
                        />
                    </Dialog>
                }
                .into_any(),
                Some(TagDialog::Delete(tag)) => view! {
                    <ConfirmDialog
                        title="Delete tag"
                        message=format!("Delete tag \"{}\"?", tag.name)
                        on_confirm=delete
                        on_cancel=move |_| close_dialog()
                        error=action_error
                        busy=busy
                    />
                }
                .into_any(),
                None => ().into_any(),
            }}
        </section>
    }
}
