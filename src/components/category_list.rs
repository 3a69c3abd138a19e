//! Category List Component
//!
//! Settings view of the category tree: add, edit, delete. A category with
//! subcategories cannot be deleted, and it cannot be moved under itself or
//! one of its descendants.

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

use crate::api::{use_api, ApiError};
use crate::context::use_app_context;
use crate::forms::{CategoryDraft, FormError};
use crate::models::{Category, CategoryPayload};
use crate::store::{use_catalog, CatalogStateStoreFields};
use crate::tree::{has_children, subtree_ids, with_nesting_levels};

use super::{CategorySelect, ConfirmDialog, Dialog};

/// Left padding of a row at `level`
fn row_padding(level: usize) -> String {
    format!("padding-left: {}px", 16 + level * 22)
}

#[derive(Debug, Clone, PartialEq)]
enum CategoryDialog {
    Add,
    Edit(Category),
    Delete(Category),
}

#[component]
pub fn CategoryEditorForm(
    initial: CategoryDraft,
    /// Category being edited; its subtree is not offered as a parent
    editing_id: Option<u32>,
    #[prop(into)] on_submit: Callback<CategoryPayload>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] submit_error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] submit_text: String,
) -> impl IntoView {
    let catalog = use_catalog();
    let draft = RwSignal::new(initial);
    let (name_error, set_name_error) = signal::<Option<FormError>>(None);

    let exclude: HashSet<u32> = editing_id
        .map(|id| catalog.categories().with_untracked(|categories| subtree_ids(categories, id)))
        .unwrap_or_default();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(|d| d.validate()) {
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
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                {move || name_error.get().map(|err| view! { <span class="field-error">{err.to_string()}</span> })}
            </label>
            <label class="form-field">
                <span>"Parent category"</span>
                <CategorySelect
                    selected=Signal::derive(move || draft.with(|d| d.parent_id))
                    none_label="No parent"
                    exclude=exclude
                    on_change={move |id: Option<u32>| draft.update(|d| d.parent_id = id)}
                />
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
pub fn CategoryList() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = use_catalog();
    let api = use_api();

    let (dialog, set_dialog) = signal::<Option<CategoryDialog>>(None);
    let (busy, set_busy) = signal(false);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let leveled = Memo::new(move |_| catalog.categories().with(|categories| with_nesting_levels(categories)));

    let close_dialog = move || {
        set_dialog.set(None);
        set_action_error.set(None);
    };

    // Run a mutation; close and reload on success, keep the dialog open on failure
    let run = move |action: &'static str, request: LocalBoxFuture<'static, Result<(), ApiError>>| {
        set_busy.set(true);
        spawn_local(async move {
            match request.await {
                Ok(()) => {
                    log::info!("[SETTINGS] Category {} succeeded", action);
                    close_dialog();
                    ctx.reload_catalog();
                }
                Err(err) => {
                    log::error!("[SETTINGS] There was an error during category {}: {}", action, err);
                    set_action_error.set(Some(err.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    let save = {
        let api = api.clone();
        Callback::new(move |payload: CategoryPayload| {
            let api = api.clone();
            match dialog.get_untracked() {
                Some(CategoryDialog::Edit(category)) => {
                    run("update", async move { api.update_category(category.id, &payload).await }.boxed_local())
                }
                _ => run("create", async move { api.create_category(&payload).await }.boxed_local()),
            }
        })
    };

    let delete = Callback::new(move |_: ()| {
        if let Some(CategoryDialog::Delete(category)) = dialog.get_untracked() {
            let api = api.clone();
            run("delete", async move { api.delete_category(category.id).await }.boxed_local());
        }
    });

    view! {
        <section class="settings-section">
            <div class="section-header">
                <h2>"Categories"</h2>
                <button type="button" class="btn btn-primary" on:click=move |_| set_dialog.set(Some(CategoryDialog::Add))>
                    "Add category"
                </button>
            </div>
            <ul class="settings-list">
                <For
                    each=move || leveled.get()
                    key=|entry| (entry.category.id, entry.category.name.clone(), entry.level)
                    children=move |entry| {
                        let category = entry.category;
                        let id = category.id;
                        let locked = move || catalog.categories().with(|categories| has_children(categories, id));
                        let for_edit = category.clone();
                        let for_delete = category.clone();
                        view! {
                            <li class="settings-row" style=row_padding(entry.level)>
                                <span class="settings-name">{category.name.clone()}</span>
                                <button
                                    type="button"
                                    class="btn btn-small"
                                    on:click=move |_| set_dialog.set(Some(CategoryDialog::Edit(for_edit.clone())))
                                >
                                    "Edit"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-small btn-danger"
                                    disabled=locked
                                    title=move || locked().then_some("Delete its subcategories first")
                                    on:click=move |_| set_dialog.set(Some(CategoryDialog::Delete(for_delete.clone())))
                                >
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>

            {move || match dialog.get() {
                Some(CategoryDialog::Add) => view! {
                    <Dialog title="Add category" on_close=move |_| close_dialog()>
                        <CategoryEditorForm
                            initial=CategoryDraft::default()
                            editing_id=None
                            on_submit=save
                            on_cancel=move |_| close_dialog()
                            submit_error=action_error
                            busy=busy
                            submit_text="Add"
                        />
                    </Dialog>
                }
                .into_any(),
                Some(CategoryDialog::Edit(category)) => view! {
                    <Dialog title="Edit category" on_close=move |_| close_dialog()>
                        <CategoryEditorForm
                            initial=CategoryDraft::from_category(&category)
                            editing_id=Some(category.id)
                            on_submit=save
                            on_cancel=move |_| close_dialog()
                            submit_error=action_error
                            busy=busy
                            submit_text="Save"
                        />
                    </Dialog>
                }
                .into_any(),
                Some(CategoryDialog::Delete(category)) => view! {
                    <ConfirmDialog
                        title="Delete category"
                        message=format!("Delete category \"{}\"?", category.name)
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
