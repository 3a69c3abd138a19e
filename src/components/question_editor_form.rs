//! Question Editor Form
//!
//! Title, category, tags and markdown content with a live preview. Used by
//! the "Add new question" and "Update" dialogs.

use leptos::prelude::*;

use crate::config::CONTENT_CHARS_LIMIT;
use crate::forms::{QuestionDraft, QuestionFormErrors};
use crate::markdown::parse_markdown;
use crate::models::{QuestionPayload, Tag};
use crate::store::{use_catalog, CatalogStateStoreFields};

use super::{CategorySelect, TagPicker};

fn field_error(message: Option<String>) -> impl IntoView {
    message.map(|msg| view! { <span class="field-error">{msg}</span> })
}

#[component]
pub fn QuestionEditorForm(
    initial: QuestionDraft,
    #[prop(into)] on_submit: Callback<QuestionPayload>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] submit_error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into, default = "Ok".to_string())] submit_text: String,
) -> impl IntoView {
    let catalog = use_catalog();
    let draft = RwSignal::new(initial);
    // Errors appear after the first submit attempt, then track every edit
    let (attempted, set_attempted) = signal(false);

    let errors = Memo::new(move |_| {
        if !attempted.get() {
            return QuestionFormErrors::default();
        }
        draft.with(|d| d.validate().err().unwrap_or_default())
    });

    let all_tags = Signal::derive(move || catalog.tags().get());
    let selected_tags = Signal::derive(move || draft.with(|d| d.tag_ids.clone()));
    let selected_category = Signal::derive(move || draft.with(|d| d.category_id));
    let content_len = move || draft.with(|d| d.content.chars().count());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_attempted.set(true);
        match draft.with_untracked(|d| d.validate()) {
            Ok(payload) => on_submit.run(payload),
            Err(errors) => log::debug!("[EDITOR] Rejected draft: {:?}", errors),
        }
    };

    view! {
        <form class="editor-form" on:submit=submit>
            <label class="form-field">
                <span>"Title"</span>
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
                {move || field_error(errors.with(|e| e.title.as_ref().map(|e| e.to_string())))}
            </label>

            <label class="form-field">
                <span>"Category"</span>
                <CategorySelect
                    selected=selected_category
                    none_label="Select category"
                    on_change={move |id: Option<u32>| draft.update(|d| d.category_id = id)}
                />
                {move || field_error(errors.with(|e| e.category.as_ref().map(|e| e.to_string())))}
            </label>

            <div class="form-field">
                <span>"Tags"</span>
                <TagPicker
                    all_tags=all_tags
                    selected=selected_tags
                    on_toggle=move |tag: Tag| draft.update(|d| d.toggle_tag(&tag))
                />
            </div>

            <div class="form-field markdown-editor">
                <textarea
                    class="markdown-input"
                    placeholder="Write the answer in markdown..."
                    prop:value=move || draft.with(|d| d.content.clone())
                    on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                ></textarea>
                <div
                    class="markdown-preview markdown-body"
                    inner_html=move || draft.with(|d| parse_markdown(&d.content))
                ></div>
                <span class="char-count" class:over-limit={move || content_len() > CONTENT_CHARS_LIMIT}>
                    {move || format!("{} / {}", content_len(), CONTENT_CHARS_LIMIT)}
                </span>
                {move || field_error(errors.with(|e| e.content.as_ref().map(|e| e.to_string())))}
            </div>

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
