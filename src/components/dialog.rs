//! Dialog Components
//!
//! Modal shell used by the editor forms, and a confirm dialog for deletes.

use leptos::prelude::*;

/// Modal with a title bar. Clicking the backdrop closes it.
#[component]
pub fn Dialog(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                <div class="dialog-title">
                    <h2>{title}</h2>
                    <button class="dialog-close" type="button" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Yes/no confirmation. Stays open on failure and shows `error`.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <Dialog title=title on_close=on_cancel>
            <div class="dialog-content">
                <p>{message}</p>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            </div>
            <div class="dialog-actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    type="button"
                    class="btn btn-danger"
                    disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
            </div>
        </Dialog>
    }
}
