//! Header Component

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <span class="app-title">
                <A href="/questions">"Interview Questions"</A>
            </span>
            <nav class="app-nav">
                <A href="/questions">"Questions"</A>
                <A href="/settings">"Settings"</A>
            </nav>
        </header>
    }
}
