//! Unguarded history page.

use leptos::prelude::*;

/// History page — reachable without signing in.
#[component]
pub fn HistoryPage() -> impl IntoView {
    view! {
        <div class="history-page">
            <h1>"Summary History"</h1>
            <p>"Past summaries will appear here."</p>
            <a href="/dashboard">"Back to dashboard"</a>
        </div>
    }
}
