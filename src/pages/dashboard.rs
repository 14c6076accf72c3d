//! Protected dashboard: submit a YouTube URL, render the returned summary.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::components::toast_host::show;
use crate::state::session;
use crate::state::summary::{SummaryPhase, SummaryState};
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::Toast;

/// Dashboard route, behind the auth gate.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected>
            <SummaryDashboard/>
        </Protected>
    }
}

/// The summary request lifecycle: validate, fetch, display, copy.
#[component]
fn SummaryDashboard() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(SummaryState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(SummaryState::is_submitting) {
            return;
        }

        match state.try_update(SummaryState::begin_submit) {
            // Valid YouTube URL: single GET, no retry, no client timeout.
            Some(Ok(video_url)) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let toast = match crate::net::api::fetch_summary(&video_url).await {
                        Ok(summary) => state
                            .try_update(|s| s.complete_success(summary))
                            .unwrap_or_else(Toast::summary_success),
                        Err(e) => {
                            leptos::logging::warn!("summary request failed: {e}");
                            state
                                .try_update(SummaryState::complete_failure)
                                .unwrap_or_else(Toast::summary_failed)
                        }
                    };
                    show(toasts, toast);
                });
                #[cfg(not(feature = "hydrate"))]
                let _ = video_url;
            }
            // Rejected before any network call.
            Some(Err(toast)) => show(toasts, toast),
            None => {}
        }
    };

    let on_copy = move |_| {
        let Some(text) = state.with_untracked(|s| s.summary_text().map(ToOwned::to_owned))
        else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::util::clipboard::write_text(&text).await.is_ok() {
                state.update(|s| s.copied = true);
                show(toasts, Toast::copy_success());
                // Revert the "Copied!" affordance after two seconds.
                gloo_timers::future::sleep(std::time::Duration::from_millis(2000)).await;
                state.update(|s| s.copied = false);
            } else {
                show(toasts, Toast::copy_failed());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    // Terminal for the session: drop the flag and leave the SPA entirely.
    let on_logout = move |_| {
        session::browser().clear();
        crate::util::navigation::hard_redirect("/");
    };

    let submitting = move || state.get().is_submitting();
    let submit_label = move || {
        if state.get().is_submitting() {
            "Processing..."
        } else {
            "Generate Summary"
        }
    };
    let copy_label = move || if state.get().copied { "Copied!" } else { "Copy" };
    let show_result = move || {
        matches!(
            state.get().phase,
            SummaryPhase::Submitting | SummaryPhase::Success(_)
        )
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Video Summary Dashboard"</h1>
                <p>"Generate summaries of YouTube videos instantly"</p>
            </header>

            <section class="dashboard-page__form-card">
                <h2>"YouTube Video Summary"</h2>
                <p>"Enter a YouTube URL to get started"</p>

                <form on:submit=on_submit>
                    <label class="dashboard-page__label" for="video-url">
                        "YouTube Video URL"
                    </label>
                    <input
                        id="video-url"
                        class="dashboard-page__input"
                        type="url"
                        placeholder="https://www.youtube.com/watch?v=..."
                        prop:value=move || state.get().video_url
                        on:input=move |ev| {
                            state.update(|s| s.set_url(event_target_value(&ev)));
                        }
                        disabled=submitting
                    />
                    <p class="dashboard-page__hint">
                        "Paste any YouTube video URL to generate its summary"
                    </p>

                    <button
                        type="submit"
                        class="btn btn--primary dashboard-page__submit"
                        disabled=move || {
                            state.get().is_submitting() || state.get().video_url.is_empty()
                        }
                    >
                        {submit_label}
                    </button>
                </form>
            </section>

            <Show when=show_result>
                <section class="dashboard-page__result">
                    {move || match state.get().phase {
                        SummaryPhase::Submitting => view! {
                            <p class="dashboard-page__spinner">"Generating summary..."</p>
                        }
                        .into_any(),
                        SummaryPhase::Success(text) => view! {
                            <div class="dashboard-page__summary">
                                <div class="dashboard-page__summary-header">
                                    <h3>"Video Summary"</h3>
                                    <button class="btn dashboard-page__copy" on:click=on_copy>
                                        {copy_label}
                                    </button>
                                </div>
                                <p class="dashboard-page__summary-text">{text}</p>
                            </div>
                        }
                        .into_any(),
                        _ => ().into_any(),
                    }}
                </section>
            </Show>

            <footer class="dashboard-page__footer">
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </footer>
        </div>
    }
}
