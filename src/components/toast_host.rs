//! Toast rendering and lifetime management.
//!
//! Pages never render notifications themselves; they push a [`Toast`] through
//! [`show`] and this host renders whatever is live in the shared
//! [`ToastState`], auto-dismissing each push after its duration.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastPlacement, ToastState};

/// Show a toast and schedule its auto-dismiss.
///
/// Re-showing an id replaces the live toast; the generation check keeps the
/// superseded timer from dismissing the replacement early.
pub fn show(toasts: RwSignal<ToastState>, toast: Toast) {
    let id = toast.id;
    let duration_ms = toast.duration_ms;
    let generation = toasts.try_update(|t| t.push(toast)).unwrap_or(0);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(duration_ms)).await;
            toasts.update(|t| t.dismiss(id, generation));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, duration_ms, generation);
    }
}

fn toast_class(toast: &Toast) -> String {
    let kind = match toast.kind {
        ToastKind::Success => "toast--success",
        ToastKind::Error => "toast--error",
    };
    let placement = match toast.placement {
        ToastPlacement::TopCenter => "toast--top-center",
        ToastPlacement::TopRight => "toast--top-right",
    };
    format!("toast {kind} {placement}")
}

/// Renders the live toast queue. Mounted once, above the router.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .active()
                    .iter()
                    .map(|active| {
                        let class = toast_class(&active.toast);
                        let message = active.toast.message.clone();
                        view! { <div class=class role="status">{message}</div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
