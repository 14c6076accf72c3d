//! Auth gate wrapper for protected routes.

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::toast_host::show;
use crate::state::gate::{self, GateDecision, GateRoute};
use crate::state::session;
use crate::state::toast::ToastState;

/// Gates its children behind the session flag.
///
/// An unauthenticated visit shows the "sign in required" notice exactly once
/// and bounces to the entry route, discarding the attempted navigation. The
/// flag is the sole authority here; it is never checked against the backend.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let decision = gate::evaluate(GateRoute::Dashboard, session::browser().is_authenticated());

    match decision {
        GateDecision::Render => children().into_any(),
        GateDecision::RedirectToEntry { notice } => {
            show(toasts, notice);
            let navigate = use_navigate();
            Effect::new(move || {
                navigate(
                    "/",
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                );
            });
            ().into_any()
        }
        // Not produced for protected routes; render nothing if it ever is.
        GateDecision::RedirectToDashboard => ().into_any(),
    }
}
