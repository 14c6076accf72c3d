//! Public entry page carrying the auth form.

use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::components::auth_form::AuthForm;
use crate::state::gate::{self, GateDecision, GateRoute};
use crate::state::session;

/// Entry page — an already signed-in visitor skips the form entirely and is
/// sent to the dashboard.
#[component]
pub fn AuthPage() -> impl IntoView {
    let decision = gate::evaluate(GateRoute::Entry, session::browser().is_authenticated());

    match decision {
        GateDecision::RedirectToDashboard => {
            let navigate = use_navigate();
            Effect::new(move || {
                navigate("/dashboard", NavigateOptions::default());
            });
            ().into_any()
        }
        GateDecision::Render | GateDecision::RedirectToEntry { .. } => view! {
            <div class="auth-page">
                <AuthForm/>
            </div>
        }
        .into_any(),
    }
}
