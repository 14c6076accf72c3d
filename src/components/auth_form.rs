//! Sign-in / sign-up form.
//!
//! All submit rules live in [`crate::state::auth_form`]; this component wires
//! the reactive model to inputs, runs the network calls, and turns outcomes
//! into toasts and navigation.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

#[cfg(feature = "hydrate")]
use crate::components::toast_host::show;
use crate::state::auth_form::{AuthFormState, AuthMode};
use crate::state::session;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::Toast;

/// Email/password form toggling between sign-in and sign-up.
#[component]
pub fn AuthForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Remember the last chosen mode across visits.
    let initial_mode = if session::browser().sign_up_mode() {
        AuthMode::SignUp
    } else {
        AuthMode::SignIn
    };
    let form = RwSignal::new(AuthFormState::with_mode(initial_mode));

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // One auth operation in flight at a time.
        if form.with_untracked(AuthFormState::is_pending) {
            return;
        }
        if !form.try_update(AuthFormState::validate).unwrap_or(false) {
            return;
        }

        let mode = form.with_untracked(|f| f.mode);
        #[cfg(feature = "hydrate")]
        {
            let email = form.with_untracked(|f| f.email.clone());
            let password = form.with_untracked(|f| f.password.clone());

            match mode {
                AuthMode::SignUp => {
                    form.update(|f| f.signing_up = true);
                    leptos::task::spawn_local(async move {
                        let result = crate::net::auth::sign_up(&email, &password).await;
                        form.update(|f| f.signing_up = false);
                        let toast = match result {
                            Ok(()) => form
                                .try_update(crate::state::auth_form::complete_sign_up)
                                .unwrap_or_else(Toast::signup_success),
                            Err(err) => crate::state::auth_form::fail_auth(&session::browser(), err.message),
                        };
                        show(toasts, toast);
                    });
                }
                AuthMode::SignIn => {
                    form.update(|f| f.signing_in = true);
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        let result = crate::net::auth::sign_in(&email, &password).await;
                        form.update(|f| f.signing_in = false);
                        match result {
                            Ok(()) => {
                                show(toasts, crate::state::auth_form::complete_sign_in(&session::browser()));
                                navigate("/dashboard", NavigateOptions::default());
                            }
                            Err(err) => {
                                show(toasts, crate::state::auth_form::fail_auth(&session::browser(), err.message));
                            }
                        }
                    });
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (mode, toasts);
        }
    };

    let heading = move || match form.get().mode {
        AuthMode::SignUp => "Create Account",
        AuthMode::SignIn => "Welcome Back",
    };
    let subtitle = move || match form.get().mode {
        AuthMode::SignUp => "Sign up to start summarizing videos",
        AuthMode::SignIn => "Sign in to access your summaries",
    };
    let submit_label = move || {
        let state = form.get();
        if state.is_pending() {
            "Loading..."
        } else {
            match state.mode {
                AuthMode::SignUp => "Create Account",
                AuthMode::SignIn => "Sign In",
            }
        }
    };
    let toggle_question = move || match form.get().mode {
        AuthMode::SignUp => "Already have an account?",
        AuthMode::SignIn => "Don't have an account?",
    };
    let toggle_label = move || match form.get().mode {
        AuthMode::SignUp => "Sign In",
        AuthMode::SignIn => "Sign Up",
    };

    let email_class = move || {
        if form.get().errors.email.is_some() {
            "auth-form__input auth-form__input--invalid"
        } else {
            "auth-form__input"
        }
    };
    let password_class = move || {
        if form.get().errors.password.is_some() {
            "auth-form__input auth-form__input--invalid"
        } else {
            "auth-form__input"
        }
    };

    view! {
        <div class="auth-form">
            <div class="auth-form__header">
                <h2>{heading}</h2>
                <p>{subtitle}</p>
            </div>

            <form on:submit=on_submit>
                <label class="auth-form__label">
                    "Email"
                    <input
                        class=email_class
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.set_email(event_target_value(&ev)));
                        }
                    />
                </label>
                {move || {
                    form.get()
                        .errors
                        .email
                        .map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                }}

                <label class="auth-form__label">
                    "Password"
                    <input
                        class=password_class
                        type=move || if form.get().show_password { "text" } else { "password" }
                        placeholder="Enter your password"
                        prop:value=move || form.get().password
                        on:input=move |ev| {
                            form.update(|f| f.set_password(event_target_value(&ev)));
                        }
                    />
                    <button
                        type="button"
                        class="auth-form__toggle-visibility"
                        on:click=move |_| form.update(|f| f.show_password = !f.show_password)
                    >
                        {move || if form.get().show_password { "Hide" } else { "Show" }}
                    </button>
                </label>
                {move || {
                    form.get()
                        .errors
                        .password
                        .map(|msg| view! { <p class="auth-form__error">{msg}</p> })
                }}
                <Show when=move || form.get().mode == AuthMode::SignUp>
                    <p class="auth-form__hint">"Password must be at least 8 characters long"</p>
                </Show>

                <button
                    type="submit"
                    class="btn btn--primary auth-form__submit"
                    disabled=move || form.get().is_pending()
                >
                    {submit_label}
                </button>
            </form>

            <p class="auth-form__switch">
                {toggle_question}
                " "
                <button
                    type="button"
                    class="auth-form__switch-button"
                    on:click=move |_| form.update(|f| f.toggle_mode(&session::browser()))
                >
                    {toggle_label}
                </button>
            </p>
        </div>
    }
}
