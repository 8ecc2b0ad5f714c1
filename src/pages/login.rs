//! Login page with email + password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthError;
use crate::util::auth::{login_redirect, use_auth, use_auth_state};

/// Text shown in the alert for a failed login: the error's own message.
pub fn login_error_message(err: &AuthError) -> String {
    err.to_string()
}

/// Submission state of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub error: Option<String>,
    pub submitting: bool,
}

impl LoginForm {
    /// Clear any previous error and mark the form busy.
    pub fn begin_submit(&mut self) {
        self.error = None;
        self.submitting = true;
    }

    /// Settle a submission, recording the failure message if any.
    pub fn finish_submit(&mut self, outcome: Result<(), AuthError>) {
        self.submitting = false;
        if let Err(err) = outcome {
            self.error = Some(login_error_message(&err));
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Connexion..." } else { "Se connecter" }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let auth_state = use_auth_state();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(LoginForm::default());

    // Successful login updates the store, which lands here.
    Effect::new(move || {
        if let Some(path) = login_redirect(&auth_state.get()) {
            navigate(path, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.update(LoginForm::begin_submit);

        let auth = auth.clone();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = auth.login(&email_value, &password_value).await.map(|_| ());
            form.update(|f| f.finish_submit(outcome));
        });
    };

    view! {
        <main class="login-page">
            <section class="login-card">
                <h1>"Connexion"</h1>
                <p class="login-card__subtitle">"Connectez-vous pour accéder au tableau de bord."</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            name="email"
                            type="email"
                            autocomplete="email"
                            required=true
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Mot de passe"
                        <input
                            class="login-input"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    // Alert text is `LoginForm::error`; exercised in login_test.rs.
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="login-message login-message--error" role="alert">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || form.with(|f| f.submitting)
                    >
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                </form>
            </section>
        </main>
    }
}
