//! Dashboard page shown behind the route guard.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::auth::AuthError;
use crate::net::types::UserProfile;
use crate::util::auth::use_auth;

/// One-line greeting for the loaded profile.
pub fn profile_greeting(profile: &UserProfile) -> String {
    match profile.role_summary() {
        Some(roles) => format!("Connecté en tant que {} ({roles})", profile.email),
        None => format!("Connecté en tant que {}", profile.email),
    }
}

/// Text shown when the profile cannot be loaded.
pub fn profile_error_message(err: &AuthError) -> String {
    format!("Profil indisponible : {err}")
}

/// Dashboard page: current user summary and a logout button.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let profile = LocalResource::new({
        let auth = auth.clone();
        move || {
            let auth = auth.clone();
            async move { auth.current_user().await }
        }
    });

    let on_logout = move |_| auth.logout();

    view! {
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Tableau de bord"</h1>
                <button class="btn" on:click=on_logout>
                    "Se déconnecter"
                </button>
            </header>
            <Suspense fallback=move || view! { <p>"Chargement du profil..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(user) => view! { <p class="dashboard-page__user">{profile_greeting(&user)}</p> }.into_any(),
                            Err(err) => view! { <p class="dashboard-page__error">{profile_error_message(&err)}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}
