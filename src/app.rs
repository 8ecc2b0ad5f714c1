//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::config::ClientConfig;
use crate::net::api::HttpTransport;
use crate::net::auth::AppAuthClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::AuthStore;
use crate::util::auth::mirror_auth_store;

/// Root application component.
///
/// Builds the token store and auth client for this tab, mirrors the store
/// into a signal, and provides both as context before routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let store = AuthStore::new();
    let auth_state = mirror_auth_store(&store);
    let client = AppAuthClient::new(config, store, HttpTransport);

    provide_context(auth_state);
    provide_context(client);

    view! {
        <Title text="Codex"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
