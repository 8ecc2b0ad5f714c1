//! Route guard wrapping protected views.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::util::auth::{GuardDecision, guard_decision, use_auth_state};

/// Renders `children` while authenticated; otherwise redirects to login.
///
/// The decision is recomputed whenever the mirrored auth state changes, so a
/// logout anywhere in the app immediately sends the user back to `/login`.
/// The decision itself is covered by `util/auth_test.rs`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_state();

    move || match guard_decision(&auth.get()) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
