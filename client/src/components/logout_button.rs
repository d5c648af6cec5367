//! Logout control shared by the dashboards.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::util::auth::{SessionHandle, replace_navigation};

/// Clears the session and returns to the login page.
#[component]
pub fn LogoutButton(session: SessionHandle) -> impl IntoView {
    let navigate = use_navigate();

    let on_click = move |_| {
        session.logout();
        navigate(AppRoute::Login.path(), replace_navigation());
    };

    view! {
        <button class="btn" on:click=on_click>
            "Logout"
        </button>
    }
}
