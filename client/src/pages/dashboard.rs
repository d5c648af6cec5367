//! Role-specific dashboards.
//!
//! Both dashboards share one layout; the route table decides which roles may
//! reach each one and `Protected` enforces it in `app`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::state::identity::Identity;
use crate::util::auth::SessionHandle;

/// Greeting line for the current identity.
pub(crate) fn greeting(identity: Option<&Identity>) -> String {
    format!("welcome, {}", identity.map_or("", |who| who.name.as_str()))
}

#[component]
fn DashboardView(session: SessionHandle, title: &'static str) -> impl IntoView {
    let welcome = move || greeting(session.identity().as_ref());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>{title}</h2>
            </header>
            <p>{welcome}</p>
            <LogoutButton session/>
        </div>
    }
}

/// Dashboard for the `user` role.
#[component]
pub fn UserDashboardPage(session: SessionHandle) -> impl IntoView {
    view! { <DashboardView session title="User Dashboard"/> }
}

/// Dashboard for the `admin` role.
#[component]
pub fn AdminDashboardPage(session: SessionHandle) -> impl IntoView {
    view! { <DashboardView session title="Admin Dashboard"/> }
}
