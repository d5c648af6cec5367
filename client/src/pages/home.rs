//! Landing page with a link to log in, or to the current dashboard.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::util::auth::SessionHandle;

#[component]
pub fn HomePage(session: SessionHandle) -> impl IntoView {
    let status = move || {
        session.identity().map(|who| {
            let dashboard = AppRoute::dashboard_for(&who.role).path();
            view! {
                <p class="home-page__status">
                    "Logged in as " <strong>{who.name}</strong> " (" {who.role.to_string()} ")"
                </p>
                <A href=dashboard>"Go to dashboard"</A>
            }
        })
    };

    view! {
        <div class="home-page">
            <h1>"Rolegate"</h1>
            <p>"Role-based route protection demo."</p>
            {status}
            <nav class="home-page__links">
                <A href=AppRoute::Login.path()>"Login"</A>
                <A href=AppRoute::UserDashboard.path()>"User Dashboard"</A>
                <A href=AppRoute::AdminDashboard.path()>"Admin Dashboard"</A>
            </nav>
        </div>
    }
}
