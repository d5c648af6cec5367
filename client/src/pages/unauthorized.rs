//! Shown when a logged-in identity lacks the role a view requires.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h2>"Unauthorized"</h2>
            <p>"You do not have permission to view that page."</p>
            <nav>
                <A href=AppRoute::Home.path()>"Home"</A>
                " | "
                <A href=AppRoute::Login.path()>"Log in as someone else"</A>
            </nav>
        </div>
    }
}
