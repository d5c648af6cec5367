//! Root application component with routing.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::Protected;
use crate::pages::{
    dashboard::{AdminDashboardPage, UserDashboardPage},
    home::HomePage,
    login::LoginPage,
    unauthorized::UnauthorizedPage,
};
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::auth::SessionHandle;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the one session for the page and hands it to every route view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new(SessionStore::empty(Arc::new(BrowserStorage)));

    // Effects only run in the browser, after hydration.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/rolegate.css"/>
        <Title text="Rolegate"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment(AppRoute::Home.segment())
                        view=move || view! { <HomePage session/> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Login.segment())
                        view=move || view! { <LoginPage session/> }
                    />
                    <Route
                        path=StaticSegment(AppRoute::Unauthorized.segment())
                        view=UnauthorizedPage
                    />
                    <Route
                        path=StaticSegment(AppRoute::UserDashboard.segment())
                        view=move || {
                            view! {
                                <Protected session route=AppRoute::UserDashboard>
                                    <UserDashboardPage session/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment(AppRoute::AdminDashboard.segment())
                        view=move || {
                            view! {
                                <Protected session route=AppRoute::AdminDashboard>
                                    <AdminDashboardPage session/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
