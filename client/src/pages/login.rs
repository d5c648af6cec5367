//! Login page: pick a name and a role, then land on the matching dashboard.
//!
//! There is no credential check. The name is stored exactly as typed, empty
//! included; the role comes from a closed `<select>`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::identity::{Identity, Role};
use crate::util::auth::SessionHandle;

/// Build the identity submitted by the form.
pub(crate) fn build_identity(name: &str, role_value: &str) -> Identity {
    Identity::new(name, Role::parse(role_value))
}

/// Path to navigate to after logging in as `identity`.
pub(crate) fn login_target(identity: &Identity) -> &'static str {
    AppRoute::dashboard_for(&identity.role).path()
}

#[component]
pub fn LoginPage(session: SessionHandle) -> impl IntoView {
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default().as_str().to_owned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let identity = build_identity(&name.get(), &role.get());
        let target = login_target(&identity);
        session.login(identity);
        navigate(target, NavigateOptions::default());
    };

    let options = Role::CHOICES
        .into_iter()
        .map(|choice| {
            let value = choice.as_str().to_owned();
            let label = choice.label().to_owned();
            view! { <option value=value>{label}</option> }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Login"</h2>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Enter Username"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {options}
                    </select>
                    <button class="login-button" type="submit">
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
