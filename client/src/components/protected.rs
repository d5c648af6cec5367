//! Route wrapper that renders its children only when the guard allows it.
//!
//! DESIGN
//! ======
//! The guard decision is recomputed from the session signal on every render
//! pass, so a logout anywhere in the tree hides the children and the
//! installed effect navigates to the redirect target.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::util::auth::{SessionHandle, install_guard_redirect, may_render};

/// Guarded view for `route`. Public routes render unconditionally.
#[component]
pub fn Protected(session: SessionHandle, route: AppRoute, children: ChildrenFn) -> impl IntoView {
    install_guard_redirect(session, route, use_navigate());

    let allowed = move || may_render(session.restored.get(), session.check(route));

    move || allowed().then(|| children())
}
