//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages receive a `SessionHandle` as a prop instead of pulling the session
//! from an ambient context. Guarded routes apply identical redirect
//! behavior through `install_guard_redirect`.
//!
//! The server renders every page with an empty session, so the client also
//! starts empty and restores from storage after mount. `restored` records
//! that step; redirects wait for it so a reload on a dashboard does not
//! bounce to `/login` before the stored identity is read back.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::access::{Access, Redirect};
use crate::state::identity::Identity;
use crate::state::session::SessionStore;

/// Reactive wrapper around the app's one `SessionStore`.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    pub store: RwSignal<SessionStore>,
    pub restored: RwSignal<bool>,
}

impl SessionHandle {
    pub fn new(store: SessionStore) -> Self {
        Self { store: RwSignal::new(store), restored: RwSignal::new(false) }
    }

    /// Read the stored identity back into the slot and unblock redirects.
    pub fn restore(self) {
        self.store.update(SessionStore::restore);
        self.restored.set(true);
    }

    pub fn login(self, identity: Identity) {
        self.store.update(|s| s.set(identity));
        self.restored.set(true);
    }

    pub fn logout(self) {
        self.store.update(SessionStore::clear);
    }

    /// Current identity, tracked.
    pub fn identity(self) -> Option<Identity> {
        self.store.with(|s| s.get().cloned())
    }

    /// Guard decision for `route`, tracked.
    pub fn check(self, route: AppRoute) -> Access {
        self.store.with(|s| route.check(s))
    }
}

/// Redirect to issue for `access`, or `None` to stay put.
///
/// Nothing is issued until the session has been restored.
pub fn pending_redirect(restored: bool, access: Access) -> Option<Redirect> {
    if restored { access.redirect() } else { None }
}

/// Navigation used for redirects and logout: replaces the current history
/// entry so Back does not return to a view that immediately redirects.
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Whether guarded content may be shown.
///
/// Nothing renders until the session has been restored.
pub fn may_render(restored: bool, access: Access) -> bool {
    restored && access.is_render()
}

/// Navigate away from `route` whenever the guard rejects the live session.
pub fn install_guard_redirect<F>(session: SessionHandle, route: AppRoute, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let restored = session.restored.get();
        let access = session.check(route);
        if let Some(target) = pending_redirect(restored, access) {
            log::debug!("guard redirect: {} -> {}", route.path(), target.path());
            navigate(target.path(), replace_navigation());
        }
    });
}
