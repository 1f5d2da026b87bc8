//! Route resolution and the authentication guard.

use crate::session::SessionStore;

/// Navigable routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Users,
}

/// Views the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    UserList,
}

/// Outcome of guarding a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(View),
    Redirect(Route),
}

pub fn parse_route(path: &str) -> Option<Route> {
    match path {
        "/login" => Some(Route::Login),
        "/users" => Some(Route::Users),
        _ => None,
    }
}

/// Resolves a navigation against the current session.
///
/// Re-evaluated on every navigation, never cached. The users route requires
/// a non-empty token; unknown paths fall through to the login redirect.
pub fn resolve(route: Option<Route>, session: &SessionStore) -> Resolution {
    match route {
        Some(Route::Login) => Resolution::Render(View::Login),
        Some(Route::Users) if session.is_authenticated() => Resolution::Render(View::UserList),
        Some(Route::Users) => Resolution::Redirect(Route::Login),
        None => Resolution::Redirect(Route::Login),
    }
}
