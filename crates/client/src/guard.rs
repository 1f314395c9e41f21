//! Route-level access control for client navigation.

use crate::gateway::IdentityGateway;
use crate::session::AuthSession;

pub const LOGIN_PATH: &str = "/login";

/// A client route and whether it needs a logged-in user.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// Every route the client knows. `:param` segments match any value.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "home",
        requires_auth: false,
    },
    Route {
        path: "/login",
        name: "login",
        requires_auth: false,
    },
    Route {
        path: "/pitch/:id",
        name: "pitch",
        requires_auth: false,
    },
    Route {
        path: "/dashboard",
        name: "dashboard",
        requires_auth: true,
    },
    Route {
        path: "/dashboard/project",
        name: "project-editor",
        requires_auth: true,
    },
];

/// Outcome of a navigation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Find the route matching `path`, ignoring any query string or fragment.
pub fn match_route(path: &str) -> Option<&'static Route> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    ROUTES.iter().find(|route| pattern_matches(route.path, path))
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let pattern: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    pattern.len() == path.len()
        && pattern
            .iter()
            .zip(&path)
            .all(|(p, s)| p.starts_with(':') || p == s)
}

/// Run before every navigation.
///
/// Resolves the session once on first use, then sends anonymous users away
/// from protected routes. Unknown paths proceed.
pub async fn before_each<G: IdentityGateway>(
    session: &mut AuthSession<G>,
    path: &str,
) -> Navigation {
    if !session.is_initialized() {
        session.check_auth().await;
    }

    let requires_auth = match_route(path).is_some_and(|r| r.requires_auth);
    if requires_auth && !session.is_authenticated() {
        tracing::debug!(%path, "Redirecting anonymous navigation to login");
        return Navigation::Redirect(LOGIN_PATH);
    }
    Navigation::Proceed
}
