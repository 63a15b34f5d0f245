//! Navigation rules that do not depend on the router itself.

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Send the visitor to the login screen, remembering where they were going.
    Redirect { return_url: String },
}

/// Entry check for protected screens.
pub fn guard(authenticated: bool, requested_path: &str) -> GuardDecision {
    if authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect {
            return_url: requested_path.to_string(),
        }
    }
}

/// Where to go after a successful login. Only same-site paths are honoured.
pub fn post_login_target(return_url: Option<&str>) -> &str {
    match return_url {
        Some(url) if url.starts_with('/') && !url.starts_with("//") && url != LOGIN_PATH => url,
        _ => HOME_PATH,
    }
}

/// Sidebar highlighting: the route itself or anything below it.
pub fn is_active(current: &str, route: &str) -> bool {
    current == route
        || current
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}
