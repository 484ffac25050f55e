//! Route path constants shared by the router, guards, and the API layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Redirect targets live here so the guard defaults, the 401 handler, and the
//! route table cannot drift apart.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
pub const RESET_PASSWORD: &str = "/auth/reset-password";
pub const VERIFY_EMAIL: &str = "/auth/verify-email";

pub const PORTAL_DASHBOARD: &str = "/portal/dashboard";
pub const PORTAL_DOCUMENTS: &str = "/portal/documents";
pub const PORTAL_PROFILE: &str = "/portal/profile";
pub const PORTAL_UPGRADE: &str = "/portal/upgrade";
pub const PORTAL_VERIFY_EMAIL: &str = "/portal/verify-email";

pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";

/// Build the login redirect for an unauthenticated request, carrying the
/// originally requested path in the `from` query parameter so the login page
/// can return there after success.
pub fn login_redirect(login_route: &str, from: &str) -> String {
    if from.is_empty() || from == login_route {
        return login_route.to_owned();
    }
    format!("{login_route}?from={from}")
}
