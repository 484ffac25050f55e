//! Route access decisions for the guarded `/portal/*` and `/admin/*` trees.
//!
//! DESIGN
//! ======
//! One configurable [`RouteRequirement`] replaces a family of per-concern
//! guard wrappers. [`evaluate`] applies the checks in a fixed short-circuit
//! order (loading, authentication, verification, admin-only, role
//! allow-list, features, plan), so a session failing several checks always
//! redirects by the earliest one. Redirect targets are per-requirement
//! configuration because callers legitimately disagree on where an
//! unverified or under-subscribed user should land.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::types::{SubscriptionPlan, User, UserRole, plan_ordinal};
use crate::routes;
use crate::state::auth::AuthState;

/// What to do with a requested view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Requirements satisfied; render the view.
    Render,
    /// Requirements not met; navigate to the carried path.
    Redirect(String),
    /// Session still resolving; show the placeholder, never a redirect
    /// flash.
    Loading,
}

/// Declarative access requirement for one route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRequirement {
    pub require_auth: bool,
    pub require_verification: bool,
    pub admin_only: bool,
    /// Empty means any role.
    pub allowed_roles: Vec<UserRole>,
    /// ALL listed features must be present. Admins bypass this check by
    /// design; entitlements gate investors, not back-office staff.
    pub required_features: Vec<String>,
    pub required_plan: Option<SubscriptionPlan>,
    pub login_route: String,
    /// Default authenticated landing for authorization (not
    /// authentication) failures.
    pub fallback_route: String,
    pub upgrade_route: String,
    pub verify_route: String,
}

impl Default for RouteRequirement {
    fn default() -> Self {
        Self {
            require_auth: true,
            require_verification: false,
            admin_only: false,
            allowed_roles: Vec::new(),
            required_features: Vec::new(),
            required_plan: None,
            login_route: routes::LOGIN.to_owned(),
            fallback_route: routes::PORTAL_DASHBOARD.to_owned(),
            upgrade_route: routes::PORTAL_UPGRADE.to_owned(),
            verify_route: routes::PORTAL_VERIFY_EMAIL.to_owned(),
        }
    }
}

impl RouteRequirement {
    /// Plain authenticated route.
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Back-office route: authenticated and admin.
    pub fn admin() -> Self {
        Self {
            admin_only: true,
            ..Self::default()
        }
    }

    /// Authenticated route that also needs a verified email address.
    pub fn verified() -> Self {
        Self {
            require_verification: true,
            ..Self::default()
        }
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = UserRole>) -> Self {
        self.allowed_roles = roles.into_iter().collect();
        self
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = String>) -> Self {
        self.required_features = features.into_iter().collect();
        self
    }

    pub fn with_plan(mut self, plan: SubscriptionPlan) -> Self {
        self.required_plan = Some(plan);
        self
    }

    pub fn with_verify_route(mut self, route: &str) -> Self {
        self.verify_route = route.to_owned();
        self
    }

    pub fn with_fallback_route(mut self, route: &str) -> Self {
        self.fallback_route = route.to_owned();
        self
    }
}

/// Decide whether `current_path` may render for this session.
pub fn evaluate(
    session: &AuthState,
    requirement: &RouteRequirement,
    current_path: &str,
) -> AccessDecision {
    if session.is_loading {
        return AccessDecision::Loading;
    }

    // Authentication first: an unauthenticated session goes to login no
    // matter which other checks would also fail.
    if requirement.require_auth && !session.is_authenticated {
        return AccessDecision::Redirect(routes::login_redirect(
            &requirement.login_route,
            current_path,
        ));
    }

    let user = session.user.as_ref();
    let is_admin = user.is_some_and(User::is_admin);

    if requirement.require_verification && !user.is_some_and(|u| u.is_verified) {
        return AccessDecision::Redirect(requirement.verify_route.clone());
    }

    // Authorization failures redirect to the authenticated landing route,
    // never back to login: the user is signed in, just not allowed here.
    if requirement.admin_only && !is_admin {
        return AccessDecision::Redirect(requirement.fallback_route.clone());
    }

    if !requirement.allowed_roles.is_empty()
        && !user.is_some_and(|u| requirement.allowed_roles.contains(&u.user_type))
    {
        return AccessDecision::Redirect(requirement.fallback_route.clone());
    }

    if !requirement.required_features.is_empty()
        && !is_admin
        && !user.is_some_and(|u| u.has_all_features(&requirement.required_features))
    {
        return AccessDecision::Redirect(requirement.fallback_route.clone());
    }

    if let Some(required) = requirement.required_plan {
        let current = user.and_then(|u| u.subscription_plan);
        if plan_ordinal(current) < required.ordinal() {
            return AccessDecision::Redirect(requirement.upgrade_route.clone());
        }
    }

    AccessDecision::Render
}
