use super::*;
use crate::net::types::User;

fn user(role: UserRole, verified: bool, plan: Option<SubscriptionPlan>, features: &[&str]) -> User {
    User {
        id: 1,
        email: Some("a@b.com".to_owned()),
        full_name: None,
        phone: None,
        user_type: role,
        is_verified: verified,
        features: features.iter().map(|f| (*f).to_owned()).collect(),
        subscription_plan: plan,
        language_preference: None,
    }
}

fn session_with(user: User) -> AuthState {
    let mut state = AuthState::default();
    state.succeed(user, "jwt".to_owned());
    state
}

fn unauthenticated() -> AuthState {
    let mut state = AuthState::default();
    state.fail(None);
    state
}

fn loading() -> AuthState {
    let mut state = AuthState::default();
    state.begin();
    state
}

fn redirect_of(decision: &AccessDecision) -> &str {
    match decision {
        AccessDecision::Redirect(path) => path,
        other => panic!("expected redirect, got {other:?}"),
    }
}

// =============================================================
// Loading placeholder
// =============================================================

#[test]
fn loading_session_always_renders_placeholder() {
    let requirement = RouteRequirement::admin().with_plan(SubscriptionPlan::Enterprise);
    assert_eq!(
        evaluate(&loading(), &requirement, "/admin/dashboard"),
        AccessDecision::Loading
    );
}

// =============================================================
// Authentication
// =============================================================

#[test]
fn unauthenticated_session_redirects_to_login_with_origin() {
    let decision = evaluate(
        &unauthenticated(),
        &RouteRequirement::authenticated(),
        "/portal/documents",
    );
    assert_eq!(
        redirect_of(&decision),
        "/auth/login?from=/portal/documents"
    );
}

#[test]
fn authentication_precedes_plan_check() {
    // A session failing both auth and plan must land on login, never on the
    // upgrade route.
    let requirement = RouteRequirement::authenticated().with_plan(SubscriptionPlan::Premium);
    let decision = evaluate(&unauthenticated(), &requirement, "/portal/documents");
    assert!(redirect_of(&decision).starts_with("/auth/login"));
}

#[test]
fn public_route_renders_for_unauthenticated_session() {
    let requirement = RouteRequirement {
        require_auth: false,
        ..RouteRequirement::default()
    };
    assert_eq!(
        evaluate(&unauthenticated(), &requirement, "/"),
        AccessDecision::Render
    );
}

// =============================================================
// Verification
// =============================================================

#[test]
fn unverified_user_redirects_to_verify_route() {
    let session = session_with(user(UserRole::Investor, false, None, &[]));
    let decision = evaluate(
        &session,
        &RouteRequirement::verified(),
        "/portal/documents",
    );
    assert_eq!(redirect_of(&decision), "/portal/verify-email");
}

#[test]
fn verify_redirect_target_is_configurable() {
    let session = session_with(user(UserRole::Investor, false, None, &[]));
    let requirement = RouteRequirement::verified().with_verify_route("/auth/verify-email");
    let decision = evaluate(&session, &requirement, "/portal/documents");
    assert_eq!(redirect_of(&decision), "/auth/verify-email");
}

#[test]
fn verification_precedes_role_checks() {
    let session = session_with(user(UserRole::Investor, false, None, &[]));
    let requirement = RouteRequirement::verified().with_roles([UserRole::Admin]);
    let decision = evaluate(&session, &requirement, "/x");
    assert_eq!(redirect_of(&decision), "/portal/verify-email");
}

// =============================================================
// Admin-only and role allow-list
// =============================================================

#[test]
fn non_admin_on_admin_route_falls_back_to_portal_not_login() {
    let session = session_with(user(UserRole::Investor, true, None, &[]));
    let decision = evaluate(&session, &RouteRequirement::admin(), "/admin/dashboard");
    assert_eq!(redirect_of(&decision), "/portal/dashboard");
}

#[test]
fn admin_passes_admin_route() {
    let session = session_with(user(UserRole::Admin, true, None, &[]));
    assert_eq!(
        evaluate(&session, &RouteRequirement::admin(), "/admin/dashboard"),
        AccessDecision::Render
    );
}

#[test]
fn role_allow_list_rejects_non_members() {
    let session = session_with(user(UserRole::Investor, true, None, &[]));
    let requirement = RouteRequirement::authenticated().with_roles([UserRole::Admin]);
    let decision = evaluate(&session, &requirement, "/x");
    assert_eq!(redirect_of(&decision), "/portal/dashboard");
}

#[test]
fn role_allow_list_accepts_members() {
    let session = session_with(user(UserRole::Investor, true, None, &[]));
    let requirement =
        RouteRequirement::authenticated().with_roles([UserRole::Admin, UserRole::Investor]);
    assert_eq!(evaluate(&session, &requirement, "/x"), AccessDecision::Render);
}

#[test]
fn unknown_role_is_never_a_member() {
    let session = session_with(user(UserRole::Unknown, true, None, &[]));
    let requirement = RouteRequirement::authenticated().with_roles([UserRole::Investor]);
    assert!(matches!(
        evaluate(&session, &requirement, "/x"),
        AccessDecision::Redirect(_)
    ));
}

// =============================================================
// Feature gating
// =============================================================

#[test]
fn all_required_features_must_be_present() {
    let session = session_with(user(UserRole::Investor, true, None, &["analytics"]));
    let requirement = RouteRequirement::authenticated()
        .with_features(["analytics".to_owned(), "exports".to_owned()]);
    let decision = evaluate(&session, &requirement, "/x");
    assert_eq!(redirect_of(&decision), "/portal/dashboard");
}

#[test]
fn feature_complete_user_renders() {
    let session = session_with(user(
        UserRole::Investor,
        true,
        None,
        &["analytics", "exports"],
    ));
    let requirement = RouteRequirement::authenticated()
        .with_features(["analytics".to_owned(), "exports".to_owned()]);
    assert_eq!(evaluate(&session, &requirement, "/x"), AccessDecision::Render);
}

#[test]
fn admin_bypasses_feature_gating() {
    let session = session_with(user(UserRole::Admin, true, None, &[]));
    let requirement =
        RouteRequirement::authenticated().with_features(["analytics".to_owned()]);
    assert_eq!(evaluate(&session, &requirement, "/x"), AccessDecision::Render);
}

#[test]
fn admin_does_not_bypass_plan_gating() {
    let session = session_with(user(UserRole::Admin, true, None, &[]));
    let requirement = RouteRequirement::authenticated().with_plan(SubscriptionPlan::Premium);
    let decision = evaluate(&session, &requirement, "/x");
    assert_eq!(redirect_of(&decision), "/portal/upgrade");
}

// =============================================================
// Plan gating
// =============================================================

#[test]
fn basic_plan_under_premium_requirement_redirects_to_upgrade() {
    let session = session_with(user(
        UserRole::Investor,
        true,
        Some(SubscriptionPlan::Basic),
        &[],
    ));
    let requirement = RouteRequirement::authenticated().with_plan(SubscriptionPlan::Premium);
    let decision = evaluate(&session, &requirement, "/portal/documents");
    assert_eq!(redirect_of(&decision), "/portal/upgrade");
}

#[test]
fn missing_plan_ranks_below_basic_requirement() {
    let session = session_with(user(UserRole::Investor, true, None, &[]));
    let requirement = RouteRequirement::authenticated().with_plan(SubscriptionPlan::Basic);
    let decision = evaluate(&session, &requirement, "/x");
    assert_eq!(redirect_of(&decision), "/portal/upgrade");
}

#[test]
fn sufficient_plan_renders() {
    let session = session_with(user(
        UserRole::Investor,
        true,
        Some(SubscriptionPlan::Professional),
        &[],
    ));
    let requirement = RouteRequirement::authenticated().with_plan(SubscriptionPlan::Premium);
    assert_eq!(evaluate(&session, &requirement, "/x"), AccessDecision::Render);
}

// =============================================================
// Composition ordering
// =============================================================

#[test]
fn first_failing_check_determines_redirect() {
    // Unverified, wrong role, missing features, and under-planned: the
    // verification check fires first.
    let session = session_with(user(UserRole::Unknown, false, None, &[]));
    let requirement = RouteRequirement::verified()
        .with_roles([UserRole::Investor])
        .with_features(["analytics".to_owned()])
        .with_plan(SubscriptionPlan::Enterprise);
    let decision = evaluate(&session, &requirement, "/x");
    assert_eq!(redirect_of(&decision), "/portal/verify-email");
}

#[test]
fn fully_entitled_session_renders_through_every_check() {
    let session = session_with(user(
        UserRole::Investor,
        true,
        Some(SubscriptionPlan::Enterprise),
        &["analytics"],
    ));
    let requirement = RouteRequirement::verified()
        .with_roles([UserRole::Investor])
        .with_features(["analytics".to_owned()])
        .with_plan(SubscriptionPlan::Premium);
    assert_eq!(evaluate(&session, &requirement, "/x"), AccessDecision::Render);
}
