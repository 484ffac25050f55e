use super::*;

// =============================================================
// User deserialization defaults
// =============================================================

#[test]
fn minimal_me_response_fills_documented_defaults() {
    let user: User = serde_json::from_str(r#"{"id":1,"role":"investor","is_verified":false}"#)
        .expect("minimal record should deserialize");
    assert_eq!(user.id, 1);
    assert_eq!(user.user_type, UserRole::Investor);
    assert!(!user.is_verified);
    assert!(user.features.is_empty());
    assert_eq!(user.subscription_plan, None);
    assert_eq!(user.email, None);
}

#[test]
fn user_type_field_name_is_accepted() {
    let user: User = serde_json::from_str(r#"{"id":7,"user_type":"admin"}"#).expect("deserialize");
    assert!(user.is_admin());
}

#[test]
fn unrecognized_role_grants_nothing() {
    let user: User = serde_json::from_str(r#"{"id":2,"user_type":"superuser"}"#).expect("deserialize");
    assert_eq!(user.user_type, UserRole::Unknown);
    assert!(!user.is_admin());
}

#[test]
fn missing_role_defaults_to_unknown() {
    let user: User = serde_json::from_str(r#"{"id":3}"#).expect("deserialize");
    assert_eq!(user.user_type, UserRole::Unknown);
}

#[test]
fn unrecognized_plan_collapses_to_none() {
    let user: User =
        serde_json::from_str(r#"{"id":4,"subscription_plan":"platinum"}"#).expect("deserialize");
    assert_eq!(user.subscription_plan, None);
}

#[test]
fn null_plan_collapses_to_none() {
    let user: User =
        serde_json::from_str(r#"{"id":4,"subscription_plan":null}"#).expect("deserialize");
    assert_eq!(user.subscription_plan, None);
}

#[test]
fn known_plan_is_parsed() {
    let user: User =
        serde_json::from_str(r#"{"id":5,"subscription_plan":"professional"}"#).expect("deserialize");
    assert_eq!(user.subscription_plan, Some(SubscriptionPlan::Professional));
}

// =============================================================
// Plan ordering
// =============================================================

#[test]
fn plan_ordinals_are_strictly_increasing() {
    let tiers = [
        SubscriptionPlan::Basic,
        SubscriptionPlan::Premium,
        SubscriptionPlan::Professional,
        SubscriptionPlan::Enterprise,
    ];
    for pair in tiers.windows(2) {
        assert!(pair[0].ordinal() < pair[1].ordinal());
    }
}

#[test]
fn absent_plan_ranks_below_basic() {
    assert_eq!(plan_ordinal(None), 0);
    assert!(plan_ordinal(None) < SubscriptionPlan::Basic.ordinal());
}

// =============================================================
// Feature checks
// =============================================================

#[test]
fn has_all_features_requires_every_listed_feature() {
    let user: User = serde_json::from_str(
        r#"{"id":6,"features":["analytics","exports"]}"#,
    )
    .expect("deserialize");
    assert!(user.has_all_features(&["analytics".to_owned()]));
    assert!(user.has_all_features(&["analytics".to_owned(), "exports".to_owned()]));
    assert!(!user.has_all_features(&["analytics".to_owned(), "bulk-import".to_owned()]));
}

#[test]
fn empty_requirement_always_passes() {
    let user: User = serde_json::from_str(r#"{"id":6}"#).expect("deserialize");
    assert!(user.has_all_features(&[]));
}

// =============================================================
// UserPatch merge
// =============================================================

fn sample_user() -> User {
    serde_json::from_str(
        r#"{"id":9,"email":"a@b.com","full_name":"Amira","user_type":"investor","is_verified":false}"#,
    )
    .expect("deserialize")
}

#[test]
fn patch_merges_only_set_fields() {
    let mut user = sample_user();
    let patch = UserPatch {
        full_name: Some("Amira K.".to_owned()),
        ..UserPatch::default()
    };
    patch.apply(&mut user);
    assert_eq!(user.full_name.as_deref(), Some("Amira K."));
    assert_eq!(user.email.as_deref(), Some("a@b.com"));
    assert!(!user.is_verified);
}

#[test]
fn empty_patch_is_identity() {
    let mut user = sample_user();
    UserPatch::default().apply(&mut user);
    assert_eq!(user, sample_user());
}

#[test]
fn patch_serializes_only_set_fields() {
    let patch = UserPatch {
        phone: Some("+9715550100".to_owned()),
        ..UserPatch::default()
    };
    let body = serde_json::to_value(&patch).expect("serialize");
    assert_eq!(body, serde_json::json!({"phone": "+9715550100"}));
}

// =============================================================
// Auth responses
// =============================================================

#[test]
fn login_response_accepts_backend_token_field_name() {
    let resp: AuthResponse =
        serde_json::from_str(r#"{"access_token":"jwt","user":{"id":1}}"#).expect("deserialize");
    assert_eq!(resp.token, "jwt");
    assert_eq!(resp.user.id, 1);
}

#[test]
fn register_response_without_token_means_verification_pending() {
    let resp: RegisterResponse = serde_json::from_str(
        r#"{"message":"Registration successful. Please check your email to verify your account."}"#,
    )
    .expect("deserialize");
    assert_eq!(resp.token, None);
    assert_eq!(resp.user, None);
}

#[test]
fn register_response_accepts_camel_case_verification_flag() {
    let resp: RegisterResponse =
        serde_json::from_str(r#"{"requiresVerification":true}"#).expect("deserialize");
    assert!(resp.requires_verification);
}
