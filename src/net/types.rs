//! Shared wire DTOs for the REST boundary with the investor-portal backend.
//!
//! DESIGN
//! ======
//! The backend's user record is open-ended: entitlement fields (`features`,
//! `subscription_plan`) appear only for some accounts, and `/auth/me` may
//! return a minimal record. Every field except `id` therefore deserializes
//! leniently with a documented default, so access checks never depend on
//! runtime absent-field coalescing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Account role as reported by the backend's `user_type` column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Back-office administrator; bypasses feature gating.
    Admin,
    /// Portal investor account.
    Investor,
    /// Any role this client does not recognize. Grants nothing.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Subscription tier, ordered `basic < premium < professional < enterprise`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Basic,
    Premium,
    Professional,
    Enterprise,
}

impl SubscriptionPlan {
    /// Position in the plan ordering. Missing or unrecognized plans rank
    /// below `Basic` (ordinal 0) via [`plan_ordinal`].
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Premium => 2,
            Self::Professional => 3,
            Self::Enterprise => 4,
        }
    }
}

impl std::str::FromStr for SubscriptionPlan {
    type Err = ();

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            "professional" => Ok(Self::Professional),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(()),
        }
    }
}

/// Ordinal of an optional plan; `None` (absent or unrecognized) ranks 0.
pub fn plan_ordinal(plan: Option<SubscriptionPlan>) -> u8 {
    plan.map_or(0, SubscriptionPlan::ordinal)
}

/// The authenticated account as returned by `/auth/login` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend row id.
    pub id: i64,
    /// Login email; omitted by some endpoints.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Contact phone captured at registration.
    #[serde(default)]
    pub phone: Option<String>,
    /// Account role; the backend serializes this as `user_type`.
    #[serde(default, alias = "role")]
    pub user_type: UserRole,
    /// Whether the account's email address has been verified.
    #[serde(default)]
    pub is_verified: bool,
    /// Entitlement flags; absent means no gated features.
    #[serde(default)]
    pub features: Vec<String>,
    /// Subscription tier; absent or unrecognized ranks below `basic`.
    #[serde(default, deserialize_with = "lenient_plan")]
    pub subscription_plan: Option<SubscriptionPlan>,
    /// Preferred display language code captured at registration.
    #[serde(default)]
    pub language_preference: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.user_type == UserRole::Admin
    }

    pub fn has_all_features(&self, required: &[String]) -> bool {
        required.iter().all(|feature| self.features.contains(feature))
    }
}

/// Accept any string (or null) where a plan is expected; unknown tiers
/// collapse to `None` rather than failing the whole user record.
fn lenient_plan<'de, D>(deserializer: D) -> Result<Option<SubscriptionPlan>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|code| code.parse().ok()))
}

/// Partial user update applied by profile edits and verification flows.
///
/// Only `Some` fields are merged; everything else on the current user is
/// left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_preference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl UserPatch {
    /// Shallow-merge this patch into `user`.
    pub fn apply(&self, user: &mut User) {
        if let Some(full_name) = &self.full_name {
            user.full_name = Some(full_name.clone());
        }
        if let Some(phone) = &self.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(language_preference) = &self.language_preference {
            user.language_preference = Some(language_preference.clone());
        }
        if let Some(is_verified) = self.is_verified {
            user.is_verified = is_verified;
        }
    }
}

/// Login request body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub language_preference: String,
}

/// Successful login response. The backend names the token `access_token`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
}

/// Registration response. A token is present only when the backend
/// auto-logs-in the new account; verification-pending accounts get neither
/// token nor user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default, alias = "access_token")]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, alias = "requiresVerification")]
    pub requires_verification: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Change-password request body for `PUT /auth/change-password`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}
