//! Client-side mirror of the backend's password policy, so forms can reject
//! weak passwords before a network round-trip.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Shown when a password fails [`meets_policy`]; wording matches the
/// backend's own rejection so both paths read the same to the user.
pub const POLICY_MESSAGE: &str =
    "Password must be at least 8 characters with uppercase, lowercase, and numbers";

/// At least 8 characters with an uppercase letter, a lowercase letter, and
/// a digit.
pub fn meets_policy(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
