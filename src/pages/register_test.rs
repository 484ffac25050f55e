use super::*;

fn valid() -> Result<RegisterPayload, String> {
    validate_register_input(
        " Amira Khan ",
        " amira@example.com ",
        "",
        "Password1",
        "Password1",
        "ar",
    )
}

#[test]
fn valid_input_builds_trimmed_payload() {
    let payload = valid().expect("valid input");
    assert_eq!(payload.full_name, "Amira Khan");
    assert_eq!(payload.email, "amira@example.com");
    assert_eq!(payload.phone, None);
    assert_eq!(payload.language_preference, "ar");
}

#[test]
fn full_name_is_required() {
    let result = validate_register_input("  ", "a@b.com", "", "Password1", "Password1", "en");
    assert_eq!(result, Err("Full name is required.".to_owned()));
}

#[test]
fn email_must_look_like_an_address() {
    let result = validate_register_input("Amira", "not-an-email", "", "Password1", "Password1", "en");
    assert_eq!(result, Err("Enter a valid email address.".to_owned()));
}

#[test]
fn weak_password_reports_policy_message() {
    let result = validate_register_input("Amira", "a@b.com", "", "password", "password", "en");
    assert_eq!(result, Err(password::POLICY_MESSAGE.to_owned()));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let result = validate_register_input("Amira", "a@b.com", "", "Password1", "Password2", "en");
    assert_eq!(result, Err("Passwords do not match.".to_owned()));
}

#[test]
fn phone_is_kept_when_provided() {
    let payload = validate_register_input(
        "Amira",
        "a@b.com",
        " +9715550100 ",
        "Password1",
        "Password1",
        "en",
    )
    .expect("valid input");
    assert_eq!(payload.phone.as_deref(), Some("+9715550100"));
}
