use super::*;

#[test]
fn validate_email_input_trims_address() {
    assert_eq!(
        validate_email_input("  user@example.com  "),
        Ok("user@example.com".to_owned())
    );
}

#[test]
fn validate_email_input_rejects_blank_and_malformed() {
    assert_eq!(validate_email_input("   "), Err("Enter a valid email address."));
    assert_eq!(validate_email_input("nope"), Err("Enter a valid email address."));
}

#[test]
fn sent_message_does_not_leak_account_existence() {
    assert!(SENT_MESSAGE.starts_with("If the email exists"));
}
