use super::*;

#[test]
fn validate_login_input_accepts_filled_fields() {
    assert_eq!(validate_login_input("  rahul  ", "rahul@2021"), Ok(()));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("rahul", ""), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_accepts_whitespace_password() {
    assert_eq!(validate_login_input("rahul", " "), Ok(()));
}
