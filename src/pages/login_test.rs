use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(LoginRequest { email: "user@example.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("a@b.com", " pad ").unwrap();
    assert_eq!(request.password, " pad ");
}

#[test]
fn validate_login_input_rejects_missing_at_sign() {
    assert_eq!(validate_login_input("user.example.com", "x"), Err("Enter a valid email address."));
}
