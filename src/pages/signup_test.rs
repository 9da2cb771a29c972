use super::*;

fn form(email: &str, nickname: &str, password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        email: email.to_owned(),
        nickname: nickname.to_owned(),
        password: password.to_owned(),
        password_confirm: confirm.to_owned(),
    }
}

#[test]
fn validate_signup_trims_identity_fields() {
    let request = validate_signup(&form(" a@b.com ", " 홍길동 ", "password1", "password1")).unwrap();
    assert_eq!(request.email, "a@b.com");
    assert_eq!(request.nickname, "홍길동");
    assert_eq!(request.password, "password1");
}

#[test]
fn validate_signup_requires_every_field() {
    assert_eq!(validate_signup(&form("", "nick", "password1", "password1")), Err("Fill in every field."));
    assert_eq!(validate_signup(&form("a@b.com", "  ", "password1", "password1")), Err("Fill in every field."));
    assert_eq!(validate_signup(&form("a@b.com", "nick", "", "")), Err("Fill in every field."));
}

#[test]
fn validate_signup_rejects_mismatched_passwords() {
    assert_eq!(
        validate_signup(&form("a@b.com", "nick", "password1", "password2")),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_signup_enforces_password_length() {
    assert_eq!(
        validate_signup(&form("a@b.com", "nick", "short", "short")),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_signup_counts_nickname_chars_not_bytes() {
    let twenty = "가".repeat(MAX_NICKNAME_LEN);
    assert!(validate_signup(&form("a@b.com", &twenty, "password1", "password1")).is_ok());
    let over = "가".repeat(MAX_NICKNAME_LEN + 1);
    assert_eq!(
        validate_signup(&form("a@b.com", &over, "password1", "password1")),
        Err("Nickname must be 20 characters or fewer.")
    );
}

#[test]
fn validate_signup_rejects_email_without_at_sign() {
    assert_eq!(
        validate_signup(&form("nobody", "nick", "password1", "password1")),
        Err("Enter a valid email address.")
    );
}
