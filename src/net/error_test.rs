use super::*;

#[test]
fn from_status_uses_backend_message() {
    let err = ApiError::from_status(409, r#"{"message":"Bid must exceed the current price"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 409, message: "Bid must exceed the current price".to_owned() }
    );
    assert_eq!(err.to_string(), "Bid must exceed the current price");
}

#[test]
fn from_status_falls_back_for_missing_or_blank_message() {
    for body in ["", "not json", "{}", r#"{"message":"  "}"#, r#"{"message":null}"#] {
        assert_eq!(
            ApiError::from_status(500, body),
            ApiError::Status { status: 500, message: "request failed with status 500".to_owned() },
            "body {body:?}"
        );
    }
}

#[test]
fn message_or_prefers_backend_and_validation_text() {
    let status = ApiError::from_status(400, r#"{"message":"Insufficient credit"}"#);
    assert_eq!(status.message_or("Bid failed."), "Insufficient credit");
    let validation = ApiError::Validation("Enter a valid amount.".to_owned());
    assert_eq!(validation.message_or("Bid failed."), "Enter a valid amount.");
}

#[test]
fn message_or_uses_fallback_for_transport_errors() {
    assert_eq!(ApiError::Transport("reset".to_owned()).message_or("Bid failed."), "Bid failed.");
    assert_eq!(ApiError::Timeout(10_000).message_or("Bid failed."), "Bid failed.");
    assert_eq!(ApiError::Unauthorized.message_or("Bid failed."), "Bid failed.");
}

#[test]
fn retryable_covers_transient_failures_only() {
    assert!(ApiError::Transport("reset".to_owned()).is_retryable());
    assert!(ApiError::Timeout(5).is_retryable());
    assert!(ApiError::from_status(503, "").is_retryable());
    assert!(!ApiError::from_status(404, "").is_retryable());
    assert!(!ApiError::Unauthorized.is_retryable());
    assert!(!ApiError::Validation("x".to_owned()).is_retryable());
    assert!(!ApiError::Decode("x".to_owned()).is_retryable());
}
