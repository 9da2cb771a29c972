use super::*;
use crate::net::testing::harness;
use crate::session::AuthStatus;
use futures::executor::block_on;
use serde_json::Value;

// =============================================================
// Header normalization
// =============================================================

#[test]
fn authorization_value_adds_prefix() {
    assert_eq!(authorization_value("abc"), "Bearer abc");
}

#[test]
fn authorization_value_keeps_existing_prefix() {
    assert_eq!(authorization_value("Bearer abc"), "Bearer abc");
}

#[test]
fn authorization_value_is_idempotent() {
    for credential in ["abc", "Bearer abc", "a.b.c", "", "bearer lower", "Bearerabc"] {
        let once = authorization_value(credential);
        assert_eq!(authorization_value(&once), once, "credential {credential:?}");
    }
}

#[test]
fn attach_credential_without_credential_leaves_request_alone() {
    let request = ApiRequest::get("https://api.test/x");
    assert_eq!(attach_credential(request.clone(), None), request);
}

#[test]
fn attach_credential_replaces_existing_header() {
    let request = ApiRequest::get("https://api.test/x").with_header("authorization", "Basic zzz");
    let request = attach_credential(request, Some("tok"));
    assert_eq!(request.header(AUTHORIZATION), Some("Bearer tok"));
    assert_eq!(request.headers.len(), 1);
}

#[test]
fn post_json_sets_content_type() {
    let request = ApiRequest::post_json("https://api.test/x", &serde_json::json!({ "amount": 5 })).unwrap();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.header("content-type"), Some(JSON_CONTENT_TYPE));
    assert_eq!(request.body, RequestBody::Json(r#"{"amount":5}"#.to_owned()));
}

// =============================================================
// Outbound requests
// =============================================================

#[test]
fn empty_store_sends_no_authorization_header() {
    let h = harness(None);
    h.transport.reply(200, "{}");
    let _: Value = block_on(h.client.get_json("/api/v1/categories")).unwrap();
    let sent = h.transport.last();
    assert_eq!(sent.header(AUTHORIZATION), None);
    assert_eq!(sent.url, "https://api.test/api/v1/categories");
}

#[test]
fn stored_credential_is_attached_as_bearer() {
    let h = harness(Some("tok"));
    h.transport.reply(200, "{}");
    let _: Value = block_on(h.client.get_json("/main/api/v1/members/me/credit")).unwrap();
    assert_eq!(h.transport.last().header(AUTHORIZATION), Some("Bearer tok"));
}

#[test]
fn prefixed_credential_is_not_double_prefixed() {
    let h = harness(Some("Bearer tok"));
    h.transport.reply(200, "{}");
    let _: Value = block_on(h.client.get_json("/x")).unwrap();
    assert_eq!(h.transport.last().header(AUTHORIZATION), Some("Bearer tok"));
}

#[test]
fn credential_is_read_per_call() {
    let h = harness(None);
    h.transport.reply(200, "{}").reply(200, "{}");
    let _: Value = block_on(h.client.get_json("/x")).unwrap();
    h.client.session().establish("fresh");
    let _: Value = block_on(h.client.get_json("/x")).unwrap();
    let sent = h.transport.sent();
    assert_eq!(sent[0].header(AUTHORIZATION), None);
    assert_eq!(sent[1].header(AUTHORIZATION), Some("Bearer fresh"));
}

// =============================================================
// Responses
// =============================================================

#[test]
fn success_body_is_decoded_untouched() {
    let h = harness(Some("tok"));
    h.transport.reply(200, r#"{"credit":1500}"#);
    let body: Value = block_on(h.client.get_json("/x")).unwrap();
    assert_eq!(body, serde_json::json!({ "credit": 1500 }));
}

#[test]
fn unauthorized_tears_down_session() {
    let h = harness(Some("tok"));
    h.transport.reply(401, "");
    let result: Result<Value, _> = block_on(h.client.get_json("/x"));
    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(h.store.get(), None);
    assert_eq!(h.client.session().snapshot().status, AuthStatus::Unauthenticated);
    assert_eq!(h.effects.notices(), 1);
    assert_eq!(h.effects.redirects(), 1);
}

#[test]
fn concurrent_unauthorized_responses_redirect_once() {
    let h = harness(Some("tok"));
    h.transport.reply(401, "").reply(401, "");
    let (a, b) = block_on(async {
        futures::join!(
            h.client.get_json::<Value>("/main/api/v1/members/me/credit"),
            h.client.get_json::<Value>("/main/api/v1/notifications/me"),
        )
    });
    assert_eq!(a, Err(ApiError::Unauthorized));
    assert_eq!(b, Err(ApiError::Unauthorized));
    assert_eq!(h.store.get(), None);
    assert_eq!(h.effects.notices(), 1);
    assert_eq!(h.effects.redirects(), 1);
}

#[test]
fn other_statuses_surface_backend_message_without_teardown() {
    let h = harness(Some("tok"));
    h.transport.reply(400, r#"{"message":"Insufficient credit"}"#);
    let result = block_on(h.client.post_json_unit("/x", &serde_json::json!({ "biddingPrice": 10 })));
    assert_eq!(
        result,
        Err(ApiError::Status { status: 400, message: "Insufficient credit".to_owned() })
    );
    assert_eq!(h.store.get().as_deref(), Some("tok"));
    assert_eq!(h.effects.redirects(), 0);
}

#[test]
fn forbidden_is_not_treated_as_session_expiry() {
    let h = harness(Some("tok"));
    h.transport.reply(403, "");
    let result: Result<Value, _> = block_on(h.client.get_json("/x"));
    assert!(matches!(result, Err(ApiError::Status { status: 403, .. })));
    assert_eq!(h.store.get().as_deref(), Some("tok"));
}

#[test]
fn timeout_fails_call_without_teardown() {
    let h = harness(Some("tok"));
    h.transport.fail(ApiError::Timeout(10_000));
    let result: Result<Value, _> = block_on(h.client.get_json("/x"));
    assert_eq!(result, Err(ApiError::Timeout(10_000)));
    assert_eq!(h.store.get().as_deref(), Some("tok"));
    assert!(h.client.session().snapshot().is_authenticated());
    assert_eq!(h.effects.redirects(), 0);
}

#[test]
fn transport_failure_is_not_retried() {
    let h = harness(Some("tok"));
    h.transport.fail(ApiError::Transport("connection reset".to_owned())).reply(200, "{}");
    let result: Result<Value, _> = block_on(h.client.get_json("/x"));
    assert_eq!(result, Err(ApiError::Transport("connection reset".to_owned())));
    assert_eq!(h.transport.sent().len(), 1);
    assert_eq!(h.store.get().as_deref(), Some("tok"));
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let h = harness(None);
    h.transport.reply(200, "<html>");
    let result: Result<Vec<u32>, _> = block_on(h.client.get_json("/x"));
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn unit_posts_ignore_empty_bodies() {
    let h = harness(Some("tok"));
    h.transport.reply(201, "");
    assert_eq!(block_on(h.client.post_json_unit("/x", &serde_json::json!({}))), Ok(()));
}

#[test]
fn multipart_posts_carry_fields_and_file() {
    let h = harness(Some("tok"));
    h.transport.reply(200, "");
    let file = FilePart {
        field: "image".to_owned(),
        file_name: "lamp.png".to_owned(),
        mime: "image/png".to_owned(),
        bytes: vec![1, 2, 3],
    };
    let fields = vec![("name".to_owned(), "Lamp".to_owned())];
    block_on(h.client.post_multipart("/api/v1/products", fields.clone(), Some(file.clone()))).unwrap();
    let sent = h.transport.last();
    assert_eq!(sent.header(CONTENT_TYPE), None);
    assert_eq!(sent.header(AUTHORIZATION), Some("Bearer tok"));
    assert_eq!(sent.body, RequestBody::Multipart { fields, file: Some(file) });
}
