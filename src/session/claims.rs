//! Best-effort decoding of the credential's claims segment.
//!
//! Decoding here is display-only. Nothing is verified: the backend stays the
//! authority on whether a credential is valid, and a token that decodes fine
//! may still be rejected with a 401 on the next call.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use leptos::logging::warn;
use serde_json::{Map, Value};

use crate::net::pipeline::BEARER_PREFIX;

const CLAIMS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Informational view of a credential.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Claims {
    pub subject: Option<String>,
    pub display_name: Option<String>,
    /// Seconds since the Unix epoch.
    pub issued_at: Option<i64>,
    /// Seconds since the Unix epoch.
    pub expires_at: Option<i64>,
}

impl Claims {
    /// Decode `credential`, reading the display name from `display_claim`.
    pub fn decode(credential: &str, display_claim: &str) -> Option<Self> {
        let payload = decode_payload(credential)?;
        Some(Self {
            subject: payload.get("sub").and_then(claim_as_string),
            display_name: payload
                .get(display_claim)
                .and_then(Value::as_str)
                .filter(|name| !name.trim().is_empty())
                .map(str::to_owned),
            issued_at: payload.get("iat").and_then(Value::as_i64),
            expires_at: payload.get("exp").and_then(Value::as_i64),
        })
    }
}

/// Display name carried by `credential`, if any.
pub fn project(credential: &str, display_claim: &str) -> Option<String> {
    Claims::decode(credential, display_claim)?.display_name
}

/// Subjects are usually strings, but some issuers emit numeric ids.
fn claim_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn decode_payload(credential: &str) -> Option<Map<String, Value>> {
    let token = credential.trim();
    let token = token.strip_prefix(BEARER_PREFIX).unwrap_or(token);

    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        warn!("credential is not a three-segment token ({} segments)", segments.len());
        return None;
    };

    // Accept the standard alphabet too; the engine itself only knows URL-safe.
    let normalized: String = payload
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = match CLAIMS_ENGINE.decode(normalized.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("credential claims are not base64: {e}");
            return None;
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            warn!("credential claims are not a JSON object");
            None
        }
        Err(e) => {
            warn!("credential claims are not JSON: {e}");
            None
        }
    }
}
