use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use super::lenient;

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not JSON")]
    Json(#[from] serde_json::Error),
    #[error("token payload is not a JSON object")]
    NotAnObject,
}

/// Read-only view of a bearer token's payload.
///
/// The signature is not checked; the backend remains the authority and these
/// claims only decide what the client bothers to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedTokenClaims {
    pub is_admin: bool,
    /// Expiry as seconds since the Unix epoch.
    pub expiry: Option<i64>,
    pub subject: Option<String>,
}

impl DecodedTokenClaims {
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let mut parts = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ClaimsError::Malformed);
        };
        if payload.is_empty() {
            return Err(ClaimsError::Malformed);
        }

        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        let value: Value = serde_json::from_slice(&bytes)?;
        let obj = value.as_object().ok_or(ClaimsError::NotAnObject)?;

        let is_admin = obj.get("is_admin").is_some_and(lenient::value_is_truthy);
        let expiry = obj.get("exp").and_then(Value::as_i64);
        let subject = ["sub", "userid", "user_id"]
            .iter()
            .find_map(|k| obj.get(*k).and_then(lenient::value_to_id));

        Ok(Self {
            is_admin,
            expiry,
            subject,
        })
    }

    pub fn expires_at(&self) -> Option<time::OffsetDateTime> {
        self.expiry
            .and_then(|exp| time::OffsetDateTime::from_unix_timestamp(exp).ok())
    }
}

#[cfg(test)]
#[path = "../tests/model/claims_tests.rs"]
mod tests;
