use super::*;

fn token_with(payload: serde_json::Value) -> String {
    let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).expect("encode payload"));
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", body)
}

#[test]
fn decodes_admin_flag_expiry_and_subject() {
    let token = token_with(serde_json::json!({
        "username": "abebe",
        "userid": 7,
        "is_admin": true,
        "exp": 1_900_000_000
    }));
    let claims = DecodedTokenClaims::decode(&token).expect("decode");
    assert!(claims.is_admin);
    assert_eq!(claims.expiry, Some(1_900_000_000));
    assert_eq!(claims.subject.as_deref(), Some("7"));
    assert!(claims.expires_at().is_some());
}

#[test]
fn tinyint_admin_flags_follow_truthiness() {
    let admin = token_with(serde_json::json!({ "is_admin": 1 }));
    let user = token_with(serde_json::json!({ "is_admin": 0 }));
    assert!(DecodedTokenClaims::decode(&admin).expect("admin").is_admin);
    assert!(!DecodedTokenClaims::decode(&user).expect("user").is_admin);
}

#[test]
fn missing_admin_claim_means_not_admin() {
    let token = token_with(serde_json::json!({ "sub": "u-1" }));
    let claims = DecodedTokenClaims::decode(&token).expect("decode");
    assert!(!claims.is_admin);
    assert_eq!(claims.subject.as_deref(), Some("u-1"));
    assert_eq!(claims.expiry, None);
}

#[test]
fn opaque_tokens_fail_to_decode() {
    assert!(matches!(
        DecodedTokenClaims::decode("not-a-jwt"),
        Err(ClaimsError::Malformed)
    ));
    assert!(matches!(
        DecodedTokenClaims::decode("a.%%%.c"),
        Err(ClaimsError::Encoding(_))
    ));
    let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode(b"plain text"));
    assert!(matches!(
        DecodedTokenClaims::decode(&not_json),
        Err(ClaimsError::Json(_))
    ));
    let array = format!("a.{}.c", URL_SAFE_NO_PAD.encode(b"[1,2]"));
    assert!(matches!(
        DecodedTokenClaims::decode(&array),
        Err(ClaimsError::NotAnObject)
    ));
}

#[test]
fn camel_case_admin_claim_is_ignored() {
    let token = token_with(serde_json::json!({ "isAdmin": true }));
    assert!(!DecodedTokenClaims::decode(&token).expect("decode").is_admin);
}
