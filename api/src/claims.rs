//! Unverified decoding of the bearer credential's payload.
//!
//! The credential is a three-segment token whose middle segment is a
//! base64url-encoded JSON object. [`decode`] extracts the two claims the app
//! needs — the principal's id (`user_id`) and expiry (`exp`) — and nothing
//! else.
//!
//! This reader deliberately performs **no signature verification**: the
//! issuing server is the authority and the client has no key material. A
//! decoded claim proves only what the server put in the token, not that the
//! token is still honored. Expiry is exposed via [`Claims::expires_at`] for
//! the caller to evaluate; nothing here enforces it.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::error::ClaimsError;

/// Claims extracted from the credential payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Principal identifier (`user_id` claim).
    pub subject: String,
    /// Expiry as seconds since the epoch (`exp` claim).
    pub expires_at: i64,
}

impl Claims {
    /// Whether the credential is expired at `now` (seconds since epoch).
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

#[derive(Deserialize)]
struct RawClaims {
    user_id: Option<String>,
    exp: Option<i64>,
}

/// Decode the payload segment of `token` into [`Claims`].
pub fn decode(token: &str) -> Result<Claims, ClaimsError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(ClaimsError::Malformed(
            "expected three dot-separated segments",
        ));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| ClaimsError::Malformed("payload is not valid base64url"))?;

    let raw: RawClaims = serde_json::from_slice(&bytes)
        .map_err(|_| ClaimsError::Malformed("payload is not a JSON claims object"))?;

    let subject = raw
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or(ClaimsError::MissingClaim("user_id"))?;
    let expires_at = raw.exp.ok_or(ClaimsError::MissingClaim("exp"))?;

    Ok(Claims {
        subject,
        expires_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload),
            URL_SAFE_NO_PAD.encode("signature"),
        )
    }

    #[test]
    fn test_decode_extracts_subject_and_expiry() {
        let token = token_with_payload(r#"{"user_id":"42","exp":1767225600}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.subject, "42");
        assert_eq!(claims.expires_at, 1767225600);
    }

    #[test]
    fn test_decode_ignores_extra_claims() {
        let token =
            token_with_payload(r#"{"user_id":"7","exp":0,"iss":"atlas","scope":"profile"}"#);
        assert_eq!(decode(&token).unwrap().subject, "7");
    }

    #[test]
    fn test_wrong_segment_count_is_malformed() {
        assert!(matches!(
            decode("only.two"),
            Err(ClaimsError::Malformed(_))
        ));
        assert!(matches!(
            decode("a.b.c.d"),
            Err(ClaimsError::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_base64_is_malformed() {
        assert!(matches!(
            decode("header.$$$$.signature"),
            Err(ClaimsError::Malformed(_))
        ));
    }

    #[test]
    fn test_non_json_payload_is_malformed() {
        let token = format!(
            "h.{}.s",
            URL_SAFE_NO_PAD.encode("definitely not json")
        );
        assert!(matches!(decode(&token), Err(ClaimsError::Malformed(_))));
    }

    #[test]
    fn test_missing_user_id_is_missing_claim() {
        let token = token_with_payload(r#"{"exp":1767225600}"#);
        assert_eq!(decode(&token), Err(ClaimsError::MissingClaim("user_id")));
    }

    #[test]
    fn test_empty_user_id_is_missing_claim() {
        let token = token_with_payload(r#"{"user_id":"","exp":1767225600}"#);
        assert_eq!(decode(&token), Err(ClaimsError::MissingClaim("user_id")));
    }

    #[test]
    fn test_missing_exp_is_missing_claim() {
        let token = token_with_payload(r#"{"user_id":"42"}"#);
        assert_eq!(decode(&token), Err(ClaimsError::MissingClaim("exp")));
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            subject: "42".to_string(),
            expires_at: 100,
        };
        assert!(claims.is_expired(100));
        assert!(claims.is_expired(101));
        assert!(!claims.is_expired(99));
    }
}
