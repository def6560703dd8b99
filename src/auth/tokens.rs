/**
 * Access Token Issuance
 *
 * This module issues HS256-signed JWT access tokens for user sessions.
 * The issuer copies the caller's claims, stamps an expiration, and signs
 * with the server secret. There is no verification operation here; the
 * consuming service verifies tokens on its own side.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{Map, Value};

use crate::config::Settings;
use crate::error::AuthError;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Claim map carried by an access token
///
/// Claims are an open mapping of names to JSON values. The issuer adds
/// `exp` on top of whatever the caller supplies.
pub type Claims = Map<String, Value>;

/// Issues signed access tokens with a server-held secret
///
/// Built once at startup by the composition root, either from a raw
/// secret or from the `JWT_SECRET` environment variable. Construction
/// fails when the secret is missing, so an issuer that exists can
/// always sign.
pub struct TokenIssuer {
    key: EncodingKey,
}

impl TokenIssuer {
    /// Create an issuer from a raw secret
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Create an issuer from the `JWT_SECRET` environment variable
    ///
    /// # Errors
    /// `AuthError::MissingSecret` if `JWT_SECRET` is unset or empty.
    pub fn from_env() -> Result<Self, AuthError> {
        match Settings::from_env().jwt_secret {
            Some(secret) => Ok(Self::new(secret)),
            None => {
                tracing::error!("JWT_SECRET is not set, refusing to issue tokens");
                Err(AuthError::MissingSecret)
            }
        }
    }

    /// Issue a token with the default 7-day expiration
    ///
    /// # Arguments
    /// * `claims` - Claims to embed, e.g. user id and email
    ///
    /// # Returns
    /// Compact `header.payload.signature` token string
    pub fn issue(&self, claims: &Claims) -> Result<String, AuthError> {
        self.issue_with_ttl(claims, Duration::days(DEFAULT_TOKEN_TTL_DAYS))
    }

    /// Issue a token expiring after `ttl`
    ///
    /// The caller's claim map is copied, never mutated. An `exp` claim
    /// is injected as Unix seconds (UTC), replacing any caller-supplied
    /// value. A zero `ttl` produces a token that is already expired when
    /// it is returned.
    ///
    /// # Errors
    /// `AuthError::TokenEncoding` if the claim set cannot be serialized
    /// or signed.
    pub fn issue_with_ttl(&self, claims: &Claims, ttl: Duration) -> Result<String, AuthError> {
        let mut to_encode = claims.clone();
        let exp = (Utc::now() + ttl).timestamp();
        to_encode.insert("exp".to_string(), Value::from(exp));

        Ok(encode(&Header::default(), &to_encode, &self.key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};
    use serial_test::serial;

    const SECRET: &str = "test-secret";

    fn claims_for(sub: &str) -> Claims {
        let mut claims = Claims::new();
        claims.insert("sub".to_string(), Value::from(sub));
        claims
    }

    fn decode_claims(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        // Expired tokens still need to decode so their exp can be inspected
        let mut validation = Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation)
            .map(|data| data.claims)
    }

    #[test]
    fn test_issue_token() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.issue(&claims_for("u1")).unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_claims_round_trip_with_exp() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.issue(&claims_for("u1")).unwrap();

        let decoded = decode_claims(&token, SECRET).unwrap();
        assert_eq!(decoded["sub"], Value::from("u1"));

        let exp = decoded["exp"].as_i64().unwrap();
        let expected = (Utc::now() + Duration::days(DEFAULT_TOKEN_TTL_DAYS)).timestamp();
        assert!((exp - expected).abs() <= 5, "exp {} not near {}", exp, expected);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer.issue(&claims_for("u1")).unwrap();
        assert!(decode_claims(&token, "other-secret").is_err());
    }

    #[test]
    fn test_zero_ttl_is_expired_at_issuance() {
        let issuer = TokenIssuer::new(SECRET);
        let token = issuer
            .issue_with_ttl(&claims_for("u1"), Duration::zero())
            .unwrap();

        let decoded = decode_claims(&token, SECRET).unwrap();
        let exp = decoded["exp"].as_i64().unwrap();
        assert!(exp <= Utc::now().timestamp());
    }

    #[test]
    fn test_caller_claims_not_mutated() {
        let issuer = TokenIssuer::new(SECRET);
        let claims = claims_for("u1");
        issuer.issue(&claims).unwrap();
        assert!(!claims.contains_key("exp"));
    }

    #[test]
    fn test_caller_exp_is_overwritten() {
        let issuer = TokenIssuer::new(SECRET);
        let mut claims = claims_for("u1");
        claims.insert("exp".to_string(), Value::from(0));

        let token = issuer.issue(&claims).unwrap();
        let decoded = decode_claims(&token, SECRET).unwrap();
        assert!(decoded["exp"].as_i64().unwrap() > 0);
    }

    #[test]
    #[serial]
    fn test_from_env_requires_secret() {
        std::env::remove_var("JWT_SECRET");
        assert!(matches!(
            TokenIssuer::from_env(),
            Err(AuthError::MissingSecret)
        ));

        std::env::set_var("JWT_SECRET", SECRET);
        assert!(TokenIssuer::from_env().is_ok());
        std::env::remove_var("JWT_SECRET");
    }
}
