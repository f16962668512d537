// Access-token issuing and verification.
// Tokens carry the user and their tenant, the pair every scoped
// handler needs.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject).
    pub sub: Uuid,
    /// Company the user belongs to.
    pub org: Uuid,
    /// Expiry (seconds since epoch).
    pub exp: usize,
}

/// Issues a 24-hour HS256 access token for a user within a company.
///
/// # Example
/// ```
/// use crowsnest_api::auth::jwt::{decode_token, issue_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let company_id = Uuid::new_v4();
/// let token = issue_token(user_id, company_id, "secret").expect("token");
///
/// let claims = decode_token(&token, "secret").expect("valid token");
/// assert_eq!(claims.sub, user_id);
/// assert_eq!(claims.org, company_id);
/// ```
pub fn issue_token(user_id: Uuid, company_id: Uuid, secret: &str) -> Result<String, String> {
    let expiry = Utc::now() + Duration::hours(24);
    let claims = Claims {
        sub: user_id,
        org: company_id,
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| format!("failed to sign token: {e}"))
}

/// Decodes and validates an access token, including expiry.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| format!("invalid token: {e}"))
}

/// Signing secret from the environment, with a development fallback.
pub fn secret_from_env() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development secret");
        "crowsnest-dev-secret".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn round_trip_preserves_both_identifiers() {
        let user_id = Uuid::new_v4();
        let company_id = Uuid::new_v4();

        let token = issue_token(user_id, company_id, SECRET).expect("token");
        let claims = decode_token(&token, SECRET).expect("valid token");

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.org, company_id);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), Uuid::new_v4(), SECRET).expect("token");
        assert!(decode_token(&token, "someone-elses-secret").is_err());
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(decode_token("not.a.token", SECRET).is_err());
    }

    #[test]
    fn expiry_is_about_a_day_out() {
        let token = issue_token(Uuid::new_v4(), Uuid::new_v4(), SECRET).expect("token");
        let claims = decode_token(&token, SECRET).expect("valid token");

        let now = Utc::now().timestamp() as usize;
        let day = 24 * 60 * 60;
        assert!(claims.exp > now);
        assert!(claims.exp <= now + day + 10);
    }
}
