use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims stored in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique token identifier — prevents collisions when multiple tokens
    /// are issued for the same user within the same second.
    pub jti: String,
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").expect("JWT_SECRET must be set")
}

pub fn session_expiry_minutes() -> i64 {
    std::env::var("JWT_SESSION_EXPIRY_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(720)
}

pub fn create_session_token(
    user_id: i64,
    email: &str,
    role: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(session_expiry_minutes())).timestamp(),
        jti: uuid::Uuid::new_v4().to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

pub fn validate_session_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_secret() {
        std::env::set_var("JWT_SECRET", "test-secret-key-for-jwt-unit-tests");
    }

    #[test]
    fn create_and_validate_session_token() {
        setup_test_secret();
        let token = create_session_token(42, "guardian@example.com", "parent").unwrap();
        let claims = validate_session_token(&token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.email, "guardian@example.com");
        assert_eq!(claims.role, "parent");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_rejected() {
        setup_test_secret();
        let now = Utc::now();
        let claims = Claims {
            sub: 1,
            email: "expired@test.com".to_string(),
            role: "teacher".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt_secret().as_bytes()),
        )
        .unwrap();

        assert!(validate_session_token(&token).is_err());
    }

    #[test]
    fn invalid_token_rejected() {
        setup_test_secret();
        assert!(validate_session_token("not.a.valid.jwt").is_err());
        assert!(validate_session_token("").is_err());
    }

    #[test]
    fn tokens_issued_together_have_distinct_ids() {
        setup_test_secret();
        let a = create_session_token(7, "a@b.com", "driver").unwrap();
        let b = create_session_token(7, "a@b.com", "driver").unwrap();
        let ca = validate_session_token(&a).unwrap();
        let cb = validate_session_token(&b).unwrap();
        assert_ne!(ca.jti, cb.jti);
    }
}
