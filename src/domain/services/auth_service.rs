use crate::config::Config;
use crate::domain::models::auth::{Claims, UserRole};
use crate::error::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// Issues bearer tokens for authenticated users. Verification lives in the
/// request extractor; this service only signs.
pub struct AuthService {
    encoding_key: EncodingKey,
    expiry_days: i64,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiry_days: config.jwt_expiry_days,
        }
    }

    pub fn issue_token(&self, user_id: &str, email: &str, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: now.timestamp() as usize,
            exp: (now + Duration::days(self.expiry_days)).timestamp() as usize,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::Internal
        })
    }
}

/// Password policy: at least 8 characters with lower case, upper case,
/// a digit and a symbol.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    let long_enough = password.len() >= 8;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && has_lower && has_upper && has_digit && has_symbol {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Password must be at least 8 characters and contain upper case, lower case, a digit and a symbol".into(),
        ))
    }
}
