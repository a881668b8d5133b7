use chrono::NaiveDate;
use std::env;

/// Default public holiday calendar (South Africa). Overridable via the
/// PUBLIC_HOLIDAYS environment variable as a comma-separated YYYY-MM-DD list.
const DEFAULT_PUBLIC_HOLIDAYS: &[&str] = &[
    "2025-01-01", "2025-03-21", "2025-04-18", "2025-04-21",
    "2025-04-28", "2025-05-01", "2025-06-16", "2025-08-09",
    "2025-09-24", "2025-12-16", "2025-12-25", "2025-12-26",
];

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiry_days: i64,
    pub stripe_api_url: String,
    pub stripe_secret_key: String,
    pub currency: String,
    pub service_fee_pct: f64,
    pub processing_fee_pct: f64,
    pub public_holidays: Vec<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiry_days: env::var("JWT_EXPIRY_DAYS").unwrap_or_else(|_| "7".to_string()).parse().expect("JWT_EXPIRY_DAYS must be a number"),
            stripe_api_url: env::var("STRIPE_API_URL").unwrap_or_else(|_| "https://api.stripe.com/v1".to_string()),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY").unwrap_or_default(),
            currency: env::var("CURRENCY").unwrap_or_else(|_| "zar".to_string()),
            service_fee_pct: env::var("SERVICE_FEE_PERCENTAGE").unwrap_or_else(|_| "5".to_string()).parse().expect("SERVICE_FEE_PERCENTAGE must be a number"),
            processing_fee_pct: env::var("PAYMENT_PROCESSING_FEE_PERCENTAGE").unwrap_or_else(|_| "3".to_string()).parse().expect("PAYMENT_PROCESSING_FEE_PERCENTAGE must be a number"),
            public_holidays: parse_holidays(env::var("PUBLIC_HOLIDAYS").ok()),
        }
    }
}

fn parse_holidays(raw: Option<String>) -> Vec<NaiveDate> {
    let source = raw.unwrap_or_else(|| DEFAULT_PUBLIC_HOLIDAYS.join(","));
    source
        .split(',')
        .filter_map(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .collect()
}
