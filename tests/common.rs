use chef_platform::{
    api::router::create_router,
    config::Config,
    domain::ports::{PaymentIntent, PaymentService},
    domain::services::auth_service::AuthService,
    error::AppError,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_chat_repo::SqliteChatRepo,
        sqlite_chef_repo::SqliteChefRepo,
        sqlite_customer_repo::SqliteCustomerRepo,
        sqlite_post_repo::SqlitePostRepo,
        sqlite_review_repo::SqliteReviewRepo,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

/// Stand-in card processor. The reported intent status is adjustable so
/// tests can cover both successful and failed payments.
pub struct MockPaymentService {
    pub status: Mutex<String>,
}

impl MockPaymentService {
    pub fn new() -> Self {
        Self { status: Mutex::new("succeeded".to_string()) }
    }

    pub fn set_status(&self, status: &str) {
        *self.status.lock().unwrap() = status.to_string();
    }
}

#[async_trait]
impl PaymentService for MockPaymentService {
    async fn create_intent(&self, _amount_cents: i64, _currency: &str, booking_id: &str) -> Result<PaymentIntent, AppError> {
        Ok(PaymentIntent {
            id: format!("pi_test_{booking_id}"),
            client_secret: Some("cs_test_secret".to_string()),
            status: "requires_payment_method".to_string(),
        })
    }

    async fn retrieve_intent(&self, intent_id: &str) -> Result<PaymentIntent, AppError> {
        Ok(PaymentIntent {
            id: intent_id.to_string(),
            client_secret: None,
            status: self.status.lock().unwrap().clone(),
        })
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub payment_service: Arc<MockPaymentService>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            jwt_secret: "test-secret".to_string(),
            jwt_expiry_days: 7,
            stripe_api_url: "http://localhost".to_string(),
            stripe_secret_key: "sk_test".to_string(),
            currency: "zar".to_string(),
            service_fee_pct: 5.0,
            processing_fee_pct: 3.0,
            public_holidays: vec![NaiveDate::from_ymd_opt(2030, 12, 25).unwrap()],
        };

        let auth_service = Arc::new(AuthService::new(&config));
        let payment_service = Arc::new(MockPaymentService::new());

        let state = Arc::new(AppState {
            config,
            customer_repo: Arc::new(SqliteCustomerRepo::new(pool.clone())),
            chef_repo: Arc::new(SqliteChefRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            review_repo: Arc::new(SqliteReviewRepo::new(pool.clone())),
            chat_repo: Arc::new(SqliteChatRepo::new(pool.clone())),
            post_repo: Arc::new(SqlitePostRepo::new(pool.clone())),
            auth_service,
            payment_service: payment_service.clone(),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            payment_service,
        }
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router.clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        let mut builder = Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router.clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router.clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.router.clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    /// Registers a customer and returns (token, customer_id).
    pub async fn register_customer(&self, email: &str) -> (String, String) {
        let response = self.post("/api/v1/auth/customers/register", None, serde_json::json!({
            "email": email,
            "password": "Str0ng!pass",
            "first_name": "Lindiwe",
            "last_name": "Mokoena",
            "phone": "+27821234567"
        })).await;
        assert!(response.status().is_success(), "customer registration failed: {}", response.status());
        let body = parse_body(response).await;
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    /// Registers a chef and returns (token, chef_id). The chef starts
    /// unverified.
    pub async fn register_chef(&self, email: &str, base_rate: f64) -> (String, String) {
        let response = self.post("/api/v1/auth/chefs/register", None, serde_json::json!({
            "email": email,
            "password": "Str0ng!pass",
            "first_name": "Sipho",
            "last_name": "Dlamini",
            "phone": "+27831234567",
            "bio": "Classically trained private chef specialising in Cape Malay cuisine and seasonal tasting menus.",
            "base_rate": base_rate,
            "regions_served": ["Cape Town"],
            "dietary_specialties": ["Halal", "Vegetarian"]
        })).await;
        assert!(response.status().is_success(), "chef registration failed: {}", response.status());
        let body = parse_body(response).await;
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    /// Verification is an out-of-band admin step, so tests flip the flag
    /// directly.
    pub async fn verify_chef(&self, chef_id: &str) {
        sqlx::query("UPDATE chefs SET is_verified = 1 WHERE id = ?")
            .bind(chef_id)
            .execute(&self.pool)
            .await
            .expect("Failed to verify chef");
    }

    /// Registers and verifies a chef in one step.
    pub async fn verified_chef(&self, email: &str, base_rate: f64) -> (String, String) {
        let (token, chef_id) = self.register_chef(email, base_rate).await;
        self.verify_chef(&chef_id).await;
        (token, chef_id)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}
