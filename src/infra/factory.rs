use std::str::FromStr;
use std::sync::Arc;
use sqlx::{postgres::PgPoolOptions, sqlite::{SqliteConnectOptions, SqlitePoolOptions}};
use tracing::info;

use crate::config::Config;
use crate::domain::services::auth_service::AuthService;
use crate::infra::payments::stripe_service::HttpStripeService;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_chat_repo::PostgresChatRepo,
    postgres_chef_repo::PostgresChefRepo, postgres_customer_repo::PostgresCustomerRepo,
    postgres_post_repo::PostgresPostRepo, postgres_review_repo::PostgresReviewRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_chat_repo::SqliteChatRepo,
    sqlite_chef_repo::SqliteChefRepo, sqlite_customer_repo::SqliteCustomerRepo,
    sqlite_post_repo::SqlitePostRepo, sqlite_review_repo::SqliteReviewRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let auth_service = Arc::new(AuthService::new(config));
    let payment_service = Arc::new(HttpStripeService::new(
        config.stripe_api_url.clone(),
        config.stripe_secret_key.clone(),
    ));

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .expect("Failed to connect to Postgres");

        sqlx::migrate!("./migrations/postgres")
            .run(&pool)
            .await
            .expect("Failed to run Postgres migrations");

        AppState {
            config: config.clone(),
            customer_repo: Arc::new(PostgresCustomerRepo::new(pool.clone())),
            chef_repo: Arc::new(PostgresChefRepo::new(pool.clone())),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            review_repo: Arc::new(PostgresReviewRepo::new(pool.clone())),
            chat_repo: Arc::new(PostgresChatRepo::new(pool.clone())),
            post_repo: Arc::new(PostgresPostRepo::new(pool)),
            auth_service,
            payment_service,
        }
    } else {
        info!("Initializing SQLite connection...");

        let options = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite URL")
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .expect("Failed to connect to SQLite");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to run SQLite migrations");

        AppState {
            config: config.clone(),
            customer_repo: Arc::new(SqliteCustomerRepo::new(pool.clone())),
            chef_repo: Arc::new(SqliteChefRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            review_repo: Arc::new(SqliteReviewRepo::new(pool.clone())),
            chat_repo: Arc::new(SqliteChatRepo::new(pool.clone())),
            post_repo: Arc::new(SqlitePostRepo::new(pool)),
            auth_service,
            payment_service,
        }
    }
}
