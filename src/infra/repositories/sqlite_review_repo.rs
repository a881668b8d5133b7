use crate::domain::{models::review::Review, ports::ReviewRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteReviewRepo {
    pool: SqlitePool,
}

impl SqliteReviewRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepo {
    async fn create(&self, review: &Review) -> Result<Review, AppError> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, customer_id, chef_id, rating, comment, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&review.id).bind(&review.customer_id).bind(&review.chef_id)
            .bind(review.rating).bind(&review.comment).bind(review.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_customer_and_chef(&self, customer_id: &str, chef_id: &str) -> Result<Option<Review>, AppError> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE customer_id = ? AND chef_id = ?")
            .bind(customer_id).bind(chef_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_chef(&self, chef_id: &str, limit: i64, offset: i64) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE chef_id = ? ORDER BY created_at DESC LIMIT ? OFFSET ?"
        )
            .bind(chef_id).bind(limit).bind(offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn ratings_for_chef(&self, chef_id: &str) -> Result<Vec<i32>, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT rating FROM reviews WHERE chef_id = ?")
            .bind(chef_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
