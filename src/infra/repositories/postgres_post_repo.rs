use crate::domain::{models::post::ChefPost, ports::ChefPostRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPostRepo {
    pool: PgPool,
}

impl PostgresPostRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChefPostRepository for PostgresPostRepo {
    async fn create(&self, post: &ChefPost) -> Result<ChefPost, AppError> {
        sqlx::query_as::<_, ChefPost>(
            "INSERT INTO chef_posts (id, chef_id, content, images_json, location, tags_json,
                                     likes_count, comments_count, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *"
        )
            .bind(&post.id).bind(&post.chef_id).bind(&post.content)
            .bind(&post.images_json).bind(&post.location).bind(&post.tags_json)
            .bind(post.likes_count).bind(post.comments_count).bind(post.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_chef(&self, chef_id: &str) -> Result<Vec<ChefPost>, AppError> {
        sqlx::query_as::<_, ChefPost>(
            "SELECT * FROM chef_posts WHERE chef_id = $1 ORDER BY created_at DESC"
        )
            .bind(chef_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, chef_id: &str, post_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM chef_posts WHERE id = $1 AND chef_id = $2")
            .bind(post_id).bind(chef_id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Post not found".into()));
        }
        Ok(())
    }

    async fn count_by_chef(&self, chef_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM chef_posts WHERE chef_id = $1")
            .bind(chef_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn likes_total(&self, chef_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COALESCE(SUM(likes_count), 0) FROM chef_posts WHERE chef_id = $1")
            .bind(chef_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
}
