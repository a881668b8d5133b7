use crate::domain::{models::chat::{Chat, ChatMessage}, ports::ChatRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresChatRepo {
    pool: PgPool,
}

impl PostgresChatRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PostgresChatRepo {
    async fn create(&self, chat: &Chat) -> Result<Chat, AppError> {
        sqlx::query_as::<_, Chat>(
            "INSERT INTO chats (id, booking_id, customer_id, chef_id, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&chat.id).bind(&chat.booking_id).bind(&chat.customer_id).bind(&chat.chef_id)
            .bind(&chat.status).bind(chat.created_at).bind(chat.updated_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Chat>, AppError> {
        sqlx::query_as::<_, Chat>("SELECT * FROM chats WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Chat>, AppError> {
        sqlx::query_as::<_, Chat>(
            "SELECT * FROM chats WHERE customer_id = $1 OR chef_id = $1 ORDER BY updated_at DESC"
        )
            .bind(user_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn add_message(&self, message: &ChatMessage) -> Result<ChatMessage, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let created = sqlx::query_as::<_, ChatMessage>(
            "INSERT INTO messages (id, chat_id, sender_id, sender_role, content, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *"
        )
            .bind(&message.id).bind(&message.chat_id).bind(&message.sender_id)
            .bind(&message.sender_role).bind(&message.content).bind(message.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        sqlx::query("UPDATE chats SET updated_at = $1 WHERE id = $2")
            .bind(Utc::now()).bind(&message.chat_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn list_messages(&self, chat_id: &str) -> Result<Vec<ChatMessage>, AppError> {
        sqlx::query_as::<_, ChatMessage>(
            "SELECT * FROM messages WHERE chat_id = $1 ORDER BY created_at ASC"
        )
            .bind(chat_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
