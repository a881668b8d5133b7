use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Chat {
    pub id: String,
    pub booking_id: String,
    pub customer_id: String,
    pub chef_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chat {
    pub fn new(booking_id: String, customer_id: String, chef_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            booking_id,
            customer_id,
            chef_id,
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_participant(&self, user_id: &str) -> bool {
        self.customer_id == user_id || self.chef_id == user_id
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub sender_role: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(chat_id: String, sender_id: String, sender_role: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chat_id,
            sender_id,
            sender_role,
            content,
            created_at: Utc::now(),
        }
    }
}
