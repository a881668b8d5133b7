use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ChefPost {
    pub id: String,
    pub chef_id: String,
    pub content: String,
    /// JSON array of image URLs.
    pub images_json: String,
    pub location: Option<String>,
    /// JSON array of tags.
    pub tags_json: String,
    pub likes_count: i32,
    pub comments_count: i32,
    pub created_at: DateTime<Utc>,
}

impl ChefPost {
    pub fn new(chef_id: String, content: String, images: Vec<String>, location: Option<String>, tags: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            chef_id,
            content,
            images_json: serde_json::to_string(&images).unwrap_or_else(|_| "[]".into()),
            location,
            tags_json: serde_json::to_string(&tags).unwrap_or_else(|_| "[]".into()),
            likes_count: 0,
            comments_count: 0,
            created_at: Utc::now(),
        }
    }

    pub fn images(&self) -> Vec<String> {
        serde_json::from_str(&self.images_json).unwrap_or_default()
    }

    pub fn tags(&self) -> Vec<String> {
        serde_json::from_str(&self.tags_json).unwrap_or_default()
    }
}
