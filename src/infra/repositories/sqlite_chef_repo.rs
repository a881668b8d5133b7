use crate::domain::{models::chef::Chef, ports::{ChefFilter, ChefRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteChefRepo {
    pool: SqlitePool,
}

impl SqliteChefRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChefRepository for SqliteChefRepo {
    async fn create(&self, chef: &Chef) -> Result<Chef, AppError> {
        sqlx::query_as::<_, Chef>(
            "INSERT INTO chefs (id, email, password_hash, first_name, last_name, phone, bio, base_rate,
                                holiday_rate_multiplier, regions_json, dietary_json, years_experience,
                                culinary_training, certifications_json, profile_image, average_rating,
                                total_reviews, is_active, is_verified, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&chef.id).bind(&chef.email).bind(&chef.password_hash)
            .bind(&chef.first_name).bind(&chef.last_name).bind(&chef.phone)
            .bind(&chef.bio).bind(chef.base_rate).bind(chef.holiday_rate_multiplier)
            .bind(&chef.regions_json).bind(&chef.dietary_json).bind(chef.years_experience)
            .bind(&chef.culinary_training).bind(&chef.certifications_json).bind(&chef.profile_image)
            .bind(chef.average_rating).bind(chef.total_reviews)
            .bind(chef.is_active).bind(chef.is_verified).bind(chef.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Chef>, AppError> {
        sqlx::query_as::<_, Chef>("SELECT * FROM chefs WHERE email = ?")
            .bind(email).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Chef>, AppError> {
        sqlx::query_as::<_, Chef>("SELECT * FROM chefs WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filter: &ChefFilter) -> Result<Vec<Chef>, AppError> {
        // JSON array columns are matched with a quoted LIKE pattern.
        let region_pattern = filter.region.as_ref().map(|r| format!("%\"{}\"%", r));
        let specialty_pattern = filter.specialty.as_ref().map(|s| format!("%\"{}\"%", s));

        sqlx::query_as::<_, Chef>(
            "SELECT * FROM chefs
             WHERE is_active = 1 AND is_verified = 1
               AND (? IS NULL OR regions_json LIKE ?)
               AND (? IS NULL OR dietary_json LIKE ?)
               AND (? IS NULL OR base_rate >= ?)
               AND (? IS NULL OR base_rate <= ?)
             ORDER BY created_at DESC
             LIMIT ? OFFSET ?"
        )
            .bind(&region_pattern).bind(&region_pattern)
            .bind(&specialty_pattern).bind(&specialty_pattern)
            .bind(filter.min_rate).bind(filter.min_rate)
            .bind(filter.max_rate).bind(filter.max_rate)
            .bind(filter.limit).bind(filter.offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, chef: &Chef) -> Result<Chef, AppError> {
        sqlx::query_as::<_, Chef>(
            "UPDATE chefs SET bio=?, base_rate=?, holiday_rate_multiplier=?, regions_json=?,
                              dietary_json=?, years_experience=?, culinary_training=?,
                              certifications_json=?, profile_image=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&chef.bio).bind(chef.base_rate).bind(chef.holiday_rate_multiplier)
            .bind(&chef.regions_json).bind(&chef.dietary_json).bind(chef.years_experience)
            .bind(&chef.culinary_training).bind(&chef.certifications_json).bind(&chef.profile_image)
            .bind(&chef.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn update_rating(&self, chef_id: &str, average_rating: f64, total_reviews: i32) -> Result<(), AppError> {
        sqlx::query("UPDATE chefs SET average_rating = ?, total_reviews = ? WHERE id = ?")
            .bind(average_rating).bind(total_reviews).bind(chef_id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
