use crate::domain::{models::chef::Chef, ports::{ChefFilter, ChefRepository}};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresChefRepo {
    pool: PgPool,
}

impl PostgresChefRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChefRepository for PostgresChefRepo {
    async fn create(&self, chef: &Chef) -> Result<Chef, AppError> {
        sqlx::query_as::<_, Chef>(
            "INSERT INTO chefs (id, email, password_hash, first_name, last_name, phone, bio, base_rate,
                                holiday_rate_multiplier, regions_json, dietary_json, years_experience,
                                culinary_training, certifications_json, profile_image, average_rating,
                                total_reviews, is_active, is_verified, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
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
        sqlx::query_as::<_, Chef>("SELECT * FROM chefs WHERE email = $1")
            .bind(email).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Chef>, AppError> {
        sqlx::query_as::<_, Chef>("SELECT * FROM chefs WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, filter: &ChefFilter) -> Result<Vec<Chef>, AppError> {
        let region_pattern = filter.region.as_ref().map(|r| format!("%\"{}\"%", r));
        let specialty_pattern = filter.specialty.as_ref().map(|s| format!("%\"{}\"%", s));

        sqlx::query_as::<_, Chef>(
            "SELECT * FROM chefs
             WHERE is_active = TRUE AND is_verified = TRUE
               AND ($1::text IS NULL OR regions_json LIKE $1)
               AND ($2::text IS NULL OR dietary_json LIKE $2)
               AND ($3::float8 IS NULL OR base_rate >= $3)
               AND ($4::float8 IS NULL OR base_rate <= $4)
             ORDER BY created_at DESC
             LIMIT $5 OFFSET $6"
        )
            .bind(&region_pattern)
            .bind(&specialty_pattern)
            .bind(filter.min_rate)
            .bind(filter.max_rate)
            .bind(filter.limit).bind(filter.offset)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, chef: &Chef) -> Result<Chef, AppError> {
        sqlx::query_as::<_, Chef>(
            "UPDATE chefs SET bio=$1, base_rate=$2, holiday_rate_multiplier=$3, regions_json=$4,
                              dietary_json=$5, years_experience=$6, culinary_training=$7,
                              certifications_json=$8, profile_image=$9
             WHERE id=$10
             RETURNING *"
        )
            .bind(&chef.bio).bind(chef.base_rate).bind(chef.holiday_rate_multiplier)
            .bind(&chef.regions_json).bind(&chef.dietary_json).bind(chef.years_experience)
            .bind(&chef.culinary_training).bind(&chef.certifications_json).bind(&chef.profile_image)
            .bind(&chef.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn update_rating(&self, chef_id: &str, average_rating: f64, total_reviews: i32) -> Result<(), AppError> {
        sqlx::query("UPDATE chefs SET average_rating = $1, total_reviews = $2 WHERE id = $3")
            .bind(average_rating).bind(total_reviews).bind(chef_id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
