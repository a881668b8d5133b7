use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, customer_id, chef_id, event_date, event_time, party_size,
                                   event_address, special_requests, dietary_json, menu_json,
                                   subtotal, service_fee, processing_fee, total_amount, status,
                                   payment_intent_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.customer_id).bind(&booking.chef_id)
            .bind(booking.event_date).bind(booking.event_time).bind(booking.party_size)
            .bind(&booking.event_address).bind(&booking.special_requests)
            .bind(&booking.dietary_json).bind(&booking.menu_json)
            .bind(booking.subtotal).bind(booking.service_fee).bind(booking.processing_fee)
            .bind(booking.total_amount).bind(&booking.status)
            .bind(&booking.payment_intent_id).bind(booking.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_payment_intent(&self, intent_id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE payment_intent_id = $1")
            .bind(intent_id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn booked_times(&self, chef_id: &str, date: NaiveDate) -> Result<Vec<NaiveTime>, AppError> {
        sqlx::query_scalar::<_, NaiveTime>(
            "SELECT event_time FROM bookings
             WHERE chef_id = $1 AND event_date = $2 AND status IN ('pending', 'confirmed')
             ORDER BY event_time ASC"
        )
            .bind(chef_id).bind(date)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_customer(&self, customer_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE customer_id = $1 ORDER BY event_date ASC, event_time ASC"
        )
            .bind(customer_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_chef(&self, chef_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE chef_id = $1 ORDER BY event_date ASC, event_time ASC"
        )
            .bind(chef_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = $1 WHERE id = $2 RETURNING *")
            .bind(status).bind(id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn set_payment_intent(&self, id: &str, intent_id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE bookings SET payment_intent_id = $1 WHERE id = $2")
            .bind(intent_id).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn has_completed_booking(&self, customer_id: &str, chef_id: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE customer_id = $1 AND chef_id = $2 AND status = 'completed'"
        )
            .bind(customer_id).bind(chef_id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(count > 0)
    }
}
