use crate::domain::models::{booking::Booking, chef::Chef, post::ChefPost};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub customer_id: String,
    pub chef_id: String,
    pub event_date: String,
    pub event_time: String,
    pub party_size: i32,
    pub event_address: String,
    pub special_requests: Option<String>,
    pub dietary_requirements: Vec<String>,
    pub menu_preferences: Vec<String>,
    pub subtotal: f64,
    pub service_fee: f64,
    pub processing_fee: f64,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            customer_id: b.customer_id,
            chef_id: b.chef_id,
            event_date: b.event_date.format("%Y-%m-%d").to_string(),
            event_time: b.event_time.format("%H:%M").to_string(),
            party_size: b.party_size,
            event_address: b.event_address,
            special_requests: b.special_requests,
            dietary_requirements: serde_json::from_str(&b.dietary_json).unwrap_or_default(),
            menu_preferences: serde_json::from_str(&b.menu_json).unwrap_or_default(),
            subtotal: b.subtotal,
            service_fee: b.service_fee,
            processing_fee: b.processing_fee,
            total_amount: b.total_amount,
            status: b.status,
            created_at: b.created_at,
        }
    }
}

/// Public chef profile. Ratings are withheld for chefs with few reviews.
#[derive(Serialize)]
pub struct ChefProfileResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub base_rate: f64,
    pub holiday_rate_multiplier: f64,
    pub regions_served: Vec<String>,
    pub dietary_specialties: Vec<String>,
    pub years_experience: i32,
    pub culinary_training: Option<String>,
    pub certifications: Vec<String>,
    pub profile_image: Option<String>,
    pub average_rating: Option<f64>,
    pub display_rating: bool,
    pub total_reviews: i32,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Chef> for ChefProfileResponse {
    fn from(c: Chef) -> Self {
        let average_rating = c.display_rating();
        Self {
            id: c.id.clone(),
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            bio: c.bio.clone(),
            base_rate: c.base_rate,
            holiday_rate_multiplier: c.holiday_rate_multiplier,
            regions_served: c.regions(),
            dietary_specialties: c.dietary_specialties(),
            years_experience: c.years_experience,
            culinary_training: c.culinary_training.clone(),
            certifications: c.certifications(),
            profile_image: c.profile_image.clone(),
            display_rating: average_rating.is_some(),
            average_rating,
            total_reviews: c.total_reviews,
            is_verified: c.is_verified,
            created_at: c.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ChefListResponse {
    pub chefs: Vec<ChefProfileResponse>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub date: String,
    pub available_times: Vec<String>,
}

#[derive(Serialize)]
pub struct PaymentIntentResponse {
    pub payment_intent_id: String,
    pub client_secret: Option<String>,
}

#[derive(Serialize)]
pub struct ChefStatsResponse {
    pub total_bookings: i64,
    pub upcoming_bookings: i64,
    pub completed_bookings: i64,
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub total_reviews: i64,
    pub average_rating: f64,
    pub total_posts: i64,
    pub total_likes: i64,
}

#[derive(Serialize)]
pub struct PostResponse {
    pub id: String,
    pub chef_id: String,
    pub content: String,
    pub images: Vec<String>,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub likes_count: i32,
    pub comments_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<ChefPost> for PostResponse {
    fn from(p: ChefPost) -> Self {
        Self {
            id: p.id.clone(),
            chef_id: p.chef_id.clone(),
            content: p.content.clone(),
            images: p.images(),
            location: p.location.clone(),
            tags: p.tags(),
            likes_count: p.likes_count,
            comments_count: p.comments_count,
            created_at: p.created_at,
        }
    }
}
