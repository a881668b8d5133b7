use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterCustomerRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Deserialize)]
pub struct RegisterChefRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub bio: String,
    pub base_rate: f64,
    pub regions_served: Vec<String>,
    pub dietary_specialties: Vec<String>,
    pub years_experience: Option<i32>,
    pub culinary_training: Option<String>,
    pub certifications: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub chef_id: String,
    /// YYYY-MM-DD
    pub event_date: String,
    /// HH:MM, 24h
    pub event_time: String,
    pub party_size: i32,
    pub event_address: String,
    pub special_requests: Option<String>,
    pub dietary_requirements: Option<Vec<String>>,
    pub menu_preferences: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}

#[derive(Deserialize)]
pub struct ChefListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub region: Option<String>,
    pub specialty: Option<String>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
}

#[derive(Deserialize)]
pub struct ChefSearchQuery {
    pub city: Option<String>,
    pub dietary_requirements: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateChefProfileRequest {
    pub bio: Option<String>,
    pub base_rate: Option<f64>,
    pub holiday_rate_multiplier: Option<f64>,
    pub regions_served: Option<Vec<String>>,
    pub dietary_specialties: Option<Vec<String>>,
    pub years_experience: Option<i32>,
    pub culinary_training: Option<String>,
    pub certifications: Option<Vec<String>>,
    pub profile_image: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateIntentRequest {
    pub booking_id: String,
}

#[derive(Deserialize)]
pub struct ConfirmPaymentRequest {
    pub payment_intent_id: String,
}

#[derive(Deserialize)]
pub struct CreateReviewRequest {
    pub chef_id: String,
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Deserialize)]
pub struct ReviewListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    pub images: Option<Vec<String>>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
}
