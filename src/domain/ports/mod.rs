use crate::domain::models::{
    booking::Booking,
    chat::{Chat, ChatMessage},
    chef::Chef,
    customer::Customer,
    post::ChefPost,
    review::Review,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create(&self, customer: &Customer) -> Result<Customer, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>, AppError>;
}

#[derive(Debug, Default, Clone)]
pub struct ChefFilter {
    pub region: Option<String>,
    pub specialty: Option<String>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait ChefRepository: Send + Sync {
    async fn create(&self, chef: &Chef) -> Result<Chef, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Chef>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Chef>, AppError>;
    /// Active, verified chefs matching the filter, newest first.
    async fn list(&self, filter: &ChefFilter) -> Result<Vec<Chef>, AppError>;
    async fn update(&self, chef: &Chef) -> Result<Chef, AppError>;
    async fn update_rating(&self, chef_id: &str, average_rating: f64, total_reviews: i32) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn find_by_payment_intent(&self, intent_id: &str) -> Result<Option<Booking>, AppError>;
    /// Times already taken for a chef on a date (status pending or confirmed).
    async fn booked_times(&self, chef_id: &str, date: NaiveDate) -> Result<Vec<NaiveTime>, AppError>;
    async fn list_by_customer(&self, customer_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_by_chef(&self, chef_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<Booking, AppError>;
    async fn set_payment_intent(&self, id: &str, intent_id: &str) -> Result<(), AppError>;
    async fn has_completed_booking(&self, customer_id: &str, chef_id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn find_by_customer_and_chef(&self, customer_id: &str, chef_id: &str) -> Result<Option<Review>, AppError>;
    async fn list_by_chef(&self, chef_id: &str, limit: i64, offset: i64) -> Result<Vec<Review>, AppError>;
    async fn ratings_for_chef(&self, chef_id: &str) -> Result<Vec<i32>, AppError>;
}

#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn create(&self, chat: &Chat) -> Result<Chat, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Chat>, AppError>;
    /// Chats where the user is either party, most recently updated first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Chat>, AppError>;
    async fn add_message(&self, message: &ChatMessage) -> Result<ChatMessage, AppError>;
    async fn list_messages(&self, chat_id: &str) -> Result<Vec<ChatMessage>, AppError>;
}

#[async_trait]
pub trait ChefPostRepository: Send + Sync {
    async fn create(&self, post: &ChefPost) -> Result<ChefPost, AppError>;
    async fn list_by_chef(&self, chef_id: &str) -> Result<Vec<ChefPost>, AppError>;
    async fn delete(&self, chef_id: &str, post_id: &str) -> Result<(), AppError>;
    async fn count_by_chef(&self, chef_id: &str) -> Result<i64, AppError>;
    async fn likes_total(&self, chef_id: &str) -> Result<i64, AppError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: Option<String>,
    pub status: String,
}

/// The card-processor collaborator. Amounts are in the smallest currency
/// unit (cents).
#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn create_intent(&self, amount_cents: i64, currency: &str, booking_id: &str) -> Result<PaymentIntent, AppError>;
    async fn retrieve_intent(&self, intent_id: &str) -> Result<PaymentIntent, AppError>;
}
