use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, ChatRepository, ChefPostRepository, ChefRepository,
    CustomerRepository, PaymentService, ReviewRepository,
};
use crate::domain::services::auth_service::AuthService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub customer_repo: Arc<dyn CustomerRepository>,
    pub chef_repo: Arc<dyn ChefRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub chat_repo: Arc<dyn ChatRepository>,
    pub post_repo: Arc<dyn ChefPostRepository>,
    pub auth_service: Arc<AuthService>,
    pub payment_service: Arc<dyn PaymentService>,
}
