pub mod postgres_booking_repo;
pub mod postgres_chat_repo;
pub mod postgres_chef_repo;
pub mod postgres_customer_repo;
pub mod postgres_post_repo;
pub mod postgres_review_repo;
pub mod sqlite_booking_repo;
pub mod sqlite_chat_repo;
pub mod sqlite_chef_repo;
pub mod sqlite_customer_repo;
pub mod sqlite_post_repo;
pub mod sqlite_review_repo;
