pub mod auth_service;
pub mod availability;
pub mod moderation;
pub mod pricing;
