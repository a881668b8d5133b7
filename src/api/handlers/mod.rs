pub mod auth;
pub mod booking;
pub mod catalog;
pub mod chat;
pub mod chef;
pub mod health;
pub mod payment;
pub mod post;
pub mod review;
