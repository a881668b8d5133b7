pub mod auth;
pub mod booking;
pub mod chat;
pub mod chef;
pub mod customer;
pub mod post;
pub mod review;
