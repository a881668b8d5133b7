use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{auth, booking, catalog, chat, chef, health, payment, post as chef_post, review};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))

        // Auth
        .route("/api/v1/auth/customers/register", post(auth::register_customer))
        .route("/api/v1/auth/customers/login", post(auth::login_customer))
        .route("/api/v1/auth/chefs/register", post(auth::register_chef))
        .route("/api/v1/auth/chefs/login", post(auth::login_chef))
        .route("/api/v1/auth/verify", get(auth::verify))

        // Chef discovery and profiles
        .route("/api/v1/chefs", get(chef::list_chefs))
        .route("/api/v1/chefs/search", get(chef::search_chefs))
        .route("/api/v1/chefs/me", put(chef::update_profile))
        .route("/api/v1/chefs/me/stats", get(chef::chef_stats))
        .route("/api/v1/chefs/{chef_id}", get(chef::get_chef))
        .route("/api/v1/chefs/{chef_id}/availability", get(booking::get_availability))
        .route("/api/v1/chefs/{chef_id}/reviews", get(review::list_chef_reviews))
        .route("/api/v1/chefs/{chef_id}/posts", get(chef_post::list_chef_posts))

        // Bookings
        .route("/api/v1/bookings", post(booking::create_booking).get(booking::list_my_bookings))
        .route("/api/v1/bookings/{booking_id}/status", put(booking::update_booking_status))

        // Payments
        .route("/api/v1/payments/create-intent", post(payment::create_intent))
        .route("/api/v1/payments/confirm", post(payment::confirm_payment))

        // Reviews
        .route("/api/v1/reviews", post(review::create_review))

        // Chats
        .route("/api/v1/chats", get(chat::list_chats))
        .route("/api/v1/chats/{chat_id}/messages", get(chat::list_messages).post(chat::send_message))

        // Chef posts
        .route("/api/v1/posts", post(chef_post::create_post))
        .route("/api/v1/posts/{post_id}", delete(chef_post::delete_post))

        // Static catalogs
        .route("/api/v1/catalog/cuisines", get(catalog::cuisines))
        .route("/api/v1/catalog/dietary-options", get(catalog::dietary_options))
        .route("/api/v1/catalog/regions", get(catalog::regions))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
