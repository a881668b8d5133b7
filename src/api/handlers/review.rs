use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{CreateReviewRequest, ReviewListQuery};
use crate::api::extractors::auth::AuthActor;
use crate::domain::models::auth::UserRole;
use crate::domain::models::review::{aggregate_rating, Review};
use crate::domain::services::moderation::{contains_profanity, sanitize_text};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn create_review(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    if actor.role != UserRole::Customer {
        return Err(AppError::Forbidden("Only customers can leave reviews".into()));
    }

    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::Validation("Rating must be between 1 and 5".into()));
    }

    let comment = match payload.comment.as_deref() {
        Some(raw) if !raw.trim().is_empty() => {
            let cleaned = sanitize_text(raw);
            if cleaned.chars().count() > 500 {
                return Err(AppError::Validation("Comment must be at most 500 characters".into()));
            }
            if contains_profanity(&cleaned) {
                return Err(AppError::Validation("Invalid content in comment".into()));
            }
            Some(cleaned)
        }
        _ => None,
    };

    state.chef_repo.find_by_id(&payload.chef_id).await?
        .ok_or(AppError::NotFound("Chef not found".into()))?;

    if !state.booking_repo.has_completed_booking(&actor.id, &payload.chef_id).await? {
        return Err(AppError::Forbidden("Reviews require a completed booking with this chef".into()));
    }

    if state.review_repo.find_by_customer_and_chef(&actor.id, &payload.chef_id).await?.is_some() {
        return Err(AppError::Conflict("You have already reviewed this chef".into()));
    }

    let review = Review::new(actor.id.clone(), payload.chef_id.clone(), payload.rating, comment);
    let created = state.review_repo.create(&review).await?;

    let ratings = state.review_repo.ratings_for_chef(&payload.chef_id).await?;
    let (average, total) = aggregate_rating(&ratings);
    state.chef_repo.update_rating(&payload.chef_id, average, total).await?;

    info!("Review {} created for chef {} (avg {})", created.id, payload.chef_id, average);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_chef_reviews(
    State(state): State<Arc<AppState>>,
    Path(chef_id): Path<String>,
    Query(query): Query<ReviewListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).clamp(1, 50);

    let reviews = state.review_repo.list_by_chef(&chef_id, limit, (page - 1) * limit).await?;
    Ok(Json(reviews))
}
