use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::CreatePostRequest;
use crate::api::dtos::responses::PostResponse;
use crate::api::extractors::auth::AuthActor;
use crate::domain::models::auth::UserRole;
use crate::domain::models::post::ChefPost;
use crate::domain::services::moderation::{contains_profanity, sanitize_text};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn list_chef_posts(
    State(state): State<Arc<AppState>>,
    Path(chef_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let posts = state.post_repo.list_by_chef(&chef_id).await?;
    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(Json(response))
}

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    if actor.role != UserRole::Chef {
        return Err(AppError::Forbidden("Only chefs can publish posts".into()));
    }

    let content = sanitize_text(&payload.content);
    if content.is_empty() || content.chars().count() > 2000 {
        return Err(AppError::Validation("Post content must be 1-2000 characters".into()));
    }
    if contains_profanity(&content) {
        return Err(AppError::Validation("Invalid post content".into()));
    }

    let post = ChefPost::new(
        actor.id.clone(),
        content,
        payload.images.unwrap_or_default(),
        payload.location.map(|l| sanitize_text(&l)),
        payload.tags.unwrap_or_default(),
    );
    let created = state.post_repo.create(&post).await?;
    info!("Chef {} published post {}", actor.id, created.id);

    Ok((StatusCode::CREATED, Json(PostResponse::from(created))))
}

pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if actor.role != UserRole::Chef {
        return Err(AppError::Forbidden("Only chefs can delete posts".into()));
    }

    state.post_repo.delete(&actor.id, &post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
