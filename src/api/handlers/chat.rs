use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::SendMessageRequest;
use crate::api::extractors::auth::AuthActor;
use crate::domain::models::chat::ChatMessage;
use crate::domain::services::moderation::{contains_profanity, sanitize_text};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

pub async fn list_chats(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
) -> Result<impl IntoResponse, AppError> {
    let chats = state.chat_repo.list_for_user(&actor.id).await?;
    Ok(Json(chats))
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Path(chat_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let chat = state.chat_repo.find_by_id(&chat_id).await?
        .ok_or(AppError::NotFound("Chat not found".into()))?;
    if !chat.is_participant(&actor.id) {
        return Err(AppError::Forbidden("Access denied".into()));
    }

    let messages = state.chat_repo.list_messages(&chat.id).await?;
    Ok(Json(messages))
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Path(chat_id): Path<String>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let chat = state.chat_repo.find_by_id(&chat_id).await?
        .ok_or(AppError::NotFound("Chat not found".into()))?;
    if !chat.is_participant(&actor.id) {
        return Err(AppError::Forbidden("Access denied".into()));
    }

    let content = sanitize_text(&payload.content);
    if content.is_empty() || content.chars().count() > 2000 {
        return Err(AppError::Validation("Message must be 1-2000 characters".into()));
    }
    if contains_profanity(&content) {
        return Err(AppError::Validation("Invalid message content".into()));
    }

    let message = ChatMessage::new(chat.id.clone(), actor.id.clone(), actor.role.as_str().to_string(), content);
    let created = state.chat_repo.add_message(&message).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
