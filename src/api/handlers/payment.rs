use axum::{extract::State, response::IntoResponse, Json};
use crate::api::dtos::requests::{ConfirmPaymentRequest, CreateIntentRequest};
use crate::api::dtos::responses::{BookingResponse, PaymentIntentResponse};
use crate::api::extractors::auth::AuthActor;
use crate::domain::models::auth::UserRole;
use crate::domain::models::booking::BookingStatus;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

/// Opens a payment intent for a pending booking. The charge amount comes
/// from the stored booking total, never from the request.
pub async fn create_intent(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateIntentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if actor.role != UserRole::Customer {
        return Err(AppError::Forbidden("Only customers can pay for bookings".into()));
    }

    let booking = state.booking_repo.find_by_id(&payload.booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    if booking.customer_id != actor.id {
        return Err(AppError::Forbidden("Access denied".into()));
    }
    if booking.status() != Some(BookingStatus::Pending) {
        return Err(AppError::Conflict("Booking is not awaiting payment".into()));
    }

    let amount_cents = (booking.total_amount * 100.0).round() as i64;
    let intent = state.payment_service
        .create_intent(amount_cents, &state.config.currency, &booking.id)
        .await?;

    state.booking_repo.set_payment_intent(&booking.id, &intent.id).await?;
    info!("Payment intent {} opened for booking {}", intent.id, booking.id);

    Ok(Json(PaymentIntentResponse {
        payment_intent_id: intent.id,
        client_secret: intent.client_secret,
    }))
}

/// Verifies a payment with the processor and, on success, confirms the
/// booking it belongs to.
pub async fn confirm_payment(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<ConfirmPaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_payment_intent(&payload.payment_intent_id).await?
        .ok_or(AppError::NotFound("No booking for this payment".into()))?;
    if booking.customer_id != actor.id {
        return Err(AppError::Forbidden("Access denied".into()));
    }

    let intent = state.payment_service.retrieve_intent(&payload.payment_intent_id).await?;
    if intent.status != "succeeded" {
        return Err(AppError::Validation(format!("Payment not completed (status: {})", intent.status)));
    }

    let current = booking.status().ok_or(AppError::Internal)?;
    if current == BookingStatus::Confirmed {
        // Idempotent: a repeated confirm on a paid booking is not an error.
        return Ok(Json(BookingResponse::from(booking)));
    }
    if !current.can_transition_to(BookingStatus::Confirmed) {
        return Err(AppError::Conflict(format!(
            "Cannot confirm a {} booking",
            current.as_str()
        )));
    }

    let updated = state.booking_repo
        .update_status(&booking.id, BookingStatus::Confirmed.as_str())
        .await?;
    info!("Booking {} confirmed via payment {}", updated.id, intent.id);

    Ok(Json(BookingResponse::from(updated)))
}
