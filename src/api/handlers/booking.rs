use axum::{extract::{Path, Query, State}, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{AvailabilityQuery, CreateBookingRequest, UpdateBookingStatusRequest};
use crate::api::dtos::responses::{AvailabilityResponse, BookingResponse};
use crate::api::extractors::auth::AuthActor;
use crate::domain::models::auth::UserRole;
use crate::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use crate::domain::models::chat::Chat;
use crate::domain::services::availability::{format_slot, is_valid_slot, open_slots};
use crate::domain::services::moderation::{contains_profanity, sanitize_text};
use crate::domain::services::pricing::{round2, FeeSchedule};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}

fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if actor.role != UserRole::Customer {
        return Err(AppError::Forbidden("Only customers can create bookings".into()));
    }

    if !(1..=50).contains(&payload.party_size) {
        return Err(AppError::Validation("Party size must be between 1 and 50".into()));
    }

    let event_address = sanitize_text(&payload.event_address);
    if event_address.chars().count() < 10 || event_address.chars().count() > 500 {
        return Err(AppError::Validation("Event address must be 10-500 characters".into()));
    }

    let special_requests = match payload.special_requests.as_deref() {
        Some(raw) if !raw.trim().is_empty() => {
            let cleaned = sanitize_text(raw);
            if cleaned.chars().count() > 1000 {
                return Err(AppError::Validation("Special requests must be at most 1000 characters".into()));
            }
            if contains_profanity(&cleaned) {
                return Err(AppError::Validation("Invalid content in special requests".into()));
            }
            Some(cleaned)
        }
        _ => None,
    };

    let event_date = parse_date(&payload.event_date)?;
    let event_time = parse_time(&payload.event_time)?;
    if !is_valid_slot(event_time) {
        return Err(AppError::Validation("Requested time is not a bookable slot".into()));
    }

    let chef = state.chef_repo.find_by_id(&payload.chef_id).await?
        .filter(|c| c.is_active && c.is_verified)
        .ok_or(AppError::NotFound("Chef not found or not available".into()))?;

    let event_datetime = NaiveDateTime::new(event_date, event_time);
    if event_datetime <= Utc::now().naive_utc() {
        return Err(AppError::Validation("Event date must be in the future".into()));
    }

    if state.config.public_holidays.contains(&event_date) {
        return Err(AppError::Validation("Bookings not available on public holidays".into()));
    }

    let booked = state.booking_repo.booked_times(&chef.id, event_date).await?;
    if booked.contains(&event_time) {
        return Err(AppError::Conflict("Selected time slot is not available".into()));
    }

    let fees = FeeSchedule::new(state.config.service_fee_pct, state.config.processing_fee_pct);
    let subtotal = round2(chef.base_rate * payload.party_size as f64);
    let quote = fees.quote(subtotal);

    let booking = Booking::new(NewBookingParams {
        customer_id: actor.id.clone(),
        chef_id: chef.id.clone(),
        event_date,
        event_time,
        party_size: payload.party_size,
        event_address,
        special_requests,
        dietary_requirements: payload.dietary_requirements.unwrap_or_default(),
        menu_preferences: payload.menu_preferences.unwrap_or_default(),
        subtotal: quote.subtotal,
        service_fee: quote.service_fee,
        processing_fee: quote.processing_fee,
        total_amount: quote.total,
    });

    let created = state.booking_repo.create(&booking).await?;
    info!("New booking created: {} for chef {}", created.id, chef.id);

    // Notification side channel: open a chat thread for the parties.
    // Best effort; a failure here never fails the booking.
    let chat = Chat::new(created.id.clone(), created.customer_id.clone(), created.chef_id.clone());
    if let Err(e) = state.chat_repo.create(&chat).await {
        warn!("Failed to create chat thread for booking {}: {}", created.id, e);
    }

    Ok((StatusCode::CREATED, Json(BookingResponse::from(created))))
}

pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Path(chef_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&query.date)?;

    let booked = state.booking_repo.booked_times(&chef_id, date).await?;
    let available_times = open_slots(&booked).into_iter().map(format_slot).collect();

    Ok(Json(AvailabilityResponse {
        date: query.date,
        available_times,
    }))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let target = BookingStatus::parse(&payload.status)
        .filter(|s| *s != BookingStatus::Pending)
        .ok_or_else(|| AppError::Validation("Invalid status".into()))?;

    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let is_party = match actor.role {
        UserRole::Customer => booking.customer_id == actor.id,
        UserRole::Chef => booking.chef_id == actor.id,
    };
    if !is_party {
        return Err(AppError::Forbidden("Access denied".into()));
    }

    let current = booking.status().ok_or(AppError::Internal)?;
    if !current.can_transition_to(target) {
        return Err(AppError::Conflict(format!(
            "Cannot change status from {} to {}",
            current.as_str(),
            target.as_str()
        )));
    }

    let updated = state.booking_repo.update_status(&booking.id, target.as_str()).await?;
    info!("Booking {} status: {} -> {}", updated.id, current.as_str(), target.as_str());

    Ok(Json(BookingResponse::from(updated)))
}

/// Bookings where the actor is a party, customer or chef side.
pub async fn list_my_bookings(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
) -> Result<impl IntoResponse, AppError> {
    let bookings = match actor.role {
        UserRole::Customer => state.booking_repo.list_by_customer(&actor.id).await?,
        UserRole::Chef => state.booking_repo.list_by_chef(&actor.id).await?,
    };

    let response: Vec<BookingResponse> = bookings.into_iter().map(BookingResponse::from).collect();
    Ok(Json(response))
}
