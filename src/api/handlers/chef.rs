use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::{ChefListQuery, ChefSearchQuery, UpdateChefProfileRequest};
use crate::api::dtos::responses::{ChefListResponse, ChefProfileResponse, ChefStatsResponse, Pagination};
use crate::api::extractors::auth::AuthActor;
use crate::domain::models::auth::UserRole;
use crate::domain::models::booking::BookingStatus;
use crate::domain::ports::ChefFilter;
use crate::domain::services::moderation::{contains_profanity, sanitize_text};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{Datelike, Utc};
use std::sync::Arc;
use tracing::info;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 50;

pub async fn list_chefs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChefListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    let filter = ChefFilter {
        region: query.region,
        specialty: query.specialty,
        min_rate: query.min_rate,
        max_rate: query.max_rate,
        limit,
        offset: (page - 1) * limit,
    };

    let chefs = state.chef_repo.list(&filter).await?;

    Ok(Json(ChefListResponse {
        chefs: chefs.into_iter().map(ChefProfileResponse::from).collect(),
        pagination: Pagination { page, limit },
    }))
}

/// Discovery endpoint for the booking flow: chefs serving a city, optionally
/// narrowed to a dietary specialty.
pub async fn search_chefs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChefSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ChefFilter {
        region: query.city,
        specialty: query.dietary_requirements,
        min_rate: None,
        max_rate: None,
        limit: MAX_PAGE_SIZE,
        offset: 0,
    };

    let chefs = state.chef_repo.list(&filter).await?;
    let response: Vec<ChefProfileResponse> = chefs.into_iter().map(ChefProfileResponse::from).collect();
    Ok(Json(response))
}

pub async fn get_chef(
    State(state): State<Arc<AppState>>,
    Path(chef_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let chef = state.chef_repo.find_by_id(&chef_id).await?
        .filter(|c| c.is_active)
        .ok_or(AppError::NotFound("Chef not found".into()))?;

    Ok(Json(ChefProfileResponse::from(chef)))
}

pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
    Json(payload): Json<UpdateChefProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if actor.role != UserRole::Chef {
        return Err(AppError::Forbidden("Only chefs can update a chef profile".into()));
    }

    let mut chef = state.chef_repo.find_by_id(&actor.id).await?
        .ok_or(AppError::NotFound("Chef not found".into()))?;

    if let Some(bio) = payload.bio {
        let bio = sanitize_text(&bio);
        if bio.chars().count() < 50 || bio.chars().count() > 1000 {
            return Err(AppError::Validation("Bio must be 50-1000 characters".into()));
        }
        if contains_profanity(&bio) {
            return Err(AppError::Validation("Invalid content detected".into()));
        }
        chef.bio = bio;
    }
    if let Some(rate) = payload.base_rate {
        if !(100.0..=5000.0).contains(&rate) {
            return Err(AppError::Validation("Base rate must be between 100 and 5000".into()));
        }
        chef.base_rate = rate;
    }
    if let Some(multiplier) = payload.holiday_rate_multiplier {
        if !(1.0..=5.0).contains(&multiplier) {
            return Err(AppError::Validation("Holiday rate multiplier must be between 1 and 5".into()));
        }
        chef.holiday_rate_multiplier = multiplier;
    }
    if let Some(regions) = payload.regions_served {
        if regions.is_empty() {
            return Err(AppError::Validation("At least one region is required".into()));
        }
        chef.regions_json = serde_json::to_string(&regions).map_err(|_| AppError::Internal)?;
    }
    if let Some(specialties) = payload.dietary_specialties {
        if specialties.is_empty() {
            return Err(AppError::Validation("At least one dietary specialty is required".into()));
        }
        chef.dietary_json = serde_json::to_string(&specialties).map_err(|_| AppError::Internal)?;
    }
    if let Some(years) = payload.years_experience {
        if !(0..=60).contains(&years) {
            return Err(AppError::Validation("Years of experience must be between 0 and 60".into()));
        }
        chef.years_experience = years;
    }
    if let Some(training) = payload.culinary_training {
        chef.culinary_training = Some(sanitize_text(&training));
    }
    if let Some(certifications) = payload.certifications {
        chef.certifications_json = serde_json::to_string(&certifications).map_err(|_| AppError::Internal)?;
    }
    if let Some(image) = payload.profile_image {
        chef.profile_image = Some(sanitize_text(&image));
    }

    let updated = state.chef_repo.update(&chef).await?;
    info!("Chef profile updated: {}", updated.id);

    Ok(Json(ChefProfileResponse::from(updated)))
}

/// Dashboard rollup for the authenticated chef.
pub async fn chef_stats(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
) -> Result<impl IntoResponse, AppError> {
    if actor.role != UserRole::Chef {
        return Err(AppError::Forbidden("Access denied".into()));
    }

    let chef = state.chef_repo.find_by_id(&actor.id).await?
        .ok_or(AppError::NotFound("Chef not found".into()))?;

    let bookings = state.booking_repo.list_by_chef(&chef.id).await?;
    let today = Utc::now().date_naive();

    let mut upcoming = 0i64;
    let mut completed = 0i64;
    let mut total_revenue = 0.0;
    let mut monthly_revenue = 0.0;
    for b in &bookings {
        match b.status() {
            Some(BookingStatus::Confirmed) if b.event_date >= today => upcoming += 1,
            Some(BookingStatus::Completed) => {
                completed += 1;
                total_revenue += b.total_amount;
                if b.event_date.year() == today.year() && b.event_date.month() == today.month() {
                    monthly_revenue += b.total_amount;
                }
            }
            _ => {}
        }
    }

    let total_posts = state.post_repo.count_by_chef(&chef.id).await?;
    let total_likes = state.post_repo.likes_total(&chef.id).await?;

    Ok(Json(ChefStatsResponse {
        total_bookings: bookings.len() as i64,
        upcoming_bookings: upcoming,
        completed_bookings: completed,
        total_revenue,
        monthly_revenue,
        total_reviews: chef.total_reviews as i64,
        average_rating: chef.average_rating,
        total_posts,
        total_likes,
    }))
}
