use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, RegisterChefRequest, RegisterCustomerRequest};
use crate::api::extractors::auth::AuthActor;
use crate::domain::models::auth::{AuthResponse, UserRole, UserSummary};
use crate::domain::models::chef::{Chef, NewChefParams};
use crate::domain::models::customer::Customer;
use crate::domain::services::auth_service::validate_password;
use crate::domain::services::moderation::{contains_profanity, sanitize_text};
use crate::error::AppError;
use crate::state::AppState;
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::Arc;
use tracing::info;

fn validate_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    let valid = email.contains('@')
        && !email.starts_with('@')
        && !email.ends_with('@')
        && email.rsplit('@').next().is_some_and(|d| d.contains('.'));
    if valid {
        Ok(email)
    } else {
        Err(AppError::Validation("Invalid email address".into()))
    }
}

fn validate_name(field: &str, value: &str) -> Result<String, AppError> {
    let value = sanitize_text(value);
    if value.chars().count() < 2 || value.chars().count() > 50 {
        return Err(AppError::Validation(format!("{field} must be 2-50 characters")));
    }
    if contains_profanity(&value) {
        return Err(AppError::Validation("Invalid name content".into()));
    }
    Ok(value)
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}

fn verify_password(password: &str, hash: &str) -> Result<(), AppError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AppError::Internal)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)
}

pub async fn register_customer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = validate_email(&payload.email)?;
    validate_password(&payload.password)?;
    let first_name = validate_name("first_name", &payload.first_name)?;
    let last_name = validate_name("last_name", &payload.last_name)?;

    if state.customer_repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Validation("User already exists".into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let customer = Customer::new(email, password_hash, first_name, last_name, sanitize_text(&payload.phone));
    let created = state.customer_repo.create(&customer).await?;

    let token = state.auth_service.issue_token(&created.id, &created.email, UserRole::Customer)?;

    info!("New customer registered: {}", created.email);

    Ok((StatusCode::CREATED, Json(AuthResponse {
        token,
        user: UserSummary {
            id: created.id,
            email: created.email,
            first_name: created.first_name,
            last_name: created.last_name,
            role: UserRole::Customer,
        },
    })))
}

pub async fn register_chef(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterChefRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = validate_email(&payload.email)?;
    validate_password(&payload.password)?;
    let first_name = validate_name("first_name", &payload.first_name)?;
    let last_name = validate_name("last_name", &payload.last_name)?;

    let bio = sanitize_text(&payload.bio);
    if bio.chars().count() < 50 || bio.chars().count() > 1000 {
        return Err(AppError::Validation("Bio must be 50-1000 characters".into()));
    }
    if contains_profanity(&bio) {
        return Err(AppError::Validation("Invalid content detected".into()));
    }
    if !(100.0..=5000.0).contains(&payload.base_rate) {
        return Err(AppError::Validation("Base rate must be between 100 and 5000".into()));
    }
    if payload.regions_served.is_empty() || payload.dietary_specialties.is_empty() {
        return Err(AppError::Validation("At least one region and one dietary specialty are required".into()));
    }

    if state.chef_repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Validation("Chef already exists".into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let chef = Chef::new(NewChefParams {
        email,
        password_hash,
        first_name,
        last_name,
        phone: sanitize_text(&payload.phone),
        bio,
        base_rate: payload.base_rate,
        regions: payload.regions_served,
        dietary_specialties: payload.dietary_specialties,
        years_experience: payload.years_experience.unwrap_or(0),
        culinary_training: payload.culinary_training,
        certifications: payload.certifications.unwrap_or_default(),
    });
    let created = state.chef_repo.create(&chef).await?;

    let token = state.auth_service.issue_token(&created.id, &created.email, UserRole::Chef)?;

    info!("New chef registered: {}", created.email);

    Ok((StatusCode::CREATED, Json(AuthResponse {
        token,
        user: UserSummary {
            id: created.id,
            email: created.email,
            first_name: created.first_name,
            last_name: created.last_name,
            role: UserRole::Chef,
        },
    })))
}

pub async fn login_customer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state.customer_repo.find_by_email(&payload.email.trim().to_lowercase()).await?
        .ok_or(AppError::Unauthorized)?;

    if !customer.is_active {
        return Err(AppError::Unauthorized);
    }
    verify_password(&payload.password, &customer.password_hash)?;

    let token = state.auth_service.issue_token(&customer.id, &customer.email, UserRole::Customer)?;

    info!("Customer logged in: {}", customer.id);

    Ok(Json(AuthResponse {
        token,
        user: UserSummary {
            id: customer.id,
            email: customer.email,
            first_name: customer.first_name,
            last_name: customer.last_name,
            role: UserRole::Customer,
        },
    }))
}

pub async fn login_chef(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let chef = state.chef_repo.find_by_email(&payload.email.trim().to_lowercase()).await?
        .ok_or(AppError::Unauthorized)?;

    if !chef.is_active {
        return Err(AppError::Unauthorized);
    }
    verify_password(&payload.password, &chef.password_hash)?;

    let token = state.auth_service.issue_token(&chef.id, &chef.email, UserRole::Chef)?;

    info!("Chef logged in: {}", chef.id);

    Ok(Json(AuthResponse {
        token,
        user: UserSummary {
            id: chef.id,
            email: chef.email,
            first_name: chef.first_name,
            last_name: chef.last_name,
            role: UserRole::Chef,
        },
    }))
}

pub async fn verify(
    State(state): State<Arc<AppState>>,
    AuthActor(actor): AuthActor,
) -> Result<impl IntoResponse, AppError> {
    let user = match actor.role {
        UserRole::Customer => {
            let customer = state.customer_repo.find_by_id(&actor.id).await?
                .ok_or(AppError::Unauthorized)?;
            UserSummary {
                id: customer.id,
                email: customer.email,
                first_name: customer.first_name,
                last_name: customer.last_name,
                role: UserRole::Customer,
            }
        }
        UserRole::Chef => {
            let chef = state.chef_repo.find_by_id(&actor.id).await?
                .ok_or(AppError::Unauthorized)?;
            UserSummary {
                id: chef.id,
                email: chef.email,
                first_name: chef.first_name,
                last_name: chef.last_name,
                role: UserRole::Chef,
            }
        }
    };

    Ok(Json(user))
}
