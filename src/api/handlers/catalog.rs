use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Static reference lists backing the booking form dropdowns.

const CUISINES: &[&str] = &[
    "South African Traditional",
    "Cape Malay",
    "Italian",
    "French",
    "Japanese",
    "Indian",
    "Mediterranean",
    "Mexican",
    "Thai",
    "Fusion",
];

const DIETARY_OPTIONS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Halal",
    "Kosher",
    "Gluten-Free",
    "Dairy-Free",
    "Nut-Free",
    "Pescatarian",
    "Low-Carb",
    "Banting",
];

const REGIONS: &[&str] = &[
    "Cape Town",
    "Johannesburg",
    "Pretoria",
    "Durban",
    "Stellenbosch",
    "Port Elizabeth",
    "Bloemfontein",
    "East London",
    "Kimberley",
    "Polokwane",
];

pub async fn cuisines() -> impl IntoResponse {
    Json(json!({ "cuisines": CUISINES }))
}

pub async fn dietary_options() -> impl IntoResponse {
    Json(json!({ "dietary_options": DIETARY_OPTIONS }))
}

pub async fn regions() -> impl IntoResponse {
    Json(json!({ "regions": REGIONS }))
}
