use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Declined,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Declined => "declined",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "declined" => Some(BookingStatus::Declined),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    /// Transition table for the guarded status update. `pending` is
    /// creation-only; `declined`, `completed` and `cancelled` are terminal.
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, target),
            (Pending, Confirmed) | (Pending, Declined) | (Pending, Cancelled)
                | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub chef_id: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub party_size: i32,
    pub event_address: String,
    pub special_requests: Option<String>,
    /// JSON array of dietary requirements.
    pub dietary_json: String,
    /// JSON array of menu preferences.
    pub menu_json: String,
    pub subtotal: f64,
    pub service_fee: f64,
    pub processing_fee: f64,
    pub total_amount: f64,
    pub status: String,
    pub payment_intent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub customer_id: String,
    pub chef_id: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub party_size: i32,
    pub event_address: String,
    pub special_requests: Option<String>,
    pub dietary_requirements: Vec<String>,
    pub menu_preferences: Vec<String>,
    pub subtotal: f64,
    pub service_fee: f64,
    pub processing_fee: f64,
    pub total_amount: f64,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            customer_id: params.customer_id,
            chef_id: params.chef_id,
            event_date: params.event_date,
            event_time: params.event_time,
            party_size: params.party_size,
            event_address: params.event_address,
            special_requests: params.special_requests,
            dietary_json: serde_json::to_string(&params.dietary_requirements).unwrap_or_else(|_| "[]".into()),
            menu_json: serde_json::to_string(&params.menu_preferences).unwrap_or_else(|_| "[]".into()),
            subtotal: params.subtotal,
            service_fee: params.service_fee,
            processing_fee: params.processing_fee,
            total_amount: params.total_amount,
            status: BookingStatus::Pending.as_str().to_string(),
            payment_intent_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> Option<BookingStatus> {
        BookingStatus::parse(&self.status)
    }
}
