use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Minimum review count before a chef's average rating is shown publicly.
pub const RATING_DISPLAY_THRESHOLD: i32 = 5;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Chef {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub bio: String,
    pub base_rate: f64,
    pub holiday_rate_multiplier: f64,
    /// JSON array of cities the chef serves.
    pub regions_json: String,
    /// JSON array of dietary specialties.
    pub dietary_json: String,
    pub years_experience: i32,
    pub culinary_training: Option<String>,
    pub certifications_json: String,
    pub profile_image: Option<String>,
    pub average_rating: f64,
    pub total_reviews: i32,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewChefParams {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub bio: String,
    pub base_rate: f64,
    pub regions: Vec<String>,
    pub dietary_specialties: Vec<String>,
    pub years_experience: i32,
    pub culinary_training: Option<String>,
    pub certifications: Vec<String>,
}

impl Chef {
    pub fn new(params: NewChefParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: params.email,
            password_hash: params.password_hash,
            first_name: params.first_name,
            last_name: params.last_name,
            phone: params.phone,
            bio: params.bio,
            base_rate: params.base_rate,
            holiday_rate_multiplier: 1.0,
            regions_json: serde_json::to_string(&params.regions).unwrap_or_else(|_| "[]".into()),
            dietary_json: serde_json::to_string(&params.dietary_specialties).unwrap_or_else(|_| "[]".into()),
            years_experience: params.years_experience,
            culinary_training: params.culinary_training,
            certifications_json: serde_json::to_string(&params.certifications).unwrap_or_else(|_| "[]".into()),
            profile_image: None,
            average_rating: 0.0,
            total_reviews: 0,
            is_active: true,
            is_verified: false,
            created_at: Utc::now(),
        }
    }

    pub fn regions(&self) -> Vec<String> {
        serde_json::from_str(&self.regions_json).unwrap_or_default()
    }

    pub fn dietary_specialties(&self) -> Vec<String> {
        serde_json::from_str(&self.dietary_json).unwrap_or_default()
    }

    pub fn certifications(&self) -> Vec<String> {
        serde_json::from_str(&self.certifications_json).unwrap_or_default()
    }

    /// Ratings are hidden until the sample is large enough to mean something.
    pub fn display_rating(&self) -> Option<f64> {
        (self.total_reviews >= RATING_DISPLAY_THRESHOLD).then_some(self.average_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chef_with_reviews(total_reviews: i32) -> Chef {
        let mut chef = Chef::new(NewChefParams {
            email: "c@example.com".into(),
            password_hash: "hash".into(),
            first_name: "Thandi".into(),
            last_name: "N".into(),
            phone: "+27821234567".into(),
            bio: "b".repeat(60),
            base_rate: 500.0,
            regions: vec!["Cape Town".into()],
            dietary_specialties: vec!["Vegan".into()],
            years_experience: 4,
            culinary_training: None,
            certifications: vec![],
        });
        chef.total_reviews = total_reviews;
        chef.average_rating = 4.2;
        chef
    }

    #[test]
    fn rating_hidden_below_threshold() {
        assert_eq!(chef_with_reviews(4).display_rating(), None);
    }

    #[test]
    fn rating_shown_at_threshold() {
        assert_eq!(chef_with_reviews(5).display_rating(), Some(4.2));
    }

    #[test]
    fn json_fields_round_trip() {
        let chef = chef_with_reviews(0);
        assert_eq!(chef.regions(), vec!["Cape Town".to_string()]);
        assert_eq!(chef.dietary_specialties(), vec!["Vegan".to_string()]);
        assert!(chef.certifications().is_empty());
    }
}
