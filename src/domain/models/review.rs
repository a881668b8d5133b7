use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Review {
    pub id: String,
    pub customer_id: String,
    pub chef_id: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(customer_id: String, chef_id: String, rating: i32, comment: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            customer_id,
            chef_id,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}

/// Chef rating aggregate, recomputed after every new review.
/// The average is rounded to one decimal place.
pub fn aggregate_rating(ratings: &[i32]) -> (f64, i32) {
    if ratings.is_empty() {
        return (0.0, 0);
    }
    let sum: i32 = ratings.iter().sum();
    let avg = sum as f64 / ratings.len() as f64;
    ((avg * 10.0).round() / 10.0, ratings.len() as i32)
}

#[cfg(test)]
mod tests {
    use super::aggregate_rating;

    #[test]
    fn empty_is_zero() {
        assert_eq!(aggregate_rating(&[]), (0.0, 0));
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        // (5 + 4 + 4) / 3 = 4.333... -> 4.3
        assert_eq!(aggregate_rating(&[5, 4, 4]), (4.3, 3));
        // (5 + 4) / 2 = 4.5
        assert_eq!(aggregate_rating(&[5, 4]), (4.5, 2));
    }
}
