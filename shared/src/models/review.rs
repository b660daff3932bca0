//! Review model and create payload

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Review entity
///
/// Reviews are created and deleted, never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Review {
    pub review_id: i64,
    pub restaurant_id: i64,
    /// Integer rating in [1, 5]
    pub rating: i32,
    pub review_text: Option<String>,
    /// Server-assigned on creation
    pub review_date: NaiveDate,
}

/// Create review payload
///
/// The review date is server-assigned, not client-supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewCreate {
    pub restaurant_id: i64,
    pub rating: i32,
    #[serde(default)]
    pub review_text: Option<String>,
}

impl ReviewCreate {
    /// Validate the rating range before any store interaction.
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::new(ErrorCode::RatingOutOfRange)
                .with_detail("rating", self.rating));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(rating: i32) -> ReviewCreate {
        ReviewCreate {
            restaurant_id: 1,
            rating,
            review_text: None,
        }
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(create(1).validate().is_ok());
        assert!(create(5).validate().is_ok());
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        for rating in [0, 6, -1, 100] {
            let err = create(rating).validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::RatingOutOfRange);
        }
    }
}
