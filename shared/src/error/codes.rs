//! Unified error codes for the catalog console
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Catalog errors
//! - 5xxx: Review errors
//! - 6xxx: Destructive-operation guard errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Catalog ====================
    /// Restaurant not found
    RestaurantNotFound = 4001,
    /// Price range does not exist in reference data
    PriceRangeUnknown = 4002,
    /// Cuisine type does not exist in reference data
    CuisineUnknown = 4003,

    // ==================== 5xxx: Review ====================
    /// Review not found
    ReviewNotFound = 5001,
    /// Rating outside [1, 5]
    RatingOutOfRange = 5002,

    // ==================== 6xxx: Destructive guard ====================
    /// Operator has not checked the acknowledgment box
    AcknowledgmentRequired = 6001,
    /// Typed confirmation token does not match the expected one
    ConfirmationMismatch = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::RestaurantNotFound => "Restaurant not found",
            Self::PriceRangeUnknown => "Unknown price range",
            Self::CuisineUnknown => "Unknown cuisine type",
            Self::ReviewNotFound => "Review not found",
            Self::RatingOutOfRange => "Rating must be between 1 and 5",
            Self::AcknowledgmentRequired => "Acknowledgment required",
            Self::ConfirmationMismatch => "Confirmation text does not match",
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }

    /// Whether this code belongs to the 9xxx system range
    pub fn is_system(&self) -> bool {
        self.code() >= 9000
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,
            4001 => Self::RestaurantNotFound,
            4002 => Self::PriceRangeUnknown,
            4003 => Self::CuisineUnknown,
            5001 => Self::ReviewNotFound,
            5002 => Self::RatingOutOfRange,
            6001 => Self::AcknowledgmentRequired,
            6002 => Self::ConfirmationMismatch,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::RestaurantNotFound,
            ErrorCode::ConfirmationMismatch,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }
}
