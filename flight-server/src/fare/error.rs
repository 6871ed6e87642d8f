//! Fare resolution error types.

use chrono::NaiveDate;

use crate::domain::{CategoryId, City};

/// Errors from resolving a flight's price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// The requested id is not in the category table
    #[error("unknown fare category: {0}")]
    CategoryNotFound(String),

    /// The flight has no price for a known category
    #[error("flight {origin} -> {destination} on {date} has no {category} price")]
    PriceMissing {
        category: CategoryId,
        origin: City,
        destination: City,
        date: NaiveDate,
    },
}
