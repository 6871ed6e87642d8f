//! Fare price type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a price is not positive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: must be positive")]
pub struct InvalidPrice;

/// A positive fare in whole US dollars.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Price(u32);

impl Price {
    /// Create a price, rejecting zero.
    pub fn new(amount: u32) -> Result<Self, InvalidPrice> {
        if amount == 0 {
            return Err(InvalidPrice);
        }
        Ok(Price(amount))
    }

    /// Returns the amount in dollars.
    pub fn amount(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price({})", self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USD {}", self.0)
    }
}

impl TryFrom<u32> for Price {
    type Error = InvalidPrice;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for u32 {
    fn from(price: Price) -> Self {
        price.0
    }
}
