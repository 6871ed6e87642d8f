//! Data transfer objects for web responses.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{CategoryProfile, FlightRecord, Price};
use crate::fare::{FareError, PricedCategory};
use crate::search::{FieldError, FlightMatch, Leg, SearchResult, ValidationErrors};

/// A flight in search results.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    /// Catalog position, used to address the flight in later requests
    pub index: usize,

    pub origin: String,
    pub destination: String,

    /// Departure day, `YYYY-MM-DD`
    pub date: String,

    /// Departure time of day, as listed
    pub time: String,

    /// Number of intermediate stops
    pub scales: u32,

    /// Price per category id
    pub prices: BTreeMap<String, u32>,

    /// Which leg of the trip the flight was matched as
    pub leg: Leg,

    /// Price in the selected category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,

    /// Why `price` is missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_error: Option<String>,
}

/// Response for flight listing and search.
#[derive(Debug, Serialize)]
pub struct FlightListResponse {
    /// Matching flights, in catalog order
    pub flights: Vec<FlightResult>,

    /// Category the prices are given in
    pub category: String,

    /// Informational message when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A fare category.
#[derive(Debug, Serialize)]
pub struct CategoryResult {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub benefits: Vec<String>,
}

/// Response for the category list.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// Categories in display order; the first is the default
    pub categories: Vec<CategoryResult>,
}

/// One category's price for a flight.
#[derive(Debug, Serialize)]
pub struct CategoryPriceResult {
    pub id: String,
    pub display_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
}

/// Response for a flight's fare in one category.
#[derive(Debug, Serialize)]
pub struct FareResponse {
    pub index: usize,
    pub category: CategoryResult,
    pub price: u32,

    /// Price formatted for display, e.g. "USD 8"
    pub display_price: String,

    /// Every category's price for this flight, in display order
    pub options: Vec<CategoryPriceResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Error response for an incomplete search form.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    /// Summary of all problems
    pub error: String,

    /// One message per offending field
    pub fields: Vec<FieldError>,
}

// Conversion implementations

impl FlightResult {
    /// Create from a search match and its price in the selected category.
    pub fn from_match(m: &FlightMatch<'_>, price: Result<Price, FareError>) -> Self {
        let (price, price_error) = match price {
            Ok(price) => (Some(price.amount()), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            index: m.index,
            leg: m.leg,
            price,
            price_error,
            ..Self::from_flight(m.index, m.flight)
        }
    }

    fn from_flight(index: usize, flight: &FlightRecord) -> Self {
        Self {
            index,
            origin: flight.origin().to_string(),
            destination: flight.destination().to_string(),
            date: flight.date().format("%Y-%m-%d").to_string(),
            time: flight.time().to_string(),
            scales: flight.scales(),
            prices: flight
                .prices()
                .iter()
                .map(|(id, price)| (id.to_string(), price.amount()))
                .collect(),
            leg: Leg::Outbound,
            price: None,
            price_error: None,
        }
    }
}

impl FlightListResponse {
    /// Create from a search result priced in `category`.
    pub fn from_result(
        result: &SearchResult<'_>,
        category: &CategoryProfile,
        price: impl Fn(&FlightRecord) -> Result<Price, FareError>,
    ) -> Self {
        Self {
            flights: result
                .matches
                .iter()
                .map(|m| FlightResult::from_match(m, price(m.flight)))
                .collect(),
            category: category.id.to_string(),
            message: result.message().map(str::to_string),
        }
    }
}

impl CategoryResult {
    /// Create from a category profile.
    pub fn from_profile(profile: &CategoryProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            display_name: profile.display_name.clone(),
            description: profile.description.clone(),
            benefits: profile.benefits.clone(),
        }
    }
}

impl CategoryPriceResult {
    /// Create from a category priced for one flight.
    pub fn from_priced(priced: &PricedCategory<'_>) -> Self {
        Self {
            id: priced.profile.id.to_string(),
            display_name: priced.profile.display_name.clone(),
            price: priced.price.as_ref().ok().map(|p| p.amount()),
        }
    }
}

impl ValidationErrorResponse {
    /// Create from the validator's errors.
    pub fn from_errors(errors: &ValidationErrors) -> Self {
        Self {
            error: errors.to_string(),
            fields: errors.errors.clone(),
        }
    }
}
