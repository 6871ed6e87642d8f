//! Category price lookup.

use crate::domain::{CategoryProfile, CategoryTable, FlightRecord, Price};

use super::error::FareError;

/// A category together with the flight's price for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedCategory<'a> {
    pub profile: &'a CategoryProfile,
    pub price: Result<Price, FareError>,
}

/// Resolves flight prices against a category table.
///
/// Stateless: every call reads only its arguments and the table.
#[derive(Debug, Clone, Copy)]
pub struct FareResolver<'a> {
    table: &'a CategoryTable,
}

impl<'a> FareResolver<'a> {
    pub fn new(table: &'a CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a CategoryTable {
        self.table
    }

    /// The category shown when none has been selected.
    pub fn default_category(&self) -> &'a CategoryProfile {
        self.table.default_category()
    }

    /// Look up a category by user-supplied id.
    pub fn category(&self, raw_id: &str) -> Result<&'a CategoryProfile, FareError> {
        self.table
            .lookup(raw_id)
            .ok_or_else(|| FareError::CategoryNotFound(raw_id.trim().to_string()))
    }

    /// The price of `flight` in the category named by `raw_id`.
    ///
    /// Ids are matched ignoring case and surrounding whitespace.
    pub fn resolve(&self, flight: &FlightRecord, raw_id: &str) -> Result<Price, FareError> {
        let profile = self.category(raw_id)?;
        self.resolve_profile(flight, profile)
    }

    /// The price of `flight` in a category already taken from the table.
    pub fn resolve_profile(
        &self,
        flight: &FlightRecord,
        profile: &CategoryProfile,
    ) -> Result<Price, FareError> {
        flight
            .price(&profile.id)
            .ok_or_else(|| FareError::PriceMissing {
                category: profile.id.clone(),
                origin: flight.origin().clone(),
                destination: flight.destination().clone(),
                date: flight.date(),
            })
    }

    /// Every category with its price for `flight`, in table order.
    pub fn resolve_all(&self, flight: &FlightRecord) -> Vec<PricedCategory<'a>> {
        self.table
            .iter()
            .map(|profile| PricedCategory {
                profile,
                price: self.resolve_profile(flight, profile),
            })
            .collect()
    }
}
