//! Flight records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CategoryId, CategoryTable, City, Price};

/// A scheduled flight as listed in the catalog.
///
/// Records are immutable once built; the catalog hands out shared
/// references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    origin: City,
    destination: City,
    /// Departure day, serialized as `YYYY-MM-DD`.
    date: NaiveDate,
    /// Departure time of day, for display only.
    time: String,
    /// Number of layovers.
    scales: u32,
    prices: BTreeMap<CategoryId, Price>,
}

impl FlightRecord {
    pub fn new(
        origin: City,
        destination: City,
        date: NaiveDate,
        time: impl Into<String>,
        scales: u32,
        prices: BTreeMap<CategoryId, Price>,
    ) -> Self {
        Self {
            origin,
            destination,
            date,
            time: time.into(),
            scales,
            prices,
        }
    }

    pub fn origin(&self) -> &City {
        &self.origin
    }

    pub fn destination(&self) -> &City {
        &self.destination
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn scales(&self) -> u32 {
        self.scales
    }

    /// The full price mapping, keyed by category id.
    pub fn prices(&self) -> &BTreeMap<CategoryId, Price> {
        &self.prices
    }

    /// The price for one category, if the record has it.
    pub fn price(&self, category: &CategoryId) -> Option<Price> {
        self.prices.get(category).copied()
    }

    /// Categories from `table` that this record has no price for.
    ///
    /// A non-empty result is a data error in the catalog.
    pub fn missing_categories<'t>(&self, table: &'t CategoryTable) -> Vec<&'t CategoryId> {
        table
            .ids()
            .filter(|id| !self.prices.contains_key(*id))
            .collect()
    }

    /// Whether every category in `table` has a price.
    pub fn has_complete_prices(&self, table: &CategoryTable) -> bool {
        table.ids().all(|id| self.prices.contains_key(id))
    }
}
