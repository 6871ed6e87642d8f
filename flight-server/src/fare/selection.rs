//! Category chooser and the fare shown for a flight.
//!
//! The chooser's visibility and the selected category are separate values:
//! [`CategoryChooser`] only opens and closes, reporting what the user chose
//! when it closes, and [`FareSelection`] owns the selected category and its
//! price. A closed chooser either changed the category or left it alone;
//! there is no partially selected state.

use crate::domain::{CategoryProfile, FlightRecord, Price};

use super::error::FareError;
use super::resolver::FareResolver;

/// Visibility of the category chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChooserState {
    #[default]
    Closed,
    Open,
}

/// What the user did while the chooser was open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooserOutcome {
    /// A category was picked, by id.
    Changed(String),
    /// Dismissed without picking.
    NoChange,
}

/// Closed -> Open -> Closed.
#[derive(Debug, Clone, Default)]
pub struct CategoryChooser {
    state: ChooserState,
}

impl CategoryChooser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChooserState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ChooserState::Open
    }

    /// Open the chooser. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        let was_closed = self.state == ChooserState::Closed;
        self.state = ChooserState::Open;
        was_closed
    }

    /// Close the chooser with the user's choice.
    ///
    /// Returns the outcome to apply, or `None` if the chooser was not open.
    pub fn close(&mut self, outcome: ChooserOutcome) -> Option<ChooserOutcome> {
        match self.state {
            ChooserState::Open => {
                self.state = ChooserState::Closed;
                Some(outcome)
            }
            ChooserState::Closed => None,
        }
    }
}

/// The category and price currently displayed for one flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareSelection<'a> {
    flight: &'a FlightRecord,
    category: &'a CategoryProfile,
    price: Result<Price, FareError>,
}

impl<'a> FareSelection<'a> {
    /// Start on the default category.
    pub fn new(resolver: &FareResolver<'a>, flight: &'a FlightRecord) -> Self {
        let category = resolver.default_category();
        Self {
            flight,
            category,
            price: resolver.resolve_profile(flight, category),
        }
    }

    /// Start on the category named by `raw_id`.
    pub fn with_category(
        resolver: &FareResolver<'a>,
        flight: &'a FlightRecord,
        raw_id: &str,
    ) -> Result<Self, FareError> {
        let category = resolver.category(raw_id)?;
        Ok(Self {
            flight,
            category,
            price: resolver.resolve_profile(flight, category),
        })
    }

    /// Apply what the chooser reported when it closed.
    ///
    /// Returns whether the selected category changed. An unknown category
    /// leaves the current selection untouched.
    pub fn apply(
        &mut self,
        resolver: &FareResolver<'a>,
        outcome: &ChooserOutcome,
    ) -> Result<bool, FareError> {
        let ChooserOutcome::Changed(raw_id) = outcome else {
            return Ok(false);
        };

        let category = resolver.category(raw_id)?;
        let changed = category.id != self.category.id;
        self.category = category;
        self.price = resolver.resolve_profile(self.flight, category);
        Ok(changed)
    }

    pub fn flight(&self) -> &'a FlightRecord {
        self.flight
    }

    pub fn category(&self) -> &'a CategoryProfile {
        self.category
    }

    /// The price in the selected category, or why there is none.
    pub fn price(&self) -> Result<Price, &FareError> {
        self.price.as_ref().copied()
    }
}
