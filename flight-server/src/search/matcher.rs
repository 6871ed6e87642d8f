//! Flight matching.
//!
//! Selects the flights of a catalog that satisfy a [`SearchCriteria`].
//!
//! One-way searches keep flights that match origin, destination, departure
//! day and (when set) the scales filter.
//!
//! Round-trip searches keep the union of two legs:
//! - outbound: origin, destination and departure day, as for one-way
//!   searches but *without* the scales filter;
//! - return: origin and destination swapped, the return day, and the
//!   scales filter. The swapped cities are compared literally, so an
//!   empty city in the criteria is not a wildcard on this leg.
//!
//! The outbound leg never looks at the return day and the return leg
//! never looks at the departure day. This asymmetry is the long-standing
//! behaviour of the search page and is kept as is.

use serde::Serialize;
use tracing::debug;

use crate::catalog::FlightCatalog;
use crate::domain::FlightRecord;

use super::criteria::{SearchCriteria, TripType};

/// Message shown when a search finds nothing.
pub const NO_RESULTS_MESSAGE: &str = "No flights found for the given criteria.";

/// Which leg of the trip a flight was matched as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    Outbound,
    Return,
}

/// A catalog flight selected by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightMatch<'a> {
    /// Position of the flight in the catalog.
    pub index: usize,
    pub flight: &'a FlightRecord,
    pub leg: Leg,
}

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// Matching flights, in catalog order.
    pub matches: Vec<FlightMatch<'a>>,

    /// Number of catalog flights examined.
    pub examined: usize,
}

impl<'a> SearchResult<'a> {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// The matched flights without their metadata.
    pub fn flights(&self) -> impl Iterator<Item = &'a FlightRecord> + '_ {
        self.matches.iter().map(|m| m.flight)
    }

    /// Informational message for an empty result.
    pub fn message(&self) -> Option<&'static str> {
        self.is_empty().then_some(NO_RESULTS_MESSAGE)
    }
}

/// Runs searches against a catalog.
///
/// Holds no state besides the catalog reference, so it can be shared and
/// called repeatedly; the same criteria always give the same result.
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine<'a> {
    catalog: &'a FlightCatalog,
}

impl<'a> MatchEngine<'a> {
    pub fn new(catalog: &'a FlightCatalog) -> Self {
        Self { catalog }
    }

    /// Select every catalog flight matching `criteria`, in catalog order.
    ///
    /// An empty result is a normal outcome, not an error.
    pub fn search(&self, criteria: &SearchCriteria) -> SearchResult<'a> {
        let matches: Vec<FlightMatch<'a>> = self
            .catalog
            .flights()
            .iter()
            .enumerate()
            .filter_map(|(index, flight)| {
                classify(flight, criteria).map(|leg| FlightMatch { index, flight, leg })
            })
            .collect();

        debug!(
            trip_type = %criteria.trip_type,
            origin = criteria.origin.key(),
            destination = criteria.destination.key(),
            scales = ?criteria.scales,
            matched = matches.len(),
            examined = self.catalog.len(),
            "flight search"
        );

        SearchResult {
            matches,
            examined: self.catalog.len(),
        }
    }
}

/// Decide whether `flight` matches `criteria`, and as which leg.
///
/// A round-trip flight that satisfies both legs is reported as outbound.
pub fn classify(flight: &FlightRecord, criteria: &SearchCriteria) -> Option<Leg> {
    match criteria.trip_type {
        TripType::Departure => {
            (matches_outbound(flight, criteria) && matches_scales(flight, criteria))
                .then_some(Leg::Outbound)
        }
        TripType::Roundtrip => {
            if matches_outbound(flight, criteria) {
                Some(Leg::Outbound)
            } else if matches_return(flight, criteria) {
                Some(Leg::Return)
            } else {
                None
            }
        }
    }
}

/// Origin, destination and departure day, each with wildcards.
fn matches_outbound(flight: &FlightRecord, criteria: &SearchCriteria) -> bool {
    criteria.origin.matches(flight.origin())
        && criteria.destination.matches(flight.destination())
        && criteria.start_date.matches(flight.date())
}

/// Swapped cities (no wildcard), return day and scales.
fn matches_return(flight: &FlightRecord, criteria: &SearchCriteria) -> bool {
    criteria.destination.equals(flight.origin())
        && criteria.origin.equals(flight.destination())
        && criteria.end_date.matches(flight.date())
        && matches_scales(flight, criteria)
}

fn matches_scales(flight: &FlightRecord, criteria: &SearchCriteria) -> bool {
    criteria.scales.is_none_or(|scales| flight.scales() == scales)
}
