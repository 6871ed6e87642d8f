//! Flight search.
//!
//! This module turns raw query parameters into canonical criteria and
//! applies them to the flight catalog:
//!
//! raw query -> [`normalize`] -> [`SearchCriteria`] -> [`MatchEngine`]
//!
//! The engine treats missing fields as wildcards and never rejects a
//! query. Callers that submit a search form should run
//! [`SearchCriteria::validate`] first.

mod criteria;
mod matcher;
mod query;


pub use criteria::{
    CityQuery, DayCriterion, Field, FieldError, SearchCriteria, TripType, ValidationErrors,
};
pub use matcher::{FlightMatch, Leg, MatchEngine, NO_RESULTS_MESSAGE, SearchResult, classify};
pub use query::{QueryValue, RawQuery, keys, normalize};
