//! Canonical search criteria and the submission-time validation policy.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::City;

/// Whether a search is one-way or round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Departure,
    Roundtrip,
}

impl TripType {
    /// Parse a lower-cased trip type. Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "departure" => Some(TripType::Departure),
            "roundtrip" => Some(TripType::Roundtrip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Departure => "departure",
            TripType::Roundtrip => "roundtrip",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A city as typed into the search form.
///
/// An empty value is a wildcard for the outbound match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CityQuery {
    label: String,
    key: String,
}

impl CityQuery {
    pub fn new(raw: &str) -> Self {
        let label = raw.trim();
        Self {
            label: label.to_string(),
            key: label.to_lowercase(),
        }
    }

    /// The value with its original casing.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The lower-cased comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Wildcard-aware match: an empty query matches every city.
    pub fn matches(&self, city: &City) -> bool {
        self.is_empty() || self.equals(city)
    }

    /// Plain case-insensitive equality, with no wildcard.
    pub fn equals(&self, city: &City) -> bool {
        city.key() == self.key
    }
}

/// A calendar-day constraint taken from an ISO date-time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DayCriterion {
    /// No date given; matches every day.
    #[default]
    Any,
    /// Matches exactly this day.
    On(NaiveDate),
    /// A date was given but is not `YYYY-MM-DD`; matches no day.
    Unparseable(String),
}

impl DayCriterion {
    /// Build from an ISO-8601 date or date-time, keeping the day portion.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::search::DayCriterion;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 10, 19).unwrap();
    /// assert_eq!(DayCriterion::from_iso("2024-10-19T00:00:00Z"), DayCriterion::On(day));
    /// assert_eq!(DayCriterion::from_iso("2024-10-19"), DayCriterion::On(day));
    /// assert_eq!(DayCriterion::from_iso(""), DayCriterion::Any);
    /// ```
    pub fn from_iso(raw: &str) -> Self {
        let day = raw.split('T').next().unwrap_or_default().trim();

        if day.is_empty() {
            return DayCriterion::Any;
        }

        match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
            Ok(date) => DayCriterion::On(date),
            Err(_) => DayCriterion::Unparseable(day.to_string()),
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            DayCriterion::Any => true,
            DayCriterion::On(day) => *day == date,
            DayCriterion::Unparseable(_) => false,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, DayCriterion::Any)
    }

    /// The day, when one was given and parsed.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCriterion::On(day) => Some(*day),
            _ => None,
        }
    }
}

/// Canonical search criteria.
///
/// Built once per search by [`normalize`](super::normalize) and passed by
/// reference to the match engine. Empty cities and [`DayCriterion::Any`]
/// dates are wildcards for matching; use [`SearchCriteria::validate`] to
/// enforce the stricter submission policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchCriteria {
    pub origin: CityQuery,
    pub destination: CityQuery,
    pub trip_type: TripType,
    pub start_date: DayCriterion,
    /// Only consulted for round trips.
    pub end_date: DayCriterion,
    pub passengers: Option<u32>,
    /// When set, only flights with exactly this many scales match.
    pub scales: Option<u32>,
}

impl SearchCriteria {
    /// One-way criteria with everything else unset.
    pub fn departure(origin: &str, destination: &str, start_date: &str) -> Self {
        Self {
            origin: CityQuery::new(origin),
            destination: CityQuery::new(destination),
            start_date: DayCriterion::from_iso(start_date),
            ..Self::default()
        }
    }

    /// Round-trip criteria with everything else unset.
    pub fn roundtrip(origin: &str, destination: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            origin: CityQuery::new(origin),
            destination: CityQuery::new(destination),
            trip_type: TripType::Roundtrip,
            start_date: DayCriterion::from_iso(start_date),
            end_date: DayCriterion::from_iso(end_date),
            ..Self::default()
        }
    }

    /// Return these criteria with a scales filter.
    pub fn with_scales(self, scales: u32) -> Self {
        Self {
            scales: Some(scales),
            ..self
        }
    }

    /// Return these criteria with a passenger count.
    pub fn with_passengers(self, passengers: u32) -> Self {
        Self {
            passengers: Some(passengers),
            ..self
        }
    }

    /// Check that every field required to submit a search is present.
    ///
    /// All problems are reported together, one per form field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.origin.is_empty() {
            errors.push(FieldError::new(Field::Origin, "Origin is required."));
        }

        if self.destination.is_empty() {
            errors.push(FieldError::new(
                Field::Destination,
                "Destination is required.",
            ));
        }

        if self.passengers.unwrap_or(0) == 0 {
            errors.push(FieldError::new(
                Field::Passengers,
                "Please select at least one passenger.",
            ));
        }

        let round_trip = self.trip_type == TripType::Roundtrip;
        let dates_missing = self.start_date.is_any() || (round_trip && self.end_date.is_any());
        let dates_unparseable = matches!(self.start_date, DayCriterion::Unparseable(_))
            || (round_trip && matches!(self.end_date, DayCriterion::Unparseable(_)));

        if dates_missing {
            let message = if round_trip {
                "Both departure and return dates are required."
            } else {
                "Departure date is required."
            };
            errors.push(FieldError::new(Field::Dates, message));
        } else if dates_unparseable {
            errors.push(FieldError::new(Field::Dates, "Invalid date."));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }
}

/// A search form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Origin,
    Destination,
    Passengers,
    Dates,
}

/// A validation message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Every problem found in a search submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid search criteria: {}", summarize(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// The message for `field`, if it has one.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn trip_type_parse() {
        assert_eq!(TripType::parse("departure"), Some(TripType::Departure));
        assert_eq!(TripType::parse("roundtrip"), Some(TripType::Roundtrip));
        assert_eq!(TripType::parse("Roundtrip"), None);
        assert_eq!(TripType::parse("oneway"), None);
        assert_eq!(TripType::default(), TripType::Departure);
        assert_eq!(TripType::Roundtrip.to_string(), "roundtrip");
    }

    #[test]
    fn city_query_wildcard() {
        let any = CityQuery::new("");
        let cali = City::parse("Cali").unwrap();
        assert!(any.is_empty());
        assert!(any.matches(&cali));
        assert!(!any.equals(&cali));
    }

    #[test]
    fn city_query_case_insensitive() {
        let query = CityQuery::new("  BOGOTÁ ");
        assert_eq!(query.label(), "BOGOTÁ");
        assert_eq!(query.key(), "bogotá");
        assert!(query.matches(&City::parse("Bogotá").unwrap()));
        assert!(!query.matches(&City::parse("Cali").unwrap()));
    }

    #[test]
    fn day_criterion_from_iso() {
        assert_eq!(
            DayCriterion::from_iso("2024-10-19T05:00:00.000Z"),
            DayCriterion::On(day(2024, 10, 19))
        );
        assert_eq!(DayCriterion::from_iso("  "), DayCriterion::Any);
        assert_eq!(
            DayCriterion::from_iso("19/10/2024"),
            DayCriterion::Unparseable("19/10/2024".to_string())
        );
        assert_eq!(
            DayCriterion::from_iso("2024-02-30"),
            DayCriterion::Unparseable("2024-02-30".to_string())
        );
    }

    #[test]
    fn day_criterion_matches() {
        let d = day(2024, 10, 19);
        assert!(DayCriterion::Any.matches(d));
        assert!(DayCriterion::On(d).matches(d));
        assert!(!DayCriterion::On(day(2024, 10, 20)).matches(d));
        assert!(!DayCriterion::Unparseable("x".into()).matches(d));
    }

    #[test]
    fn valid_departure() {
        let criteria =
            SearchCriteria::departure("Medellín", "Bogotá", "2024-10-19T00:00:00Z").with_passengers(1);
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn valid_roundtrip() {
        let criteria = SearchCriteria::roundtrip("Bogotá", "Medellín", "2024-10-19", "2024-10-24")
            .with_passengers(2);
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn empty_criteria_reports_every_field() {
        let errors = SearchCriteria::default().validate().unwrap_err();
        assert_eq!(errors.errors.len(), 4);
        assert_eq!(errors.message_for(Field::Origin), Some("Origin is required."));
        assert_eq!(
            errors.message_for(Field::Destination),
            Some("Destination is required.")
        );
        assert_eq!(
            errors.message_for(Field::Passengers),
            Some("Please select at least one passenger.")
        );
        assert_eq!(
            errors.message_for(Field::Dates),
            Some("Departure date is required.")
        );
    }

    #[test]
    fn zero_passengers_rejected() {
        let criteria = SearchCriteria::departure("Cali", "Bogotá", "2024-10-21").with_passengers(0);
        let errors = criteria.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 1);
        assert!(errors.message_for(Field::Passengers).is_some());
    }

    #[test]
    fn roundtrip_requires_return_date() {
        let criteria =
            SearchCriteria::roundtrip("Cali", "Bogotá", "2024-10-21", "").with_passengers(1);
        let errors = criteria.validate().unwrap_err();
        assert_eq!(
            errors.message_for(Field::Dates),
            Some("Both departure and return dates are required.")
        );
    }

    #[test]
    fn departure_ignores_return_date() {
        let mut criteria =
            SearchCriteria::departure("Cali", "Bogotá", "2024-10-21").with_passengers(1);
        criteria.end_date = DayCriterion::Unparseable("junk".into());
        assert!(criteria.validate().is_ok());
    }

    #[test]
    fn unparseable_date_rejected() {
        let criteria =
            SearchCriteria::departure("Cali", "Bogotá", "21/10/2024").with_passengers(1);
        let errors = criteria.validate().unwrap_err();
        assert_eq!(errors.message_for(Field::Dates), Some("Invalid date."));
    }

    #[test]
    fn error_display_joins_messages() {
        let criteria = SearchCriteria::departure("", "Bogotá", "2024-10-21").with_passengers(1);
        let errors = criteria.validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "invalid search criteria: Origin is required."
        );
    }
}
