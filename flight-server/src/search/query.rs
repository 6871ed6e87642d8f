//! Raw query parameters and their normalization into [`SearchCriteria`].

use std::collections::HashMap;

use super::criteria::{CityQuery, DayCriterion, SearchCriteria, TripType};

/// Query-string keys read by the normalizer.
pub mod keys {
    pub const ORIGIN: &str = "origin";
    pub const DESTINATION: &str = "destination";
    pub const START_DATE: &str = "startDate";
    pub const END_DATE: &str = "endDate";
    pub const TRIP_TYPE: &str = "tripType";
    pub const PASSENGERS: &str = "passengers";
    pub const SCALES: &str = "scales";
    pub const CATEGORY: &str = "category";
}

/// A query parameter as delivered by a URL parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryValue {
    #[default]
    Absent,
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// The first value, or the empty string when there is none.
    pub fn first(&self) -> &str {
        match self {
            QueryValue::Absent => "",
            QueryValue::Single(value) => value,
            QueryValue::Multiple(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    fn push(self, value: String) -> Self {
        match self {
            QueryValue::Absent => QueryValue::Single(value),
            QueryValue::Single(first) => QueryValue::Multiple(vec![first, value]),
            QueryValue::Multiple(mut values) => {
                values.push(value);
                QueryValue::Multiple(values)
            }
        }
    }
}

static ABSENT: QueryValue = QueryValue::Absent;

/// A bag of query parameters, any of which may be missing or repeated.
#[derive(Debug, Clone, Default)]
pub struct RawQuery {
    values: HashMap<String, QueryValue>,
}

impl RawQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `(key, value)` pairs, turning repeated keys into lists.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: HashMap<String, QueryValue> = HashMap::new();
        for (key, value) in pairs {
            let entry = values.entry(key.into()).or_default();
            *entry = std::mem::take(entry).push(value.into());
        }
        Self { values }
    }

    /// Set a parameter, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: QueryValue) {
        self.values.insert(key.into(), value);
    }

    /// The parameter for `key`; [`QueryValue::Absent`] when missing.
    pub fn get(&self, key: &str) -> &QueryValue {
        self.values.get(key).unwrap_or(&ABSENT)
    }

    /// The first value for `key`, trimmed; empty when missing.
    pub fn first(&self, key: &str) -> &str {
        self.get(key).first().trim()
    }
}

/// Turn raw query parameters into canonical search criteria.
///
/// Never fails: missing or malformed values fall back to wildcards or
/// defaults, and validity is left to [`SearchCriteria::validate`].
pub fn normalize(raw: &RawQuery) -> SearchCriteria {
    let trip_type = TripType::parse(&raw.first(keys::TRIP_TYPE).to_lowercase()).unwrap_or_default();

    SearchCriteria {
        origin: CityQuery::new(raw.first(keys::ORIGIN)),
        destination: CityQuery::new(raw.first(keys::DESTINATION)),
        trip_type,
        start_date: DayCriterion::from_iso(raw.first(keys::START_DATE)),
        end_date: DayCriterion::from_iso(raw.first(keys::END_DATE)),
        passengers: parse_count(raw.first(keys::PASSENGERS)),
        scales: parse_count(raw.first(keys::SCALES)),
    }
}

fn parse_count(value: &str) -> Option<u32> {
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn first_value() {
        assert_eq!(QueryValue::Absent.first(), "");
        assert_eq!(QueryValue::Single("Cali".into()).first(), "Cali");
        assert_eq!(
            QueryValue::Multiple(vec!["Cali".into(), "Bogotá".into()]).first(),
            "Cali"
        );
        assert_eq!(QueryValue::Multiple(vec![]).first(), "");
    }

    #[test]
    fn from_pairs_groups_repeated_keys() {
        let raw = RawQuery::from_pairs([
            ("origin", "Cali"),
            ("destination", "Bogotá"),
            ("origin", "Medellín"),
        ]);

        assert_eq!(
            raw.get("origin"),
            &QueryValue::Multiple(vec!["Cali".into(), "Medellín".into()])
        );
        assert_eq!(raw.get("destination"), &QueryValue::Single("Bogotá".into()));
        assert_eq!(raw.get("startDate"), &QueryValue::Absent);
    }

    #[test]
    fn normalize_scalar_fields() {
        let raw = RawQuery::from_pairs([
            ("origin", "Medellín"),
            ("destination", "BOGOTÁ"),
            ("startDate", "2024-10-19T00:00:00Z"),
            ("tripType", "departure"),
            ("passengers", "2"),
            ("scales", "1"),
        ]);

        let criteria = normalize(&raw);
        assert_eq!(criteria.origin.key(), "medellín");
        assert_eq!(criteria.origin.label(), "Medellín");
        assert_eq!(criteria.destination.key(), "bogotá");
        assert_eq!(criteria.trip_type, TripType::Departure);
        assert_eq!(
            criteria.start_date,
            DayCriterion::On(NaiveDate::from_ymd_opt(2024, 10, 19).unwrap())
        );
        assert_eq!(criteria.end_date, DayCriterion::Any);
        assert_eq!(criteria.passengers, Some(2));
        assert_eq!(criteria.scales, Some(1));
    }

    #[test]
    fn normalize_takes_first_of_list() {
        let mut raw = RawQuery::new();
        raw.insert(
            "origin",
            QueryValue::Multiple(vec!["Cali".into(), "Bogotá".into()]),
        );
        raw.insert(
            "tripType",
            QueryValue::Multiple(vec!["roundtrip".into(), "departure".into()]),
        );

        let criteria = normalize(&raw);
        assert_eq!(criteria.origin.key(), "cali");
        assert_eq!(criteria.trip_type, TripType::Roundtrip);
    }

    #[test]
    fn normalize_empty_query() {
        let criteria = normalize(&RawQuery::new());
        assert_eq!(criteria, SearchCriteria::default());
        assert!(criteria.origin.is_empty());
        assert!(criteria.destination.is_empty());
        assert_eq!(criteria.trip_type, TripType::Departure);
        assert!(criteria.start_date.is_any());
        assert!(criteria.passengers.is_none());
        assert!(criteria.scales.is_none());
    }

    #[test]
    fn trip_type_is_case_insensitive() {
        let raw = RawQuery::from_pairs([("tripType", "RoundTrip")]);
        assert_eq!(normalize(&raw).trip_type, TripType::Roundtrip);
    }

    #[test]
    fn unknown_trip_type_defaults_to_departure() {
        let raw = RawQuery::from_pairs([("tripType", "multicity")]);
        assert_eq!(normalize(&raw).trip_type, TripType::Departure);
    }

    #[test]
    fn malformed_counts_are_unset() {
        let raw = RawQuery::from_pairs([("passengers", "many"), ("scales", "-1")]);
        let criteria = normalize(&raw);
        assert!(criteria.passengers.is_none());
        assert!(criteria.scales.is_none());
    }

    #[test]
    fn zero_scales_is_a_filter() {
        let raw = RawQuery::from_pairs([("scales", "0")]);
        assert_eq!(normalize(&raw).scales, Some(0));
    }

    #[test]
    fn normalize_is_pure() {
        let raw = RawQuery::from_pairs([("origin", "Cali"), ("endDate", "2024-10-25")]);
        assert_eq!(normalize(&raw), normalize(&raw));
    }
}
