//! City identifier type.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid city name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// A city served by the catalog.
///
/// The name keeps its original casing for display, while equality and
/// hashing use a lower-cased key so that "Bogotá" and "BOGOTÁ" are the
/// same city.
///
/// # Examples
///
/// ```
/// use flight_server::domain::City;
///
/// let city = City::parse("Medellín").unwrap();
/// assert_eq!(city.as_str(), "Medellín");
/// assert_eq!(city.key(), "medellín");
/// assert_eq!(city, City::parse("MEDELLÍN").unwrap());
///
/// // Blank names are rejected
/// assert!(City::parse("   ").is_err());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct City {
    name: String,
    key: String,
}

impl City {
    /// Parse a city from its display name.
    ///
    /// Surrounding whitespace is trimmed; the remainder must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        let name = s.trim();

        if name.is_empty() {
            return Err(InvalidCity {
                reason: "must not be empty",
            });
        }

        if name.chars().any(char::is_control) {
            return Err(InvalidCity {
                reason: "must not contain control characters",
            });
        }

        Ok(City {
            name: name.to_string(),
            key: name.to_lowercase(),
        })
    }

    /// Returns the display name with its original casing.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns the lower-cased comparison key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.name)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for City {
    type Error = InvalidCity;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        City::parse(&value)
    }
}

impl From<City> for String {
    fn from(city: City) -> Self {
        city.name
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The key never depends on the casing of the input
        #[test]
        fn key_ignores_ascii_case(s in "[A-Za-z][A-Za-z ]{0,20}") {
            let lower = City::parse(&s.to_lowercase()).unwrap();
            let upper = City::parse(&s.to_uppercase()).unwrap();
            prop_assert_eq!(lower, upper);
        }

        /// Display name round-trips for trimmed input
        #[test]
        fn roundtrip(s in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]") {
            let city = City::parse(&s).unwrap();
            prop_assert_eq!(city.as_str(), s.as_str());
        }
    }
}
