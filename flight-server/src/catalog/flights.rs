//! The flight catalog.

use std::path::Path;

use tracing::warn;

use crate::domain::{CategoryId, CategoryTable, FlightRecord};

use super::error::CatalogError;

/// Catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../../data/flights.json");

/// A flight that lacks prices for some categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceGap {
    /// Position of the flight in the catalog.
    pub index: usize,
    /// Categories with no price, in table order.
    pub missing: Vec<CategoryId>,
}

/// Read-only, ordered collection of flights.
///
/// Catalog order is the order results are presented in.
#[derive(Debug, Clone, Default)]
pub struct FlightCatalog {
    flights: Vec<FlightRecord>,
}

impl FlightCatalog {
    /// Create a catalog from records in presentation order.
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        Self { flights }
    }

    /// Load the catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a JSON array of flight records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let flights: Vec<FlightRecord> = serde_json::from_str(json)?;
        Ok(Self::new(flights))
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// All flights in catalog order.
    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    /// The flight at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&FlightRecord> {
        self.flights.get(index)
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Find flights whose price mapping does not cover every category.
    ///
    /// Incomplete flights stay in the catalog; each gap is logged so the
    /// data can be fixed, and price resolution fails for that flight alone.
    pub fn price_gaps(&self, table: &CategoryTable) -> Vec<PriceGap> {
        self.flights
            .iter()
            .enumerate()
            .filter_map(|(index, flight)| {
                let missing = flight.missing_categories(table);
                if missing.is_empty() {
                    return None;
                }

                warn!(
                    index,
                    origin = %flight.origin(),
                    destination = %flight.destination(),
                    date = %flight.date(),
                    missing = ?missing,
                    "flight is missing category prices"
                );

                Some(PriceGap {
                    index,
                    missing: missing.into_iter().cloned().collect(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_FLIGHTS: &str = r#"[
        {"origin":"Medellín","destination":"Bogotá","date":"2024-10-19","time":"19:20","scales":2,
         "prices":{"economy":5,"business":8,"first":10}},
        {"origin":"Cali","destination":"Bogotá","date":"2024-10-25","time":"21:30","scales":1,
         "prices":{"economy":7}}
    ]"#;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = FlightCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());

        let first = catalog.get(0).unwrap();
        assert_eq!(first.origin().as_str(), "Medellín");
        assert_eq!(first.destination().as_str(), "Bogotá");
        assert_eq!(first.scales(), 2);
    }

    #[test]
    fn builtin_catalog_is_complete() {
        let catalog = FlightCatalog::builtin().unwrap();
        let table = CategoryTable::standard();
        assert!(catalog.price_gaps(&table).is_empty());
    }

    #[test]
    fn from_json_preserves_order() {
        let catalog = FlightCatalog::from_json(TWO_FLIGHTS).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.flights()[0].origin().as_str(), "Medellín");
        assert_eq!(catalog.flights()[1].origin().as_str(), "Cali");
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn price_gaps_flag_incomplete_flights() {
        let catalog = FlightCatalog::from_json(TWO_FLIGHTS).unwrap();
        let table = CategoryTable::standard();

        let gaps = catalog.price_gaps(&table);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].index, 1);
        let missing: Vec<&str> = gaps[0].missing.iter().map(|c| c.as_str()).collect();
        assert_eq!(missing, vec!["business", "first"]);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            FlightCatalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            FlightCatalog::from_json(r#"[{"origin":"A"}]"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flights.json");
        std::fs::write(&path, TWO_FLIGHTS).unwrap();

        let catalog = FlightCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = FlightCatalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn empty_catalog() {
        let catalog = FlightCatalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
