//! Static flight catalog.
//!
//! The catalog is loaded once at startup, either from the copy embedded in
//! the binary or from a JSON file, and is read-only afterwards.

mod error;
mod flights;

pub use error::CatalogError;
pub use flights::{FlightCatalog, PriceGap};
