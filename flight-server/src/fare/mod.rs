//! Fare resolution.
//!
//! Turns a flight and a fare category into a price, and tracks which
//! category a flight view currently shows.

mod error;
mod resolver;
mod selection;

pub use error::FareError;
pub use resolver::{FareResolver, PricedCategory};
pub use selection::{CategoryChooser, ChooserOutcome, ChooserState, FareSelection};
