//! Domain types for the flight search server.
//!
//! This module contains the core domain model types that represent
//! validated catalog data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod category;
mod city;
mod error;
mod flight;
mod price;

pub use category::{CategoryId, CategoryProfile, CategoryTable, InvalidCategoryId};
pub use city::{City, InvalidCity};
pub use error::DomainError;
pub use flight::FlightRecord;
pub use price::{InvalidPrice, Price};
