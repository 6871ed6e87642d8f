//! Flight search server.
//!
//! Searches a static catalog of flights by origin, destination, dates and
//! number of scales, one way or round trip, and prices each result in a
//! selectable fare category.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod fare;
pub mod search;
pub mod web;
