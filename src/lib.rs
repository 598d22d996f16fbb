//! Booking Directory library
//!
//! Venues, artists and the shows that connect them. Exposed as a library so
//! the integration tests can drive the router and services directly.

pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod services;
pub mod state;
pub mod templates;
pub mod test_utils;
