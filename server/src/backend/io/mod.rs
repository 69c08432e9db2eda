//! # IO Module
//!
//! Interface layer between the browser and the domain services.
//!
//! ## Responsibilities
//!
//! - Parse query strings and form bodies
//! - Map them onto domain commands
//! - Render HTML pages and the history chart
//! - Translate domain errors into HTTP status codes

pub mod web;

pub use web::*;
