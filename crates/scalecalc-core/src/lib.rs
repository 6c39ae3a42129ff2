//! Scalecalc Core Library
//!
//! Availability matching and selection state for the subject scaling
//! calculator.

pub mod availability;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod logging;
pub mod scaling;
pub mod selection;
pub mod session;
pub mod subjects;
pub mod years;
