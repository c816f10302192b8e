//! Terminal rental-property console backed by flat CSV files.

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod records;
pub mod screens;
pub mod store;
pub mod telemetry;
pub mod workflows;
