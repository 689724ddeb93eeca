//! Dashboard Configuration Module
//!
//! Timings, markup surface and formation bands loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `PETROTECH_CONFIG` environment variable (path to TOML file)
//! 2. `dashboard.toml` in the current working directory
//! 3. Built-in defaults (the stock demo values)
//!
//! The loaded config is passed explicitly to `Dashboard::new()` and the
//! polling loop; there is no global instance.

mod dashboard_config;
pub mod defaults;

pub use dashboard_config::*;
