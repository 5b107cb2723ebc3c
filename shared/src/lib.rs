//! Shared types and models for the Farm Weather Advisory Platform
//!
//! This crate contains the farming advisory engine and the types shared
//! between the backend, the browser (via WASM), and other components.

pub mod advisory;
pub mod models;
pub mod types;
pub mod validation;

pub use advisory::{generate_farming_tips, matched_rules, MAX_TIPS};
pub use models::*;
pub use types::*;
pub use validation::*;
