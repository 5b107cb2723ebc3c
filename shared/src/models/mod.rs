//! Domain models for the Farm Weather Advisory Platform

mod tip;
mod weather;
pub mod weather_code;

pub use tip::*;
pub use weather::*;
pub use weather_code::weather_code_for_icon;
