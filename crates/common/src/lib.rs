//! Shared types for the stormcast weather core.

pub mod types;

pub use types::{NamedWorld, WeatherName, WorldName};
