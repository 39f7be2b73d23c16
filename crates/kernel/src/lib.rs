//! Weather kernel: registry of weather types, per-world active sets,
//! conflict resolution and start coordination.
//!
//! # Invariants
//! - A weather name is registered at most once.
//! - A weather has an instance on a world iff that world was allowed at registration.
//! - A name is active on a world only if it is registered and allowed there.
//! - `start()` fires at most once per (weather, world) activation.
//! - All reads and writes go through one lock held by [`WeatherManager`].

pub mod active;
pub mod conflict;
pub mod coordinator;
pub mod error;
pub mod manager;
pub mod registry;
pub mod snapshot;
pub mod weather;

#[cfg(test)]
mod testing;

pub use active::ActiveState;
pub use coordinator::WeatherState;
pub use error::WeatherError;
pub use manager::WeatherManager;
pub use registry::{Registry, WeatherDefinition};
pub use snapshot::{ManagerSnapshot, WeatherSummary};
pub use stormcast_common::{NamedWorld, WeatherName, WorldName};
pub use weather::{DefaultType, Weather, WeatherFault, WeatherType};
