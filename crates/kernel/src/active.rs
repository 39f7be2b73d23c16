//! Per-world sets of active weather names.

use std::collections::{BTreeMap, BTreeSet};
use stormcast_common::{WeatherName, WorldName};

/// Which weathers are running on which world.
///
/// Sets only grow; nothing in the core deactivates a weather.
#[derive(Debug, Clone, Default)]
pub struct ActiveState {
    worlds: BTreeMap<WorldName, BTreeSet<WeatherName>>,
}

impl ActiveState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live set for `world`, created empty on first access.
    pub(crate) fn world_mut(&mut self, world: &str) -> &mut BTreeSet<WeatherName> {
        self.worlds.entry(WorldName::from(world)).or_default()
    }

    /// Copy of the active set for `world`.
    pub fn snapshot(&mut self, world: &str) -> BTreeSet<WeatherName> {
        self.world_mut(world).clone()
    }

    pub fn is_active(&self, name: &str, world: &str) -> bool {
        self.worlds
            .get(world)
            .is_some_and(|active| active.contains(name))
    }

    /// Mark `name` active on `world`. Returns false if it already was.
    pub fn activate(&mut self, name: impl Into<WeatherName>, world: &str) -> bool {
        self.world_mut(world).insert(name.into())
    }

    /// Every world touched so far, including ones with nothing active.
    pub fn iter(&self) -> impl Iterator<Item = (&WorldName, &BTreeSet<WeatherName>)> {
        self.worlds.iter()
    }
}
