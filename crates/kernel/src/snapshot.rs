//! Read-only, serializable view of the manager's state.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use stormcast_common::{WeatherName, WorldName};

use crate::coordinator::WeatherState;

/// One registered weather as seen from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSummary {
    pub name: WeatherName,
    pub kind: String,
    pub worlds: BTreeSet<WorldName>,
}

/// Registered weathers plus the active set of every world seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerSnapshot {
    pub weathers: Vec<WeatherSummary>,
    pub active: BTreeMap<WorldName, BTreeSet<WeatherName>>,
}

impl ManagerSnapshot {
    pub fn capture(state: &WeatherState) -> Self {
        let weathers = state
            .registry()
            .iter()
            .map(|(name, def)| WeatherSummary {
                name: name.clone(),
                kind: def.kind().to_owned(),
                worlds: def.allowed_worlds().cloned().collect(),
            })
            .collect();
        let active = state
            .active()
            .iter()
            .map(|(world, names)| (world.clone(), names.clone()))
            .collect();
        Self { weathers, active }
    }

    pub fn weather(&self, name: &str) -> Option<&WeatherSummary> {
        self.weathers.iter().find(|w| w.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Probe, StartLog};
    use std::sync::Arc;

    #[test]
    fn capture_lists_weathers_and_active_sets() {
        let log = StartLog::default();
        let mut state = WeatherState::new();
        state
            .registry_mut()
            .register(
                Arc::new(Probe::new("rain", &log)),
                "rain".into(),
                ["world2", "world1"].map(WorldName::from),
            )
            .unwrap();
        state.start_checked("rain", ["world1"]).unwrap();

        let snap = ManagerSnapshot::capture(&state);
        let rain = snap.weather("rain").unwrap();
        assert_eq!(rain.kind, "probe");
        assert_eq!(rain.worlds.len(), 2);
        assert!(snap.active["world1"].contains("rain"));
        assert!(!snap.active.contains_key("world2"));
    }

    #[test]
    fn snapshot_serializes_names_as_strings() {
        let mut snap = ManagerSnapshot::default();
        snap.active.insert(
            "world1".into(),
            BTreeSet::from([WeatherName::new("rain")]),
        );
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["active"]["world1"][0], "rain");
        let back: ManagerSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }
}
