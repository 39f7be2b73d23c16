//! Registered weathers and their per-world instances.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;
use stormcast_common::{WeatherName, WorldName};

use crate::error::WeatherError;
use crate::weather::{Weather, WeatherType};

/// A registered weather: its type descriptor plus one instance per allowed world.
pub struct WeatherDefinition {
    kind: Arc<dyn WeatherType>,
    instances: BTreeMap<WorldName, Box<dyn Weather>>,
}

impl WeatherDefinition {
    pub fn kind(&self) -> &str {
        self.kind.kind()
    }

    pub fn is_allowed(&self, world: &str) -> bool {
        self.instances.contains_key(world)
    }

    pub fn allowed_worlds(&self) -> impl Iterator<Item = &WorldName> {
        self.instances.keys()
    }

    pub(crate) fn instance_mut(&mut self, world: &str) -> Option<&mut (dyn Weather + 'static)> {
        self.instances.get_mut(world).map(|w| &mut **w)
    }

    pub fn instances(&self) -> impl Iterator<Item = (&WorldName, &dyn Weather)> {
        self.instances.iter().map(|(world, w)| (world, &**w))
    }
}

impl fmt::Debug for WeatherDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherDefinition")
            .field("kind", &self.kind())
            .field("worlds", &self.instances.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Name -> definition map. Names are unique for the registry's lifetime.
#[derive(Debug, Default)]
pub struct Registry {
    weathers: BTreeMap<WeatherName, WeatherDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name`, building one instance per distinct world.
    ///
    /// Nothing is installed unless every instance was built.
    pub fn register(
        &mut self,
        kind: Arc<dyn WeatherType>,
        name: WeatherName,
        allowed_worlds: impl IntoIterator<Item = WorldName>,
    ) -> Result<(), WeatherError> {
        if self.weathers.contains_key(&name) {
            return Err(WeatherError::AlreadyRegistered { name });
        }

        let mut instances = BTreeMap::new();
        for world in allowed_worlds {
            if instances.contains_key(&world) {
                continue;
            }
            match kind.instantiate(&world) {
                Ok(instance) => {
                    instances.insert(world, instance);
                }
                Err(source) => {
                    return Err(WeatherError::ConstructionFailed {
                        name,
                        world,
                        source,
                    });
                }
            }
        }

        tracing::debug!(
            weather = %name,
            kind = kind.kind(),
            worlds = instances.len(),
            "registered weather"
        );
        self.weathers
            .insert(name, WeatherDefinition { kind, instances });
        Ok(())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.weathers.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&WeatherDefinition> {
        self.weathers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut WeatherDefinition> {
        self.weathers.get_mut(name)
    }

    pub fn allowed_worlds(&self, name: &str) -> Option<BTreeSet<WorldName>> {
        self.get(name)
            .map(|def| def.allowed_worlds().cloned().collect())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &WeatherName> {
        self.weathers.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WeatherName, &WeatherDefinition)> {
        self.weathers.iter()
    }

    pub fn len(&self) -> usize {
        self.weathers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weathers.is_empty()
    }
}
