//! Start coordination: conflict filtering and activation across worlds.

use std::collections::BTreeSet;
use stormcast_common::{WeatherName, WorldName};

use crate::active::ActiveState;
use crate::conflict;
use crate::error::WeatherError;
use crate::registry::Registry;

/// Registry plus active sets. Everything the manager's lock protects.
#[derive(Debug, Default)]
pub struct WeatherState {
    pub(crate) registry: Registry,
    pub(crate) active: ActiveState,
}

impl WeatherState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn active(&self) -> &ActiveState {
        &self.active
    }

    /// Copy of the names active on `world`.
    pub fn active_weathers(&mut self, world: &str) -> BTreeSet<WeatherName> {
        self.active.snapshot(world)
    }

    pub fn conflicts(&self, w1: &str, w2: &str) -> bool {
        conflict::conflicts(&self.registry, w1, w2)
    }

    /// Start `name` on every world in `worlds` that has no conflicting weather active.
    ///
    /// Returns the worlds activation was attempted on. Worlds are processed in
    /// sorted order; duplicates collapse.
    pub fn start_checked<I>(
        &mut self,
        name: &str,
        worlds: I,
    ) -> Result<BTreeSet<WorldName>, WeatherError>
    where
        I: IntoIterator,
        I::Item: Into<WorldName>,
    {
        let _span = tracing::info_span!("start_checked", weather = name).entered();

        if !self.registry.is_registered(name) {
            return Err(WeatherError::NotFound { name: name.into() });
        }

        let mut targets: BTreeSet<WorldName> = worlds.into_iter().map(Into::into).collect();
        targets.retain(|world| {
            let blocker = self
                .active
                .world_mut(world.as_str())
                .iter()
                .find(|active| conflict::conflicts(&self.registry, name, active.as_str()));
            match blocker {
                Some(active) => {
                    tracing::debug!(
                        weather = name,
                        %world,
                        blocked_by = %active,
                        "conflicting weather active, skipping world"
                    );
                    false
                }
                None => true,
            }
        });

        self.start_unchecked(name, &targets)?;
        Ok(targets)
    }

    /// Checked start on one world. True exactly when the weather was started there.
    pub fn start_checked_single(&mut self, name: &str, world: &str) -> Result<bool, WeatherError> {
        let started = self.start_checked(name, [world])?;
        Ok(started.contains(world))
    }

    /// Start without any conflict checking.
    pub fn start_force<I>(&mut self, name: &str, worlds: I) -> Result<(), WeatherError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let _span = tracing::info_span!("start_force", weather = name).entered();
        self.start_unchecked(name, worlds)
    }

    /// Activate `name` on each world in order.
    ///
    /// An unknown name fails before anything is touched. A disallowed world
    /// fails mid-way; worlds before it stay started.
    fn start_unchecked<I>(&mut self, name: &str, worlds: I) -> Result<(), WeatherError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let Some(def) = self.registry.get_mut(name) else {
            return Err(WeatherError::NotFound { name: name.into() });
        };

        for world in worlds {
            let world = world.as_ref();
            let Some(instance) = def.instance_mut(world) else {
                return Err(WeatherError::NotAllowed {
                    name: name.into(),
                    world: world.into(),
                });
            };
            if self.active.is_active(name, world) {
                tracing::debug!(weather = name, world, "already active");
                continue;
            }
            instance.start();
            self.active.activate(name, world);
            tracing::info!(weather = name, world, "weather started");
        }
        Ok(())
    }
}
