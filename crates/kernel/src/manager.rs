//! Thread-safe facade over the weather registry and active state.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};
use stormcast_common::{NamedWorld, WeatherName, WorldName};

use crate::coordinator::WeatherState;
use crate::error::WeatherError;
use crate::snapshot::ManagerSnapshot;
use crate::weather::WeatherType;

/// The weather manager.
///
/// One lock guards registration and activation, and every operation holds it
/// for its whole duration, so a checked start decides and mutates as one step.
/// Share it between threads with an `Arc`.
#[derive(Debug, Default)]
pub struct WeatherManager {
    state: Mutex<WeatherState>,
}

impl WeatherManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// `start()` runs before a weather is marked active, so state is
    /// consistent even if a weather panicked while the lock was held.
    fn lock(&self) -> MutexGuard<'_, WeatherState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("weather state lock poisoned by a panicking weather, recovering");
            self.state.clear_poison();
            poisoned.into_inner()
        })
    }

    /// Register a weather type under `name` for the given worlds.
    pub fn register_weather<W>(
        &self,
        kind: impl WeatherType + 'static,
        name: impl Into<WeatherName>,
        allowed_worlds: impl IntoIterator<Item = W>,
    ) -> Result<(), WeatherError>
    where
        W: Into<WorldName>,
    {
        self.register_weather_shared(Arc::new(kind), name, allowed_worlds)
    }

    /// Like [`register_weather`](Self::register_weather) for a descriptor that is already shared.
    pub fn register_weather_shared<W>(
        &self,
        kind: Arc<dyn WeatherType>,
        name: impl Into<WeatherName>,
        allowed_worlds: impl IntoIterator<Item = W>,
    ) -> Result<(), WeatherError>
    where
        W: Into<WorldName>,
    {
        self.lock().registry_mut().register(
            kind,
            name.into(),
            allowed_worlds.into_iter().map(Into::into),
        )
    }

    pub fn is_weather_registered(&self, name: &str) -> bool {
        self.lock().registry().is_registered(name)
    }

    pub fn is_conflicting_weather(&self, w1: &str, w2: &str) -> bool {
        self.lock().conflicts(w1, w2)
    }

    /// Copy of the weathers active on `world`.
    pub fn active_weathers<N: NamedWorld + ?Sized>(&self, world: &N) -> BTreeSet<WeatherName> {
        self.lock().active_weathers(world.world_name())
    }

    pub fn is_weather_active<N: NamedWorld + ?Sized>(&self, name: &str, world: &N) -> bool {
        self.lock().active().is_active(name, world.world_name())
    }

    pub fn allowed_worlds(&self, name: &str) -> Option<BTreeSet<WorldName>> {
        self.lock().registry().allowed_worlds(name)
    }

    pub fn registered_weathers(&self) -> Vec<WeatherName> {
        self.lock().registry().names().cloned().collect()
    }

    /// Start `name` on `world` unless a conflicting weather is active there.
    ///
    /// Returns true exactly when the weather ended up targeted on `world`.
    pub fn start_weather<N: NamedWorld + ?Sized>(
        &self,
        name: &str,
        world: &N,
    ) -> Result<bool, WeatherError> {
        self.lock().start_checked_single(name, world.world_name())
    }

    /// Start `name` on every world without a conflicting active weather.
    ///
    /// Returns the worlds it was started on.
    pub fn start_weather_in<W>(
        &self,
        name: &str,
        worlds: impl IntoIterator<Item = W>,
    ) -> Result<BTreeSet<WorldName>, WeatherError>
    where
        W: Into<WorldName>,
    {
        self.lock().start_checked(name, worlds)
    }

    /// Start `name` on `world`, ignoring conflicts.
    pub fn start_weather_force<N: NamedWorld + ?Sized>(
        &self,
        name: &str,
        world: &N,
    ) -> Result<(), WeatherError> {
        self.lock().start_force(name, [world.world_name()])
    }

    /// Start `name` on each world in order, ignoring conflicts.
    pub fn start_weather_force_in<W>(
        &self,
        name: &str,
        worlds: impl IntoIterator<Item = W>,
    ) -> Result<(), WeatherError>
    where
        W: AsRef<str>,
    {
        self.lock().start_force(name, worlds)
    }

    pub fn snapshot(&self) -> ManagerSnapshot {
        ManagerSnapshot::capture(&self.lock())
    }
}
