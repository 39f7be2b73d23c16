//! Test doubles shared by the kernel's unit tests.

use std::sync::{Arc, Mutex};
use stormcast_common::WorldName;

use crate::weather::{Weather, WeatherFault, WeatherType};

/// Log of `(weather, world)` pairs in the order `start()` was called.
#[derive(Debug, Clone, Default)]
pub struct StartLog(Arc<Mutex<Vec<(String, String)>>>);

impl StartLog {
    pub fn entries(&self) -> Vec<(String, String)> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, weather: &str, world: &str) -> usize {
        self.entries()
            .iter()
            .filter(|(w, wd)| w == weather && wd == world)
            .count()
    }

    fn push(&self, weather: &str, world: &str) {
        self.0
            .lock()
            .unwrap()
            .push((weather.to_owned(), world.to_owned()));
    }
}

/// Weather type whose instances record their starts and declare a fixed conflict list.
pub struct Probe {
    pub name: &'static str,
    pub conflicts_with: Vec<&'static str>,
    pub log: StartLog,
}

impl Probe {
    pub fn new(name: &'static str, log: &StartLog) -> Self {
        Self {
            name,
            conflicts_with: Vec::new(),
            log: log.clone(),
        }
    }

    pub fn conflicting_with(mut self, other: &'static str) -> Self {
        self.conflicts_with.push(other);
        self
    }
}

impl WeatherType for Probe {
    fn kind(&self) -> &str {
        "probe"
    }

    fn instantiate(&self, world: &WorldName) -> Result<Box<dyn Weather>, WeatherFault> {
        Ok(Box::new(ProbeInstance {
            name: self.name,
            world: world.clone(),
            conflicts_with: self.conflicts_with.clone(),
            log: self.log.clone(),
        }))
    }
}

struct ProbeInstance {
    name: &'static str,
    world: WorldName,
    conflicts_with: Vec<&'static str>,
    log: StartLog,
}

impl Weather for ProbeInstance {
    fn start(&mut self) {
        self.log.push(self.name, self.world.as_str());
    }

    fn conflicts(&self, other: &str) -> Result<bool, WeatherFault> {
        Ok(self.conflicts_with.iter().any(|c| *c == other))
    }
}
