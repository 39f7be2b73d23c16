//! Weather type driven entirely by scenario declarations.

use std::collections::BTreeSet;
use stormcast_common::{WeatherName, WorldName};
use stormcast_kernel::{Weather, WeatherFault, WeatherType};

use crate::scenario::WeatherDecl;

/// Builds [`ScriptedWeather`] instances from a [`WeatherDecl`].
#[derive(Debug, Clone)]
pub struct ScriptedType {
    name: WeatherName,
    kind: String,
    conflicts_with: BTreeSet<WeatherName>,
    fail_on: BTreeSet<WorldName>,
}

impl From<&WeatherDecl> for ScriptedType {
    fn from(decl: &WeatherDecl) -> Self {
        Self {
            name: decl.name.clone(),
            kind: decl.kind.clone(),
            conflicts_with: decl.conflicts_with.iter().cloned().collect(),
            fail_on: decl.fail_on.iter().cloned().collect(),
        }
    }
}

impl WeatherType for ScriptedType {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn instantiate(&self, world: &WorldName) -> Result<Box<dyn Weather>, WeatherFault> {
        if self.fail_on.contains(world) {
            return Err(WeatherFault::new(format!(
                "{} refuses to build on {world}",
                self.name
            )));
        }
        Ok(Box::new(ScriptedWeather {
            name: self.name.clone(),
            world: world.clone(),
            conflicts_with: self.conflicts_with.clone(),
        }))
    }
}

/// Logs its start; conflicts with the names it was declared with.
#[derive(Debug)]
pub struct ScriptedWeather {
    name: WeatherName,
    world: WorldName,
    conflicts_with: BTreeSet<WeatherName>,
}

impl Weather for ScriptedWeather {
    fn start(&mut self) {
        tracing::info!(weather = %self.name, world = %self.world, "effect begins");
    }

    fn conflicts(&self, other: &str) -> Result<bool, WeatherFault> {
        Ok(self.conflicts_with.contains(other))
    }
}
