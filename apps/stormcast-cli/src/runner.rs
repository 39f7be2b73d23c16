//! Drives a [`WeatherManager`] through a scenario and records what happened.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use stormcast_common::{WeatherName, WorldName};
use stormcast_kernel::{ManagerSnapshot, WeatherManager};

use crate::scenario::{Scenario, Step};
use crate::scripted::ScriptedType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Checked,
    Force,
}

/// Result of one scenario operation. Errors are recorded, not fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Registered,
    Started { worlds: BTreeSet<WorldName> },
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationReport {
    pub weather: WeatherName,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub mode: Mode,
    pub weather: WeatherName,
    pub requested: Vec<WorldName>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub registrations: Vec<RegistrationReport>,
    pub steps: Vec<StepReport>,
    pub state: ManagerSnapshot,
}

pub fn run(scenario: &Scenario, manager: &WeatherManager) -> Report {
    let registrations = scenario
        .weathers
        .iter()
        .map(|decl| {
            let outcome = match manager.register_weather(
                ScriptedType::from(decl),
                decl.name.clone(),
                decl.worlds.iter(),
            ) {
                Ok(()) => Outcome::Registered,
                Err(err) => Outcome::Failed {
                    error: err.to_string(),
                },
            };
            RegistrationReport {
                weather: decl.name.clone(),
                outcome,
            }
        })
        .collect();

    let steps = scenario
        .steps
        .iter()
        .map(|step| {
            let (mode, start) = match step {
                Step::Start(start) => (Mode::Checked, start),
                Step::Force(start) => (Mode::Force, start),
            };
            let name = start.weather.as_str();
            let result = match mode {
                Mode::Checked => manager.start_weather_in(name, start.worlds.iter()),
                // force targets every requested world
                Mode::Force => manager
                    .start_weather_force_in(name, &start.worlds)
                    .map(|()| start.worlds.iter().cloned().collect()),
            };
            let outcome = match result {
                Ok(worlds) => Outcome::Started { worlds },
                Err(err) => Outcome::Failed {
                    error: err.to_string(),
                },
            };
            StepReport {
                mode,
                weather: start.weather.clone(),
                requested: start.worlds.clone(),
                outcome,
            }
        })
        .collect();

    Report {
        registrations,
        steps,
        state: manager.snapshot(),
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Registered => f.write_str("registered"),
            Outcome::Started { worlds } if worlds.is_empty() => f.write_str("started on no worlds"),
            Outcome::Started { worlds } => {
                let names: Vec<&str> = worlds.iter().map(|w| w.as_str()).collect();
                write!(f, "started on {}", names.join(", "))
            }
            Outcome::Failed { error } => write!(f, "failed: {error}"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for reg in &self.registrations {
            writeln!(f, "register {}: {}", reg.weather, reg.outcome)?;
        }
        for step in &self.steps {
            let verb = match step.mode {
                Mode::Checked => "start",
                Mode::Force => "force",
            };
            writeln!(f, "{verb} {}: {}", step.weather, step.outcome)?;
        }
        writeln!(f, "active:")?;
        for (world, names) in &self.state.active {
            let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
            writeln!(f, "  {world}: [{}]", names.join(", "))?;
        }
        Ok(())
    }
}
