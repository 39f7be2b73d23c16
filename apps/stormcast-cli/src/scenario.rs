//! Scenario files: which weathers to register and which starts to run.
//!
//! ```yaml
//! weathers:
//!   - name: rain
//!     worlds: [world1, world2]
//!   - name: storm
//!     worlds: [world1]
//!     conflicts_with: [rain]
//! steps:
//!   - start: { weather: rain, worlds: [world1, world2] }
//!   - force: { weather: storm, worlds: [world1] }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stormcast_common::{WeatherName, WorldName};

/// Errors from loading a scenario file.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub weathers: Vec<WeatherDecl>,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

/// A weather to register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherDecl {
    pub name: WeatherName,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub worlds: Vec<WorldName>,
    #[serde(default)]
    pub conflicts_with: Vec<WeatherName>,
    /// Worlds on which building the weather should fail.
    #[serde(default)]
    pub fail_on: Vec<WorldName>,
}

fn default_kind() -> String {
    "scripted".to_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Checked start.
    Start(StartStep),
    /// Start ignoring conflicts.
    Force(StartStep),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StartStep {
    pub weather: WeatherName,
    pub worlds: Vec<WorldName>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ScenarioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Two weathers on two worlds, one declaring a conflict with the other.
    pub fn demo() -> Self {
        let worlds = |names: &[&str]| names.iter().copied().map(WorldName::from).collect::<Vec<_>>();
        let decl = |name: &str, on: &[&str], conflicts_with: &[&str]| WeatherDecl {
            name: name.into(),
            kind: default_kind(),
            worlds: worlds(on),
            conflicts_with: conflicts_with.iter().copied().map(WeatherName::from).collect(),
            fail_on: Vec::new(),
        };
        let step = |name: &str, on: &[&str]| StartStep {
            weather: name.into(),
            worlds: worlds(on),
        };

        Self {
            weathers: vec![
                decl("rain", &["world1", "world2"], &[]),
                decl("storm", &["world1"], &["rain"]),
            ],
            steps: vec![
                Step::Start(step("rain", &["world1", "world2"])),
                Step::Start(step("storm", &["world1"])),
                Step::Force(step("storm", &["world1"])),
            ],
        }
    }
}
