use stormcast_common::{WeatherName, WorldName};

use crate::weather::WeatherFault;

/// Errors from registering or starting weathers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherError {
    #[error("weather {name} is already registered")]
    AlreadyRegistered { name: WeatherName },
    #[error("weather {name} could not be constructed for world {world}: {source}")]
    ConstructionFailed {
        name: WeatherName,
        world: WorldName,
        #[source]
        source: WeatherFault,
    },
    #[error("weather {name} not found")]
    NotFound { name: WeatherName },
    #[error("weather {name} not allowed in {world}")]
    NotAllowed { name: WeatherName, world: WorldName },
}
