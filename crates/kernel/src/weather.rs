//! Capabilities a weather type supplies to the manager.

use std::any;
use std::fmt;
use std::marker::PhantomData;
use stormcast_common::WorldName;

/// Failure reported by a weather's own code: construction or conflict evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct WeatherFault {
    message: String,
}

impl WeatherFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A weather bound to one world.
///
/// Instances are created once at registration and live as long as the manager.
pub trait Weather: Send {
    /// Begin the effect on this instance's world.
    ///
    /// The manager calls this at most once per activation.
    fn start(&mut self);

    /// Whether this weather refuses to run alongside `other` on the same world.
    fn conflicts(&self, other: &str) -> Result<bool, WeatherFault>;
}

/// Type descriptor: builds one [`Weather`] per allowed world.
pub trait WeatherType: Send + Sync {
    /// Human-readable kind, used in logs and snapshots.
    fn kind(&self) -> &str;

    fn instantiate(&self, world: &WorldName) -> Result<Box<dyn Weather>, WeatherFault>;
}

/// Descriptor for weathers that are built with [`Default`]. Never fails.
pub struct DefaultType<W> {
    _weather: PhantomData<fn() -> W>,
}

impl<W> DefaultType<W> {
    pub fn new() -> Self {
        Self {
            _weather: PhantomData,
        }
    }
}

impl<W> Default for DefaultType<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> fmt::Debug for DefaultType<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DefaultType")
            .field(&any::type_name::<W>())
            .finish()
    }
}

impl<W: Weather + Default + 'static> WeatherType for DefaultType<W> {
    fn kind(&self) -> &str {
        any::type_name::<W>()
    }

    fn instantiate(&self, _world: &WorldName) -> Result<Box<dyn Weather>, WeatherFault> {
        Ok(Box::new(W::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Drizzle {
        started: bool,
    }

    impl Weather for Drizzle {
        fn start(&mut self) {
            self.started = true;
        }

        fn conflicts(&self, other: &str) -> Result<bool, WeatherFault> {
            Ok(other == "heatwave")
        }
    }

    #[test]
    fn default_type_builds_fresh_instances() {
        let ty = DefaultType::<Drizzle>::new();
        let mut a = ty.instantiate(&WorldName::new("world")).unwrap();
        a.start();
        assert!(a.conflicts("heatwave").unwrap());
        assert!(!a.conflicts("rain").unwrap());
        assert!(ty.kind().ends_with("Drizzle"));
    }

    #[test]
    fn fault_displays_its_message() {
        let fault = WeatherFault::new("no sky");
        assert_eq!(fault.to_string(), "no sky");
        assert_eq!(fault.message(), "no sky");
    }
}
