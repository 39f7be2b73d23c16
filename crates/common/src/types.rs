use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of an independently simulated world.
///
/// The core never sees the host's world object, only this name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldName(String);

/// Unique name a weather is registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherName(String);

macro_rules! string_name {
    ($ty:ident) => {
        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $ty {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }

        impl From<String> for $ty {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&$ty> for $ty {
            fn from(name: &$ty) -> Self {
                name.clone()
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_name!(WorldName);
string_name!(WeatherName);

/// Anything that identifies a world by name.
///
/// Hosts implement this for their own world handle so it can be passed
/// straight to the weather manager.
pub trait NamedWorld {
    fn world_name(&self) -> &str;
}

impl NamedWorld for WorldName {
    fn world_name(&self) -> &str {
        self.as_str()
    }
}

impl NamedWorld for str {
    fn world_name(&self) -> &str {
        self
    }
}

impl NamedWorld for String {
    fn world_name(&self) -> &str {
        self
    }
}

impl<T: NamedWorld + ?Sized> NamedWorld for &T {
    fn world_name(&self) -> &str {
        (**self).world_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn names_borrow_as_str_for_lookups() {
        let set: BTreeSet<WorldName> = ["world2", "world1"]
            .into_iter()
            .map(WorldName::from)
            .collect();
        assert!(set.contains("world1"));
        assert_eq!(set.iter().next().unwrap(), &"world1");
    }

    #[test]
    fn names_serialize_as_plain_strings() {
        let name = WeatherName::new("rain");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"rain\"");
        let back: WeatherName = serde_json::from_str("\"rain\"").unwrap();
        assert_eq!(back, name);
    }

    struct HostWorld {
        name: String,
    }

    impl NamedWorld for HostWorld {
        fn world_name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn host_worlds_expose_their_name() {
        let w = HostWorld {
            name: "nether".into(),
        };
        assert_eq!(w.world_name(), "nether");
        assert_eq!((&w).world_name(), "nether");
        assert_eq!("overworld".world_name(), "overworld");
    }
}
