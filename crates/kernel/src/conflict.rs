//! Pairwise conflict checks between registered weathers.

use crate::registry::{Registry, WeatherDefinition};

/// Whether `w1` and `w2` may not be started together on one world.
///
/// Either side declaring the conflict is enough, so the answer is the same
/// for `(w1, w2)` and `(w2, w1)`. Unregistered names never conflict.
pub fn conflicts(registry: &Registry, w1: &str, w2: &str) -> bool {
    let (Some(a), Some(b)) = (registry.get(w1), registry.get(w2)) else {
        return false;
    };
    declares_conflict(w1, a, w2) || declares_conflict(w2, b, w1)
}

/// True if any instance of `def` reports a conflict with `other`.
///
/// A fault from the predicate counts as "no conflict".
fn declares_conflict(name: &str, def: &WeatherDefinition, other: &str) -> bool {
    def.instances().any(|(world, instance)| match instance.conflicts(other) {
        Ok(conflicting) => conflicting,
        Err(fault) => {
            tracing::warn!(
                weather = name,
                other,
                %world,
                error = %fault,
                "conflict check failed, treating as non-conflicting"
            );
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{Weather, WeatherFault, WeatherType};
    use std::sync::Arc;
    use stormcast_common::WorldName;

    /// Declares conflicts with a fixed list, or fails on every check.
    struct Declared {
        conflicts_with: &'static [&'static str],
        broken: bool,
    }

    impl Weather for Declared {
        fn start(&mut self) {}

        fn conflicts(&self, other: &str) -> Result<bool, WeatherFault> {
            if self.broken {
                return Err(WeatherFault::new("predicate blew up"));
            }
            Ok(self.conflicts_with.iter().any(|c| *c == other))
        }
    }

    impl WeatherType for Declared {
        fn kind(&self) -> &str {
            "declared"
        }

        fn instantiate(&self, _world: &WorldName) -> Result<Box<dyn Weather>, WeatherFault> {
            Ok(Box::new(Declared {
                conflicts_with: self.conflicts_with,
                broken: self.broken,
            }))
        }
    }

    fn register(
        reg: &mut Registry,
        name: &str,
        conflicts_with: &'static [&'static str],
        broken: bool,
    ) {
        reg.register(
            Arc::new(Declared {
                conflicts_with,
                broken,
            }),
            name.into(),
            [WorldName::from("world1")],
        )
        .unwrap();
    }

    fn sample() -> Registry {
        let mut reg = Registry::new();
        register(&mut reg, "rain", &[], false);
        register(&mut reg, "storm", &["rain"], false);
        register(&mut reg, "snow", &["heatwave"], false);
        register(&mut reg, "heatwave", &[], false);
        register(&mut reg, "glitch", &["rain"], true);
        reg
    }

    #[test]
    fn one_sided_declaration_conflicts_both_ways() {
        let reg = sample();
        assert!(conflicts(&reg, "storm", "rain"));
        assert!(conflicts(&reg, "rain", "storm"));
        assert!(!conflicts(&reg, "rain", "snow"));
    }

    #[test]
    fn relation_is_symmetric_for_all_pairs() {
        let reg = sample();
        let names: Vec<String> = reg.names().map(|n| n.to_string()).collect();
        for a in &names {
            for b in &names {
                assert_eq!(conflicts(&reg, a, b), conflicts(&reg, b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn unregistered_names_never_conflict() {
        let reg = sample();
        assert!(!conflicts(&reg, "storm", "tornado"));
        assert!(!conflicts(&reg, "tornado", "storm"));
    }

    #[test]
    fn failing_predicate_is_treated_as_no_conflict() {
        let reg = sample();
        assert!(!conflicts(&reg, "glitch", "rain"));
        assert!(!conflicts(&reg, "rain", "glitch"));
    }

    #[test]
    fn weather_without_instances_declares_nothing() {
        let mut reg = sample();
        reg.register(
            Arc::new(Declared {
                conflicts_with: &["rain"],
                broken: false,
            }),
            "phantom".into(),
            Vec::new(),
        )
        .unwrap();
        assert!(!conflicts(&reg, "phantom", "rain"));
    }
}
