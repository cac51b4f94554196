//! Named leg registry.
//!
//! Holds validated leg configurations behind a lock so they can be shared
//! across threads.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult, Validate};
use crate::leg::LegConfig;

/// Registry of leg configurations keyed by name.
///
/// # Example
///
/// ```rust
/// use cadence_config::LegRegistry;
///
/// let registry = LegRegistry::from_toml(r#"
///     [[legs]]
///     name = "FIXED"
///     effective = "2025-01-15"
///     termination = "2030-01-15"
///     tenor = { frequency = "Annual" }
///
///     [[legs]]
///     name = "FLOAT"
///     effective = "2025-01-15"
///     termination = "2030-01-15"
///     tenor = { months = 3 }
///     day_count = "Actual360"
/// "#).unwrap();
///
/// assert_eq!(registry.names().unwrap(), vec!["FIXED", "FLOAT"]);
/// assert_eq!(registry.get("FLOAT").unwrap().schedule().unwrap().len(), 21);
/// ```
#[derive(Debug, Default)]
pub struct LegRegistry {
    legs: RwLock<HashMap<String, LegConfig>>,
}

#[derive(Deserialize)]
struct LegDocument {
    #[serde(default)]
    legs: Vec<LegConfig>,
}

impl LegRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a TOML document with a `[[legs]]` array.
    pub fn from_toml(toml: &str) -> ConfigResult<Self> {
        let document: LegDocument = toml::from_str(toml)?;
        let registry = Self::new();
        for leg in document.legs {
            registry.register(leg)?;
        }
        Ok(registry)
    }

    /// Registers a leg, replacing any leg with the same name.
    pub fn register(&self, config: LegConfig) -> ConfigResult<()> {
        config.validate_or_error()?;

        let mut legs = self
            .legs
            .write()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))?;

        if legs.contains_key(&config.name) {
            log::warn!("replacing leg configuration '{}'", config.name);
        } else {
            log::debug!("registered leg configuration '{}'", config.name);
        }

        legs.insert(config.name.clone(), config);
        Ok(())
    }

    /// Gets a leg by name.
    pub fn get(&self, name: &str) -> ConfigResult<LegConfig> {
        let legs = self
            .legs
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))?;

        legs.get(name).cloned().ok_or_else(|| ConfigError::NotFound {
            key: name.to_string(),
        })
    }

    /// Removes a leg, returning whether it existed.
    pub fn remove(&self, name: &str) -> ConfigResult<bool> {
        let mut legs = self
            .legs
            .write()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))?;

        Ok(legs.remove(name).is_some())
    }

    /// Sorted leg names.
    pub fn names(&self) -> ConfigResult<Vec<String>> {
        let legs = self
            .legs
            .read()
            .map_err(|e| ConfigError::Conflict(format!("Lock error: {}", e)))?;

        let mut names: Vec<String> = legs.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::types::Date;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let registry = LegRegistry::new();
        registry
            .register(LegConfig::annual_bond("BOND", ymd(2025, 1, 15), ymd(2030, 1, 15)))
            .unwrap();

        let leg = registry.get("BOND").unwrap();
        assert_eq!(leg.termination, ymd(2030, 1, 15));
        assert_eq!(registry.names().unwrap(), vec!["BOND".to_string()]);
    }

    #[test]
    fn test_not_found() {
        let registry = LegRegistry::new();
        assert!(matches!(registry.get("MISSING"), Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_invalid_leg_rejected() {
        let registry = LegRegistry::new();
        let leg = LegConfig::new("BAD", ymd(2030, 1, 15), ymd(2025, 1, 15));

        assert!(registry.register(leg).is_err());
        assert!(registry.names().unwrap().is_empty());
    }

    #[test]
    fn test_replace_and_remove() {
        let registry = LegRegistry::new();
        let leg = LegConfig::quarterly_swap("SWAP", ymd(2025, 3, 31), ymd(2026, 3, 31));
        registry.register(leg.clone()).unwrap();
        registry
            .register(leg.with_description("replaced"))
            .unwrap();

        assert_eq!(registry.get("SWAP").unwrap().description.as_deref(), Some("replaced"));
        assert!(registry.remove("SWAP").unwrap());
        assert!(!registry.remove("SWAP").unwrap());
    }

    #[test]
    fn test_from_toml_rejects_bad_document() {
        let result = LegRegistry::from_toml("[[legs]]\nname = \"NO DATES\"\n");
        assert!(matches!(result, Err(ConfigError::Deserialization(_))));
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = std::sync::Arc::new(LegRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry
                        .register(LegConfig::new(format!("LEG{i}"), ymd(2025, 1, 1), ymd(2026, 1, 1)))
                        .unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.names().unwrap().len(), 4);
    }
}
