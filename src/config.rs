use std::sync::OnceLock;
use thiserror::Error;

use crate::gate::{Gate, GateSecret};

pub const GATE_SECRET_VAR: &str = "PARAVELA_GATE_SECRET";

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    EmptySecret(&'static str),
    #[error("{0} is not valid unicode")]
    NotUnicode(&'static str),
    #[error("site configuration already installed")]
    AlreadyInstalled,
}

/// Server-only settings that never reach the client bundle.
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    pub gate: Gate,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError>,
    {
        let secret = match lookup(GATE_SECRET_VAR) {
            Ok(s) if s.is_empty() => return Err(ConfigError::EmptySecret(GATE_SECRET_VAR)),
            Ok(s) => Some(GateSecret::new(s)),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NotUnicode(GATE_SECRET_VAR))
            }
        };
        Ok(Self {
            gate: Gate::new(secret),
        })
    }

    pub fn install(self) -> Result<(), ConfigError> {
        CONFIG.set(self).map_err(|_| ConfigError::AlreadyInstalled)
    }

    pub fn global() -> Option<&'static SiteConfig> {
        CONFIG.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::Access;
    use std::env::VarError;

    #[test]
    fn test_secret_from_env() {
        let config = SiteConfig::from_lookup(|_| Ok("letmein".to_string())).unwrap();
        assert_eq!(config.gate.check("letmein"), Access::Granted);
        assert_eq!(config.gate.check("1234"), Access::Denied);
    }

    #[test]
    fn test_missing_secret_locks_gate() {
        let config = SiteConfig::from_lookup(|_| Err(VarError::NotPresent)).unwrap();
        assert!(config.gate.is_locked());
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        assert_eq!(
            SiteConfig::from_lookup(|_| Ok(String::new())).unwrap_err(),
            ConfigError::EmptySecret(GATE_SECRET_VAR)
        );
    }
}
