use std::env::{self, VarError};

use anyhow::{Context, Result};

/// Learning rate used when `LEARNING_RATE` isn't set.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

const LEARNING_RATE_VAR: &str = "LEARNING_RATE";

/// Configuration of the demo host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostConfig {
    pub learning_rate: f64,
}

impl HostConfig {
    /// Reads the configuration from the environment.
    ///
    /// # Errors
    /// If `LEARNING_RATE` is set but isn't valid unicode or doesn't parse as a float.
    pub fn from_env() -> Result<Self> {
        let value = match env::var(LEARNING_RATE_VAR) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(e) => return Err(e).context(format!("reading {LEARNING_RATE_VAR}")),
        };

        Self::parse(value.as_deref())
    }

    fn parse(learning_rate: Option<&str>) -> Result<Self> {
        let learning_rate = match learning_rate {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{LEARNING_RATE_VAR}={raw:?} is not a number"))?,
            None => DEFAULT_LEARNING_RATE,
        };

        Ok(Self { learning_rate })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = HostConfig::parse(None).unwrap();

        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
    }

    #[test]
    fn parses_the_learning_rate() {
        assert_eq!(HostConfig::parse(Some("0.05")).unwrap().learning_rate, 0.05);
        assert_eq!(HostConfig::parse(Some(" 10 ")).unwrap().learning_rate, 10.0);
        assert_eq!(HostConfig::parse(Some("-1e-3")).unwrap().learning_rate, -0.001);
    }

    #[test]
    fn rejects_garbage() {
        let err = HostConfig::parse(Some("fast")).unwrap_err();

        assert!(err.to_string().contains("LEARNING_RATE"), "got {err}");
    }
}
