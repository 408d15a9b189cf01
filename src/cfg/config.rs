// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

/// Default per-command timeout enforced by the channel.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(20);
/// Default attempt budget for the readiness probe.
pub const DEFAULT_TUR_RETRIES: u32 = 5;

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Config {
    /// Runtime parameters of the transport.
    pub runtime: RuntimeConfig,
}

/// Runtime-only settings; the fixed bounds of the transport are
/// configuration, not hardcoded literals, so tests can shorten them.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RuntimeConfig {
    #[serde(rename = "CommandTimeout", with = "serde_secs")]
    /// Timeout of one synchronous exchange.
    pub command_timeout: Duration,

    #[serde(rename = "TurRetries")]
    /// Attempt budget of the TEST UNIT READY readiness probe.
    pub tur_retries: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            tur_retries: DEFAULT_TUR_RETRIES,
        }
    }
}

impl Config {
    /// Loads the configuration from YAML, validates it, and returns the
    /// ready-to-use value.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let cfg: Config =
            serde_yaml::from_str(&s).context("failed to parse config YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.runtime.command_timeout.is_zero(),
            "CommandTimeout must be > 0"
        );
        ensure!(self.runtime.tur_retries >= 1, "TurRetries must be >= 1");
        Ok(())
    }
}

/// Serde helpers for representing `Duration` as a number of seconds.
mod serde_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(d)?;
        Ok(Duration::from_secs(secs))
    }
}
