//! Driver configuration from command-line flags and environment.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

/// Environment fallback for `--seed`.
pub const SEED_ENV: &str = "PIECE_SUPPLY_SEED";

/// Any non-empty value disables colored output (<https://no-color.org>).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Kind-selection seed; `None` derives one from the clock.
    pub seed: Option<u32>,
    pub color: bool,
    /// Emit one JSON line per command instead of the interactive menu.
    pub json: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            color: true,
            json: false,
        }
    }
}

impl DriverConfig {
    /// Parse `--seed <u32>`, `--no-color` and `--json`.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    config.seed = Some(parse_seed(v)?);
                }
                "--no-color" => config.color = false,
                "--json" => config.json = true,
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(config)
    }

    /// Fill unset values from the environment. Flags win over variables.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.seed.is_none() {
            if let Some(v) = lookup(SEED_ENV) {
                self.seed = Some(
                    parse_seed(&v).map_err(|e| anyhow!("{}: {}", SEED_ENV, e))?,
                );
            }
        }
        if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
        Ok(self)
    }

    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn parse_seed(v: &str) -> Result<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("invalid seed value: {}", v))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
