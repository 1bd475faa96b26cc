//! Configuration for the carpark library.
//!
//! Configuration is loaded from an optional YAML file and merged with
//! environment variable overrides. The main tunable is the lot layout:
//! how many slots exist and how many of them belong to each reserved zone.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The zone layout of the parking lot.
///
/// Slots are numbered `S1..=S{total_slots}`. The first `handicap_slots`
/// of them are `HANDICAP`, the next `ev_slots` are `EV_CHARGING`, and the
/// remainder are `STANDARD`. The default layout matches the 100-slot lot
/// the system was designed around: S1-S5 handicap, S6-S10 EV charging,
/// S11-S100 standard.
///
/// # Examples
///
/// ```
/// use carpark::LotLayout;
///
/// let layout = LotLayout::default();
/// assert_eq!(layout.total_slots, 100);
/// assert_eq!(layout.handicap_slots, 5);
/// assert_eq!(layout.ev_slots, 5);
/// assert_eq!(layout.standard_slots(), 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotLayout {
    /// Total number of slots in the lot.
    pub total_slots: u32,
    /// Number of leading slots reserved for handicap vehicles.
    pub handicap_slots: u32,
    /// Number of slots after the handicap zone reserved for EV charging.
    pub ev_slots: u32,
}

impl Default for LotLayout {
    fn default() -> Self {
        Self {
            total_slots: 100,
            handicap_slots: 5,
            ev_slots: 5,
        }
    }
}

impl LotLayout {
    /// Returns the number of standard (unreserved) slots.
    #[must_use]
    pub const fn standard_slots(&self) -> u32 {
        self.total_slots - (self.handicap_slots + self.ev_slots)
    }

    /// Validates the layout.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the lot is empty or the reserved
    /// zones do not fit within the total.
    pub fn validate(&self) -> Result<()> {
        if self.total_slots == 0 {
            return Err(Error::Validation {
                field: "total_slots".into(),
                message: "lot must have at least one slot".into(),
            });
        }
        let reserved = self.handicap_slots.checked_add(self.ev_slots);
        match reserved {
            Some(r) if r <= self.total_slots => Ok(()),
            _ => Err(Error::Validation {
                field: "lot".into(),
                message: format!(
                    "reserved zones ({} handicap + {} EV) exceed total of {} slots",
                    self.handicap_slots, self.ev_slots, self.total_slots
                ),
            }),
        }
    }
}

/// Top-level configuration.
///
/// # Examples
///
/// ```
/// use carpark::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// assert_eq!(config.lot.total_slots, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The lot layout.
    #[serde(default)]
    pub lot: LotLayout,

    /// Maximum time to wait for the database lock, in seconds.
    #[serde(default)]
    pub maximum_lock_wait_seconds: Option<u64>,
}

/// Builder for loading configuration from files and the environment.
///
/// Sources are merged with the following precedence (highest first):
/// 1. `CARPARK_*` environment variables
/// 2. The configuration file, if one was provided and exists
/// 3. Built-in defaults
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file_config: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with no file source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// A missing file is not an error; the builder simply keeps defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&contents)?;
            self.file_config = Some(config);
        }
        Ok(self)
    }

    /// Builds the final configuration, applying environment overrides
    /// and validating the result.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment override cannot be parsed or
    /// the resulting lot layout is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = self.file_config.unwrap_or_default();

        if let Some(value) = env_override("CARPARK_TOTAL_SLOTS")? {
            config.lot.total_slots = value;
        }
        if let Some(value) = env_override("CARPARK_HANDICAP_SLOTS")? {
            config.lot.handicap_slots = value;
        }
        if let Some(value) = env_override("CARPARK_EV_SLOTS")? {
            config.lot.ev_slots = value;
        }
        if let Some(value) = env_override("CARPARK_LOCK_WAIT_SECONDS")? {
            config.maximum_lock_wait_seconds = Some(u64::from(value));
        }

        config.lot.validate()?;
        Ok(config)
    }
}

/// Reads a numeric environment override, if set.
fn env_override(name: &str) -> Result<Option<u32>> {
    match env::var(name) {
        Ok(raw) => raw.parse::<u32>().map(Some).map_err(|_| Error::Validation {
            field: name.to_string(),
            message: format!("expected a non-negative integer, got '{raw}'"),
        }),
        Err(_) => Ok(None),
    }
}
