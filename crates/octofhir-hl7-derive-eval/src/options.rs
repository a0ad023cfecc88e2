//! Derivation options
//!
//! Options are immutable once built and can be shared freely between threads.
//! Hosts either use the builder or deserialize a [`DeriveConfig`] from their own
//! configuration file and convert it.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::{DeriveError, DeriveResult};

/// Options consulted by the rules that need them (currently the temporal
/// difference calculator).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeriveOptions {
    default_zone: Option<FixedOffset>,
}

impl DeriveOptions {
    /// Options with every setting at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building options
    pub fn builder() -> DeriveOptionsBuilder {
        DeriveOptionsBuilder::default()
    }

    /// Zone assumed for date-times that carry no offset of their own.
    ///
    /// When unset, zoned and unzoned date-times cannot be compared.
    pub fn default_zone(&self) -> Option<FixedOffset> {
        self.default_zone
    }
}

impl TryFrom<DeriveConfig> for DeriveOptions {
    type Error = DeriveError;

    fn try_from(config: DeriveConfig) -> DeriveResult<Self> {
        let mut builder = DeriveOptions::builder();
        if let Some(zone) = config.default_zone.as_deref() {
            let offset = parse_zone_offset(zone)
                .ok_or_else(|| DeriveError::invalid_config("defaultZone", zone))?;
            builder = builder.default_zone(offset);
        }
        Ok(builder.build())
    }
}

/// Builder for [`DeriveOptions`]
#[derive(Debug, Clone, Default)]
pub struct DeriveOptionsBuilder {
    default_zone: Option<FixedOffset>,
}

impl DeriveOptionsBuilder {
    /// Set the zone assumed for unzoned date-times
    pub fn default_zone(mut self, offset: FixedOffset) -> Self {
        self.default_zone = Some(offset);
        self
    }

    /// Set the default zone from text such as `+05:30`, `-0800` or `UTC`
    pub fn default_zone_str(self, zone: &str) -> DeriveResult<Self> {
        let offset =
            parse_zone_offset(zone).ok_or_else(|| DeriveError::invalid_config("defaultZone", zone))?;
        Ok(self.default_zone(offset))
    }

    /// Build the options
    pub fn build(self) -> DeriveOptions {
        DeriveOptions {
            default_zone: self.default_zone,
        }
    }
}

/// Serializable form of [`DeriveOptions`], as it appears in host configuration.
///
/// ```json
/// { "defaultZone": "+01:00" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeriveConfig {
    pub default_zone: Option<String>,
}

/// Parse a zone offset: `Z`, `UTC`, `+HH`, `+HHMM` or `+HH:MM` (and the `-` forms).
pub fn parse_zone_offset(zone: &str) -> Option<FixedOffset> {
    let zone = zone.trim();
    if zone.eq_ignore_ascii_case("z") || zone.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let sign = match zone.chars().next()? {
        '+' => 1,
        '-' => -1,
        _ => return None,
    };
    let digits: String = zone[1..].chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
