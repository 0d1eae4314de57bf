use core::fmt;

use log::warn;
use quartz_core::{
    time_value::{TimeValue, TimeValueError},
    watch::WatchConfig,
};

const MILITARY_ENV: &str = "QUARTZ_MILITARY";
const CLOCK_ENV: &str = "QUARTZ_CLOCK";
const ALARM_ENV: &str = "QUARTZ_ALARM";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SeedError {
    /// Not three `:`-separated numbers.
    Format,
    Range(TimeValueError),
}

impl From<TimeValueError> for SeedError {
    fn from(err: TimeValueError) -> Self {
        Self::Range(err)
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => f.write_str("expected HH:MM:SS (24-hour)"),
            Self::Range(err) => write!(f, "{err}"),
        }
    }
}

/// Builds the watch config, overriding defaults from `QUARTZ_MILITARY`, `QUARTZ_CLOCK`
/// and `QUARTZ_ALARM`. Bad values are logged and ignored.
pub fn from_env() -> WatchConfig {
    let mut config = WatchConfig::default();
    if let Ok(value) = std::env::var(MILITARY_ENV) {
        config = config.with_military(parse_flag(&value));
    }
    if let Some(seed) = seed_from_env(CLOCK_ENV) {
        config = config.with_clock_seed(seed);
    }
    if let Some(seed) = seed_from_env(ALARM_ENV) {
        config = config.with_alarm_seed(seed);
    }
    config
}

pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

pub fn parse_seed(value: &str) -> Result<TimeValue, SeedError> {
    let mut fields = value.trim().split(':');
    let hour = next_field(&mut fields)?;
    let minute = next_field(&mut fields)?;
    let second = next_field(&mut fields)?;
    if fields.next().is_some() {
        return Err(SeedError::Format);
    }

    Ok(TimeValue::try_from_hms(hour, minute, second)?)
}

fn next_field<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<u8, SeedError> {
    fields
        .next()
        .and_then(|field| field.trim().parse::<u8>().ok())
        .ok_or(SeedError::Format)
}

fn seed_from_env(name: &str) -> Option<TimeValue> {
    let value = std::env::var(name).ok()?;
    match parse_seed(&value) {
        Ok(seed) => Some(seed),
        Err(err) => {
            warn!("config: ignoring {}={:?}: {}", name, value, err);
            None
        }
    }
}
