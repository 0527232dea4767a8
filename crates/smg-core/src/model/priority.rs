//! Sitemap `<priority>` value, stored in tenths.

use crate::error::SettingError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Relative importance hint in `[0.0, 1.0]` with a 0.1 step.
///
/// Kept as an integer count of tenths so formatting is exact and
/// locale-independent: `Priority::from_str("0.80")` displays as `0.8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: Priority = Priority(0);
    pub const MAX: Priority = Priority(10);

    /// Builds a priority from tenths (`8` is `0.8`). Returns `None` above 10.
    pub fn from_tenths(tenths: u8) -> Option<Self> {
        (tenths <= 10).then_some(Self(tenths))
    }

    pub fn tenths(self) -> u8 {
        self.0
    }

    /// Rounds `value` to the nearest tenth.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let tenths = (value * 10.0).round();
        if !(0.0..=10.0).contains(&tenths) {
            return None;
        }
        Some(Self(tenths as u8))
    }

    /// All selectable priorities, `0.0` through `1.0`.
    pub fn all() -> impl Iterator<Item = Priority> {
        (0..=10).map(Priority)
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(8)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl FromStr for Priority {
    type Err = SettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Priority::from_f64)
            .ok_or_else(|| SettingError::Priority(s.to_string()))
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
            Raw::Number(n) => Priority::from_f64(n)
                .ok_or_else(|| serde::de::Error::custom(SettingError::Priority(n.to_string()))),
        }
    }
}
