use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Number of future steps to forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(into = "u64")]
pub struct Horizon(usize);

impl Horizon {
    /// Create a horizon of `steps` steps
    pub fn new(steps: usize) -> Self {
        Horizon(steps)
    }

    /// Number of steps
    pub fn steps(self) -> usize {
        self.0
    }

    /// Whether no steps are requested
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for Horizon {
    fn from(steps: usize) -> Self {
        Horizon(steps)
    }
}

impl TryFrom<i64> for Horizon {
    type Error = Error;

    /// Negative horizons are rejected rather than clamped to zero
    fn try_from(steps: i64) -> Result<Self> {
        usize::try_from(steps)
            .map(Horizon)
            .map_err(|_| Error::InvalidHorizon(steps))
    }
}

impl TryFrom<u64> for Horizon {
    type Error = Error;

    fn try_from(steps: u64) -> Result<Self> {
        usize::try_from(steps)
            .map(Horizon)
            .map_err(|_| Error::InvalidValue(format!("horizon {} exceeds usize::MAX", steps)))
    }
}

impl From<Horizon> for u64 {
    fn from(horizon: Horizon) -> Self {
        horizon.0 as u64
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps", self.0)
    }
}

struct HorizonVisitor;

impl<'de> Visitor<'de> for HorizonVisitor {
    type Value = Horizon;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer step count")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Horizon, E> {
        Horizon::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Horizon, E> {
        Horizon::try_from(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Horizon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_u64(HorizonVisitor)
    }
}
