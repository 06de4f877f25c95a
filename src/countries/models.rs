use crate::geodesy::is_valid_distance;
use serde::{Deserialize, Serialize};

/// A country, located by the coordinates of its capital.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    /// Degrees, in `[-90, 90]`.
    pub latitude: f64,
    /// Degrees, in `[-180, 180]`.
    pub longitude: f64,
}

impl Country {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// What the puzzle reported back for a guess.
///
/// On the wire this is the raw signed number: a non-negative value is an exact distance in
/// kilometers, a negative value (or `null`) means only "warmer than the last exact distance".
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "f64")]
pub enum DistanceSignal {
    Exact(f64),
    Warmer,
}

impl DistanceSignal {
    /// Like `from`, but `None` for numbers no report can carry: non-finite values and exact
    /// distances longer than half the great-circle circumference.
    pub fn checked(value: f64) -> Option<Self> {
        match Self::from(value) {
            DistanceSignal::Exact(km) if !is_valid_distance(km) => None,
            DistanceSignal::Warmer if !value.is_finite() => None,
            signal => Some(signal),
        }
    }
}

impl From<f64> for DistanceSignal {
    fn from(value: f64) -> Self {
        if value >= 0.0 {
            DistanceSignal::Exact(value)
        } else {
            DistanceSignal::Warmer
        }
    }
}

impl From<Option<f64>> for DistanceSignal {
    fn from(value: Option<f64>) -> Self {
        value.map_or(DistanceSignal::Warmer, DistanceSignal::from)
    }
}

impl From<DistanceSignal> for f64 {
    fn from(signal: DistanceSignal) -> Self {
        match signal {
            DistanceSignal::Exact(km) => km,
            DistanceSignal::Warmer => -1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessEntry {
    pub country: Country,
    pub signal: DistanceSignal,
}

impl GuessEntry {
    pub fn new(country: Country, signal: impl Into<DistanceSignal>) -> Self {
        Self {
            country,
            signal: signal.into(),
        }
    }
}

/// Guesses in the order they were made.
pub type GuessHistory = Vec<GuessEntry>;
