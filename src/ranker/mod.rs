use crate::countries::models::{Country, DistanceSignal, GuessEntry, GuessHistory};
use crate::geodesy::{self, distance_between};
use consts::{HINT_FLOOR, PENALTY_MULTIPLIER};
use thiserror::Error;

pub mod consts;

#[derive(Error, Debug, PartialEq)]
#[error("No country named `{0}`.")]
pub struct UnknownCountry(pub String);

/// The pool of known countries and the queries run against it.
///
/// The pool is fixed at construction. Every query is a linear scan in pool order, so ties go
/// to whichever country comes first in the dataset.
#[derive(Debug, Default)]
pub struct Ranker {
    countries: Vec<Country>,
}

impl Ranker {
    pub fn new(countries: Vec<Country>) -> Self {
        tracing::debug!("Ranker initialized with {} countries.", countries.len());
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Case-insensitive exact match on the country name.
    pub fn lookup(&self, name: &str) -> Option<&Country> {
        let name = name.trim().to_lowercase();
        self.countries
            .iter()
            .find(|country| country.name.to_lowercase() == name)
    }

    /// Turns free-text guesses into a history, failing on the first name that isn't in the pool.
    pub fn resolve<'a, I>(&self, guesses: I) -> Result<GuessHistory, UnknownCountry>
    where
        I: IntoIterator<Item = (&'a str, DistanceSignal)>,
    {
        guesses
            .into_iter()
            .map(|(name, signal)| match self.lookup(name) {
                Some(country) => Ok(GuessEntry::new(country.clone(), signal)),
                None => Err(UnknownCountry(name.to_string())),
            })
            .collect()
    }

    /// The country whose distance from the point deviates least from `target_km`.
    pub fn nearest_to_distance(&self, lat: f64, lon: f64, target_km: f64) -> Option<&Country> {
        let mut best: Option<(&Country, f64)> = None;
        for country in &self.countries {
            let deviation =
                (geodesy::distance(lat, lon, country.latitude, country.longitude) - target_km).abs();
            if best.map_or(true, |(_, best_deviation)| deviation < best_deviation) {
                best = Some((country, deviation));
            }
        }
        best.map(|(country, _)| country)
    }

    pub fn closest_to(&self, lat: f64, lon: f64) -> Option<&Country> {
        self.nearest_to_distance(lat, lon, 0.0)
    }

    /// Recommends the next guess: the not-yet-guessed country with the lowest error score.
    pub fn triangulate(&self, history: &[GuessEntry]) -> Option<&Country> {
        let mut best: Option<(&Country, f64)> = None;
        for candidate in self.countries.iter() {
            if history.iter().any(|entry| entry.country == *candidate) {
                continue;
            }
            let error = error_score(candidate, history);
            if best.map_or(true, |(_, best_error)| error < best_error) {
                best = Some((candidate, error));
            }
        }
        match best {
            Some((country, error)) => {
                tracing::debug!(
                    guesses = history.len(),
                    recommendation = %country.name,
                    error,
                    "Triangulated next guess."
                );
                Some(country)
            }
            None => {
                tracing::debug!(guesses = history.len(), "No eligible candidate left.");
                None
            }
        }
    }
}

/// Multiplicative error of `candidate` against the whole history; lower is better.
///
/// An exact signal contributes the gap between the candidate's distance to the guessed capital
/// and the reported distance, and a penalty when the candidate would be closer than reported.
/// A "warmer" signal contributes how much closer the candidate is to the new guess than to the
/// guess of the most recent exact signal, floored at [`HINT_FLOOR`]. Hints arriving before any
/// exact signal carry nothing to compare against and are skipped.
pub fn error_score(candidate: &Country, history: &[GuessEntry]) -> f64 {
    let (error, _anchor) = history.iter().fold(
        (1.0, None::<&Country>),
        |(error, anchor), entry| match entry.signal {
            DistanceSignal::Exact(reported_km) => {
                let predicted_km = distance_between(candidate, &entry.country);
                let mut error = error * (predicted_km - reported_km).abs();
                if predicted_km < reported_km {
                    error *= PENALTY_MULTIPLIER;
                }
                (error, Some(&entry.country))
            }
            DistanceSignal::Warmer => match anchor {
                Some(anchor_country) => {
                    let gain = distance_between(anchor_country, candidate)
                        - distance_between(candidate, &entry.country);
                    (error * gain.max(HINT_FLOOR), anchor)
                }
                None => (error, anchor),
            },
        },
    );
    error
}
