use crate::countries::models::Country;
use crate::geodesy::is_valid_point;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read the countries file: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: expected `name,capital,latitude,longitude`.")]
    MissingField { line: usize },
    #[error("Line {line}: `{value}` is not a number.")]
    InvalidCoordinate { line: usize, value: String },
    #[error("Line {line}: coordinates are out of range.")]
    OutOfRange { line: usize },
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<Country>, DatasetError> {
    let path = path.as_ref();
    tracing::info!("Loading countries from {:?}.", path);
    let file = File::open(path)?;
    let countries = parse(BufReader::new(file))?;
    tracing::info!("Loaded {} countries.", countries.len());
    Ok(countries)
}

/// Parses headerless `name,capital,latitude,longitude` lines. Blank lines are skipped.
pub fn parse(reader: impl BufRead) -> Result<Vec<Country>, DatasetError> {
    let mut countries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        countries.push(parse_line(&line, index + 1)?);
    }
    Ok(countries)
}

fn parse_line(line: &str, line_number: usize) -> Result<Country, DatasetError> {
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    let [name, _capital, latitude, longitude] = tokens[..] else {
        return Err(DatasetError::MissingField { line: line_number });
    };
    let latitude = parse_coordinate(latitude, line_number)?;
    let longitude = parse_coordinate(longitude, line_number)?;
    if !is_valid_point(latitude, longitude) {
        return Err(DatasetError::OutOfRange { line: line_number });
    }
    Ok(Country::new(name, latitude, longitude))
}

fn parse_coordinate(value: &str, line_number: usize) -> Result<f64, DatasetError> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(DatasetError::InvalidCoordinate {
            line: line_number,
            value: value.to_string(),
        }),
    }
}
