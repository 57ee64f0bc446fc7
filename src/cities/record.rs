use csv::StringRecord;
use serde::Serialize;
use crate::core::config::FilterConfig;
use crate::error::types::{CityError, Result};

/// One output row. Field order and names match the CSV header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityRecord {
    pub city_name: String,
    pub population: i64,
    pub country_code: String,
    pub timezone: String,
    pub latitude: String,
    pub longitude: String,
}

impl CityRecord {
    /// Builds a record from one gazetteer row.
    ///
    /// Returns `Ok(None)` when the population field is not an integer; such rows
    /// are dropped without being reported. A row too short to hold a required
    /// column is an error.
    pub fn from_row(row: &StringRecord, config: &FilterConfig) -> Result<Option<Self>> {
        let line = row.position().map(|pos| pos.line()).unwrap_or(0);
        let columns = config.columns();

        let city_name = config.clean_name(field(row, columns.name, line)?);
        let population = match parse_population(field(row, columns.population, line)?) {
            Some(population) => population,
            None => return Ok(None),
        };

        Ok(Some(Self {
            city_name,
            population,
            country_code: field(row, columns.country_code, line)?.to_string(),
            timezone: field(row, columns.timezone, line)?.to_string(),
            latitude: field(row, columns.latitude, line)?.to_string(),
            longitude: field(row, columns.longitude, line)?.to_string(),
        }))
    }
}

fn field<'r>(row: &'r StringRecord, index: usize, line: u64) -> Result<&'r str> {
    row.get(index).ok_or_else(|| {
        CityError::MissingColumn {
            line,
            index,
            found: row.len(),
        }
        .into()
    })
}

fn parse_population(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
