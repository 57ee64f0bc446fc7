//! Filters a GeoNames-style city table down to a sorted CSV.
//!
//! Input rows are tab separated with no header and no quoting. Each row
//! contributes name, coordinates, country code, population and timezone; rows
//! below the population threshold are dropped and the rest are sorted by name.

mod record;
mod result;

pub use record::CityRecord;
pub use result::FilterReport;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use log::{debug, info};
use crate::core::config::FilterConfig;
use crate::core::constants::CSV_HEADER;
use crate::error::types::{CityError, Result, ToolError};
use crate::fs::{write_atomically, FileOperation};
use crate::fs_err;

/// Reads gazetteer rows from `input` and returns the qualifying cities sorted by name.
pub fn filter_records<R: Read>(input: R, config: &FilterConfig) -> Result<Vec<CityRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let threshold = config.population_threshold();
    let mut cities = Vec::new();
    let mut rows = 0usize;

    for row in reader.records() {
        let row = row?;
        rows += 1;
        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }
        if let Some(city) = CityRecord::from_row(&row, config)? {
            if city.population >= threshold {
                cities.push(city);
            }
        }
    }

    // stable, so duplicate names keep input order
    cities.sort_by(|a, b| a.city_name.cmp(&b.city_name));
    debug!("Kept {} of {} rows (threshold {})", cities.len(), rows, threshold);
    Ok(cities)
}

/// Writes the fixed header followed by `records`.
pub fn write_csv<W: Write>(output: W, records: &[CityRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(output);

    writer.write_record(CSV_HEADER).map_err(write_error)?;
    for record in records {
        writer.serialize(record).map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|e| ToolError::Cities(CityError::Write(e.to_string())))
}

fn write_error(err: csv::Error) -> ToolError {
    ToolError::Cities(CityError::Write(err.to_string()))
}

/// Runs the whole filter: read `input`, keep cities at or above the threshold,
/// sort them and replace `output` with the CSV.
pub fn filter_cities(input: &Path, output: &Path, config: &FilterConfig) -> Result<FilterReport> {
    input.require_file()?;
    let file = fs_err!(File::open(input), ReadFile, input)?;
    debug!("Reading cities from {}", input.display());

    let cities = filter_records(file, config)?;
    write_atomically(output, |writer: &mut dyn Write| write_csv(writer, &cities))?;

    info!("Wrote {} cities to {}", cities.len(), output.display());
    Ok(FilterReport {
        output: output.to_path_buf(),
        rows_kept: cities.len(),
    })
}
