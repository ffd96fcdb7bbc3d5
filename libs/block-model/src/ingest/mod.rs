//! # Tabular Ingestion
//!
//! Reads comma-separated block models into [`BlockRecord`]s.
//!
//! ## Format
//!
//! ```text
//! X, Y, Z, DX, DY, DZ, Rock_Type, Ore_Flag, Au_Grade, Cu_Grade, Density
//! 400000, 3700000, 1200, 10, 10, 10, S, 1, 1.25, 0.45, 2.65
//! ```
//!
//! - The first non-blank line is the header; columns may come in any order
//! - A leading UTF-8 byte order mark is ignored
//! - Whitespace around fields is ignored and blank lines are skipped
//! - `*_Grade` columns become grades keyed by the lower-cased prefix
//! - `Density` is optional
//! - Unknown columns are ignored

use config::constants::{DEFAULT_DENSITY, GRADE_COLUMN_SUFFIX};
use glam::DVec3;

use crate::error::IngestError;
use crate::record::BlockRecord;

/// The eight-block reference model.
pub const SAMPLE_MODEL_CSV: &str = "X, Y, Z, DX, DY, DZ, Rock_Type, Ore_Flag, Au_Grade, Cu_Grade, Density
    400000, 3700000, 1200, 10, 10, 10, S, 1, 1.25, 0.45, 2.65
    400010, 3700000, 1200, 10, 10, 10, L, 0, 0.02, 0.01, 2.70
    400000, 3700010, 1200, 10, 10, 10, S, 1, 0.90, 0.30, 2.65
    400010, 3700010, 1200, 10, 10, 10, L, 0, 0.10, 0.05, 2.70
    400020, 3700000, 1210, 10, 10, 10, S, 1, 1.15, 0.50, 2.65
    400030, 3700000, 1210, 10, 10, 10, S, 1, 0.85, 0.25, 2.65
    400020, 3700010, 1210, 10, 10, 10, L, 0, 0.15, 0.08, 2.70
    400030, 3700010, 1210, 10, 10, 10, S, 1, 1.05, 0.40, 2.65";

const REQUIRED_COLUMNS: [&str; 8] = ["X", "Y", "Z", "DX", "DY", "DZ", "Rock_Type", "Ore_Flag"];

/// Column positions resolved from the header line.
#[derive(Debug)]
struct Columns {
    names: Vec<String>,
    // Indexed like REQUIRED_COLUMNS
    required: [usize; 8],
    density: Option<usize>,
    grades: Vec<(String, usize)>,
}

impl Columns {
    fn from_header(line: usize, header: &str) -> Result<Self, IngestError> {
        let names: Vec<String> = header.split(',').map(|f| f.trim().to_string()).collect();
        let position = |column: &str| names.iter().position(|name| name == column);

        let mut required = [0; 8];
        for (slot, column) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = position(column).ok_or_else(|| IngestError::MissingColumn {
                line,
                column: column.to_string(),
            })?;
        }

        let grades = names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                name.strip_suffix(GRADE_COLUMN_SUFFIX)
                    .filter(|assay| !assay.is_empty())
                    .map(|assay| (assay.to_lowercase(), i))
            })
            .collect();

        let density = position("Density");
        Ok(Self {
            names,
            density,
            required,
            grades,
        })
    }

    fn record(&self, line: usize, fields: &[&str]) -> Result<BlockRecord, IngestError> {
        if fields.len() != self.names.len() {
            return Err(IngestError::FieldCount {
                line,
                expected: self.names.len(),
                found: fields.len(),
            });
        }

        let number = |i: usize| -> Result<f64, IngestError> {
            fields[i].parse::<f64>().map_err(|_| IngestError::InvalidNumber {
                line,
                column: self.names[i].clone(),
                value: fields[i].to_string(),
            })
        };
        let invalid = |i: usize, message: &str| IngestError::InvalidValue {
            line,
            column: self.names[i].clone(),
            message: message.to_string(),
        };

        let [x, y, z, dx, dy, dz, rock, ore] = self.required;

        let mut position = [0.0; 3];
        for (value, i) in position.iter_mut().zip([x, y, z]) {
            *value = number(i)?;
            if !value.is_finite() {
                return Err(invalid(i, "must be finite"));
            }
        }

        let mut size = [0.0; 3];
        for (value, i) in size.iter_mut().zip([dx, dy, dz]) {
            *value = number(i)?;
            if !value.is_finite() || *value <= 0.0 {
                return Err(invalid(i, "must be a positive extent"));
            }
        }

        let ore_flag = parse_flag(fields[ore]).ok_or_else(|| IngestError::InvalidFlag {
            line,
            column: self.names[ore].clone(),
            value: fields[ore].to_string(),
        })?;

        let mut record = BlockRecord::new(
            DVec3::from_array(position),
            DVec3::from_array(size),
            fields[rock],
            ore_flag,
        );

        for (assay, i) in &self.grades {
            let grade = number(*i)?;
            if !grade.is_finite() || grade < 0.0 {
                return Err(invalid(*i, "must be a non-negative grade"));
            }
            record.grades.insert(assay.clone(), grade);
        }

        record.density = match self.density {
            Some(i) => {
                let density = number(i)?;
                if !density.is_finite() || density <= 0.0 {
                    return Err(invalid(i, "must be a positive density"));
                }
                density
            }
            None => DEFAULT_DENSITY,
        };

        Ok(record)
    }
}

/// Parses an ore flag field.
fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Parses comma-separated block model text.
///
/// Row order is preserved. A header with no data rows yields an empty list;
/// rejecting empty models is left to normalization and assembly.
///
/// # Errors
///
/// Returns an [`IngestError`] naming the first offending line.
///
/// # Example
///
/// ```rust
/// use block_model::{parse_csv, SAMPLE_MODEL_CSV};
///
/// let blocks = parse_csv(SAMPLE_MODEL_CSV).unwrap();
/// assert_eq!(blocks.len(), 8);
/// assert_eq!(blocks[0].rock_type, "S");
/// assert_eq!(blocks[0].grade("au"), Some(1.25));
/// ```
pub fn parse_csv(text: &str) -> Result<Vec<BlockRecord>, IngestError> {
    // Spreadsheet exports often lead with a byte order mark
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(IngestError::Empty)?;
    let columns = Columns::from_header(header_line, header)?;

    let mut records = Vec::new();
    for (line, row) in lines {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        match columns.record(line, &fields) {
            Ok(record) => records.push(record),
            Err(err) => {
                log::warn!("rejecting block model input: {err}");
                return Err(err);
            }
        }
    }

    log::debug!(
        "parsed {} block records with {} grade columns",
        records.len(),
        columns.grades.len()
    );
    Ok(records)
}
