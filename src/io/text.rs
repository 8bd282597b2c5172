//! Whitespace-delimited text format.
//!
//! One element per line: a single numeric column makes a real vector, two
//! columns (re, im) make a complex one. Blank lines and `#` comments are
//! skipped. Column counts must agree across the file.
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use num_complex::Complex64;

use crate::error::DecodeError;
use crate::math::NumVector;

/// Directives accepted by the text decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Minimum number of data rows the file must contain.
    pub min_rows: Option<usize>,
}

impl TextOptions {
    /// Parse a whitespace-delimited directive string, e.g. `"--nrow 5"`.
    ///
    /// Unrecognized directives are rejected, never silently ignored.
    pub fn parse(options: &str) -> Result<Self, DecodeError> {
        let mut parsed = TextOptions::default();
        let mut tokens = options.split_whitespace();
        while let Some(token) = tokens.next() {
            match token {
                "--nrow" => {
                    let value = tokens
                        .next()
                        .ok_or(DecodeError::MissingDirectiveArgument("--nrow"))?;
                    let rows = value.parse::<usize>().map_err(|_| {
                        DecodeError::InvalidDirectiveArgument {
                            directive: "--nrow",
                            value: value.to_string(),
                        }
                    })?;
                    parsed.min_rows = Some(rows);
                }
                other => return Err(DecodeError::UnknownDirective(other.to_string())),
            }
        }
        Ok(parsed)
    }
}

/// Read a vector from a whitespace-delimited text file.
pub fn read_text(path: &Path, options: &TextOptions) -> Result<NumVector<'static>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open vector file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut columns: Option<usize> = None;
    let mut values: Vec<Complex64> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| {
            format!("Failed to read line {} of {}", line_number, path.display())
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let expected = *columns.get_or_insert(fields.len());
        if fields.len() != expected {
            return Err(DecodeError::RaggedRow {
                line: line_number,
                expected,
                got: fields.len(),
            })
            .with_context(|| format!("Failed to decode {}", path.display()));
        }
        if expected != 1 && expected != 2 {
            return Err(DecodeError::BadColumnCount {
                line: line_number,
                got: expected,
            })
            .with_context(|| format!("Failed to decode {}", path.display()));
        }

        let mut parsed = [0.0f64; 2];
        for (slot, field) in parsed.iter_mut().zip(&fields) {
            *slot = field.parse::<f64>().map_err(|_| DecodeError::NonNumeric {
                line: line_number,
                token: field.to_string(),
            })?;
        }
        values.push(Complex64::new(parsed[0], parsed[1]));
    }

    if values.is_empty() {
        return Err(DecodeError::EmptyFile)
            .with_context(|| format!("Failed to decode {}", path.display()));
    }
    if let Some(min_rows) = options.min_rows {
        if values.len() < min_rows {
            return Err(DecodeError::TooFewRows {
                expected: min_rows,
                got: values.len(),
            })
            .with_context(|| format!("Failed to decode {}", path.display()));
        }
    }

    let vector = if columns == Some(2) {
        NumVector::from_complex_vec(values)
    } else {
        NumVector::from_real_vec(values.iter().map(|value| value.re).collect())
    };
    log::debug!(
        "Loaded {} {:?} elements from {}",
        vector.len(),
        vector.kind(),
        path.display()
    );
    Ok(vector)
}

/// Write a vector as whitespace-delimited text, one element per line.
pub fn write_text(path: &Path, vector: &NumVector<'_>) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create vector file: {}", path.display()))?;
    if let Some(values) = vector.as_real_slice() {
        for value in values {
            writeln!(file, "{}", value)?;
        }
    } else if let Some(values) = vector.as_complex_slice() {
        for value in values {
            writeln!(file, "{} {}", value.re, value.im)?;
        }
    }
    Ok(())
}
