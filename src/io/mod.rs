//! IO utilities for reading and writing vector files.
//!
//! Two formats are supported: a whitespace-delimited text table and a
//! structured binary container. [`FileFormat::Auto`] resolves the format
//! from the file extension.
pub mod binary;
pub mod text;

pub use binary::{read_binary, write_binary};
pub use text::{read_text, write_text, TextOptions};

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::DecodeError;
use crate::math::NumVector;

/// On-disk vector format selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Text,
    Binary,
    Auto,
}

/// Resolve [`FileFormat::Auto`] from the file extension; explicit
/// selectors pass through unchanged.
///
/// Panics when the extension matches neither format. Selecting a format
/// for an unreadable path is a caller contract violation, not a decode
/// failure.
pub fn resolve_format(path: &Path, format: FileFormat) -> FileFormat {
    if format != FileFormat::Auto {
        return format;
    }
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("txt") | Some("dat") => FileFormat::Text,
        Some("bin") => FileFormat::Binary,
        _ => panic!(
            "cannot infer vector file format from extension of {}",
            path.display()
        ),
    }
}

/// Read a vector from `path` in the given (or auto-resolved) format.
pub fn read_vector(path: impl AsRef<Path>, format: FileFormat) -> Result<NumVector<'static>> {
    read_vector_with_options(path, format, "")
}

/// Read a vector with a directive string applied on the text path.
///
/// The binary format defines no directives; passing a non-empty options
/// string with it is a decode error.
pub fn read_vector_with_options(
    path: impl AsRef<Path>,
    format: FileFormat,
    options: &str,
) -> Result<NumVector<'static>> {
    let path = path.as_ref();
    match resolve_format(path, format) {
        FileFormat::Text => {
            let options = TextOptions::parse(options)
                .with_context(|| format!("Invalid options for {}", path.display()))?;
            text::read_text(path, &options)
        }
        FileFormat::Binary => {
            if !options.trim().is_empty() {
                return Err(DecodeError::OptionsUnsupported)
                    .with_context(|| format!("Invalid options for {}", path.display()));
            }
            binary::read_binary(path)
        }
        FileFormat::Auto => unreachable!("auto format must be resolved before dispatch"),
    }
}
