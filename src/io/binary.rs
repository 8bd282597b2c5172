//! Structured binary format.
//!
//! Little-endian layout: 4-byte magic `NVB1`, a one-byte element kind tag
//! (0 real, 1 complex), a `u64` element count, then the payload doubles
//! (one per element for real vectors, two per element for complex ones).
use std::path::Path;

use anyhow::{Context, Result};
use num_complex::Complex64;

use crate::error::DecodeError;
use crate::math::NumVector;

const MAGIC: [u8; 4] = *b"NVB1";
const HEADER_LEN: usize = 13;

const KIND_REAL: u8 = 0;
const KIND_COMPLEX: u8 = 1;

/// Read a vector from a structured binary file.
pub fn read_binary(path: &Path) -> Result<NumVector<'static>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to open vector file: {}", path.display()))?;
    let vector =
        decode(&bytes).with_context(|| format!("Failed to decode {}", path.display()))?;
    log::debug!(
        "Loaded {} {:?} elements from {}",
        vector.len(),
        vector.kind(),
        path.display()
    );
    Ok(vector)
}

fn decode(bytes: &[u8]) -> Result<NumVector<'static>, DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::SizeMismatch {
            expected: HEADER_LEN,
            got: bytes.len(),
        });
    }
    if bytes[0..4] != MAGIC {
        return Err(DecodeError::BadMagic);
    }
    let kind_tag = bytes[4];
    let count = u64::from_le_bytes(bytes[5..HEADER_LEN].try_into().unwrap()) as usize;

    let doubles = match kind_tag {
        KIND_REAL => count,
        KIND_COMPLEX => count * 2,
        tag => return Err(DecodeError::UnknownKindTag(tag)),
    };
    let expected = HEADER_LEN + doubles * 8;
    if bytes.len() != expected {
        return Err(DecodeError::SizeMismatch {
            expected,
            got: bytes.len(),
        });
    }

    let values: Vec<f64> = bytes[HEADER_LEN..]
        .chunks_exact(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()))
        .collect();

    Ok(if kind_tag == KIND_REAL {
        NumVector::from_real_vec(values)
    } else {
        NumVector::from_complex_vec(
            values
                .chunks_exact(2)
                .map(|pair| Complex64::new(pair[0], pair[1]))
                .collect(),
        )
    })
}

/// Write a vector in the structured binary layout.
pub fn write_binary(path: &Path, vector: &NumVector<'_>) -> Result<()> {
    let mut out = Vec::with_capacity(HEADER_LEN + vector.len() * 16);
    out.extend_from_slice(&MAGIC);
    if let Some(values) = vector.as_real_slice() {
        out.push(KIND_REAL);
        out.extend_from_slice(&(vector.len() as u64).to_le_bytes());
        for value in values {
            out.extend_from_slice(&value.to_le_bytes());
        }
    } else if let Some(values) = vector.as_complex_slice() {
        out.push(KIND_COMPLEX);
        out.extend_from_slice(&(vector.len() as u64).to_le_bytes());
        for value in values {
            out.extend_from_slice(&value.re.to_le_bytes());
            out.extend_from_slice(&value.im.to_le_bytes());
        }
    }
    std::fs::write(path, out)
        .with_context(|| format!("Failed to create vector file: {}", path.display()))
}
