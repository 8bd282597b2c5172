//! Numeric vector container and grid factories.
//!
//! Provides [`NumVector`], a fixed-length vector stored as either real or
//! complex doubles, along with the `linspace`/`logspace` grid constructors
//! and vector concatenation.
pub mod vector;

pub use vector::{concat, linspace, logspace, Kind, NumVector};
