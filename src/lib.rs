//! duovec: fixed-length numeric vectors stored as double-precision real or
//! complex values.
//!
//! The core type is [`math::NumVector`], a kind-tagged vector that either
//! owns its backing buffer or mutably borrows one supplied by the caller.
//! Writing a complex value into a real vector deliberately narrows it to
//! the real part. On top of the container, the crate provides uniform
//! linear/logarithmic grid factories with concatenation, plus text and
//! binary file codecs behind an extension-aware format selector.
//!
//! Decode failures are ordinary `Result` errors the caller can inspect;
//! precondition violations (an empty grid, an unrecognized extension under
//! auto-detection) panic.
pub mod error;
pub mod io;
pub mod math;
