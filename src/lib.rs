//! Bit-level parsing of the HEVC (H.265) sequence parameter set prefix.
//!
//! Decodes the leading fields of a SPS NAL unit, through the bit depths,
//! into a [`SpsInfo`]: picture dimensions after conformance window
//! cropping, profile/tier/level, chroma format and bit depths.
//!
//! The input buffer must be the raw byte sequence payload as handed over
//! by the extraction layer, with any emulation prevention bytes already
//! removed.

/// Bit reader module
pub mod bits;

/// HEVC syntax structures
pub mod hevc;

pub use bits::BitReadError;
pub use hevc::sps::{SpsInfo, SpsParseOpts};
