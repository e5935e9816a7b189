use thiserror::Error;

pub mod bitslice_reader;


/// Failures raised while decoding the bitstream.
///
/// Both variants are terminal for the current parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitReadError {
    /// A read extends past the end of the buffer. The NAL unit is
    /// truncated or malformed.
    #[error("bitstream underrun: requested {requested} bits, {available} remaining")]
    BufferUnderrun { requested: usize, available: usize },

    /// An exp-golomb leading zero run too long to decode into 32 bits.
    /// Never produced by a conforming encoder for the fields read here.
    #[error("exp-golomb code too long: {leading_zeros} leading zero bits")]
    CodeTooLong { leading_zeros: usize },
}
