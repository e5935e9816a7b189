use std::fmt;

use bitvec::prelude::*;

use super::BitReadError;

// An exp-golomb run reaching this length no longer fits a u32 code.
const UE_MAX_LEADING_ZEROS: usize = 31;

/// Forward-only bit reader over a borrowed byte buffer.
///
/// Bits are consumed most significant first within each byte. The offset
/// only advances, and only on successful reads.
pub struct BitSliceReader<'a> {
    bs: &'a BitSlice<u8, Msb0>,
    offset: usize,
}

impl<'a> BitSliceReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            bs: data.view_bits::<Msb0>(),
            offset: 0,
        }
    }

    /// Bits remaining between the offset and the end of the buffer.
    pub fn available(&self) -> usize {
        self.bs.len() - self.offset
    }

    #[inline(always)]
    pub fn get(&mut self) -> Result<bool, BitReadError> {
        match self.bs.get(self.offset) {
            Some(val) => {
                self.offset += 1;

                Ok(*val)
            }
            None => Err(BitReadError::BufferUnderrun {
                requested: 1,
                available: 0,
            }),
        }
    }

    /// Reads the next `n` bits as a big-endian unsigned value.
    ///
    /// `n` must be between 1 and 32.
    #[inline(always)]
    pub fn get_n(&mut self, n: usize) -> Result<u32, BitReadError> {
        debug_assert!((1..=32).contains(&n));

        let available = self.available();
        if n > available {
            return Err(BitReadError::BufferUnderrun {
                requested: n,
                available,
            });
        }

        let val = self.bs[self.offset..self.offset + n].load_be::<u32>();
        self.offset += n;

        Ok(val)
    }

    /// Advances past `n` bits without decoding them.
    pub fn skip_n(&mut self, n: usize) -> Result<(), BitReadError> {
        let available = self.available();
        if n > available {
            return Err(BitReadError::BufferUnderrun {
                requested: n,
                available,
            });
        }

        self.offset += n;

        Ok(())
    }

    /// Decodes one unsigned exp-golomb (`ue(v)`) code.
    #[inline(always)]
    pub fn get_ue(&mut self) -> Result<u32, BitReadError> {
        let mut leading_zeros = 0;

        while !self.get()? {
            leading_zeros += 1;

            if leading_zeros >= UE_MAX_LEADING_ZEROS {
                return Err(BitReadError::CodeTooLong { leading_zeros });
            }
        }

        if leading_zeros == 0 {
            return Ok(0);
        }

        let suffix = self.get_n(leading_zeros)?;

        Ok((1 << leading_zeros) - 1 + suffix)
    }
}

impl fmt::Debug for BitSliceReader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BitSliceReader: {{offset: {}, len: {}}}",
            self.offset,
            self.bs.len()
        )
    }
}
