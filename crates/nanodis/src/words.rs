//! Instruction length selection and halfword assembly.
//!
//! nanoMIPS instructions are one, two or three halfwords long. The length is
//! fixed by the first halfword; the opcode value is assembled
//! most-significant-halfword-first regardless of memory byte order.

use crate::reader::{HalfwordReader, MemoryFault};

/// Maximum instruction length in halfwords.
pub const MAX_HALFWORDS: usize = 3;

/// Number of halfwords in the instruction starting with `first`.
///
/// Bit 12 set selects the 16-bit map. Otherwise major opcode `0b011000`
/// (bits [15:10]) marks a 48-bit instruction and everything else is 32-bit.
#[must_use]
pub const fn halfword_count(first: u16) -> usize {
    if first & 0x1000 != 0 {
        1
    } else if first >> 10 == 0x18 {
        3
    } else {
        2
    }
}

/// Halfwords read for one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionWords {
    address: u64,
    halfwords: [u16; MAX_HALFWORDS],
    len: u8,
}

impl InstructionWords {
    /// Start from the first halfword at `address`.
    #[must_use]
    pub const fn new(address: u64, first: u16) -> Self {
        Self {
            address,
            halfwords: [first, 0, 0],
            len: 1,
        }
    }

    #[must_use]
    pub const fn address(&self) -> u64 {
        self.address
    }

    /// Halfwords consumed so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn halfwords(&self) -> &[u16] {
        &self.halfwords[..self.len()]
    }

    #[must_use]
    pub const fn bit_length(&self) -> u8 {
        self.len * 16
    }

    #[must_use]
    pub const fn byte_length(&self) -> u64 {
        self.len as u64 * 2
    }

    /// Opcode formed by the leading `bit_width / 16` halfwords.
    ///
    /// `None` if `bit_width` is not a whole number of halfwords or more have
    /// been requested than assembled.
    #[must_use]
    pub fn opcode(&self, bit_width: u8) -> Option<u64> {
        let count = usize::from(bit_width / 16);
        if bit_width % 16 != 0 || count == 0 || count > self.len() {
            return None;
        }
        Some(
            self.halfwords[..count]
                .iter()
                .fold(0, |acc, &hw| (acc << 16) | u64::from(hw)),
        )
    }

    /// Opcode formed by every assembled halfword.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.halfwords()
            .iter()
            .fold(0, |acc, &hw| (acc << 16) | u64::from(hw))
    }

    /// Read further halfwords until `bit_width` bits are available.
    ///
    /// # Errors
    ///
    /// Returns the reader's [`MemoryFault`]; halfwords read before the fault
    /// are kept.
    pub fn widen<R>(&mut self, reader: &R, bit_width: u8) -> Result<(), MemoryFault>
    where
        R: HalfwordReader + ?Sized,
    {
        self.widen_to(reader, usize::from(bit_width / 16))
    }

    fn widen_to<R>(&mut self, reader: &R, count: usize) -> Result<(), MemoryFault>
    where
        R: HalfwordReader + ?Sized,
    {
        while self.len() < count.min(MAX_HALFWORDS) {
            let next = reader.read_halfword(self.address.wrapping_add(self.byte_length()))?;
            self.halfwords[self.len()] = next;
            self.len += 1;
        }
        Ok(())
    }
}

/// Read the first halfword at `address` and as many more as its length
/// selector requires.
///
/// # Errors
///
/// Returns [`MemoryFault`] if any of the halfwords cannot be read.
pub fn assemble<R>(reader: &R, address: u64) -> Result<InstructionWords, MemoryFault>
where
    R: HalfwordReader + ?Sized,
{
    let first = reader.read_halfword(address)?;
    let mut words = InstructionWords::new(address, first);
    words.widen_to(reader, halfword_count(first))?;
    Ok(words)
}
