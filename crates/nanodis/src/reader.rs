//! Halfword sources for the decoder.

use thiserror::Error;

/// The reader could not supply the halfword at `address`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot read halfword at {address:#x}")]
pub struct MemoryFault {
    pub address: u64,
}

/// Supplies instruction halfwords by address.
///
/// Implemented for [`SliceReader`] and for any `Fn(u64) -> Result<u16, MemoryFault>`,
/// so a host can hand its own memory accessor to the decoder.
pub trait HalfwordReader {
    /// Read the halfword at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryFault`] when `address` is not readable.
    fn read_halfword(&self, address: u64) -> Result<u16, MemoryFault>;
}

impl<F> HalfwordReader for F
where
    F: Fn(u64) -> Result<u16, MemoryFault>,
{
    fn read_halfword(&self, address: u64) -> Result<u16, MemoryFault> {
        self(address)
    }
}

/// Byte order of the instruction stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

/// Reads halfwords from a byte slice mapped at `base`.
#[derive(Clone, Copy, Debug)]
pub struct SliceReader<'a> {
    base: u64,
    bytes: &'a [u8],
    endian: Endian,
}

impl<'a> SliceReader<'a> {
    /// Little-endian reader over `bytes` starting at `base`.
    #[must_use]
    pub const fn new(base: u64, bytes: &'a [u8]) -> Self {
        Self {
            base,
            bytes,
            endian: Endian::Little,
        }
    }

    #[must_use]
    pub const fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    #[must_use]
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// First address past the mapped bytes.
    #[must_use]
    pub const fn end(&self) -> u64 {
        self.base.wrapping_add(self.bytes.len() as u64)
    }

    #[must_use]
    pub const fn endian(&self) -> Endian {
        self.endian
    }
}

impl HalfwordReader for SliceReader<'_> {
    fn read_halfword(&self, address: u64) -> Result<u16, MemoryFault> {
        let fault = MemoryFault { address };
        let offset = address
            .checked_sub(self.base)
            .and_then(|offset| usize::try_from(offset).ok())
            .ok_or(fault)?;
        let bytes: [u8; 2] = self
            .bytes
            .get(offset..offset.checked_add(2).ok_or(fault)?)
            .and_then(|slice| slice.try_into().ok())
            .ok_or(fault)?;
        Ok(match self.endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }
}
