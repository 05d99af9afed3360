//! Decode failures.

use nanodis_isa::{Attributes, FieldError};
use thiserror::Error;

use crate::reader::MemoryFault;

/// Why an address did not decode.
///
/// Every variant is recoverable: a caller disassembling a stream reports the
/// failure and moves on to the next instruction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("no {bit_length}-bit table entry matches")]
    NoMatch { bit_length: u8 },

    #[error("reserved {bit_length}-bit encoding {name}")]
    ReservedEncoding { name: &'static str, bit_length: u8 },

    #[error("{name} requires disabled attributes {required:?}")]
    UnsupportedAttribute {
        name: &'static str,
        required: Attributes,
    },

    #[error("{name}: {source}")]
    LeafFailure {
        name: &'static str,
        #[source]
        source: FieldError,
    },

    #[error(transparent)]
    MemoryFault(#[from] MemoryFault),
}

/// Coarse classification of a [`DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NoMatch,
    ReservedEncoding,
    UnsupportedAttribute,
    InvalidRegisterMapping,
    InvalidBitRange,
    MemoryFault,
}

impl DecodeError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoMatch { .. } => ErrorKind::NoMatch,
            Self::ReservedEncoding { .. } => ErrorKind::ReservedEncoding,
            Self::UnsupportedAttribute { .. } => ErrorKind::UnsupportedAttribute,
            Self::LeafFailure {
                source: FieldError::InvalidRegisterMapping { .. },
                ..
            } => ErrorKind::InvalidRegisterMapping,
            Self::LeafFailure {
                source: FieldError::InvalidBitRange { .. },
                ..
            } => ErrorKind::InvalidBitRange,
            Self::MemoryFault(_) => ErrorKind::MemoryFault,
        }
    }

    /// Short text shown in a listing in place of the disassembly.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self.kind() {
            ErrorKind::NoMatch => "failed to disassemble",
            ErrorKind::ReservedEncoding => "reserved instruction",
            ErrorKind::UnsupportedAttribute => "ASE attribute mismatch",
            ErrorKind::InvalidRegisterMapping => "invalid register mapping",
            ErrorKind::InvalidBitRange => "invalid bit range",
            ErrorKind::MemoryFault => "memory read failed",
        }
    }

    /// Instruction width known at the point of failure, if any.
    #[must_use]
    pub const fn bit_length(&self) -> Option<u8> {
        match self {
            Self::NoMatch { bit_length } | Self::ReservedEncoding { bit_length, .. } => {
                Some(*bit_length)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_reason() {
        let err = DecodeError::NoMatch { bit_length: 16 };
        assert_eq!(err.kind(), ErrorKind::NoMatch);
        assert_eq!(err.reason(), "failed to disassemble");
        assert_eq!(err.bit_length(), Some(16));

        let err = DecodeError::UnsupportedAttribute {
            name: "ADDQ.PH",
            required: Attributes::DSP,
        };
        assert_eq!(err.reason(), "ASE attribute mismatch");
        assert_eq!(err.bit_length(), None);

        let err = DecodeError::ReservedEncoding {
            name: "P16~*(10)",
            bit_length: 16,
        };
        assert_eq!(err.reason(), "reserved instruction");
        assert_eq!(err.to_string(), "reserved 16-bit encoding P16~*(10)");
    }

    #[test]
    fn test_leaf_failure_kinds() {
        let err = DecodeError::LeafFailure {
            name: "MOVEP",
            source: FieldError::InvalidRegisterMapping {
                table: "gpr4",
                index: 16,
                table_size: 16,
            },
        };
        assert_eq!(err.kind(), ErrorKind::InvalidRegisterMapping);
        assert!(std::error::Error::source(&err).is_some());

        let err = DecodeError::LeafFailure {
            name: "INS",
            source: FieldError::InvalidBitRange { lsb: 8, msbd: 2 },
        };
        assert_eq!(err.kind(), ErrorKind::InvalidBitRange);
        assert_eq!(err.to_string(), "INS: invalid bit-field range: msbd 2 below lsb 8");
    }

    #[test]
    fn test_memory_fault_conversion() {
        let err: DecodeError = MemoryFault { address: 0x1002 }.into();
        assert_eq!(err.kind(), ErrorKind::MemoryFault);
        assert_eq!(err.to_string(), "cannot read halfword at 0x1002");
    }
}
