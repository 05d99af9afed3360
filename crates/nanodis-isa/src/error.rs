//! Leaf-level faults.

use thiserror::Error;

/// Fault raised while rendering the operands of a matched instruction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid {table} register mapping: index {index} outside table of {table_size}")]
    InvalidRegisterMapping {
        table: &'static str,
        index: u64,
        table_size: usize,
    },
    #[error("invalid bit-field range: msbd {msbd} below lsb {lsb}")]
    InvalidBitRange { lsb: u64, msbd: u64 },
}

/// Unknown name passed to [`crate::Attributes::from_str`](std::str::FromStr).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ISA attribute: {0}")]
pub struct AttributeParseError(pub String);
