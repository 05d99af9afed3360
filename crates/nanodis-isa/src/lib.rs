//! nanoMIPS instruction set data.
//!
//! Bit-field extraction, immediate transforms and compressed register
//! renumbering, plus the declarative decode tables built from them. The
//! decode engine that walks these tables lives in the `nanodis` crate.

mod attributes;
pub mod bits;
mod error;
pub mod fields;
pub mod imm;
mod leaf;
mod node;
pub mod registers;
pub mod tables;

pub use attributes::Attributes;
pub use bits::{extract_bits, sign_extend};
pub use error::{AttributeParseError, FieldError};
pub use leaf::{Format, Leaf, LeafContext, Offset3};
pub use node::{Category, DecodeNode, Guard, Payload, Pool};
pub use registers::{RegisterTable, gpr_name};
