//! Table-driven nanoMIPS disassembler.
//!
//! Turns the 16-, 32- and 48-bit instructions of the nanoMIPS ISA into
//! mnemonic and operand text. Decoding walks the static tables of
//! [`nanodis_isa::tables`] in declaration order; failures are typed and
//! recoverable so a caller can keep going through a stream.
//!
//! ```
//! use nanodis::{Disassembler, SliceReader};
//!
//! let code = [0x85, 0x10];
//! let decoded = Disassembler::default()
//!     .decode(&SliceReader::new(0x1000, &code), 0x1000)
//!     .unwrap();
//! assert_eq!(decoded.text, "MOVE a0, a1");
//! ```

mod config;
mod engine;
mod error;
mod listing;
mod reader;
pub mod words;

pub use config::DecoderConfig;
pub use engine::{Decoded, Disassembler, decode};
pub use error::{DecodeError, ErrorKind};
pub use listing::ListingLine;
pub use nanodis_isa::{Attributes, Category};
pub use reader::{Endian, HalfwordReader, MemoryFault, SliceReader};
pub use words::{InstructionWords, assemble, halfword_count};
