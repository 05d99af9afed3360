//! Table walk.
//!
//! Decoding starts at the root pool and scans each pool's entries in
//! declaration order. A pool entry descends, a reserved entry fails and a
//! terminal entry is attribute-checked and rendered by its leaf.

use nanodis_isa::tables::MAJOR;
use nanodis_isa::{Attributes, Category, DecodeNode, Leaf, LeafContext, Payload, Pool};
use rayon::prelude::*;
use tracing::{debug, trace, trace_span};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::reader::{HalfwordReader, MemoryFault};
use crate::words::{InstructionWords, assemble};

/// A successfully decoded instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Mnemonic and operands.
    pub text: String,
    /// Width of the matched entry: 16, 32 or 48.
    pub bit_length: u8,
    pub category: Category,
    /// Table name of the matched entry, e.g. `ADDIU[R1.SP]`.
    pub name: &'static str,
}

impl Decoded {
    #[must_use]
    pub const fn byte_length(&self) -> u64 {
        self.bit_length as u64 / 8
    }
}

/// Table-driven decoder.
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Clone, Copy, Debug)]
pub struct Disassembler {
    config: DecoderConfig,
    root: &'static Pool,
}

impl Default for Disassembler {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl Disassembler {
    /// Decoder over the reference nanoMIPS tables.
    #[must_use]
    pub const fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            root: &MAJOR,
        }
    }

    /// Replace the root pool.
    #[must_use]
    pub const fn with_root(mut self, root: &'static Pool) -> Self {
        self.root = root;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode the instruction at `address`.
    ///
    /// # Errors
    ///
    /// See [`DecodeError`]. A reader fault aborts the decode with no partial
    /// result.
    pub fn decode<R>(&self, reader: &R, address: u64) -> Result<Decoded, DecodeError>
    where
        R: HalfwordReader + ?Sized,
    {
        let mut words = assemble(reader, address)?;
        self.decode_assembled(reader, &mut words)
    }

    /// Decode from halfwords already read by [`assemble`].
    ///
    /// `reader` is only consulted if a table entry needs more halfwords;
    /// those are appended to `words`.
    ///
    /// # Errors
    ///
    /// See [`DecodeError`].
    pub fn decode_assembled<R>(
        &self,
        reader: &R,
        words: &mut InstructionWords,
    ) -> Result<Decoded, DecodeError>
    where
        R: HalfwordReader + ?Sized,
    {
        let result = self.walk(self.root, reader, words);
        if let Err(err) = &result {
            debug!(
                address = format_args!("{:#x}", words.address()),
                opcode = format_args!("{:#x}", words.value()),
                %err,
                "decode failed"
            );
        }
        result
    }

    /// Decode independent addresses in parallel.
    ///
    /// Results are in the order of `addresses`.
    #[must_use]
    pub fn decode_many<R>(&self, reader: &R, addresses: &[u64]) -> Vec<Result<Decoded, DecodeError>>
    where
        R: HalfwordReader + Sync + ?Sized,
    {
        let _span = trace_span!("decode_many", count = addresses.len()).entered();
        addresses
            .par_iter()
            .map(|&address| self.decode(reader, address))
            .collect()
    }

    fn walk<R>(
        &self,
        pool: &'static Pool,
        reader: &R,
        words: &mut InstructionWords,
    ) -> Result<Decoded, DecodeError>
    where
        R: HalfwordReader + ?Sized,
    {
        for entry in pool.entries {
            let Some(opcode) = opcode_for(entry, reader, words)? else {
                continue;
            };
            if !entry.matches(opcode) {
                continue;
            }
            trace!(
                pool = pool.name,
                entry = entry.name,
                opcode = format_args!("{opcode:#x}"),
                "matched"
            );
            return match entry.payload {
                Payload::Pool(child) => self.walk(child, reader, words),
                Payload::Leaf(leaf) => self.render(entry, leaf, opcode, words.address()),
                Payload::None => Err(DecodeError::ReservedEncoding {
                    name: entry.name,
                    bit_length: entry.bit_width,
                }),
            };
        }
        Err(DecodeError::NoMatch {
            bit_length: pool.bit_width().unwrap_or_else(|| words.bit_length()),
        })
    }

    fn render(
        &self,
        entry: &DecodeNode,
        leaf: Leaf,
        opcode: u64,
        address: u64,
    ) -> Result<Decoded, DecodeError> {
        if !entry.attributes.accepted_by(self.config.attributes) {
            return Err(DecodeError::UnsupportedAttribute {
                name: entry.name,
                required: entry.attributes,
            });
        }
        let ctx = LeafContext {
            opcode,
            address,
            bit_width: entry.bit_width,
        };
        let text = leaf
            .render(&ctx)
            .map_err(|source| DecodeError::LeafFailure {
                name: entry.name,
                source,
            })?;
        Ok(Decoded {
            text,
            bit_length: entry.bit_width,
            category: entry.category,
            name: entry.name,
        })
    }
}

/// Opcode an entry is tested against, widening `words` if the entry is wider
/// than what has been assembled and its leading bits already agree.
fn opcode_for<R>(
    entry: &DecodeNode,
    reader: &R,
    words: &mut InstructionWords,
) -> Result<Option<u64>, MemoryFault>
where
    R: HalfwordReader + ?Sized,
{
    if let Some(opcode) = words.opcode(entry.bit_width) {
        return Ok(Some(opcode));
    }
    let known = words.bit_length();
    if !entry.matches_prefix(words.value(), known) {
        return Ok(None);
    }
    trace!(entry = entry.name, from = known, to = entry.bit_width, "widening");
    words.widen(reader, entry.bit_width)?;
    Ok(words.opcode(entry.bit_width))
}

/// Decode one instruction with the reference tables.
///
/// # Errors
///
/// See [`DecodeError`].
pub fn decode<R>(reader: &R, address: u64, attributes: Attributes) -> Result<Decoded, DecodeError>
where
    R: HalfwordReader + ?Sized,
{
    Disassembler::new(DecoderConfig::new(attributes)).decode(reader, address)
}
