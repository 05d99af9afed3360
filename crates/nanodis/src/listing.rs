//! Sequential disassembly of an instruction stream.

use std::fmt;

use tracing::debug;

use crate::engine::{Decoded, Disassembler};
use crate::error::DecodeError;
use crate::reader::HalfwordReader;
use crate::words::assemble;

/// One row of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    pub address: u64,
    /// Halfwords consumed, in assembly order.
    pub halfwords: Vec<u16>,
    pub result: Result<Decoded, DecodeError>,
}

impl ListingLine {
    /// Disassembly text, or the failure reason in its place.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.result {
            Ok(decoded) => &decoded.text,
            Err(err) => err.reason(),
        }
    }
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self
            .halfwords
            .iter()
            .map(|hw| format!("{hw:04x}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{:08x}:  {raw:<16}{}", self.address, self.text())
    }
}

impl Disassembler {
    /// Disassemble up to `count` consecutive instructions from `start`.
    ///
    /// An undecodable instruction is listed with its failure and skipped by
    /// its assembled length. A reader fault is listed and ends the listing.
    #[must_use]
    pub fn disassemble<R>(&self, reader: &R, start: u64, count: usize) -> Vec<ListingLine>
    where
        R: HalfwordReader + ?Sized,
    {
        let mut lines = Vec::with_capacity(count);
        let mut address = start;
        for _ in 0..count {
            let mut words = match assemble(reader, address) {
                Ok(words) => words,
                Err(fault) => {
                    debug!(
                        address = format_args!("{address:#x}"),
                        "listing stopped at unreadable address"
                    );
                    lines.push(ListingLine {
                        address,
                        halfwords: Vec::new(),
                        result: Err(fault.into()),
                    });
                    break;
                }
            };
            let result = self.decode_assembled(reader, &mut words);
            let step = match &result {
                Ok(decoded) => decoded.byte_length(),
                Err(DecodeError::MemoryFault(_)) => 0,
                Err(_) => {
                    debug!(
                        address = format_args!("{address:#x}"),
                        halfwords = words.len(),
                        "skipping undecodable instruction"
                    );
                    words.byte_length()
                }
            };
            lines.push(ListingLine {
                address,
                halfwords: words.halfwords().to_vec(),
                result,
            });
            if step == 0 {
                break;
            }
            address = address.wrapping_add(step);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::reader::SliceReader;

    fn bytes(words: &[u16]) -> Vec<u8> {
        words.iter().flat_map(|hw| hw.to_le_bytes()).collect()
    }

    #[test]
    fn test_mixed_lengths() {
        // MOVE a0, a1 / NOP[32] / LI[48] a0, 0x12345678 / NOP[16]
        let code = bytes(&[0x1085, 0x8000, 0xc000, 0x6080, 0x5678, 0x1234, 0x9008]);
        let reader = SliceReader::new(0x1000, &code);
        let lines = Disassembler::default().disassemble(&reader, 0x1000, 4);
        let addresses: Vec<u64> = lines.iter().map(|line| line.address).collect();
        assert_eq!(addresses, [0x1000, 0x1002, 0x1006, 0x100c]);
        let texts: Vec<&str> = lines.iter().map(ListingLine::text).collect();
        assert_eq!(texts, ["MOVE a0, a1", "NOP", "LI a0, 0x12345678", "NOP"]);
        assert_eq!(lines[2].halfwords, [0x6080, 0x5678, 0x1234]);
    }

    #[test]
    fn test_failures_are_skipped() {
        // reserved 16-bit / unassigned 32-bit / MOVE
        let code = bytes(&[0x1000, 0xa000, 0x0000, 0x1085]);
        let reader = SliceReader::new(0, &code);
        let lines = Disassembler::default().disassemble(&reader, 0, 3);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "reserved instruction");
        assert_eq!(lines[1].text(), "failed to disassemble");
        assert_eq!(lines[1].halfwords, [0xa000, 0x0000]);
        assert_eq!(lines[2].address, 6);
        assert_eq!(lines[2].text(), "MOVE a0, a1");
    }

    #[test]
    fn test_fault_ends_listing() {
        let code = bytes(&[0x1085, 0x8000]);
        let reader = SliceReader::new(0, &code);
        let lines = Disassembler::default().disassemble(&reader, 0, 10);
        assert_eq!(lines.len(), 2);
        let last = lines[1].result.as_ref().unwrap_err();
        assert_eq!(last.kind(), ErrorKind::MemoryFault);
        assert!(lines[1].halfwords.is_empty());
    }

    #[test]
    fn test_display() {
        let code = bytes(&[0x1085, 0x8000, 0xc000]);
        let reader = SliceReader::new(0x400, &code);
        let lines = Disassembler::default().disassemble(&reader, 0x400, 2);
        assert_eq!(lines[0].to_string(), "00000400:  1085            MOVE a0, a1");
        assert_eq!(lines[1].to_string(), "00000402:  8000 c000       NOP");
    }
}
