//! Property-based tests for the decode engine.
//!
//! These tests verify invariants that hold for every input:
//! - Decoding never panics on arbitrary halfwords or attribute sets
//! - Decoding is deterministic
//! - Reported lengths agree with the length selector of the first halfword
//! - Enabling more attributes never turns a success into a failure

use proptest::prelude::*;

use nanodis::{
    Attributes, DecodeError, DecoderConfig, Disassembler, ErrorKind, MemoryFault, SliceReader,
    halfword_count,
};

fn bytes(halfwords: &[u16]) -> Vec<u8> {
    halfwords.iter().flat_map(|hw| hw.to_le_bytes()).collect()
}

fn attributes() -> impl Strategy<Value = Attributes> {
    any::<u32>().prop_map(Attributes::from_bits_truncate)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(5000))]

    /// Decoding arbitrary halfwords should never panic.
    #[test]
    fn decode_never_panics(
        halfwords in prop::collection::vec(any::<u16>(), 0..4),
        address in any::<u64>(),
        enabled in attributes(),
    ) {
        let code = bytes(&halfwords);
        let disasm = Disassembler::new(DecoderConfig::new(enabled));
        let _ = disasm.decode(&SliceReader::new(address, &code), address);
    }

    /// Same input, same output.
    #[test]
    fn decode_is_deterministic(
        halfwords in prop::array::uniform3(any::<u16>()),
        address in any::<u64>(),
        enabled in attributes(),
    ) {
        let code = bytes(&halfwords);
        let reader = SliceReader::new(address, &code);
        let disasm = Disassembler::new(DecoderConfig::new(enabled));
        prop_assert_eq!(disasm.decode(&reader, address), disasm.decode(&reader, address));
    }

    /// Matched and failing widths equal the length chosen from the first halfword.
    #[test]
    fn length_is_consistent(halfwords in prop::array::uniform3(any::<u16>())) {
        let code = bytes(&halfwords);
        let expected = halfword_count(halfwords[0]) * 16;
        match Disassembler::default().decode(&SliceReader::new(0, &code), 0) {
            Ok(decoded) => {
                prop_assert!(matches!(decoded.bit_length, 16 | 32 | 48));
                prop_assert_eq!(usize::from(decoded.bit_length), expected, "{}", decoded.text);
            }
            Err(err) => {
                if let Some(bit_length) = err.bit_length() {
                    prop_assert_eq!(usize::from(bit_length), expected);
                }
                prop_assert_ne!(err.kind(), ErrorKind::MemoryFault);
            }
        }
    }

    /// With every attribute enabled the gate never rejects.
    #[test]
    fn all_attributes_accept(halfwords in prop::array::uniform3(any::<u16>()), enabled in attributes()) {
        let code = bytes(&halfwords);
        let reader = SliceReader::new(0, &code);
        let full = Disassembler::default().decode(&reader, 0);
        let is_unsupported = matches!(full, Err(DecodeError::UnsupportedAttribute { .. }));
        prop_assert!(!is_unsupported);

        let partial = Disassembler::new(DecoderConfig::new(enabled)).decode(&reader, 0);
        match partial {
            Ok(decoded) => prop_assert_eq!(Ok(decoded), full),
            Err(DecodeError::UnsupportedAttribute { .. }) => prop_assert!(full.is_ok()),
            Err(err) => prop_assert_eq!(Err(err), full),
        }
    }

    /// A stream cut short inside an instruction faults instead of decoding.
    #[test]
    fn truncated_instruction_faults(
        first in any::<u16>().prop_map(|hw| hw & !0x1000),
        address in 0u64..0x1_0000,
    ) {
        prop_assert!(halfword_count(first) > 1);
        let code = bytes(&[first]);
        let result = Disassembler::default().decode(&SliceReader::new(address, &code), address);
        prop_assert_eq!(
            result,
            Err(DecodeError::MemoryFault(MemoryFault { address: address + 2 }))
        );
    }
}
