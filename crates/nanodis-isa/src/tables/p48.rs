//! 48-bit immediate forms.

use crate::leaf::{Format, Leaf};
use crate::node::{DecodeNode, Pool};
use crate::Attributes;

const MASK: u64 = 0xfc1f_0000_0000;

const fn op(value: u64, name: &'static str, format: Format) -> DecodeNode {
    DecodeNode::instruction(48, MASK, value, Leaf::new(name, format))
        .with_attributes(Attributes::XMMS)
}

const fn reserved(name: &'static str, value: u64) -> DecodeNode {
    DecodeNode::reserved(name, 48, MASK, value)
}

/// Opcodes whose first halfword has major opcode `0b011000`.
///
/// Bits [36:32] select the operation; every slot is assigned or reserved.
pub static P48I: Pool = Pool {
    name: "P48I",
    entries: &[
        op(0x6000_0000_0000, "LI[48]", Format::Li48),
        op(0x6001_0000_0000, "ADDIU[48]", Format::Addiu48),
        op(0x6002_0000_0000, "ADDIU[GP48]", Format::AddiuGp48),
        op(0x6003_0000_0000, "ADDIUPC[48]", Format::Pc48),
        reserved("P48I~*(4)", 0x6004_0000_0000),
        reserved("P48I~*(5)", 0x6005_0000_0000),
        reserved("P48I~*(6)", 0x6006_0000_0000),
        reserved("P48I~*(7)", 0x6007_0000_0000),
        reserved("P48I~*(8)", 0x6008_0000_0000),
        reserved("P48I~*(9)", 0x6009_0000_0000),
        reserved("P48I~*(10)", 0x600a_0000_0000),
        op(0x600b_0000_0000, "LWPC[48]", Format::Pc48),
        reserved("P48I~*(12)", 0x600c_0000_0000),
        reserved("P48I~*(13)", 0x600d_0000_0000),
        reserved("P48I~*(14)", 0x600e_0000_0000),
        op(0x600f_0000_0000, "SWPC[48]", Format::Pc48),
        reserved("P48I~*(16)", 0x6010_0000_0000),
        reserved("P48I~*(17)", 0x6011_0000_0000),
        reserved("P48I~*(18)", 0x6012_0000_0000),
        reserved("P48I~*(19)", 0x6013_0000_0000),
        reserved("P48I~*(20)", 0x6014_0000_0000),
        reserved("P48I~*(21)", 0x6015_0000_0000),
        reserved("P48I~*(22)", 0x6016_0000_0000),
        reserved("P48I~*(23)", 0x6017_0000_0000),
        reserved("P48I~*(24)", 0x6018_0000_0000),
        reserved("P48I~*(25)", 0x6019_0000_0000),
        reserved("P48I~*(26)", 0x601a_0000_0000),
        reserved("P48I~*(27)", 0x601b_0000_0000),
        reserved("P48I~*(28)", 0x601c_0000_0000),
        reserved("P48I~*(29)", 0x601d_0000_0000),
        reserved("P48I~*(30)", 0x601e_0000_0000),
        reserved("P48I~*(31)", 0x601f_0000_0000),
    ],
};
