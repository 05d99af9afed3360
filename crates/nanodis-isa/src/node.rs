//! Decode table model.
//!
//! A [`Pool`] is an ordered list of [`DecodeNode`]s. The first node whose
//! `mask`/`value` pair and guard accept the opcode wins; later overlapping
//! nodes are only reached for opcodes the earlier ones reject.

use crate::fields::{rs3_6_4, rt_25_21, rt_9_5, rt3_9_7, u_3_0_s1};
use crate::{Attributes, Leaf};

/// Entry category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Dispatch into a subtable.
    Pool,
    /// Ordinary instruction.
    Instruction,
    /// Subroutine call (links a return address).
    Call,
    /// Branch or jump without link.
    Branch,
    /// Return from subroutine.
    Return,
    /// Explicitly unassigned encoding.
    Reserved,
}

impl Category {
    /// Whether this category ends the table walk with a leaf.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Instruction | Self::Call | Self::Branch | Self::Return)
    }
}

/// Extra predicate an entry applies after its mask/value test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Register field at bits [9:5] is not `zero`.
    Rt9NonZero,
    /// Register field at bits [25:21] is not `zero`.
    Rt25NonZero,
    /// `BEQC[16]`: `rs3 < rt3` and a non-zero offset.
    Beqc16,
    /// `BNEC[16]`: `rs3 >= rt3` and a non-zero offset.
    Bnec16,
}

impl Guard {
    #[must_use]
    pub const fn holds(self, opcode: u64) -> bool {
        match self {
            Self::Rt9NonZero => rt_9_5(opcode) != 0,
            Self::Rt25NonZero => rt_25_21(opcode) != 0,
            Self::Beqc16 => rs3_6_4(opcode) < rt3_9_7(opcode) && u_3_0_s1(opcode) != 0,
            Self::Bnec16 => rs3_6_4(opcode) >= rt3_9_7(opcode) && u_3_0_s1(opcode) != 0,
        }
    }
}

/// What a matched entry leads to.
#[derive(Clone, Copy, Debug)]
pub enum Payload {
    Pool(&'static Pool),
    Leaf(Leaf),
    None,
}

/// One candidate in a pool.
#[derive(Clone, Copy, Debug)]
pub struct DecodeNode {
    /// Table label, e.g. `P16.MV` or `ADDIU[32]`.
    pub name: &'static str,
    pub category: Category,
    /// Width of the opcode this entry is tested against (16, 32 or 48).
    pub bit_width: u8,
    pub mask: u64,
    pub value: u64,
    /// Features this encoding requires; empty means always available.
    pub attributes: Attributes,
    pub guard: Option<Guard>,
    pub payload: Payload,
}

impl DecodeNode {
    const fn base(name: &'static str, category: Category, bit_width: u8, mask: u64, value: u64) -> Self {
        Self {
            name,
            category,
            bit_width,
            mask,
            value,
            attributes: Attributes::empty(),
            guard: None,
            payload: Payload::None,
        }
    }

    /// Dispatch into `pool` when `opcode & mask == value`.
    #[must_use]
    pub const fn pool(name: &'static str, bit_width: u8, mask: u64, value: u64, pool: &'static Pool) -> Self {
        let mut node = Self::base(name, Category::Pool, bit_width, mask, value);
        node.payload = Payload::Pool(pool);
        node
    }

    /// Terminal entry of `category` rendered by `leaf`.
    #[must_use]
    pub const fn terminal(category: Category, bit_width: u8, mask: u64, value: u64, leaf: Leaf) -> Self {
        let mut node = Self::base(leaf.name, category, bit_width, mask, value);
        node.payload = Payload::Leaf(leaf);
        node
    }

    #[must_use]
    pub const fn instruction(bit_width: u8, mask: u64, value: u64, leaf: Leaf) -> Self {
        Self::terminal(Category::Instruction, bit_width, mask, value, leaf)
    }

    #[must_use]
    pub const fn call(bit_width: u8, mask: u64, value: u64, leaf: Leaf) -> Self {
        Self::terminal(Category::Call, bit_width, mask, value, leaf)
    }

    #[must_use]
    pub const fn branch(bit_width: u8, mask: u64, value: u64, leaf: Leaf) -> Self {
        Self::terminal(Category::Branch, bit_width, mask, value, leaf)
    }

    #[must_use]
    pub const fn ret(bit_width: u8, mask: u64, value: u64, leaf: Leaf) -> Self {
        Self::terminal(Category::Return, bit_width, mask, value, leaf)
    }

    /// Explicitly unassigned encoding.
    #[must_use]
    pub const fn reserved(name: &'static str, bit_width: u8, mask: u64, value: u64) -> Self {
        Self::base(name, Category::Reserved, bit_width, mask, value)
    }

    #[must_use]
    pub const fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub const fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Mask/value test followed by the guard, if any.
    #[must_use]
    pub const fn matches(&self, opcode: u64) -> bool {
        if opcode & self.mask != self.value {
            return false;
        }
        match self.guard {
            Some(guard) => guard.holds(opcode),
            None => true,
        }
    }

    /// Mask/value test restricted to the leading `known_bits` of the opcode.
    ///
    /// Used before reading more halfwords for an entry wider than what has
    /// been assembled; guards are not consulted.
    #[must_use]
    pub const fn matches_prefix(&self, prefix: u64, known_bits: u8) -> bool {
        if known_bits >= self.bit_width {
            return prefix & self.mask == self.value;
        }
        let drop = (self.bit_width - known_bits) as u32;
        prefix & (self.mask >> drop) == self.value >> drop
    }
}

/// Ordered decode table.
#[derive(Debug)]
pub struct Pool {
    pub name: &'static str,
    pub entries: &'static [DecodeNode],
}

impl Pool {
    #[must_use]
    pub const fn new(name: &'static str, entries: &'static [DecodeNode]) -> Self {
        Self { name, entries }
    }

    /// Width shared by the entries, or `None` for a length-dispatch pool.
    #[must_use]
    pub fn bit_width(&self) -> Option<u8> {
        let first = self.entries.first()?.bit_width;
        self.entries
            .iter()
            .all(|entry| entry.bit_width == first)
            .then_some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Format;

    const NOP: Leaf = Leaf::new("NOP[16]", Format::Bare);

    #[test]
    fn test_guard() {
        // MOVE a0, a1
        assert!(Guard::Rt9NonZero.holds(0x1085));
        assert!(!Guard::Rt9NonZero.holds(0x1005));
        // BEQC s0, s1 vs BNEC s1, s0
        assert!(Guard::Beqc16.holds(0xd882));
        assert!(!Guard::Bnec16.holds(0xd882));
        assert!(Guard::Bnec16.holds(0xd812));
        // Zero offset belongs to neither.
        assert!(!Guard::Beqc16.holds(0xd880));
        assert!(!Guard::Bnec16.holds(0xd810));
    }

    #[test]
    fn test_matches_with_guard() {
        let node = DecodeNode::instruction(16, 0xfc00, 0x1000, NOP).with_guard(Guard::Rt9NonZero);
        assert!(node.matches(0x1085));
        assert!(!node.matches(0x1005));
        assert!(!node.matches(0x1485));
    }

    #[test]
    fn test_matches_prefix() {
        static EMPTY: Pool = Pool::new("EMPTY", &[]);
        let wide = DecodeNode::pool("P48I", 48, 0xfc00_0000_0000, 0x6000_0000_0000, &EMPTY);
        assert!(wide.matches_prefix(0x6080, 16));
        assert!(wide.matches_prefix(0x6080_5678, 32));
        assert!(!wide.matches_prefix(0x8000, 16));
        assert!(!wide.matches_prefix(0x8000_c000, 32));
        assert!(wide.matches_prefix(0x6080_5678_1234, 48));
    }

    #[test]
    fn test_builders() {
        let node = DecodeNode::call(16, 0xfc00, 0x3800, NOP).with_attributes(Attributes::XMMS);
        assert_eq!(node.category, Category::Call);
        assert_eq!(node.name, "NOP[16]");
        assert_eq!(node.attributes, Attributes::XMMS);
        let reserved = DecodeNode::reserved("P16~*(10)", 16, 0xfc00, 0x5800);
        assert_eq!(reserved.category, Category::Reserved);
        assert!(matches!(reserved.payload, Payload::None));
        assert!(!Category::Reserved.is_terminal());
        assert!(Category::Return.is_terminal());
    }
}
