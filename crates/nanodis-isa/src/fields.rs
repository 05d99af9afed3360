//! Instruction field extractors.
//!
//! Names follow the bit positions they read: `rt_25_21` is the register field
//! at bits [25:21], `s_se10_0_9_1` is a signed field assembled from bit 0 and
//! bits [9:1] with bit 10 as the sign bit. Multi-halfword opcodes are viewed
//! MSB-halfword-first, so bit 0 is the last bit of the final halfword.

use crate::bits::{extract_bits, sign_extend};

// 32-bit register fields

/// Register field at bits [25:21].
#[inline]
#[must_use]
pub const fn rt_25_21(op: u64) -> u64 {
    extract_bits(op, 21, 5)
}

/// Register field at bits [20:16].
#[inline]
#[must_use]
pub const fn rs_20_16(op: u64) -> u64 {
    extract_bits(op, 16, 5)
}

/// Register field at bits [15:11].
#[inline]
#[must_use]
pub const fn rd_15_11(op: u64) -> u64 {
    extract_bits(op, 11, 5)
}

/// Register field of 48-bit instructions at bits [41:37].
#[inline]
#[must_use]
pub const fn rt_41_37(op: u64) -> u64 {
    extract_bits(op, 37, 5)
}

// 16-bit register fields

/// Full register field at bits [9:5].
#[inline]
#[must_use]
pub const fn rt_9_5(op: u64) -> u64 {
    extract_bits(op, 5, 5)
}

/// Full register field at bits [4:0].
#[inline]
#[must_use]
pub const fn rs_4_0(op: u64) -> u64 {
    extract_bits(op, 0, 5)
}

/// 3-bit register code at bits [9:7].
#[inline]
#[must_use]
pub const fn rt3_9_7(op: u64) -> u64 {
    extract_bits(op, 7, 3)
}

/// 3-bit register code at bits [6:4].
#[inline]
#[must_use]
pub const fn rs3_6_4(op: u64) -> u64 {
    extract_bits(op, 4, 3)
}

/// 3-bit register code at bits [3:1].
#[inline]
#[must_use]
pub const fn rd3_3_1(op: u64) -> u64 {
    extract_bits(op, 1, 3)
}

/// 4-bit register code split as `bit9 << 3 | bits[7:5]`.
#[inline]
#[must_use]
pub const fn rt4_9_7_5(op: u64) -> u64 {
    (extract_bits(op, 9, 1) << 3) | extract_bits(op, 5, 3)
}

/// 4-bit register code split as `bit4 << 3 | bits[2:0]`.
#[inline]
#[must_use]
pub const fn rs4_4_2_0(op: u64) -> u64 {
    (extract_bits(op, 4, 1) << 3) | extract_bits(op, 0, 3)
}

/// 2-bit register-pair code split as `bit3 << 1 | bit8`.
#[inline]
#[must_use]
pub const fn rd2_3_8(op: u64) -> u64 {
    (extract_bits(op, 3, 1) << 1) | extract_bits(op, 8, 1)
}

/// 1-bit register code at bit 9.
#[inline]
#[must_use]
pub const fn rt1_9(op: u64) -> u64 {
    extract_bits(op, 9, 1)
}

/// 1-bit register code at bit 24.
#[inline]
#[must_use]
pub const fn rd1_24(op: u64) -> u64 {
    extract_bits(op, 24, 1)
}

/// 4-bit register code split as `bit25 << 3 | bits[23:21]`.
#[inline]
#[must_use]
pub const fn rtz4_25_23_21(op: u64) -> u64 {
    (extract_bits(op, 25, 1) << 3) | extract_bits(op, 21, 3)
}

// Unsigned immediates

/// Code field at bits [1:0].
#[inline]
#[must_use]
pub const fn code_1_0(op: u64) -> u64 {
    extract_bits(op, 0, 2)
}

/// Code field at bits [2:0].
#[inline]
#[must_use]
pub const fn code_2_0(op: u64) -> u64 {
    extract_bits(op, 0, 3)
}

/// Code field at bits [17:0].
#[inline]
#[must_use]
pub const fn code_17_0(op: u64) -> u64 {
    extract_bits(op, 0, 18)
}

/// Code field at bits [18:0].
#[inline]
#[must_use]
pub const fn code_18_0(op: u64) -> u64 {
    extract_bits(op, 0, 19)
}

/// Shift amount at bits [4:0].
#[inline]
#[must_use]
pub const fn shift_4_0(op: u64) -> u64 {
    extract_bits(op, 0, 5)
}

/// Raw 3-bit shift code at bits [2:0]; zero encodes 8.
#[inline]
#[must_use]
pub const fn shift3_2_0(op: u64) -> u64 {
    extract_bits(op, 0, 3)
}

/// SYNC stype at bits [20:16].
#[inline]
#[must_use]
pub const fn stype_20_16(op: u64) -> u64 {
    extract_bits(op, 16, 5)
}

/// 12-bit immediate at bits [11:0].
#[inline]
#[must_use]
pub const fn u_11_0(op: u64) -> u64 {
    extract_bits(op, 0, 12)
}

/// 16-bit immediate at bits [15:0].
#[inline]
#[must_use]
pub const fn u_15_0(op: u64) -> u64 {
    extract_bits(op, 0, 16)
}

/// 18-bit immediate at bits [17:0].
#[inline]
#[must_use]
pub const fn u_17_0(op: u64) -> u64 {
    extract_bits(op, 0, 18)
}

/// Word-scaled offset at bits [20:2].
#[inline]
#[must_use]
pub const fn u_20_2_s2(op: u64) -> u64 {
    extract_bits(op, 2, 19) << 2
}

/// Word-scaled offset at bits [3:0].
#[inline]
#[must_use]
pub const fn u_3_0_s2(op: u64) -> u64 {
    extract_bits(op, 0, 4) << 2
}

/// Word-scaled offset at bits [4:0].
#[inline]
#[must_use]
pub const fn u_4_0_s2(op: u64) -> u64 {
    extract_bits(op, 0, 5) << 2
}

/// Word-scaled immediate at bits [5:0].
#[inline]
#[must_use]
pub const fn u_5_0_s2(op: u64) -> u64 {
    extract_bits(op, 0, 6) << 2
}

/// Word-scaled offset at bits [6:0].
#[inline]
#[must_use]
pub const fn u_6_0_s2(op: u64) -> u64 {
    extract_bits(op, 0, 7) << 2
}

/// Word-scaled immediate at bits [2:0].
#[inline]
#[must_use]
pub const fn u_2_0_s2(op: u64) -> u64 {
    extract_bits(op, 0, 3) << 2
}

/// Byte offset at bits [1:0].
#[inline]
#[must_use]
pub const fn u_1_0(op: u64) -> u64 {
    extract_bits(op, 0, 2)
}

/// Halfword-scaled offset at bits [2:1].
#[inline]
#[must_use]
pub const fn u_2_1_s1(op: u64) -> u64 {
    extract_bits(op, 1, 2) << 1
}

/// Halfword-scaled branch offset at bits [3:0].
#[inline]
#[must_use]
pub const fn u_3_0_s1(op: u64) -> u64 {
    extract_bits(op, 0, 4) << 1
}

/// Word-scaled offset split as `bit3 << 3 | bit8 << 2`.
#[inline]
#[must_use]
pub const fn u_3_8_s2(op: u64) -> u64 {
    (extract_bits(op, 3, 1) << 3) | (extract_bits(op, 8, 1) << 2)
}

/// Stack frame size at bits [7:4], scaled by 16.
#[inline]
#[must_use]
pub const fn u_7_4_s4(op: u64) -> u64 {
    extract_bits(op, 4, 4) << 4
}

/// Stack frame size at bits [11:3], scaled by 8.
#[inline]
#[must_use]
pub const fn u_11_3_s3(op: u64) -> u64 {
    extract_bits(op, 3, 9) << 3
}

/// Register count at bits [3:0].
#[inline]
#[must_use]
pub const fn count_3_0(op: u64) -> u64 {
    extract_bits(op, 0, 4)
}

/// Register count at bits [19:16].
#[inline]
#[must_use]
pub const fn count_19_16(op: u64) -> u64 {
    extract_bits(op, 16, 4)
}

/// Raw 3-bit register count at bits [14:12]; zero encodes 8.
#[inline]
#[must_use]
pub const fn count3_14_12(op: u64) -> u64 {
    extract_bits(op, 12, 3)
}

/// Save/restore `gp` flag at bit 2.
#[inline]
#[must_use]
pub const fn gp_2(op: u64) -> u64 {
    extract_bits(op, 2, 1)
}

/// Compare immediate of the branch-immediate family at bits [17:11].
#[inline]
#[must_use]
pub const fn u_17_11(op: u64) -> u64 {
    extract_bits(op, 11, 7)
}

/// Bit index of the branch-on-bit family at bits [16:11].
#[inline]
#[must_use]
pub const fn bit_16_11(op: u64) -> u64 {
    extract_bits(op, 11, 6)
}

/// Literal code of `LI[16]` at bits [6:0].
#[inline]
#[must_use]
pub const fn eu_6_0(op: u64) -> u64 {
    extract_bits(op, 0, 7)
}

/// Mask code of `ANDI[16]` at bits [3:0].
#[inline]
#[must_use]
pub const fn eu_3_0(op: u64) -> u64 {
    extract_bits(op, 0, 4)
}

/// Least significant bit of an insert/extract range at bits [4:0].
#[inline]
#[must_use]
pub const fn lsb_4_0(op: u64) -> u64 {
    extract_bits(op, 0, 5)
}

/// Most significant bit of an insert/extract range at bits [10:6].
#[inline]
#[must_use]
pub const fn msbd_10_6(op: u64) -> u64 {
    extract_bits(op, 6, 5)
}

// Signed immediates

/// 4-bit signed immediate: `bit4 << 3 | bits[2:0]`.
#[inline]
#[must_use]
pub const fn s_se3_4_2_0(op: u64) -> i64 {
    let value = (extract_bits(op, 4, 1) << 3) | extract_bits(op, 0, 3);
    sign_extend(value, 3)
}

/// 8-bit branch offset: `bit0 << 7 | bits[6:1] << 1`.
#[inline]
#[must_use]
pub const fn s_se7_0_6_1(op: u64) -> i64 {
    let value = (extract_bits(op, 0, 1) << 7) | (extract_bits(op, 1, 6) << 1);
    sign_extend(value, 7)
}

/// 9-bit load/store offset: `bit15 << 8 | bits[7:0]`.
#[inline]
#[must_use]
pub const fn s_se8_15_7_0(op: u64) -> i64 {
    let value = (extract_bits(op, 15, 1) << 8) | extract_bits(op, 0, 8);
    sign_extend(value, 8)
}

/// 11-bit branch offset: `bit0 << 10 | bits[9:1] << 1`.
#[inline]
#[must_use]
pub const fn s_se10_0_9_1(op: u64) -> i64 {
    let value = (extract_bits(op, 0, 1) << 10) | (extract_bits(op, 1, 9) << 1);
    sign_extend(value, 10)
}

/// 12-bit branch offset: `bit0 << 11 | bits[10:1] << 1`.
#[inline]
#[must_use]
pub const fn s_se11_0_10_1(op: u64) -> i64 {
    let value = (extract_bits(op, 0, 1) << 11) | (extract_bits(op, 1, 10) << 1);
    sign_extend(value, 11)
}

/// 15-bit branch offset: `bit0 << 14 | bits[13:1] << 1`.
#[inline]
#[must_use]
pub const fn s_se14_0_13_1(op: u64) -> i64 {
    let value = (extract_bits(op, 0, 1) << 14) | (extract_bits(op, 1, 13) << 1);
    sign_extend(value, 14)
}

/// 22-bit PC-relative offset: `bit0 << 21 | bits[20:1] << 1`.
#[inline]
#[must_use]
pub const fn s_se21_0_20_1(op: u64) -> i64 {
    let value = (extract_bits(op, 0, 1) << 21) | (extract_bits(op, 1, 20) << 1);
    sign_extend(value, 21)
}

/// 26-bit branch offset: `bit0 << 25 | bits[24:1] << 1`.
#[inline]
#[must_use]
pub const fn s_se25_0_24_1(op: u64) -> i64 {
    let value = (extract_bits(op, 0, 1) << 25) | (extract_bits(op, 1, 24) << 1);
    sign_extend(value, 25)
}

/// Upper immediate of `LUI`/`ALUIPC`: `bit0 << 31 | bits[11:2] << 21 | bits[20:12] << 12`.
#[inline]
#[must_use]
pub const fn s_se31_0_11_2_20_12(op: u64) -> i64 {
    let value = (extract_bits(op, 0, 1) << 31)
        | (extract_bits(op, 2, 10) << 21)
        | (extract_bits(op, 12, 9) << 12);
    sign_extend(value, 31)
}

/// 32-bit immediate of 48-bit instructions.
///
/// The low half lives in the second halfword (bits [31:16]) and the high
/// half in the third (bits [15:0]).
#[inline]
#[must_use]
pub const fn s_se31_15_0_31_16(op: u64) -> i64 {
    let value = (extract_bits(op, 0, 16) << 16) | extract_bits(op, 16, 16);
    sign_extend(value, 31)
}
