//! Immediate post-processing.
//!
//! These run after field extraction and turn the raw encoded value into the
//! logical operand value printed by the formatter.

use crate::FieldError;

/// Unsigned identity.
#[inline]
#[must_use]
pub const fn unsigned(value: u64) -> u64 {
    value
}

/// Signed identity.
#[inline]
#[must_use]
pub const fn signed(value: i64) -> i64 {
    value
}

/// Negate an unsigned immediate (`ADDIU[NEG]`).
#[inline]
#[must_use]
pub const fn negate(value: u64) -> i64 {
    value.cast_signed().wrapping_neg()
}

/// A zero encoding stands for `n`; other values are literal.
#[inline]
#[must_use]
pub const fn zero_means(value: u64, n: u64) -> u64 {
    if value == 0 { n } else { value }
}

/// Substitute `replacement` when the raw field equals `sentinel`.
#[inline]
#[must_use]
pub const fn sentinel(value: u64, sentinel: u64, replacement: i64) -> i64 {
    if value == sentinel {
        replacement
    } else {
        value.cast_signed()
    }
}

/// 3-bit shift amount of the 16-bit shifts: 0 encodes 8.
#[inline]
#[must_use]
pub const fn shift3(value: u64) -> u64 {
    zero_means(value, 8)
}

/// 3-bit register count of `LWM`/`SWM`: 0 encodes 8.
#[inline]
#[must_use]
pub const fn count3(value: u64) -> u64 {
    zero_means(value, 8)
}

/// Literal of `LI[16]`: the saturated code 127 encodes -1.
#[inline]
#[must_use]
pub const fn li16(value: u64) -> i64 {
    sentinel(value, 127, -1)
}

/// Mask of `ANDI[16]`: codes 12 and 13 encode byte and halfword masks.
#[inline]
#[must_use]
pub const fn andi16(value: u64) -> u64 {
    match value {
        12 => 0xff,
        13 => 0xffff,
        _ => value,
    }
}

/// Field size of `EXT rt, rs, pos, size`, encoded as `msbd = size - 1`.
#[inline]
#[must_use]
pub const fn ext_size(msbd: u64) -> u64 {
    msbd + 1
}

/// Field size of `INS rt, rs, pos, size`, encoded as `msbd = pos + size - 1`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidBitRange`] when `msbd < lsb`, which names no
/// field at all.
#[inline]
pub const fn ins_size(lsb: u64, msbd: u64) -> Result<u64, FieldError> {
    if msbd < lsb {
        return Err(FieldError::InvalidBitRange { lsb, msbd });
    }
    Ok(msbd + 1 - lsb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(unsigned(0x1234), 0x1234);
        assert_eq!(signed(-7), -7);
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(0), 0);
        assert_eq!(negate(5), -5);
        assert_eq!(negate(0xfff), -4095);
        // Full-width values reinterpret as two's complement.
        assert_eq!(negate(u64::MAX), 1);
        assert_eq!(sentinel(u64::MAX, 127, -1), -1);
        assert_eq!(sentinel(127, 127, -1), -1);
    }

    #[test]
    fn test_shift3_table() {
        let expected = [8, 1, 2, 3, 4, 5, 6, 7];
        for (code, want) in expected.into_iter().enumerate() {
            assert_eq!(shift3(code as u64), want);
        }
        assert_eq!(count3(0), 8);
        assert_eq!(count3(3), 3);
    }

    #[test]
    fn test_li16_table() {
        assert_eq!(li16(0), 0);
        assert_eq!(li16(1), 1);
        assert_eq!(li16(126), 126);
        assert_eq!(li16(127), -1);
    }

    #[test]
    fn test_andi16_table() {
        for code in 0..12 {
            assert_eq!(andi16(code), code);
        }
        assert_eq!(andi16(12), 0xff);
        assert_eq!(andi16(13), 0xffff);
        assert_eq!(andi16(14), 14);
        assert_eq!(andi16(15), 15);
    }

    #[test]
    fn test_ext_size() {
        // EXT a0, a1, 3, 4 encodes lsb=3, msbd=3
        assert_eq!(ext_size(3), 4);
        // EXT t0, t1, 0, 32 encodes msbd=31
        assert_eq!(ext_size(31), 32);
    }

    #[test]
    fn test_ins_size() {
        // INS a0, a1, 4, 8 encodes lsb=4, msbd=11
        assert_eq!(ins_size(4, 11), Ok(8));
        // INS a0, a1, 0, 32 encodes lsb=0, msbd=31
        assert_eq!(ins_size(0, 31), Ok(32));
        assert_eq!(ins_size(7, 7), Ok(1));
        assert_eq!(
            ins_size(8, 2),
            Err(FieldError::InvalidBitRange { lsb: 8, msbd: 2 })
        );
    }
}
