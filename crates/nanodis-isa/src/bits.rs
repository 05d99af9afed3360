//! Bit-slice extraction and sign extension over a 64-bit container.

/// Extract the `width`-bit unsigned field starting at bit `offset` (bit 0 = LSB).
///
/// Callers guarantee `offset + width <= 64`. A zero width yields 0.
#[inline]
#[must_use]
pub const fn extract_bits(data: u64, offset: u32, width: u32) -> u64 {
    debug_assert!(offset + width <= 64);
    if width == 0 {
        return 0;
    }
    (data >> offset) & (u64::MAX >> (64 - width))
}

/// Sign-extend `value`, treating bit `msb` as the sign bit.
///
/// Bits above `msb` are discarded before extension, so callers may pass
/// values with stale high bits.
#[inline]
#[must_use]
pub const fn sign_extend(value: u64, msb: u32) -> i64 {
    debug_assert!(msb <= 63);
    let shift = 63 - msb;
    (value << shift).cast_signed() >> shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bits() {
        // rt field of ADDIU a0, a1, 0x10 (bits [25:21])
        assert_eq!(extract_bits(0x0085_0010, 21, 5), 4);
        // rs field (bits [20:16])
        assert_eq!(extract_bits(0x0085_0010, 16, 5), 5);
        assert_eq!(extract_bits(0xffff_ffff_ffff_ffff, 0, 64), u64::MAX);
        assert_eq!(extract_bits(0x8000_0000_0000_0000, 63, 1), 1);
        assert_eq!(extract_bits(0x1234, 4, 0), 0);
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x3ff, 9), -1);
        assert_eq!(sign_extend(0x1ff, 9), 0x1ff);
        assert_eq!(sign_extend(0x400, 10), -1024);
        // High garbage above the sign bit is ignored.
        assert_eq!(sign_extend(0xf0_0001, 7), 1);
        assert_eq!(sign_extend(u64::MAX, 63), -1);
        assert_eq!(sign_extend(0x8000_0000, 31), i64::from(i32::MIN));
    }

    #[test]
    fn test_sign_extend_idempotent() {
        for raw in [0u64, 1, 0x7f, 0x80, 0xff, 0x1234, 0xdead_beef] {
            let once = sign_extend(raw, 7);
            assert_eq!(sign_extend(once.cast_unsigned(), 7), once);
        }
    }
}
