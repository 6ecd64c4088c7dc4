/*!

This module is for splitting 14-bit values into the two 7-bit data bytes that carry them.

!*/

/// Returns `(lsb, msb)`: the low seven bits and the high seven bits of a 14-bit number. Bits above
/// the fourteenth are ignored.
#[inline]
pub(crate) fn split_14_bit_number(value: u16) -> (u8, u8) {
    let lo_bits = value & 0b0000000001111111;
    let hi_bits = (value & 0b0011111110000000) >> 7;
    (lo_bits as u8, hi_bits as u8)
}

/// Reassembles a 14-bit number from its two 7-bit halves.
#[inline]
pub(crate) fn join_14_bit_number(lsb: u8, msb: u8) -> u16 {
    (((msb & 0b0111_1111) as u16) << 7) | ((lsb & 0b0111_1111) as u16)
}

#[cfg(test)]
mod bit_tests {
    use super::*;

    struct Number14Bit {
        value: u16,
        lo_bits: u8,
        hi_bits: u8,
    }

    const NUMBER_14_BIT_08192: Number14Bit = Number14Bit {
        value: 0b0010000000000000,
        lo_bits: 0b0000000,
        hi_bits: 0b1000000,
    };

    const NUMBER_14_BIT_08292: Number14Bit = Number14Bit {
        value: 0b0010000001100100,
        lo_bits: 0b1100100,
        hi_bits: 0b1000000,
    };

    const NUMBER_14_BIT_08092: Number14Bit = Number14Bit {
        value: 0b0001111110011100,
        lo_bits: 0b0011100,
        hi_bits: 0b0111111,
    };

    const NUMBER_14_BIT_16383: Number14Bit = Number14Bit {
        value: 0b0011111111111111,
        lo_bits: 0b1111111,
        hi_bits: 0b1111111,
    };

    const NUMBER_14_BIT_00001: Number14Bit = Number14Bit {
        value: 0b0000000000000001,
        lo_bits: 0b0000001,
        hi_bits: 0b0000000,
    };

    fn check(data: Number14Bit) {
        assert_eq!(split_14_bit_number(data.value), (data.lo_bits, data.hi_bits));
        assert_eq!(join_14_bit_number(data.lo_bits, data.hi_bits), data.value);
    }

    #[test]
    fn test_14_bit_08192() {
        check(NUMBER_14_BIT_08192);
    }

    #[test]
    fn test_14_bit_08292() {
        check(NUMBER_14_BIT_08292);
    }

    #[test]
    fn test_14_bit_08092() {
        check(NUMBER_14_BIT_08092);
    }

    #[test]
    fn test_14_bit_16383() {
        check(NUMBER_14_BIT_16383);
    }

    #[test]
    fn test_14_bit_00001() {
        check(NUMBER_14_BIT_00001);
    }

    #[test]
    fn test_14_all() {
        for i in 0..=16383u16 {
            let (lsb, msb) = split_14_bit_number(i);
            assert!(lsb <= 127 && msb <= 127);
            assert_eq!(i & 127, lsb as u16);
            assert_eq!(i >> 7, msb as u16);
            assert_eq!(i, join_14_bit_number(lsb, msb));
        }
    }
}
