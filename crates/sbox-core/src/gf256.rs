//! GF(2^8) field arithmetic under the AES irreducible polynomial.
//!
//! All operations are total functions over `[0, 255]`; there are no error
//! conditions. The inverse lookup table is the only process-wide shared
//! state in the workspace and is read-only once built.

use std::sync::OnceLock;

/// The AES irreducible polynomial x^8 + x^4 + x^3 + x + 1.
pub const IRREDUCIBLE_POLY: u16 = 0x11B;

/// Field addition: XOR.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication via the shift-and-reduce (Russian peasant)
/// algorithm, reducing modulo [`IRREDUCIBLE_POLY`] whenever a bit-8 carry
/// appears.
pub fn mul(a: u8, b: u8) -> u8 {
    let mut a = u16::from(a);
    let mut b = u16::from(b);
    let mut product = 0u16;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= IRREDUCIBLE_POLY;
        }
        b >>= 1;
    }
    product as u8
}

/// Field exponentiation by square-and-multiply.
pub fn pow(base: u8, exponent: u32) -> u8 {
    let mut result = 1u8;
    let mut base = base;
    let mut exponent = exponent;
    while exponent != 0 {
        if exponent & 1 != 0 {
            result = mul(result, base);
        }
        base = mul(base, base);
        exponent >>= 1;
    }
    result
}

/// Multiplicative inverse.
///
/// Zero has no true inverse and maps to zero by convention, matching the
/// AES S-box construction. For nonzero `a` the inverse is `a^254` by
/// Fermat's little theorem over the 255-element multiplicative group.
pub fn inverse(a: u8) -> u8 {
    if a == 0 {
        0
    } else {
        pow(a, 254)
    }
}

/// Precomputed inverse table, built once on first use and read-only after.
pub fn inverse_table() -> &'static [u8; 256] {
    static TABLE: OnceLock<[u8; 256]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = [0u8; 256];
        for (value, slot) in table.iter_mut().enumerate() {
            *slot = inverse(value as u8);
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_matches_fips_example() {
        // FIPS-197 §4.2: {57} · {83} = {c1}.
        assert_eq!(mul(0x57, 0x83), 0xC1);
    }

    #[test]
    fn mul_identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(mul(a, 1), a);
            assert_eq!(mul(a, 0), 0);
            assert_eq!(mul(0, a), 0);
        }
    }

    #[test]
    fn mul_commutes() {
        for a in [0x01u8, 0x03, 0x53, 0x8f, 0xca, 0xff] {
            for b in [0x02u8, 0x1b, 0x57, 0x83, 0xe7] {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn pow_zero_exponent_is_one() {
        for base in [0u8, 1, 2, 0x53, 0xff] {
            assert_eq!(pow(base, 0), 1);
        }
    }

    #[test]
    fn inverse_round_trips_for_nonzero() {
        for a in 1..=255u8 {
            assert_eq!(mul(a, inverse(a)), 1, "a = {a:#04x}");
        }
    }

    #[test]
    fn inverse_of_zero_is_zero() {
        assert_eq!(inverse(0), 0);
    }

    #[test]
    fn table_agrees_with_direct_computation() {
        let table = inverse_table();
        assert_eq!(table[0], 0);
        assert_eq!(table[1], 1);
        // x^(-1) of 0x53 is 0xCA in the AES field.
        assert_eq!(table[0x53], 0xCA);
        for a in 0..=255u8 {
            assert_eq!(table[a as usize], inverse(a));
        }
    }
}
