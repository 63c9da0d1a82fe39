//! Precomputed GF(2^8) multiplication tables for MixColumns.

use std::sync::OnceLock;

use sbox_core::gf256;

/// Lookup tables for the constant multipliers of the MDS matrix (2 and 3
/// forward; 9, 11, 13, 14 inverse). Built once from field multiplication
/// and read-only after, like the field-inverse table.
pub(crate) struct MixTables {
    pub mul2: [u8; 256],
    pub mul3: [u8; 256],
    pub mul9: [u8; 256],
    pub mul11: [u8; 256],
    pub mul13: [u8; 256],
    pub mul14: [u8; 256],
}

pub(crate) fn mix_tables() -> &'static MixTables {
    static TABLES: OnceLock<MixTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut tables = MixTables {
            mul2: [0; 256],
            mul3: [0; 256],
            mul9: [0; 256],
            mul11: [0; 256],
            mul13: [0; 256],
            mul14: [0; 256],
        };
        for x in 0..=255u8 {
            let i = x as usize;
            tables.mul2[i] = gf256::mul(x, 0x02);
            tables.mul3[i] = gf256::mul(x, 0x03);
            tables.mul9[i] = gf256::mul(x, 0x09);
            tables.mul11[i] = gf256::mul(x, 0x0b);
            tables.mul13[i] = gf256::mul(x, 0x0d);
            tables.mul14[i] = gf256::mul(x, 0x0e);
        }
        tables
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_matches_xtime() {
        let t = mix_tables();
        for x in 0..=255u8 {
            let shifted = x << 1;
            let expected = if x & 0x80 != 0 { shifted ^ 0x1b } else { shifted };
            assert_eq!(t.mul2[x as usize], expected);
        }
    }

    #[test]
    fn triple_is_double_xor_value() {
        let t = mix_tables();
        for x in 0..=255u8 {
            assert_eq!(t.mul3[x as usize], t.mul2[x as usize] ^ x);
        }
    }

    #[test]
    fn inverse_multipliers_match_field_mul() {
        let t = mix_tables();
        for x in [0u8, 1, 0x53, 0x80, 0xff] {
            assert_eq!(t.mul9[x as usize], gf256::mul(x, 9));
            assert_eq!(t.mul11[x as usize], gf256::mul(x, 11));
            assert_eq!(t.mul13[x as usize], gf256::mul(x, 13));
            assert_eq!(t.mul14[x as usize], gf256::mul(x, 14));
        }
    }
}
