//! Affine maps over GF(2) bit vectors.

use crate::matrix::Matrix8;

/// 8-bit affine map `x -> lin · x ⊕ bias`.
///
/// The bit-order convention is fixed across the workspace: bit `i` of a
/// byte is component `i` of the vector. The map is only an intermediate of
/// S-box construction; callers exchange whole bytes, never bit vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine8 {
    /// Linear component.
    pub lin: Matrix8,
    /// Additive constant, XORed after the linear map.
    pub bias: u8,
}

impl Affine8 {
    /// Constructs a new affine map from components.
    pub const fn new(lin: Matrix8, bias: u8) -> Self {
        Self { lin, bias }
    }

    /// Applies the affine map.
    #[inline]
    pub fn apply(&self, value: u8) -> u8 {
        self.lin.apply(value) ^ self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{AES_CONSTANT, AES_MATRIX};

    #[test]
    fn identity_map_with_zero_bias_is_identity() {
        let aff = Affine8::new(Matrix8::identity(), 0);
        for x in 0..=255u8 {
            assert_eq!(aff.apply(x), x);
        }
    }

    #[test]
    fn bias_is_applied_after_linear_part() {
        let aff = Affine8::new(Matrix8::identity(), 0x5A);
        assert_eq!(aff.apply(0x00), 0x5A);
        assert_eq!(aff.apply(0x5A), 0x00);
    }

    #[test]
    fn aes_affine_maps_zero_to_constant() {
        let aff = Affine8::new(AES_MATRIX, AES_CONSTANT);
        assert_eq!(aff.apply(0), 0x63);
    }
}
