//! Bit independence criterion, non-linearity and SAC variants.

use rayon::prelude::*;
use sbox_core::SBox;

use crate::boolean::bit_function;
use crate::nl::function_nonlinearity;

/// The 28 unordered pairs of distinct output-bit positions.
fn bit_pairs() -> Vec<(u32, u32)> {
    let mut pairs = Vec::with_capacity(28);
    for i in 0..8 {
        for j in i + 1..8 {
            pairs.push((i, j));
        }
    }
    pairs
}

/// BIC-NL: minimum non-linearity over the XOR of every pair of output
/// bits. Low values mean two output bits behave almost linearly together.
pub fn bic_nonlinearity(sbox: &SBox) -> u32 {
    bit_pairs()
        .into_par_iter()
        .map(|(i, j)| {
            let bit_i = bit_function(sbox, i);
            let bit_j = bit_function(sbox, j);
            let mut xor = [0u8; 256];
            for (slot, (&a, &b)) in xor.iter_mut().zip(bit_i.iter().zip(bit_j.iter())) {
                *slot = a ^ b;
            }
            function_nonlinearity(&xor)
        })
        .min()
        .expect("28 bit pairs")
}

/// BIC-SAC: mean over every input-bit flip and every output-bit pair of
/// the fraction of inputs whose pair-XOR changes. Ideal value 0.5.
pub fn bic_sac(sbox: &SBox) -> f64 {
    let pairs = bit_pairs();
    let mut total = 0.0f64;
    let mut count = 0u32;
    for k in 0..8 {
        let mask = 1u8 << k;
        for &(i, j) in &pairs {
            let changes = (0..256u32)
                .filter(|&x| {
                    let x = x as u8;
                    let s = sbox.lookup(x);
                    let s_flipped = sbox.lookup(x ^ mask);
                    let xor = ((s >> i) & 1) ^ ((s >> j) & 1);
                    let xor_flipped = ((s_flipped >> i) & 1) ^ ((s_flipped >> j) & 1);
                    xor != xor_flipped
                })
                .count();
            total += changes as f64 / 256.0;
            count += 1;
        }
    }
    total / f64::from(count)
}
