//! Walsh–Hadamard and Möbius transforms of 256-entry Boolean functions.

const N: usize = 256;

fn to_signed(func: &[u8; N]) -> [i32; N] {
    let mut spectrum = [0i32; N];
    for (slot, &bit) in spectrum.iter_mut().zip(func.iter()) {
        *slot = 1 - 2 * i32::from(bit);
    }
    spectrum
}

/// Walsh–Hadamard transform: maps a 0/1 truth table to ±1 and runs the
/// eight-stage in-place butterfly. `W[b]` is the correlation of the
/// function with the linear function `parity(b & x)` scaled to [-256, 256].
pub fn walsh_hadamard(func: &[u8; N]) -> [i32; N] {
    let mut spectrum = to_signed(func);
    let mut h = 1;
    while h < N {
        let mut i = 0;
        while i < N {
            for j in i..i + h {
                let x = spectrum[j];
                let y = spectrum[j + h];
                spectrum[j] = x + y;
                spectrum[j + h] = x - y;
            }
            i += 2 * h;
        }
        h *= 2;
    }
    spectrum
}

/// The same transform in a blocked formulation: each stage splits the
/// buffer into 2h-wide chunks and combines the two halves pairwise.
/// Numerically identical to [`walsh_hadamard`]; kept as an independent
/// formulation so the two can cross-check each other.
pub fn walsh_hadamard_blocked(func: &[u8; N]) -> [i32; N] {
    let mut spectrum = to_signed(func);
    let mut h = 1;
    while h < N {
        for chunk in spectrum.chunks_exact_mut(2 * h) {
            let (lo, hi) = chunk.split_at_mut(h);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let x = *a;
                let y = *b;
                *a = x + y;
                *b = x - y;
            }
        }
        h *= 2;
    }
    spectrum
}

/// Möbius transform: computes the algebraic normal form of a Boolean
/// function. Same stage structure as the WHT butterfly but XOR-combining,
/// all over GF(2). Coefficient `anf[m]` is 1 when the monomial over the
/// variable subset `m` appears in the ANF.
pub fn algebraic_normal_form(func: &[u8; N]) -> [u8; N] {
    let mut anf = *func;
    let mut h = 1;
    while h < N {
        for i in 0..N {
            if i & h != 0 {
                anf[i] ^= anf[i ^ h];
            }
        }
        h *= 2;
    }
    anf
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn zero_function_transforms_to_impulse() {
        let spectrum = walsh_hadamard(&[0u8; 256]);
        assert_eq!(spectrum[0], 256);
        assert!(spectrum[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn constant_one_function_transforms_to_negative_impulse() {
        let spectrum = walsh_hadamard(&[1u8; 256]);
        assert_eq!(spectrum[0], -256);
        assert!(spectrum[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn linear_function_concentrates_at_its_mask() {
        // f(x) = parity(0x0b & x) correlates perfectly with mask 0x0b.
        let mut func = [0u8; 256];
        for (x, slot) in func.iter_mut().enumerate() {
            *slot = ((x as u8 & 0x0b).count_ones() & 1) as u8;
        }
        let spectrum = walsh_hadamard(&func);
        assert_eq!(spectrum[0x0b], 256);
        let nonzero = spectrum.iter().filter(|&&w| w != 0).count();
        assert_eq!(nonzero, 1);
    }

    #[test]
    fn both_formulations_agree_on_random_functions() {
        let mut rng = ChaCha20Rng::from_seed([60u8; 32]);
        for _ in 0..100 {
            let mut func = [0u8; 256];
            for slot in func.iter_mut() {
                *slot = rng.gen_range(0..=1);
            }
            assert_eq!(walsh_hadamard(&func), walsh_hadamard_blocked(&func));
        }
    }

    #[test]
    fn spectrum_energy_satisfies_parseval() {
        // Parseval: sum of squared coefficients is 256 * 256.
        let mut rng = ChaCha20Rng::from_seed([61u8; 32]);
        let mut func = [0u8; 256];
        for slot in func.iter_mut() {
            *slot = rng.gen_range(0..=1);
        }
        let spectrum = walsh_hadamard(&func);
        let energy: i64 = spectrum.iter().map(|&w| i64::from(w) * i64::from(w)).sum();
        assert_eq!(energy, 256 * 256);
    }

    #[test]
    fn anf_is_involutive() {
        let mut rng = ChaCha20Rng::from_seed([62u8; 32]);
        for _ in 0..20 {
            let mut func = [0u8; 256];
            for slot in func.iter_mut() {
                *slot = rng.gen_range(0..=1);
            }
            let twice = algebraic_normal_form(&algebraic_normal_form(&func));
            assert_eq!(twice, func);
        }
    }

    #[test]
    fn anf_of_single_monomial() {
        // f(x) = x0 * x1 (both low bits set) has exactly one ANF term, at
        // subset index 3.
        let mut func = [0u8; 256];
        for (x, slot) in func.iter_mut().enumerate() {
            *slot = u8::from(x & 3 == 3);
        }
        let anf = algebraic_normal_form(&func);
        for (m, &coeff) in anf.iter().enumerate() {
            assert_eq!(coeff, u8::from(m == 3), "coefficient at {m}");
        }
    }
}
