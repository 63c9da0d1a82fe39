//! Boolean-function helpers shared by the metric modules.

use sbox_core::SBox;

/// Parity of a byte: 1 when the Hamming weight is odd.
#[inline]
pub(crate) fn parity(value: u8) -> u8 {
    (value.count_ones() & 1) as u8
}

/// Component function `f_b(x) = parity(b & S(x))` as a 0/1 truth table.
pub(crate) fn component_function(sbox: &SBox, mask: u8) -> [u8; 256] {
    let mut func = [0u8; 256];
    for (x, slot) in func.iter_mut().enumerate() {
        *slot = parity(mask & sbox.lookup(x as u8));
    }
    func
}

/// Truth table of a single output bit of the S-box.
pub(crate) fn bit_function(sbox: &SBox, bit: u32) -> [u8; 256] {
    let mut func = [0u8; 256];
    for (x, slot) in func.iter_mut().enumerate() {
        *slot = (sbox.lookup(x as u8) >> bit) & 1;
    }
    func
}
