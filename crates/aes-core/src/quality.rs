//! Encryption-quality statistics over plain byte buffers.
//!
//! These are the standard image-encryption indicators applied at the byte
//! level: the codec layer owns pixel extraction, this module only sees the
//! resulting buffers. Correlation coefficients between adjacent pixels are
//! deliberately absent since they need the image dimensions.

use crate::error::CipherError;

/// Shannon entropy of a byte buffer in bits per byte, 0..=8. A
/// well-encrypted buffer scores close to 8. The empty buffer scores 0.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut histogram = [0u64; 256];
    for &byte in data {
        histogram[usize::from(byte)] += 1;
    }
    let total = data.len() as f64;
    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// NPCR: percentage of positions where the two buffers differ. Ideal for
/// encrypted pairs is near 99.6%.
pub fn npcr(left: &[u8], right: &[u8]) -> Result<f64, CipherError> {
    let total = paired_len(left, right)?;
    let changed = left
        .iter()
        .zip(right.iter())
        .filter(|(a, b)| a != b)
        .count();
    Ok(changed as f64 / total as f64 * 100.0)
}

/// UACI: mean absolute byte difference as a percentage of full scale.
/// Ideal for encrypted pairs is near 33.46%.
pub fn uaci(left: &[u8], right: &[u8]) -> Result<f64, CipherError> {
    let total = paired_len(left, right)?;
    let sum: u64 = left
        .iter()
        .zip(right.iter())
        .map(|(&a, &b)| u64::from(a.abs_diff(b)))
        .sum();
    Ok(sum as f64 / (255.0 * total as f64) * 100.0)
}

/// Entropy, NPCR, and UACI for one (original, encrypted) buffer pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityReport {
    /// Shannon entropy of the encrypted buffer.
    pub entropy: f64,
    /// Position change rate between the buffers, percent.
    pub npcr: f64,
    /// Mean intensity change between the buffers, percent.
    pub uaci: f64,
}

/// Assembles the full quality report. Unlike the metrics in sbox-metrics,
/// these scores depend on the payload, not just the S-box.
pub fn assess_quality(original: &[u8], encrypted: &[u8]) -> Result<QualityReport, CipherError> {
    Ok(QualityReport {
        entropy: shannon_entropy(encrypted),
        npcr: npcr(original, encrypted)?,
        uaci: uaci(original, encrypted)?,
    })
}

fn paired_len(left: &[u8], right: &[u8]) -> Result<usize, CipherError> {
    if left.is_empty() || left.len() != right.len() {
        return Err(CipherError::BufferMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(left.len())
}
