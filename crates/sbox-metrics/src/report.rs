//! Combined metrics report.

use serde::Serialize;
use sbox_core::SBox;

use crate::bic::{bic_nonlinearity, bic_sac};
use crate::ci::correlation_immunity;
use crate::degree::algebraic_degree;
use crate::diff::{dap, differential_uniformity};
use crate::lap::lap;
use crate::nl::nonlinearity;
use crate::sac::sac;
use crate::transparency::transparency_order;

/// All ten metric scores for one S-box, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Minimum component-function non-linearity, 0..=120.
    pub nonlinearity: u32,
    /// Strict avalanche criterion mean, ideally near 0.5.
    pub sac: f64,
    /// Minimum non-linearity over output-bit pair XORs.
    pub bic_nl: u32,
    /// Mean avalanche of the output-bit pair XORs, ideally near 0.5.
    pub bic_sac: f64,
    /// Best linear approximation probability advantage.
    pub lap: f64,
    /// Largest differential transition probability.
    pub dap: f64,
    /// Largest difference distribution table entry.
    pub differential_uniformity: u32,
    /// Maximum ANF monomial degree over all component functions.
    pub algebraic_degree: u32,
    /// Transparency order, lower is better against DPA.
    pub transparency_order: f64,
    /// Correlation immunity order probed at weight one.
    pub correlation_immunity: u32,
}

/// Runs the full metric suite over one S-box.
pub fn analyze(sbox: &SBox) -> MetricsReport {
    MetricsReport {
        nonlinearity: nonlinearity(sbox),
        sac: sac(sbox),
        bic_nl: bic_nonlinearity(sbox),
        bic_sac: bic_sac(sbox),
        lap: lap(sbox),
        dap: dap(sbox),
        differential_uniformity: differential_uniformity(sbox),
        algebraic_degree: algebraic_degree(sbox),
        transparency_order: transparency_order(sbox),
        correlation_immunity: correlation_immunity(sbox),
    }
}
