//! Cryptanalytic metrics for 8-bit S-boxes.
//!
//! Ten standard scores from the S-box design literature, built on a shared
//! Walsh–Hadamard transform: non-linearity, SAC, the two bit-independence
//! variants, linear and differential approximation probabilities,
//! differential uniformity, algebraic degree, transparency order, and
//! correlation immunity.
//!
//! Every function is pure and deterministic over its input table. The
//! per-mask and per-difference loops are embarrassingly parallel and run
//! on rayon with commutative min/max/sum reductions, so results never
//! depend on scheduling.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bic;
mod boolean;
mod ci;
mod degree;
mod diff;
mod lap;
mod nl;
mod report;
mod sac;
mod transparency;
mod wht;

pub use crate::bic::{bic_nonlinearity, bic_sac};
pub use crate::ci::correlation_immunity;
pub use crate::degree::algebraic_degree;
pub use crate::diff::{dap, differential_uniformity};
pub use crate::lap::lap;
pub use crate::nl::nonlinearity;
pub use crate::report::{analyze, MetricsReport};
pub use crate::sac::sac;
pub use crate::transparency::transparency_order;
pub use crate::wht::{algebraic_normal_form, walsh_hadamard, walsh_hadamard_blocked};
