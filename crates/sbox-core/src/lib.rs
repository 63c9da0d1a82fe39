//! Affine S-box construction over GF(2^8).
//!
//! This crate is the arithmetic foundation of the sboxlab workspace:
//! - GF(2^8) field operations under the AES polynomial, with a precomputed
//!   multiplicative-inverse table.
//! - 8×8 GF(2) matrices with structured validation (dimensions, binary
//!   entries, full rank via Gaussian elimination).
//! - AES-style S-box construction `S(x) = M · x⁻¹ ⊕ c`, inverse-table
//!   derivation, and fixed-point search.
//! - Resolution of S-box sources (named catalog entry, matrix + constant,
//!   or explicit table) with a value-keyed memo cache.
//!
//! The implementation aims for clarity and reproducibility of the research
//! pipeline rather than constant-time guarantees; it should not be treated
//! as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod affine;
mod error;
pub mod gf256;
mod matrix;
mod sbox;
mod source;

pub use crate::affine::Affine8;
pub use crate::error::SboxError;
pub use crate::matrix::{validate_matrix, Matrix8, AES_CONSTANT, AES_MATRIX};
pub use crate::sbox::{InvSBox, SBox};
pub use crate::source::{MatrixLookup, NamedMatrix, SboxCache, SboxSource};
