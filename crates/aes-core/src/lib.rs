//! AES-128 parameterized by an injected S-box.
//!
//! This crate mirrors the FIPS-197 round structure but takes the S-box as
//! an argument everywhere the standard uses the fixed Rijndael table,
//! including SubWord in the key schedule. Two different S-boxes therefore
//! derive two different schedules from the same raw key; that is the point
//! of the research rig, not an accident.
//!
//! Provided:
//! - Key schedule and single-block encryption/decryption.
//! - [`AesContext`]: precomputed (key schedule, inverse S-box) pair for
//!   repeated calls.
//! - A bulk ECB engine with PKCS#7 padding, block-parallel via rayon.
//! - Encryption-quality statistics (entropy, NPCR, UACI) over the byte
//!   buffers the engine produces.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened, and ECB is kept deliberately for per-block independence.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod bulk;
mod cipher;
mod error;
mod key;
mod quality;
mod round;
mod tables;

pub use crate::block::{Block, BLOCK_SIZE, KEY_SIZE};
pub use crate::bulk::{decrypt_bulk, encrypt_bulk, pkcs7_pad, pkcs7_unpad};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, AesContext};
pub use crate::error::CipherError;
pub use crate::key::{Aes128Key, RoundKeys};
pub use crate::quality::{assess_quality, npcr, shannon_entropy, uaci, QualityReport};
