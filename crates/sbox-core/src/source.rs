//! S-box source resolution and the value-keyed memo cache.

use std::collections::HashMap;

use crate::error::SboxError;
use crate::matrix::validate_matrix;
use crate::sbox::SBox;

/// A catalog entry as supplied by the external named-matrix collaborator:
/// the matrix may be absent (placeholder entries awaiting data), and the
/// constant may be absent (resolution defaults it to 0x63).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedMatrix {
    /// 8×8 matrix as nested 0/1 rows, if the entry carries data.
    pub matrix: Option<Vec<Vec<u8>>>,
    /// Affine constant, if the entry stores one.
    pub constant: Option<u8>,
}

/// Lookup seam to the catalog of named matrices. The catalog itself
/// (storage, file format) lives outside this crate.
pub trait MatrixLookup {
    /// Returns the entry for `id`, or `None` when no such entry exists.
    fn lookup(&self, id: &str) -> Option<NamedMatrix>;
}

/// Where an S-box comes from: a named catalog entry, a matrix plus
/// constant, or an explicit 16×16 table. Resolved exactly once into a
/// concrete [`SBox`] before any cipher or metrics call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SboxSource {
    /// Catalog entry resolved through a [`MatrixLookup`].
    Named(String),
    /// Construct from an 8×8 binary matrix and affine constant.
    FromMatrix {
        /// Matrix as nested 0/1 rows.
        rows: Vec<Vec<u8>>,
        /// Affine constant.
        constant: u8,
    },
    /// Caller-supplied 16×16 table, validated for bijectivity.
    Explicit(Vec<Vec<u8>>),
}

/// Default affine constant for named entries that do not store one.
const DEFAULT_CONSTANT: u8 = 0x63;

impl SboxSource {
    /// Resolves the source into a concrete S-box. Matrices are fully
    /// validated (format and rank) before construction; explicit tables
    /// are checked for bijectivity.
    pub fn resolve(&self, catalog: &dyn MatrixLookup) -> Result<SBox, SboxError> {
        match self {
            SboxSource::Named(id) => {
                let entry = catalog.lookup(id).ok_or_else(|| SboxError::UnknownId {
                    id: id.clone(),
                })?;
                let rows = entry.matrix.ok_or_else(|| SboxError::PlaceholderEntry {
                    id: id.clone(),
                })?;
                let matrix = validate_matrix(&rows)?;
                let constant = entry.constant.unwrap_or(DEFAULT_CONSTANT);
                Ok(SBox::from_affine(&matrix, constant))
            }
            SboxSource::FromMatrix { rows, constant } => {
                let matrix = validate_matrix(rows)?;
                Ok(SBox::from_affine(&matrix, *constant))
            }
            SboxSource::Explicit(rows) => SBox::from_rows(rows),
        }
    }
}

/// Identity of a resolved S-box, derived from its defining values rather
/// than any reference. Two sources that denote the same construction share
/// a key, so concurrent or repeated population always agrees on the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum CacheKey {
    Affine([u8; 8], u8),
    Table([u8; 256]),
}

/// Pure memo over [`SboxSource::resolve`]. Recomputable at any time with
/// identical results; never a source of truth.
#[derive(Default)]
pub struct SboxCache {
    entries: HashMap<CacheKey, SBox>,
}

impl SboxCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves through the cache. Named sources are keyed by the matrix
    /// and constant they denote, so renaming an entry never produces a
    /// stale hit.
    pub fn resolve(
        &mut self,
        source: &SboxSource,
        catalog: &dyn MatrixLookup,
    ) -> Result<SBox, SboxError> {
        let key = self.key_for(source, catalog)?;
        if let Some(sbox) = self.entries.get(&key) {
            return Ok(*sbox);
        }
        let sbox = source.resolve(catalog)?;
        self.entries.insert(key, sbox);
        Ok(sbox)
    }

    /// Number of memoized S-boxes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key_for(
        &self,
        source: &SboxSource,
        catalog: &dyn MatrixLookup,
    ) -> Result<CacheKey, SboxError> {
        match source {
            SboxSource::Named(id) => {
                let entry = catalog.lookup(id).ok_or_else(|| SboxError::UnknownId {
                    id: id.clone(),
                })?;
                let rows = entry.matrix.ok_or_else(|| SboxError::PlaceholderEntry {
                    id: id.clone(),
                })?;
                let matrix = validate_matrix(&rows)?;
                let constant = entry.constant.unwrap_or(DEFAULT_CONSTANT);
                Ok(CacheKey::Affine(*matrix.packed_rows(), constant))
            }
            SboxSource::FromMatrix { rows, constant } => {
                let matrix = validate_matrix(rows)?;
                Ok(CacheKey::Affine(*matrix.packed_rows(), *constant))
            }
            SboxSource::Explicit(rows) => {
                let sbox = SBox::from_rows(rows)?;
                Ok(CacheKey::Table(*sbox.table()))
            }
        }
    }
}
