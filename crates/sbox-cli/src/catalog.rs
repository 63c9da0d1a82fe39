//! Embedded catalog of named construction matrices.

use anyhow::{bail, Context, Result};
use sbox_core::{MatrixLookup, NamedMatrix};
use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("../data/matrices.json");

#[derive(Deserialize)]
struct RawCatalog {
    matrices: Vec<RawEntry>,
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    name: String,
    author: Option<String>,
    matrix: Option<Vec<Vec<u8>>>,
    constant: Option<String>,
}

/// One catalog entry with its constant already parsed from hex.
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub author: Option<String>,
    pub matrix: Option<Vec<Vec<u8>>>,
    pub constant: Option<u8>,
}

impl CatalogEntry {
    /// Placeholder entries carry no matrix and cannot be resolved.
    pub fn is_placeholder(&self) -> bool {
        self.matrix.is_none()
    }
}

/// The catalog compiled into the binary from `data/matrices.json`.
pub struct BuiltinCatalog {
    entries: Vec<CatalogEntry>,
}

impl BuiltinCatalog {
    /// Parses the embedded catalog. Fails on malformed JSON or constants,
    /// which would indicate a broken build rather than bad user input.
    pub fn load() -> Result<Self> {
        let raw: RawCatalog =
            serde_json::from_str(CATALOG_JSON).context("parse embedded matrix catalog")?;
        let mut entries: Vec<CatalogEntry> = Vec::with_capacity(raw.matrices.len());
        for entry in raw.matrices {
            let constant = match entry.constant {
                Some(text) => Some(
                    u8::from_str_radix(&text, 16)
                        .with_context(|| format!("constant of catalog entry {}", entry.id))?,
                ),
                None => None,
            };
            if entries.iter().any(|e| e.id == entry.id) {
                bail!("duplicate catalog id {}", entry.id);
            }
            entries.push(CatalogEntry {
                id: entry.id,
                name: entry.name,
                author: entry.author,
                matrix: entry.matrix,
                constant,
            });
        }
        Ok(Self { entries })
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl MatrixLookup for BuiltinCatalog {
    fn lookup(&self, id: &str) -> Option<NamedMatrix> {
        self.entries.iter().find(|e| e.id == id).map(|e| NamedMatrix {
            matrix: e.matrix.clone(),
            constant: e.constant,
        })
    }
}
