//! Accepted-lexicon serialization using `MessagePack`.
//!
//! The accepted variants, with their stable indices and keys, are what a
//! downstream grammar compiler consumes. They are written with named
//! fields so the format survives field reordering.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use mgagr_engine::UnpackReport;
use mgagr_foundation::{Entry, Error, Result};
use serde::{Deserialize, Serialize};

/// One accepted variant as handed downstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedRecord {
    /// Stable index, dense from 0.
    pub index: usize,
    /// Semantic key.
    pub key: String,
    /// The finalized variant.
    pub entry: Entry,
}

/// The accepted lexicon: start category plus indexed variants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedLexicon {
    /// Start category of the grammar.
    pub start: String,
    /// Accepted variants in index order.
    pub entries: Vec<AcceptedRecord>,
}

impl AcceptedLexicon {
    /// Collects the accepted variants of a pipeline run.
    #[must_use]
    pub fn from_report(start: impl Into<String>, report: &UnpackReport) -> Self {
        let entries = report
            .accepted
            .iter()
            .map(|accepted| AcceptedRecord {
                index: accepted.index,
                key: accepted.key().to_string(),
                entry: accepted.entry.clone(),
            })
            .collect();
        Self {
            start: start.into(),
            entries,
        }
    }

    /// Returns the number of accepted variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes an accepted lexicon to bytes using `MessagePack` format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(lexicon: &AcceptedLexicon) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(lexicon).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes an accepted lexicon from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<AcceptedLexicon> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves an accepted lexicon to a file, overwriting it if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be written or if serialization
/// fails.
pub fn save_to_file<P: AsRef<Path>>(lexicon: &AcceptedLexicon, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(lexicon)?;

    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))?;

    tracing::debug!(path = %path.display(), entries = lexicon.len(), "accepted lexicon saved");
    Ok(())
}

/// Loads an accepted lexicon from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AcceptedLexicon> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    from_bytes(&bytes)
}
