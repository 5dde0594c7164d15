//! Batch unpacking of a whole lexicon.
//!
//! Per entry: predict the variant count, enumerate variants lazily, drop
//! duplicates, then apply the consistency and pronounceability filters.
//! Entries are independent of each other; with the `parallel` feature they
//! are distributed over `rayon`'s pool and merged back in input order.

use std::collections::{HashMap, HashSet};
use std::ops::AddAssign;

use mgagr_foundation::{EnumerationLimit, Entry, Error, FeatureBundle, Inventory, MorphemeTable, Result};
use tracing::{debug, info, warn};

use crate::check::{is_consistent, realizes_any};
use crate::config::UnpackConfig;
use crate::unpack::{estimate_variants, variants};

/// A variant that passed every filter, with its stable index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptedEntry {
    /// Dense index in output order, starting at 0.
    pub index: usize,
    /// The finalized variant.
    pub entry: Entry,
}

impl AcceptedEntry {
    /// The semantic key of the variant.
    #[must_use]
    pub fn key(&self) -> &str {
        self.entry.key()
    }
}

/// Counts collected during a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnpackStats {
    /// Input entries processed.
    pub entries: usize,
    /// Raw variants enumerated.
    pub enumerated: usize,
    /// Variants left after per-entry deduplication.
    pub distinct: usize,
    /// Distinct variants that passed the consistency filter.
    pub consistent: usize,
    /// Variants in the final output.
    pub accepted: usize,
}

impl AddAssign for UnpackStats {
    fn add_assign(&mut self, rhs: Self) {
        self.entries += rhs.entries;
        self.enumerated += rhs.enumerated;
        self.distinct += rhs.distinct;
        self.consistent += rhs.consistent;
        self.accepted += rhs.accepted;
    }
}

/// Output of a run: the accepted variants and the counts.
#[derive(Clone, Debug, Default)]
pub struct UnpackReport {
    /// Accepted variants in input order.
    pub accepted: Vec<AcceptedEntry>,
    /// Run statistics.
    pub stats: UnpackStats,
}

/// Unpacks and filters entries against one inventory and morpheme table.
pub struct Pipeline<'a> {
    inventory: &'a Inventory,
    /// Required feature sets per semantic key.
    morphemes: HashMap<&'a str, Vec<&'a FeatureBundle>>,
    config: UnpackConfig,
}

impl<'a> Pipeline<'a> {
    /// Creates a pipeline.
    #[must_use]
    pub fn new(inventory: &'a Inventory, table: &'a MorphemeTable, config: UnpackConfig) -> Self {
        let mut morphemes: HashMap<&str, Vec<&FeatureBundle>> = HashMap::new();
        for morpheme in table.morphemes() {
            morphemes
                .entry(morpheme.key())
                .or_default()
                .push(morpheme.features());
        }
        Self {
            inventory,
            morphemes,
            config,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &UnpackConfig {
        &self.config
    }

    /// Fails if the entry's predicted variant count exceeds the limit.
    ///
    /// # Errors
    ///
    /// Returns a `LimitExceeded` error naming the entry.
    pub fn check_limit(&self, entry: &Entry) -> Result<()> {
        let Some(limit) = self.config.max_variants_per_entry else {
            return Ok(());
        };
        let estimated = estimate_variants(entry, self.inventory);
        if estimated.is_some_and(|n| n <= limit) {
            return Ok(());
        }
        warn!(key = entry.key(), limit, ?estimated, "entry exceeds variant limit");
        Err(Error::limit_exceeded(EnumerationLimit::MaxVariants {
            limit,
            estimated,
            key: entry.key().to_string(),
        }))
    }

    /// True if the variant is pronounceable under the configured mode.
    #[must_use]
    pub fn is_pronounceable(&self, entry: &Entry) -> bool {
        self.morphemes.get(entry.key()).is_some_and(|required| {
            realizes_any(entry, required.iter().copied(), self.config.pronounceability)
        })
    }

    /// True if the variant passes every configured filter.
    #[must_use]
    pub fn accepts(&self, entry: &Entry) -> bool {
        (!self.config.check_consistency || is_consistent(entry)) && self.is_pronounceable(entry)
    }

    /// Unpacks one entry and returns its accepted variants.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry exceeds the variant limit.
    pub fn unpack_one(&self, entry: &Entry) -> Result<(Vec<Entry>, UnpackStats)> {
        self.check_limit(entry)?;

        let mut stats = UnpackStats {
            entries: 1,
            ..UnpackStats::default()
        };
        let mut seen = HashSet::new();
        let mut accepted = Vec::new();

        for variant in variants(entry, self.inventory) {
            stats.enumerated += 1;
            if self.config.deduplicate && !seen.insert(variant.clone()) {
                continue;
            }
            stats.distinct += 1;
            if self.config.check_consistency && !is_consistent(&variant) {
                continue;
            }
            stats.consistent += 1;
            if self.is_pronounceable(&variant) {
                accepted.push(variant);
            }
        }
        stats.accepted = accepted.len();

        debug!(
            key = entry.key(),
            enumerated = stats.enumerated,
            distinct = stats.distinct,
            accepted = stats.accepted,
            "entry unpacked"
        );
        Ok((accepted, stats))
    }

    /// Unpacks every entry and assigns stable indices to the survivors.
    ///
    /// # Errors
    ///
    /// Returns a limit error if any entry exceeds the variant limit. Run
    /// sequentially, that is the first offending entry in input order.
    pub fn run(&self, entries: &[Entry]) -> Result<UnpackReport> {
        let per_entry = self.unpack_all(entries)?;

        let mut report = UnpackReport::default();
        let mut seen = HashSet::new();
        for (kept, stats) in per_entry {
            report.stats += UnpackStats {
                accepted: 0,
                ..stats
            };
            for entry in kept {
                if self.config.deduplicate && !seen.insert(entry.clone()) {
                    continue;
                }
                report.accepted.push(AcceptedEntry {
                    index: report.accepted.len(),
                    entry,
                });
            }
        }
        report.stats.accepted = report.accepted.len();

        info!(
            entries = report.stats.entries,
            enumerated = report.stats.enumerated,
            accepted = report.stats.accepted,
            "lexicon unpacked"
        );
        Ok(report)
    }

    #[cfg(feature = "parallel")]
    fn unpack_all(&self, entries: &[Entry]) -> Result<Vec<(Vec<Entry>, UnpackStats)>> {
        use rayon::prelude::*;

        if self.config.parallel {
            entries.par_iter().map(|e| self.unpack_one(e)).collect()
        } else {
            entries.iter().map(|e| self.unpack_one(e)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn unpack_all(&self, entries: &[Entry]) -> Result<Vec<(Vec<Entry>, UnpackStats)>> {
        if self.config.parallel {
            debug!("parallel unpacking requested without the `parallel` feature");
        }
        entries.iter().map(|e| self.unpack_one(e)).collect()
    }
}
