//! Configuration for batch unpacking.

/// How a variant's surface features must match a morpheme's requirements.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PronounceabilityMode {
    /// The morpheme's required features are a subset of the surface set.
    #[default]
    Subset,
    /// The required features equal the surface set, pinning the variant to
    /// exactly one realization.
    Exact,
}

/// Configuration for a [`Pipeline`](crate::Pipeline) run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnpackConfig {
    /// Drop variants with unresolved demands.
    pub check_consistency: bool,

    /// Surface matching mode for the pronounceability filter.
    pub pronounceability: PronounceabilityMode,

    /// Emit structurally identical accepted variants only once.
    pub deduplicate: bool,

    /// Abort when an entry's predicted variant count exceeds this.
    pub max_variants_per_entry: Option<usize>,

    /// Unpack entries on the `rayon` pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for UnpackConfig {
    fn default() -> Self {
        Self {
            check_consistency: true,
            pronounceability: PronounceabilityMode::Subset,
            deduplicate: true,
            max_variants_per_entry: None,
            parallel: false,
        }
    }
}

impl UnpackConfig {
    /// Both filters, exact pronounceability.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            pronounceability: PronounceabilityMode::Exact,
            ..Self::default()
        }
    }

    /// Pronounceability only, duplicates kept.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            check_consistency: false,
            deduplicate: false,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable the consistency filter.
    #[must_use]
    pub fn with_consistency(mut self, check: bool) -> Self {
        self.check_consistency = check;
        self
    }

    /// Builder method to set the pronounceability mode.
    #[must_use]
    pub fn with_pronounceability(mut self, mode: PronounceabilityMode) -> Self {
        self.pronounceability = mode;
        self
    }

    /// Builder method to enable/disable deduplication.
    #[must_use]
    pub fn with_deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    /// Builder method to cap the predicted variant count per entry.
    #[must_use]
    pub fn with_max_variants(mut self, limit: usize) -> Self {
        self.max_variants_per_entry = Some(limit);
        self
    }

    /// Builder method to enable/disable parallel unpacking.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
