//! One lexicon and the configuration it is unpacked under.

use std::path::Path;

use mgagr_engine::{Pipeline, UnpackConfig, UnpackReport};
use mgagr_foundation::{Inventory, Result};
use mgagr_lexicon::{Lexicon, load_lexicon, parse_lexicon};
use tracing::info;

use crate::serialize::AcceptedLexicon;

/// A loaded lexicon ready to be unpacked.
pub struct Session {
    lexicon: Lexicon,
    inventory: Inventory,
    config: UnpackConfig,
}

impl Session {
    /// Creates a session over an already parsed lexicon.
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        let inventory = lexicon.inventory();
        Self {
            lexicon,
            inventory,
            config: UnpackConfig::default(),
        }
    }

    /// Loads a lexicon file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let lexicon = load_lexicon(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            entries = lexicon.entries().len(),
            morphemes = lexicon.table().len(),
            "lexicon loaded"
        );
        Ok(Self::new(lexicon))
    }

    /// Parses lexicon source text.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be parsed.
    pub fn from_source(source: &str) -> Result<Self> {
        parse_lexicon(source).map(Self::new)
    }

    /// Replaces the unpacking configuration.
    #[must_use]
    pub fn with_config(mut self, config: UnpackConfig) -> Self {
        self.config = config;
        self
    }

    /// The loaded lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The global feature inventory of the lexicon.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &UnpackConfig {
        &self.config
    }

    /// Unpacks and filters every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry exceeds the configured variant limit.
    pub fn run(&self) -> Result<UnpackReport> {
        Pipeline::new(&self.inventory, self.lexicon.table(), self.config)
            .run(self.lexicon.entries())
    }

    /// Packages a run's accepted variants for serialization.
    #[must_use]
    pub fn accepted(&self, report: &UnpackReport) -> AcceptedLexicon {
        AcceptedLexicon::from_report(self.lexicon.start(), report)
    }
}
