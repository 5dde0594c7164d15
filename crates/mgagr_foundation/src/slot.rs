//! Typed syntactic slots.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::feature::FeatureBundle;
use crate::polarity::Polarity;

/// One polarity-typed position in a lexical entry.
///
/// A slot may carry a single [`FeatureBundle`] that holds both what it
/// receives (incoming features) and what it emits (outgoing features).
/// A slot without a bundle carries no agreement and is never unpacked.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    polarity: Polarity,
    name: Arc<str>,
    bundle: Option<FeatureBundle>,
}

impl Slot {
    /// Creates a slot without agreement.
    #[must_use]
    pub fn new(polarity: Polarity, name: impl Into<Arc<str>>) -> Self {
        Self {
            polarity,
            name: name.into(),
            bundle: None,
        }
    }

    /// Returns a copy carrying `bundle`.
    #[must_use]
    pub fn with_bundle(mut self, bundle: FeatureBundle) -> Self {
        self.bundle = Some(bundle);
        self
    }

    /// Returns a copy with the bundle replaced (or removed).
    #[must_use]
    pub fn replace_bundle(&self, bundle: Option<FeatureBundle>) -> Self {
        Self {
            polarity: self.polarity,
            name: Arc::clone(&self.name),
            bundle,
        }
    }

    /// The feature type of this slot.
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The slot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached bundle, if any.
    #[must_use]
    pub const fn bundle(&self) -> Option<&FeatureBundle> {
        self.bundle.as_ref()
    }

    /// True if the slot participates in agreement.
    #[must_use]
    pub const fn has_agreement(&self) -> bool {
        self.bundle.is_some()
    }

    /// The received side, or `None` for a slot without agreement.
    #[must_use]
    pub fn incoming(&self) -> Option<FeatureBundle> {
        self.bundle.as_ref().map(FeatureBundle::incoming)
    }

    /// The emitted side, or `None` for a slot without agreement.
    #[must_use]
    pub fn outgoing(&self) -> Option<FeatureBundle> {
        self.bundle.as_ref().map(FeatureBundle::outgoing)
    }

    /// Folds agreement into the name, leaving a plain slot.
    ///
    /// `d` receiving `num:sg` and emitting `case:nom` becomes
    /// `d_[case:nom]_[num:sg]` for a category (emitted side first) and
    /// `=d_[num:sg]_[case:nom]` for a selector (received side first).
    #[must_use]
    pub fn vanilla(&self) -> Self {
        let Some(bundle) = &self.bundle else {
            return self.replace_bundle(None);
        };
        let received = format!("_[{}]", bundle.incoming().compatible().joined());
        let emitted = format!("_[{}]", bundle.outgoing().compatible().joined());
        let name = if self.polarity.is_positive() {
            format!("{}{received}{emitted}", self.name)
        } else {
            format!("{}{emitted}{received}", self.name)
        };
        Self::new(self.polarity, name)
    }

    /// Erases agreement values, marking agreeing slots with a `_` suffix.
    #[must_use]
    pub fn stripped(&self) -> Self {
        match self.bundle {
            None => self.replace_bundle(None),
            Some(_) => Self::new(self.polarity, format!("{}_", self.name))
                .with_bundle(FeatureBundle::empty()),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, suffix) = self.polarity.markers();
        write!(f, "{prefix}{}{suffix}", self.name)?;
        if let Some(bundle) = &self.bundle {
            write!(
                f,
                "←[{}][{}]→",
                bundle.incoming().joined(),
                bundle.outgoing().joined()
            )?;
        }
        Ok(())
    }
}
