//! Morphological features and canonical feature bundles.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single morphological agreement feature, such as `num:pl`.
///
/// Field order is significant: the derived ordering compares
/// `(name, value, is_lexical, is_incoming)` lexicographically, and that
/// ordering is the canonical order inside a [`FeatureBundle`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feature {
    name: Arc<str>,
    value: Option<Arc<str>>,
    is_lexical: bool,
    is_incoming: Option<bool>,
}

impl Feature {
    /// Creates a directionless, non-lexical feature (as used by morphemes).
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            is_lexical: false,
            is_incoming: None,
        }
    }

    /// Creates an untyped placeholder for `name`.
    ///
    /// Placeholders never appear in a finalized variant.
    #[must_use]
    pub fn placeholder(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            value: None,
            is_lexical: false,
            is_incoming: None,
        }
    }

    /// Creates a received (incoming) feature.
    #[must_use]
    pub fn incoming(name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Self::new(name, value).with_incoming(Some(true))
    }

    /// Creates an emitted (outgoing) feature.
    #[must_use]
    pub fn outgoing(name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Self::new(name, value).with_incoming(Some(false))
    }

    /// Creates an emitted feature whose value is fixed by the lexical entry.
    #[must_use]
    pub fn lexical(name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Self::outgoing(name, value).with_lexical(true)
    }

    /// Returns a copy with the lexical flag set.
    #[must_use]
    pub fn with_lexical(mut self, is_lexical: bool) -> Self {
        self.is_lexical = is_lexical;
        self
    }

    /// Returns a copy with the direction set (`Some(true)` = incoming).
    #[must_use]
    pub fn with_incoming(mut self, is_incoming: Option<bool>) -> Self {
        self.is_incoming = is_incoming;
        self
    }

    /// The feature name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared feature name.
    #[must_use]
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// The feature value, `None` for a placeholder.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The shared feature value.
    #[must_use]
    pub fn value_arc(&self) -> Option<&Arc<str>> {
        self.value.as_ref()
    }

    /// True if the value is fixed by the lexical entry itself.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        self.is_lexical
    }

    /// The direction tag: `Some(true)` received, `Some(false)` emitted,
    /// `None` for directionless (morpheme-table) features.
    #[must_use]
    pub const fn direction(&self) -> Option<bool> {
        self.is_incoming
    }

    /// True if this feature sits on the receiving side of a slot.
    #[must_use]
    pub const fn is_incoming(&self) -> bool {
        matches!(self.is_incoming, Some(true))
    }

    /// True if this feature sits on the emitting side of a slot.
    #[must_use]
    pub const fn is_outgoing(&self) -> bool {
        matches!(self.is_incoming, Some(false))
    }

    /// True if this feature has no value.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }

    /// Returns a copy with the lexical and direction tags erased.
    ///
    /// Two features are compatible when their names and values agree,
    /// regardless of how the value was derived.
    #[must_use]
    pub fn compatible(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            value: self.value.clone(),
            is_lexical: false,
            is_incoming: None,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            None => Ok(()),
            Some(value) => {
                write!(f, "{}:{value}", self.name)?;
                if self.is_lexical {
                    write!(f, "!")?;
                }
                Ok(())
            }
        }
    }
}

/// An order-independent collection of features.
///
/// Features are sorted at construction, so two bundles built from the same
/// multiset of features are equal and hash identically.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Feature>"))]
pub struct FeatureBundle(Vec<Feature>);

impl FeatureBundle {
    /// Creates a bundle from features in any order.
    #[must_use]
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut features: Vec<Feature> = features.into_iter().collect();
        features.sort();
        Self(features)
    }

    /// Creates an empty bundle.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the bundle holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the features in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.0.iter()
    }

    /// Returns the features as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Feature] {
        &self.0
    }

    /// Returns true if the bundle contains `feature` exactly.
    #[must_use]
    pub fn contains(&self, feature: &Feature) -> bool {
        self.0.binary_search(feature).is_ok()
    }

    /// Returns the first feature named `name`, in canonical order.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Feature> {
        self.0.iter().find(|f| f.name() == name)
    }

    /// Returns true if any feature is named `name`.
    #[must_use]
    pub fn has_name(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns a new bundle with `feature` added.
    #[must_use]
    pub fn with(&self, feature: Feature) -> Self {
        let mut features = self.0.clone();
        let at = features.binary_search(&feature).unwrap_or_else(|i| i);
        features.insert(at, feature);
        Self(features)
    }

    /// The sub-bundle of received features.
    #[must_use]
    pub fn incoming(&self) -> Self {
        self.filtered(Feature::is_incoming)
    }

    /// The sub-bundle of emitted features.
    #[must_use]
    pub fn outgoing(&self) -> Self {
        self.filtered(Feature::is_outgoing)
    }

    /// A copy with every lexical and direction tag erased.
    #[must_use]
    pub fn compatible(&self) -> Self {
        Self::new(self.0.iter().map(Feature::compatible))
    }

    /// Returns true if every feature of `self` also occurs in `other`.
    ///
    /// Both bundles are compared as sets.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.iter().all(|f| other.contains(f))
    }

    /// Returns true if both bundles hold the same set of features.
    #[must_use]
    pub fn set_eq(&self, other: &Self) -> bool {
        self.is_subset_of(other) && other.is_subset_of(self)
    }

    fn filtered(&self, keep: impl Fn(&Feature) -> bool) -> Self {
        // Filtering a sorted vector keeps it sorted.
        Self(self.0.iter().filter(|f| keep(f)).cloned().collect())
    }

    /// Joins the valued features with `,`, without brackets.
    #[must_use]
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .filter(|f| !f.is_placeholder())
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<Vec<Feature>> for FeatureBundle {
    fn from(features: Vec<Feature>) -> Self {
        Self::new(features)
    }
}

impl FromIterator<Feature> for FeatureBundle {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for FeatureBundle {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureBundle {
    type Item = &'a Feature;
    type IntoIter = std::slice::Iter<'a, Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for FeatureBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.joined())
    }
}
