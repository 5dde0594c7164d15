//! Syntactic feature types and their polarity.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The type of a syntactic slot.
///
/// Each type is written in a lexicon as a pair of markers around the slot
/// name; for example a right selector `=d` has prefix `=` and empty suffix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Selects a complement to the right: `=x`.
    RightSelector,
    /// Selects a specifier to the left: `x=`.
    LeftSelector,
    /// Selects with strong head movement: `=>x`.
    StrongSelector,
    /// Selects with weak head movement: `<=x`.
    WeakSelector,
    /// Category: `x`.
    Category,
    /// Overt licensor: `+x`.
    Licensor,
    /// Covert licensor: `*x`.
    CovertLicensor,
    /// Licensee: `-x`.
    Licensee,
}

impl Polarity {
    /// Every feature type, in declaration order.
    pub const ALL: [Polarity; 8] = [
        Self::RightSelector,
        Self::LeftSelector,
        Self::StrongSelector,
        Self::WeakSelector,
        Self::Category,
        Self::Licensor,
        Self::CovertLicensor,
        Self::Licensee,
    ];

    /// Characters that may appear in a marker.
    pub const MARKER_CHARS: &'static [char] = &['=', '>', '<', '+', '*', '-'];

    /// The `(prefix, suffix)` markers written around a slot name.
    #[must_use]
    pub const fn markers(self) -> (&'static str, &'static str) {
        match self {
            Self::RightSelector => ("=", ""),
            Self::LeftSelector => ("", "="),
            Self::StrongSelector => ("=>", ""),
            Self::WeakSelector => ("<=", ""),
            Self::Category => ("", ""),
            Self::Licensor => ("+", ""),
            Self::CovertLicensor => ("*", ""),
            Self::Licensee => ("-", ""),
        }
    }

    /// Looks up the feature type written with the given markers.
    ///
    /// # Errors
    ///
    /// Returns an `UnknownMarkers` error if no feature type uses this pair.
    pub fn from_markers(prefix: &str, suffix: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|p| p.markers() == (prefix, suffix))
            .ok_or_else(|| Error::unknown_markers(prefix, suffix))
    }

    /// True for any selector.
    #[must_use]
    pub const fn is_selector(self) -> bool {
        matches!(
            self,
            Self::RightSelector | Self::LeftSelector | Self::StrongSelector | Self::WeakSelector
        )
    }

    /// True for selectors that trigger head movement.
    #[must_use]
    pub const fn is_head_movement_selector(self) -> bool {
        matches!(self, Self::StrongSelector | Self::WeakSelector)
    }

    /// True for a category.
    #[must_use]
    pub const fn is_category(self) -> bool {
        matches!(self, Self::Category)
    }

    /// True for overt or covert licensors.
    #[must_use]
    pub const fn is_licensor(self) -> bool {
        matches!(self, Self::Licensor | Self::CovertLicensor)
    }

    /// True for a licensee.
    #[must_use]
    pub const fn is_licensee(self) -> bool {
        matches!(self, Self::Licensee)
    }

    /// True for selecting or licensing occurrences.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.is_selector() || self.is_licensor()
    }

    /// True for selected or licensed occurrences.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.is_category() || self.is_licensee()
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, suffix) = self.markers();
        write!(f, "{prefix}_{suffix}")
    }
}
