//! Ordered sets of placements present at one height.

use std::fmt;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::placement::Placement2D;

/// The placements present at a given height, in stacking order.
///
/// Order follows the order in which extrusions were supplied and is never
/// sorted. Two cross-sections are equal when they hold the same placements in
/// the same order.
///
/// # Example
///
/// ```
/// use sandwich_types::{CrossSection, Placement2D};
///
/// let a = Placement2D::new("a.svg", 0.0, 0.0);
/// let b = Placement2D::new("b.svg", 0.0, 0.0);
///
/// let ab: CrossSection = vec![a.clone(), b.clone()].into();
/// let ba: CrossSection = vec![b, a].into();
///
/// assert_ne!(ab, ba);
/// assert_eq!(ab.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CrossSection(Vec<Placement2D>);

impl CrossSection {
    /// An empty cross-section (no material at this height).
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a placement on top of the existing ones.
    pub fn push(&mut self, placement: Placement2D) {
        self.0.push(placement);
    }

    /// The placements as a slice.
    #[must_use]
    pub fn placements(&self) -> &[Placement2D] {
        &self.0
    }

    /// Consume the cross-section, returning its placements.
    #[must_use]
    pub fn into_placements(self) -> Vec<Placement2D> {
        self.0
    }
}

impl Deref for CrossSection {
    type Target = [Placement2D];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Placement2D>> for CrossSection {
    fn from(placements: Vec<Placement2D>) -> Self {
        Self(placements)
    }
}

impl FromIterator<Placement2D> for CrossSection {
    fn from_iter<I: IntoIterator<Item = Placement2D>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CrossSection {
    type Item = &'a Placement2D;
    type IntoIter = std::slice::Iter<'a, Placement2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One placement per line.
impl fmt::Display for CrossSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for placement in &self.0 {
            writeln!(f, "{placement}")?;
        }
        Ok(())
    }
}
