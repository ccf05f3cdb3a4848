//! Edge-weight model selection.

use std::fmt;

/// Number of coordinates a [`crate::Point`] always carries.
pub(crate) const MAX_COORDINATES: usize = 4;

/// Selects how edge weights are drawn.
///
/// `0` draws every edge weight independently from `[0, 1)`. `1..=4` places
/// each vertex uniformly in the unit hypercube of that dimension and uses
/// the Euclidean distance between endpoints as the weight.
///
/// # Examples
/// ```
/// use randmst_core::Dimension;
///
/// let uniform = Dimension::new(0).expect("0 is a valid dimension");
/// assert!(uniform.is_uniform());
/// assert_eq!(uniform.coordinates(), 0);
///
/// let cube = Dimension::new(3).expect("3 is a valid dimension");
/// assert_eq!(cube.coordinates(), 3);
/// assert!(Dimension::new(5).is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Dimension(u8);

impl Dimension {
    /// Independent uniform edge weights.
    pub const UNIFORM: Self = Self(0);

    /// Largest supported dimension.
    pub const MAX: u8 = 4;

    /// Returns a dimension when `value` lies in `0..=4`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the raw dimension value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> u8 { self.0 }

    /// Returns `true` when edge weights are drawn independently.
    #[must_use]
    pub const fn is_uniform(self) -> bool {
        self.0 == 0
    }

    /// Returns how many point coordinates are sampled per vertex.
    #[must_use]
    pub const fn coordinates(self) -> usize {
        let value = self.0 as usize;
        if value < MAX_COORDINATES {
            value
        } else {
            MAX_COORDINATES
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
