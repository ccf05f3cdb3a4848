//! Fixed-width points in the unit hypercube.

use rand::{Rng, distributions::Standard};

use super::dimension::{Dimension, MAX_COORDINATES};

/// A vertex position padded to four coordinates.
///
/// Unused trailing coordinates stay at zero, so the distance between two
/// points sampled for the same [`Dimension`] equals the distance in that
/// dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point([f64; MAX_COORDINATES]);

impl Point {
    /// Creates a point from explicit coordinates.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::Point;
    ///
    /// let origin = Point::new([0.0; 4]);
    /// let corner = Point::new([1.0, 1.0, 0.0, 0.0]);
    /// assert!((origin.distance(&corner) - 2.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    #[must_use]
    pub const fn new(coordinates: [f64; MAX_COORDINATES]) -> Self {
        Self(coordinates)
    }

    /// Samples a point whose first `dimension.coordinates()` components are
    /// drawn from `[0, 1)`.
    pub fn sample<R: Rng + ?Sized>(dimension: Dimension, rng: &mut R) -> Self {
        let mut coordinates = [0.0; MAX_COORDINATES];
        for value in coordinates.iter_mut().take(dimension.coordinates()) {
            *value = rng.sample(Standard);
        }
        Self(coordinates)
    }

    /// Returns the coordinates, including zero padding.
    #[must_use]
    #[rustfmt::skip]
    pub const fn coordinates(&self) -> &[f64; MAX_COORDINATES] { &self.0 }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(left, right)| {
                let diff = left - right;
                diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}
