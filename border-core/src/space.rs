//! Observation and action spaces.
use crate::error::LrrError;

/// A bounded box of values with a fixed shape.
///
/// The shape does not include the leading batch axis of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpace<T> {
    /// Lower bound, inclusive.
    pub low: T,

    /// Upper bound, inclusive.
    pub high: T,

    /// Shape of a sample.
    pub shape: Vec<usize>,
}

impl<T: PartialOrd + Copy> BoxSpace<T> {
    /// Constructs a box space.
    pub fn new(low: T, high: T, shape: impl Into<Vec<usize>>) -> Self {
        Self {
            low,
            high,
            shape: shape.into(),
        }
    }

    /// Returns the number of elements in a sample.
    pub fn n_elems(&self) -> usize {
        self.shape.iter().product()
    }

    /// Checks that `shape` is the shape of this space.
    pub fn check_shape(&self, shape: &[usize]) -> Result<(), LrrError> {
        if shape == self.shape.as_slice() {
            Ok(())
        } else {
            Err(LrrError::ShapeMismatch {
                expected: self.shape.clone(),
                actual: shape.to_vec(),
            })
        }
    }

    /// Returns `true` if a sample of the given shape and values lies in the box.
    pub fn contains<'a, I>(&self, shape: &[usize], values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.check_shape(shape).is_ok()
            && values
                .into_iter()
                .all(|v| *v >= self.low && *v <= self.high)
    }
}

/// A discrete set `{0, 1, ..., n - 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteSpace {
    /// The number of elements.
    pub n: usize,
}

impl DiscreteSpace {
    /// Constructs a discrete space with `n` elements.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Returns `true` if `v` is an element of the space.
    pub fn contains(&self, v: usize) -> bool {
        v < self.n
    }

    /// Samples an element uniformly with [`fastrand`].
    pub fn sample(&self) -> usize {
        fastrand::usize(..self.n)
    }
}
