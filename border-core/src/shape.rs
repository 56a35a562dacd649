//! Shape of observations.
use core::fmt::Debug;

/// Shape of an observation without the leading batch axis.
pub trait Shape: Clone + Debug {
    /// Returns the shape, e.g. `[80, 80, 4]` for four stacked 80x80 frames.
    fn shape() -> &'static [usize];
}
