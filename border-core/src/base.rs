//! Core functionalities.
mod env;
mod step;
pub use env::Env;
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// Vectorized environments are not supported, so an observation always holds
/// a single sample and [`Obs::len()`] returns 1 for well-formed observations.
/// Array-based observations keep a leading batch axis of length 1.
pub trait Obs: Clone + Debug {
    /// Returns the number of samples in the object.
    fn len(&self) -> usize;
}

/// An action of an environment.
pub trait Act: Clone + Debug {
    /// Returns the number of actions in the object.
    fn len(&self) -> usize {
        1
    }
}
