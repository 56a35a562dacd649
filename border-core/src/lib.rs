#![warn(missing_docs)]
//! Core interface between agents and environments.
//!
//! An environment implements [`Env`]. It emits an observation implementing [`Obs`]
//! on [`Env::reset`] and a [`Step`] on every [`Env::step`], which carries the next
//! observation, the reward and the termination flags. Additional information that
//! is useful for logging, but not for the agent, is returned as a
//! [`Record`](record::Record).
//!
//! Environments also declare their observation and action spaces with
//! [`BoxSpace`] and [`DiscreteSpace`].
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Env, Info, Obs, Step};

mod shape;
pub use shape::Shape;

mod space;
pub use space::{BoxSpace, DiscreteSpace};
