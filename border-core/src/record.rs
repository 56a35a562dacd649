//! Key-value records returned alongside environment steps.
//!
//! A [`Record`] is the "info" map of a step. Environments put values that are
//! useful for logging, but not part of the observation, into it.
//!
//! ```rust
//! use border_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("score", RecordValue::Scalar(42.0));
//! record.insert("episode_length", RecordValue::Scalar(120.0));
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.get_scalar("score").unwrap(), 42.0);
//! ```
mod base;
pub use base::{Record, RecordValue};
