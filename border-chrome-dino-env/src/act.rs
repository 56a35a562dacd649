//! Action for [ChromeDinoEnv](crate::ChromeDinoEnv).
use crate::DinoEnvError;
use border_core::Act;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Action for [ChromeDinoEnv](crate::ChromeDinoEnv).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DinoAct {
    /// Does nothing for one tick.
    Noop = 0,

    /// Presses the up key.
    Jump = 1,
}

impl DinoAct {
    /// The number of actions.
    pub const N: usize = 2;
}

impl Act for DinoAct {}

impl TryFrom<u8> for DinoAct {
    type Error = DinoEnvError;

    fn try_from(act: u8) -> Result<Self, Self::Error> {
        match act {
            0 => Ok(Self::Noop),
            1 => Ok(Self::Jump),
            _ => Err(DinoEnvError::InvalidAction(act)),
        }
    }
}

impl From<DinoAct> for u8 {
    fn from(act: DinoAct) -> Self {
        act as u8
    }
}
