//! Observation of [ChromeDinoEnv](crate::ChromeDinoEnv).
use crate::{FRAME_HEIGHT, FRAME_WIDTH, N_STACK};
use border_core::{Obs, Shape};
use ndarray::Array4;

/// Stacked grayscale frames of shape `(1, 80, 80, 4)`.
///
/// The last axis runs from the oldest frame to the newest one.
#[derive(Debug, Clone, PartialEq)]
pub struct DinoObs {
    frames: Array4<u8>,
}

impl DinoObs {
    /// Returns the stacked frames.
    pub fn frames(&self) -> &Array4<u8> {
        &self.frames
    }

    /// Pixel values scaled to `[0, 1]`.
    pub fn to_f32(&self) -> Array4<f32> {
        self.frames.mapv(|v| v as f32 / 255.0)
    }

    /// Consumes the observation and returns the stacked frames.
    pub fn into_inner(self) -> Array4<u8> {
        self.frames
    }
}

impl From<Array4<u8>> for DinoObs {
    fn from(frames: Array4<u8>) -> Self {
        Self { frames }
    }
}

impl Obs for DinoObs {
    fn len(&self) -> usize {
        self.frames.shape()[0]
    }
}

impl Shape for DinoObs {
    fn shape() -> &'static [usize] {
        &[FRAME_HEIGHT as usize, FRAME_WIDTH as usize, N_STACK]
    }
}
