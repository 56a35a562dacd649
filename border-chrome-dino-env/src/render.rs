//! Display of frames for human inspection.
use crate::Frame;
use anyhow::{anyhow, Result};
use image::{imageops::invert, DynamicImage};
use serde::{Deserialize, Serialize};

/// Displays a frame.
pub trait Renderer {
    /// Shows `frame`.
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

/// Selects the [`Renderer`] built from a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// [`NullRenderer`], for headless runs.
    Null,

    /// [`TerminalRenderer`].
    Terminal,
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::Null
    }
}

impl RenderMode {
    /// Builds the renderer.
    pub fn build(&self) -> Box<dyn Renderer> {
        match self {
            Self::Null => Box::new(NullRenderer),
            Self::Terminal => Box::new(TerminalRenderer::default()),
        }
    }
}

/// Discards frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame) -> Result<()> {
        Ok(())
    }
}

/// Prints frames to the terminal with [`viuer`].
///
/// Frames are inverted by default, so the background is dark and obstacles are
/// bright, as with the "Greys" colormap of matplotlib.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    inverted: bool,
    width: u32,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            inverted: true,
            width: 40,
        }
    }
}

impl TerminalRenderer {
    /// Sets if intensities are inverted.
    pub fn inverted(mut self, v: bool) -> Self {
        self.inverted = v;
        self
    }

    /// Sets the width in terminal cells.
    pub fn width(mut self, v: u32) -> Self {
        self.width = v;
        self
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        let mut frame = frame.clone();
        if self.inverted {
            invert(&mut frame);
        }
        let config = viuer::Config {
            absolute_offset: false,
            width: Some(self.width),
            ..Default::default()
        };
        viuer::print(&DynamicImage::ImageLuma8(frame), &config)
            .map_err(|e| anyhow!("Failed to render frame: {:?}", e))?;
        Ok(())
    }
}
