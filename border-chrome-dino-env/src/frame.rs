//! Conversion of canvas snapshots into grayscale frames.
//!
//! A snapshot of the game canvas arrives as a base64 encoded PNG with an alpha
//! channel. It is resized to [`FRAME_WIDTH`] x [`FRAME_HEIGHT`], composited onto a
//! white background and reduced to a single luma channel.
use crate::DinoEnvError;
use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{
    imageops::{resize, FilterType::Nearest},
    GrayImage, ImageBuffer, Luma, Rgb, RgbImage, RgbaImage,
};

/// Width of a frame in pixels.
pub const FRAME_WIDTH: u32 = 80;

/// Height of a frame in pixels.
pub const FRAME_HEIGHT: u32 = 80;

/// The number of frames in an observation.
pub const N_STACK: usize = 4;

/// A single grayscale frame.
pub type Frame = GrayImage;

/// Returns a frame filled with zeros.
pub fn blank_frame() -> Frame {
    GrayImage::new(FRAME_WIDTH, FRAME_HEIGHT)
}

/// Converts a base64 encoded canvas snapshot into a [`Frame`].
///
/// The snapshot may carry a `data:image/png;base64,` prefix as returned by
/// `HTMLCanvasElement.toDataURL()`.
pub fn canvas_to_frame(canvas: &str) -> Result<Frame> {
    let data = match canvas.find("base64,") {
        Some(ix) => &canvas[ix + "base64,".len()..],
        None => canvas,
    };
    let bytes = STANDARD
        .decode(data.trim())
        .map_err(|e| DinoEnvError::CanvasDecode(e.to_string()))?;
    let img = image::load_from_memory(&bytes)
        .map_err(|e| DinoEnvError::CanvasDecode(e.to_string()))?
        .to_rgba8();
    let img = resize(&img, FRAME_WIDTH, FRAME_HEIGHT, Nearest);

    Ok(grayscale(&rgba2rgb(&img)))
}

/// Composites an RGBA image onto a white background.
pub fn rgba2rgb(img: &RgbaImage) -> RgbImage {
    ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y);
        let alpha = p[3] as u32;
        let blend = |c: u8| ((alpha * c as u32 + (255 - alpha) * 255) / 255) as u8;
        Rgb([blend(p[0]), blend(p[1]), blend(p[2])])
    })
}

/// Converts an RGB image into luma with ITU-R 601-2 weights.
///
/// `image::imageops::grayscale` uses Rec. 709 weights instead.
pub fn grayscale(img: &RgbImage) -> GrayImage {
    ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
        let p = img.get_pixel(x, y);
        let l = (p[0] as u32 * 19595 + p[1] as u32 * 38470 + p[2] as u32 * 7471 + 0x8000) >> 16;
        Luma([l as u8])
    })
}
