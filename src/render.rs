//! Per-frame hot path: map, dim, buffer, flush.

use thiserror::Error;

use crate::geometry::{GeometryError, PanelGeometry};
use crate::source::PixelFrame;
use crate::strip::{LedStrip, StripError};

/// Errors from rendering one frame.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The decoded frame does not line up with the panel grid. The frame is
    /// treated as one continuous pixel stream reshaped to the grid's column
    /// width, so a mismatched width would silently misalign every row.
    #[error("frame is {actual} pixels wide but the panel grid spans {expected} columns")]
    WidthMismatch { actual: usize, expected: usize },

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Strip(#[from] StripError),
}

/// Render one decoded frame onto the strip.
///
/// Walks the frame's pixels as a single row-major stream, skips transparent
/// sentinels, maps each position through the panel geometry, dims it by the
/// global brightness, and writes it into the strip buffer. Exactly one
/// flush is issued, after the last pixel write. No heap allocation per
/// pixel; the whole pass must stay well under the inter-frame interval.
pub fn render_frame(
    strip: &mut dyn LedStrip,
    frame: &PixelFrame,
    geometry: &PanelGeometry,
    brightness: u8,
) -> Result<(), RenderError> {
    let cols = geometry.led_cols_per_frame();
    if frame.width != cols {
        return Err(RenderError::WidthMismatch {
            actual: frame.width,
            expected: cols,
        });
    }

    for (seq, pixel) in frame.pixels.iter().enumerate() {
        let Some(rgb) = pixel else { continue };
        let x = seq % cols;
        let y = seq / cols;
        let index = geometry.strip_index(x, y)?;
        strip.set_pixel(index, rgb.scale(brightness).pack());
    }

    strip.show()?;
    Ok(())
}
