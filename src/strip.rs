//! LED strip driver abstraction.
//!
//! The renderer only needs "set pixel by strip index" and "flush". Real
//! WS281x hardware sits behind an external adapter implementing [`LedStrip`];
//! this crate ships a no-op strip for hardware-less operation and a
//! buffered strip that keeps the last flushed frame inspectable for tests
//! and previews.

use thiserror::Error;

use crate::color::PackedColor;

/// Errors from strip adapters.
#[derive(Error, Debug)]
pub enum StripError {
    /// No usable hardware backend.
    #[error("LED hardware unavailable: {0}")]
    Unavailable(String),

    /// Pushing the buffered colors to the wire failed.
    #[error("strip transmission failed: {0}")]
    Transmit(String),
}

/// A serial strip of individually addressable LEDs.
///
/// `set_pixel` writes into the adapter's buffer; nothing reaches the wire
/// until `show`, which may block for the signal-transmission duration.
/// Out-of-range indices are the adapter's concern and are ignored.
pub trait LedStrip {
    /// Number of LEDs on the strip.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buffer one pixel color.
    fn set_pixel(&mut self, index: usize, color: PackedColor);

    /// Push the buffered colors to the hardware.
    fn show(&mut self) -> Result<(), StripError>;
}

/// Try to open the real LED hardware.
///
/// This build carries no hardware backend, so the result is always an
/// explicit `Unavailable`; the caller decides whether to fall back to
/// [`NullStrip`] rather than having the failure swallowed here. A WS281x
/// adapter (GPIO/DMA signal generation) plugs in at this seam.
pub fn open_hardware_strip(leds: usize) -> Result<Box<dyn LedStrip>, StripError> {
    let _ = leds;
    Err(StripError::Unavailable(
        "built without a hardware backend".into(),
    ))
}

/// Turn every pixel off and flush once.
pub fn blank(strip: &mut dyn LedStrip) -> Result<(), StripError> {
    for i in 0..strip.len() {
        strip.set_pixel(i, PackedColor::OFF);
    }
    strip.show()
}

// ── Null strip ───────────────────────────────────────────────────────

/// Discards everything. Keeps the render loop runnable with no LEDs attached.
#[derive(Debug, Clone)]
pub struct NullStrip {
    leds: usize,
}

impl NullStrip {
    pub fn new(leds: usize) -> Self {
        Self { leds }
    }
}

impl LedStrip for NullStrip {
    fn len(&self) -> usize {
        self.leds
    }

    fn set_pixel(&mut self, _index: usize, _color: PackedColor) {}

    fn show(&mut self) -> Result<(), StripError> {
        Ok(())
    }
}

// ── Buffer strip ─────────────────────────────────────────────────────

/// In-memory strip that records pixel writes and flush count.
#[derive(Debug, Clone)]
pub struct BufferStrip {
    pixels: Vec<PackedColor>,
    shows: usize,
}

impl BufferStrip {
    pub fn new(leds: usize) -> Self {
        Self {
            pixels: vec![PackedColor::OFF; leds],
            shows: 0,
        }
    }

    /// Buffered colors, as of the last `set_pixel` calls.
    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    /// How many times `show` has been called.
    pub fn show_count(&self) -> usize {
        self.shows
    }
}

impl LedStrip for BufferStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: PackedColor) {
        if let Some(slot) = self.pixels.get_mut(index) {
            *slot = color;
        }
    }

    fn show(&mut self) -> Result<(), StripError> {
        self.shows += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn buffer_strip_records_writes_and_shows() {
        let mut strip = BufferStrip::new(4);
        strip.set_pixel(2, Rgb::new(10, 20, 30).pack());
        assert_eq!(strip.pixels()[2], Rgb::new(10, 20, 30).pack());
        assert_eq!(strip.pixels()[0], PackedColor::OFF);

        assert_eq!(strip.show_count(), 0);
        strip.show().unwrap();
        strip.show().unwrap();
        assert_eq!(strip.show_count(), 2);
    }

    #[test]
    fn buffer_strip_ignores_out_of_range() {
        let mut strip = BufferStrip::new(2);
        strip.set_pixel(99, Rgb::new(1, 1, 1).pack());
        assert!(strip.pixels().iter().all(|&p| p == PackedColor::OFF));
    }

    #[test]
    fn blank_clears_and_flushes_once() {
        let mut strip = BufferStrip::new(3);
        strip.set_pixel(1, Rgb::new(255, 0, 0).pack());
        blank(&mut strip).unwrap();
        assert!(strip.pixels().iter().all(|&p| p == PackedColor::OFF));
        assert_eq!(strip.show_count(), 1);
    }

    #[test]
    fn hardware_probe_reports_unavailable() {
        assert!(matches!(
            open_hardware_strip(900),
            Err(StripError::Unavailable(_))
        ));
    }
}
