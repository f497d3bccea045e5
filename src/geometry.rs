//! Panel tiling geometry and the logical-to-physical pixel mapping.
//!
//! A frame spans a grid of identical panels; each panel is a grid of LEDs
//! wired internally in row-major order, and the panels themselves are
//! chained in row-major order. `strip_index` folds both levels into the
//! position of an LED on the single serial strip the driver addresses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A pixel coordinate fell outside the configured panel grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pixel ({x}, {y}) is outside the {cols}x{rows} panel grid")]
pub struct GeometryError {
    pub x: usize,
    pub y: usize,
    /// Total LED columns across the frame.
    pub cols: usize,
    /// Total LED rows across the frame.
    pub rows: usize,
}

/// Fixed tiling layout of the LED wall. Immutable for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelGeometry {
    /// LED columns inside one panel.
    pub led_cols_per_panel: usize,
    /// LED rows inside one panel.
    pub led_rows_per_panel: usize,
    /// Panels per frame row.
    pub panel_cols: usize,
    /// Panels per frame column.
    pub panel_rows: usize,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        // Nine 10x10 panels in a 3x3 grid: 900 LEDs.
        Self {
            led_cols_per_panel: 10,
            led_rows_per_panel: 10,
            panel_cols: 3,
            panel_rows: 3,
        }
    }
}

impl PanelGeometry {
    /// Total LED columns across the composite frame.
    pub fn led_cols_per_frame(&self) -> usize {
        self.led_cols_per_panel * self.panel_cols
    }

    /// Total LED rows across the composite frame.
    pub fn led_rows_per_frame(&self) -> usize {
        self.led_rows_per_panel * self.panel_rows
    }

    /// LEDs inside one panel.
    pub fn leds_per_panel(&self) -> usize {
        self.led_cols_per_panel * self.led_rows_per_panel
    }

    /// Panels across the whole frame.
    pub fn panels_per_frame(&self) -> usize {
        self.panel_cols * self.panel_rows
    }

    /// Total LEDs on the strip.
    pub fn leds_per_frame(&self) -> usize {
        self.panels_per_frame() * self.leds_per_panel()
    }

    /// True if every dimension is non-zero.
    pub fn is_valid(&self) -> bool {
        self.led_cols_per_panel > 0
            && self.led_rows_per_panel > 0
            && self.panel_cols > 0
            && self.panel_rows > 0
    }

    /// Map a logical frame coordinate to the LED's position on the strip.
    ///
    /// Panels are chained in row-major order and each panel is wired
    /// row-major internally, so the result is
    /// `panel * leds_per_panel + local_offset`. The mapping is a bijection
    /// from the coordinate grid onto `[0, leds_per_frame)`.
    ///
    /// Coordinates outside the grid are a configuration error and are
    /// reported rather than wrapped or clamped.
    pub fn strip_index(&self, x: usize, y: usize) -> Result<usize, GeometryError> {
        if x >= self.led_cols_per_frame() || y >= self.led_rows_per_frame() {
            return Err(GeometryError {
                x,
                y,
                cols: self.led_cols_per_frame(),
                rows: self.led_rows_per_frame(),
            });
        }

        let panel = x / self.led_cols_per_panel + (y / self.led_rows_per_panel) * self.panel_cols;
        let offset =
            x % self.led_cols_per_panel + (y % self.led_rows_per_panel) * self.led_cols_per_panel;

        Ok(panel * self.leds_per_panel() + offset)
    }
}
