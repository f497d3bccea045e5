// pixelgrid - LED panel animation driver
// Pixel remapping for tiled serpentine-chained panels, frame streaming,
// and the offline frame exporter.

pub mod color;
pub mod config;
pub mod export;
pub mod geometry;
pub mod named_colors;
pub mod render;
pub mod source;
pub mod strip;

pub use color::{PackedColor, Rgb};
pub use config::{Config, ConfigError, StripConfig};
pub use export::{export_animation, ExportError, ExportSummary};
pub use geometry::{GeometryError, PanelGeometry};
pub use render::{render_frame, RenderError};
pub use source::{DecodePolicy, FrameSource, PixelFrame, SourceError};
pub use strip::{blank, open_hardware_strip, BufferStrip, LedStrip, NullStrip, StripError};
