//! Offline frame exporter.
//!
//! Decodes every frame of one animation and dumps, per frame: a source
//! listing of run-length-encoded named colors, a PNG raster, and a CSV of
//! raw pixel values, plus one combined listing for the whole animation.
//! A debugging and data-export tool; not part of the render loop.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::color::Rgb;
use crate::named_colors;
use crate::source::{self, PixelFrame, SourceError};

/// Name given to runs of the transparent sentinel.
const TRANSPARENT: &str = "transparent";

/// Errors from the exporter.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// What an export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub frames: usize,
    /// Distinct named colors seen across all frames.
    pub colors: Vec<(Rgb, &'static str)>,
}

/// Decode `input` and write all exports into `out_dir` (created if absent).
///
/// The color-name cache is local to this call and threaded through the
/// per-frame helpers explicitly; repeated invocations are independent.
pub fn export_animation(input: &Path, out_dir: &Path) -> Result<ExportSummary, ExportError> {
    let frames = source::decode_frames(input)?;

    fs::create_dir_all(out_dir).map_err(|source| ExportError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut names: BTreeMap<Rgb, &'static str> = BTreeMap::new();
    let mut all = String::from("pub static ALL_FRAMES: &[&[(&str, u32)]] = &[\n");

    for (index, frame) in frames.iter().enumerate() {
        let runs = run_lengths(frame, &mut names);

        write_listing(out_dir, index, &runs)?;
        write_raster(out_dir, index, frame)?;
        write_csv(out_dir, index, frame)?;

        all.push_str("    &[");
        for (name, count) in &runs {
            let _ = write!(all, "(\"{name}\", {count}), ");
        }
        all.push_str("],\n");
    }
    all.push_str("];\n");

    let all_path = out_dir.join("frames_all.rs");
    fs::write(&all_path, all).map_err(|source| ExportError::Write {
        path: all_path,
        source,
    })?;

    Ok(ExportSummary {
        frames: frames.len(),
        colors: names.into_iter().collect(),
    })
}

/// Run-length encode a frame's row-major pixel stream by nearest color
/// name. New colors are resolved once and remembered in `names`.
fn run_lengths(
    frame: &PixelFrame,
    names: &mut BTreeMap<Rgb, &'static str>,
) -> Vec<(&'static str, u32)> {
    let mut runs: Vec<(&'static str, u32)> = Vec::new();
    for pixel in &frame.pixels {
        let name = match pixel {
            Some(rgb) => *names.entry(*rgb).or_insert_with(|| named_colors::nearest(*rgb)),
            None => TRANSPARENT,
        };
        match runs.last_mut() {
            Some((last, count)) if *last == name => *count += 1,
            _ => runs.push((name, 1)),
        }
    }
    runs
}

/// `frame_N.rs`: one `const` listing of (name, run length) pairs.
fn write_listing(
    out_dir: &Path,
    index: usize,
    runs: &[(&'static str, u32)],
) -> Result<(), ExportError> {
    let mut listing = format!("pub const FRAME_{index}: &[(&str, u32)] = &[\n");
    for (name, count) in runs {
        let _ = writeln!(listing, "    (\"{name}\", {count}),");
    }
    listing.push_str("];\n");

    let path = out_dir.join(format!("frame_{index}.rs"));
    fs::write(&path, listing).map_err(|source| ExportError::Write { path, source })
}

/// `frame_N.png`: the frame as an RGBA raster, sentinels transparent.
fn write_raster(out_dir: &Path, index: usize, frame: &PixelFrame) -> Result<(), ExportError> {
    let mut img = RgbaImage::new(frame.width as u32, frame.height as u32);
    for (i, pixel) in frame.pixels.iter().enumerate() {
        let x = (i % frame.width) as u32;
        let y = (i / frame.width) as u32;
        img.put_pixel(
            x,
            y,
            match pixel {
                Some(c) => Rgba([c.r, c.g, c.b, 255]),
                None => Rgba([0, 0, 0, 0]),
            },
        );
    }

    let path = out_dir.join(format!("frame_{index}.png"));
    img.save(&path)
        .map_err(|source| ExportError::Encode { path, source })
}

/// `frame_N.csv`: one row per pixel row, `#rrggbb` cells, empty for
/// transparent.
fn write_csv(out_dir: &Path, index: usize, frame: &PixelFrame) -> Result<(), ExportError> {
    let mut csv = String::new();
    for row in frame.pixels.chunks(frame.width) {
        let mut first = true;
        for pixel in row {
            if !first {
                csv.push(',');
            }
            first = false;
            if let Some(c) = pixel {
                let _ = write!(csv, "#{:02x}{:02x}{:02x}", c.r, c.g, c.b);
            }
        }
        csv.push('\n');
    }

    let path = out_dir.join(format!("frame_{index}.csv"));
    fs::write(&path, csv).map_err(|source| ExportError::Write { path, source })
}
