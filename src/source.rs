//! Frame source: decodes image files from a directory in endless rotation.
//!
//! Each `next_frame` call yields one decoded frame. A GIF yields its frames
//! in order before the rotation advances; static images yield exactly one.
//! The directory is re-listed on every file open, so files can be added or
//! removed while the loop runs.

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image::{AnimationDecoder, GenericImageView, Rgba};
use thiserror::Error;
use tracing::{info, warn};

use crate::color::Rgb;

/// File extensions the rotation considers eligible.
const IMAGE_EXTENSIONS: &[&str] = &["gif", "png", "jpg", "jpeg"];

/// Frame delay applied when a GIF frame carries none.
const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// Errors from listing and decoding source images.
#[derive(Error, Debug)]
pub enum SourceError {
    /// No eligible image files; fatal configuration error at startup.
    #[error("no image files found in {}", .0.display())]
    EmptyDirectory(PathBuf),

    #[error("failed to list {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Every file in the rotation failed to decode.
    #[error("no decodable image files left in {}", .0.display())]
    AllFilesFailed(PathBuf),
}

/// What to do when a file in the rotation cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Log a warning and advance to the next file. Keeps a long-running
    /// installation alive when one file goes bad.
    #[default]
    SkipFile,
    /// Propagate the error to the caller.
    Halt,
}

/// One decoded frame of the composite image.
///
/// Pixels are row-major; `None` marks a transparent pixel, which the
/// renderer skips instead of mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame {
    pub width: usize,
    pub height: usize,
    /// Display time before the next frame.
    pub delay: Duration,
    pub pixels: Vec<Option<Rgb>>,
}

impl PixelFrame {
    pub fn new(width: usize, height: usize, delay: Duration, pixels: Vec<Option<Rgb>>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            delay,
            pixels,
        }
    }
}

/// Endless round-robin frame iterator over a directory of images.
#[derive(Debug)]
pub struct FrameSource {
    dir: PathBuf,
    policy: DecodePolicy,
    /// Rotation pointer into the directory listing; wraps modulo file count.
    file_idx: usize,
    /// Remaining frames of the currently open file, if any.
    pending: VecDeque<PixelFrame>,
}

impl FrameSource {
    /// Open a source over `dir`. An empty directory is rejected here so a
    /// misconfigured installation fails at startup, not mid-loop.
    pub fn new(dir: impl Into<PathBuf>, policy: DecodePolicy) -> Result<Self, SourceError> {
        let dir = dir.into();
        let files = list_images(&dir)?;
        if files.is_empty() {
            return Err(SourceError::EmptyDirectory(dir));
        }
        Ok(Self {
            dir,
            policy,
            file_idx: 0,
            pending: VecDeque::new(),
        })
    }

    /// Yield the next frame, opening the next file in rotation when the
    /// current one is exhausted.
    pub fn next_frame(&mut self) -> Result<PixelFrame, SourceError> {
        loop {
            if let Some(frame) = self.pending.pop_front() {
                return Ok(frame);
            }
            self.pending = self.open_next_file()?;
        }
    }

    fn open_next_file(&mut self) -> Result<VecDeque<PixelFrame>, SourceError> {
        let mut failures = 0;
        loop {
            // Re-list every open: tolerates files added or removed between
            // cycles. Listing order is platform-dependent and not sorted.
            let files = list_images(&self.dir)?;
            if files.is_empty() {
                return Err(SourceError::EmptyDirectory(self.dir.clone()));
            }
            if self.file_idx >= files.len() {
                // The listing shrank under the pointer.
                self.file_idx = 0;
            }
            let path = files[self.file_idx].clone();
            self.file_idx = (self.file_idx + 1) % files.len();

            info!("opening {}", path.display());
            match decode_frames(&path) {
                Ok(frames) if !frames.is_empty() => return Ok(frames.into()),
                Ok(_) => {
                    warn!("{} decoded to zero frames; skipping", path.display());
                    failures += 1;
                }
                Err(err) => match self.policy {
                    DecodePolicy::Halt => return Err(err),
                    DecodePolicy::SkipFile => {
                        warn!("skipping {}: {err}", path.display());
                        failures += 1;
                    }
                },
            }
            if failures >= files.len() {
                return Err(SourceError::AllFilesFailed(self.dir.clone()));
            }
        }
    }
}

/// Decode every frame of an image file.
///
/// GIFs yield all frames with their per-frame delays; other formats yield
/// a single frame with the default delay.
pub fn decode_frames(path: &Path) -> Result<Vec<PixelFrame>, SourceError> {
    let is_gif = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gif"));

    if is_gif {
        decode_gif(path)
    } else {
        decode_still(path)
    }
}

fn decode_gif(path: &Path) -> Result<Vec<PixelFrame>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = image::codecs::gif::GifDecoder::new(BufReader::new(file)).map_err(|source| {
        SourceError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mut frames = Vec::new();
    for frame in decoder.into_frames() {
        let frame = frame.map_err(|source| SourceError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let (numer, denom) = frame.delay().numer_denom_ms();
        let delay_ms = numer / denom.max(1);
        let delay = if delay_ms == 0 {
            DEFAULT_FRAME_DELAY
        } else {
            Duration::from_millis(u64::from(delay_ms))
        };

        let buffer = frame.into_buffer();
        let (width, height) = buffer.dimensions();
        let pixels = buffer.pixels().map(|&p| rgba_to_pixel(p)).collect();
        frames.push(PixelFrame::new(
            width as usize,
            height as usize,
            delay,
            pixels,
        ));
    }
    Ok(frames)
}

fn decode_still(path: &Path) -> Result<Vec<PixelFrame>, SourceError> {
    let img = image::open(path).map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = img.dimensions();
    let buffer = img.to_rgba8();
    let pixels = buffer.pixels().map(|&p| rgba_to_pixel(p)).collect();
    Ok(vec![PixelFrame::new(
        width as usize,
        height as usize,
        DEFAULT_FRAME_DELAY,
        pixels,
    )])
}

/// Fully transparent pixels become the skip sentinel; partial alpha is
/// blended against black.
fn rgba_to_pixel(pixel: Rgba<u8>) -> Option<Rgb> {
    let Rgba([r, g, b, a]) = pixel;
    match a {
        0 => None,
        255 => Some(Rgb::new(r, g, b)),
        a => {
            let alpha = f32::from(a) / 255.0;
            Some(Rgb::new(
                (f32::from(r) * alpha) as u8,
                (f32::from(g) * alpha) as u8,
                (f32::from(b) * alpha) as u8,
            ))
        }
    }
}

fn list_images(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let entries = fs::read_dir(dir).map_err(|source| SourceError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SourceError::ListDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let eligible = path.is_file()
            && path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| {
                    IMAGE_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                });
        if eligible {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparency_sentinel() {
        assert_eq!(rgba_to_pixel(Rgba([255, 0, 0, 0])), None);
        assert_eq!(
            rgba_to_pixel(Rgba([255, 0, 0, 255])),
            Some(Rgb::new(255, 0, 0))
        );
        // Half alpha blends toward black.
        assert_eq!(
            rgba_to_pixel(Rgba([200, 100, 0, 128])),
            Some(Rgb::new(100, 50, 0))
        );
    }

    #[test]
    fn frame_dimensions() {
        let frame = PixelFrame::new(
            2,
            2,
            DEFAULT_FRAME_DELAY,
            vec![None, Some(Rgb::BLACK), None, None],
        );
        assert_eq!(frame.width, 2);
        assert_eq!(frame.pixels.len(), 4);
    }
}
