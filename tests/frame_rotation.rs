//! Integration tests for the directory-rotation frame source.
//!
//! Fixture images are encoded with the `image` crate into a scratch
//! directory. GIF assertions classify pixels by dominant channel instead of
//! exact values, since GIF encoding may quantize the palette.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, RgbImage, Rgba, RgbaImage};
use pixelgrid::{DecodePolicy, FrameSource, PixelFrame, Rgb, SourceError};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, color: [u8; 3]) {
    RgbImage::from_pixel(4, 4, image::Rgb(color))
        .save(dir.join(name))
        .unwrap();
}

fn write_gif(dir: &Path, name: &str, frame_colors: &[[u8; 3]]) {
    let file = fs::File::create(dir.join(name)).unwrap();
    let mut encoder = GifEncoder::new(file);
    let frames = frame_colors.iter().map(|&[r, g, b]| {
        let buffer = RgbaImage::from_pixel(4, 4, Rgba([r, g, b, 255]));
        Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(100, 1))
    });
    encoder.encode_frames(frames).unwrap();
}

fn first_pixel(frame: &PixelFrame) -> Rgb {
    frame.pixels[0].expect("fixture frames are opaque")
}

/// Which channel dominates; tolerant of palette quantization.
fn dominant(c: Rgb) -> char {
    if c.r >= c.g && c.r >= c.b {
        'r'
    } else if c.g >= c.b {
        'g'
    } else {
        'b'
    }
}

#[test]
fn rotation_visits_every_file_once_per_cycle() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "a.png", [255, 0, 0]);
    write_png(dir.path(), "b.png", [0, 255, 0]);
    write_png(dir.path(), "c.png", [0, 0, 255]);

    let mut source = FrameSource::new(dir.path(), DecodePolicy::Halt).unwrap();

    // One full cycle visits all three files, in whatever order the
    // directory lists them.
    let cycle: Vec<Rgb> = (0..3).map(|_| first_pixel(&source.next_frame().unwrap())).collect();
    let seen: BTreeSet<Rgb> = cycle.iter().copied().collect();
    let expected: BTreeSet<Rgb> = [
        Rgb::new(255, 0, 0),
        Rgb::new(0, 255, 0),
        Rgb::new(0, 0, 255),
    ]
    .into_iter()
    .collect();
    assert_eq!(seen, expected);

    // The next cycle starts over with the first file's content.
    assert_eq!(first_pixel(&source.next_frame().unwrap()), cycle[0]);
}

#[test]
fn gif_yields_every_frame_before_rotating() {
    let dir = TempDir::new().unwrap();
    write_gif(
        dir.path(),
        "anim.gif",
        &[[255, 0, 0], [0, 255, 0], [0, 0, 255]],
    );

    let mut source = FrameSource::new(dir.path(), DecodePolicy::Halt).unwrap();

    let classes: Vec<char> = (0..3)
        .map(|_| dominant(first_pixel(&source.next_frame().unwrap())))
        .collect();
    assert_eq!(classes, vec!['r', 'g', 'b']);

    // Only file in rotation: the fourth call loops back to frame one.
    assert_eq!(dominant(first_pixel(&source.next_frame().unwrap())), 'r');
}

#[test]
fn gif_frame_delay_survives_decoding() {
    let dir = TempDir::new().unwrap();
    write_gif(dir.path(), "anim.gif", &[[255, 0, 0], [0, 255, 0]]);

    let mut source = FrameSource::new(dir.path(), DecodePolicy::Halt).unwrap();
    let frame = source.next_frame().unwrap();
    assert_eq!(frame.delay, std::time::Duration::from_millis(100));
}

#[test]
fn empty_directory_is_a_startup_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        FrameSource::new(dir.path(), DecodePolicy::default()),
        Err(SourceError::EmptyDirectory(_))
    ));

    // Non-image files do not count as eligible.
    fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
    assert!(matches!(
        FrameSource::new(dir.path(), DecodePolicy::default()),
        Err(SourceError::EmptyDirectory(_))
    ));
}

#[test]
fn corrupt_file_is_skipped_under_default_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.gif"), b"definitely not a gif").unwrap();
    write_png(dir.path(), "good.png", [255, 0, 0]);

    let mut source = FrameSource::new(dir.path(), DecodePolicy::SkipFile).unwrap();

    // Wherever the rotation starts, both calls land on the good file.
    for _ in 0..2 {
        let frame = source.next_frame().unwrap();
        assert_eq!(first_pixel(&frame), Rgb::new(255, 0, 0));
    }
}

#[test]
fn corrupt_file_halts_under_halt_policy() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.gif"), b"definitely not a gif").unwrap();
    write_png(dir.path(), "good.png", [255, 0, 0]);

    let mut source = FrameSource::new(dir.path(), DecodePolicy::Halt).unwrap();

    // The bad file is hit within the first cycle and propagates.
    let results: Vec<_> = (0..2).map(|_| source.next_frame()).collect();
    assert!(results.iter().any(|r| r.is_err()));
}

#[test]
fn all_files_failing_is_reported_not_spun_on() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad1.gif"), b"nope").unwrap();
    fs::write(dir.path().join("bad2.png"), b"also nope").unwrap();

    let mut source = FrameSource::new(dir.path(), DecodePolicy::SkipFile).unwrap();
    assert!(matches!(
        source.next_frame(),
        Err(SourceError::AllFilesFailed(_))
    ));
}

#[test]
fn shrinking_directory_resets_the_rotation_pointer() {
    let dir = TempDir::new().unwrap();
    let colors = [
        ("a.png", Rgb::new(255, 0, 0)),
        ("b.png", Rgb::new(0, 255, 0)),
        ("c.png", Rgb::new(0, 0, 255)),
    ];
    for (name, c) in colors {
        write_png(dir.path(), name, [c.r, c.g, c.b]);
    }

    let mut source = FrameSource::new(dir.path(), DecodePolicy::Halt).unwrap();

    // Visit two files, then delete exactly those two. The pointer now sits
    // past the end of the shrunken listing and must reset instead of
    // indexing out of range.
    let mut visited = BTreeSet::new();
    for _ in 0..2 {
        visited.insert(first_pixel(&source.next_frame().unwrap()));
    }
    let mut remaining = None;
    for (name, c) in colors {
        if visited.contains(&c) {
            fs::remove_file(dir.path().join(name)).unwrap();
        } else {
            remaining = Some(c);
        }
    }
    let remaining = remaining.expect("one file left");

    assert_eq!(first_pixel(&source.next_frame().unwrap()), remaining);
    // And the rotation keeps cycling over the single survivor.
    assert_eq!(first_pixel(&source.next_frame().unwrap()), remaining);
}

#[test]
fn files_added_between_cycles_join_the_rotation() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "a.png", [255, 0, 0]);

    let mut source = FrameSource::new(dir.path(), DecodePolicy::Halt).unwrap();
    assert_eq!(
        first_pixel(&source.next_frame().unwrap()),
        Rgb::new(255, 0, 0)
    );

    write_png(dir.path(), "b.png", [0, 255, 0]);

    // The next two calls cover both files.
    let seen: BTreeSet<Rgb> = (0..2)
        .map(|_| first_pixel(&source.next_frame().unwrap()))
        .collect();
    assert!(seen.contains(&Rgb::new(0, 255, 0)));
}
