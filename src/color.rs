//! Color types, brightness scaling, and the strip's packed wire encoding.

/// RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Dim every channel by a global brightness factor in `[0, 255]`.
    ///
    /// Integer multiply-then-truncate: `floor(channel * brightness / 255)`.
    /// 255 leaves the color untouched, 0 yields black.
    pub fn scale(self, brightness: u8) -> Self {
        let dim = |c: u8| (u16::from(c) * u16::from(brightness) / 255) as u8;
        Self {
            r: dim(self.r),
            g: dim(self.g),
            b: dim(self.b),
        }
    }

    /// Pack into the strip's wire encoding.
    pub const fn pack(self) -> PackedColor {
        PackedColor((self.g as u32) << 16 | (self.r as u32) << 8 | self.b as u32)
    }
}

/// Color handle in the strip driver's native channel order: green in the
/// high byte, then red, then blue. The ordering is part of the driver
/// contract; swapping it shifts every rendered hue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedColor(u32);

impl PackedColor {
    /// All channels off.
    pub const OFF: Self = Self(0);

    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Raw 32-bit value handed to the strip driver.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}
