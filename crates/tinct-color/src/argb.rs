// SPDX-License-Identifier: MIT
//
// Packed ARGB color value — the engine's interchange type.
//
// Every conversion in the pipeline starts or ends here: an opaque
// 0xAARRGGBB word, the same layout the reference uses. Parsing and
// formatting live at this boundary so the numeric core never sees a
// string.

use std::fmt;
use std::str::FromStr;

/// A 32-bit packed ARGB color (`0xAARRGGBB`).
///
/// Components are always in `[0, 255]` by construction. The value is
/// immutable; all "modification" goes through re-derivation (solve a
/// new [`crate::Hct`], repack).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Build an opaque color from 8-bit components.
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Build from a packed word, keeping the alpha byte as given.
    #[inline]
    #[must_use]
    pub const fn from_u32(argb: u32) -> Self {
        Self(argb)
    }

    /// The same color with alpha forced to 255.
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        Self(self.0 | 0xFF00_0000)
    }

    /// The same color with the given alpha byte.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    /// Hex form without alpha: `#RRGGBB`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red(), self.green(), self.blue())
    }

    /// Hex form with alpha: `#RRGGBBAA`.
    #[must_use]
    pub fn to_hex_alpha(self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }

    /// Normalized-float text `"R G B A"` for markup-style consumers.
    ///
    /// Each field is printed with six decimal places, e.g.
    /// `"0.564706 0.294118 0.250980 1.000000"`, enough to round-trip a byte.
    #[must_use]
    pub fn to_float_text(self) -> String {
        format!(
            "{:.6} {:.6} {:.6} {:.6}",
            f64::from(self.red()) / 255.0,
            f64::from(self.green()) / 255.0,
            f64::from(self.blue()) / 255.0,
            f64::from(self.alpha()) / 255.0,
        )
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb({:#010X})", self.0)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.to_hex())
        } else {
            write!(f, "{}", self.to_hex_alpha())
        }
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Error produced when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseArgbError {
    /// Length is not 3, 6, or 8 hex digits (after stripping `#`).
    BadLength(usize),
    /// A character outside `[0-9a-fA-F]` was found.
    BadDigit(char),
}

impl fmt::Display for ParseArgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(len) => write!(
                f,
                "hex color must be 3, 6 or 8 digits (RGB, RRGGBB or RRGGBBAA), got {len}"
            ),
            Self::BadDigit(c) => write!(f, "invalid hex digit {c:?} in color"),
        }
    }
}

impl std::error::Error for ParseArgbError {}

impl FromStr for Argb {
    type Err = ParseArgbError;

    /// Parse `RGB`, `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let bytes = s.as_bytes();
        match bytes.len() {
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Ok(Self::from_rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = hex_byte(bytes[0], bytes[1])?;
                let g = hex_byte(bytes[2], bytes[3])?;
                let b = hex_byte(bytes[4], bytes[5])?;
                Ok(Self::from_rgb(r, g, b))
            }
            8 => {
                let r = hex_byte(bytes[0], bytes[1])?;
                let g = hex_byte(bytes[2], bytes[3])?;
                let b = hex_byte(bytes[4], bytes[5])?;
                let a = hex_byte(bytes[6], bytes[7])?;
                Ok(Self::from_rgb(r, g, b).with_alpha(a))
            }
            len => Err(ParseArgbError::BadLength(len)),
        }
    }
}

#[inline]
const fn hex_digit(c: u8) -> Result<u8, ParseArgbError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(ParseArgbError::BadDigit(c as char)),
    }
}

#[inline]
const fn hex_byte(hi: u8, lo: u8) -> Result<u8, ParseArgbError> {
    let hi = match hex_digit(hi) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    let lo = match hex_digit(lo) {
        Ok(v) => v,
        Err(e) => return Err(e),
    };
    Ok(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
