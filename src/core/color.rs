//! Zero-alloc ANSI colour wrapper + the colour schemes applied to a canvas.

use std::{fmt, str};

use crate::core::error::ConfigError;

#[derive(Debug)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Parse a `#rrggbb` colour.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

// --- Schemes ---

/// How the colorizer paints non-background cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scheme {
    /// Value-driven red→yellow→green ramp.
    Gradient,
    /// One colour for every glyph.
    Fixed(AnsiCode),
    /// Plain output, no escapes at all.
    Off,
}

impl Scheme {
    /// Resolve a scheme name.  Unknown names are a hard error, never a
    /// fallback colour.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        let lower = name.trim().to_ascii_lowercase();
        match lower.as_str() {
            "gradient" => Ok(Self::Gradient),
            "none" => Ok(Self::Off),
            "red" => Ok(Self::Fixed(AnsiCode::red())),
            "green" => Ok(Self::Fixed(AnsiCode::green())),
            "yellow" => Ok(Self::Fixed(AnsiCode::yellow())),
            "blue" => Ok(Self::Fixed(AnsiCode::blue())),
            "magenta" => Ok(Self::Fixed(AnsiCode::magenta())),
            "cyan" => Ok(Self::Fixed(AnsiCode::cyan())),
            other if other.starts_with('#') => AnsiCode::from_hex(other)
                .map(Self::Fixed)
                .map_err(|_| ConfigError::UnknownScheme(name.to_owned())),
            _ => Err(ConfigError::UnknownScheme(name.to_owned())),
        }
    }

    /// Colour for a glyph whose sample sits at normalized position `t`.
    #[must_use]
    pub fn color_at(&self, t: f64) -> Option<AnsiCode> {
        match self {
            Self::Off => None,
            Self::Fixed(c) => Some(*c),
            Self::Gradient => Some(gradient(t)),
        }
    }
}

/// Three-stop red→yellow→green ramp, linear in RGB between stops.
#[must_use]
pub fn gradient(t: f64) -> AnsiCode {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (r, g) = if t < 0.5 {
        (255, (2.0 * t * 255.0).round() as u8)
    } else {
        (((2.0 - 2.0 * t) * 255.0).round() as u8, 255)
    };
    AnsiCode::rgb(r, g, 0)
}
