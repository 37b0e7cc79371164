//! Tick styles: named glyph palettes plus their layout rule.
//!
//! A style is a closed set of tagged variants resolved by name through
//! [`TickStyle::from_name`]; there is no open-ended plugin lookup.

use crate::core::error::ConfigError;

/// Lower-block ramp, lowest level first.
pub const DEFAULT_TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
/// Left-block ramp.
pub const BLOCK_TICKS: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];
/// Pure-ASCII ramp for dumb terminals.
pub const ASCII_TICKS: [char; 5] = ['.', 'o', 'O', '#', '@'];
/// Digit ramp.
pub const NUMERIC_TICKS: [char; 5] = ['1', '2', '3', '4', '5'];
/// Braille density ramp (single-row, distinct from the braille-line grid).
pub const BRAILLE_TICKS: [char; 4] = ['⣀', '⣤', '⣶', '⣿'];
/// Slope glyphs: down, flat, rise, up.
pub const ARROW_TICKS: [char; 4] = ['↓', '→', '↗', '↑'];

/// Immutable descriptor of how samples map to glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickStyle {
    /// One ramp glyph per sample, quantized over the palette.
    Ramp(&'static [char]),
    /// One slope arrow per sample, direction versus the previous sample.
    Arrows,
    /// Box-drawing line chart over `height` rows.
    Line { height: usize },
    /// Eighth-block bar chart over `height` rows, filled to the baseline.
    Bars { height: usize },
    /// Braille graph over `height` rows, 2×4 dots per cell.
    BrailleLine { height: usize, fill: bool },
}

/// Every name accepted by [`TickStyle::from_name`].
pub const STYLE_NAMES: [&str; 9] = [
    "default",
    "block",
    "ascii",
    "numeric",
    "braille",
    "arrows",
    "line",
    "multiline",
    "braille-line",
];

impl TickStyle {
    /// Resolve a style name; `height` only matters for the multi-row styles
    /// and is floored at one row.
    pub fn from_name(name: &str, height: usize) -> Result<Self, ConfigError> {
        let height = height.max(1);
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Ramp(&DEFAULT_TICKS)),
            "block" => Ok(Self::Ramp(&BLOCK_TICKS)),
            "ascii" => Ok(Self::Ramp(&ASCII_TICKS)),
            "numeric" => Ok(Self::Ramp(&NUMERIC_TICKS)),
            "braille" => Ok(Self::Ramp(&BRAILLE_TICKS)),
            "arrows" => Ok(Self::Arrows),
            "line" => Ok(Self::Line { height }),
            "multiline" => Ok(Self::Bars { height }),
            "braille-line" => Ok(Self::BrailleLine {
                height,
                fill: false,
            }),
            other => Err(ConfigError::UnknownStyle(other.to_owned())),
        }
    }

    /// Rows the rendered canvas will have.
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            Self::Ramp(_) | Self::Arrows => 1,
            Self::Line { height } | Self::Bars { height } | Self::BrailleLine { height, .. } => {
                *height
            }
        }
    }

    /// Input samples consumed per output column (2 for braille half-columns).
    #[must_use]
    pub fn samples_per_column(&self) -> usize {
        match self {
            Self::BrailleLine { .. } => crate::core::constants::BRAILLE_HORIZONTAL_RESOLUTION,
            _ => 1,
        }
    }
}
