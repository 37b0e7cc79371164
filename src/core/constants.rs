//! A collection of constants.

/// Braille has 2 horizontal dots per character cell
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 4 vertical dots per character cell
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Eighth-block glyphs give 8 sub-row levels per bar-chart cell
pub const BLOCK_VERTICAL_RESOLUTION: usize = 8;

/// Rows used by the multi-row styles unless overridden
pub const DEFAULT_CHART_HEIGHT: usize = 4;

/// Statistics are rounded to two decimal places.
///
/// 14.1421 becomes 14.14
pub const DECIMAL_PRECISION: usize = 2;

/// Column budget when the terminal width cannot be detected
pub const FALLBACK_TERM_WIDTH: usize = 80;
