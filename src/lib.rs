//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use self::core::{
    color::{AnsiCode, ColorError, Scheme, colorize, gradient},
    constants::{DECIMAL_PRECISION, DEFAULT_CHART_HEIGHT},
    error::{ConfigError, SparkError},
    stats::Stats,
    style::{STYLE_NAMES, TickStyle},
};

pub use render::{Canvas, Cell, fit_to_width, scale_data};

/// Convenience one-shot: render `data` with a named style, uncolored.
/// Grid styles produce one line per row, joined with `\n`.
pub fn sparkline(data: &[f64], style_name: &str) -> Result<String, SparkError> {
    let style = TickStyle::from_name(style_name, DEFAULT_CHART_HEIGHT)?;
    let canvas = scale_data(data, &style)?;
    Ok(canvas.to_lines().join("\n"))
}
