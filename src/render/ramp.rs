//! Single-row styles: glyph ramps and slope arrows.

use crate::{
    core::{error::SparkError, style::ARROW_TICKS},
    render::{
        canvas::{Canvas, Cell},
        scale::{normalize, quantize},
    },
};

/// One ramp glyph per sample.
pub fn render_ramp(data: &[f64], ticks: &[char]) -> Result<Canvas, SparkError> {
    if data.is_empty() {
        return Err(SparkError::EmptyData);
    }

    let norms = normalize(data);
    let mut canvas = Canvas::blank(1, data.len());
    for (col, &t) in norms.iter().enumerate() {
        canvas.set(0, col, Cell::new(ticks[quantize(t, ticks.len())], t));
    }
    Ok(canvas)
}

/// One slope arrow per sample versus its predecessor.
///
/// The first sample has no predecessor and renders flat, keeping output
/// length equal to input length.
pub fn render_arrows(data: &[f64]) -> Result<Canvas, SparkError> {
    if data.is_empty() {
        return Err(SparkError::EmptyData);
    }

    let [down, flat, _, up] = ARROW_TICKS;
    let norms = normalize(data);
    let mut canvas = Canvas::blank(1, data.len());
    for (col, &t) in norms.iter().enumerate() {
        let glyph = if col == 0 {
            flat
        } else if data[col] > data[col - 1] {
            up
        } else if data[col] < data[col - 1] {
            down
        } else {
            flat
        };
        canvas.set(0, col, Cell::new(glyph, t));
    }
    Ok(canvas)
}
