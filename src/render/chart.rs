//! Multi-row charts: box-drawing line and eighth-block bars.

use crate::{
    core::{
        constants::BLOCK_VERTICAL_RESOLUTION,
        error::SparkError,
        style::DEFAULT_TICKS,
    },
    render::{
        canvas::{Canvas, Cell},
        scale::{normalize, quantize},
    },
};

/// Box-drawing line chart over `height` rows, one column per sample.
///
/// Each column holds the marker for the row nearest its sample's scaled
/// value; when the row changes between neighbours the corner pair plus
/// vertical joins are drawn in the newer column.
pub fn render_line(data: &[f64], height: usize) -> Result<Canvas, SparkError> {
    if data.is_empty() {
        return Err(SparkError::EmptyData);
    }
    let height = height.max(1);

    let norms = normalize(data);
    // row 0 is the top of the canvas
    let row_of = |t: f64| height - 1 - quantize(t, height);

    let mut canvas = Canvas::blank(height, data.len());
    let mut prev = row_of(norms[0]);
    canvas.set(prev, 0, Cell::new('─', norms[0]));

    for (col, &t) in norms.iter().enumerate().skip(1) {
        let row = row_of(t);
        if row == prev {
            canvas.set(row, col, Cell::new('─', t));
        } else if row < prev {
            // value rose: turn up out of the old row, then right at the new one
            canvas.set(prev, col, Cell::new('╯', t));
            canvas.set(row, col, Cell::new('╭', t));
            for r in row + 1..prev {
                canvas.set(r, col, Cell::new('│', t));
            }
        } else {
            // value fell
            canvas.set(prev, col, Cell::new('╮', t));
            canvas.set(row, col, Cell::new('╰', t));
            for r in prev + 1..row {
                canvas.set(r, col, Cell::new('│', t));
            }
        }
        prev = row;
    }
    Ok(canvas)
}

/// Eighth-block bar chart over `height` rows, one column per sample.
///
/// Every row below the sample's level is a full block; the topmost filled
/// row uses a partial block for sub-row resolution.  Every sample shows at
/// least the lowest eighth.
pub fn render_bars(data: &[f64], height: usize) -> Result<Canvas, SparkError> {
    if data.is_empty() {
        return Err(SparkError::EmptyData);
    }
    let height = height.max(1);

    let norms = normalize(data);
    let total = height * BLOCK_VERTICAL_RESOLUTION;

    let mut canvas = Canvas::blank(height, data.len());
    for (col, &t) in norms.iter().enumerate() {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let eighths = ((t * total as f64).round() as usize).clamp(1, total);
        let full_rows = eighths / BLOCK_VERTICAL_RESOLUTION;
        let rem = eighths % BLOCK_VERTICAL_RESOLUTION;

        for r in 0..full_rows {
            canvas.set(height - 1 - r, col, Cell::new('█', t));
        }
        if rem > 0 {
            canvas.set(height - 1 - full_rows, col, Cell::new(DEFAULT_TICKS[rem - 1], t));
        }
    }
    Ok(canvas)
}
