//! Scaling strategies, one per tick style, over a shared canvas grid.

pub mod binner;
pub mod braille;
pub mod canvas;
pub mod chart;
pub mod ramp;
pub mod scale;

pub use binner::fit_to_width;
pub use canvas::{Canvas, Cell};

use crate::core::{error::SparkError, style::TickStyle};

/// Scale a sample sequence through `style` into a printable canvas.
pub fn scale_data(data: &[f64], style: &TickStyle) -> Result<Canvas, SparkError> {
    match style {
        TickStyle::Ramp(ticks) => ramp::render_ramp(data, ticks),
        TickStyle::Arrows => ramp::render_arrows(data),
        TickStyle::Line { height } => chart::render_line(data, *height),
        TickStyle::Bars { height } => chart::render_bars(data, *height),
        TickStyle::BrailleLine { height, fill } => {
            braille::render_braille_line(data, *height, *fill)
        }
    }
}
