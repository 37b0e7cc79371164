//! Numeric series to a UTF-8 braille grid.
//!
//! Two adjacent samples share one character column (left and right
//! half-columns of the 2×4 dot matrix).  The implementation relies on an
//! invariant: the intersection of a contiguous vertical dot range with a
//! 4-dot braille cell is one of 11 canonical patterns — full, the two
//! contiguous triplets, the three contiguous pairs, the four single dots,
//! plus the empty state.  The bit-mask for each pattern is pre-computed for
//! both half-columns and indexed at run-time.

use crate::{
    core::{
        constants::{BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION},
        error::SparkError,
    },
    render::{
        canvas::{Canvas, Cell},
        scale::normalize,
    },
};

/// Dot-space min/max inside one half-column (0 = top dot row).
#[derive(Clone)]
struct ColumnSpan {
    min: usize,
    max: usize,
}

/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⡇), 2 top-three (⠇), 3 bottom-three (⡆), 4 top-two (⠃),
/// 5 middle-two (⠆), 6 bottom-two (⡄), 7 dot-zero (⠁), 8 dot-one (⠂),
/// 9 dot-two (⠄), 10 dot-three (⡀)
const LEFT_MASKS: [u8; 11] = [
    0x00, 0x47, 0x07, 0x46, 0x03, 0x06, 0x44, 0x01, 0x02, 0x04, 0x40,
];
/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⢸), 2 top-three (⠸), 3 bottom-three (⢰), 4 top-two (⠘),
/// 5 middle-two (⠰), 6 bottom-two (⢠), 7 dot-zero (⠈), 8 dot-one (⠐),
/// 9 dot-two (⠠), 10 dot-three (⢀)
const RIGHT_MASKS: [u8; 11] = [
    0x00, 0xB8, 0x38, 0xB0, 0x18, 0x30, 0xA0, 0x08, 0x10, 0x20, 0x80,
];

/// Map `(low, high)` — dot offsets inside a 4-row cell — to the pattern id.
#[inline]
const fn pattern_id(low: usize, high: usize) -> usize {
    match (low, high) {
        (0, 3) => 1,  // full
        (0, 2) => 2,  // top-3
        (1, 3) => 3,  // bottom-3
        (0, 1) => 4,  // top-2
        (1, 2) => 5,  // middle-2
        (2, 3) => 6,  // bottom-2
        (0, 0) => 7,  // single-0
        (1, 1) => 8,  // single-1
        (2, 2) => 9,  // single-2
        (3, 3) => 10, // single-3
        _ => 0,       // empty / no overlap
    }
}

#[inline]
fn cell_pattern(span: &ColumnSpan, row_top: usize, row_bottom: usize) -> usize {
    if span.max < row_top || span.min > row_bottom {
        0
    } else {
        pattern_id(
            span.min.max(row_top) - row_top,
            span.max.min(row_bottom) - row_top,
        )
    }
}

/// Braille graph over `height` rows.
///
/// Line mode bridges each half-column toward its predecessor so the trace
/// stays visually connected; fill mode extends every span down to the
/// baseline instead.
pub fn render_braille_line(data: &[f64], height: usize, fill: bool) -> Result<Canvas, SparkError> {
    if data.is_empty() {
        return Err(SparkError::EmptyData);
    }
    let height = height.max(1);

    let norms = normalize(data);
    let vert_px = height * BRAILLE_VERTICAL_RESOLUTION;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let px_of = |t: f64| -> usize { (vert_px - 1) - (t * (vert_px - 1) as f64).round() as usize };

    let mut spans: Vec<ColumnSpan> = norms
        .iter()
        .map(|&t| {
            let px = px_of(t);
            if fill {
                ColumnSpan {
                    min: px,
                    max: vert_px - 1,
                }
            } else {
                ColumnSpan { min: px, max: px }
            }
        })
        .collect();

    if !fill {
        let mut bridged = Vec::with_capacity(spans.len());
        bridged.push(spans[0].clone());
        for i in 1..spans.len() {
            let prev = &spans[i - 1];
            let curr = &spans[i];
            bridged.push(ColumnSpan {
                min: prev.min.min(curr.min + 1),
                max: prev.max.max(curr.max.saturating_sub(1)),
            });
        }
        spans = bridged;
    }

    let x_chars = data.len().div_ceil(BRAILLE_HORIZONTAL_RESOLUTION);
    let mut canvas = Canvas::blank(height, x_chars);

    for row in 0..height {
        let row_top = row * BRAILLE_VERTICAL_RESOLUTION;
        let row_bottom = row_top + BRAILLE_VERTICAL_RESOLUTION - 1;

        for col in 0..x_chars {
            let left = col * BRAILLE_HORIZONTAL_RESOLUTION;

            let left_pattern = spans
                .get(left)
                .map_or(0, |s| cell_pattern(s, row_top, row_bottom));
            let right_pattern = spans
                .get(left + 1)
                .map_or(0, |s| cell_pattern(s, row_top, row_bottom));

            let mask = LEFT_MASKS[left_pattern] | RIGHT_MASKS[right_pattern];
            let cell = if mask == 0 {
                Cell {
                    glyph: '⠀',
                    t: None,
                }
            } else {
                // colour from the samples this cell covers
                let t = match (norms.get(left), norms.get(left + 1)) {
                    (Some(a), Some(b)) => f64::midpoint(*a, *b),
                    (Some(a), None) => *a,
                    _ => 0.0,
                };
                let glyph = char::from_u32(0x2800 | u32::from(mask)).unwrap_or('⠀');
                Cell::new(glyph, t)
            };
            canvas.set(row, col, cell);
        }
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_rise() {
        // left dot at the bottom, right half-column bridged up to the top
        let c = render_braille_line(&[0.0, 1.0], 1, false).unwrap();
        assert_eq!(c.to_lines(), vec!["⣰"]);
    }

    #[test]
    fn single_cell_rise_filled() {
        let c = render_braille_line(&[0.0, 1.0], 1, true).unwrap();
        assert_eq!(c.to_lines(), vec!["⣸"]);
    }

    #[test]
    fn flat_series_sits_on_the_baseline() {
        let c = render_braille_line(&[5.0, 5.0, 5.0], 1, false).unwrap();
        assert_eq!(c.to_lines(), vec!["⣀⡀"]);
    }

    #[test]
    fn grid_always_has_height_rows() {
        for h in 1..5 {
            for n in 1..9 {
                #[allow(clippy::cast_precision_loss)]
                let data: Vec<f64> = (0..n).map(|i| f64::from(i % 3)).collect();
                let c = render_braille_line(&data, h, false).unwrap();
                assert_eq!(c.rows(), h);
                assert_eq!(c.cols(), (n as usize).div_ceil(2));
            }
        }
    }

    #[test]
    fn every_glyph_is_a_braille_scalar() {
        let data = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let c = render_braille_line(&data, 2, false).unwrap();
        for line in c.to_lines() {
            for g in line.chars() {
                assert!(('\u{2800}'..='\u{28FF}').contains(&g), "non-braille {g:?}");
            }
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            render_braille_line(&[], 1, false),
            Err(SparkError::EmptyData)
        ));
    }
}
