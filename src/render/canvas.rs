//! Character grid shared by all styles + ANSI line assembly.

use crate::core::color::{AnsiCode, Scheme};

/// One character cell.  `t` is the originating sample's normalized position
/// in `[0, 1]`; `None` marks background, which the colorizer leaves alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub t: Option<f64>,
}

impl Cell {
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            glyph: ' ',
            t: None,
        }
    }

    #[must_use]
    pub const fn new(glyph: char, t: f64) -> Self {
        Self { glyph, t: Some(t) }
    }
}

/// Row-major glyph grid; single-row styles are a 1×n canvas.
#[derive(Clone, Debug)]
pub struct Canvas {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    #[must_use]
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::blank(); rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Join into printable lines, no colour.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                self.cells[r * self.cols..(r + 1) * self.cols]
                    .iter()
                    .map(|c| c.glyph)
                    .collect()
            })
            .collect()
    }

    /// Join into printable lines with per-cell colour.
    ///
    /// Escapes are emitted only when the active colour changes; every line
    /// that opened a colour ends with a reset.
    #[must_use]
    pub fn to_colored_lines(&self, scheme: &Scheme) -> Vec<String> {
        if *scheme == Scheme::Off {
            return self.to_lines();
        }

        let mut lines = Vec::with_capacity(self.rows);
        for r in 0..self.rows {
            let mut line = String::with_capacity(self.cols * 4);
            let mut active: Option<AnsiCode> = None;
            for cell in &self.cells[r * self.cols..(r + 1) * self.cols] {
                let wanted = cell.t.and_then(|t| scheme.color_at(t));
                if wanted != active {
                    match wanted {
                        Some(code) => line.push_str(code.as_str()),
                        None => line.push_str(AnsiCode::reset().as_str()),
                    }
                    active = wanted;
                }
                line.push(cell.glyph);
            }
            if active.is_some() {
                line.push_str(AnsiCode::reset().as_str());
            }
            lines.push(line);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncolored_join() {
        let mut c = Canvas::blank(2, 2);
        c.set(0, 1, Cell::new('█', 1.0));
        c.set(1, 0, Cell::new('▁', 0.0));
        assert_eq!(c.to_lines(), vec![" █", "▁ "]);
    }

    #[test]
    fn fixed_scheme_opens_once_and_resets_at_line_end() {
        let mut c = Canvas::blank(1, 2);
        c.set(0, 0, Cell::new('▁', 0.0));
        c.set(0, 1, Cell::new('█', 1.0));
        let lines = c.to_colored_lines(&Scheme::Fixed(AnsiCode::green()));
        assert_eq!(lines, vec!["\x1b[32m▁█\x1b[0m"]);
    }

    #[test]
    fn background_cells_stay_uncolored() {
        let mut c = Canvas::blank(1, 3);
        c.set(0, 0, Cell::new('─', 0.5));
        // col 1 stays blank
        c.set(0, 2, Cell::new('─', 0.5));
        let lines = c.to_colored_lines(&Scheme::Fixed(AnsiCode::cyan()));
        assert_eq!(lines, vec!["\x1b[36m─\x1b[0m \x1b[36m─\x1b[0m"]);
    }

    #[test]
    fn off_scheme_emits_no_escapes() {
        let mut c = Canvas::blank(1, 1);
        c.set(0, 0, Cell::new('█', 1.0));
        assert_eq!(c.to_colored_lines(&Scheme::Off), vec!["█"]);
    }
}
