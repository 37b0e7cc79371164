use std::{
    io::{Write, stdout},
    time::Instant,
};

use terminal_size::{Width, terminal_size};

use crate::{
    core::{
        color::Scheme,
        constants::FALLBACK_TERM_WIDTH,
        data::read_numbers,
        error::SparkError,
        stats::Stats,
        style::TickStyle,
    },
    render::{fit_to_width, scale_data},
};

use super::parse::Cli;

pub fn spark(cli: &Cli) -> Result<(), SparkError> {
    // resolve names before touching any data
    let style = TickStyle::from_name(&cli.ticks, cli.height)?;
    let scheme = Scheme::from_name(&cli.color)?;

    let t_ingest = Instant::now();
    let numbers = if cli.numbers.is_empty() {
        read_numbers(std::io::stdin())?
    } else {
        cli.numbers.clone()
    };
    if numbers.is_empty() {
        return Err(SparkError::EmptyData);
    }
    let dur_ingest = t_ingest.elapsed().as_micros();

    let t_scale = Instant::now();
    let data = if cli.fit {
        fit_to_width(&numbers, columns() * style.samples_per_column())
    } else {
        numbers.clone()
    };
    let canvas = scale_data(&data, &style)?;
    let dur_scale = t_scale.elapsed().as_micros();

    if cli.debug {
        eprintln!(
            "ingest: {dur_ingest} µs ({} samples)   scale: {dur_scale} µs ({}×{} cells)",
            numbers.len(),
            canvas.rows(),
            canvas.cols(),
        );
    }

    let mut out = stdout().lock();
    for line in canvas.to_colored_lines(&scheme) {
        writeln!(out, "{line}")?;
    }
    if cli.stats {
        // statistics describe the raw input, not the width-fitted copy
        writeln!(out, "{}", Stats::describe(&numbers)?)?;
    }
    Ok(())
}

/// Current terminal column budget (80 fallback).
fn columns() -> usize {
    terminal_size().map_or(FALLBACK_TERM_WIDTH, |(Width(w), _)| usize::from(w))
}
