use clap::Parser;

use crate::core::constants::DEFAULT_CHART_HEIGHT;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "sparkline",
    about = "Compact terminal sparklines from numeric data"
)]
pub struct Cli {
    /// Series of data points to plot (reads stdin when omitted)
    #[arg(value_name = "N", num_args = 0.., allow_negative_numbers = true,
          value_parser = parse_number)]
    pub numbers: Vec<f64>,

    /// Tick style: default, block, ascii, numeric, braille, arrows, line,
    /// multiline or braille-line
    #[arg(long, default_value = "default")]
    pub ticks: String,

    /// Color scheme: gradient, green, cyan, red, blue, magenta, yellow,
    /// #rrggbb or none
    #[arg(long, default_value = "none")]
    pub color: String,

    /// Rows for the line, multiline and braille-line styles
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    pub height: usize,

    /// Show statistics about the data
    #[arg(long)]
    pub stats: bool,

    /// Average neighbouring samples so the line fits the terminal width
    #[arg(long)]
    pub fit: bool,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// Float parser on top of `lexical-core`; accepts the unicode minus sign,
/// rejects NaN and infinities.
fn parse_number(s: &str) -> Result<f64, String> {
    let ascii = s.replace('\u{2212}', "-");
    let val = lexical_core::parse::<f64>(ascii.as_bytes())
        .map_err(|_| format!("'{s}' is not a number"))?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}
