//! Aggregates the scaling "business logic" layer.

pub mod color;
pub mod constants;
pub mod data;
pub mod error;
pub mod stats;
pub mod style;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, Scheme, colorize};
pub use constants::{DECIMAL_PRECISION, DEFAULT_CHART_HEIGHT};
pub use error::{ConfigError, SparkError};
pub use stats::Stats;
pub use style::{STYLE_NAMES, TickStyle};
