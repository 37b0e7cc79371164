//! Summary statistics displayed alongside the rendered line.

use std::fmt;

use crate::core::{constants::DECIMAL_PRECISION, error::SparkError};

/// Min / max / mean / population standard deviation of a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl Stats {
    /// Pure one-pass-ish summary; deterministic for identical input.
    ///
    /// Standard deviation is the population form (divide by `n`): the series
    /// is the whole data set being drawn, not a sample of something larger.
    pub fn describe(data: &[f64]) -> Result<Self, SparkError> {
        if data.is_empty() {
            return Err(SparkError::EmptyData);
        }

        let (mut min, mut max, mut sum) = (f64::INFINITY, f64::NEG_INFINITY, 0.0);
        for &v in data {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = data.len() as f64;
        let mean = sum / n;
        let var = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Ok(Self {
            min,
            max,
            mean,
            std_dev: var.sqrt(),
        })
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Minimum: {:.p$}\nMaximum: {:.p$}\nMean: {:.p$}\nStandard Deviation: {:.p$}",
            self.min,
            self.max,
            self.mean,
            self.std_dev,
            p = DECIMAL_PRECISION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_reference_series() {
        let s = Stats::describe(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        assert!((s.min - 10.0).abs() < f64::EPSILON);
        assert!((s.max - 50.0).abs() < f64::EPSILON);
        assert!((s.mean - 30.0).abs() < f64::EPSILON);
        // population std: sqrt(1000 / 5)
        assert!((s.std_dev - 14.142_135_623_730_951).abs() < 1e-9);
    }

    #[test]
    fn display_rounds_to_two_decimals() {
        let s = Stats::describe(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
        assert_eq!(
            s.to_string(),
            "Minimum: 10.00\nMaximum: 50.00\nMean: 30.00\nStandard Deviation: 14.14"
        );
    }

    #[test]
    fn zero_variance_series() {
        let s = Stats::describe(&[7.5, 7.5, 7.5]).unwrap();
        assert!(s.std_dev.abs() < f64::EPSILON);
        assert!((s.mean - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            Stats::describe(&[]),
            Err(SparkError::EmptyData)
        ));
    }
}
