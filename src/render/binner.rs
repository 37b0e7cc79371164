//! Width fitting: average neighbouring samples down to a column budget.

/// Index-binned mean: bucket `k` covers `[k*n/target, (k+1)*n/target)`.
///
/// Returns the input unchanged when it already fits (or when `target` is
/// zero, which would make no sense as a budget).
#[must_use]
pub fn fit_to_width(data: &[f64], target: usize) -> Vec<f64> {
    let n = data.len();
    if target == 0 || n <= target {
        return data.to_vec();
    }

    (0..target)
        .map(|k| {
            let start = k * n / target;
            let end = ((k + 1) * n / target).max(start + 1);
            let bucket = &data[start..end];
            #[allow(clippy::cast_precision_loss)]
            let len = bucket.len() as f64;
            bucket.iter().sum::<f64>() / len
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_series_pass_through() {
        let data = [1.0, 2.0, 3.0];
        assert_eq!(fit_to_width(&data, 3), data.to_vec());
        assert_eq!(fit_to_width(&data, 10), data.to_vec());
        assert_eq!(fit_to_width(&data, 0), data.to_vec());
    }

    #[test]
    fn even_split_averages_buckets() {
        assert_eq!(fit_to_width(&[1.0, 2.0, 3.0, 4.0], 2), vec![1.5, 3.5]);
    }

    #[test]
    fn uneven_split_keeps_target_length() {
        let data: Vec<f64> = (0..7).map(f64::from).collect();
        let out = fit_to_width(&data, 3);
        assert_eq!(out.len(), 3);
        // buckets cover every sample exactly once, so the overall mean survives
        let mean_in: f64 = data.iter().sum::<f64>() / 7.0;
        assert!((out.iter().sum::<f64>() / 3.0 - mean_in).abs() < 1.0);
    }
}
