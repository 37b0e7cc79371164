//! Integration tests: the public library surface end to end.

use sparkline::{
    Canvas, ConfigError, Scheme, SparkError, Stats, TickStyle, scale_data, sparkline,
};

fn canvas(data: &[f64], name: &str, height: usize) -> Canvas {
    let style = TickStyle::from_name(name, height).unwrap();
    scale_data(data, &style).unwrap()
}

#[test]
fn one_shot_default_ramp() {
    let out = sparkline(&[10.0, 20.0, 30.0, 40.0, 50.0], "default").unwrap();
    assert_eq!(out, "▁▃▅▆█");
}

#[test]
fn one_shot_grid_styles_join_rows_with_newlines() {
    let out = sparkline(&[0.0, 1.0], "multiline").unwrap();
    assert_eq!(out.lines().count(), 4);
}

#[test]
fn every_style_handles_the_reference_series() {
    let data = [10.0, 20.0, 30.0, 40.0, 50.0];
    for name in sparkline::STYLE_NAMES {
        let c = canvas(&data, name, 3);
        assert!(c.cols() > 0, "style {name} produced no columns");
    }
}

#[test]
fn grid_styles_row_count_is_height_not_input_length() {
    for name in ["line", "multiline", "braille-line"] {
        for h in 1..5 {
            for n in [1usize, 2, 7, 40] {
                #[allow(clippy::cast_precision_loss)]
                let data: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).sin()).collect();
                assert_eq!(canvas(&data, name, h).rows(), h, "style {name}");
            }
        }
    }
}

#[test]
fn single_row_styles_length_equals_input_length() {
    let data = [4.0, -2.0, 0.0, 7.5, 7.5, -2.0];
    for name in ["default", "block", "ascii", "numeric", "braille", "arrows"] {
        let c = canvas(&data, name, 1);
        assert_eq!(c.rows(), 1, "style {name}");
        assert_eq!(c.cols(), data.len(), "style {name}");
    }
}

#[test]
fn zero_range_input_renders_without_error() {
    for name in sparkline::STYLE_NAMES {
        let c = canvas(&[5.0, 5.0, 5.0], name, 2);
        assert!(!c.to_lines().is_empty(), "style {name}");
    }
}

#[test]
fn unknown_style_fails_before_rendering() {
    // even an empty series reports the configuration fault, not EmptyData
    let err = sparkline(&[], "spiral").unwrap_err();
    assert!(matches!(
        err,
        SparkError::Config(ConfigError::UnknownStyle(ref s)) if s == "spiral"
    ));
}

#[test]
fn unknown_scheme_fails_before_rendering() {
    let err = Scheme::from_name("sepia").unwrap_err();
    assert!(matches!(err, ConfigError::UnknownScheme(ref s) if s == "sepia"));
}

#[test]
fn empty_data_is_invalid_input() {
    assert!(matches!(
        sparkline(&[], "default"),
        Err(SparkError::EmptyData)
    ));
}

#[test]
fn gradient_paints_min_red_and_max_green() {
    let c = canvas(&[10.0, 20.0, 30.0, 40.0, 50.0], "default", 1);
    let line = c.to_colored_lines(&Scheme::Gradient).remove(0);
    assert!(line.starts_with("\x1b[38;2;255;0;0m"), "min sample not red");
    assert!(line.contains("\x1b[38;2;0;255;0m"), "max sample not green");
    assert!(line.ends_with("\x1b[0m"), "line missing reset");
}

#[test]
fn stats_block_formats_two_decimals() {
    let s = Stats::describe(&[10.0, 20.0, 30.0, 40.0, 50.0]).unwrap();
    assert_eq!(
        s.to_string(),
        "Minimum: 10.00\nMaximum: 50.00\nMean: 30.00\nStandard Deviation: 14.14"
    );
}
