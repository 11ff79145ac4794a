use approx::assert_relative_eq;
use bidir_bar_chart::ChartError;
use bidir_bar_chart::core::ValueScale;

#[test]
fn scale_uses_inverted_y_axis() {
    let scale = ValueScale::new(40.0, 200.0, 400.0).expect("valid scale");

    let top = scale.value_to_pixel(200.0).expect("top pixel");
    let bottom = scale.value_to_pixel(40.0).expect("bottom pixel");

    assert_eq!(top, 0.0);
    assert_relative_eq!(bottom, 400.0, epsilon = 1e-9);
}

#[test]
fn factor_is_height_over_domain_span() {
    let scale = ValueScale::new(40.0, 200.0, 400.0).expect("valid scale");
    assert_relative_eq!(scale.factor(), 2.5, epsilon = 1e-12);
    assert_relative_eq!(scale.span_to_pixels(40.0).expect("span"), 100.0, epsilon = 1e-9);
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = ValueScale::new(10.0, 110.0, 600.0).expect("valid scale");

    let original = 42.5;
    let px = scale.value_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");

    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn values_outside_domain_extrapolate() {
    let scale = ValueScale::new(0.0, 100.0, 200.0).expect("valid scale");
    assert_relative_eq!(scale.value_to_pixel(150.0).expect("above"), -100.0);
    assert_relative_eq!(scale.value_to_pixel(-50.0).expect("below"), 300.0);
}

#[test]
fn inverted_or_empty_domain_is_config_error() {
    let equal = ValueScale::new(50.0, 50.0, 400.0).expect_err("empty domain");
    assert!(matches!(equal, ChartError::InvalidConfig(_)));

    let inverted = ValueScale::new(200.0, 40.0, 400.0).expect_err("inverted domain");
    assert!(matches!(inverted, ChartError::InvalidConfig(_)));
}

#[test]
fn non_finite_inputs_are_rejected() {
    let err = ValueScale::new(f64::NAN, 1.0, 100.0).expect_err("nan domain");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ValueScale::new(0.0, 1.0, f64::INFINITY).expect_err("infinite height");
    assert!(matches!(err, ChartError::InvalidPlotHeight { .. }));

    let err = ValueScale::new(0.0, 1.0, -5.0).expect_err("negative height");
    assert!(matches!(err, ChartError::InvalidPlotHeight { height_px } if height_px == -5.0));

    let scale = ValueScale::new(0.0, 1.0, 100.0).expect("valid scale");
    assert!(scale.value_to_pixel(f64::NAN).is_err());
    assert!(scale.pixel_to_value(f64::INFINITY).is_err());
}
