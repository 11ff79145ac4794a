use bidir_bar_chart::api::{ChartConfig, render_chart};
use bidir_bar_chart::core::{
    DataPoint, EstimatedTextMeasurer, LabelFormat, RulerLayout, TextStyle, ValueScale, Viewport,
    project_bar_rect, project_ruler,
};
use proptest::prelude::*;

fn ruler_layout(line_count: usize) -> RulerLayout {
    RulerLayout {
        line_count,
        label_format: LabelFormat::for_ruler(true),
        label_style: TextStyle::regular(14.0),
        label_right_x: 20.0,
        line_start_x: 28.0,
        line_end_x: 400.0,
    }
}

proptest! {
    #[test]
    fn scale_is_monotonically_decreasing(
        min in -1_000.0f64..1_000.0,
        span in 0.01f64..1_000.0,
        height in 1.0f64..2_000.0,
        a in 0.0f64..0.9,
        delta in 0.01f64..0.1
    ) {
        let scale = ValueScale::new(min, min + span, height).expect("scale");
        let lower = min + span * a;
        let higher = min + span * (a + delta);

        let lower_px = scale.value_to_pixel(lower).expect("lower");
        let higher_px = scale.value_to_pixel(higher).expect("higher");
        prop_assert!(higher_px < lower_px);
    }

    #[test]
    fn scale_endpoints_hit_pixel_bounds(
        min in -1_000.0f64..1_000.0,
        span in 0.01f64..1_000.0,
        height in 1.0f64..2_000.0
    ) {
        let max = min + span;
        let scale = ValueScale::new(min, max, height).expect("scale");
        prop_assert_eq!(scale.value_to_pixel(max).expect("max"), 0.0);
        let bottom = scale.value_to_pixel(min).expect("min");
        prop_assert!((bottom - height).abs() <= 1e-6 * height.max(1.0));
    }

    #[test]
    fn rect_height_is_non_negative_and_zero_only_for_flat_points(
        low in -1_000.0f64..1_000.0,
        span in prop_oneof![Just(0.0f64), 0.001f64..1_000.0],
        height in 1.0f64..2_000.0
    ) {
        let scale = ValueScale::new(-2_000.0, 2_000.0, height).expect("scale");
        let point = DataPoint::new(low + span, low).expect("point");
        let rect = project_bar_rect(point, 0.0, 30.0, scale).expect("rect");

        prop_assert!(rect.height >= 0.0);
        prop_assert_eq!(rect.height == 0.0, point.high == point.low);
    }

    #[test]
    fn ruler_values_interpolate_between_domain_bounds(
        min in -500.0f64..500.0,
        span in 0.5f64..500.0,
        line_count in 2usize..40
    ) {
        let max = min + span;
        let scale = ValueScale::new(min, max, 480.0).expect("scale");
        let measurer = EstimatedTextMeasurer::default();
        let lines = project_ruler(scale, &ruler_layout(line_count), &measurer).expect("ruler");

        prop_assert_eq!(lines.len(), line_count);
        for (index, line) in lines.iter().enumerate() {
            let expected = max - index as f64 * (max - min) / (line_count - 1) as f64;
            prop_assert_eq!(line.value, expected);
            let expected_y = index as f64 * 480.0 / (line_count - 1) as f64;
            prop_assert!((line.y - expected_y).abs() <= 1e-6);
        }
    }

    #[test]
    fn rendering_is_deterministic(
        bounds in prop::collection::vec((40.0f64..200.0, 0.0f64..60.0), 0..32),
        width in 200u32..1_200,
        height in 120u32..800
    ) {
        let points: Vec<DataPoint> = bounds
            .iter()
            .map(|&(high, drop)| DataPoint::new(high, high - drop).expect("point"))
            .collect();
        let config = ChartConfig::default();
        let measurer = EstimatedTextMeasurer::default();
        let viewport = Viewport::new(width, height);

        let first = render_chart(&points, &config, viewport, &measurer).expect("first");
        let second = render_chart(&points, &config, viewport, &measurer).expect("second");
        prop_assert_eq!(first, second);
    }
}
