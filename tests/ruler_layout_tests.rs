use approx::assert_relative_eq;
use bidir_bar_chart::{ChartError, ChartResult};
use bidir_bar_chart::core::{
    LabelFormat, RulerLayout, TextExtent, TextMeasurer, TextStyle, ValueScale,
    project_ruler, ruler_line_value,
};

struct FixedMeasurer;

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, text: &str, _style: TextStyle) -> ChartResult<TextExtent> {
        Ok(TextExtent {
            width: text.len() as f64 * 8.0,
            height: 16.0,
        })
    }
}

fn layout(line_count: usize, label_format: LabelFormat) -> RulerLayout {
    RulerLayout {
        line_count,
        label_format,
        label_style: TextStyle::regular(14.0),
        label_right_x: 20.0,
        line_start_x: 28.0,
        line_end_x: 500.0,
    }
}

#[test]
fn ruler_matches_reference_scenario() {
    let scale = ValueScale::new(40.0, 200.0, 400.0).expect("scale");
    let lines = project_ruler(scale, &layout(5, LabelFormat::for_ruler(true)), &FixedMeasurer)
        .expect("ruler");

    let values: Vec<f64> = lines.iter().map(|line| line.value).collect();
    let ys: Vec<f64> = lines.iter().map(|line| line.y).collect();
    assert_eq!(values, vec![200.0, 160.0, 120.0, 80.0, 40.0]);
    for (actual, expected) in ys.iter().zip([0.0, 100.0, 200.0, 300.0, 400.0]) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-9);
    }

    let labels: Vec<&str> = lines.iter().map(|line| line.label.text.as_str()).collect();
    assert_eq!(labels, vec!["200.0", "160.0", "120.0", "80.0", "40.0"]);
}

#[test]
fn labels_are_right_aligned_and_vertically_centered() {
    let scale = ValueScale::new(40.0, 200.0, 400.0).expect("scale");
    let lines = project_ruler(scale, &layout(5, LabelFormat::for_ruler(false)), &FixedMeasurer)
        .expect("ruler");

    let second = &lines[1];
    assert_eq!(second.label.text, "160");
    assert_relative_eq!(second.label.right(), 20.0);
    assert_relative_eq!(second.label.x, 20.0 - 24.0);
    assert_relative_eq!(second.label.y, 100.0 - 8.0);
    assert_eq!(second.line_start_x, 28.0);
    assert_eq!(second.line_end_x, 500.0);
}

#[test]
fn integer_labels_truncate_interpolated_values() {
    let scale = ValueScale::new(0.0, 100.0, 300.0).expect("scale");
    let lines = project_ruler(scale, &layout(4, LabelFormat::for_ruler(false)), &FixedMeasurer)
        .expect("ruler");

    let labels: Vec<&str> = lines.iter().map(|line| line.label.text.as_str()).collect();
    assert_eq!(labels, vec!["100", "66", "33", "0"]);
}

#[test]
fn ruler_emits_exactly_line_count_lines() {
    let scale = ValueScale::new(-10.0, 10.0, 250.0).expect("scale");
    for line_count in 2..12 {
        let lines = project_ruler(
            scale,
            &layout(line_count, LabelFormat::for_ruler(true)),
            &FixedMeasurer,
        )
        .expect("ruler");
        assert_eq!(lines.len(), line_count);
        assert_eq!(lines.first().map(|line| line.y), Some(0.0));
    }
}

#[test]
fn fewer_than_two_lines_is_config_error() {
    let scale = ValueScale::new(40.0, 200.0, 400.0).expect("scale");
    for line_count in [0, 1] {
        let err = project_ruler(
            scale,
            &layout(line_count, LabelFormat::for_ruler(true)),
            &FixedMeasurer,
        )
        .expect_err("must reject");
        assert!(matches!(err, ChartError::InvalidConfig(_)));
    }
    assert!(ruler_line_value(scale, 1, 0).is_err());
}
