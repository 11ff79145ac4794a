use approx::assert_relative_eq;
use bidir_bar_chart::api::{ChartConfig, build_chart_layout, render_chart};
use bidir_bar_chart::core::{DataPoint, EstimatedTextMeasurer, Viewport};
use bidir_bar_chart::render::{CanvasLayerKind, LineStrokeStyle, NullRenderer, Renderer};
use bidir_bar_chart::ChartError;

fn points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(120.0, 80.0).expect("p0"),
        DataPoint::new(150.0, 90.0).expect("p1"),
        DataPoint::new(80.0, 80.0).expect("p2"),
    ]
}

fn unpadded() -> ChartConfig {
    ChartConfig::default().with_padding(0.0)
}

#[test]
fn frame_has_background_ruler_and_bar_layers_in_order() {
    let frame = render_chart(
        &points(),
        &unpadded(),
        Viewport::new(600, 400),
        &EstimatedTextMeasurer::default(),
    )
    .expect("render");

    let kinds: Vec<CanvasLayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CanvasLayerKind::Background,
            CanvasLayerKind::Ruler,
            CanvasLayerKind::Bars
        ]
    );

    let ruler = frame.layer(CanvasLayerKind::Ruler).expect("ruler layer");
    assert_eq!(ruler.lines.len(), 5);
    assert_eq!(ruler.texts.len(), 5);
    assert!(ruler.clip.is_none());

    let bars = frame.layer(CanvasLayerKind::Bars).expect("bar layer");
    assert_eq!(bars.rects.len(), 3);
    assert_eq!(bars.texts.len(), 6);
    assert!(bars.clip.is_some());

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("frame validates");
}

#[test]
fn ruler_lines_are_dashed_across_the_full_width() {
    let frame = render_chart(
        &points(),
        &unpadded(),
        Viewport::new(600, 400),
        &EstimatedTextMeasurer::default(),
    )
    .expect("render");
    let ruler = frame.layer(CanvasLayerKind::Ruler).expect("ruler layer");

    let ys: Vec<f64> = ruler.lines.iter().map(|line| line.y1).collect();
    for (actual, expected) in ys.iter().zip([0.0, 100.0, 200.0, 300.0, 400.0]) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-9);
    }
    for line in &ruler.lines {
        assert_eq!(line.x1, 28.0);
        assert_eq!(line.x2, 600.0);
        assert_eq!(line.y1, line.y2);
        assert_eq!(line.stroke_width, 1.5);
        assert_eq!(
            line.stroke_style,
            LineStrokeStyle::Dashed {
                dash_px: 1.5,
                gap_px: 20.0
            }
        );
    }
}

#[test]
fn bars_share_the_ruler_scale() {
    let layout = build_chart_layout(
        &points(),
        &unpadded(),
        Viewport::new(600, 400),
        0.0,
        &EstimatedTextMeasurer::default(),
    )
    .expect("layout");

    let first = &layout.bars[0];
    assert_relative_eq!(first.rect.y, layout.ruler[2].y, epsilon = 1e-9);
    assert_relative_eq!(first.rect.y + first.rect.height, layout.ruler[3].y, epsilon = 1e-9);
    assert_eq!(first.slot_x, 28.0);
    assert_eq!(layout.bars[1].slot_x, 74.0);

    let flat = &layout.bars[2];
    assert_eq!(flat.rect.height, 0.0);
    assert_relative_eq!(flat.high_label.bottom(), flat.low_label.y, epsilon = 1e-9);
}

#[test]
fn padding_offsets_all_geometry() {
    let config = ChartConfig::default();
    let layout = build_chart_layout(
        &points(),
        &config,
        Viewport::new(648, 448),
        0.0,
        &EstimatedTextMeasurer::default(),
    )
    .expect("layout");

    assert_eq!(layout.area.height, 400.0);
    assert_relative_eq!(layout.ruler[0].y, 24.0);
    assert_relative_eq!(layout.ruler[4].y, 424.0, epsilon = 1e-9);
    assert_relative_eq!(layout.bars[0].rect.y, 224.0, epsilon = 1e-9);
    assert_eq!(layout.ruler[0].line_end_x, 624.0);
    assert_eq!(layout.strip.clip.x, 48.0);
}

#[test]
fn identical_inputs_render_identical_frames() {
    let measurer = EstimatedTextMeasurer::default();
    let viewport = Viewport::new(550, 300);
    let first = render_chart(&points(), &ChartConfig::default(), viewport, &measurer)
        .expect("first");
    let second = render_chart(&points(), &ChartConfig::default(), viewport, &measurer)
        .expect("second");
    assert_eq!(first, second);
}

#[test]
fn empty_data_still_draws_the_ruler() {
    let frame = render_chart(
        &[],
        &ChartConfig::default(),
        Viewport::new(550, 300),
        &EstimatedTextMeasurer::default(),
    )
    .expect("render");
    assert_eq!(frame.line_count(), 5);
    assert_eq!(frame.layer(CanvasLayerKind::Bars).map(|layer| layer.rects.len()), Some(0));
}

#[test]
fn invalid_point_rejects_the_whole_render() {
    let mut data = points();
    data.push(DataPoint {
        high: 50.0,
        low: 60.0,
    });
    let err = render_chart(
        &data,
        &ChartConfig::default(),
        Viewport::new(550, 300),
        &EstimatedTextMeasurer::default(),
    )
    .expect_err("must reject");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn invalid_config_rejects_render() {
    let err = render_chart(
        &points(),
        &ChartConfig::default().with_line_count(1),
        Viewport::new(550, 300),
        &EstimatedTextMeasurer::default(),
    )
    .expect_err("must reject");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn viewport_smaller_than_padding_is_rejected() {
    let err = render_chart(
        &points(),
        &ChartConfig::default(),
        Viewport::new(40, 40),
        &EstimatedTextMeasurer::default(),
    )
    .expect_err("must reject");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn text_primitives_sit_at_label_box_corners() {
    let config = unpadded();
    let measurer = EstimatedTextMeasurer::default();
    let viewport = Viewport::new(600, 400);
    let layout = build_chart_layout(&points(), &config, viewport, 0.0, &measurer).expect("layout");
    let frame = render_chart(&points(), &config, viewport, &measurer).expect("render");

    let ruler = frame.layer(CanvasLayerKind::Ruler).expect("ruler layer");
    for (text, line) in ruler.texts.iter().zip(&layout.ruler) {
        assert_eq!(text.text, line.label.text);
        assert_eq!((text.x, text.y), (line.label.x, line.label.y));
        assert!(!text.bold);
    }

    let bars = frame.layer(CanvasLayerKind::Bars).expect("bar layer");
    let labels = layout
        .bars
        .iter()
        .flat_map(|bar| [&bar.high_label, &bar.low_label]);
    for (text, label) in bars.texts.iter().zip(labels) {
        assert_eq!((text.x, text.y), (label.x, label.y));
        assert!(text.bold);
    }
}
