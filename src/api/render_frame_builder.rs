use crate::core::LabelBox;
use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame,
    TextPrimitive,
};

use super::{ChartConfig, ChartLayout};

/// Materializes a resolved layout into draw primitives.
///
/// Layer order: background fill, ruler (lines then labels), bar strip clipped
/// to its window. Ruler lines whose start lies right of their end (viewport
/// narrower than the label column) are dropped; their labels are kept.
#[must_use]
pub fn build_render_frame(layout: &ChartLayout, config: &ChartConfig) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport);

    frame.push_rect(
        CanvasLayerKind::Background,
        RectPrimitive::new(
            0.0,
            0.0,
            f64::from(layout.viewport.width),
            f64::from(layout.viewport.height),
            config.colors.background,
        ),
    );

    let dashes = LineStrokeStyle::Dashed {
        dash_px: config.dot_size,
        gap_px: config.dash_gap,
    };
    for line in &layout.ruler {
        if line.line_end_x > line.line_start_x {
            frame.push_line(
                CanvasLayerKind::Ruler,
                LinePrimitive::new(
                    line.line_start_x,
                    line.y,
                    line.line_end_x,
                    line.y,
                    config.dot_size,
                    config.colors.ruler_line,
                )
                .with_stroke_style(dashes),
            );
        }
        frame.push_text(
            CanvasLayerKind::Ruler,
            label_text(
                &line.label,
                config.ruler_label_font_size_px,
                false,
                config.colors.ruler_label,
            ),
        );
    }

    if let Some(layer) = frame.layer_mut(CanvasLayerKind::Bars) {
        layer.clip = Some(layout.strip.clip);
    }
    for bar in &layout.bars {
        frame.push_rect(
            CanvasLayerKind::Bars,
            RectPrimitive::new(
                bar.rect.x,
                bar.rect.y,
                bar.rect.width,
                bar.rect.height,
                config.colors.bar,
            )
            .with_corner_radius(bar.corner_radius),
        );
        for label in [&bar.high_label, &bar.low_label] {
            frame.push_text(
                CanvasLayerKind::Bars,
                label_text(
                    label,
                    config.bar_label_font_size_px,
                    true,
                    config.colors.bar_label,
                ),
            );
        }
    }

    frame
}

fn label_text(label: &LabelBox, font_size_px: f64, bold: bool, color: Color) -> TextPrimitive {
    TextPrimitive::new(
        label.text.clone(),
        label.x,
        label.y,
        font_size_px,
        color,
    )
    .with_bold(bold)
}
