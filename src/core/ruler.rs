use serde::{Deserialize, Serialize};

use crate::core::{LabelBox, LabelFormat, TextMeasurer, TextStyle, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Horizontal placement inputs for ruler projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerLayout {
    pub line_count: usize,
    pub label_format: LabelFormat,
    pub label_style: TextStyle,
    /// X coordinate labels are right-aligned against.
    pub label_right_x: f64,
    pub line_start_x: f64,
    pub line_end_x: f64,
}

/// One projected guide line with its value label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerLine {
    pub index: usize,
    pub value: f64,
    pub y: f64,
    pub line_start_x: f64,
    pub line_end_x: f64,
    pub label: LabelBox,
}

/// Value carried by ruler line `index`, interpolated from max down to min.
///
/// Fails when fewer than two lines are requested.
pub fn ruler_line_value(scale: ValueScale, line_count: usize, index: usize) -> ChartResult<f64> {
    if line_count < 2 {
        return Err(ChartError::InvalidConfig(format!(
            "line count must be >= 2, got {line_count}"
        )));
    }
    let (value_min, value_max) = scale.domain();
    let gap_count = (line_count - 1) as f64;
    Ok(value_max - index as f64 * (value_max - value_min) / gap_count)
}

/// Projects `line_count` evenly spaced guide lines.
///
/// Line positions go through `scale`, so they agree with bar geometry built
/// from the same scale.
pub fn project_ruler<M>(
    scale: ValueScale,
    layout: &RulerLayout,
    measurer: &M,
) -> ChartResult<Vec<RulerLine>>
where
    M: TextMeasurer + ?Sized,
{
    if layout.line_count < 2 {
        return Err(ChartError::InvalidConfig(format!(
            "line count must be >= 2, got {}",
            layout.line_count
        )));
    }

    let mut lines = Vec::with_capacity(layout.line_count);
    for index in 0..layout.line_count {
        let value = ruler_line_value(scale, layout.line_count, index)?;
        let y = scale.value_to_pixel(value)?;

        let text = layout.label_format.format(value);
        let extent = measurer.measure(&text, layout.label_style)?.validate()?;
        let label = LabelBox {
            text,
            x: layout.label_right_x - extent.width,
            y: y - extent.height / 2.0,
            width: extent.width,
            height: extent.height,
        };

        lines.push(RulerLine {
            index,
            value,
            y,
            line_start_x: layout.line_start_x,
            line_end_x: layout.line_end_x,
            label,
        });
    }

    Ok(lines)
}
