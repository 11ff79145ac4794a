use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LabelBox, LabelFormat, TextMeasurer, TextStyle, ValueScale};
use crate::error::{ChartError, ChartResult};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Sizing and label inputs for bar projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub bar_width: f64,
    pub corner_radius: f64,
    pub label_format: LabelFormat,
    pub label_style: TextStyle,
}

/// Deterministic high/low bar rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One projected bar with its labels.
///
/// The high label sits on top of the rectangle, the low label hangs below
/// it. Labels wider than the slot overflow it evenly on both sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub slot_x: f64,
    pub rect: BarRect,
    pub corner_radius: f64,
    pub high_label: LabelBox,
    pub low_label: LabelBox,
}

/// Offset that centers an element of `element_width` inside a slot.
///
/// Negative when the element is wider than the slot.
#[must_use]
pub fn horizontal_center_offset(slot_width: f64, element_width: f64) -> f64 {
    (slot_width - element_width) / 2.0
}

/// Maps one point into a bar rectangle whose slot starts at `slot_x`.
pub fn project_bar_rect(
    point: DataPoint,
    slot_x: f64,
    bar_width: f64,
    scale: ValueScale,
) -> ChartResult<BarRect> {
    point.validate()?;
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "bar width must be finite and > 0".to_owned(),
        ));
    }

    let y = scale.value_to_pixel(point.high)?;
    let height = scale.span_to_pixels(point.span())?;
    Ok(BarRect {
        x: slot_x + horizontal_center_offset(bar_width, bar_width),
        y,
        width: bar_width,
        height,
    })
}

/// Projects one bar including its measured high/low labels.
pub fn project_bar<M>(
    index: usize,
    point: DataPoint,
    slot_x: f64,
    scale: ValueScale,
    layout: &BarLayout,
    measurer: &M,
) -> ChartResult<BarGeometry>
where
    M: TextMeasurer + ?Sized,
{
    let rect = project_bar_rect(point, slot_x, layout.bar_width, scale)?;
    place_labels(index, point, slot_x, rect, layout, measurer)
}

/// Projects a contiguous run of bars laid out left to right.
///
/// Slot `i` starts at `origin_x + i * (bar_width + spacing)`. The first point
/// failing validation rejects the whole run.
pub fn project_bars<M>(
    points: &[DataPoint],
    first_index: usize,
    origin_x: f64,
    spacing: f64,
    scale: ValueScale,
    layout: &BarLayout,
    measurer: &M,
) -> ChartResult<Vec<BarGeometry>>
where
    M: TextMeasurer + ?Sized,
{
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(ChartError::InvalidConfig(
            "bar spacing must be finite and >= 0".to_owned(),
        ));
    }

    let pitch = layout.bar_width + spacing;
    let rects = project_rects(points, first_index, origin_x, pitch, scale, layout.bar_width)?;

    let mut bars = Vec::with_capacity(points.len());
    for (offset, (point, rect)) in points.iter().zip(rects).enumerate() {
        let index = first_index + offset;
        let slot_x = slot_origin(origin_x, pitch, index);
        bars.push(place_labels(index, *point, slot_x, rect, layout, measurer)?);
    }
    Ok(bars)
}

#[must_use]
pub(crate) fn slot_origin(origin_x: f64, pitch: f64, index: usize) -> f64 {
    origin_x + index as f64 * pitch
}

#[cfg(not(feature = "parallel-projection"))]
fn project_rects(
    points: &[DataPoint],
    first_index: usize,
    origin_x: f64,
    pitch: f64,
    scale: ValueScale,
    bar_width: f64,
) -> ChartResult<Vec<BarRect>> {
    points
        .iter()
        .enumerate()
        .map(|(offset, point)| {
            let slot_x = slot_origin(origin_x, pitch, first_index + offset);
            project_bar_rect(*point, slot_x, bar_width, scale)
        })
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_rects(
    points: &[DataPoint],
    first_index: usize,
    origin_x: f64,
    pitch: f64,
    scale: ValueScale,
    bar_width: f64,
) -> ChartResult<Vec<BarRect>> {
    points
        .par_iter()
        .enumerate()
        .map(|(offset, point)| {
            let slot_x = slot_origin(origin_x, pitch, first_index + offset);
            project_bar_rect(*point, slot_x, bar_width, scale)
        })
        .collect()
}

fn place_labels<M>(
    index: usize,
    point: DataPoint,
    slot_x: f64,
    rect: BarRect,
    layout: &BarLayout,
    measurer: &M,
) -> ChartResult<BarGeometry>
where
    M: TextMeasurer + ?Sized,
{
    let high_text = layout.label_format.format(point.high);
    let high_extent = measurer.measure(&high_text, layout.label_style)?.validate()?;
    let high_label = LabelBox {
        text: high_text,
        x: slot_x + horizontal_center_offset(layout.bar_width, high_extent.width),
        y: rect.y - high_extent.height,
        width: high_extent.width,
        height: high_extent.height,
    };

    let low_text = layout.label_format.format(point.low);
    let low_extent = measurer.measure(&low_text, layout.label_style)?.validate()?;
    let low_label = LabelBox {
        text: low_text,
        x: slot_x + horizontal_center_offset(layout.bar_width, low_extent.width),
        y: rect.y + rect.height,
        width: low_extent.width,
        height: low_extent.height,
    };

    Ok(BarGeometry {
        index,
        slot_x,
        rect,
        corner_radius: layout.corner_radius,
        high_label,
        low_label,
    })
}
