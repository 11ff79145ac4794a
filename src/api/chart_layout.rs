use serde::{Deserialize, Serialize};

use crate::core::{
    BarGeometry, BarLayout, DataPoint, RulerLayout, RulerLine, TextMeasurer, ValueScale, Viewport,
    project_bars, project_ruler,
};
use crate::error::{ChartError, ChartResult};
use crate::render::ClipRect;

use super::ChartConfig;

/// Inner drawing area left after outer padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContentArea {
    pub fn from_viewport(viewport: Viewport, padding: f64) -> ChartResult<Self> {
        viewport.validate()?;
        let width = f64::from(viewport.width) - 2.0 * padding;
        let height = f64::from(viewport.height) - 2.0 * padding;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            x: padding,
            y: padding,
            width,
            height,
        })
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }
}

/// Horizontal geometry of the scrollable bar strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStrip {
    /// Visible strip window (clip) in viewport pixels.
    pub clip: ClipRect,
    /// X of slot 0 after scrolling.
    pub origin_x: f64,
    /// Distance between consecutive slot origins.
    pub pitch: f64,
    /// Full scrollable content width including strip padding.
    pub content_width: f64,
    pub scroll_offset_px: f64,
}

impl BarStrip {
    pub fn new(
        config: &ChartConfig,
        area: ContentArea,
        viewport: Viewport,
        bar_count: usize,
        scroll_offset_px: f64,
    ) -> ChartResult<Self> {
        if !scroll_offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "scroll offset must be finite".to_owned(),
            ));
        }
        let strip_x = area.x + config.dot_line_start_size + config.bar_strip_start_gap;
        let strip_width = (area.right() - strip_x).max(0.0);
        let clip = ClipRect::new(strip_x, 0.0, strip_width, f64::from(viewport.height));

        Ok(Self {
            clip,
            origin_x: strip_x + config.bar_strip_content_padding - scroll_offset_px,
            pitch: config.bar_width + config.bar_space,
            content_width: strip_content_width(config, bar_count),
            scroll_offset_px,
        })
    }

    /// Largest offset that still keeps the last bar inside the window.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_width - self.clip.width).max(0.0)
    }

    /// Index range `[first, last)` of slots intersecting the strip window,
    /// widened by one slot on each side so overflowing labels stay drawn.
    #[must_use]
    pub fn visible_range(&self, bar_width: f64, bar_count: usize) -> (usize, usize) {
        if bar_count == 0 || self.clip.width <= 0.0 {
            return (0, 0);
        }
        let before = (self.clip.x - self.origin_x - bar_width) / self.pitch;
        let after = (self.clip.right() - self.origin_x) / self.pitch;

        // one hidden slot of overscan on each side
        let first = before.floor().max(0.0);
        let last = (after.ceil() + 1.0).max(0.0);
        let first = (first as usize).min(bar_count);
        let last = (last as usize).min(bar_count);
        (first, last.max(first))
    }
}

/// Scrollable width of `bar_count` slots plus strip padding on both ends.
#[must_use]
pub fn strip_content_width(config: &ChartConfig, bar_count: usize) -> f64 {
    let padding = 2.0 * config.bar_strip_content_padding;
    if bar_count == 0 {
        return padding;
    }
    let count = bar_count as f64;
    padding + count * config.bar_width + (count - 1.0) * config.bar_space
}

/// Resolved geometry for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub area: ContentArea,
    pub scale: ValueScale,
    pub ruler: Vec<RulerLine>,
    pub strip: BarStrip,
    pub visible_range: (usize, usize),
    pub bars: Vec<BarGeometry>,
}

/// Computes ruler and bar geometry for one pass.
///
/// Every point is validated up front, visible or not: one invalid point
/// rejects the whole pass. Only bars near the strip window are projected.
pub fn build_chart_layout<M>(
    points: &[DataPoint],
    config: &ChartConfig,
    viewport: Viewport,
    scroll_offset_px: f64,
    measurer: &M,
) -> ChartResult<ChartLayout>
where
    M: TextMeasurer + ?Sized,
{
    config.validate()?;
    for (index, point) in points.iter().enumerate() {
        point
            .validate()
            .map_err(|err| ChartError::InvalidData(format!("data point {index}: {err}")))?;
    }

    let area = ContentArea::from_viewport(viewport, config.padding)?;
    let scale = ValueScale::new(config.label_value_min, config.label_value_max, area.height)?;

    let ruler_layout = RulerLayout {
        line_count: config.line_count,
        label_format: config.ruler_label_format(),
        label_style: config.ruler_label_style(),
        label_right_x: area.x + config.dot_line_start_size,
        line_start_x: area.x + config.dot_line_start_size + config.line_start_gap,
        line_end_x: area.right(),
    };
    let mut ruler = project_ruler(scale, &ruler_layout, measurer)?;
    for line in &mut ruler {
        line.y += area.y;
        line.label.y += area.y;
    }

    let strip = BarStrip::new(config, area, viewport, points.len(), scroll_offset_px)?;
    let visible_range = strip.visible_range(config.bar_width, points.len());
    let bar_layout = BarLayout {
        bar_width: config.bar_width,
        corner_radius: config.bar_corner_radius,
        label_format: config.bar_label_format(),
        label_style: config.bar_label_style(),
    };
    let (first, last) = visible_range;
    let mut bars = project_bars(
        &points[first..last],
        first,
        strip.origin_x,
        config.bar_space,
        scale,
        &bar_layout,
        measurer,
    )?;
    for bar in &mut bars {
        bar.rect.y += area.y;
        bar.high_label.y += area.y;
        bar.low_label.y += area.y;
    }

    Ok(ChartLayout {
        viewport,
        area,
        scale,
        ruler,
        strip,
        visible_range,
        bars,
    })
}
