mod chart_config;
mod chart_layout;
mod engine;
mod render_frame_builder;
mod snapshot;

pub use chart_config::{ChartColors, ChartConfig};
pub use chart_layout::{
    BarStrip, ChartLayout, ContentArea, build_chart_layout, strip_content_width,
};
pub use engine::BarChartEngine;
pub use render_frame_builder::build_render_frame;
pub use snapshot::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1};

use crate::core::{DataPoint, TextMeasurer, Viewport};
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Pure render entry point: data, config and available size in, draw
/// primitives out. The bar strip is drawn unscrolled.
pub fn render_chart<M>(
    points: &[DataPoint],
    config: &ChartConfig,
    viewport: Viewport,
    measurer: &M,
) -> ChartResult<RenderFrame>
where
    M: TextMeasurer + ?Sized,
{
    let layout = build_chart_layout(points, config, viewport, 0.0, measurer)?;
    Ok(build_render_frame(&layout, config))
}
