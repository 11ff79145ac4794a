use tracing::{debug, trace, warn};

use crate::core::{DataPoint, EstimatedTextMeasurer, TextMeasurer, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::chart_layout::{BarStrip, ContentArea, strip_content_width};
use super::{ChartConfig, ChartLayout, ChartSnapshot, build_chart_layout, build_render_frame};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by host applications.
///
/// `BarChartEngine` owns the data points, config, viewport and horizontal
/// scroll offset, and hands freshly built frames to its renderer. Every
/// frame is rebuilt from scratch; no geometry is cached between passes.
pub struct BarChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    viewport: Viewport,
    points: Vec<DataPoint>,
    scroll_offset_px: f64,
    measurer: Box<dyn TextMeasurer>,
}

impl<R: Renderer> BarChartEngine<R> {
    /// Creates an engine using the deterministic estimated text measurer.
    pub fn new(renderer: R, config: ChartConfig, viewport: Viewport) -> ChartResult<Self> {
        config.validate()?;
        viewport.validate()?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            line_count = config.line_count,
            "init bar chart engine"
        );
        Ok(Self {
            renderer,
            config,
            viewport,
            points: Vec::new(),
            scroll_offset_px: 0.0,
            measurer: Box::new(EstimatedTextMeasurer::default()),
        })
    }

    /// Replaces the text measurer used for label placement.
    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected chart config");
            return Err(err);
        }
        debug!(line_count = config.line_count, "set chart config");
        self.config = config;
        self.clamp_scroll();
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if let Err(err) = viewport.validate() {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "rejected viewport"
            );
            return Err(err);
        }
        trace!(
            width = viewport.width,
            height = viewport.height,
            "set viewport"
        );
        self.viewport = viewport;
        self.clamp_scroll();
        Ok(())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Replaces the full data set. Rejected sets leave the previous data intact.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        for point in &points {
            if let Err(err) = point.validate() {
                warn!(error = %err, "rejected data set");
                return Err(err);
            }
        }
        debug!(count = points.len(), "set data");
        self.points = points;
        self.clamp_scroll();
        Ok(())
    }

    pub fn append_data_point(&mut self, point: DataPoint) -> ChartResult<()> {
        if let Err(err) = point.validate() {
            warn!(error = %err, "rejected data point");
            return Err(err);
        }
        self.points.push(point);
        trace!(count = self.points.len(), "append data point");
        Ok(())
    }

    #[must_use]
    pub fn scroll_offset_px(&self) -> f64 {
        self.scroll_offset_px
    }

    /// Total scrollable width of the bar strip.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        strip_content_width(&self.config, self.points.len())
    }

    /// Largest valid scroll offset for the current viewport and data.
    ///
    /// Uses the same strip window as [`build_chart_layout`]; a viewport too
    /// small to hold the padding has nothing to scroll.
    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        ContentArea::from_viewport(self.viewport, self.config.padding)
            .and_then(|area| {
                BarStrip::new(&self.config, area, self.viewport, self.points.len(), 0.0)
            })
            .map_or(0.0, |strip| strip.max_scroll_offset())
    }

    /// Scrolls to an absolute offset, clamped to `[0, max_scroll_offset]`.
    pub fn scroll_to(&mut self, offset_px: f64) -> f64 {
        if !offset_px.is_finite() {
            warn!("ignored non-finite scroll offset");
            return self.scroll_offset_px;
        }
        self.scroll_offset_px = offset_px.clamp(0.0, self.max_scroll_offset());
        trace!(offset = self.scroll_offset_px, "scroll bar strip");
        self.scroll_offset_px
    }

    /// Scrolls by a relative delta; positive moves toward later bars.
    pub fn scroll_by(&mut self, delta_px: f64) -> f64 {
        self.scroll_to(self.scroll_offset_px + delta_px)
    }

    pub fn build_layout(&self) -> ChartResult<ChartLayout> {
        build_chart_layout(
            &self.points,
            &self.config,
            self.viewport,
            self.scroll_offset_px,
            self.measurer.as_ref(),
        )
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let layout = self.build_layout()?;
        let frame = build_render_frame(&layout, &self.config);
        trace!(
            bars = layout.bars.len(),
            lines = frame.line_count(),
            texts = frame.text_count(),
            "built render frame"
        );
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        Ok(self.build_layout()?.into())
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn clamp_scroll(&mut self) {
        let max = self.max_scroll_offset();
        if self.scroll_offset_px > max {
            self.scroll_offset_px = max;
        }
    }
}
