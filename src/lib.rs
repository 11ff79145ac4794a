//! bidir-bar-chart: bidirectional (high/low) bar chart layout and rendering.
//!
//! Layout is a pure function of data points, [`ChartConfig`] and the available
//! viewport; it produces a backend-agnostic [`render::RenderFrame`] that any
//! [`render::Renderer`] can draw.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarChartEngine, ChartConfig, render_chart};
pub use error::{ChartError, ChartResult};
