use serde::{Deserialize, Serialize};

use crate::core::primitives::{ensure_non_negative, ensure_positive};
use crate::core::{LabelFormat, TextStyle};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Palette used by the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartColors {
    pub background: Color,
    pub bar: Color,
    pub ruler_line: Color,
    pub ruler_label: Color,
    pub bar_label: Color,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            bar: Color::CYAN,
            ruler_line: Color::BLACK,
            ruler_label: Color::BLACK,
            bar_label: Color::BLACK,
        }
    }
}

impl ChartColors {
    fn validate(self) -> ChartResult<()> {
        for (name, color) in [
            ("background", self.background),
            ("bar", self.bar),
            ("ruler_line", self.ruler_line),
            ("ruler_label", self.ruler_label),
            ("bar_label", self.bar_label),
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("color `{name}`: {err}")))?;
        }
        Ok(())
    }
}

/// Scale and appearance options for one chart.
///
/// Values are immutable once built: every `with_*` method consumes the config
/// and returns a modified copy. All sizes are pixels. Missing JSON fields fall
/// back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub line_count: usize,
    pub label_value_min: f64,
    pub label_value_max: f64,
    pub use_float_label: bool,
    pub bar_label_precision: u8,
    pub bar_width: f64,
    pub bar_corner_radius: f64,
    pub bar_space: f64,
    pub dot_line_start_size: f64,
    pub dot_size: f64,
    pub dash_gap: f64,
    pub line_start_gap: f64,
    pub bar_strip_start_gap: f64,
    pub bar_strip_content_padding: f64,
    pub padding: f64,
    pub ruler_label_font_size_px: f64,
    pub bar_label_font_size_px: f64,
    pub colors: ChartColors,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            line_count: 5,
            label_value_min: 40.0,
            label_value_max: 200.0,
            use_float_label: true,
            bar_label_precision: 0,
            bar_width: 30.0,
            bar_corner_radius: 24.0,
            bar_space: 16.0,
            dot_line_start_size: 20.0,
            dot_size: 1.5,
            dash_gap: 20.0,
            line_start_gap: 8.0,
            bar_strip_start_gap: 4.0,
            bar_strip_content_padding: 4.0,
            padding: 24.0,
            ruler_label_font_size_px: 14.0,
            bar_label_font_size_px: 12.0,
            colors: ChartColors::default(),
        }
    }
}

impl ChartConfig {
    /// Number of gaps between ruler lines.
    #[must_use]
    pub fn line_gap_count(self) -> usize {
        self.line_count.saturating_sub(1)
    }

    #[must_use]
    pub fn ruler_label_format(self) -> LabelFormat {
        LabelFormat::for_ruler(self.use_float_label)
    }

    #[must_use]
    pub fn bar_label_format(self) -> LabelFormat {
        LabelFormat::Decimal {
            precision: self.bar_label_precision,
        }
    }

    #[must_use]
    pub fn ruler_label_style(self) -> TextStyle {
        TextStyle::regular(self.ruler_label_font_size_px)
    }

    #[must_use]
    pub fn bar_label_style(self) -> TextStyle {
        TextStyle::bold(self.bar_label_font_size_px)
    }

    /// Sets the number of ruler lines.
    #[must_use]
    pub fn with_line_count(mut self, line_count: usize) -> Self {
        self.line_count = line_count;
        self
    }

    /// Sets the value domain mapped onto the full vertical span.
    #[must_use]
    pub fn with_label_range(mut self, label_value_min: f64, label_value_max: f64) -> Self {
        self.label_value_min = label_value_min;
        self.label_value_max = label_value_max;
        self
    }

    /// Switches ruler labels between one-decimal floats and integers.
    #[must_use]
    pub fn with_float_label(mut self, use_float_label: bool) -> Self {
        self.use_float_label = use_float_label;
        self
    }

    #[must_use]
    pub fn with_bar_label_precision(mut self, precision: u8) -> Self {
        self.bar_label_precision = precision;
        self
    }

    /// Sets bar width, corner radius and spacing.
    #[must_use]
    pub fn with_bar_geometry(mut self, width: f64, corner_radius: f64, space: f64) -> Self {
        self.bar_width = width;
        self.bar_corner_radius = corner_radius;
        self.bar_space = space;
        self
    }

    /// Sets the ruler label edge and dash size.
    #[must_use]
    pub fn with_dot_line(mut self, start_size: f64, dot_size: f64) -> Self {
        self.dot_line_start_size = start_size;
        self.dot_size = dot_size;
        self
    }

    #[must_use]
    pub fn with_dash_gap(mut self, dash_gap: f64) -> Self {
        self.dash_gap = dash_gap;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_font_sizes(mut self, ruler_label_px: f64, bar_label_px: f64) -> Self {
        self.ruler_label_font_size_px = ruler_label_px;
        self.bar_label_font_size_px = bar_label_px;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ChartColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.line_count < 2 {
            return Err(ChartError::InvalidConfig(format!(
                "line count must be >= 2, got {}",
                self.line_count
            )));
        }
        if !self.label_value_min.is_finite() || !self.label_value_max.is_finite() {
            return Err(ChartError::InvalidConfig(
                "label value range must be finite".to_owned(),
            ));
        }
        if self.label_value_max <= self.label_value_min {
            return Err(ChartError::InvalidConfig(format!(
                "label value max ({}) must be > label value min ({})",
                self.label_value_max, self.label_value_min
            )));
        }
        if !(self.label_value_max - self.label_value_min).is_finite() {
            return Err(ChartError::InvalidConfig(format!(
                "label value range {}..{} overflows",
                self.label_value_min, self.label_value_max
            )));
        }

        ensure_positive(self.bar_width, "bar width")?;
        ensure_positive(self.dot_size, "dot size")?;
        ensure_positive(self.ruler_label_font_size_px, "ruler label font size")?;
        ensure_positive(self.bar_label_font_size_px, "bar label font size")?;
        ensure_non_negative(self.bar_corner_radius, "bar corner radius")?;
        ensure_non_negative(self.bar_space, "bar space")?;
        ensure_non_negative(self.dot_line_start_size, "dot line start size")?;
        ensure_non_negative(self.dash_gap, "dash gap")?;
        ensure_non_negative(self.line_start_gap, "line start gap")?;
        ensure_non_negative(self.bar_strip_start_gap, "bar strip start gap")?;
        ensure_non_negative(self.bar_strip_content_padding, "bar strip content padding")?;
        ensure_non_negative(self.padding, "padding")?;

        self.colors.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON; absent fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
