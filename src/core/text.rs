use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Font parameters passed to a [`TextMeasurer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size_px: f64,
    #[serde(default)]
    pub bold: bool,
}

impl TextStyle {
    #[must_use]
    pub const fn regular(font_size_px: f64) -> Self {
        Self {
            font_size_px,
            bold: false,
        }
    }

    #[must_use]
    pub const fn bold(font_size_px: f64) -> Self {
        Self {
            font_size_px,
            bold: true,
        }
    }
}

/// Measured size of a laid out label, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

impl TextExtent {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width < 0.0
            || self.height < 0.0
        {
            return Err(ChartError::InvalidData(
                "text extent must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Glyph metrics provider injected at render time.
///
/// Layout code only needs label extents; it never assumes a specific text
/// rendering backend.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> ChartResult<TextExtent>;
}

/// Deterministic, backend-independent width estimate.
///
/// Widths are accumulated from per-glyph em ratios; height is a fixed line
/// height ratio of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedTextMeasurer {
    pub line_height_ratio: f64,
    pub bold_width_ratio: f64,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            line_height_ratio: 1.2,
            bold_width_ratio: 1.08,
        }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> ChartResult<TextExtent> {
        if !style.font_size_px.is_finite() || style.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }

        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        let weight = if style.bold { self.bold_width_ratio } else { 1.0 };

        TextExtent {
            width: units * style.font_size_px * weight,
            height: style.font_size_px * self.line_height_ratio,
        }
        .validate()
    }
}

/// Axis-aligned label box with its top-left corner at (`x`, `y`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelBox {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::{EstimatedTextMeasurer, TextMeasurer, TextStyle};

    #[test]
    fn estimate_scales_with_font_size() {
        let measurer = EstimatedTextMeasurer::default();
        let small = measurer.measure("120", TextStyle::regular(10.0)).expect("small");
        let large = measurer.measure("120", TextStyle::regular(20.0)).expect("large");
        assert!((large.width - small.width * 2.0).abs() <= 1e-9);
        assert!((large.height - 24.0).abs() <= 1e-9);
    }

    #[test]
    fn bold_labels_measure_wider() {
        let measurer = EstimatedTextMeasurer::default();
        let regular = measurer.measure("80", TextStyle::regular(12.0)).expect("regular");
        let bold = measurer.measure("80", TextStyle::bold(12.0)).expect("bold");
        assert!(bold.width > regular.width);
    }

    #[test]
    fn empty_text_has_zero_width() {
        let measurer = EstimatedTextMeasurer::default();
        let extent = measurer.measure("", TextStyle::regular(12.0)).expect("empty");
        assert_eq!(extent.width, 0.0);
    }
}
