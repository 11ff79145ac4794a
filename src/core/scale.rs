use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Value axis mapped onto an inverted Y pixel span.
///
/// `value_max` lands on pixel `0` (top) and `value_min` on `height_px`
/// (bottom). Ruler lines and bars share one instance per render so their
/// positions always agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    value_min: f64,
    value_max: f64,
    height_px: f64,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64, height_px: f64) -> ChartResult<Self> {
        if !value_min.is_finite() || !value_max.is_finite() {
            return Err(ChartError::InvalidConfig(
                "scale domain must be finite".to_owned(),
            ));
        }
        if value_max <= value_min {
            return Err(ChartError::InvalidConfig(format!(
                "label value max ({value_max}) must be > label value min ({value_min})"
            )));
        }
        if !(value_max - value_min).is_finite() {
            return Err(ChartError::InvalidConfig(format!(
                "label value range {value_min}..{value_max} overflows"
            )));
        }
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidPlotHeight { height_px });
        }

        Ok(Self {
            value_min,
            value_max,
            height_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.value_min, self.value_max)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.height_px
    }

    /// Pixels per value unit.
    #[must_use]
    pub fn factor(self) -> f64 {
        self.height_px / (self.value_max - self.value_min)
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok((self.value_max - value) * self.factor())
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        Ok(self.value_max - pixel / self.factor())
    }

    /// Pixel length covered by a value span.
    ///
    /// A positive span never maps to zero: products that underflow are
    /// raised to `f64::MIN_POSITIVE` so only an empty span yields `0`.
    pub fn span_to_pixels(self, span: f64) -> ChartResult<f64> {
        if !span.is_finite() {
            return Err(ChartError::InvalidData("span must be finite".to_owned()));
        }
        let pixels = span * self.factor();
        if span > 0.0 && pixels < f64::MIN_POSITIVE {
            return Ok(f64::MIN_POSITIVE);
        }
        Ok(pixels)
    }
}
