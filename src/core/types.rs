use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One chart entry: a bar spanning from `low` up to `high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub high: f64,
    pub low: f64,
}

impl DataPoint {
    /// Builds a validated point. Fails when either bound is non-finite or
    /// when `high < low`.
    pub fn new(high: f64, low: f64) -> ChartResult<Self> {
        let point = Self { high, low };
        point.validate()?;
        Ok(point)
    }

    pub fn from_decimal(high: Decimal, low: Decimal) -> ChartResult<Self> {
        Self::new(decimal_to_f64(high, "high")?, decimal_to_f64(low, "low")?)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.high - self.low
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.high.is_finite() || !self.low.is_finite() {
            return Err(ChartError::InvalidData(
                "data point bounds must be finite".to_owned(),
            ));
        }
        if self.high < self.low {
            return Err(ChartError::InvalidData(format!(
                "data point high ({}) must be >= low ({})",
                self.high, self.low
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::DataPoint;

    #[test]
    fn decimal_points_convert_and_validate() {
        let point = DataPoint::from_decimal(Decimal::new(1205, 1), Decimal::new(80, 0))
            .expect("valid decimal point");
        assert_eq!(point, DataPoint { high: 120.5, low: 80.0 });

        assert!(DataPoint::from_decimal(Decimal::new(1, 0), Decimal::new(2, 0)).is_err());
    }
}
