use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Requires a finite value `>= 0`.
pub(crate) fn ensure_non_negative(value: f64, field_name: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{field_name} must be finite and >= 0"
        )));
    }
    Ok(())
}

/// Requires a finite value `> 0`.
pub(crate) fn ensure_positive(value: f64, field_name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{field_name} must be finite and > 0"
        )));
    }
    Ok(())
}
