use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Numeric label rendering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelFormat {
    /// Fixed number of fraction digits, rounded half away from zero.
    Decimal { precision: u8 },
    /// Integer part only, fraction discarded toward zero.
    TruncatedInteger,
}

impl LabelFormat {
    /// Ruler policy: one decimal when `use_float_label`, else truncation.
    #[must_use]
    pub const fn for_ruler(use_float_label: bool) -> Self {
        if use_float_label {
            Self::Decimal { precision: 1 }
        } else {
            Self::TruncatedInteger
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Decimal { precision } => normalize_negative_zero(round_half_away(value, precision)),
            Self::TruncatedInteger => normalize_negative_zero(format!("{}", value.trunc())),
        }
    }
}

fn round_half_away(value: f64, precision: u8) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let mut rounded = exact.round_dp_with_strategy(
                u32::from(precision),
                RoundingStrategy::MidpointAwayFromZero,
            );
            rounded.rescale(u32::from(precision));
            rounded.to_string()
        }
        // beyond Decimal's range; ties cannot occur at these magnitudes
        None => {
            let precision = usize::from(precision);
            format!("{value:.precision$}")
        }
    }
}

fn normalize_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|ch| ch == '0' || ch == '.') => rest.to_owned(),
        _ => text,
    }
}
