use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, RulerLine, Viewport};
use crate::error::{ChartError, ChartResult};

use super::ChartLayout;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable geometry of one render pass, for fixtures and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub scroll_offset_px: f64,
    pub max_scroll_offset_px: f64,
    pub content_width_px: f64,
    pub visible_range: (usize, usize),
    pub ruler: Vec<RulerLine>,
    pub bars: Vec<BarGeometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl From<ChartLayout> for ChartSnapshot {
    fn from(layout: ChartLayout) -> Self {
        Self {
            viewport: layout.viewport,
            scroll_offset_px: layout.strip.scroll_offset_px,
            max_scroll_offset_px: layout.strip.max_scroll_offset(),
            content_width_px: layout.strip.content_width,
            visible_range: layout.visible_range,
            ruler: layout.ruler,
            bars: layout.bars,
        }
    }
}

impl ChartSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
