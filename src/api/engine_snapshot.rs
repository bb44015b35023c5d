use serde::{Deserialize, Serialize};

use crate::core::ChartLayout;
use crate::interaction::TooltipState;

use super::ChartEngineConfig;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: ChartEngineConfig,
    pub revision: u64,
    pub layout: Option<ChartLayout>,
    pub tooltip: Option<TooltipState>,
}
