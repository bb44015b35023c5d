use serde::{Deserialize, Serialize};

use crate::core::{Bounds, ChartDimensions, LayoutOptions, TooltipSize};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart setup; every field falls back to
/// the activity-chart defaults when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub dimensions: ChartDimensions,
    #[serde(default)]
    pub tooltip_size: TooltipSize,
    /// Rendered bounding box used for tooltip placement; the canvas size when `None`.
    #[serde(default)]
    pub bounds: Option<Bounds>,
    /// Chart variant; derived from the series shape when `None`.
    #[serde(default)]
    pub layout_options: Option<LayoutOptions>,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(dimensions: ChartDimensions) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dimensions(mut self, dimensions: ChartDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    #[must_use]
    pub fn with_tooltip_size(mut self, tooltip_size: TooltipSize) -> Self {
        self.tooltip_size = tooltip_size;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_layout_options(mut self, options: LayoutOptions) -> Self {
        self.layout_options = Some(options);
        self
    }

    #[must_use]
    pub fn resolved_bounds(self) -> Bounds {
        self.bounds
            .unwrap_or_else(|| Bounds::from_dimensions(self.dimensions))
    }

    pub fn validate(self) -> ChartResult<()> {
        self.dimensions.validate()?;
        self.tooltip_size.validate()?;
        self.resolved_bounds().validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }
}
