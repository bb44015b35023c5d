use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fixed virtual canvas the layout engine maps data into.
///
/// Defaults reproduce the 1200×600 activity chart. Every field is exposed so
/// hosts and tests can lay out at alternate sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub offset_y: f64,
    pub gridline_count: usize,
    pub point_radius: f64,
    pub click_target_width: f64,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            padding_x: 50.0,
            padding_y: 90.0,
            offset_y: 40.0,
            gridline_count: 16,
            point_radius: 12.0,
            click_target_width: 18.0,
        }
    }
}

impl ChartDimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding_x: f64, padding_y: f64, offset_y: f64) -> Self {
        self.padding_x = padding_x;
        self.padding_y = padding_y;
        self.offset_y = offset_y;
        self
    }

    #[must_use]
    pub fn with_gridline_count(mut self, gridline_count: usize) -> Self {
        self.gridline_count = gridline_count;
        self
    }

    /// Height of the band values are mapped into in the shared-zero layout.
    #[must_use]
    pub fn plot_band_height(self) -> f64 {
        self.height - (self.padding_y + self.offset_y)
    }

    #[must_use]
    pub fn midline_y(self) -> f64 {
        self.height / 2.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        for (name, value) in [
            ("padding_x", self.padding_x),
            ("padding_y", self.padding_y),
            ("offset_y", self.offset_y),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        if self.padding_x >= self.width || self.plot_band_height() <= 0.0 {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.gridline_count == 0 {
            return Err(ChartError::InvalidData(
                "gridline count must be > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("point_radius", self.point_radius),
            ("click_target_width", self.click_target_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        Ok(())
    }
}

/// Size of the tooltip overlay panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

impl Default for TooltipSize {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 110.0,
        }
    }
}

impl TooltipSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidData(
                "tooltip size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Rendered bounding box of the chart as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn from_dimensions(dimensions: ChartDimensions) -> Self {
        Self::new(dimensions.width, dimensions.height)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
