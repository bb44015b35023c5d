pub mod format;
pub mod layout;
pub mod series;
pub mod types;

pub use layout::{
    AxisLabel, ChartLayout, Gridline, HitTarget, LayoutOptions, PlottedPoint, PlottedValue,
    ScaleMode, SeriesPath, VerticalScale, compute_layout, gridlines, x_position,
};
pub use series::{
    ActivityRecord, CodeFrequencyRecord, DataPoint, Series, SeriesField, SeriesKind, SeriesValues,
    TotalRecord, parse_date,
};
pub use types::{Bounds, ChartDimensions, TooltipSize};
