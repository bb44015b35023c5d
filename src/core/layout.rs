use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::format::format_axis_date;
use crate::core::{ChartDimensions, DataPoint, Series, SeriesField, SeriesKind};
use crate::error::{ChartError, ChartResult};

/// Baseline shift that vertically centres a value label inside its point circle.
pub const VALUE_LABEL_BASELINE_SHIFT: f64 = 2.8;
pub const DATE_LABEL_ROTATION_DEG: f64 = 45.0;

/// How values are mapped onto the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Every plotted field grows upward from the bottom inset against one maximum.
    SharedZero,
    /// Additions grow upward and deletions downward from `height / 2`.
    SplitMidline,
}

/// Selects which of the chart variants a layout pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    pub scale_mode: ScaleMode,
    /// Whether a code-frequency series also plots its deletions path.
    /// Ignored for total series.
    pub plot_deletions: bool,
}

impl LayoutOptions {
    /// Single `total` line.
    ///
    /// Same value as `additions_only()`: the plotted field is picked by the
    /// series kind.
    #[must_use]
    pub const fn total() -> Self {
        Self {
            scale_mode: ScaleMode::SharedZero,
            plot_deletions: false,
        }
    }

    /// Additions above and deletions below a shared midline.
    #[must_use]
    pub const fn split_midline() -> Self {
        Self {
            scale_mode: ScaleMode::SplitMidline,
            plot_deletions: true,
        }
    }

    /// Additions line only; tooltips still report both fields.
    ///
    /// Same value as `total()`: on a code-frequency series a shared-zero
    /// layout without deletions plots additions alone.
    #[must_use]
    pub const fn additions_only() -> Self {
        Self {
            scale_mode: ScaleMode::SharedZero,
            plot_deletions: false,
        }
    }

    #[must_use]
    pub fn default_for(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Total => Self::total(),
            SeriesKind::CodeFrequency => Self::split_midline(),
        }
    }

    /// Whether these options describe a chart `kind` can be drawn with.
    #[must_use]
    pub fn supports(self, kind: SeriesKind) -> bool {
        self.validate_for(kind).is_ok()
    }

    pub fn validate_for(self, kind: SeriesKind) -> ChartResult<()> {
        if self.scale_mode != ScaleMode::SplitMidline {
            return Ok(());
        }
        if kind != SeriesKind::CodeFrequency {
            return Err(ChartError::InvalidData(
                "split midline layout requires additions and deletions".to_owned(),
            ));
        }
        if !self.plot_deletions {
            return Err(ChartError::InvalidData(
                "split midline layout must plot deletions".to_owned(),
            ));
        }
        Ok(())
    }

    fn plotted_fields(self, kind: SeriesKind) -> SmallVec<[SeriesField; 2]> {
        let mut fields = SmallVec::new();
        match kind {
            SeriesKind::Total => fields.push(SeriesField::Total),
            SeriesKind::CodeFrequency => {
                fields.push(SeriesField::Additions);
                if self.plot_deletions {
                    fields.push(SeriesField::Deletions);
                }
            }
        }
        fields
    }
}

/// Vertical mapping resolved from the data maxima of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalScale {
    SharedZero {
        max: f64,
    },
    SplitMidline {
        max_additions: f64,
        max_deletions: f64,
    },
}

impl VerticalScale {
    fn resolve(
        series: &Series,
        fields: &[SeriesField],
        scale_mode: ScaleMode,
    ) -> ChartResult<Self> {
        match scale_mode {
            ScaleMode::SharedZero => {
                let max = fields
                    .iter()
                    .filter_map(|field| series.max_value(*field))
                    .fold(f64::NEG_INFINITY, f64::max);
                Ok(Self::SharedZero {
                    max: require_positive_max(max, "shared")?,
                })
            }
            ScaleMode::SplitMidline => {
                let max_additions = series
                    .max_value(SeriesField::Additions)
                    .unwrap_or(f64::NEG_INFINITY);
                let max_deletions = series
                    .max_value(SeriesField::Deletions)
                    .unwrap_or(f64::NEG_INFINITY);
                Ok(Self::SplitMidline {
                    max_additions: require_positive_max(max_additions, "additions")?,
                    max_deletions: require_positive_max(max_deletions, "deletions")?,
                })
            }
        }
    }

    /// Maps one value of `field` to its pixel row.
    #[must_use]
    pub fn y_for(self, field: SeriesField, value: f64, dims: ChartDimensions) -> f64 {
        match self {
            Self::SharedZero { max } => shared_zero_y(value, max, dims),
            Self::SplitMidline {
                max_additions,
                max_deletions,
            } => match field {
                SeriesField::Deletions => deletions_y(value, max_deletions, dims),
                SeriesField::Additions | SeriesField::Total => {
                    additions_y(value, max_additions, dims)
                }
            },
        }
    }
}

fn require_positive_max(max: f64, label: &str) -> ChartResult<f64> {
    if !max.is_finite() || max <= 0.0 {
        return Err(ChartError::InsufficientData(format!(
            "{label} scale maximum must be > 0, got {max}"
        )));
    }
    Ok(max)
}

/// Horizontal position of point `index` out of `count`.
///
/// The divisor is `count`, so the last point stops one step short of the
/// right inset.
#[must_use]
pub fn x_position(index: usize, count: usize, dims: ChartDimensions) -> f64 {
    (index as f64 / count as f64) * (dims.width - dims.padding_x) + dims.padding_x / 2.0
}

#[must_use]
pub fn shared_zero_y(value: f64, max: f64, dims: ChartDimensions) -> f64 {
    dims.height - dims.offset_y - (value / max) * dims.plot_band_height() - dims.padding_y
        + dims.offset_y
}

#[must_use]
pub fn additions_y(additions: f64, max_additions: f64, dims: ChartDimensions) -> f64 {
    let reach = dims.midline_y() + (dims.padding_y / 2.0 - 2.0 * dims.offset_y);
    dims.midline_y() - (additions / max_additions) * reach
}

/// `deletions` is a magnitude and is drawn below the midline.
#[must_use]
pub fn deletions_y(deletions: f64, max_deletions: f64, dims: ChartDimensions) -> f64 {
    let reach = dims.midline_y() - (dims.padding_y + dims.offset_y / 2.0);
    dims.midline_y() + (deletions / max_deletions) * reach
}

/// Decorative horizontal guide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gridline {
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
}

/// Guides at `height - padding_y - height * k / count` for `k` in `0..count`.
#[must_use]
pub fn gridlines(dims: ChartDimensions) -> Vec<Gridline> {
    let count = dims.gridline_count;
    (0..count)
        .map(|k| {
            let ratio = k as f64 / count as f64;
            Gridline {
                y: dims.height - dims.padding_y - dims.height * ratio,
                x1: dims.padding_x / 2.0,
                x2: dims.width - dims.padding_x / 2.0,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedValue {
    pub field: SeriesField,
    pub value: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
}

/// Data point with its pixel placement for one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub index: usize,
    pub point: DataPoint,
    pub x: f64,
    /// One entry per plotted field, in plotting order.
    pub values: SmallVec<[PlottedValue; 2]>,
    pub date_label: AxisLabel,
}

impl PlottedPoint {
    /// Position tooltips anchor to: the first plotted value of the point.
    #[must_use]
    pub fn anchor(&self) -> (f64, f64) {
        let y = self.values.first().map_or(0.0, |value| value.y);
        (self.x, y)
    }

    #[must_use]
    pub fn y_for(&self, field: SeriesField) -> Option<f64> {
        self.values
            .iter()
            .find(|value| value.field == field)
            .map(|value| value.y)
    }
}

/// Ordered polyline for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPath {
    pub field: SeriesField,
    pub points: Vec<(f64, f64)>,
}

impl SeriesPath {
    /// `x,y x,y ...` as consumed by an SVG `polyline`.
    #[must_use]
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Clickable column above a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitTarget {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HitTarget {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Static geometry of one chart for one data revision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub kind: SeriesKind,
    pub options: LayoutOptions,
    pub dimensions: ChartDimensions,
    pub scale: VerticalScale,
    pub points: Vec<PlottedPoint>,
    pub paths: SmallVec<[SeriesPath; 2]>,
    pub gridlines: Vec<Gridline>,
    pub hit_targets: Vec<HitTarget>,
}

impl ChartLayout {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<&PlottedPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn path(&self, field: SeriesField) -> Option<&SeriesPath> {
        self.paths.iter().find(|path| path.field == field)
    }

    /// Index of the first click target containing `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        self.hit_targets
            .iter()
            .find(|target| target.contains(x, y))
            .map(|target| target.index)
    }
}

/// Lays out `series` inside `dims`.
///
/// Deterministic and side-effect free: identical inputs yield identical
/// geometry. Fails with `InsufficientData` when a scale maximum is not
/// positive instead of producing non-finite coordinates.
pub fn compute_layout(
    series: &Series,
    options: LayoutOptions,
    dims: ChartDimensions,
) -> ChartResult<ChartLayout> {
    dims.validate()?;
    if series.is_empty() {
        return Err(ChartError::InsufficientData(
            "series must contain at least one point".to_owned(),
        ));
    }

    let kind = series.kind();
    options.validate_for(kind)?;
    let fields = options.plotted_fields(kind);
    let scale = VerticalScale::resolve(series, &fields, options.scale_mode)?;
    let count = series.len();
    let label_y = dims.height - (dims.padding_y - dims.offset_y);

    let mut points = Vec::with_capacity(count);
    let mut paths: SmallVec<[SeriesPath; 2]> = fields
        .iter()
        .map(|field| SeriesPath {
            field: *field,
            points: Vec::with_capacity(count),
        })
        .collect();
    let mut hit_targets = Vec::with_capacity(count);

    for (index, point) in series.points().iter().enumerate() {
        let x = x_position(index, count, dims);
        let mut values: SmallVec<[PlottedValue; 2]> = SmallVec::new();
        for (path, field) in paths.iter_mut().zip(fields.iter()) {
            let Some(value) = point.values.value(*field) else {
                return Err(ChartError::InvalidData(format!(
                    "point {index} is missing `{}`",
                    field.name()
                )));
            };
            let y = scale.y_for(*field, value, dims);
            path.points.push((x, y));
            values.push(PlottedValue {
                field: *field,
                value,
                y,
            });
        }

        let top_y = values
            .iter()
            .map(|value| value.y)
            .fold(f64::INFINITY, f64::min);
        hit_targets.push(HitTarget {
            index,
            x: x - dims.click_target_width / 2.0,
            y: 0.0,
            width: dims.click_target_width,
            height: top_y.max(0.0),
        });

        points.push(PlottedPoint {
            index,
            point: *point,
            x,
            values,
            date_label: AxisLabel {
                text: format_axis_date(point.date),
                x,
                y: label_y,
                rotation_deg: DATE_LABEL_ROTATION_DEG,
            },
        });
    }

    debug!(
        count,
        ?kind,
        scale_mode = ?options.scale_mode,
        paths = paths.len(),
        "computed chart layout"
    );

    Ok(ChartLayout {
        kind,
        options,
        dimensions: dims,
        scale,
        points,
        paths,
        gridlines: gridlines(dims),
        hit_targets,
    })
}
