use chrono::{DateTime, Datelike, NaiveDate, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Named numeric field carried by a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesField {
    Total,
    Additions,
    Deletions,
}

impl SeriesField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Additions => "additions",
            Self::Deletions => "deletions",
        }
    }
}

/// Shape of the records a series was admitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    /// `{date, total}` records, e.g. weekly commit counts.
    Total,
    /// `{date, additions, deletions}` records.
    CodeFrequency,
}

/// Values of a single observation.
///
/// Deletions are always stored as a non-negative magnitude. Upstream
/// statistics report them as negative numbers; admission takes the absolute
/// value exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesValues {
    Total { total: f64 },
    CodeFrequency { additions: f64, deletions: f64 },
}

impl SeriesValues {
    #[must_use]
    pub fn kind(self) -> SeriesKind {
        match self {
            Self::Total { .. } => SeriesKind::Total,
            Self::CodeFrequency { .. } => SeriesKind::CodeFrequency,
        }
    }

    /// Field/value pairs in display order.
    #[must_use]
    pub fn fields(self) -> SmallVec<[(SeriesField, f64); 2]> {
        match self {
            Self::Total { total } => smallvec![(SeriesField::Total, total)],
            Self::CodeFrequency {
                additions,
                deletions,
            } => smallvec![
                (SeriesField::Additions, additions),
                (SeriesField::Deletions, deletions),
            ],
        }
    }

    #[must_use]
    pub fn value(self, field: SeriesField) -> Option<f64> {
        self.fields()
            .into_iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub values: SeriesValues,
}

impl DataPoint {
    #[must_use]
    pub fn total(date: NaiveDate, total: f64) -> Self {
        Self {
            date,
            values: SeriesValues::Total { total },
        }
    }

    #[must_use]
    pub fn code_frequency(date: NaiveDate, additions: f64, deletions: f64) -> Self {
        Self {
            date,
            values: SeriesValues::CodeFrequency {
                additions,
                deletions: deletions.abs(),
            },
        }
    }

    pub fn parse_total(date: &str, total: f64) -> ChartResult<Self> {
        let point = Self::total(parse_date(date)?, total);
        point.validate()?;
        Ok(point)
    }

    pub fn parse_code_frequency(date: &str, additions: f64, deletions: f64) -> ChartResult<Self> {
        let point = Self::code_frequency(parse_date(date)?, additions, deletions);
        point.validate()?;
        Ok(point)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (field, value) in self.values.fields() {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "`{}` on {} must be finite",
                    field.name(),
                    self.date
                )));
            }
        }
        Ok(())
    }
}

/// Parses the date representations produced by the activity data source.
///
/// Accepts RFC 3339 timestamps, plain `YYYY-MM-DD` dates, and the
/// `Date.prototype.toString` form (`Mon Jan 08 2024 00:00:00 GMT+0000 (UTC)`).
/// Timestamps keep the calendar date of their own offset.
pub fn parse_date(input: &str) -> ChartResult<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(time.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    let without_zone_name = trimmed.split(" (").next().unwrap_or(trimmed);
    if let Ok(time) = DateTime::parse_from_str(without_zone_name, "%a %b %d %Y %H:%M:%S GMT%z") {
        return Ok(time.date_naive());
    }

    Err(ChartError::InvalidDate {
        input: input.to_owned(),
    })
}

/// `{date, total}` input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalRecord {
    pub date: String,
    pub total: f64,
}

/// `{date, additions, deletions}` input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeFrequencyRecord {
    pub date: String,
    pub additions: f64,
    pub deletions: f64,
}

/// Either accepted input record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityRecord {
    CodeFrequency(CodeFrequencyRecord),
    Total(TotalRecord),
}

impl ActivityRecord {
    pub fn into_point(self) -> ChartResult<DataPoint> {
        match self {
            Self::CodeFrequency(record) => {
                DataPoint::parse_code_frequency(&record.date, record.additions, record.deletions)
            }
            Self::Total(record) => DataPoint::parse_total(&record.date, record.total),
        }
    }
}

/// Validated, non-empty, index-aligned sequence of data points.
///
/// Points are kept in insertion order; the x-axis position of a point is its
/// index, never its date.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    kind: SeriesKind,
    points: Vec<DataPoint>,
}

impl Series {
    /// Admits `points`, normalizing every deletions value to its magnitude.
    pub fn new(mut points: Vec<DataPoint>) -> ChartResult<Self> {
        let Some(first) = points.first() else {
            return Err(ChartError::InsufficientData(
                "series must contain at least one point".to_owned(),
            ));
        };
        let kind = first.values.kind();

        for (index, point) in points.iter_mut().enumerate() {
            if let SeriesValues::CodeFrequency { deletions, .. } = &mut point.values {
                *deletions = deletions.abs();
            }
            if point.values.kind() != kind {
                return Err(ChartError::InvalidData(format!(
                    "point {index} has shape {:?}, expected {kind:?}",
                    point.values.kind()
                )));
            }
            point.validate()?;
        }

        debug!(count = points.len(), ?kind, "admitted series");
        Ok(Self { kind, points })
    }

    pub fn from_records(records: Vec<ActivityRecord>) -> ChartResult<Self> {
        let points = records
            .into_iter()
            .map(ActivityRecord::into_point)
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(points)
    }

    /// Parses a JSON array of `{date, total}` or `{date, additions, deletions}` records.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let records: Vec<ActivityRecord> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse series json: {e}")))?;
        Self::from_records(records)
    }

    /// Builds a code-frequency series from column-oriented inputs.
    pub fn from_columns(dates: &[&str], additions: &[f64], deletions: &[f64]) -> ChartResult<Self> {
        if additions.len() != deletions.len() {
            return Err(ChartError::SeriesLengthMismatch {
                additions: additions.len(),
                deletions: deletions.len(),
            });
        }
        if dates.len() != additions.len() {
            return Err(ChartError::InvalidData(format!(
                "expected {} dates, got {}",
                additions.len(),
                dates.len()
            )));
        }

        let points = dates
            .iter()
            .zip(additions.iter().zip(deletions))
            .map(|(date, (additions, deletions))| {
                DataPoint::parse_code_frequency(date, *additions, *deletions)
            })
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(points)
    }

    /// Converts weekly `[unix_seconds, additions, deletions]` rows as served by
    /// the repository statistics API, optionally keeping only one calendar year.
    pub fn from_code_frequency_rows(rows: &[[i64; 3]], year: Option<i32>) -> ChartResult<Self> {
        let mut points = Vec::with_capacity(rows.len());
        for [unix_seconds, additions, deletions] in rows.iter().copied() {
            let time = DateTime::<Utc>::from_timestamp(unix_seconds, 0).ok_or_else(|| {
                ChartError::InvalidDate {
                    input: unix_seconds.to_string(),
                }
            })?;
            let date = time.date_naive();
            if year.is_some_and(|year| date.year() != year) {
                continue;
            }
            points.push(DataPoint::code_frequency(
                date,
                additions as f64,
                deletions as f64,
            ));
        }
        debug!(
            row_count = rows.len(),
            kept = points.len(),
            ?year,
            "converted code frequency rows"
        );
        Self::new(points)
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.kind
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for an admitted series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value of `field`, or `None` when the series does not carry it.
    #[must_use]
    pub fn max_value(&self, field: SeriesField) -> Option<f64> {
        self.points
            .iter()
            .filter_map(|point| point.values.value(field))
            .map(OrderedFloat)
            .max()
            .map(OrderedFloat::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{SeriesField, SeriesValues, parse_date};

    #[test]
    fn parses_javascript_date_string() {
        let date = parse_date("Mon Jan 08 2024 00:00:00 GMT+0000 (Coordinated Universal Time)")
            .expect("parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 8).expect("date"));
    }

    #[test]
    fn parses_rfc3339_in_its_own_offset() {
        let date = parse_date("2024-03-31T23:30:00-02:00").expect("parse");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 31).expect("date"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("Invalid Date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn fields_follow_display_order() {
        let values = SeriesValues::CodeFrequency {
            additions: 3.0,
            deletions: 4.0,
        };
        let fields = values.fields();
        assert_eq!(fields[0].0, SeriesField::Additions);
        assert_eq!(fields[1].0, SeriesField::Deletions);
        assert_eq!(values.value(SeriesField::Total), None);
    }
}
