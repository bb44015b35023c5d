use activity_chart::core::{DataPoint, Series, SeriesField, SeriesKind, SeriesValues, parse_date};
use activity_chart::error::ChartError;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn empty_series_is_insufficient_data() {
    let err = Series::new(Vec::new()).expect_err("empty must fail");
    assert!(matches!(err, ChartError::InsufficientData(_)));
}

#[test]
fn malformed_date_fails_admission() {
    let err = DataPoint::parse_total("Invalid Date", 3.0).expect_err("bad date");
    match err {
        ChartError::InvalidDate { input } => assert_eq!(input, "Invalid Date"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_values_fail_admission() {
    let err = DataPoint::parse_total("2024-01-01", f64::NAN).expect_err("nan");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = Series::new(vec![DataPoint::total(date(2024, 1, 1), f64::INFINITY)])
        .expect_err("inf");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn mixed_shapes_are_rejected() {
    let err = Series::new(vec![
        DataPoint::total(date(2024, 1, 1), 1.0),
        DataPoint::code_frequency(date(2024, 1, 8), 1.0, -1.0),
    ])
    .expect_err("mixed shapes");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn json_records_of_either_shape_are_accepted() {
    let totals = Series::from_json_str(
        r#"[{"date":"2024-01-01","total":5},{"date":"2024-01-08","total":15}]"#,
    )
    .expect("totals");
    assert_eq!(totals.kind(), SeriesKind::Total);
    assert_eq!(totals.max_value(SeriesField::Total), Some(15.0));

    let frequency = Series::from_json_str(
        r#"[
            {"date":"Mon Jan 01 2024 00:00:00 GMT+0000 (Coordinated Universal Time)","year":2024,"additions":120,"deletions":-40},
            {"date":"2024-01-08T00:00:00Z","additions":80,"deletions":-95}
        ]"#,
    )
    .expect("code frequency");
    assert_eq!(frequency.kind(), SeriesKind::CodeFrequency);
    assert_eq!(frequency.points()[0].date, date(2024, 1, 1));
    assert_eq!(
        frequency.points()[1].values,
        SeriesValues::CodeFrequency {
            additions: 80.0,
            deletions: 95.0,
        }
    );
    assert_eq!(frequency.max_value(SeriesField::Deletions), Some(95.0));
}

#[test]
fn json_with_bad_date_is_rejected() {
    let err = Series::from_json_str(r#"[{"date":"soon","total":5}]"#).expect_err("bad date");
    assert!(matches!(err, ChartError::InvalidDate { .. }));
}

#[test]
fn json_with_unknown_shape_is_rejected() {
    let err = Series::from_json_str(r#"[{"date":"2024-01-01","count":5}]"#).expect_err("shape");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn column_inputs_must_align() {
    let err = Series::from_columns(&["2024-01-01", "2024-01-08"], &[1.0, 2.0], &[-1.0])
        .expect_err("mismatch");
    assert!(matches!(
        err,
        ChartError::SeriesLengthMismatch {
            additions: 2,
            deletions: 1
        }
    ));
}

#[test]
fn code_frequency_rows_filter_to_one_year() {
    // 2023-12-31, 2024-01-07 and 2024-01-14 at 00:00 UTC
    let rows = [
        [1_703_980_800, 10, -2],
        [1_704_585_600, 20, -4],
        [1_705_190_400, 30, -6],
    ];

    let all = Series::from_code_frequency_rows(&rows, None).expect("all rows");
    assert_eq!(all.len(), 3);

    let year = Series::from_code_frequency_rows(&rows, Some(2024)).expect("2024 rows");
    assert_eq!(year.len(), 2);
    assert_eq!(year.points()[0].date, date(2024, 1, 7));
    assert_eq!(
        year.points()[1].values.value(SeriesField::Deletions),
        Some(6.0)
    );

    let err = Series::from_code_frequency_rows(&rows, Some(2019)).expect_err("no rows");
    assert!(matches!(err, ChartError::InsufficientData(_)));
}

#[test]
fn out_of_range_timestamps_are_invalid_dates() {
    let err = Series::from_code_frequency_rows(&[[i64::MAX, 1, 1]], None).expect_err("overflow");
    assert!(matches!(err, ChartError::InvalidDate { .. }));
}

#[test]
fn plain_and_padded_dates_parse() {
    assert_eq!(parse_date(" 2024-01-15 ").expect("trimmed"), date(2024, 1, 15));
    assert_eq!(
        parse_date("Sun Jan 14 2024 19:00:00 GMT-0500 (Eastern Standard Time)").expect("js"),
        date(2024, 1, 14)
    );
}

#[test]
fn struct_literal_deletions_are_normalized_at_admission() {
    let series = Series::new(vec![
        DataPoint {
            date: date(2024, 2, 1),
            values: SeriesValues::CodeFrequency {
                additions: 10.0,
                deletions: -5.0,
            },
        },
        DataPoint {
            date: date(2024, 2, 8),
            values: SeriesValues::CodeFrequency {
                additions: 20.0,
                deletions: -15.0,
            },
        },
    ])
    .expect("series");

    assert_eq!(series.max_value(SeriesField::Deletions), Some(15.0));
    assert_eq!(
        series.points()[0].values.value(SeriesField::Deletions),
        Some(5.0)
    );
}
