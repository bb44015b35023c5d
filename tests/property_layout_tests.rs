use activity_chart::core::{
    ChartDimensions, DataPoint, LayoutOptions, Series, SeriesField, compute_layout,
};
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

fn series_from(values: &[f64]) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("start date");
    let points = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let date = start
                .checked_add_days(Days::new(7 * i as u64))
                .expect("date in range");
            DataPoint::total(date, *value)
        })
        .collect();
    Series::new(points).expect("series")
}

proptest! {
    #[test]
    fn layout_emits_one_strictly_increasing_x_per_point(
        values in prop::collection::vec(0.1f64..10_000.0, 1..128)
    ) {
        let layout = compute_layout(
            &series_from(&values),
            LayoutOptions::total(),
            ChartDimensions::default(),
        ).expect("layout");

        prop_assert_eq!(layout.points.len(), values.len());
        prop_assert_eq!(layout.paths[0].points.len(), values.len());
        for pair in layout.points.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
        for point in &layout.points {
            prop_assert!(point.x.is_finite());
            prop_assert!(point.values.iter().all(|value| value.y.is_finite()));
        }
    }

    #[test]
    fn maximum_value_is_topmost(
        values in prop::collection::vec(0.1f64..10_000.0, 1..64)
    ) {
        let layout = compute_layout(
            &series_from(&values),
            LayoutOptions::total(),
            ChartDimensions::default(),
        ).expect("layout");

        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_y = layout
            .points
            .iter()
            .filter_map(|p| p.y_for(SeriesField::Total))
            .fold(f64::INFINITY, f64::min);
        for point in &layout.points {
            if point.point.values.value(SeriesField::Total) == Some(max) {
                prop_assert_eq!(point.y_for(SeriesField::Total), Some(min_y));
            }
        }
    }

    #[test]
    fn gridline_count_is_independent_of_data(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 1..64),
        bump in 0.1f64..100.0
    ) {
        let mut values = values;
        values.push(values.iter().copied().fold(0.0, f64::max) + bump);
        let layout = compute_layout(
            &series_from(&values),
            LayoutOptions::total(),
            ChartDimensions::default(),
        ).expect("layout");
        prop_assert_eq!(layout.gridlines.len(), 16);
    }

    #[test]
    fn split_midline_keeps_series_on_their_side(
        rows in prop::collection::vec((0.0f64..5_000.0, -5_000.0f64..0.0), 1..64)
    ) {
        let mut rows = rows;
        rows.push((1.0, -1.0));
        let dates: Vec<String> = (0..rows.len())
            .map(|i| format!("2024-01-01T00:00:{:02}Z", i % 60))
            .collect();
        let dates: Vec<&str> = dates.iter().map(String::as_str).collect();
        let additions: Vec<f64> = rows.iter().map(|row| row.0).collect();
        let deletions: Vec<f64> = rows.iter().map(|row| row.1).collect();
        let series = Series::from_columns(&dates, &additions, &deletions).expect("series");
        let dims = ChartDimensions::default();
        let layout = compute_layout(&series, LayoutOptions::split_midline(), dims).expect("layout");

        for point in &layout.points {
            let add = point.y_for(SeriesField::Additions).expect("additions");
            let del = point.y_for(SeriesField::Deletions).expect("deletions");
            prop_assert!(add <= dims.midline_y());
            prop_assert!(del >= dims.midline_y());
        }
    }
}
