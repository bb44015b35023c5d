use chrono::NaiveDate;

/// Short numeric date used under each point, e.g. `1/8/24`.
#[must_use]
pub fn format_axis_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%y").to_string()
}

/// Long date used as the tooltip title, e.g. `January 8, 2024`.
#[must_use]
pub fn format_tooltip_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // avoid rendering `-0`
        return "0".to_owned();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{format_axis_date, format_tooltip_date, format_value};

    #[test]
    fn dates_format_without_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).expect("valid date");
        assert_eq!(format_axis_date(date), "1/8/24");
        assert_eq!(format_tooltip_date(date), "January 8, 2024");
    }

    #[test]
    fn whole_values_render_without_fraction() {
        assert_eq!(format_value(15.0), "15");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-0.0), "0");
    }
}
