//! Display formatting for asset measurements.
//!
//! Every mask takes an optional value and renders [`PLACEHOLDER`] when it is
//! missing.

use jiff::{Timestamp, tz::TimeZone};

pub const PLACEHOLDER: &str = "- -";

fn or_placeholder<V>(value: Option<V>, format: impl FnOnce(V) -> String) -> String {
    value.map(format).unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn temperature(celsius: Option<f64>) -> String {
    or_placeholder(celsius, |v| format!("{v}°C"))
}

pub fn percentage(value: Option<f64>) -> String {
    or_placeholder(value, |v| format!("{v}%"))
}

pub fn power(kwh: Option<f64>) -> String {
    or_placeholder(kwh, |v| format!("{v} kWh"))
}

pub fn hours(hours: Option<f64>) -> String {
    or_placeholder(hours, |v| format!("{v:.0} h"))
}

pub fn number(value: Option<f64>) -> String {
    or_placeholder(value, |v| v.to_string())
}

/// Collect counters. Zero means nothing was collected yet.
pub fn count(value: u64) -> String {
    or_placeholder((value > 0).then_some(value), |v| v.to_string())
}

pub fn text(value: Option<&str>) -> String {
    or_placeholder(value.filter(|v| !v.trim().is_empty()), str::to_string)
}

/// `dd/mm/yyyy` in the given time zone.
pub fn date_in(timestamp: Option<Timestamp>, tz: &TimeZone) -> String {
    or_placeholder(timestamp, |ts| {
        ts.to_zoned(tz.clone()).strftime("%d/%m/%Y").to_string()
    })
}

/// `dd/mm/yyyy` in the browser's time zone.
pub fn date(timestamp: Option<Timestamp>) -> String {
    date_in(timestamp, &TimeZone::system())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurements_carry_their_units() {
        assert_eq!(temperature(Some(80.0)), "80°C");
        assert_eq!(temperature(Some(72.5)), "72.5°C");
        assert_eq!(percentage(Some(70.0)), "70%");
        assert_eq!(power(Some(1.5)), "1.5 kWh");
        assert_eq!(hours(Some(1419.55)), "1420 h");
        assert_eq!(number(Some(1500.0)), "1500");
        assert_eq!(count(7516), "7516");
    }

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(temperature(None), PLACEHOLDER);
        assert_eq!(percentage(None), PLACEHOLDER);
        assert_eq!(power(None), PLACEHOLDER);
        assert_eq!(hours(None), PLACEHOLDER);
        assert_eq!(number(None), PLACEHOLDER);
        assert_eq!(count(0), PLACEHOLDER);
        assert_eq!(text(Some("  ")), PLACEHOLDER);
        assert_eq!(date_in(None, &TimeZone::UTC), PLACEHOLDER);
    }

    #[test]
    fn dates_are_day_month_year() {
        let ts: Timestamp = "2021-02-16T16:17:50.180Z".parse().unwrap();
        assert_eq!(date_in(Some(ts), &TimeZone::UTC), "16/02/2021");

        // late evening UTC is already the next day further east
        let ts: Timestamp = "2021-02-16T23:30:00Z".parse().unwrap();
        let tokyo = TimeZone::fixed(jiff::tz::offset(9));
        assert_eq!(date_in(Some(ts), &tokyo), "17/02/2021");
    }
}
