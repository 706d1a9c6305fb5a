use chrono::{Days, NaiveDate};

use super::ClimateError;

const ROUTE_DATE_FORMAT: &str = "%Y-%m-%d";

pub const DEFAULT_YEAR_DAYS: u32 = 365;
pub const DEFAULT_START_OFFSET_DAYS: u32 = 235;
pub const DEFAULT_END_OFFSET_DAYS: u32 = 500;

/// Day offsets used to derive query windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryWindows {
    /// Length of the rolling year ending at the latest measurement.
    pub year_days: u32,
    /// Subtracted from the `start` path date.
    pub start_offset_days: u32,
    /// Subtracted from the `end` path date.
    pub end_offset_days: u32,
}

impl Default for QueryWindows {
    fn default() -> Self {
        Self {
            year_days: DEFAULT_YEAR_DAYS,
            start_offset_days: DEFAULT_START_OFFSET_DAYS,
            end_offset_days: DEFAULT_END_OFFSET_DAYS,
        }
    }
}

pub fn parse_route_date(raw: &str) -> Result<NaiveDate, ClimateError> {
    NaiveDate::parse_from_str(raw, ROUTE_DATE_FORMAT)
        .map_err(|err| ClimateError::InvalidDate(raw.to_string(), err))
}

pub fn shift_back(date: NaiveDate, days: u32) -> Result<NaiveDate, ClimateError> {
    date.checked_sub_days(Days::new(u64::from(days)))
        .ok_or(ClimateError::DateOutOfRange { date, days })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_route_date_accepts_iso() {
        let parsed = parse_route_date("2017-08-23").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2017, 8, 23).unwrap());
    }

    #[test]
    fn parse_route_date_rejects_other_formats() {
        for raw in ["23-08-2017", "2017/08/23", "2017-02-30", "latest", ""] {
            let err = parse_route_date(raw).unwrap_err();
            assert!(matches!(err, ClimateError::InvalidDate(ref s, _) if s == raw));
        }
    }

    #[test]
    fn shift_back_crosses_leap_day() {
        let latest = NaiveDate::from_ymd_opt(2017, 8, 23).unwrap();
        assert_eq!(
            shift_back(latest, 365).unwrap(),
            NaiveDate::from_ymd_opt(2016, 8, 23).unwrap()
        );

        let after_leap = NaiveDate::from_ymd_opt(2016, 3, 1).unwrap();
        assert_eq!(
            shift_back(after_leap, 365).unwrap(),
            NaiveDate::from_ymd_opt(2015, 3, 2).unwrap()
        );
    }

    #[test]
    fn shift_back_reports_overflow() {
        let err = shift_back(NaiveDate::MIN, 1).unwrap_err();
        assert!(matches!(err, ClimateError::DateOutOfRange { days: 1, .. }));
    }

    #[test]
    fn default_windows() {
        let windows = QueryWindows::default();
        assert_eq!(windows.year_days, 365);
        assert_eq!(windows.start_offset_days, 235);
        assert_eq!(windows.end_offset_days, 500);
    }
}
