use chrono::NaiveDate;

/// One `(date, value)` projection of a measurement row.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyReading {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationActivity {
    pub station: String,
    pub observations: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemperatureSummary {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

/// Read-only view over the measurement and station tables.
///
/// Lower date bounds are exclusive and upper bounds inclusive.
pub trait Storage {
    fn latest_measurement_date(&self) -> anyhow::Result<Option<NaiveDate>>;

    fn list_precipitation_after(&self, after: NaiveDate) -> anyhow::Result<Vec<DailyReading>>;

    fn list_station_ids(&self) -> anyhow::Result<Vec<String>>;

    /// Station with the most measurement rows, ties broken by identifier.
    fn most_active_station(&self) -> anyhow::Result<Option<StationActivity>>;

    fn list_temperatures_after(
        &self,
        station: &str,
        after: NaiveDate,
    ) -> anyhow::Result<Vec<DailyReading>>;

    fn temperature_summary(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> anyhow::Result<TemperatureSummary>;
}
