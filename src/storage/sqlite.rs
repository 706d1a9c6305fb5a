use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, types::Type, Connection, OpenFlags, OptionalExtension};
use std::path::Path;

use super::traits::{DailyReading, StationActivity, Storage, TemperatureSummary};

const DATE_FORMAT: &str = "%Y-%m-%d";

const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("measurement", &["station", "date", "prcp", "tobs"]),
    ("station", &["station"]),
];

#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub path: String,
}

fn parse_date_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let text: String = row.get(idx)?;
    NaiveDate::parse_from_str(&text, DATE_FORMAT)
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err)))
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn map_daily_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DailyReading> {
    Ok(DailyReading {
        date: parse_date_column(row, 0)?,
        value: row.get(1)?,
    })
}

fn db_latest_measurement_date(conn: &Connection) -> rusqlite::Result<Option<NaiveDate>> {
    let latest: Option<String> =
        conn.query_row("SELECT MAX(date) FROM measurement", [], |row| row.get(0))?;
    latest
        .map(|text| {
            NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|err| {
                rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
            })
        })
        .transpose()
}

fn db_list_precipitation_after(
    conn: &Connection,
    after: NaiveDate,
) -> rusqlite::Result<Vec<DailyReading>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT date, prcp
        FROM measurement
        WHERE date > ?1
        ORDER BY id
        "#,
    )?;
    let rows = stmt
        .query_map(params![format_date(after)], map_daily_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn db_list_station_ids(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT station FROM station ORDER BY id")?;
    let rows = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn db_most_active_station(conn: &Connection) -> rusqlite::Result<Option<StationActivity>> {
    conn.query_row(
        r#"
        SELECT station, COUNT(station) AS observations
        FROM measurement
        WHERE station IS NOT NULL
        GROUP BY station
        ORDER BY observations DESC, station ASC
        LIMIT 1
        "#,
        [],
        |row| {
            let station: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            let observations: u64 = count.try_into().map_err(|err| {
                rusqlite::Error::FromSqlConversionFailure(1, Type::Integer, Box::new(err))
            })?;
            Ok(StationActivity {
                station,
                observations,
            })
        },
    )
    .optional()
}

fn db_list_temperatures_after(
    conn: &Connection,
    station: &str,
    after: NaiveDate,
) -> rusqlite::Result<Vec<DailyReading>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT date, tobs
        FROM measurement
        WHERE station = ?1
          AND date > ?2
        ORDER BY id
        "#,
    )?;
    let rows = stmt
        .query_map(params![station, format_date(after)], map_daily_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

fn db_temperature_summary(
    conn: &Connection,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> rusqlite::Result<TemperatureSummary> {
    conn.query_row(
        r#"
        SELECT MIN(tobs), AVG(tobs), MAX(tobs)
        FROM measurement
        WHERE date > ?1
          AND (?2 IS NULL OR date <= ?2)
        "#,
        params![format_date(start), end.map(format_date)],
        |row| {
            Ok(TemperatureSummary {
                tmin: row.get(0)?,
                tavg: row.get(1)?,
                tmax: row.get(2)?,
            })
        },
    )
}

fn db_table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let columns = stmt
        .query_map(params![table], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}

impl SqliteStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_string_lossy().to_string(),
        }
    }

    /// Checks that the database exists and carries the tables the queries read.
    pub fn init(&self) -> Result<()> {
        if !Path::new(&self.path).exists() {
            anyhow::bail!("database file {} does not exist", self.path);
        }

        let conn = self.open().context("opening database")?;
        for (table, required) in REQUIRED_COLUMNS {
            let columns = db_table_columns(&conn, table)
                .with_context(|| format!("reading columns of table {table}"))?;
            if columns.is_empty() {
                anyhow::bail!("database is missing table '{table}'");
            }
            let missing: Vec<&str> = required
                .iter()
                .copied()
                .filter(|col| !columns.iter().any(|c| c.as_str() == *col))
                .collect();
            if !missing.is_empty() {
                anyhow::bail!(
                    "table '{table}' is missing column(s): {}",
                    missing.join(", ")
                );
            }
        }

        log::debug!("SQLite schema verified at {}", self.path);
        Ok(())
    }

    fn open(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(std::time::Duration::from_millis(500))?;
        Ok(conn)
    }

    fn with_conn<F, T>(&self, f: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = self.open()?;
        f(&conn)
    }
}

impl Storage for SqliteStorage {
    fn latest_measurement_date(&self) -> Result<Option<NaiveDate>> {
        let latest = self.with_conn(db_latest_measurement_date)?;
        Ok(latest)
    }

    fn list_precipitation_after(&self, after: NaiveDate) -> Result<Vec<DailyReading>> {
        let rows = self.with_conn(|conn| db_list_precipitation_after(conn, after))?;
        Ok(rows)
    }

    fn list_station_ids(&self) -> Result<Vec<String>> {
        let rows = self.with_conn(db_list_station_ids)?;
        Ok(rows)
    }

    fn most_active_station(&self) -> Result<Option<StationActivity>> {
        let station = self.with_conn(db_most_active_station)?;
        Ok(station)
    }

    fn list_temperatures_after(
        &self,
        station: &str,
        after: NaiveDate,
    ) -> Result<Vec<DailyReading>> {
        let rows = self.with_conn(|conn| db_list_temperatures_after(conn, station, after))?;
        Ok(rows)
    }

    fn temperature_summary(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<TemperatureSummary> {
        let summary = self.with_conn(|conn| db_temperature_summary(conn, start, end))?;
        Ok(summary)
    }
}
