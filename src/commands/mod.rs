use serde_json::Value;

use crate::cli::Command;
use crate::climate;
use crate::context;
use crate::rest::models::TemperatureSummaryResponse;
use crate::storage::Storage;

impl Command {
    pub fn run<S: Storage + ?Sized>(&self, ctx: &context::Context, storage: &S) -> anyhow::Result<()> {
        let payload = self.render(ctx, storage)?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        Ok(())
    }

    /// Runs the query behind this command and returns the JSON the matching route would serve.
    pub fn render<S: Storage + ?Sized>(
        &self,
        ctx: &context::Context,
        storage: &S,
    ) -> anyhow::Result<Value> {
        let windows = &ctx.config.windows;
        let payload = match self {
            Command::Precipitation => serde_json::to_value(climate::precipitation(storage, windows)?)?,
            Command::Stations => serde_json::to_value(climate::stations(storage)?)?,
            Command::Tobs => serde_json::to_value(climate::tobs(storage, windows)?)?,
            Command::Temps { start, end } => {
                let summaries: Vec<TemperatureSummaryResponse> =
                    climate::temperature_range(storage, windows, start, end.as_deref())?
                        .into_iter()
                        .map(Into::into)
                        .collect();
                serde_json::to_value(summaries)?
            }
        };
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::storage::SqliteStorage;
    use rusqlite::Connection;
    use serde_json::json;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, SqliteStorage, context::Context) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hawaii.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE measurement (id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT);
            CREATE TABLE station (id INTEGER PRIMARY KEY, station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT);
            INSERT INTO station (station, name) VALUES ('USC00519397', 'WAIKIKI'), ('USC00519281', 'WAIHEE');
            INSERT INTO measurement (station, date, prcp, tobs) VALUES
                ('USC00519397', '2016-08-22', 0.4, 78.0),
                ('USC00519281', '2016-08-23', 1.79, 77.0),
                ('USC00519281', '2016-08-24', 2.0, 79.0),
                ('USC00519281', '2017-08-23', 0.0, 81.0);
            "#,
        )
        .unwrap();

        let ctx = context::Context {
            config: Configuration {
                database: path.clone(),
                api_listen: "127.0.0.1:0".parse().unwrap(),
                log_file: None,
                windows: climate::QueryWindows::default(),
            },
        };
        (dir, SqliteStorage::new(&path), ctx)
    }

    #[test]
    fn render_precipitation_spans_exactly_one_year() {
        let (_dir, storage, ctx) = fixture();
        let payload = Command::Precipitation.render(&ctx, &storage).unwrap();
        // 2016-08-23 is 365 days before the latest date and falls outside the year.
        assert!(payload.get("2016-08-23").is_none());
        assert_eq!(payload, json!({"2016-08-24": 2.0, "2017-08-23": 0.0}));
    }

    #[test]
    fn render_stations() {
        let (_dir, storage, ctx) = fixture();
        let payload = Command::Stations.render(&ctx, &storage).unwrap();
        assert_eq!(payload, json!(["USC00519397", "USC00519281"]));
    }

    #[test]
    fn render_tobs() {
        let (_dir, storage, ctx) = fixture();
        let payload = Command::Tobs.render(&ctx, &storage).unwrap();
        assert!(payload.get("2016-08-23").is_none());
        assert_eq!(payload, json!({"2016-08-24": 79.0, "2017-08-23": 81.0}));
    }

    #[test]
    fn render_temps_uses_uppercase_keys() {
        let (_dir, storage, ctx) = fixture();
        let cmd = Command::Temps {
            start: "2017-04-13".into(),
            end: None,
        };
        // 2017-04-13 minus 235 days is 2016-08-21.
        let payload = cmd.render(&ctx, &storage).unwrap();
        assert_eq!(
            payload,
            json!([{"TMIN": 77.0, "TAVG": 78.75, "TMAX": 81.0}])
        );
    }

    #[test]
    fn render_temps_rejects_bad_date() {
        let (_dir, storage, ctx) = fixture();
        let cmd = Command::Temps {
            start: "yesterday".into(),
            end: None,
        };
        let err = cmd.render(&ctx, &storage).unwrap_err();
        assert!(err.to_string().contains("invalid date 'yesterday'"));
    }
}
