use std::path::{Path, PathBuf};
use std::process::Command as ProcCommand;

use rusqlite::Connection;
use tempfile::TempDir;

/// Writes a small hawaii-style dataset and returns its path.
pub fn fixture_database(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("hawaii.sqlite");
    let conn = Connection::open(&path).expect("create fixture database");
    conn.execute_batch(
        r#"
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        );
        CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );
        INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
            ('USC00519397', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
            ('USC00513117', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6),
            ('USC00519281', 'WAIHEE 837.5, HI US', 21.45167, -157.84889, 32.9);
        INSERT INTO measurement (station, date, prcp, tobs) VALUES
            ('USC00519397', '2010-01-01', 0.08, 65.0),
            ('USC00519397', '2016-08-22', 0.4, 78.0),
            ('USC00519397', '2016-08-23', 0.0, 81.0),
            ('USC00513117', '2016-08-23', 0.15, 76.0),
            ('USC00519281', '2016-08-23', 1.79, 77.0),
            ('USC00519397', '2016-08-24', 0.08, 80.0),
            ('USC00519281', '2016-08-24', 2.15, 76.0),
            ('USC00519281', '2016-11-02', NULL, 70.0),
            ('USC00519281', '2017-08-17', 0.01, 76.0),
            ('USC00519281', '2017-08-18', 0.06, 79.0),
            ('USC00519397', '2017-08-23', 0.0, 81.0);
        "#,
    )
    .expect("populate fixture database");
    path
}

pub fn base_cmd(database: &Path) -> ProcCommand {
    let mut command = ProcCommand::new(env!("CARGO_BIN_EXE_climate-api"));
    command
        .env("DOTENV_PATH", "/nonexistent/.env")
        .env("RUST_LOG", "warn")
        .arg("--database")
        .arg(database);
    command
}
