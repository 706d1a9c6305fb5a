use crate::climate::QueryWindows;
use crate::configuration::Configuration;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let cfg = Configuration {
            database: cli.database.clone().into(),
            api_listen: cli.api_listen,
            log_file: cli.log_file.clone().map(Into::into),
            windows: QueryWindows {
                year_days: cli.year_days,
                start_offset_days: cli.start_offset_days,
                end_offset_days: cli.end_offset_days,
            },
        };
        Self { config: cfg }
    }
}
