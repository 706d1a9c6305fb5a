use clap::Parser;
use std::env;

use crate::climate::{DEFAULT_END_OFFSET_DAYS, DEFAULT_START_OFFSET_DAYS, DEFAULT_YEAR_DAYS};
use crate::cli::command::Command;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Serve climate observations from a SQLite database as JSON",
    long_about = "A read-only HTTP API over station precipitation and temperature measurements.\n\nWithout a subcommand the REST server is started; subcommands print a single query result and exit.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "CLIMATE_DATABASE",
        default_value = "Resources/hawaii.sqlite",
        value_name = "PATH",
        help = "SQLite database holding the measurement and station tables"
    )]
    pub database: String,

    #[arg(
        long = "api-listen",
        env = "CLIMATE_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:5000",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[arg(
        long = "log-file",
        env = "CLIMATE_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        default_value_t = DEFAULT_YEAR_DAYS,
        value_name = "DAYS",
        help = "Length of the rolling year ending at the latest measurement"
    )]
    pub year_days: u32,

    #[arg(
        long,
        default_value_t = DEFAULT_START_OFFSET_DAYS,
        value_name = "DAYS",
        help = "Days subtracted from the start date of a temperature range"
    )]
    pub start_offset_days: u32,

    #[arg(
        long,
        default_value_t = DEFAULT_END_OFFSET_DAYS,
        value_name = "DAYS",
        help = "Days subtracted from the end date of a temperature range"
    )]
    pub end_offset_days: u32,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}
