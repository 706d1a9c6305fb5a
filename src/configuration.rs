use std::net::SocketAddr;
use std::path::PathBuf;

use crate::climate::QueryWindows;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub database: PathBuf,
    pub api_listen: SocketAddr,
    pub log_file: Option<PathBuf>,
    pub windows: QueryWindows,
}
