use serde::{Deserialize, Serialize};

use crate::storage::TemperatureSummary;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct TemperatureSummaryResponse {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}

impl From<TemperatureSummary> for TemperatureSummaryResponse {
    fn from(summary: TemperatureSummary) -> Self {
        Self {
            tmin: summary.tmin,
            tavg: summary.tavg,
            tmax: summary.tmax,
        }
    }
}
