use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String, #[source] chrono::ParseError),

    #[error("date {date} shifted back by {days} days is out of range")]
    DateOutOfRange { date: chrono::NaiveDate, days: u32 },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
