use bank::Result;

use std::{env, path::PathBuf, str::FromStr};

use log::LevelFilter;
use simple_logger::SimpleLogger;

use thiserror::Error;

const DATABASE_VAR: &str = "BANK_DATABASE";
const ACTIVITY_LOG_VAR: &str = "BANK_ACTIVITY_LOG";
const REPORT_FORMAT_VAR: &str = "BANK_REPORT_FORMAT";

const DEFAULT_ACTIVITY_LOG: &str = "banking_activity.log";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ConfigError::InvalidValue(REPORT_FORMAT_VAR, s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// `None` keeps the database in memory
    pub database_path: Option<PathBuf>,
    pub activity_log_path: PathBuf,
    pub report_format: ReportFormat,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        return Self::from_lookup(|key| env::var(key).ok());
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let database_path = lookup(DATABASE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let activity_log_path: PathBuf = lookup(ACTIVITY_LOG_VAR)
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACTIVITY_LOG.to_string())
            .into();

        let report_format = match lookup(REPORT_FORMAT_VAR) {
            Some(format) => format.parse()?,
            None => ReportFormat::default(),
        };

        return Ok(Self {
            database_path,
            activity_log_path,
            report_format,
        });
    }
}

pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
