use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::{EnvFilter, ParseError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

pub const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        #[source]
        source: ParseError,
    },

    #[error("log file path '{0}' has no file name")]
    NoFileName(PathBuf),

    #[error("cannot open log file '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: InitError,
    },

    #[error("a global logger is already installed: {0}")]
    Install(#[from] TryInitError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogConf {
    pub level: String,
    pub file: Option<PathBuf>,
}
impl Default for LogConf {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file: None,
        }
    }
}
impl LogConf {
    pub fn new(level: String, file: Option<PathBuf>) -> Self {
        Self { level, file }
    }
}

/// Directory and file name of the log file; a bare file name lives in the
/// current directory.
fn log_file_parts(path: &Path) -> Result<(PathBuf, String), LoggerError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggerError::NoFileName(path.to_path_buf()))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((directory, file_name.to_string()))
}

fn filter(level: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(level).map_err(|source| LoggerError::Filter {
        directive: level.to_string(),
        source,
    })
}

/// Installs the global subscriber. Logs go to stderr, or to `conf.file`
/// through a non-blocking writer whose guard must outlive the program.
pub fn init(conf: &LogConf) -> Result<Option<WorkerGuard>, LoggerError> {
    let filter = filter(&conf.level)?;
    match &conf.file {
        Some(path) => {
            let (directory, file_name) = log_file_parts(path)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(directory)
                .map_err(|source| LoggerError::File {
                    path: path.clone(),
                    source,
                })?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .try_init()?;
            Ok(None)
        }
    }
}
