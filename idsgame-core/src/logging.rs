use crate::{ExperimentError, Result};
use chrono::Utc;
use log::LevelFilter;
use log4rs::{
    Handle,
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Logger, Root},
    encode::pattern::PatternEncoder,
};
use once_cell::sync::OnceCell;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} - {t} - {l} - {m}{n}";

// log4rs can only be installed once per process, later runs swap the config
static HANDLE: OnceCell<Handle> = OnceCell::new();

/// Handle to the logger of a single run. Passed to whatever needs to log on behalf of the run.
#[derive(Debug, Clone)]
pub struct RunLogger {
    target: String,
    log_file: Option<PathBuf>,
}

impl RunLogger {
    /// A logger that only goes through the `log` facade, without installing any appender.
    pub fn detached(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            log_file: None,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn info(&self, msg: impl Display) {
        log::info!(target: self.target.as_str(), "{msg}");
    }

    pub fn debug(&self, msg: impl Display) {
        log::debug!(target: self.target.as_str(), "{msg}");
    }

    pub fn warn(&self, msg: impl Display) {
        log::warn!(target: self.target.as_str(), "{msg}");
    }
}

/// Seconds since the epoch with a microsecond fraction, used to tag every artefact of a run.
pub fn time_str() -> String {
    let now = Utc::now();
    format!("{}.{:06}", now.timestamp(), now.timestamp_subsec_micros())
}

fn build_config(name: &str, log_file: &Path) -> Result<Config> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build(log_file)?;
    Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .appender(Appender::builder().build("file", Box::new(file)))
        .logger(
            Logger::builder()
                .appender("console")
                .appender("file")
                .additive(false)
                .build(name, LevelFilter::Info),
        )
        .build(Root::builder().appender("console").build(LevelFilter::Warn))
        .map_err(|err| ExperimentError::Logging(err.to_string()))
}

/// Routes the `name` target to the console and to `<logs_dir>/<time_str>_<name>.log`.
pub fn setup_logger(name: &str, logs_dir: impl AsRef<Path>, time_str: &str) -> Result<RunLogger> {
    let log_file = logs_dir.as_ref().join(format!("{time_str}_{name}.log"));
    let mut installed = false;
    let handle = HANDLE.get_or_try_init(|| {
        installed = true;
        log4rs::init_config(build_config(name, &log_file)?)
            .map_err(|err| ExperimentError::Logging(err.to_string()))
    })?;
    if !installed {
        handle.set_config(build_config(name, &log_file)?);
    }
    Ok(RunLogger {
        target: name.to_owned(),
        log_file: Some(log_file),
    })
}
