use std::str::FromStr;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;
use crate::initialization::General;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up the global log4rs logger
///
/// # Arguments
///
/// * 'general' - general section of the configuration
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let config = logger_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}

/// Builds a log4rs configuration with a console and/or file appender
///
/// # Arguments
///
/// * 'general' - general section of the configuration
fn logger_config(general: &General) -> Result<Config, ConfigError> {
    let level = LevelFilter::from_str(&general.log_level)
        .map_err(|_| ConfigError(format!("unknown log level '{}'", general.log_level)))?;

    let mut builder = Config::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if !general.log_to_stdout && general.log_path.is_none() {
        return Err(ConfigError::from("no log target, set log_path or log_to_stdout"));
    }

    Ok(builder.build(root.build(level))?)
}
