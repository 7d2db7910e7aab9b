use log::{info, warn, LevelFilter};
use std::path::Path;

// For file-based logging with rotation
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Environment variable that overrides the configured maximum log level
pub const LOG_ENV_VAR: &str = "PHASH_LOG";

/// Initialize the file logger with timestamp, log level, and module path
/// Logs are rotated at 10MB, keeping 5 archives
pub fn init_logger<P: AsRef<Path>>(
    log_dir: P,
    level: LevelFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;

    let log_file_path = log_dir.join("phash.log");
    let archived_logs_pattern = format!("{}/phash.{{}}.log", log_dir.display());

    let file_trigger = SizeTrigger::new(10 * 1024 * 1024); // 10MB

    let file_roller = FixedWindowRoller::builder()
        .build(&archived_logs_pattern, 5)
        .map_err(|e| format!("Failed to create log roller: {}", e))?;

    let compound_policy = CompoundPolicy::new(Box::new(file_trigger), Box::new(file_roller));

    let rolling_file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] [{M}:{L}] - {m}{n}",
        )))
        .build(&log_file_path, Box::new(compound_policy))
        .map_err(|e| format!("Failed to create log appender: {}", e))?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(rolling_file)))
        .build(Root::builder().appender("file").build(LevelFilter::Trace))
        .map_err(|e| format!("Failed to build log config: {}", e))?;

    log4rs::init_config(config).map_err(|e| format!("Failed to initialize log4rs: {}", e))?;

    log::set_max_level(env_level().unwrap_or(level));

    info!("Logging to file: {}", log_file_path.display());
    Ok(())
}

/// Level requested through `PHASH_LOG`, if set and parseable
pub fn env_level() -> Option<LevelFilter> {
    std::env::var(LOG_ENV_VAR).ok()?.parse::<LevelFilter>().ok()
}

/// Log an image that could not be hashed
pub fn log_hash_error(source: &str, error: &dyn std::error::Error) {
    warn!(
        "Hash computation failed - Source: {}, Error: {}",
        source, error
    );
}
