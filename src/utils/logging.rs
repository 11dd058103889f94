use tracing_subscriber::EnvFilter;

use super::AppError;
use crate::config::LoggingConfig;

pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "json"];

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Output goes to stderr so stdout only carries results.
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .map_err(|err| AppError::Logging(format!("invalid log level `{}`: {err}", logging.level)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match logging.format.as_str() {
        "json" => builder.json().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };
    result.map_err(|err| AppError::Logging(format!("failed to install subscriber: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{LOG_FORMATS, init_tracing};
    use crate::config::LoggingConfig;

    #[test]
    fn default_format_is_known() {
        assert!(LOG_FORMATS.contains(&LoggingConfig::default().format.as_str()));
    }

    #[test]
    fn rejects_unparseable_level_without_rust_log() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let logging = LoggingConfig {
            level: "txt_bot=loudest".to_string(),
            format: "compact".to_string(),
        };
        assert!(init_tracing(&logging).is_err());
    }
}
