pub use self::parser::{Config, GroupsConfig, LoggingConfig, ReplyConfig};
pub use self::validator::ConfigError;

mod parser;
mod validator;
