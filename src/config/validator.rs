use thiserror::Error;

use crate::groups::GroupError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Group list error: {0}")]
    Group(#[from] GroupError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
