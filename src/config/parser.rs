use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::groups::{Group, GroupDirectory};
use crate::utils::logging::LOG_FORMATS;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub groups: GroupsConfig,
    #[serde(default)]
    pub reply: ReplyConfig,
    #[serde(skip)]
    directory: GroupDirectory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(alias = "console", default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroupsConfig {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub inline: Vec<Group>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReplyConfig {
    #[serde(default = "default_confirmation_pattern")]
    pub confirmation_pattern: String,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            confirmation_pattern: default_confirmation_pattern(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        config.apply_env_overrides();
        config.load_groups(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn group_directory(&self) -> &GroupDirectory {
        &self.directory
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidConfig(format!(
                "logging.format must be one of {}, got `{}`",
                LOG_FORMATS.join(", "),
                self.logging.format
            )));
        }

        if self.reply.confirmation_pattern.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "reply.confirmation_pattern cannot be empty".to_string(),
            ));
        }

        if self.directory.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "no groups configured (set groups.inline or groups.file)".to_string(),
            ));
        }
        self.directory.validate()?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("TXT_BOT_LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = lookup("TXT_BOT_LOG_FORMAT") {
            self.logging.format = value.trim().to_ascii_lowercase();
        }
        if let Some(value) = lookup("TXT_BOT_GROUPS_FILE").filter(|value| !value.trim().is_empty())
        {
            self.groups.file = Some(value);
        }
    }

    fn load_groups(&mut self, config_path: &Path) -> Result<(), ConfigError> {
        let mut directory = GroupDirectory::new(self.groups.inline.clone());

        if let Some(file) = self.groups.file.as_deref() {
            let groups_path = resolve_relative_path(config_path, file);
            let from_file = GroupDirectory::load_from_file(&groups_path)?;
            directory.extend(from_file.iter().cloned());
        }

        self.directory = directory;
        Ok(())
    }
}

fn resolve_relative_path(config_path: &Path, target: &str) -> PathBuf {
    let target = Path::new(target);
    if target.is_absolute() {
        target.to_path_buf()
    } else if let Some(parent) = config_path.parent() {
        parent.join(target)
    } else {
        target.to_path_buf()
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_confirmation_pattern() -> String {
    "Sending to :group: :message".to_string()
}
