use tracing::debug;

use crate::groups::GroupDirectory;
use crate::parsers::{TXT_PREFIX, match_text_command, strip_command_prefix};
use crate::utils::formatting::apply_pattern_string;

const DEFAULT_CONFIRMATION_PATTERN: &str = "Sending to :group: :message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommandOutcome {
    /// Not a `txt` command at all.
    Ignored,
    /// A `txt` command that names no known group.
    Unrecognized,
    Send {
        group_id: String,
        group_name: String,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct TextCommandHandler {
    groups: GroupDirectory,
    confirmation_pattern: String,
}

impl TextCommandHandler {
    pub fn new(groups: GroupDirectory) -> Self {
        Self {
            groups,
            confirmation_pattern: DEFAULT_CONFIRMATION_PATTERN.to_string(),
        }
    }

    pub fn with_confirmation_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.confirmation_pattern = pattern.into();
        self
    }

    pub fn groups(&self) -> &GroupDirectory {
        &self.groups
    }

    pub fn is_command(&self, message: &str) -> bool {
        strip_command_prefix(TXT_PREFIX, message).is_some()
    }

    pub fn handle(&self, message: &str) -> TextCommandOutcome {
        if !self.is_command(message) {
            debug!("ignoring input without txt prefix");
            return TextCommandOutcome::Ignored;
        }

        let Some((group, message)) = match_text_command(message, self.groups.as_slice()) else {
            debug!("txt command did not address a known group");
            return TextCommandOutcome::Unrecognized;
        };
        debug!(group_id = %group.id, message_len = message.len(), "txt command resolved");

        TextCommandOutcome::Send {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            message,
        }
    }

    pub fn confirmation(&self, outcome: &TextCommandOutcome) -> String {
        match outcome {
            TextCommandOutcome::Ignored => {
                "Commands look like: txt <group name> <message>".to_string()
            }
            TextCommandOutcome::Unrecognized => {
                "No group matches that command. Run list-groups to see all groups.".to_string()
            }
            TextCommandOutcome::Send {
                group_id,
                group_name,
                message,
            } => apply_pattern_string(
                &self.confirmation_pattern,
                &[
                    ("group", group_name.as_str()),
                    ("id", group_id.as_str()),
                    ("message", message.as_str()),
                ],
            ),
        }
    }
}
