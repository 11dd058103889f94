use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::normalize::{
    LoweredText, flexible_name_pattern, is_separator, normalize_key, trim_separators,
};
use crate::groups::Group;

pub const TXT_PREFIX: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTextCommand {
    pub group_id: String,
    pub message_to_send: String,
}

struct Candidate<'a> {
    group: &'a Group,
    span: usize,
}

/// Returns the trimmed text after `prefix` when `message` starts with it.
///
/// The prefix is compared ASCII case-insensitively after trimming and must be
/// followed by whitespace or the end of the message, so `txtfoo` is rejected.
/// U+FEFF counts as whitespace here.
pub fn strip_command_prefix<'a>(prefix: &str, message: &'a str) -> Option<&'a str> {
    let trimmed = trim_separators(message);
    let head = trimmed.get(..prefix.len())?;
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }

    let remainder = &trimmed[prefix.len()..];
    if !remainder.is_empty() && !remainder.starts_with(is_separator) {
        return None;
    }
    Some(trim_separators(remainder))
}

/// Parses `txt <group name> <message>` against `groups`.
///
/// Group names match regardless of case and internal whitespace. When several
/// names occur in the command the longest one wins; on equal length the group
/// listed first wins. Returns `None` when the input is not a `txt` command or
/// addresses no known group.
pub fn parse_text_command(raw_input: &str, groups: &[Group]) -> Option<ParsedTextCommand> {
    match_text_command(raw_input, groups).map(|(group, message)| ParsedTextCommand {
        group_id: group.id.clone(),
        message_to_send: message,
    })
}

/// Same as [`parse_text_command`] but hands back the matched group itself.
pub fn match_text_command<'g>(
    raw_input: &str,
    groups: &'g [Group],
) -> Option<(&'g Group, String)> {
    let working = strip_command_prefix(TXT_PREFIX, raw_input)?;
    let normalized_input = normalize_key(working);

    let mut best: Option<Candidate<'g>> = None;
    for group in groups {
        let normalized_name = normalize_key(&group.name);
        if !normalized_input.contains(normalized_name.as_str()) {
            continue;
        }

        let span = normalized_name.chars().count();
        trace!(group_id = %group.id, span, "group name occurs in command");
        if best.as_ref().is_none_or(|current| span > current.span) {
            best = Some(Candidate { group, span });
        }
    }

    let Some(Candidate { group, .. }) = best else {
        debug!("no group name found in txt command");
        return None;
    };

    let pattern = match flexible_name_pattern(&group.name) {
        Ok(pattern) => pattern,
        Err(err) => {
            debug!(group_id = %group.id, "cannot build group name pattern: {}", err);
            return None;
        }
    };
    let lowered = LoweredText::new(working);
    let Some(found) = pattern.find(lowered.as_str()) else {
        debug!(group_id = %group.id, "group name not found with original spacing");
        return None;
    };

    let message_start = lowered.source_offset(found.end());
    Some((group, trim_separators(&working[message_start..]).to_string()))
}
