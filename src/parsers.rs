pub mod command_parser;
pub mod normalize;

pub use command_parser::{
    ParsedTextCommand, TXT_PREFIX, match_text_command, parse_text_command, strip_command_prefix,
};
pub use normalize::{flexible_name_pattern, normalize_key};
