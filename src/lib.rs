#![forbid(unsafe_code)]

pub mod config;
pub mod groups;
pub mod handler;
pub mod parsers;
pub mod utils;

pub use groups::{Group, GroupDirectory};
pub use handler::{TextCommandHandler, TextCommandOutcome};
pub use parsers::{ParsedTextCommand, parse_text_command};
