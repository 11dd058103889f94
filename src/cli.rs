use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "txt-bot")]
#[command(about = "Resolve `txt <group name> <message>` commands", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, env = "CONFIG_PATH", default_value = "config.yaml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Parse a single command; exits with status 1 when no group matches")]
    Parse {
        #[arg(
            required = true,
            num_args = 1..,
            help = "Command text; separate words are joined with one space, quote it to keep spacing"
        )]
        input: Vec<String>,

        #[arg(long, help = "Print the result as JSON (`null` when nothing matches)")]
        json: bool,
    },

    #[command(about = "Read commands from stdin, one per line")]
    Repl {
        #[arg(long, help = "Print each result as JSON")]
        json: bool,
    },

    #[command(about = "List the configured groups in match priority order")]
    ListGroups,

    #[command(about = "Validate the configuration file")]
    ValidateConfig,
}

impl Commands {
    pub fn joined_input(input: &[String]) -> String {
        input.join(" ")
    }
}
