#![forbid(unsafe_code)]

use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use txt_bot::config::Config;
use txt_bot::{TextCommandHandler, TextCommandOutcome, parse_text_command, utils};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load_from_file(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    utils::logging::init_tracing(&config.logging)?;
    info!(
        "txt-bot loaded {} groups from {}",
        config.group_directory().len(),
        cli.config.display()
    );
    if let Some(file) = config.groups.file.as_deref() {
        debug!("{} inline groups, the rest from {}", config.groups.inline.len(), file);
    }

    let handler = TextCommandHandler::new(config.group_directory().clone())
        .with_confirmation_pattern(config.reply.confirmation_pattern.clone());

    match cli.command {
        Commands::Parse { input, json } => {
            let input = Commands::joined_input(&input);
            let (line, matched) = render(&handler, &input, json)?;
            println!("{line}");
            Ok(exit_code(matched))
        }
        Commands::Repl { json } => {
            let stdin = std::io::stdin();
            let unmatched = run_repl(&handler, json, stdin.lock(), std::io::stdout().lock())?;
            if unmatched > 0 {
                warn!("{} commands did not match any group", unmatched);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::ListGroups => {
            for group in handler.groups().iter() {
                println!("{}\t{}", group.id, group.name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::ValidateConfig => {
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(matched: bool) -> ExitCode {
    if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Renders one command. The flag is false when no group matched.
fn render(handler: &TextCommandHandler, input: &str, json: bool) -> Result<(String, bool)> {
    if json {
        let parsed = parse_text_command(input, handler.groups().as_slice());
        let matched = parsed.is_some();
        return Ok((serde_json::to_string(&parsed)?, matched));
    }

    let outcome = handler.handle(input);
    let matched = matches!(outcome, TextCommandOutcome::Send { .. });
    Ok((handler.confirmation(&outcome), matched))
}

/// Answers every non-blank input line and returns how many did not match.
fn run_repl<R, W>(
    handler: &TextCommandHandler,
    json: bool,
    input: R,
    mut output: W,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut unmatched = 0usize;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }
        let (rendered, matched) = render(handler, &line, json)?;
        if !matched {
            unmatched += 1;
        }
        writeln!(output, "{rendered}")?;
        output.flush()?;
    }

    Ok(unmatched)
}
