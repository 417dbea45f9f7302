//! prompter CLI - demo shell over a command tree
//!
//! Runs the demo tree interactively, executes a single line, or prints the
//! completions for a partial line.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use prompter::{
    repl::{self, ReplConfig, ReplSession},
    split_command_words, Config, Context, Result,
};
use tracing_subscriber::EnvFilter;

mod demo;

/// Environment variable holding the log filter
const LOG_ENV: &str = "PROMPTER_LOG";

/// prompter - command trees with completion for interactive prompts
#[derive(Parser)]
#[command(name = "prompter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prompt text
    #[arg(long, default_value = ">>> ")]
    prompt: String,
    /// Persist line history to this file
    #[arg(long)]
    history_file: Option<PathBuf>,
    /// Load session settings from a JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Disable ANSI styling of the prompt
    #[arg(long)]
    no_color: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Run,
    /// Execute one command line and exit
    Exec {
        /// Words of the command line
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Print completions for the text before the cursor
    Complete {
        /// Partial input line
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments and run the selected command
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // a subscriber installed by the host wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn execute(cli: Cli) -> Result<ExitCode> {
    let context = match &cli.config {
        Some(path) => Context::with_config(Config::load(path)?),
        None => Context::new(),
    };
    let tree = demo::build_tree()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let mut config = ReplConfig::default()
                .with_prompt(cli.prompt)
                .with_color(!cli.no_color);
            if let Some(path) = cli.history_file {
                config = config.with_history_file(path);
            }
            let mut session = ReplSession::new(tree, context);
            repl::run(&mut session, &config)
        }
        Commands::Exec { words } => {
            let mut context = context;
            let args = split_command_words(&words.join(" "));
            match tree.dispatch(&args, &mut context) {
                Some(result) => {
                    result?;
                    Ok(ExitCode::from(context.exit_status().unwrap_or(0)))
                }
                None => {
                    eprintln!("unknown or incomplete command: [{}]", args.join(" "));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Complete { text, json } => {
            let suggestions = tree.complete(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                for s in &suggestions {
                    println!("{}\t{}", s.text, s.description);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_run() {
        let cli = Cli::try_parse_from(["prompter"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.prompt, ">>> ");
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_exec_keeps_option_words() {
        let cli = Cli::try_parse_from(["prompter", "exec", "greet", "--name", "bob"]).unwrap();
        match cli.command {
            Some(Commands::Exec { words }) => assert_eq!(words, vec!["greet", "--name", "bob"]),
            _ => panic!("expected exec"),
        }
    }

    #[test]
    fn test_cli_complete_json_flag() {
        let cli = Cli::try_parse_from(["prompter", "complete", "greet --", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Complete { text, json }) => {
                assert_eq!(text, "greet --");
                assert!(json);
            }
            _ => panic!("expected complete"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from([
            "prompter",
            "--prompt",
            "pewpew> ",
            "--no-color",
            "--history-file",
            "/tmp/h",
        ])
        .unwrap();
        assert_eq!(cli.prompt, "pewpew> ");
        assert!(cli.no_color);
        assert_eq!(cli.history_file, Some(PathBuf::from("/tmp/h")));
    }

    #[test]
    fn test_execute_exec_unknown_is_not_an_error() {
        let cli = Cli::try_parse_from(["prompter", "exec", "frobnicate"]).unwrap();
        assert!(execute(cli).is_ok());
    }

    #[test]
    fn test_execute_exec_executor_error_propagates() {
        let cli = Cli::try_parse_from(["prompter", "exec", "greet"]).unwrap();
        assert!(execute(cli).is_err());
    }

    #[test]
    fn test_execute_loads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut config = Config::new();
        config.set("user", "alice");
        config.save(&path).unwrap();

        let cli = Cli::try_parse_from([
            "prompter".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "exec".to_string(),
            "config".to_string(),
            "get".to_string(),
            "user".to_string(),
        ])
        .unwrap();
        assert!(execute(cli).is_ok());
    }
}
