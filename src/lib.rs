//! prompter - command trees for interactive prompts
//!
//! Register a tree of named commands with subcommands and options once, then
//! feed it input lines: it dispatches each submitted line to the deepest
//! matching command and completes the word under the cursor as the user
//! types.
//!
//! # Quick Start
//!
//! ```
//! use prompter::{CmdArgs, CmdOption, Command, Completer, Context, FixedValues};
//!
//! let greet = Command::leaf("greet", "say a greeting", |args: &CmdArgs, _: &mut Context| {
//!     println!("Hello to {}", args.first_value("--name")?);
//!     Ok(())
//! })
//! .with_option(
//!     CmdOption::new("--name", "your name").with_completer(FixedValues::from_texts(["alice", "bob"])),
//! );
//!
//! let mut tree = Completer::new();
//! tree.register_commands([greet]).unwrap();
//!
//! let texts: Vec<String> = tree.complete("greet --name a").into_iter().map(|s| s.text).collect();
//! assert_eq!(texts, vec!["alice"]);
//!
//! let mut ctx = Context::new();
//! tree.execute("greet --name alice", &mut ctx);
//! ```
//!
//! The `repl` feature (on by default) adds a `reedline` front end in
//! [`repl`].

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::redundant_clone,
        clippy::needless_collect,
        clippy::too_many_lines
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

pub mod args;
pub mod command;
pub mod completer;
pub mod config;
pub mod context;
pub mod error;
pub mod option;
#[cfg(feature = "repl")]
pub mod repl;
pub mod suggestion;
pub mod tokenizer;

pub use args::{CmdArgs, POSITIONAL};
pub use command::{exit_command, Command, Executor, Visibility};
pub use completer::Completer;
pub use config::Config;
pub use context::Context;
pub use error::{Error, Result};
pub use option::{CmdOption, FixedValues, ValueCompleter};
pub use suggestion::{filter_has_prefix, Suggestion};
pub use tokenizer::{last_word_start, split_command_words};
