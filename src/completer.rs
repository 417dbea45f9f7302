//! Command tree: registration, dispatch and completion.
//!
//! A [`Completer`] is one level of the tree. It owns its child commands and
//! its options by name, plus cached suggestions in registration order.
//! Dispatch and completion walk the tree strictly top-down; each level only
//! sees the words meant for it.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::args::CmdArgs;
use crate::command::{Command, Executor, Visibility};
use crate::context::Context;
use crate::option::CmdOption;
use crate::suggestion::{filter_has_prefix, Suggestion};
use crate::tokenizer::split_command_words;
use crate::{Error, Result};

/// A command after registration, with its realized subtree.
#[derive(Clone)]
struct Node {
    executor: Option<Executor>,
    visibility: Visibility,
    completer: Completer,
}

/// One level of the command tree.
#[derive(Clone, Default)]
pub struct Completer {
    commands: HashMap<String, Node>,
    options: HashMap<String, CmdOption>,

    // cached in registration order
    command_cache: Vec<Suggestion>,
    option_cache: Vec<Suggestion>,
}

impl Completer {
    /// Create an empty tree level
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one or more commands at this level.
    ///
    /// Each command's subcommands and options are registered recursively
    /// unless it carries a pre-built node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateCommand`] or [`Error::DuplicateOption`] on a
    /// name clash anywhere in the new subtree. Commands registered before
    /// the failing one stay registered; the clashing sibling is untouched.
    pub fn register_commands(&mut self, commands: impl IntoIterator<Item = Command>) -> Result<()> {
        for command in commands {
            if self.commands.contains_key(&command.name) {
                return Err(Error::duplicate_command(command.name));
            }

            let Command {
                name,
                description,
                executor,
                visibility,
                subcommands,
                options,
                completer,
            } = command;

            let completer = match completer {
                Some(prebuilt) => prebuilt,
                None => {
                    let mut child = Self::new();
                    child.register_commands(subcommands)?;
                    child.register_options(options)?;
                    child
                }
            };

            trace!(command = %name, "registered command");
            self.command_cache
                .push(Suggestion::new(name.clone(), description));
            self.commands.insert(
                name,
                Node {
                    executor,
                    visibility,
                    completer,
                },
            );
        }
        Ok(())
    }

    /// Register one or more options at this level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOption`] if an option of the same name is
    /// already registered here.
    pub fn register_options(&mut self, options: impl IntoIterator<Item = CmdOption>) -> Result<()> {
        for option in options {
            if self.options.contains_key(&option.name) {
                return Err(Error::duplicate_option(option.name));
            }
            self.option_cache.push(option.suggestion());
            self.options.insert(option.name.clone(), option);
        }
        Ok(())
    }

    /// Child level reached through `name`, if registered
    #[must_use]
    pub fn subcommand(&self, name: &str) -> Option<&Completer> {
        self.commands.get(name).map(|node| &node.completer)
    }

    /// Registered option named `name`
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&CmdOption> {
        self.options.get(name)
    }

    /// Command names at this level in registration order
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.command_cache.iter().map(|s| s.text.as_str())
    }

    /// Option names at this level in registration order
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.option_cache.iter().map(|s| s.text.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Tokenize and run a line.
    ///
    /// Prints `unknown or incomplete command: [..]` when no command matches.
    pub fn execute(&self, line: &str, ctx: &mut Context) {
        let args = split_command_words(line);
        if !self.execute_args(&args, ctx) {
            println!("unknown or incomplete command: [{}]", args.join(" "));
        }
    }

    /// Run the deepest command matching the leading words.
    ///
    /// Returns false if nothing runnable matched. Executor errors are
    /// printed and still count as a match.
    pub fn execute_args(&self, args: &[String], ctx: &mut Context) -> bool {
        match self.dispatch(args, ctx) {
            Some(Ok(())) => true,
            Some(Err(e)) => {
                println!("error encountered: {e}");
                true
            }
            None => false,
        }
    }

    /// Like [`Completer::execute_args`] but hands back the executor result.
    ///
    /// `None` means no runnable command matched.
    pub fn dispatch(&self, args: &[String], ctx: &mut Context) -> Option<Result<()>> {
        let name = args.first().map_or("", String::as_str);
        let node = self.commands.get(name)?;
        let rest = args.get(1..).unwrap_or_default();

        // the most specific command wins
        if let Some(result) = node.completer.dispatch(rest, ctx) {
            return Some(result);
        }

        let executor = node.executor.as_ref()?;
        let arguments = node.completer.collect_arguments(rest);
        debug!(command = %name, ?arguments, "executing");
        let result = executor(&arguments, ctx);
        if let Err(e) = &result {
            warn!(command = %name, error = %e, "command failed");
        }
        Some(result)
    }

    /// Map words following a command onto its options.
    ///
    /// A registered option name takes the next word as its value; anything
    /// else is positional. An option name in last position is dropped.
    #[must_use]
    pub fn collect_arguments(&self, args: &[String]) -> CmdArgs {
        let mut arguments = CmdArgs::new();
        let mut pending: Option<&str> = None;
        for arg in args {
            if let Some(option) = pending.take() {
                arguments.push(option, arg.as_str());
            } else if self.options.contains_key(arg) {
                pending = Some(arg.as_str());
            } else {
                arguments.push_positional(arg.as_str());
            }
        }
        arguments
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Completion
    // ─────────────────────────────────────────────────────────────────────────

    /// Suggestions for the text before the cursor
    #[must_use]
    pub fn complete(&self, text_before_cursor: &str) -> Vec<Suggestion> {
        self.complete_args(&split_command_words(text_before_cursor))
    }

    /// Suggestions for the last word, using the earlier words as context
    #[must_use]
    pub fn complete_args(&self, args: &[String]) -> Vec<Suggestion> {
        let [first, rest @ ..] = args else {
            return self.complete_args(&[String::new()]);
        };

        if rest.is_empty() {
            let mut suggestions = self.command_filter(first);
            suggestions.extend(self.option_filter(args));
            return suggestions;
        }

        if let Some(node) = self.commands.get(first) {
            return node.completer.complete_args(rest);
        }

        let option_name = &args[args.len() - 2];
        if let Some(option) = self.options.get(option_name) {
            return match option.completer() {
                Some(completer) => {
                    option_value_filter(args, &completer.complete(option_name, args))
                }
                None => Vec::new(),
            };
        }

        self.option_filter(args)
    }

    fn command_filter(&self, prefix: &str) -> Vec<Suggestion> {
        filter_has_prefix(&self.command_cache, prefix, true)
            .into_iter()
            .filter(|s| {
                self.commands
                    .get(&s.text)
                    .is_some_and(|node| !node.visibility.is_hidden())
            })
            .collect()
    }

    /// Option names matching the last word; one-shot options already on the
    /// line, the word being typed included, are left out.
    fn option_filter(&self, args: &[String]) -> Vec<Suggestion> {
        let Some(current) = args.last() else {
            return Vec::new();
        };
        filter_has_prefix(&self.option_cache, current, true)
            .into_iter()
            .filter(|s| {
                let used = args.iter().any(|a| *a == s.text);
                !used || self.options.get(&s.text).is_some_and(|o| o.repeatable)
            })
            .collect()
    }
}

fn option_value_filter(args: &[String], values: &[Suggestion]) -> Vec<Suggestion> {
    let current = args.last().map_or("", String::as_str);
    let mut values = filter_has_prefix(values, current, true);
    for value in &mut values {
        if value.text.chars().any(char::is_whitespace) {
            value.text = format!("\"{}\"", value.text);
        }
    }
    values
}

impl fmt::Debug for Completer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completer")
            .field("commands", &self.command_names().collect::<Vec<_>>())
            .field("options", &self.option_names().collect::<Vec<_>>())
            .finish()
    }
}
