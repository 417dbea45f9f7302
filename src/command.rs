//! Command definitions.
//!
//! A [`Command`] describes one node of the tree before registration: its
//! name, an optional executor, its subcommands and its options. Registering
//! it on a [`Completer`] realizes the subtree.

use std::fmt;
use std::sync::Arc;

use crate::args::CmdArgs;
use crate::completer::Completer;
use crate::context::Context;
use crate::option::CmdOption;
use crate::{Error, Result};

/// Action run when a command is the deepest match for the typed words.
pub type Executor = Arc<dyn Fn(&CmdArgs, &mut Context) -> Result<()> + Send + Sync>;

/// Whether a command is offered during completion.
#[derive(Clone, Default)]
pub enum Visibility {
    /// Always suggested
    #[default]
    Visible,
    /// Never suggested, still executable
    Hidden,
    /// Hidden while the predicate returns true; evaluated on every completion
    When(Arc<dyn Fn() -> bool + Send + Sync>),
}

impl Visibility {
    /// Evaluate visibility now
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        match self {
            Self::Visible => false,
            Self::Hidden => true,
            Self::When(predicate) => predicate(),
        }
    }
}

impl fmt::Debug for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visible => f.write_str("Visible"),
            Self::Hidden => f.write_str("Hidden"),
            Self::When(_) => f.write_str("When(..)"),
        }
    }
}

/// A command, its subcommands and its options.
#[derive(Clone)]
pub struct Command {
    /// Word that selects this command
    pub name: String,
    /// Help text shown in suggestions
    pub description: String,
    pub(crate) executor: Option<Executor>,
    pub(crate) visibility: Visibility,
    pub(crate) subcommands: Vec<Command>,
    pub(crate) options: Vec<CmdOption>,
    pub(crate) completer: Option<Completer>,
}

impl Command {
    /// Create a router command. Subcommands are optional and can be added
    /// later with [`Command::add_subcommands`].
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            executor: None,
            visibility: Visibility::Visible,
            subcommands: Vec::new(),
            options: Vec::new(),
            completer: None,
        }
    }

    /// Create a command that runs `executor`
    pub fn leaf<F>(name: impl Into<String>, description: impl Into<String>, executor: F) -> Self
    where
        F: Fn(&CmdArgs, &mut Context) -> Result<()> + Send + Sync + 'static,
    {
        Self::new(name, description).with_executor(executor)
    }

    /// Set the executor
    #[must_use]
    pub fn with_executor<F>(mut self, executor: F) -> Self
    where
        F: Fn(&CmdArgs, &mut Context) -> Result<()> + Send + Sync + 'static,
    {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Append subcommands
    #[must_use]
    pub fn with_subcommands(mut self, subs: impl IntoIterator<Item = Command>) -> Self {
        self.subcommands.extend(subs);
        self
    }

    /// Append one or more subcommands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSubcommands`] if `subs` is empty.
    pub fn add_subcommands(&mut self, subs: impl IntoIterator<Item = Command>) -> Result<()> {
        let before = self.subcommands.len();
        self.subcommands.extend(subs);
        if self.subcommands.len() == before {
            return Err(Error::NoSubcommands);
        }
        Ok(())
    }

    /// Append one option
    #[must_use]
    pub fn with_option(mut self, option: CmdOption) -> Self {
        self.options.push(option);
        self
    }

    /// Append options
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = CmdOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Append an option in place. Duplicates are rejected at registration.
    pub fn add_option(&mut self, option: CmdOption) {
        self.options.push(option);
    }

    /// Hide or show the command in completion
    #[must_use]
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.visibility = if hidden {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
        self
    }

    /// Hide the command whenever `predicate` returns true
    #[must_use]
    pub fn hide_when<P>(mut self, predicate: P) -> Self
    where
        P: Fn() -> bool + Send + Sync + 'static,
    {
        self.visibility = Visibility::When(Arc::new(predicate));
        self
    }

    /// Use an already registered node for this command's children.
    ///
    /// Subcommands and options set on the command are ignored when a node
    /// is supplied.
    #[must_use]
    pub fn with_completer(mut self, completer: Completer) -> Self {
        self.completer = Some(completer);
        self
    }

    /// True if the command runs something on its own
    #[must_use]
    pub fn is_runnable(&self) -> bool {
        self.executor.is_some()
    }

    /// Current visibility
    #[must_use]
    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// Subcommands not yet registered
    #[must_use]
    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    /// Options not yet registered
    #[must_use]
    pub fn options(&self) -> &[CmdOption] {
        &self.options
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("runnable", &self.executor.is_some())
            .field("visibility", &self.visibility)
            .field("subcommands", &self.subcommands)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// A command that ends the session with status 0.
///
/// The host loop stops after the command returns; see
/// [`Context::request_exit`].
pub fn exit_command(name: impl Into<String>, description: impl Into<String>) -> Command {
    Command::leaf(name, description, |_args: &CmdArgs, ctx: &mut Context| {
        ctx.request_exit(0);
        Ok(())
    })
}
