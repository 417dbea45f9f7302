//! REPL session state
//!
//! Holds the registered command tree next to the mutable [`Context`], and
//! turns submitted lines into dispatches.

use std::path::PathBuf;
use std::sync::Arc;

use crate::completer::Completer;
use crate::context::Context;
use crate::suggestion::Suggestion;

/// Settings for the interactive loop
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Text shown before the cursor
    pub prompt: String,
    /// File backing the line editor history, in-memory when absent
    pub history_file: Option<PathBuf>,
    /// Maximum number of history entries
    pub history_size: usize,
    /// Render the prompt with ANSI styling
    pub color_output: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            history_file: None,
            history_size: 1000,
            color_output: true,
        }
    }
}

impl ReplConfig {
    /// Set the prompt text
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Persist history to `path`
    #[must_use]
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }

    /// Set history capacity
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }

    /// Enable/disable color output
    #[must_use]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color_output = enabled;
        self
    }
}

/// A running session: the immutable tree plus its mutable context.
#[derive(Debug)]
pub struct ReplSession {
    tree: Arc<Completer>,
    context: Context,
}

impl ReplSession {
    /// Create a session over a registered tree
    #[must_use]
    pub fn new(tree: Completer, context: Context) -> Self {
        Self {
            tree: Arc::new(tree),
            context,
        }
    }

    /// Shared handle to the tree, for the line editor's completion hook
    #[must_use]
    pub fn tree(&self) -> Arc<Completer> {
        Arc::clone(&self.tree)
    }

    /// Session context
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Mutable session context
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Run one submitted line as typed. Blank lines are ignored.
    ///
    /// Returns false once a command asked the loop to stop.
    pub fn handle_line(&mut self, line: &str) -> bool {
        if !line.trim().is_empty() {
            self.tree.execute(line, &mut self.context);
        }
        !self.context.should_exit()
    }

    /// Suggestions for the text before the cursor
    #[must_use]
    pub fn complete(&self, text_before_cursor: &str) -> Vec<Suggestion> {
        self.tree.complete(text_before_cursor)
    }

    /// Consume the session, returning its context
    #[must_use]
    pub fn into_context(self) -> Context {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CmdArgs;
    use crate::command::{exit_command, Command};
    use crate::Result;

    fn session() -> ReplSession {
        let mut tree = Completer::new();
        tree.register_commands([
            Command::leaf("set", "set a key", |args: &CmdArgs, ctx: &mut Context| -> Result<()> {
                ctx.config.set(args.get_value("_", 1)?, args.get_value("_", 2)?);
                Ok(())
            }),
            exit_command("exit", "exit the application"),
        ])
        .unwrap();
        ReplSession::new(tree, Context::new())
    }

    // ReplConfig tests
    #[test]
    fn test_repl_config_default() {
        let config = ReplConfig::default();
        assert_eq!(config.prompt, ">>> ");
        assert!(config.history_file.is_none());
        assert_eq!(config.history_size, 1000);
        assert!(config.color_output);
    }

    #[test]
    fn test_repl_config_chained() {
        let config = ReplConfig::default()
            .with_prompt("pewpew> ")
            .with_history_file("/tmp/history")
            .with_history_size(50)
            .with_color(false);
        assert_eq!(config.prompt, "pewpew> ");
        assert_eq!(config.history_file, Some(PathBuf::from("/tmp/history")));
        assert_eq!(config.history_size, 50);
        assert!(!config.color_output);
    }

    // ReplSession tests
    #[test]
    fn test_session_handle_line_runs_command() {
        let mut session = session();
        assert!(session.handle_line("set user alice"));
        assert_eq!(session.context().config.key("user"), "alice");
    }

    #[test]
    fn test_session_keeps_spaces_in_open_quote() {
        let mut session = session();
        assert!(session.handle_line("set motd \"hi there  "));
        assert_eq!(session.context().config.key("motd"), "hi there  ");
    }

    #[test]
    fn test_session_blank_line_is_ignored() {
        let mut session = session();
        assert!(session.handle_line("   "));
        assert!(session.context().config.is_empty());
    }

    #[test]
    fn test_session_unknown_command_keeps_running() {
        let mut session = session();
        assert!(session.handle_line("frobnicate"));
    }

    #[test]
    fn test_session_exit_stops_loop() {
        let mut session = session();
        assert!(!session.handle_line("exit"));
        assert_eq!(session.into_context().exit_status(), Some(0));
    }

    #[test]
    fn test_session_complete() {
        let session = session();
        let texts: Vec<String> = session.complete("e").into_iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["exit"]);
    }

    #[test]
    fn test_session_tree_is_shared() {
        let session = session();
        let tree = session.tree();
        assert_eq!(Arc::strong_count(&tree), 2);
    }
}
