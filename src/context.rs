//! Mutable per-session state handed to executors.

use crate::config::Config;

/// State shared by all commands of one session.
///
/// The command tree itself is immutable once registered; anything a command
/// needs to change lives here.
#[derive(Debug, Default)]
pub struct Context {
    /// Persisted key/value state
    pub config: Config,
    exit_status: Option<u8>,
}

impl Context {
    /// Create a context with an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context around an existing store
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            exit_status: None,
        }
    }

    /// Ask the host loop to stop after the current command
    pub fn request_exit(&mut self, status: u8) {
        self.exit_status = Some(status);
    }

    /// Exit status requested by a command, if any
    #[must_use]
    pub fn exit_status(&self) -> Option<u8> {
        self.exit_status
    }

    /// True once a command asked to leave the loop
    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.exit_status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_keeps_running() {
        let ctx = Context::new();
        assert!(!ctx.should_exit());
        assert!(ctx.config.is_empty());
    }

    #[test]
    fn test_request_exit() {
        let mut ctx = Context::new();
        ctx.request_exit(0);
        assert!(ctx.should_exit());
        assert_eq!(ctx.exit_status(), Some(0));
    }

    #[test]
    fn test_with_config() {
        let mut config = Config::new();
        config.set("user", "alice");
        let ctx = Context::with_config(config);
        assert_eq!(ctx.config.key("user"), "alice");
    }
}
