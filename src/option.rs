//! Named command options and their value completion.

use std::fmt;
use std::sync::Arc;

use crate::suggestion::Suggestion;

/// Produces candidate values for an option.
///
/// Receives the option name and every token typed so far, so completers can
/// depend on earlier arguments.
pub trait ValueCompleter: Send + Sync {
    /// Candidate values; the caller filters them by the typed prefix
    fn complete(&self, option: &str, args: &[String]) -> Vec<Suggestion>;
}

impl<F> ValueCompleter for F
where
    F: Fn(&str, &[String]) -> Vec<Suggestion> + Send + Sync,
{
    fn complete(&self, option: &str, args: &[String]) -> Vec<Suggestion> {
        self(option, args)
    }
}

/// A fixed list of values, independent of context.
#[derive(Debug, Clone, Default)]
pub struct FixedValues(pub Vec<Suggestion>);

impl FixedValues {
    /// Values without descriptions
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(texts.into_iter().map(Suggestion::text).collect())
    }
}

impl ValueCompleter for FixedValues {
    fn complete(&self, _option: &str, _args: &[String]) -> Vec<Suggestion> {
        self.0.clone()
    }
}

/// An option accepted by a command, e.g. `--name <value>`.
#[derive(Clone)]
pub struct CmdOption {
    /// Option name as typed, including any dashes
    pub name: String,
    /// Help text shown in suggestions
    pub description: String,
    /// Whether the option may be given more than once
    pub repeatable: bool,
    completer: Option<Arc<dyn ValueCompleter>>,
}

impl CmdOption {
    /// Create a one-shot option without value completion
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            repeatable: false,
            completer: None,
        }
    }

    /// Allow the option to appear more than once
    #[must_use]
    pub fn repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    /// Attach a value completer
    #[must_use]
    pub fn with_completer(mut self, completer: impl ValueCompleter + 'static) -> Self {
        self.completer = Some(Arc::new(completer));
        self
    }

    /// The value completer, if any
    #[must_use]
    pub fn completer(&self) -> Option<&dyn ValueCompleter> {
        self.completer.as_deref()
    }

    pub(crate) fn suggestion(&self) -> Suggestion {
        Suggestion::new(self.name.clone(), self.description.clone())
    }
}

impl fmt::Debug for CmdOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmdOption")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("repeatable", &self.repeatable)
            .field("completer", &self.completer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_defaults() {
        let opt = CmdOption::new("--name", "your name");
        assert!(!opt.repeatable);
        assert!(opt.completer().is_none());
    }

    #[test]
    fn test_closure_completer_sees_context() {
        let opt = CmdOption::new("--name", "your name").with_completer(
            |option: &str, args: &[String]| vec![Suggestion::text(format!("{option}:{}", args.len()))],
        );
        let args = vec!["greet".to_string(), "--name".to_string(), String::new()];
        let values = opt.completer().unwrap().complete("--name", &args);
        assert_eq!(values[0].text, "--name:3");
    }

    #[test]
    fn test_fixed_values() {
        let values = FixedValues::from_texts(["alice", "bob"]);
        let out = values.complete("--name", &[]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].text, "bob");
    }

    #[test]
    fn test_debug_hides_completer() {
        let opt = CmdOption::new("--tag", "a tag")
            .repeatable(true)
            .with_completer(FixedValues::default());
        let debug = format!("{opt:?}");
        assert!(debug.contains("CmdOption"));
        assert!(debug.contains("completer: true"));
    }
}
