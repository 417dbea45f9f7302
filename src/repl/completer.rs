//! Line editor completion hook
//!
//! Bridges a shared command tree to `reedline`'s completion menu.

use std::sync::Arc;

use reedline::{Completer, Span, Suggestion};

use crate::completer::Completer as CommandTree;
use crate::tokenizer::last_word_start;

/// Tab completion backed by a registered command tree
#[derive(Debug, Clone)]
pub struct TreeCompleter {
    tree: Arc<CommandTree>,
}

impl TreeCompleter {
    /// Create a completer over a shared tree
    #[must_use]
    pub fn new(tree: Arc<CommandTree>) -> Self {
        Self { tree }
    }
}

/// Byte range of the word under the cursor, as the tokenizer sees it: an
/// open quoted word is replaced from its opening `"`.
fn word_span(input: &str, pos: usize) -> Span {
    Span::new(last_word_start(input), pos)
}

impl Completer for TreeCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        // Get the part of the line up to cursor
        let input = line.get(..pos).unwrap_or(line);
        let span = word_span(input, input.len());

        self.tree
            .complete(input)
            .into_iter()
            .map(|s| Suggestion {
                value: s.text,
                description: (!s.description.is_empty()).then_some(s.description),
                span,
                append_whitespace: true,
                ..Suggestion::default()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CmdArgs;
    use crate::command::Command;
    use crate::context::Context;
    use crate::option::{CmdOption, FixedValues};
    use crate::tokenizer::split_command_words;
    use crate::Result;

    fn noop(_: &CmdArgs, _: &mut Context) -> Result<()> {
        Ok(())
    }

    fn completer() -> TreeCompleter {
        let mut tree = CommandTree::new();
        tree.register_commands([
            Command::leaf("hello", "print hello world", noop),
            Command::leaf("greet", "say a greeting", noop).with_option(
                CmdOption::new("--name", "your name")
                    .with_completer(FixedValues::from_texts(["alice", "bob", "mary jane"])),
            ),
            Command::new("say", ""),
        ])
        .unwrap();
        TreeCompleter::new(Arc::new(tree))
    }

    #[test]
    fn test_word_span() {
        assert_eq!(word_span("greet --na", 10), Span::new(6, 10));
        assert_eq!(word_span("he", 2), Span::new(0, 2));
        assert_eq!(word_span("greet ", 6), Span::new(6, 6));
        assert_eq!(word_span("greet --name \"mary j", 20), Span::new(13, 20));
    }

    #[test]
    fn test_complete_first_word() {
        let mut completer = completer();
        let out = completer.complete("he", 2);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "hello");
        assert_eq!(out[0].description.as_deref(), Some("print hello world"));
        assert_eq!(out[0].span, Span::new(0, 2));
        assert!(out[0].append_whitespace);
    }

    #[test]
    fn test_complete_empty_description_is_none() {
        let mut completer = completer();
        let out = completer.complete("sa", 2);
        assert_eq!(out[0].value, "say");
        assert!(out[0].description.is_none());
    }

    #[test]
    fn test_complete_option_value_span() {
        let mut completer = completer();
        let line = "greet --name b";
        let out = completer.complete(line, line.len());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "bob");
        assert_eq!(out[0].span, Span::new(13, 14));
    }

    #[test]
    fn test_complete_quoted_value_replaces_whole_word() {
        let mut completer = completer();
        let line = "greet --name \"mary j";
        let out = completer.complete(line, line.len());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "\"mary jane\"");

        let span = out[0].span;
        let applied = format!("{}{}{}", &line[..span.start], out[0].value, &line[span.end..]);
        assert_eq!(applied, "greet --name \"mary jane\"");
        assert_eq!(
            split_command_words(&applied),
            vec!["greet", "--name", "mary jane"]
        );
    }

    #[test]
    fn test_complete_uses_text_before_cursor() {
        let mut completer = completer();
        let out = completer.complete("gr trailing", 2);
        assert_eq!(out[0].value, "greet");
        assert_eq!(out[0].span, Span::new(0, 2));
    }
}
