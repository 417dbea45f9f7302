//! Prompt rendering for the interactive loop

use std::borrow::Cow;

use nu_ansi_term::Style;
use reedline::{Prompt, PromptEditMode, PromptHistorySearch};

use super::session::ReplConfig;

/// Static prompt built from [`ReplConfig`]
#[derive(Debug, Clone)]
pub struct PrompterPrompt {
    rendered: String,
}

impl PrompterPrompt {
    /// Create a prompt from the loop settings
    #[must_use]
    pub fn new(config: &ReplConfig) -> Self {
        let rendered = if config.color_output {
            Self::render_colored(&config.prompt)
        } else {
            config.prompt.clone()
        };
        Self { rendered }
    }

    /// Render prompt with bold styling for terminal
    #[must_use]
    pub fn render_colored(text: &str) -> String {
        Style::new().bold().paint(text).to_string()
    }

    /// The text as it will be drawn
    #[must_use]
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl Default for PrompterPrompt {
    fn default() -> Self {
        Self::new(&ReplConfig::default())
    }
}

impl Prompt for PrompterPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.rendered)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("(search) ")
    }
}
