//! Quote-aware tokenizer
//!
//! Splits an input line on single spaces. A fragment opening with `"` starts
//! a quoted token that swallows the following fragments until one closes
//! with `"`. A quote preceded by a backslash does not close the token.

/// Split a raw input line into command words.
///
/// Runs of spaces and a trailing space produce empty words; a trailing empty
/// word tells the completer the user has started a new word. An unterminated
/// quote absorbs the rest of the line.
#[must_use]
pub fn split_command_words(input: &str) -> Vec<String> {
    let mut output: Vec<String> = Vec::new();
    let mut in_quotes = false;

    for part in input.split(' ') {
        if in_quotes {
            let (fragment, closed) = strip_closing_quote(part);
            if let Some(last) = output.last_mut() {
                last.push(' ');
                last.push_str(fragment);
            }
            in_quotes = !closed;
        } else if let Some(rest) = part.strip_prefix('"') {
            let (fragment, closed) = strip_closing_quote(rest);
            output.push(fragment.to_string());
            in_quotes = !closed;
        } else {
            output.push(part.to_string());
        }
    }

    output
}

/// Byte offset where the last word of `input` begins.
///
/// Follows the same rules as [`split_command_words`], so for a word opened
/// with `"` the offset points at the quote itself.
#[must_use]
pub fn last_word_start(input: &str) -> usize {
    let mut start = 0;
    let mut offset = 0;
    let mut in_quotes = false;

    for part in input.split(' ') {
        if in_quotes {
            in_quotes = !strip_closing_quote(part).1;
        } else {
            start = offset;
            if let Some(rest) = part.strip_prefix('"') {
                in_quotes = !strip_closing_quote(rest).1;
            }
        }
        offset += part.len() + 1;
    }

    start
}

fn strip_closing_quote(fragment: &str) -> (&str, bool) {
    if fragment.ends_with('"') && !fragment.ends_with("\\\"") {
        (&fragment[..fragment.len() - 1], true)
    } else {
        (fragment, false)
    }
}
