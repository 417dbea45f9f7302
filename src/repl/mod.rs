//! Interactive loop on top of `reedline`
//!
//! The line editor owns keystrokes, history and rendering; this module only
//! wires its completion hook and its submitted lines to a command tree.
//! Piped (non-terminal) stdin is processed line by line without an editor.

mod completer;
mod prompt;
mod session;

use std::io::{BufRead, IsTerminal};
use std::process::ExitCode;

pub use completer::TreeCompleter;
pub use prompt::PrompterPrompt;
use reedline::{
    default_emacs_keybindings, ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers,
    MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal,
};
pub use session::{ReplConfig, ReplSession};
use tracing::debug;

use crate::{Error, Result};

const COMPLETION_MENU: &str = "completion_menu";

/// Run the loop until EOF, Ctrl-D, or a command requests exit.
///
/// Uses the line editor when stdin is a terminal.
///
/// # Errors
///
/// Returns an error if the line editor or its history file cannot be set up,
/// or if reading input fails.
pub fn run(session: &mut ReplSession, config: &ReplConfig) -> Result<ExitCode> {
    if std::io::stdin().is_terminal() {
        run_interactive(session, config)
    } else {
        run_non_interactive(session, std::io::stdin().lock())
    }
}

/// Run the loop in interactive mode with reedline
fn run_interactive(session: &mut ReplSession, config: &ReplConfig) -> Result<ExitCode> {
    let mut line_editor = create_editor(session, config)?;
    let prompt = PrompterPrompt::new(config);

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                if !session.handle_line(&line) {
                    break;
                }
            }
            Ok(Signal::CtrlC) => {
                println!("^C");
            }
            Ok(Signal::CtrlD) => {
                debug!("end of input");
                break;
            }
            #[allow(unreachable_patterns)]
            Ok(_) => {}
            Err(e) => return Err(Error::io_no_path(e)),
        }
    }

    Ok(ExitCode::from(exit_status(session)))
}

/// Run the loop over any line source (piped stdin, scripts, tests)
///
/// # Errors
///
/// Returns an error if reading a line fails.
pub fn run_non_interactive(session: &mut ReplSession, input: impl BufRead) -> Result<ExitCode> {
    for line in input.lines() {
        let line = line.map_err(Error::io_no_path)?;
        if !session.handle_line(&line) {
            break;
        }
    }
    Ok(ExitCode::from(exit_status(session)))
}

fn exit_status(session: &ReplSession) -> u8 {
    session.context().exit_status().unwrap_or(0)
}

fn create_editor(session: &ReplSession, config: &ReplConfig) -> Result<Reedline> {
    let completer = Box::new(TreeCompleter::new(session.tree()));
    let menu = Box::new(ColumnarMenu::default().with_name(COMPLETION_MENU));

    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );

    let mut editor = Reedline::create()
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(menu))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    if let Some(path) = &config.history_file {
        let history = FileBackedHistory::with_file(config.history_size, path.clone())
            .map_err(|e| Error::io(std::io::Error::other(e.to_string()), path))?;
        editor = editor.with_history(Box::new(history));
    }

    Ok(editor)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
