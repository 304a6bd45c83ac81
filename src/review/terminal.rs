//! Interactive terminal implementation of [`ReviewUi`].

use dialoguer::Input;
use owo_colors::AnsiColors;

use crate::error::ReviewError;
use crate::style;

use super::editor::{edit_in_editor, editor_command};
use super::session::ReviewUi;

const HEADER: &str = "--- Generated Commit Message ---";
const RULE: &str = "--------------------------------";
const QUESTION: &str = "Use this message? [Y]es, [E]dit, [R]egenerate, [N]o";

/// Review prompts on the controlling terminal.
pub struct TerminalUi {
    color: AnsiColors,
}

impl TerminalUi {
    /// Build a UI that highlights messages in the configured color name.
    pub fn new(highlight_color: &str) -> Self {
        Self {
            color: style::highlight_color(highlight_color),
        }
    }
}

/// The framed message exactly as shown to the user, without color.
pub fn frame_message(message: &str) -> String {
    format!("{HEADER}\n\n{message}\n\n{RULE}\n")
}

impl ReviewUi for TerminalUi {
    fn present(&self, message: &str) {
        println!("{}", style::highlight(&frame_message(message), self.color));
    }

    fn ask(&self) -> Result<String, ReviewError> {
        Input::<String>::new()
            .with_prompt(QUESTION)
            .allow_empty(true)
            .interact_text()
            .map_err(ReviewError::PromptFailed)
    }

    fn unrecognised(&self, answer: &str) {
        eprintln!("Unrecognised answer '{answer}'. Please enter y, e, r or n.");
    }

    fn regenerating(&self) {
        println!("{}", style::warning("Regenerating..."));
    }

    fn edit(&self, message: &str) -> Result<String, ReviewError> {
        edit_in_editor(message, &editor_command())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_message_layout() {
        let framed = frame_message("feat: add y");
        assert_eq!(
            framed,
            "--- Generated Commit Message ---\n\nfeat: add y\n\n--------------------------------\n"
        );
    }

    #[test]
    fn test_new_resolves_color() {
        assert_eq!(TerminalUi::new("cyan").color, AnsiColors::Cyan);
        assert_eq!(TerminalUi::new("no-such-color").color, AnsiColors::Green);
    }
}
