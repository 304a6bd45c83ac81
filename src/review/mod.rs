//! Interactive review of generated commit messages.

pub mod choice;
pub mod editor;
pub mod session;
pub mod terminal;

pub use choice::Choice;
pub use editor::{DEFAULT_EDITOR, edit_in_editor, editor_command};
pub use session::{ReviewOutcome, ReviewUi, review};
pub use terminal::TerminalUi;
