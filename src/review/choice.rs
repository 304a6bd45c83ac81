//! Answers accepted at the review prompt.

/// What the user wants to do with the presented message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    Edit,
    Regenerate,
    No,
}

impl Choice {
    /// Parse an answer. Empty input means Yes; anything unrecognised is `None`.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => Some(Choice::Yes),
            "e" | "edit" => Some(Choice::Edit),
            "r" | "regenerate" => Some(Choice::Regenerate),
            "n" | "no" => Some(Choice::No),
            _ => None,
        }
    }
}
