//! The accept / edit / regenerate / reject loop.

use tracing::debug;

use crate::ai::{AiClient, AiExecutor};
use crate::error::{GemmitError, ReviewError};

use super::choice::Choice;

/// How a review session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    Accepted(String),
    Aborted,
}

/// User interaction needed by [`review`].
///
/// This abstraction allows scripting the user in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ReviewUi {
    /// Show a freshly generated message.
    fn present(&self, message: &str);

    /// Ask what to do with it and return the raw answer.
    fn ask(&self) -> Result<String, ReviewError>;

    /// Tell the user an answer was not understood.
    fn unrecognised(&self, answer: &str);

    /// Announce that a new message is being generated.
    fn regenerating(&self);

    /// Let the user edit `message` and return the result, trimmed.
    fn edit(&self, message: &str) -> Result<String, ReviewError>;
}

/// Run one review session for `prompt`.
///
/// The prompt is fixed for the whole session; only the generated message
/// changes between regenerations. Generation errors end the session.
pub async fn review<E, U>(
    prompt: &str,
    client: &AiClient<E>,
    ui: &U,
) -> Result<ReviewOutcome, GemmitError>
where
    E: AiExecutor,
    U: ReviewUi + ?Sized,
{
    loop {
        let message = client.generate(prompt).await?;
        ui.present(&message);

        let choice = loop {
            let answer = ui.ask()?;
            match Choice::parse(&answer) {
                Some(choice) => break choice,
                None => ui.unrecognised(&answer),
            }
        };
        debug!("Review choice: {:?}", choice);

        match choice {
            Choice::Yes => return Ok(ReviewOutcome::Accepted(message)),
            Choice::Edit => return Ok(ReviewOutcome::Accepted(ui.edit(&message)?)),
            Choice::Regenerate => ui.regenerating(),
            Choice::No => return Ok(ReviewOutcome::Aborted),
        }
    }
}
