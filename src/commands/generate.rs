//! The default flow: stage, generate, review, commit, push.

use tracing::{debug, info};

use crate::ai::{AiClient, AiExecutor};
use crate::config::Config;
use crate::error::GemmitError;
use crate::git::{Git, PushTarget};
use crate::review::{ReviewOutcome, ReviewUi, review};

/// Options for a single generate run, taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Template name; falls back to the configured default.
    pub template: Option<String>,
    /// Stage all changes before reading the diff.
    pub add: bool,
    /// Push after committing.
    pub push: bool,
    /// Skip review for this run.
    pub yes: bool,
    /// Print the message instead of committing.
    pub dry_run: bool,
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Committed {
        message: String,
        pushed: Option<PushTarget>,
    },
    /// Dry run: the message that would have been committed.
    Printed(String),
}

/// Run the generate flow against `git`.
///
/// Nothing is committed unless a message was accepted, and nothing is pushed
/// unless the commit succeeded. Errors stop the flow at the failing step.
pub async fn run_generate<E, U>(
    config: &Config,
    options: &GenerateOptions,
    git: &Git,
    client: &AiClient<E>,
    ui: &U,
) -> Result<GenerateOutcome, GemmitError>
where
    E: AiExecutor,
    U: ReviewUi + ?Sized,
{
    let template = config.resolve_template(options.template.as_deref())?;
    debug!("Using template '{}'", template.name);

    if options.add {
        git.stage_all()?;
    }

    let diff = git.staged_diff()?;
    if diff.trim().is_empty() {
        return Err(GemmitError::NoStagedChanges);
    }

    let prompt = template.build_prompt(&diff);

    let message = if options.yes || config.autoconfirm {
        info!("Skipping review");
        client.generate(&prompt).await?
    } else {
        match review(&prompt, client, ui).await? {
            ReviewOutcome::Accepted(message) => message,
            ReviewOutcome::Aborted => return Err(GemmitError::UserAborted),
        }
    };

    if options.dry_run {
        return Ok(GenerateOutcome::Printed(message));
    }

    git.commit(&message)?;

    let pushed = if options.push {
        Some(git.push()?)
    } else {
        None
    };

    Ok(GenerateOutcome::Committed { message, pushed })
}
