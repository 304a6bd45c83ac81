//! gemmit - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gemmit::commands::{GenerateOptions, GenerateOutcome, run_generate, run_set_default};
use gemmit::report::report;
use gemmit::{AiClient, ConfigStore, DefaultExecutor, GemmitError, Git, TerminalUi};

/// Generate a commit message from staged changes with an AI CLI.
#[derive(Parser, Debug)]
#[command(name = "gemmit")]
#[command(about = "Generate git commit messages from staged changes using an AI CLI")]
#[command(version)]
struct Cli {
    /// Prompt template to use (defaults to the configured default template)
    template: Option<String>,

    /// Save TEMPLATE as the default template and exit
    #[arg(long, value_name = "TEMPLATE")]
    set_default: Option<String>,

    /// Stage all changes (git add .) before generating
    #[arg(short = 'a', long)]
    add: bool,

    /// Push to the remote after committing
    #[arg(short = 'p', long)]
    push: bool,

    /// Commit the generated message without review
    #[arg(short = 'y', long)]
    yes: bool,

    /// Print the generated message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gemmit=debug")
    } else {
        EnvFilter::try_from_env("GEMMIT_LOG").unwrap_or_else(|_| EnvFilter::new("gemmit=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

async fn run(cli: Cli) -> Result<(), GemmitError> {
    let store = ConfigStore::from_env()?;

    // --set-default never touches git or the AI CLI
    if let Some(name) = cli.set_default.as_deref() {
        return run_set_default(&store, name);
    }

    let config = store.load_or_create()?;

    let options = GenerateOptions {
        template: cli.template,
        add: cli.add,
        push: cli.push,
        yes: cli.yes,
        dry_run: cli.dry_run,
    };

    let git = Git::new();
    let client = AiClient::new(
        DefaultExecutor::new(config.ai_binary.clone()),
        config.noise_markers.clone(),
    );
    let ui = TerminalUi::new(&config.highlight_color);

    match run_generate(&config, &options, &git, &client, &ui).await? {
        GenerateOutcome::Printed(message) => {
            println!("{}", message);
        }
        GenerateOutcome::Committed { message, pushed } => {
            let subject = message.lines().next().unwrap_or_default();
            println!("✓ Committed: {}", subject);
            if let Some(target) = pushed {
                if target.set_upstream {
                    println!("✓ Pushed to origin/{}", target.branch);
                } else {
                    println!("✓ Pushed {}", target.branch);
                }
            }
        }
    }

    Ok(())
}
