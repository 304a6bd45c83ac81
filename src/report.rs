//! Fatal error reporting for the CLI.
//!
//! Errors go to stderr as `Error: <summary>` followed by at most
//! [`MAX_DETAIL_LINES`] lines of underlying detail.

use std::process::ExitCode;

use crate::error::GemmitError;
use crate::style;

/// Lines of detail kept before the `[...]` marker.
pub const MAX_DETAIL_LINES: usize = 5;

const ELISION_MARKER: &str = "[...]";

/// Keep the first `max_lines` lines of `detail`, appending an elision marker
/// when anything was dropped.
pub fn truncate_detail(detail: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = detail.split('\n').collect();
    if lines.len() > max_lines {
        format!("{}\n{}", lines[..max_lines].join("\n"), ELISION_MARKER)
    } else {
        detail.to_string()
    }
}

/// Render the full stderr report for a hard error.
pub fn render(err: &GemmitError) -> String {
    let mut out = format!("Error: {}", err.summary());
    if let Some(detail) = err.detail().filter(|d| !d.is_empty()) {
        out.push_str("\nDetails:\n");
        out.push_str(&truncate_detail(&detail, MAX_DETAIL_LINES));
    }
    out
}

/// Print the outcome of a failed invocation and return the exit status.
pub fn report(err: &GemmitError) -> ExitCode {
    match err {
        GemmitError::NoStagedChanges => println!("{}", err),
        GemmitError::UserAborted => eprintln!("{}", style::error(&err.to_string())),
        _ => eprintln!("{}", render(err)),
    }
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AiError, ConfigError, GitError};

    #[test]
    fn test_truncate_short_detail_unchanged() {
        let detail = "one\ntwo\nthree";
        assert_eq!(truncate_detail(detail, 5), detail);
    }

    #[test]
    fn test_truncate_exactly_max_lines_unchanged() {
        let detail = "1\n2\n3\n4\n5";
        assert_eq!(truncate_detail(detail, 5), detail);
    }

    #[test]
    fn test_truncate_long_detail_adds_marker() {
        let detail = "1\n2\n3\n4\n5\n6\n7";
        assert_eq!(truncate_detail(detail, 5), "1\n2\n3\n4\n5\n[...]");
    }

    #[test]
    fn test_render_without_detail() {
        let err = GemmitError::from(ConfigError::TemplateNotFound("nope".into()));
        assert_eq!(render(&err), "Error: Template 'nope' not found in config.");
    }

    #[test]
    fn test_render_with_truncated_detail() {
        let stderr = (1..=8)
            .map(|i| format!("Error: 429 line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let err = GemmitError::from(AiError::QuotaExceeded { stderr });
        let rendered = render(&err);

        assert!(rendered.starts_with("Error: API quota exceeded after maximum retries.\nDetails:\n"));
        assert!(rendered.contains("line 5"));
        assert!(!rendered.contains("line 6"));
        assert!(rendered.ends_with("[...]"));
    }

    #[test]
    fn test_render_git_failure_includes_stderr() {
        let err = GemmitError::from(GitError::CommandFailed {
            operation: "diff --cached".into(),
            stderr: "fatal: not a git repository".into(),
        });
        assert_eq!(
            render(&err),
            "Error: git diff --cached failed\nDetails:\nfatal: not a git repository"
        );
    }
}
