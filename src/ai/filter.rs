//! Output sanitization for the AI CLI.
//!
//! AI CLIs interleave operational logging (MCP server chatter, debug lines)
//! with the generated text. Those lines are dropped before the output is
//! classified or returned.

/// Substrings in stderr that mark a rate-limit or quota failure.
pub const QUOTA_MARKERS: [&str; 2] = ["429", "Quota exceeded"];

/// Whether `line` starts (after trimming) with one of `markers`.
pub fn is_noise_line<S: AsRef<str>>(line: &str, markers: &[S]) -> bool {
    let trimmed = line.trim();
    markers
        .iter()
        .map(AsRef::as_ref)
        .filter(|marker| !marker.is_empty())
        .any(|marker| trimmed.starts_with(marker))
}

/// Remove noise lines, keeping the remaining lines in order.
pub fn filter_noise<S: AsRef<str>>(text: &str, markers: &[S]) -> String {
    text.lines()
        .filter(|line| !is_noise_line(line, markers))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether filtered stderr signals that the AI service throttled the request.
pub fn is_quota_error(stderr: &str) -> bool {
    QUOTA_MARKERS.iter().any(|marker| stderr.contains(marker))
}
