//! Repository operations used by the commit flow.
//!
//! All operations shell out to the system `git` binary, inheriting the user's
//! git config, hooks, SSH agent, and credential store.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GitError;

use super::command::{run_git, run_git_raw};

/// Where a push went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    pub branch: String,
    /// `true` when pushed with `-u origin <branch>`, `false` for a plain `git push`.
    pub set_upstream: bool,
}

/// Handle to the repository gemmit operates on.
#[derive(Debug, Clone, Default)]
pub struct Git {
    workdir: Option<PathBuf>,
}

impl Git {
    /// Operate on the repository containing the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Operate on the repository at `path`.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(path.into()),
        }
    }

    fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    /// `git diff --cached`. An empty string means nothing is staged.
    pub fn staged_diff(&self) -> Result<String, GitError> {
        run_git(self.workdir(), &["diff", "--cached"], "diff --cached")
    }

    /// `git add .`
    pub fn stage_all(&self) -> Result<(), GitError> {
        run_git(self.workdir(), &["add", "."], "add")?;
        Ok(())
    }

    /// `git commit -m <message>`
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        run_git(self.workdir(), &["commit", "-m", message], "commit")?;
        Ok(())
    }

    /// `git rev-parse --abbrev-ref HEAD`
    pub fn current_branch(&self) -> Result<String, GitError> {
        let out = run_git(
            self.workdir(),
            &["rev-parse", "--abbrev-ref", "HEAD"],
            "rev-parse",
        )?;
        Ok(out.trim().to_string())
    }

    /// URL of the `origin` remote, or an empty string when there is none.
    pub fn origin_url(&self) -> Result<String, GitError> {
        let output = run_git_raw(
            self.workdir(),
            &["remote", "get-url", "origin"],
            "remote get-url",
        )?;
        if !output.status.success() {
            debug!("No origin remote configured");
            return Ok(String::new());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Push the current branch.
    ///
    /// Uses `git push -u origin <branch>` when `origin` exists, otherwise a
    /// plain `git push` that relies on the branch's configured upstream.
    pub fn push(&self) -> Result<PushTarget, GitError> {
        let branch = self.current_branch()?;
        let set_upstream = !self.origin_url()?.is_empty();

        if set_upstream {
            run_git(self.workdir(), &["push", "-u", "origin", &branch], "push")?;
        } else {
            run_git(self.workdir(), &["push"], "push")?;
        }

        Ok(PushTarget {
            branch,
            set_upstream,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use git2::{Repository, Signature};

    /// Repository with one commit containing `README.md`.
    fn init_repo() -> (tempfile::TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();

        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@test.com").unwrap();
            config.set_bool("commit.gpgsign", false).unwrap();
        }

        fs::write(dir.path().join("README.md"), "hello\n").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("README.md")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        {
            let tree = repo.find_tree(tree_id).unwrap();
            let sig = Signature::now("Test User", "test@test.com").unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
                .unwrap();
        }

        (dir, repo)
    }

    fn head_message(repo: &Repository) -> String {
        repo.head()
            .unwrap()
            .peel_to_commit()
            .unwrap()
            .message()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_staged_diff_empty_when_clean() {
        let (dir, _repo) = init_repo();
        let git = Git::in_dir(dir.path());
        assert_eq!(git.staged_diff().unwrap(), "");
    }

    #[test]
    fn test_staged_diff_ignores_unstaged_changes() {
        let (dir, _repo) = init_repo();
        fs::write(dir.path().join("README.md"), "world\n").unwrap();
        let git = Git::in_dir(dir.path());
        assert_eq!(git.staged_diff().unwrap(), "");
    }

    #[test]
    fn test_staged_diff_after_stage_all() {
        let (dir, _repo) = init_repo();
        fs::write(dir.path().join("README.md"), "world\n").unwrap();
        let git = Git::in_dir(dir.path());

        git.stage_all().unwrap();
        let diff = git.staged_diff().unwrap();

        assert!(diff.contains("-hello"));
        assert!(diff.contains("+world"));
    }

    #[test]
    fn test_stage_all_includes_new_files() {
        let (dir, _repo) = init_repo();
        fs::write(dir.path().join("new.txt"), "new\n").unwrap();
        let git = Git::in_dir(dir.path());

        git.stage_all().unwrap();

        assert!(git.staged_diff().unwrap().contains("new.txt"));
    }

    #[test]
    fn test_commit_uses_message() {
        let (dir, repo) = init_repo();
        fs::write(dir.path().join("README.md"), "world\n").unwrap();
        let git = Git::in_dir(dir.path());
        git.stage_all().unwrap();

        git.commit("feat: change greeting").unwrap();

        assert_eq!(head_message(&repo).trim(), "feat: change greeting");
        assert_eq!(git.staged_diff().unwrap(), "");
    }

    #[test]
    fn test_commit_with_nothing_staged_fails() {
        let (dir, _repo) = init_repo();
        let git = Git::in_dir(dir.path());
        assert!(matches!(
            git.commit("chore: nothing"),
            Err(GitError::CommandFailed { .. })
        ));
    }

    #[test]
    fn test_current_branch_matches_head() {
        let (dir, repo) = init_repo();
        let expected = repo.head().unwrap().shorthand().unwrap().to_string();
        let git = Git::in_dir(dir.path());
        assert_eq!(git.current_branch().unwrap(), expected);
    }

    #[test]
    fn test_origin_url_empty_without_remote() {
        let (dir, _repo) = init_repo();
        let git = Git::in_dir(dir.path());
        assert_eq!(git.origin_url().unwrap(), "");
    }

    #[test]
    fn test_origin_url_with_remote() {
        let (dir, repo) = init_repo();
        repo.remote("origin", "https://example.com/team/project.git")
            .unwrap();
        let git = Git::in_dir(dir.path());
        assert_eq!(
            git.origin_url().unwrap(),
            "https://example.com/team/project.git"
        );
    }

    #[test]
    fn test_push_sets_upstream_on_origin() {
        let (dir, repo) = init_repo();
        let remote_dir = tempfile::tempdir().unwrap();
        let bare = Repository::init_bare(remote_dir.path()).unwrap();
        repo.remote("origin", remote_dir.path().to_str().unwrap())
            .unwrap();
        let git = Git::in_dir(dir.path());

        let target = git.push().unwrap();

        assert!(target.set_upstream);
        let pushed = bare
            .find_reference(&format!("refs/heads/{}", target.branch))
            .unwrap();
        assert_eq!(
            pushed.target(),
            repo.head().unwrap().target(),
        );
    }

    #[test]
    fn test_push_without_remote_fails() {
        let (dir, _repo) = init_repo();
        let git = Git::in_dir(dir.path());
        assert!(matches!(
            git.push(),
            Err(GitError::CommandFailed { operation, .. }) if operation == "push"
        ));
    }

    #[test]
    fn test_staged_diff_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let git = Git::in_dir(dir.path());
        assert!(matches!(
            git.staged_diff(),
            Err(GitError::CommandFailed { .. })
        ));
    }
}
