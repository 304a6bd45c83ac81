//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};

use gemmit::ConfigStore;

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a repository with identity configured and one initial commit.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        {
            let mut config = repo.config().expect("Failed to open repo config");
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
            config.set_bool("commit.gpgsign", false).unwrap();
        }
        let test_repo = Self { dir, repo };
        test_repo.write_file("test.txt", "initial\n");
        test_repo.commit_all("initial commit");
        test_repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file in the working tree without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).expect("Failed to write test file");
    }

    /// Stage `name` through the index.
    pub fn stage(&self, name: &str) {
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Commit the current working tree file `test.txt` with git2.
    fn commit_all(&self, message: &str) -> Oid {
        self.stage("test.txt");
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let mut index = self.repo.index().unwrap();
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    pub fn commit_count(&self) -> usize {
        let mut walk = self.repo.revwalk().unwrap();
        walk.push_head().unwrap();
        walk.count()
    }

    pub fn head_message(&self) -> String {
        self.repo
            .head()
            .unwrap()
            .peel_to_commit()
            .unwrap()
            .message()
            .unwrap()
            .trim()
            .to_string()
    }
}

/// Create an executable shell script standing in for the AI CLI.
///
/// The script receives the same arguments as the real binary: `-p <prompt>`.
pub fn create_mock_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Write a config with a single `test` template and return a store for it.
pub fn write_config(dir: &Path, autoconfirm: bool, ai_binary: &Path) -> ConfigStore {
    let path = dir.join("config.json");
    let json = serde_json::json!({
        "templates": { "test": { "prompt": "A test prompt" } },
        "default_template": "test",
        "autoconfirm": autoconfirm,
        "highlight_color": "green",
        "ai_binary": ai_binary.to_string_lossy(),
    });
    fs::write(&path, serde_json::to_string_pretty(&json).unwrap()).unwrap();
    ConfigStore::new(path)
}
