use crate::domain::Count;
use crate::history::HistoryQuery;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock history for testing without an actual git repository.
///
/// Every query answers from canned facts; anything not configured falls back
/// to the same conservative defaults a failing real query would produce.
pub struct MockHistory {
    shallow: bool,
    branch: String,
    tags: Vec<String>,
    head_commit: Option<String>,
    path_commits: HashMap<PathBuf, String>,
    counts: HashMap<String, Count>,
}

impl MockHistory {
    /// Create an empty mock: not shallow, no branch, no tags, no commits.
    pub fn new() -> Self {
        MockHistory {
            shallow: false,
            branch: String::new(),
            tags: Vec::new(),
            head_commit: None,
            path_commits: HashMap::new(),
            counts: HashMap::new(),
        }
    }

    pub fn set_shallow(&mut self, shallow: bool) {
        self.shallow = shallow;
    }

    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    /// Add a tag. Tags are reported in insertion order, so insert newest
    /// first to mirror the real backend's ordering.
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    pub fn set_head_commit(&mut self, sha: impl Into<String>) {
        self.head_commit = Some(sha.into());
    }

    /// Record the last commit that touched a path.
    pub fn set_path_commit(&mut self, path: impl Into<PathBuf>, sha: impl Into<String>) {
        self.path_commits.insert(path.into(), sha.into());
    }

    /// Record the commit count since a reference (tag name or commit id).
    pub fn set_count_since(&mut self, reference: impl Into<String>, count: Count) {
        self.counts.insert(reference.into(), count);
    }
}

impl Default for MockHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryQuery for MockHistory {
    fn is_shallow(&self) -> bool {
        self.shallow
    }

    fn current_branch(&self) -> String {
        self.branch.clone()
    }

    fn list_tags(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn last_commit(&self, path: Option<&Path>) -> Option<String> {
        match path {
            None => self.head_commit.clone(),
            Some(path) => self.path_commits.get(path).cloned(),
        }
    }

    fn commit_count_since(&self, reference: &str) -> Count {
        self.counts
            .get(reference)
            .cloned()
            .unwrap_or_else(|| Count::Unknown("unknown".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_history_defaults() {
        let history = MockHistory::default();
        assert!(!history.is_shallow());
        assert_eq!(history.current_branch(), "");
        assert!(history.list_tags().is_empty());
        assert_eq!(history.last_commit(None), None);
    }

    #[test]
    fn test_mock_history_canned_facts() {
        let mut history = MockHistory::new();
        history.set_branch("release");
        history.add_tag("2024.1.0");
        history.set_head_commit("abc123");
        history.set_count_since("2024.1.0", Count::Known(3));

        assert_eq!(history.current_branch(), "release");
        assert_eq!(history.list_tags(), vec!["2024.1.0".to_string()]);
        assert_eq!(history.last_commit(None), Some("abc123".to_string()));
        assert_eq!(history.commit_count_since("2024.1.0"), Count::Known(3));
    }

    #[test]
    fn test_mock_history_path_commit() {
        let mut history = MockHistory::new();
        history.set_path_commit("VERSION", "def456");

        assert_eq!(
            history.last_commit(Some(Path::new("VERSION"))),
            Some("def456".to_string())
        );
        assert_eq!(history.last_commit(Some(Path::new("OTHER"))), None);
    }

    #[test]
    fn test_mock_history_unconfigured_count_is_unknown() {
        let history = MockHistory::new();
        assert_eq!(
            history.commit_count_since("v9.9.9"),
            Count::Unknown("unknown".to_string())
        );
    }
}
