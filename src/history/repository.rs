use crate::domain::Count;
use crate::error::Result;
use crate::history::HistoryQuery;
use git2::{Commit, DiffOptions, Repository};
use std::cmp::Ordering;
use std::path::Path;

/// Marker used when a count query cannot be answered. Propagated verbatim
/// into the rendered suffix by the resolver.
const UNKNOWN_COUNT: &str = "unknown";

/// Real history backend on top of git2.
pub struct Git2History {
    repo: Repository,
}

impl Git2History {
    /// Open or discover the git repository at or above `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(Git2History { repo })
    }

    /// Whether `commit` changed `path` relative to its parents.
    ///
    /// A root commit counts as touching the path if the path exists in its
    /// tree.
    fn commit_touches(&self, commit: &Commit, path: &Path) -> bool {
        let tree = match commit.tree() {
            Ok(tree) => tree,
            Err(_) => return false,
        };

        if commit.parent_count() == 0 {
            return tree.get_path(path).is_ok();
        }

        for parent in commit.parents() {
            let parent_tree = match parent.tree() {
                Ok(tree) => tree,
                Err(_) => continue,
            };

            let mut opts = DiffOptions::new();
            opts.pathspec(path);

            match self
                .repo
                .diff_tree_to_tree(Some(&parent_tree), Some(&tree), Some(&mut opts))
            {
                Ok(diff) if diff.deltas().len() > 0 => return true,
                _ => {}
            }
        }

        false
    }
}

impl HistoryQuery for Git2History {
    fn is_shallow(&self) -> bool {
        self.repo.is_shallow()
    }

    fn current_branch(&self) -> String {
        match self.repo.head() {
            Ok(head) => head.shorthand().unwrap_or("").to_string(),
            Err(_) => String::new(),
        }
    }

    fn list_tags(&self) -> Vec<String> {
        let names = match self.repo.tag_names(None) {
            Ok(names) => names,
            Err(_) => return Vec::new(),
        };

        let mut tags: Vec<String> = names.iter().flatten().map(String::from).collect();

        // Newest version first, matching `git tag --sort=-v:refname`.
        tags.sort_by(|a, b| compare_tag_names(b, a));
        tags
    }

    fn last_commit(&self, path: Option<&Path>) -> Option<String> {
        let mut revwalk = self.repo.revwalk().ok()?;
        revwalk.push_head().ok()?;

        for oid in revwalk.flatten() {
            match path {
                None => return Some(oid.to_string()),
                Some(path) => {
                    let commit = self.repo.find_commit(oid).ok()?;
                    if self.commit_touches(&commit, path) {
                        return Some(oid.to_string());
                    }
                }
            }
        }

        None
    }

    fn commit_count_since(&self, reference: &str) -> Count {
        let since = match self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit().map(|commit| commit.id()))
        {
            Ok(oid) => oid,
            Err(_) => return Count::Unknown(UNKNOWN_COUNT.to_string()),
        };

        let mut revwalk = match self.repo.revwalk() {
            Ok(revwalk) => revwalk,
            Err(_) => return Count::Unknown(UNKNOWN_COUNT.to_string()),
        };

        if revwalk.push_head().is_err() || revwalk.hide(since).is_err() {
            return Count::Unknown(UNKNOWN_COUNT.to_string());
        }

        let mut count: u64 = 0;
        for oid in revwalk {
            if oid.is_err() {
                return Count::Unknown(UNKNOWN_COUNT.to_string());
            }
            count += 1;
        }

        Count::Known(count)
    }
}

/// Version-aware tag ordering: tags that parse as versions sort numerically
/// and ahead of tags that don't; the rest fall back to lexical order.
fn compare_tag_names(a: &str, b: &str) -> Ordering {
    let parse = |tag: &str| semver::Version::parse(tag.trim_start_matches('v'));

    match (parse(a), parse(b)) {
        (Ok(va), Ok(vb)) => va.cmp(&vb),
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Ok(_)) => Ordering::Less,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

// SAFETY: Git2History wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2History {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_discovers_or_fails_gracefully() {
        // Depending on where the tests run, this either finds a repo or not.
        let _ = Git2History::open(".");
    }

    #[test]
    fn test_compare_tag_names_numeric() {
        assert_eq!(compare_tag_names("2024.1.0", "2024.2.0"), Ordering::Less);
        assert_eq!(compare_tag_names("v2.0.0", "v1.9.9"), Ordering::Greater);
    }

    #[test]
    fn test_compare_tag_names_mixed() {
        // Parseable versions sort ahead of arbitrary names.
        assert_eq!(compare_tag_names("1.0.0", "nightly"), Ordering::Greater);
        assert_eq!(compare_tag_names("nightly", "1.0.0"), Ordering::Less);
    }

    #[test]
    fn test_compare_tag_names_lexical_fallback() {
        assert_eq!(compare_tag_names("alpha", "beta"), Ordering::Less);
    }
}
