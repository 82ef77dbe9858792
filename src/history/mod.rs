//! History query abstraction layer
//!
//! This module provides a trait-based abstraction over the version-control
//! history questions the resolver asks, allowing for a real git-backed
//! implementation and a mock implementation for testing.
//!
//! Failure handling is baked into each operation rather than surfaced as
//! errors: a query that cannot be answered returns a conservative default
//! (`true` for shallowness, an empty string or sequence, an `Unknown` count).
//! Only opening the repository itself is fallible; everything after that
//! degrades instead of failing.

pub mod mock;
pub mod repository;

pub use mock::MockHistory;
pub use repository::Git2History;

use crate::domain::Count;
use std::path::Path;

/// Questions the resolver asks of the version-control history.
///
/// Implementations must be `Send + Sync`. The two implementations are
/// [Git2History](repository::Git2History), backed by the `git2` crate, and
/// [MockHistory](mock::MockHistory), which returns canned facts for tests.
pub trait HistoryQuery: Send + Sync {
    /// Whether the repository has truncated history (e.g. `--depth=1` clone).
    ///
    /// Returns `true` on any error: an unanswerable query is treated the same
    /// as unreliable history.
    fn is_shallow(&self) -> bool;

    /// Name of the currently checked-out branch, or an empty string on error.
    fn current_branch(&self) -> String;

    /// All tag names, newest version first. Empty on error.
    fn list_tags(&self) -> Vec<String>;

    /// Full hash of the last commit touching `path`, or the last commit in
    /// the repository when `path` is `None`. `None` if there is no such
    /// commit or the query fails.
    fn last_commit(&self, path: Option<&Path>) -> Option<String>;

    /// Number of commits between `reference` (a tag or commit id) and HEAD.
    ///
    /// Returns [Count::Unknown] when the reference cannot be resolved or the
    /// walk fails; the marker text is propagated verbatim by callers.
    fn commit_count_since(&self, reference: &str) -> Count;
}
