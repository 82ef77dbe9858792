use crate::boundary::BoundaryWarning;
use crate::domain::{BaseVersion, Count, Suffix};
use crate::history::HistoryQuery;
use std::path::PathBuf;

/// Outcome of a resolution: the suffix to append plus any non-fatal
/// conditions encountered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub suffix: Suffix,
    pub warnings: Vec<BoundaryWarning>,
}

/// Decides the version suffix for a build from the base version and the
/// repository history.
///
/// The decision table:
/// - shallow history: no suffix, warn that precision is degraded
/// - base is a tag with zero commits since: no suffix (exact release)
/// - base is a tag with commits since: count since the tag
/// - base is not a tag: count since the last commit that changed the
///   version file
/// - on the release branch the count renders as `postN`, elsewhere `devN`
pub struct VersionResolver {
    release_branch: String,
    version_file: PathBuf,
}

impl VersionResolver {
    /// Create a resolver.
    ///
    /// `version_file` is the path of the persisted base-version file,
    /// relative to the repository root; it is the reference point for
    /// counting when the base version has no matching tag.
    pub fn new(release_branch: impl Into<String>, version_file: impl Into<PathBuf>) -> Self {
        VersionResolver {
            release_branch: release_branch.into(),
            version_file: version_file.into(),
        }
    }

    /// Resolve the suffix for `base` against the given history.
    ///
    /// Pure: queries the history snapshot and returns; all operator output
    /// is carried back as [BoundaryWarning]s.
    pub fn resolve(&self, base: &BaseVersion, history: &dyn HistoryQuery) -> Resolution {
        let mut warnings = Vec::new();

        if history.is_shallow() {
            warnings.push(BoundaryWarning::ShallowHistory {
                base: base.to_string(),
            });
            return Resolution {
                suffix: Suffix::Empty,
                warnings,
            };
        }

        let base_str = base.to_string();

        let count = if history.list_tags().contains(&base_str) {
            let count = history.commit_count_since(&base_str);
            if count.is_zero() {
                // Sitting exactly on the release tag.
                return Resolution {
                    suffix: Suffix::Empty,
                    warnings,
                };
            }
            count
        } else {
            // No tag for this base yet: count from the commit that last
            // changed the version file.
            match history.last_commit(Some(&self.version_file)) {
                Some(sha) => history.commit_count_since(&sha),
                None => {
                    warnings.push(BoundaryWarning::HistoryUnavailable {
                        query: format!(
                            "last commit touching {}",
                            self.version_file.display()
                        ),
                    });
                    Count::Unknown("unknown".to_string())
                }
            }
        };

        let suffix = if history.current_branch() == self.release_branch {
            Suffix::Post(count)
        } else {
            Suffix::Dev(count)
        };

        Resolution { suffix, warnings }
    }
}
