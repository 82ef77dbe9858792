use crate::domain::BaseVersion;
use std::fmt;

/// A commit count reported by the history backend.
///
/// A failing history query yields a textual marker instead of an integer.
/// The marker is carried verbatim into the rendered suffix rather than being
/// coerced to zero, so a degraded build is distinguishable from a build that
/// sits exactly on a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Count {
    Known(u64),
    Unknown(String),
}

impl Count {
    pub fn is_zero(&self) -> bool {
        matches!(self, Count::Known(0))
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Known(n) => write!(f, "{}", n),
            Count::Unknown(marker) => write!(f, "{}", marker),
        }
    }
}

/// Version suffix decided by the resolver.
///
/// `Empty` marks an exact tagged release. `Post` carries commits on the
/// release branch since the reference point, `Dev` commits on any other
/// branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suffix {
    Empty,
    Post(Count),
    Dev(Count),
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suffix::Empty => Ok(()),
            Suffix::Post(n) => write!(f, "post{}", n),
            Suffix::Dev(n) => write!(f, "dev{}", n),
        }
    }
}

/// The final version value written to the version file: base plus suffix,
/// rendered as a single string with no separator (e.g. "2024.1.0post3").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub base: BaseVersion,
    pub suffix: Suffix,
}

impl ResolvedVersion {
    pub fn new(base: BaseVersion, suffix: Suffix) -> Self {
        ResolvedVersion { base, suffix }
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.suffix)
    }
}
