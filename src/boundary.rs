use std::fmt;

/// Non-fatal conditions hit while resolving a version.
/// These are reported to the operator but never change the exit code.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// History is truncated, so commit counts would be wrong. The suffix is
    /// dropped and the plain base version is used.
    ShallowHistory { base: String },
    /// A history query could not be answered; the resolver continues with an
    /// unknown count.
    HistoryUnavailable { query: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::ShallowHistory { base } => {
                write!(
                    f,
                    "Can't calculate a good version number in a shallow repo. \
                     Did you fetch with `git clone --depth=1`? \
                     Using simple version number ({})",
                    base
                )
            }
            BoundaryWarning::HistoryUnavailable { query } => {
                write!(f, "History query failed: {}", query)
            }
        }
    }
}
