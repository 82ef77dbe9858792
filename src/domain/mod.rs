//! Domain types: version numbers, suffixes, and commit counts.

pub mod suffix;
pub mod version;

pub use suffix::{Count, ResolvedVersion, Suffix};
pub use version::BaseVersion;
