use crate::error::{Result, StampError};
use regex::Regex;
use std::fmt;

/// Grammar for a persisted version string: a dotted numeric release part,
/// optionally followed by a build trailer like `dev8`, `.post3` or `rc1`.
const VERSION_PATTERN: &str =
    r"^(?P<release>\d+(?:\.\d+)+)(?:[._-]?(?:dev|post|rc|alpha|beta|a|b)\w*)?$";

/// A normalized version with no build suffix (e.g. "2024.1.0").
///
/// Created by parsing a persisted version string and stripping any trailer,
/// so `2024.1.0.dev8` and `2024.1.0post3` both normalize to `2024.1.0`.
/// Parsing failure is fatal: no safe suffix can be computed from a version
/// that does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVersion {
    release: String,
}

impl BaseVersion {
    /// Parse a raw version string and strip any existing build trailer.
    pub fn parse(raw: &str) -> Result<Self> {
        let pattern = Regex::new(VERSION_PATTERN)
            .map_err(|e| StampError::version(format!("Bad version pattern: {}", e)))?;

        let captures = pattern.captures(raw.trim()).ok_or_else(|| {
            StampError::version(format!(
                "Cannot create a valid version from '{}' - expected MAJOR.MINOR.PATCH with an optional dev/post trailer",
                raw
            ))
        })?;

        Ok(BaseVersion {
            release: captures["release"].to_string(),
        })
    }

    /// The normalized base form, without any suffix.
    pub fn as_str(&self) -> &str {
        &self.release
    }
}

impl fmt::Display for BaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_version() {
        let v = BaseVersion::parse("2024.1.0").unwrap();
        assert_eq!(v.as_str(), "2024.1.0");
    }

    #[test]
    fn test_parse_strips_dev_trailer() {
        let v = BaseVersion::parse("2024.1.0.dev8").unwrap();
        assert_eq!(v.as_str(), "2024.1.0");
    }

    #[test]
    fn test_parse_strips_post_trailer() {
        let v = BaseVersion::parse("2024.1.0post3").unwrap();
        assert_eq!(v.as_str(), "2024.1.0");
    }

    #[test]
    fn test_parse_strips_rc_trailer() {
        let v = BaseVersion::parse("2025.2.1rc1").unwrap();
        assert_eq!(v.as_str(), "2025.2.1");
    }

    #[test]
    fn test_parse_two_component_version() {
        let v = BaseVersion::parse("1.4").unwrap();
        assert_eq!(v.as_str(), "1.4");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let v = BaseVersion::parse("2024.1.0\n").unwrap();
        assert_eq!(v.as_str(), "2024.1.0");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(BaseVersion::parse("not-a-version").is_err());
        assert!(BaseVersion::parse("").is_err());
        assert!(BaseVersion::parse("2024").is_err());
        assert!(BaseVersion::parse("v1.2.3").is_err());
    }

    #[test]
    fn test_display_matches_base() {
        let v = BaseVersion::parse("2024.1.0.dev8").unwrap();
        assert_eq!(v.to_string(), "2024.1.0");
    }
}
