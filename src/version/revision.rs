//! The `Version` triple and its ordering
//!
//! Ordering is purely lexicographic over (major, minor, patch). Parsing is
//! strict: exactly three decimal components, no normalization of partial or
//! non-numeric input.

use std::fmt;

use crate::version::error::VersionError;

/// A document revision: (major, minor, patch).
///
/// Derived ordering compares major, then minor, then patch; ties cascade to
/// the next component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the hyphen-separated form used in class names and radio values,
    /// e.g. `"1-2-3"`.
    pub fn parse_hyphenated(s: &str) -> Result<Self, VersionError> {
        Self::from_parts(s, s.split('-'))
    }

    /// Parse the dot-separated form used in query-string values,
    /// e.g. `"1.2.3"`.
    pub fn parse_dotted(s: &str) -> Result<Self, VersionError> {
        Self::from_parts(s, s.split('.'))
    }

    /// Parse either textual form. Used where operator input may come from a
    /// copied query value (`1.2.3`) or a copied class suffix (`1-2-3`).
    pub fn parse_lenient(s: &str) -> Result<Self, VersionError> {
        if s.contains('-') {
            Self::parse_hyphenated(s)
        } else {
            Self::parse_dotted(s)
        }
    }

    fn from_parts<'a>(
        original: &str,
        parts: impl Iterator<Item = &'a str>,
    ) -> Result<Self, VersionError> {
        let parts: Vec<&str> = parts.collect();
        if parts.len() != 3 {
            return Err(VersionError::WrongArity(parts.len(), original.to_string()));
        }
        let component = |s: &str| {
            s.parse::<u32>()
                .map_err(|_| VersionError::InvalidComponent(s.to_string()))
        };
        Ok(Self {
            major: component(parts[0])?,
            minor: component(parts[1])?,
            patch: component(parts[2])?,
        })
    }

    /// Strict "is older than": true iff `self < other` lexicographically.
    pub fn older(&self, other: &Version) -> bool {
        self < other
    }

    /// "Is older than or the same as": true iff `self <= other`.
    pub fn older_or_equal(&self, other: &Version) -> bool {
        self <= other
    }

    /// The hyphen-separated wire form, e.g. `"1-2-3"`.
    pub fn hyphenated(&self) -> String {
        format!("{}-{}-{}", self.major, self.minor, self.patch)
    }
}

/// Displays the dot-separated form, e.g. `"1.2.3"`.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1-2-3", Some(Version::new(1, 2, 3)))]
    #[case("0-0-0", Some(Version::new(0, 0, 0)))]
    #[case("10-20-30", Some(Version::new(10, 20, 30)))]
    #[case("1-2", None)] // too few components
    #[case("1-2-3-4", None)] // too many components
    #[case("1-x-3", None)] // non-numeric component
    #[case("", None)]
    fn parse_hyphenated_is_strict(#[case] input: &str, #[case] expected: Option<Version>) {
        assert_eq!(Version::parse_hyphenated(input).ok(), expected);
    }

    #[rstest]
    #[case("1.2.3", Some(Version::new(1, 2, 3)))]
    #[case("1.2", None)]
    #[case("1.2.beta", None)]
    #[case("-1.2.3", None)] // negative components rejected
    fn parse_dotted_is_strict(#[case] input: &str, #[case] expected: Option<Version>) {
        assert_eq!(Version::parse_dotted(input).ok(), expected);
    }

    #[rstest]
    #[case("1-2-3", Some(Version::new(1, 2, 3)))]
    #[case("1.2.3", Some(Version::new(1, 2, 3)))]
    #[case("1.2-3", None)] // mixed separators
    fn parse_lenient_accepts_both_forms(#[case] input: &str, #[case] expected: Option<Version>) {
        assert_eq!(Version::parse_lenient(input).ok(), expected);
    }

    #[rstest]
    #[case(Version::new(1, 0, 0), Version::new(2, 0, 0), true)]
    #[case(Version::new(1, 9, 9), Version::new(2, 0, 0), true)] // major dominates
    #[case(Version::new(1, 1, 0), Version::new(1, 2, 0), true)]
    #[case(Version::new(1, 1, 9), Version::new(1, 2, 0), true)] // minor dominates
    #[case(Version::new(1, 1, 1), Version::new(1, 1, 2), true)]
    #[case(Version::new(1, 1, 1), Version::new(1, 1, 1), false)] // equal is not older
    #[case(Version::new(2, 0, 0), Version::new(1, 9, 9), false)]
    fn older_is_lexicographic(#[case] a: Version, #[case] b: Version, #[case] expected: bool) {
        assert_eq!(a.older(&b), expected);
    }

    #[test]
    fn older_or_equal_is_reflexive() {
        let v = Version::new(3, 2, 1);
        assert!(v.older_or_equal(&v));
        assert!(!v.older(&v));
    }

    #[test]
    fn older_is_transitive() {
        let a = Version::new(1, 0, 0);
        let b = Version::new(1, 5, 0);
        let c = Version::new(2, 0, 0);
        assert!(a.older(&b));
        assert!(b.older(&c));
        assert!(a.older(&c));
    }

    #[test]
    fn wire_forms_round_trip() {
        let v = Version::new(3, 2, 1);
        assert_eq!(v.to_string(), "3.2.1");
        assert_eq!(v.hyphenated(), "3-2-1");
        assert_eq!(Version::parse_dotted(&v.to_string()).unwrap(), v);
        assert_eq!(Version::parse_hyphenated(&v.hyphenated()).unwrap(), v);
    }
}
