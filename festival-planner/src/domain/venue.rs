//! Venue identity.

use std::fmt;

/// Error returned when constructing a venue from an invalid name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid venue name {name:?}: {reason}")]
pub struct InvalidVenue {
    name: String,
    reason: &'static str,
}

/// A named festival location.
///
/// Venue names are non-empty and contain no whitespace. Two venues are the
/// same venue exactly when their names match (case-sensitive).
///
/// # Examples
///
/// ```
/// use festival_planner::domain::Venue;
///
/// let main_stage = Venue::parse("MainStage").unwrap();
/// assert_eq!(main_stage.as_str(), "MainStage");
///
/// // Names are compared exactly
/// assert_ne!(main_stage, Venue::parse("mainstage").unwrap());
///
/// // Whitespace is rejected
/// assert!(Venue::parse("Main Stage").is_err());
/// assert!(Venue::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Venue(String);

impl Venue {
    /// Parse a venue from its name.
    pub fn parse(name: &str) -> Result<Self, InvalidVenue> {
        if name.is_empty() {
            return Err(InvalidVenue {
                name: name.to_string(),
                reason: "must not be empty",
            });
        }

        if name.chars().any(char::is_whitespace) {
            return Err(InvalidVenue {
                name: name.to_string(),
                reason: "must not contain whitespace",
            });
        }

        Ok(Venue(name.to_string()))
    }

    /// Returns the venue name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Venue({})", self.0)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Za-z0-9_-]{1,20}") {
            let venue = Venue::parse(&s).unwrap();
            prop_assert_eq!(venue.as_str(), s.as_str());
        }

        /// Any name containing a space is rejected
        #[test]
        fn spaces_rejected(a in "[A-Za-z]{0,8}", b in "[A-Za-z]{0,8}") {
            let name = format!("{a} {b}");
            prop_assert!(Venue::parse(&name).is_err());
        }
    }
}
