//! Heritage site types.

use std::fmt;

use super::Coordinates;

/// Error returned when parsing an invalid site key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid site key: {reason}")]
pub struct InvalidSiteKey {
    reason: &'static str,
}

/// A valid site key: the stable identifier of a catalog entry.
///
/// Keys are 1 to 64 ASCII characters drawn from lowercase letters, digits,
/// `-` and `_` (e.g. `mysore-palace`, `western_ghats`). This type
/// guarantees that any `SiteKey` value is valid by construction.
///
/// # Examples
///
/// ```
/// use circuit_server::domain::SiteKey;
///
/// let key = SiteKey::parse("mysore-palace").unwrap();
/// assert_eq!(key.as_str(), "mysore-palace");
///
/// // Uppercase is rejected
/// assert!(SiteKey::parse("Hampi").is_err());
///
/// // Empty keys are rejected
/// assert!(SiteKey::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SiteKey(String);

impl SiteKey {
    /// Parse a site key from a string.
    ///
    /// The input must be 1 to 64 characters, each a lowercase ASCII
    /// letter, digit, `-` or `_`.
    pub fn parse(s: &str) -> Result<Self, InvalidSiteKey> {
        if s.is_empty() {
            return Err(InvalidSiteKey {
                reason: "must not be empty",
            });
        }
        if s.len() > 64 {
            return Err(InvalidSiteKey {
                reason: "must be at most 64 characters",
            });
        }
        for b in s.bytes() {
            if !(b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_') {
                return Err(InvalidSiteKey {
                    reason: "must contain only lowercase letters, digits, '-' and '_'",
                });
            }
        }
        Ok(SiteKey(s.to_string()))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SiteKey({})", self.0)
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Heritage designation of a catalog site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Inscribed UNESCO World Heritage Site.
    Unesco,
    /// On the tentative list for UNESCO inscription.
    ProposedUnesco,
    /// State or national heritage site.
    Heritage,
    /// Prehistoric or archaeological site.
    Prehistoric,
}

impl Category {
    /// The display label, matching the catalog's category strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unesco => "UNESCO",
            Category::ProposedUnesco => "Proposed UNESCO",
            Category::Heritage => "Heritage",
            Category::Prehistoric => "Prehistoric",
        }
    }

    /// Parse a display label, case-insensitively.
    ///
    /// Returns `None` for unrecognized input; callers that only receive
    /// values from a closed set of UI controls treat `None` as "no
    /// filter" rather than an error.
    pub fn parse(s: &str) -> Option<Category> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "unesco" => Some(Category::Unesco),
            "proposed unesco" => Some(Category::ProposedUnesco),
            "heritage" => Some(Category::Heritage),
            "prehistoric" => Some(Category::Prehistoric),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dated entry in a site's historical timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// Year label, free text (e.g. "1336", "7th century").
    pub year: String,
    /// What happened.
    pub event: String,
}

/// Structured descriptive text for a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDescription {
    /// Historical background.
    pub history: String,
    /// Architectural notes.
    pub architecture: String,
    /// Ordered historical timeline.
    pub timeline: Vec<TimelineEntry>,
}

/// A single heritage site record.
///
/// Sites are immutable once loaded into the catalog and are shared
/// read-only (via `Arc`) between the catalog, the itinerary and the web
/// layer.
#[derive(Debug, Clone)]
pub struct Site {
    /// Unique, stable identifier.
    pub key: SiteKey,
    /// Display name.
    pub name: String,
    /// Heritage designation.
    pub category: Category,
    /// Free-text era label (e.g. "Hoysala (12th c.)").
    pub era: String,
    /// Geographic position.
    pub coordinates: Coordinates,
    /// Short visitor highlights, in display order.
    pub highlights: Vec<String>,
    /// Long-form description.
    pub description: SiteDescription,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid site keys.
    fn valid_key_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[a-z0-9_-]{1,64}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original.
        #[test]
        fn roundtrip(s in valid_key_string()) {
            let key = SiteKey::parse(&s).unwrap();
            prop_assert_eq!(key.as_str(), s.as_str());
        }

        /// Any valid key can be parsed.
        #[test]
        fn valid_always_parses(s in valid_key_string()) {
            prop_assert!(SiteKey::parse(&s).is_ok());
        }

        /// Keys containing uppercase letters are always rejected.
        #[test]
        fn uppercase_rejected(s in "[a-z0-9_-]{0,10}[A-Z][a-z0-9_-]{0,10}") {
            prop_assert!(SiteKey::parse(&s).is_err());
        }

        /// Over-length keys are always rejected.
        #[test]
        fn over_length_rejected(s in "[a-z0-9_-]{65,80}") {
            prop_assert!(SiteKey::parse(&s).is_err());
        }
    }
}
