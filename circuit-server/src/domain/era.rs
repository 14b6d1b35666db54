//! Era bucket classification.
//!
//! Catalog sites carry free-text era labels ("Hoysala (12th c.)",
//! "Kadamba/Ancient (4th–6th c.)"). For filtering, every label is
//! collapsed into one of four coarse historical buckets.

use std::fmt;

/// A coarse historical-period classification of a free-text era label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraBucket {
    /// Prehistoric and ancient periods.
    Prehistoric,
    /// Medieval dynasties (Chalukya, Hoysala, ...).
    Medieval,
    /// Imperial periods (Vijayanagara, Adil Shahi, ...).
    Empire,
    /// Modern era (20th century, Wodeyar, ...).
    Modern,
}

impl EraBucket {
    /// Classify a free-text era label into a bucket.
    ///
    /// Rules are case-insensitive substring matches evaluated in fixed
    /// priority order; the first matching rule wins. Labels matching no
    /// rule default to `Medieval`. The ordering resolves overlapping
    /// keyword membership: "Ancient/Vijayanagara Empire" classifies as
    /// `Prehistoric` because the prehistoric rule is checked first.
    pub fn classify(era: &str) -> EraBucket {
        let era = era.to_lowercase();
        if era.contains("prehistoric") || era.contains("ancient") {
            EraBucket::Prehistoric
        } else if era.contains("medieval") || era.contains("chalukya") || era.contains("hoysala") {
            EraBucket::Medieval
        } else if era.contains("empire")
            || era.contains("vijayanagara")
            || era.contains("adil shahi")
        {
            EraBucket::Empire
        } else if era.contains("20th") || era.contains("wodeyar") || era.contains("modern") {
            EraBucket::Modern
        } else {
            EraBucket::Medieval
        }
    }

    /// The display label of the bucket.
    pub fn as_str(&self) -> &'static str {
        match self {
            EraBucket::Prehistoric => "Prehistoric",
            EraBucket::Medieval => "Medieval",
            EraBucket::Empire => "Empire",
            EraBucket::Modern => "Modern",
        }
    }

    /// Parse a bucket display label, case-insensitively.
    ///
    /// Returns `None` for unrecognized input.
    pub fn parse(s: &str) -> Option<EraBucket> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prehistoric" => Some(EraBucket::Prehistoric),
            "medieval" => Some(EraBucket::Medieval),
            "empire" => Some(EraBucket::Empire),
            "modern" => Some(EraBucket::Modern),
            _ => None,
        }
    }
}

impl fmt::Display for EraBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
