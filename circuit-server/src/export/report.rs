//! Human-readable itinerary report.
//!
//! Renders a snapshot as a paginated plain-text report: a title header
//! with the circuit totals, then one block per stop with its category,
//! era and the distance to the next stop. Blocks are packed into pages
//! against a per-page line budget.

use super::{ExportError, ItinerarySnapshot};

/// Layout configuration for the report writer.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Report title, printed at the top of the first page.
    pub title: String,
    /// Maximum lines per page. A stop block never spans a page break;
    /// a block larger than the whole budget gets a page of its own.
    pub lines_per_page: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Karnataka Heritage Circuit".to_string(),
            lines_per_page: 40,
        }
    }
}

/// One page of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPage {
    /// The page's lines, top to bottom.
    pub lines: Vec<String>,
}

/// A fully rendered, paginated report.
#[derive(Debug, Clone)]
pub struct Report {
    /// Pages in order.
    pub pages: Vec<ReportPage>,
}

impl Report {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The whole report as text, pages separated by form feeds.
    pub fn to_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\u{c}\n")
    }
}

/// Render a snapshot as a paginated report.
///
/// # Errors
///
/// Returns `ExportError::EmptyItinerary` for a snapshot with no stops:
/// the user asked for a report of nothing, which deserves a notification
/// rather than a blank document.
pub fn render_report(
    snapshot: &ItinerarySnapshot,
    config: &ReportConfig,
) -> Result<Report, ExportError> {
    if snapshot.is_empty() {
        return Err(ExportError::EmptyItinerary);
    }

    let mut pages = Vec::new();
    let mut current = vec![
        config.title.clone(),
        String::new(),
        format!("Total stops: {}", snapshot.len()),
        format!("Total distance: {} km", snapshot.total_distance_km_rounded),
        format!("Created: {}", snapshot.created_at.format("%Y-%m-%d")),
        String::new(),
    ];

    for (idx, stop) in snapshot.stops.iter().enumerate() {
        let mut block = vec![
            format!("{}. {}", idx + 1, stop.name),
            format!("   Category: {}", stop.category),
            format!("   Era: {}", stop.era),
        ];
        if let Some(km) = stop.distance_to_next_km {
            block.push(format!("   Distance to next: {} km", km.round() as i64));
        }
        block.push(String::new());

        if current.len() + block.len() > config.lines_per_page && !current.is_empty() {
            pages.push(ReportPage {
                lines: std::mem::take(&mut current),
            });
        }
        current.extend(block);
    }

    if !current.is_empty() {
        pages.push(ReportPage { lines: current });
    }

    Ok(Report { pages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Coordinates, Site, SiteDescription, SiteKey};
    use crate::itinerary::Itinerary;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn site(key: &str, lat: f64) -> Arc<Site> {
        Arc::new(Site {
            key: SiteKey::parse(key).unwrap(),
            name: format!("Site {key}"),
            category: Category::Heritage,
            era: "Hoysala (12th c.)".to_string(),
            coordinates: Coordinates::new(lat, 76.0).unwrap(),
            highlights: vec![],
            description: SiteDescription {
                history: String::new(),
                architecture: String::new(),
                timeline: vec![],
            },
        })
    }

    fn snapshot_of(count: usize) -> ItinerarySnapshot {
        let mut itinerary = Itinerary::new();
        for idx in 0..count {
            itinerary.add(site(&format!("site-{idx}"), idx as f64));
        }
        let created_at = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        ItinerarySnapshot::capture(&itinerary, created_at)
    }

    #[test]
    fn empty_itinerary_is_refused() {
        let result = render_report(&snapshot_of(0), &ReportConfig::default());
        assert!(matches!(result, Err(ExportError::EmptyItinerary)));
    }

    #[test]
    fn single_page_report() {
        let report = render_report(&snapshot_of(3), &ReportConfig::default()).unwrap();

        assert_eq!(report.page_count(), 1);
        let lines = &report.pages[0].lines;
        assert_eq!(lines[0], "Karnataka Heritage Circuit");
        assert_eq!(lines[2], "Total stops: 3");
        assert_eq!(lines[4], "Created: 2024-03-15");
        assert!(lines.iter().any(|l| l == "1. Site site-0"));
        assert!(lines.iter().any(|l| l == "3. Site site-2"));
    }

    #[test]
    fn stop_blocks_carry_distance_except_last() {
        let report = render_report(&snapshot_of(3), &ReportConfig::default()).unwrap();
        let text = report.to_text();

        // Two legs between three stops.
        let distance_lines = text
            .lines()
            .filter(|l| l.trim_start().starts_with("Distance to next:"))
            .count();
        assert_eq!(distance_lines, 2);
    }

    #[test]
    fn long_reports_paginate() {
        let config = ReportConfig {
            lines_per_page: 16,
            ..Default::default()
        };
        let report = render_report(&snapshot_of(8), &config).unwrap();

        assert!(report.page_count() > 1, "got {} pages", report.page_count());
        for page in &report.pages {
            assert!(
                page.lines.len() <= config.lines_per_page,
                "page has {} lines",
                page.lines.len()
            );
        }

        // Every stop appears exactly once across all pages.
        let text = report.to_text();
        for idx in 0..8 {
            let name = format!("Site site-{idx}");
            assert_eq!(text.matches(&name).count(), 1, "{name}");
        }
    }

    #[test]
    fn header_only_on_first_page() {
        let config = ReportConfig {
            lines_per_page: 16,
            ..Default::default()
        };
        let report = render_report(&snapshot_of(8), &config).unwrap();

        assert_eq!(report.pages[0].lines[0], "Karnataka Heritage Circuit");
        for page in &report.pages[1..] {
            assert_ne!(page.lines[0], "Karnataka Heritage Circuit");
        }
    }
}
