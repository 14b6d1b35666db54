//! Machine-readable itinerary export.
//!
//! Serializes a snapshot as a downloadable JSON document of the shape
//! `{"itinerary": [...], "totalDistanceKm": .., "totalDistance": ..,
//! "createdAt": ..}`. An empty itinerary exports an empty-list document;
//! that is a valid export, not an error.

use std::io::Write;

use super::{ExportError, ItinerarySnapshot};

/// Render a snapshot as a pretty-printed JSON string.
pub fn to_json_string(snapshot: &ItinerarySnapshot) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write a snapshot as pretty-printed JSON to `writer`.
pub fn write_json<W: Write>(snapshot: &ItinerarySnapshot, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Coordinates, Site, SiteDescription, SiteKey};
    use crate::itinerary::Itinerary;
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;

    fn site(key: &str, lat: f64, lon: f64) -> Arc<Site> {
        Arc::new(Site {
            key: SiteKey::parse(key).unwrap(),
            name: format!("Site {key}"),
            category: Category::Heritage,
            era: "Chalukya (7th–8th c.)".to_string(),
            coordinates: Coordinates::new(lat, lon).unwrap(),
            highlights: vec![],
            description: SiteDescription {
                history: String::new(),
                architecture: String::new(),
                timeline: vec![],
            },
        })
    }

    fn snapshot_of(keys: &[(&str, f64, f64)]) -> ItinerarySnapshot {
        let mut itinerary = Itinerary::new();
        for (key, lat, lon) in keys {
            itinerary.add(site(key, *lat, *lon));
        }
        let created_at = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        ItinerarySnapshot::capture(&itinerary, created_at)
    }

    #[test]
    fn document_shape() {
        let snapshot = snapshot_of(&[("hampi", 15.335, 76.462), ("badami", 15.920, 75.679)]);
        let json = to_json_string(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let stops = value["itinerary"].as_array().unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0]["key"], "hampi");
        assert_eq!(stops[0]["category"], "Heritage");
        assert!(stops[0]["distanceToNextKm"].is_f64());
        assert!(stops[1].get("distanceToNextKm").is_none());

        assert!(value["totalDistanceKm"].is_f64());
        assert!(value["totalDistance"].is_i64());
        let created_at = value["createdAt"].as_str().unwrap();
        assert!(created_at.starts_with("2024-03-15T12:00:00"));
    }

    #[test]
    fn empty_itinerary_is_an_empty_list_document() {
        let snapshot = snapshot_of(&[]);
        let json = to_json_string(&snapshot).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["itinerary"].as_array().unwrap().len(), 0);
        assert_eq!(value["totalDistance"], 0);
    }

    #[test]
    fn write_to_file() {
        let snapshot = snapshot_of(&[("belur", 13.165, 75.865)]);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write_json(&snapshot, &mut file).unwrap();

        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["itinerary"][0]["key"], "belur");
    }
}
