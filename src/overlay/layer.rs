//! Overlay data structures parsed from the GeoJSON feeds.

use geo_types::Coord;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};
use serde_json::Value as Json;

/// One seismic event from the earthquake feed.
#[derive(Debug, Clone)]
pub struct Earthquake {
    /// Epicenter (lon, lat).
    pub position: Coord<f64>,
    /// Event magnitude; may be zero or negative in real feeds.
    pub magnitude: f64,
    /// Depth in kilometers (third GeoJSON coordinate); may be negative.
    pub depth_km: f64,
    /// Human-readable place description.
    pub place: String,
    /// Event time in milliseconds since the Unix epoch.
    pub time_ms: i64,
}

/// Earthquake overlay contents, populated once from one fetch response.
#[derive(Debug, Clone, Default)]
pub struct EarthquakeLayer {
    pub events: Vec<Earthquake>,
}

impl EarthquakeLayer {
    /// Parses a GeoJSON FeatureCollection of seismic events.
    ///
    /// Features without point geometry or a numeric magnitude are skipped
    /// with a debug log rather than rendered as degenerate markers. An
    /// empty collection yields an empty (but valid) layer.
    pub fn from_geojson(geojson_str: &str) -> Result<Self, String> {
        let geojson: GeoJson = geojson_str
            .parse()
            .map_err(|e| format!("Failed to parse earthquake GeoJSON: {}", e))?;

        let features = into_features(geojson)?;
        let total = features.len();

        let events: Vec<Earthquake> = features.iter().filter_map(convert_event).collect();
        if events.len() < total {
            log::debug!(
                "Skipped {} of {} earthquake features without point geometry or magnitude",
                total - events.len(),
                total
            );
        }

        Ok(Self { events })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Fault-line overlay contents: plain polylines with no per-feature styling.
#[derive(Debug, Clone, Default)]
pub struct FaultLineLayer {
    pub lines: Vec<Vec<Coord<f64>>>,
}

impl FaultLineLayer {
    /// Parses a GeoJSON FeatureCollection of boundary lines.
    ///
    /// `LineString` and `MultiLineString` geometries are accepted; other
    /// geometry types are skipped with a debug log.
    pub fn from_geojson(geojson_str: &str) -> Result<Self, String> {
        let geojson: GeoJson = geojson_str
            .parse()
            .map_err(|e| format!("Failed to parse fault-line GeoJSON: {}", e))?;

        let mut lines = Vec::new();
        for feature in into_features(geojson)? {
            let Some(geometry) = feature.geometry.as_ref() else {
                continue;
            };
            collect_lines(geometry, &mut lines);
        }

        Ok(Self { lines })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn into_features(geojson: GeoJson) -> Result<Vec<Feature>, String> {
    match geojson {
        GeoJson::FeatureCollection(FeatureCollection { features, .. }) => Ok(features),
        GeoJson::Feature(feature) => Ok(vec![feature]),
        GeoJson::Geometry(_) => Err("Expected a FeatureCollection, got a bare geometry".into()),
    }
}

fn convert_event(feature: &Feature) -> Option<Earthquake> {
    let geometry = feature.geometry.as_ref()?;
    let Value::Point(coords) = &geometry.value else {
        return None;
    };
    if coords.len() < 2 {
        return None;
    }

    // USGS feeds carry null magnitudes for some events; skip those.
    let magnitude = property(feature, "mag").and_then(Json::as_f64)?;
    let place = property(feature, "place")
        .and_then(Json::as_str)
        .unwrap_or("Unknown location")
        .to_string();
    let time_ms = property(feature, "time").and_then(Json::as_i64).unwrap_or(0);

    Some(Earthquake {
        position: Coord {
            x: coords[0],
            y: coords[1],
        },
        magnitude,
        // A 2D point has no depth recorded; treat it as surface-level.
        depth_km: coords.get(2).copied().unwrap_or(0.0),
        place,
        time_ms,
    })
}

/// Looks up one JSON value in a feature's `properties` map.
fn property<'a>(feature: &'a Feature, key: &str) -> Option<&'a Json> {
    feature.properties.as_ref()?.get(key)
}

fn collect_lines(geometry: &Geometry, lines: &mut Vec<Vec<Coord<f64>>>) {
    match &geometry.value {
        Value::LineString(coords) => {
            lines.push(coords.iter().map(|c| Coord { x: c[0], y: c[1] }).collect());
        }
        Value::MultiLineString(multi) => {
            for coords in multi {
                lines.push(coords.iter().map(|c| Coord { x: c[0], y: c[1] }).collect());
            }
        }
        Value::GeometryCollection(geometries) => {
            for g in geometries {
                collect_lines(g, lines);
            }
        }
        _ => {
            log::debug!("Skipping non-line geometry in fault-line feed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_QUAKE: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"mag": 5.0, "place": "10km N of Somewhere", "time": 1388620296020},
            "geometry": {"type": "Point", "coordinates": [-117.6778333, 35.7648333, 12.0]}
        }]
    }"#;

    #[test]
    fn test_parse_single_event() {
        let layer = EarthquakeLayer::from_geojson(ONE_QUAKE).unwrap();
        assert_eq!(layer.len(), 1);

        let quake = &layer.events[0];
        assert_eq!(quake.magnitude, 5.0);
        assert_eq!(quake.depth_km, 12.0);
        assert_eq!(quake.place, "10km N of Somewhere");
        assert_eq!(quake.time_ms, 1388620296020);
        assert_eq!(quake.position.x, -117.6778333);
        assert_eq!(quake.position.y, 35.7648333);
    }

    #[test]
    fn test_parsed_event_styling() {
        use super::super::StylePreset;

        let layer = EarthquakeLayer::from_geojson(ONE_QUAKE).unwrap();
        let quake = &layer.events[0];

        // mag 5, depth 12: red under the coarse policy, radius per preset
        assert_eq!(
            StylePreset::Classic.depth_color(quake.depth_km),
            eframe::egui::Color32::RED
        );
        assert_eq!(StylePreset::Classic.marker_radius(quake.magnitude), 50.0);
        assert_eq!(StylePreset::Extended.marker_radius(quake.magnitude), 10.0);
    }

    #[test]
    fn test_empty_collection_yields_empty_layer() {
        let layer =
            EarthquakeLayer::from_geojson(r#"{"type": "FeatureCollection", "features": []}"#)
                .unwrap();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_null_magnitude_skipped() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"mag": null, "place": "Nowhere", "time": 0},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0, 1.0]}
            }]
        }"#;
        let layer = EarthquakeLayer::from_geojson(json).unwrap();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_property_lookup() {
        let properties = match serde_json::json!({"mag": 2.5, "place": "Offshore"}) {
            Json::Object(map) => map,
            _ => unreachable!(),
        };
        let feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![1.0, 2.0, 3.0]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        };

        assert_eq!(property(&feature, "mag").and_then(Json::as_f64), Some(2.5));
        assert!(property(&feature, "time").is_none());

        // Extraction tolerates the missing time but not a missing magnitude
        let quake = convert_event(&feature).unwrap();
        assert_eq!(quake.magnitude, 2.5);
        assert_eq!(quake.place, "Offshore");
        assert_eq!(quake.time_ms, 0);
    }

    #[test]
    fn test_missing_properties_skipped() {
        let feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![1.0, 2.0]))),
            id: None,
            properties: None,
            foreign_members: None,
        };
        assert!(property(&feature, "mag").is_none());
        assert!(convert_event(&feature).is_none());
    }

    #[test]
    fn test_missing_depth_defaults_to_zero() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"mag": 1.5, "place": "Shallow", "time": 0},
                "geometry": {"type": "Point", "coordinates": [10.0, 20.0]}
            }]
        }"#;
        let layer = EarthquakeLayer::from_geojson(json).unwrap();
        assert_eq!(layer.events[0].depth_km, 0.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(EarthquakeLayer::from_geojson("not geojson").is_err());
        assert!(FaultLineLayer::from_geojson("{}").is_err());
    }

    #[test]
    fn test_parse_fault_lines() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"Name": "AF-AN"},
                    "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0], [2.0, 1.5]]}
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "MultiLineString", "coordinates": [[[5.0, 5.0], [6.0, 6.0]], [[7.0, 7.0], [8.0, 8.0]]]}
                }
            ]
        }"#;
        let layer = FaultLineLayer::from_geojson(json).unwrap();
        assert_eq!(layer.len(), 3);
        assert_eq!(layer.lines[0].len(), 3);
        assert_eq!(layer.lines[0][1], Coord { x: 1.0, y: 1.0 });
    }

    #[test]
    fn test_point_geometry_skipped_in_fault_feed() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
            }]
        }"#;
        let layer = FaultLineLayer::from_geojson(json).unwrap();
        assert!(layer.is_empty());
    }
}
