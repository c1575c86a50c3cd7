//! Map view settings.
//!
//! The shipped values live in `data/map.json`. The compiled-in defaults
//! match that file and are used when it fails to parse.

use serde::Deserialize;

use crate::models::GeoPoint;

const CAMPUS_MAP_JSON: &str = include_str!("../data/map.json");

pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 42.72941085967446,
    lng: -73.6792590320996,
};
pub const DEFAULT_ZOOM: f64 = 17.0;
pub const LOCATED_ZOOM: f64 = 18.0;

pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TileConfig {
    pub url: String,
    pub attribution: String,
    pub detect_retina: bool,
    pub max_zoom: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        TileConfig {
            url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            detect_retina: true,
            max_zoom: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerConfig {
    pub label: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
}

impl Default for MarkerConfig {
    fn default() -> Self {
        MarkerConfig {
            label: "You are here".to_string(),
            icon_size: [40, 40],
            icon_anchor: [1, 3],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    pub center: GeoPoint,
    pub zoom: f64,
    /// Zoom applied when recentering on the user's location.
    pub located_zoom: f64,
    pub tiles: TileConfig,
    pub marker: MarkerConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            located_zoom: LOCATED_ZOOM,
            tiles: TileConfig::default(),
            marker: MarkerConfig::default(),
        }
    }
}

impl MapConfig {
    pub fn from_json(data: &str) -> Result<Self, String> {
        let config: MapConfig =
            serde_json::from_str(data).map_err(|e| format!("Failed to parse map config: {}", e))?;
        if config.zoom < 0.0 || config.located_zoom < 0.0 {
            return Err("Zoom levels must not be negative".to_string());
        }
        Ok(config)
    }

    /// The embedded campus settings, or the defaults if they fail to parse.
    pub fn campus() -> Self {
        match Self::from_json(CAMPUS_MAP_JSON) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to default map config");
                MapConfig::default()
            }
        }
    }
}
