//! Self-contained Leaflet map page.
//!
//! The page loads Leaflet and Leaflet.markercluster from a CDN and draws one
//! `divIcon` marker per restaurant, showing the category glyph with a fixed
//! popup. Nearby markers collapse into clusters at low zoom.

use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::escape::escape;
use serde::Serialize;
use tracing::debug;

use dinemap_model::{MapMarker, MapView, PopupText};

use crate::common::write_atomic;

/// OpenStreetMap raster tiles.
pub const OSM_TILES: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const LEAFLET_VERSION: &str = "1.9.4";
const MARKERCLUSTER_VERSION: &str = "1.5.3";

/// Options for the map page.
#[derive(Debug, Clone)]
pub struct MapHtmlOptions {
    pub title: String,
    pub tiles_url: String,
    pub attribution: String,
}

impl MapHtmlOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for MapHtmlOptions {
    fn default() -> Self {
        Self {
            title: "Restaurants".to_string(),
            tiles_url: OSM_TILES.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

/// Marker as embedded in the page script.
#[derive(Serialize)]
struct MarkerPayload {
    lat: f64,
    lon: f64,
    glyph: String,
    popup: String,
}

impl From<&MapMarker> for MarkerPayload {
    fn from(marker: &MapMarker) -> Self {
        Self {
            lat: marker.latitude,
            lon: marker.longitude,
            glyph: escape(marker.glyph.as_str()).into_owned(),
            popup: popup_html(&marker.popup),
        }
    }
}

/// Popup body with every value HTML-escaped.
pub fn popup_html(popup: &PopupText) -> String {
    popup
        .fields()
        .iter()
        .map(|(label, value)| format!("<b>{label}:</b> {}", escape(*value)))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// JSON array of markers, safe to inline in a `<script>` element.
pub fn marker_payload(map: &MapView) -> Result<String> {
    let markers: Vec<MarkerPayload> = map.markers.iter().map(MarkerPayload::from).collect();
    let json = serde_json::to_string_pretty(&markers).context("serialize map markers")?;
    Ok(json.replace("</", "<\\/"))
}

/// Render the full HTML page for `map`.
pub fn render_map_html(map: &MapView, options: &MapHtmlOptions) -> Result<String> {
    let markers = marker_payload(map)?;
    let settings = serde_json::json!({
        "center": [map.center.latitude, map.center.longitude],
        "zoom": map.zoom,
        "tiles": options.tiles_url,
        "attribution": options.attribution,
    });
    let settings = serde_json::to_string(&settings)
        .context("serialize map settings")?
        .replace("</", "<\\/");
    let title = escape(options.title.as_str());

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css">
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@{MARKERCLUSTER_VERSION}/dist/MarkerCluster.css">
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@{MARKERCLUSTER_VERSION}/dist/MarkerCluster.Default.css">
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>
<script src="https://unpkg.com/leaflet.markercluster@{MARKERCLUSTER_VERSION}/dist/leaflet.markercluster.js"></script>
<style>
html, body, #map {{ height: 100%; margin: 0; }}
.dinemap-glyph {{ font-size: 22px; line-height: 28px; text-align: center; background: none; border: none; }}
</style>
</head>
<body>
<div id="map"></div>
<script>
const settings = {settings};
const markers = {markers};
const map = L.map("map").setView(settings.center, settings.zoom);
L.tileLayer(settings.tiles, {{ maxZoom: 19, attribution: settings.attribution }}).addTo(map);
const cluster = L.markerClusterGroup();
for (const m of markers) {{
  const icon = L.divIcon({{ html: m.glyph, className: "dinemap-glyph", iconSize: [28, 28] }});
  cluster.addLayer(L.marker([m.lat, m.lon], {{ icon: icon }}).bindPopup(m.popup));
}}
map.addLayer(cluster);
</script>
</body>
</html>
"#
    ))
}

/// Render `map` and write it to `path`.
pub fn write_map_html(path: &Path, map: &MapView, options: &MapHtmlOptions) -> Result<()> {
    let html = render_map_html(map, options)?;
    write_atomic(path, |writer| {
        use std::io::Write;
        writer
            .write_all(html.as_bytes())
            .with_context(|| format!("write {}", path.display()))
    })?;
    debug!(path = %path.display(), markers = map.markers.len(), "map written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_values_are_escaped() {
        let popup = PopupText {
            name: "Fish & Chips <Deluxe>".to_string(),
            category: "Seafood".to_string(),
            address: "1 \"Main\" St".to_string(),
        };
        let html = popup_html(&popup);
        assert_eq!(
            html,
            "<b>Name:</b> Fish &amp; Chips &lt;Deluxe&gt;<br>\
             <b>Category:</b> Seafood<br>\
             <b>Address:</b> 1 &quot;Main&quot; St"
        );
    }

    #[test]
    fn payload_cannot_close_script() {
        let map = MapView {
            center: dinemap_model::GeoPoint::new(0.0, 0.0),
            zoom: 12,
            markers: vec![MapMarker {
                latitude: 0.0,
                longitude: 0.0,
                glyph: "*".to_string(),
                popup: PopupText {
                    name: "x".to_string(),
                    category: "y".to_string(),
                    address: "z".to_string(),
                },
            }],
        };
        let payload = marker_payload(&map).expect("payload");
        assert!(!payload.contains("</"));
    }
}
