//! Bindings to the global Leaflet (`L`) object and the [`MapSurface`] built on them.
//!
//! Only the handful of calls the map view makes are declared. Leaflet itself
//! is loaded from `Dioxus.toml` as a page resource.

use munchi_shared::config::MarkerConfig;
use munchi_shared::location::MapSurface;
use munchi_shared::models::GeoPoint;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element: &web_sys::HtmlElement) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &LatLng, zoom: f64);

    #[wasm_bindgen(method)]
    fn locate(this: &Map, options: &JsValue);

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &js_sys::Function);

    /// Remove every event listener registered on the map.
    #[wasm_bindgen(method)]
    fn off(this: &Map);

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &Map, layer: &Layer);

    #[wasm_bindgen(method)]
    fn remove(this: &Map);

    pub type LatLng;

    #[wasm_bindgen(js_namespace = L, js_name = latLng)]
    fn lat_lng(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &LatLng) -> f64;

    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(at: &LatLng, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str);

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Layer);

    pub type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> DivIcon;

    /// Payload of the `locationfound` event.
    pub type LocationEvent;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LocationEvent) -> LatLng;

    /// Payload of the `locationerror` event.
    pub type LocationErrorEvent;

    #[wasm_bindgen(method, getter)]
    pub fn message(this: &LocationErrorEvent) -> String;
}

impl LocationEvent {
    pub fn position(&self) -> GeoPoint {
        let at = self.latlng();
        GeoPoint::new(at.lat(), at.lng())
    }
}

pub type FoundListener = Closure<dyn FnMut(LocationEvent)>;
pub type ErrorListener = Closure<dyn FnMut(LocationErrorEvent)>;

// ---------------------------------------------------------------------------
// Option objects (serialized to plain JS objects)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayerOptions<'a> {
    pub attribution: &'a str,
    pub detect_retina: bool,
    pub max_zoom: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocateOptions {
    pub set_view: bool,
    pub max_zoom: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivIconOptions<'a> {
    pub class_name: &'a str,
    pub html: &'a str,
    pub icon_size: [u32; 2],
    pub icon_anchor: [i32; 2],
}

const LOCATION_ICON_CLASS: &str = "custom-icon";
const LOCATION_ICON_HTML: &str = r#"<div class="location-circle"></div><div class="location-dot"></div>"#;

pub fn location_icon_options(marker: &MarkerConfig) -> DivIconOptions<'static> {
    DivIconOptions {
        class_name: LOCATION_ICON_CLASS,
        html: LOCATION_ICON_HTML,
        icon_size: marker.icon_size,
        icon_anchor: marker.icon_anchor,
    }
}

/// Popup markup for the location marker; the label is escaped.
pub fn location_popup_html(label: &str) -> String {
    let escaped = label
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(r#"<div class="location-text">{}</div>"#, escaped)
}

fn to_js<T: Serialize>(options: &T) -> Result<JsValue, String> {
    let json = serde_json::to_string(options).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

/// Serialize options, falling back to Leaflet's defaults on failure.
fn js_options<T: Serialize>(options: &T) -> JsValue {
    to_js(options).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not build Leaflet options");
        JsValue::UNDEFINED
    })
}

/// Whether the Leaflet script has been loaded into the page.
pub fn is_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

// ---------------------------------------------------------------------------
// MapSurface
// ---------------------------------------------------------------------------

pub struct LeafletSurface {
    map: Map,
    icon: DivIcon,
    // Must outlive every registration on `map`; dropped after `off()`.
    listeners: Option<(FoundListener, ErrorListener)>,
}

impl LeafletSurface {
    /// Create the Leaflet map in `element` and register the location listeners.
    pub fn new(
        element: &web_sys::HtmlElement,
        marker: &MarkerConfig,
        on_found: FoundListener,
        on_error: ErrorListener,
    ) -> Result<Self, String> {
        if !is_available() {
            return Err("Leaflet is not loaded".to_string());
        }
        let map = create_map(element).map_err(|e| format!("Failed to create map: {:?}", e))?;
        map.on("locationfound", on_found.as_ref().unchecked_ref());
        map.on("locationerror", on_error.as_ref().unchecked_ref());

        let icon = div_icon(&js_options(&location_icon_options(marker)));

        Ok(LeafletSurface {
            map,
            icon,
            listeners: Some((on_found, on_error)),
        })
    }
}

impl MapSurface for LeafletSurface {
    type Marker = Layer;

    fn set_view(&mut self, center: GeoPoint, zoom: f64) {
        self.map.set_view(&lat_lng(center.lat, center.lng), zoom);
    }

    fn add_tile_layer(&mut self, url: &str, attribution: &str, detect_retina: bool, max_zoom: f64) {
        let options = TileLayerOptions {
            attribution,
            detect_retina,
            max_zoom,
        };
        tile_layer(url, &js_options(&options)).add_to(&self.map);
    }

    fn request_location(&mut self, max_zoom: f64) {
        let options = LocateOptions {
            set_view: true,
            max_zoom,
        };
        self.map.locate(&js_options(&options));
    }

    fn place_marker(&mut self, at: GeoPoint, label: &str) -> Layer {
        let options = js_sys::Object::new();
        if js_sys::Reflect::set(&options, &JsValue::from_str("icon"), &self.icon).is_err() {
            tracing::warn!("Could not attach location icon; using Leaflet's default marker");
        }
        let layer = marker(&lat_lng(at.lat, at.lng), &options);
        layer.add_to(&self.map);
        layer.bind_popup(&location_popup_html(label));
        layer.open_popup();
        layer
    }

    fn remove_marker(&mut self, marker: Layer) {
        self.map.remove_layer(&marker);
    }

    fn show_error(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }

    fn release(&mut self) {
        self.map.off();
        self.map.remove();
        self.listeners = None;
    }
}
