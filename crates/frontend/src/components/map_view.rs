use std::rc::Rc;

use dioxus::prelude::*;
use munchi_shared::config::MapConfig;
use munchi_shared::location::{LocationOutcome, MapSession, SessionSlot};
use wasm_bindgen::prelude::*;

use crate::leaflet::{ErrorListener, FoundListener, LeafletSurface, LocationErrorEvent, LocationEvent};

const MAP_CONTAINER_ID: &str = "map";

/// Mounted map, shared between the component and the Leaflet listeners.
/// Empty before mount and after teardown.
type SharedSession = Rc<SessionSlot<LeafletSurface>>;

// ---------------------------------------------------------------------------
// Leaflet listeners
// ---------------------------------------------------------------------------

fn location_listeners(session: &SharedSession) -> (FoundListener, ErrorListener) {
    let weak = Rc::downgrade(session);
    let on_found = Closure::<dyn FnMut(LocationEvent)>::new(move |evt: LocationEvent| {
        if let Some(session) = weak.upgrade() {
            session.deliver(LocationOutcome::Found(evt.position()));
        }
    });

    let weak = Rc::downgrade(session);
    let on_error = Closure::<dyn FnMut(LocationErrorEvent)>::new(move |evt: LocationErrorEvent| {
        if let Some(session) = weak.upgrade() {
            session.deliver(LocationOutcome::Failed(evt.message()));
        }
    });

    (on_found, on_error)
}

// ---------------------------------------------------------------------------
// Mount / unmount
// ---------------------------------------------------------------------------

fn container_element() -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CONTAINER_ID)?;
    element.dyn_into::<web_sys::HtmlElement>().ok()
}

fn mount_map(session: &SharedSession, config: MapConfig) -> Result<(), String> {
    if session.is_installed() {
        return Ok(());
    }
    let element = container_element().ok_or_else(|| "Map container not found".to_string())?;
    let (on_found, on_error) = location_listeners(session);
    let surface = LeafletSurface::new(&element, &config.marker, on_found, on_error)?;
    session.install(MapSession::mount(surface, config));
    // Leaflet may answer before `locate` returns; the slot is ready for it.
    session.locate();
    Ok(())
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Full-viewport Leaflet map with the user's location marker.
#[component]
pub fn MapView(config: MapConfig) -> Element {
    let session: SharedSession = use_hook(SessionSlot::new);

    let drop_session = session.clone();
    use_drop(move || drop_session.teardown());

    rsx! {
        div { id: "map-container",
            div {
                id: MAP_CONTAINER_ID,
                style: "height: 100vh;",
                onmounted: move |_| {
                    if let Err(e) = mount_map(&session, config.clone()) {
                        // The rest of the page works without a map.
                        tracing::warn!(error = %e, "Map view not initialized");
                    }
                },
            }
        }
    }
}
