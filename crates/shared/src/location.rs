//! Lifecycle of the map view and the "you are here" marker.
//!
//! The mapping library sits behind [`MapSurface`]. A [`MapSession`] owns the
//! surface from mount until teardown, keeps at most one location marker on
//! it, and turns every callback that arrives after teardown into a no-op.
//! [`SessionSlot`] is where the view keeps its session so library callbacks
//! can reach it, including callbacks fired while the session is busy.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::MapConfig;
use crate::models::GeoPoint;

/// The operations the map view needs from a mapping library.
pub trait MapSurface {
    type Marker;

    fn set_view(&mut self, center: GeoPoint, zoom: f64);
    fn add_tile_layer(&mut self, url: &str, attribution: &str, detect_retina: bool, max_zoom: f64);
    /// Ask the platform for the user's position. The answer comes back as a
    /// [`LocationOutcome`], possibly before this call returns.
    fn request_location(&mut self, max_zoom: f64);
    /// Place a marker with its popup already open.
    fn place_marker(&mut self, at: GeoPoint, label: &str) -> Self::Marker;
    fn remove_marker(&mut self, marker: Self::Marker);
    fn show_error(&mut self, message: &str);
    /// Drop every listener and DOM binding held by the library.
    fn release(&mut self);
}

/// Answer to a geolocation request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Found(GeoPoint),
    Failed(String),
}

pub struct MapSession<S: MapSurface> {
    surface: Option<S>,
    marker: Option<(S::Marker, GeoPoint)>,
    config: MapConfig,
}

impl<S: MapSurface> MapSession<S> {
    /// Center the map and attach the tile layer. Location is requested
    /// separately with [`MapSession::locate`].
    pub fn mount(mut surface: S, config: MapConfig) -> Self {
        surface.set_view(config.center, config.zoom);
        surface.add_tile_layer(
            &config.tiles.url,
            &config.tiles.attribution,
            config.tiles.detect_retina,
            config.tiles.max_zoom,
        );
        tracing::info!(lat = config.center.lat, lng = config.center.lng, "Map mounted");

        MapSession {
            surface: Some(surface),
            marker: None,
            config,
        }
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    #[cfg(test)]
    pub fn marker_position(&self) -> Option<GeoPoint> {
        self.marker.as_ref().map(|(_, at)| *at)
    }

    /// Issue the one geolocation request.
    pub fn locate(&mut self) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        surface.request_location(self.config.located_zoom);
        true
    }

    pub fn apply(&mut self, outcome: LocationOutcome) -> bool {
        match outcome {
            LocationOutcome::Found(at) => self.location_found(at),
            LocationOutcome::Failed(message) => self.location_error(&message),
        }
    }

    /// Replace the location marker and recenter on it.
    ///
    /// Returns `false` if the session was already torn down.
    pub fn location_found(&mut self, at: GeoPoint) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            tracing::debug!("Ignoring location fix after teardown");
            return false;
        };

        if let Some((old, _)) = self.marker.take() {
            surface.remove_marker(old);
        }
        let marker = surface.place_marker(at, &self.config.marker.label);
        surface.set_view(at, self.config.located_zoom);
        self.marker = Some((marker, at));

        tracing::debug!(lat = at.lat, lng = at.lng, "Location marker placed");
        true
    }

    /// Tell the user why their position is unavailable. The view stays put.
    pub fn location_error(&mut self, message: &str) -> bool {
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        tracing::warn!(%message, "Geolocation failed");
        surface.show_error(message);
        true
    }

    /// Release the surface. Later calls are no-ops.
    pub fn teardown(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            // The library drops its own layers on release.
            self.marker = None;
            surface.release();
            tracing::info!("Map released");
        }
    }
}

impl<S: MapSurface> Drop for MapSession<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ---------------------------------------------------------------------------
// Shared slot
// ---------------------------------------------------------------------------

/// Holder for the mounted session, shared with the library's callbacks.
///
/// Outcomes are queued and applied once nothing else holds the session, so an
/// answer the library delivers from inside [`MapSurface::request_location`]
/// is applied as soon as that call returns.
pub struct SessionSlot<S: MapSurface> {
    session: RefCell<Option<MapSession<S>>>,
    pending: RefCell<VecDeque<LocationOutcome>>,
}

impl<S: MapSurface> SessionSlot<S> {
    pub fn new() -> Rc<Self> {
        Rc::new(SessionSlot {
            session: RefCell::new(None),
            pending: RefCell::new(VecDeque::new()),
        })
    }

    pub fn is_installed(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Store a freshly mounted session, tearing down any previous one.
    pub fn install(&self, session: MapSession<S>) {
        let previous = self.session.borrow_mut().replace(session);
        drop(previous);
    }

    /// Request the user's position from the installed session.
    pub fn locate(&self) {
        {
            let mut slot = self.session.borrow_mut();
            match slot.as_mut() {
                Some(live) => {
                    live.locate();
                }
                None => tracing::debug!("No map session to locate from"),
            }
        }
        self.drain();
    }

    /// Hand a geolocation answer to the session.
    pub fn deliver(&self, outcome: LocationOutcome) {
        self.pending.borrow_mut().push_back(outcome);
        self.drain();
    }

    pub fn teardown(&self) {
        let taken = self.session.borrow_mut().take();
        self.pending.borrow_mut().clear();
        if let Some(mut live) = taken {
            live.teardown();
        }
    }

    fn drain(&self) {
        loop {
            // Whoever holds the session drains the queue once it lets go.
            let Ok(mut slot) = self.session.try_borrow_mut() else {
                return;
            };
            let next = self.pending.borrow_mut().pop_front();
            let Some(outcome) = next else {
                return;
            };
            match slot.as_mut() {
                Some(live) => {
                    live.apply(outcome);
                }
                None => tracing::debug!(?outcome, "No live map session; dropping event"),
            }
        }
    }
}
