//! # Marker Synchronization
//!
//! Keeps the rendered marker set of a map surface in step with the visible
//! POI set: one marker per visible POI, no duplicates, no orphans.
//!
//! The map SDK itself (tiles, projection, popups, controls) sits behind the
//! [`MapSurface`] trait; this module only drives it. Reconciliation is a set
//! difference rather than a clear-and-recreate:
//!
//! - markers whose POI is no longer visible are removed,
//! - markers for newly visible POIs are added,
//! - markers whose POI merely moved are repositioned in place.
//!
//! This keeps the work proportional to what changed and preserves open
//! popups and selection on untouched markers across unrelated updates.
//!
//! A rendered marker carries the POI id and its last-known coordinates,
//! never the POI itself — the store remains sole owner of the data. The one
//! path by which the visual layer feeds back into the data model is a drag:
//! hosts must route drag-end through `PoiStore::update` (see `MapApi::end_drag`)
//! instead of mutating anything here.

use crate::model::{category_icon, LngLat, Poi};
use std::collections::{HashMap, HashSet};

/// Opaque token identifying one rendered marker on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Everything a surface needs to render a marker and its popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerAppearance {
    /// Back-reference to the POI this marker stands for.
    pub poi_id: String,
    pub icon: &'static str,
    pub title: String,
    pub popup_text: String,
}

impl MarkerAppearance {
    pub fn for_poi(poi: &Poi) -> Self {
        Self {
            poi_id: poi.id.clone(),
            icon: category_icon(&poi.category),
            title: poi.title.clone(),
            popup_text: poi.description.clone(),
        }
    }
}

/// The rendering operations mapita needs from a mapping SDK.
///
/// Implementations wrap whatever SDK the host embeds (Mapbox GL, Bing Maps,
/// a test double); mapita never talks to an SDK directly.
pub trait MapSurface {
    fn add_marker(&mut self, coords: LngLat, appearance: MarkerAppearance) -> MarkerHandle;
    fn remove_marker(&mut self, handle: MarkerHandle);
    fn set_marker_position(&mut self, handle: MarkerHandle, coords: LngLat);
    fn open_popup(&mut self, handle: MarkerHandle);
    fn fly_to(&mut self, center: LngLat, zoom: f64);
    fn fit_bounds(&mut self, coords: &[LngLat], padding: u32);
}

#[derive(Debug, Clone, Copy)]
struct RenderedMarker {
    handle: MarkerHandle,
    coords: LngLat,
}

/// Owns the marker lifecycle for one map surface.
#[derive(Debug, Default)]
pub struct MarkerSync {
    rendered: HashMap<String, RenderedMarker>,
}

impl MarkerSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the rendered marker set match `visible`.
    ///
    /// Untouched markers are never recreated, so their popup/selection
    /// state survives unrelated updates.
    pub fn reconcile<M: MapSurface>(&mut self, visible: &[&Poi], map: &mut M) {
        let visible_ids: HashSet<&str> = visible.iter().map(|p| p.id.as_str()).collect();

        let stale: Vec<String> = self
            .rendered
            .keys()
            .filter(|id| !visible_ids.contains(id.as_str()))
            .cloned()
            .collect();
        for id in stale {
            if let Some(marker) = self.rendered.remove(&id) {
                map.remove_marker(marker.handle);
            }
        }

        for poi in visible {
            match self.rendered.get_mut(&poi.id) {
                Some(marker) => {
                    if marker.coords != poi.coords {
                        map.set_marker_position(marker.handle, poi.coords);
                        marker.coords = poi.coords;
                    }
                }
                None => {
                    let handle = map.add_marker(poi.coords, MarkerAppearance::for_poi(poi));
                    self.rendered.insert(
                        poi.id.clone(),
                        RenderedMarker {
                            handle,
                            coords: poi.coords,
                        },
                    );
                }
            }
        }
    }

    /// Resolves the marker for a POI id, for go/info style actions.
    pub fn handle_of(&self, id: &str) -> Option<MarkerHandle> {
        self.rendered.get(id).map(|m| m.handle)
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}

/// A surface that renders nothing. Used by headless hosts (the CLI) that
/// only need the store, filtering and list projection.
#[derive(Debug, Default)]
pub struct DetachedMap {
    next_handle: u64,
}

impl DetachedMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for DetachedMap {
    fn add_marker(&mut self, _coords: LngLat, _appearance: MarkerAppearance) -> MarkerHandle {
        self.next_handle += 1;
        MarkerHandle(self.next_handle)
    }

    fn remove_marker(&mut self, _handle: MarkerHandle) {}

    fn set_marker_position(&mut self, _handle: MarkerHandle, _coords: LngLat) {}

    fn open_popup(&mut self, _handle: MarkerHandle) {}

    fn fly_to(&mut self, _center: LngLat, _zoom: f64) {}

    fn fit_bounds(&mut self, _coords: &[LngLat], _padding: u32) {}
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Records every surface call so tests can assert reconciliation did
    /// the minimal amount of work.
    #[derive(Debug, Default)]
    pub struct RecordingMap {
        next_handle: u64,
        /// Live markers by handle: (POI id, current coords).
        pub live: HashMap<u64, (String, LngLat)>,
        pub added: Vec<String>,
        pub removed: Vec<String>,
        pub repositioned: Vec<String>,
        pub popups_opened: Vec<u64>,
        pub fly_tos: Vec<(LngLat, f64)>,
        pub fit_bounds_calls: Vec<usize>,
    }

    impl RecordingMap {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn live_ids(&self) -> HashSet<String> {
            self.live.values().map(|(id, _)| id.clone()).collect()
        }
    }

    impl MapSurface for RecordingMap {
        fn add_marker(&mut self, coords: LngLat, appearance: MarkerAppearance) -> MarkerHandle {
            self.next_handle += 1;
            self.live
                .insert(self.next_handle, (appearance.poi_id.clone(), coords));
            self.added.push(appearance.poi_id);
            MarkerHandle(self.next_handle)
        }

        fn remove_marker(&mut self, handle: MarkerHandle) {
            if let Some((id, _)) = self.live.remove(&handle.0) {
                self.removed.push(id);
            }
        }

        fn set_marker_position(&mut self, handle: MarkerHandle, coords: LngLat) {
            if let Some(entry) = self.live.get_mut(&handle.0) {
                entry.1 = coords;
                self.repositioned.push(entry.0.clone());
            }
        }

        fn open_popup(&mut self, handle: MarkerHandle) {
            self.popups_opened.push(handle.0);
        }

        fn fly_to(&mut self, center: LngLat, zoom: f64) {
            self.fly_tos.push((center, zoom));
        }

        fn fit_bounds(&mut self, coords: &[LngLat], _padding: u32) {
            self.fit_bounds_calls.push(coords.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::RecordingMap;
    use super::*;

    fn poi(id: &str, lng: f64, lat: f64) -> Poi {
        Poi::new(id, id.to_uppercase(), "", "user", LngLat::new(lng, lat))
    }

    #[test]
    fn first_reconcile_adds_everything() {
        let pois = vec![poi("a", 0.0, 0.0), poi("b", 1.0, 1.0)];
        let visible: Vec<&Poi> = pois.iter().collect();

        let mut sync = MarkerSync::new();
        let mut map = RecordingMap::new();
        sync.reconcile(&visible, &mut map);

        assert_eq!(sync.len(), 2);
        assert_eq!(map.added, vec!["a", "b"]);
        assert!(map.removed.is_empty());
    }

    #[test]
    fn transition_removes_and_adds_exactly_the_difference() {
        let abc = vec![poi("a", 0.0, 0.0), poi("b", 1.0, 1.0), poi("c", 2.0, 2.0)];
        let bcd = vec![poi("b", 1.0, 1.0), poi("c", 2.0, 2.0), poi("d", 3.0, 3.0)];

        let mut sync = MarkerSync::new();
        let mut map = RecordingMap::new();
        sync.reconcile(&abc.iter().collect::<Vec<_>>(), &mut map);

        let b_handle = sync.handle_of("b").unwrap();
        let c_handle = sync.handle_of("c").unwrap();

        sync.reconcile(&bcd.iter().collect::<Vec<_>>(), &mut map);

        assert_eq!(map.removed, vec!["a"]);
        assert_eq!(map.added, vec!["a", "b", "c", "d"]); // d is the only new add
        assert!(map.repositioned.is_empty());

        // Surviving markers were not recreated.
        assert_eq!(sync.handle_of("b"), Some(b_handle));
        assert_eq!(sync.handle_of("c"), Some(c_handle));
        let expected: HashSet<String> = ["b", "c", "d"].map(String::from).into();
        assert_eq!(map.live_ids(), expected);
    }

    #[test]
    fn moved_poi_is_repositioned_not_recreated() {
        let before = vec![poi("a", 0.0, 0.0)];
        let after = vec![poi("a", 5.0, 5.0)];

        let mut sync = MarkerSync::new();
        let mut map = RecordingMap::new();
        sync.reconcile(&before.iter().collect::<Vec<_>>(), &mut map);
        let handle = sync.handle_of("a").unwrap();

        sync.reconcile(&after.iter().collect::<Vec<_>>(), &mut map);

        assert_eq!(map.repositioned, vec!["a"]);
        assert_eq!(map.added.len(), 1);
        assert!(map.removed.is_empty());
        assert_eq!(sync.handle_of("a"), Some(handle));
        assert_eq!(map.live[&handle.0].1, LngLat::new(5.0, 5.0));
    }

    #[test]
    fn unchanged_visible_set_is_a_no_op() {
        let pois = vec![poi("a", 0.0, 0.0), poi("b", 1.0, 1.0)];
        let visible: Vec<&Poi> = pois.iter().collect();

        let mut sync = MarkerSync::new();
        let mut map = RecordingMap::new();
        sync.reconcile(&visible, &mut map);
        sync.reconcile(&visible, &mut map);
        sync.reconcile(&visible, &mut map);

        assert_eq!(map.added.len(), 2);
        assert!(map.removed.is_empty());
        assert!(map.repositioned.is_empty());
    }

    #[test]
    fn empty_visible_set_clears_all_markers() {
        let pois = vec![poi("a", 0.0, 0.0), poi("b", 1.0, 1.0)];

        let mut sync = MarkerSync::new();
        let mut map = RecordingMap::new();
        sync.reconcile(&pois.iter().collect::<Vec<_>>(), &mut map);
        sync.reconcile(&[], &mut map);

        assert!(sync.is_empty());
        assert!(map.live.is_empty());
        assert_eq!(map.removed.len(), 2);
    }

    #[test]
    fn handle_of_unknown_id_is_none() {
        let sync = MarkerSync::new();
        assert_eq!(sync.handle_of("nope"), None);
    }
}
