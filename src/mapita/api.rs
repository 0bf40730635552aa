//! # API Facade
//!
//! The single entry point for all mapita operations, regardless of the UI
//! driving it (the bundled CLI, a map-embedding host, tests).
//!
//! The facade owns the store, the filter selection, the marker
//! synchronizer and the map surface, and keeps them consistent: after
//! every mutation it re-derives the visible subset and reconciles the
//! rendered markers against it. UI clients never touch the store or the
//! surface directly.
//!
//! All operations run to completion, including the persistence write,
//! before the facade returns, so derived views never observe a torn
//! intermediate state. Completion handlers for external work (geocoding,
//! routing) perform a single store mutation when they run; overlapping
//! invocations of the same external operation are not fenced, the last
//! completion wins.

use std::collections::HashMap;
use std::path::Path;

use crate::commands::{self, CmdResult};
use crate::config::MapConfig;
use crate::error::{MapitaError, Result};
use crate::filter::FilterState;
use crate::geo::{Directions, Geocoder};
use crate::link::ViewLink;
use crate::list::{ListRow, RowAction};
use crate::markers::{MapSurface, MarkerSync};
use crate::model::{LngLat, PoiPatch};
use crate::store::poi_store::PoiStore;
use crate::store::Storage;

/// Zoom used when flying to a single POI.
const FOCUS_ZOOM: f64 = 15.0;
/// Zoom used when flying to a geocoding result.
const GEOCODE_ZOOM: f64 = 14.0;
/// Padding around fit-bounds views, in pixels.
const FIT_PADDING: u32 = 60;

/// Transient per-POI interaction state. Never persisted; the store only
/// ever holds pristine snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Pristine,
    Dragging,
    Editing,
}

/// The main facade. Generic over the storage backend and the map surface.
pub struct MapApi<S: Storage, M: MapSurface> {
    store: PoiStore<S>,
    filter: FilterState,
    sync: MarkerSync,
    map: M,
    interactions: HashMap<String, Interaction>,
}

impl<S: Storage, M: MapSurface> MapApi<S, M> {
    pub fn new(storage: S, map: M) -> Self {
        Self {
            store: PoiStore::new(storage),
            filter: FilterState::default(),
            sync: MarkerSync::new(),
            map,
            interactions: HashMap::new(),
        }
    }

    /// Loads persisted data (or the defaults), renders the initial marker
    /// set and fits the view around it.
    pub fn bootstrap(&mut self) {
        self.store.load_initial();
        self.refresh();
        self.fit_all();
    }

    pub fn store(&self) -> &PoiStore<S> {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn marker_count(&self) -> usize {
        self.sync.len()
    }

    // --- Store mutations ---

    pub fn add_poi(
        &mut self,
        title: String,
        description: String,
        category: String,
        coords: LngLat,
    ) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, title, description, category, coords)?;
        self.refresh();
        Ok(result)
    }

    pub fn update_poi(&mut self, id: &str, patch: PoiPatch) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, id, patch)?;
        self.refresh();
        Ok(result)
    }

    pub fn delete_poi(&mut self, id: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.interactions.remove(id);
        self.refresh();
        Ok(result)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        let result = commands::import::run(&mut self.store, path)?;
        self.interactions.clear();
        self.refresh();
        Ok(result)
    }

    pub fn export_file(&self, path: Option<&Path>) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        let result = commands::reset::run(&mut self.store)?;
        self.interactions.clear();
        self.refresh();
        Ok(result)
    }

    // --- Filtering and projection ---

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.refresh();
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.filter.toggle_category(category);
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.refresh();
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, &self.filter)
    }

    pub fn search(&self, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, term)
    }

    /// Current list rows, derived from the filtered view.
    pub fn rows(&self) -> Vec<ListRow> {
        crate::list::project(&self.filter.apply(self.store.list()))
    }

    // --- Row actions ---

    /// Resolves an action by its table name and runs it against the POI.
    pub fn dispatch(&mut self, id: &str, action_name: &str) -> Result<CmdResult> {
        let action = RowAction::from_name(action_name)
            .ok_or_else(|| MapitaError::Api(format!("Unknown action: {}", action_name)))?;
        match action {
            RowAction::Go => {
                self.go(id)?;
                Ok(CmdResult::default())
            }
            RowAction::Info => {
                self.info(id)?;
                Ok(CmdResult::default())
            }
            RowAction::Edit => {
                self.begin_edit(id)?;
                Ok(CmdResult::default())
            }
            RowAction::Delete => self.delete_poi(id),
        }
    }

    /// Centers the map on a POI.
    pub fn go(&mut self, id: &str) -> Result<()> {
        let poi = self
            .store
            .get(id)
            .ok_or_else(|| MapitaError::PoiNotFound(id.to_string()))?;
        self.map.fly_to(poi.coords, FOCUS_ZOOM);
        Ok(())
    }

    /// Opens the popup of a POI's rendered marker.
    pub fn info(&mut self, id: &str) -> Result<()> {
        let handle = self
            .sync
            .handle_of(id)
            .ok_or_else(|| MapitaError::Api(format!("No visible marker for {}", id)))?;
        self.map.open_popup(handle);
        Ok(())
    }

    /// Fits the view around every stored POI.
    pub fn fit_all(&mut self) {
        let coords: Vec<LngLat> = self.store.list().iter().map(|p| p.coords).collect();
        if !coords.is_empty() {
            self.map.fit_bounds(&coords, FIT_PADDING);
        }
    }

    // --- Interaction state machine ---

    pub fn interaction(&self, id: &str) -> Interaction {
        self.interactions
            .get(id)
            .copied()
            .unwrap_or(Interaction::Pristine)
    }

    pub fn begin_drag(&mut self, id: &str) -> Result<()> {
        self.require_pristine(id)?;
        self.interactions
            .insert(id.to_string(), Interaction::Dragging);
        Ok(())
    }

    /// Commits the drag as one atomic coordinate update.
    pub fn end_drag(&mut self, id: &str, coords: LngLat) -> Result<CmdResult> {
        if self.interaction(id) != Interaction::Dragging {
            return Err(MapitaError::Api(format!("{} is not being dragged", id)));
        }
        self.interactions.remove(id);
        self.update_poi(id, PoiPatch::coords(coords))
    }

    pub fn begin_edit(&mut self, id: &str) -> Result<()> {
        self.require_pristine(id)?;
        self.interactions
            .insert(id.to_string(), Interaction::Editing);
        Ok(())
    }

    /// Commits the edit (title and/or description).
    pub fn save_edit(&mut self, id: &str, patch: PoiPatch) -> Result<CmdResult> {
        if self.interaction(id) != Interaction::Editing {
            return Err(MapitaError::Api(format!("{} is not being edited", id)));
        }
        if patch.coords.is_some() {
            return Err(MapitaError::Api(
                "Edits change title and description only".to_string(),
            ));
        }
        self.interactions.remove(id);
        self.update_poi(id, patch)
    }

    /// Abandons the edit without committing anything.
    pub fn cancel_edit(&mut self, id: &str) {
        if self.interactions.get(id) == Some(&Interaction::Editing) {
            self.interactions.remove(id);
        }
    }

    fn require_pristine(&self, id: &str) -> Result<()> {
        if self.store.get(id).is_none() {
            return Err(MapitaError::PoiNotFound(id.to_string()));
        }
        match self.interaction(id) {
            Interaction::Pristine => Ok(()),
            other => Err(MapitaError::Api(format!(
                "{} already has a pending {:?}",
                id, other
            ))),
        }
    }

    // --- External services ---

    /// Completion handler for a geocoding request: adds the first hit as a
    /// persisted POI and flies to it. Failures and empty results leave the
    /// store untouched.
    pub fn geocode(&mut self, geocoder: &dyn Geocoder, query: &str) -> Result<CmdResult> {
        let hits = geocoder.geocode(query)?;
        let Some(hit) = hits.into_iter().next() else {
            return Err(MapitaError::Service(format!("No result for '{}'", query)));
        };

        let result = self.add_poi(
            hit.label.clone(),
            hit.address.clone(),
            "user".to_string(),
            hit.coords,
        )?;
        self.map.fly_to(hit.coords, GEOCODE_ZOOM);
        Ok(result)
    }

    /// Routes between two stored POIs and fits the view around the
    /// resulting polyline. Never mutates the store.
    pub fn route(
        &mut self,
        directions: &dyn Directions,
        from_id: &str,
        to_id: &str,
    ) -> Result<Vec<LngLat>> {
        let start = self
            .store
            .get(from_id)
            .ok_or_else(|| MapitaError::PoiNotFound(from_id.to_string()))?
            .coords;
        let end = self
            .store
            .get(to_id)
            .ok_or_else(|| MapitaError::PoiNotFound(to_id.to_string()))?
            .coords;

        let polyline = directions.route(start, end)?;
        if polyline.is_empty() {
            return Err(MapitaError::Service(format!(
                "No route between {} and {}",
                from_id, to_id
            )));
        }
        self.map.fit_bounds(&polyline, FIT_PADDING);
        Ok(polyline)
    }

    // --- View links ---

    /// Applies a shareable view link (falling back to configured defaults)
    /// and returns the resolved view.
    pub fn apply_view_link(&mut self, query: &str, config: &MapConfig) -> (LngLat, f64) {
        let (center, zoom) = ViewLink::parse(query).resolve(config.default_center, config.default_zoom);
        self.map.fly_to(center, zoom);
        (center, zoom)
    }

    /// Re-derives the visible subset and reconciles the rendered markers.
    fn refresh(&mut self) {
        let visible = self.filter.apply(self.store.list());
        self.sync.reconcile(&visible, &mut self.map);
    }
}
