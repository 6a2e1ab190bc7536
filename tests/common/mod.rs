//! Recording mock collaborators shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use nearbite::prelude::*;
use nearbite::data::business::{BusinessLocation, CategoryTag, Coordinate};
use std::sync::{Arc, Mutex};

/// Everything the mock surface was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Add(MarkerId, String),
    Remove(MarkerId),
    Icon(MarkerId, String),
    PopupOpen(MarkerId, String),
    PopupClose,
}

#[derive(Debug)]
pub struct SurfaceState {
    pub ops: Vec<SurfaceOp>,
    pub center: LatLng,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            ops: Vec::new(),
            center: LatLng::new(49.2851117, -123.1338859),
        }
    }
}

pub struct MockSurface {
    pub state: Arc<Mutex<SurfaceState>>,
}

impl MapSurface for MockSurface {
    fn add_marker(&mut self, id: MarkerId, _position: LatLng, title: &str, _icon: &str) {
        self.state
            .lock()
            .unwrap()
            .ops
            .push(SurfaceOp::Add(id, title.to_string()));
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.state.lock().unwrap().ops.push(SurfaceOp::Remove(id));
    }

    fn set_marker_icon(&mut self, id: MarkerId, icon: &str) {
        self.state
            .lock()
            .unwrap()
            .ops
            .push(SurfaceOp::Icon(id, icon.to_string()));
    }

    fn open_popup(&mut self, id: MarkerId, content: &PopupContent) {
        self.state
            .lock()
            .unwrap()
            .ops
            .push(SurfaceOp::PopupOpen(id, content.name.clone()));
    }

    fn close_popup(&mut self) {
        self.state.lock().unwrap().ops.push(SurfaceOp::PopupClose);
    }

    fn center(&self) -> LatLng {
        self.state.lock().unwrap().center
    }
}

pub struct MockNotifier {
    pub notices: Arc<Mutex<Vec<String>>>,
}

impl Notifier for MockNotifier {
    fn warn(&mut self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(format!("warn: {}", message));
    }

    fn error(&mut self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(format!("error: {}", message));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListOp {
    Entries(Vec<ListEntry>),
    Empty,
    Clear,
}

pub struct MockListPanel {
    pub ops: Arc<Mutex<Vec<ListOp>>>,
}

impl ListPanel for MockListPanel {
    fn show_entries(&mut self, entries: &[ListEntry]) {
        self.ops
            .lock()
            .unwrap()
            .push(ListOp::Entries(entries.to_vec()));
    }

    fn show_empty(&mut self) {
        self.ops.lock().unwrap().push(ListOp::Empty);
    }

    fn clear(&mut self) {
        self.ops.lock().unwrap().push(ListOp::Clear);
    }
}

/// Provider that returns a clone of a fixed outcome for every request
pub struct FixedProvider {
    pub outcome: std::result::Result<Vec<Business>, SearchError>,
}

#[async_trait]
impl SearchProvider for FixedProvider {
    async fn search(
        &self,
        _ticket: &SearchTicket,
    ) -> std::result::Result<Vec<Business>, SearchError> {
        self.outcome.clone()
    }
}

/// Inspection handles into the collaborators after they move into the engine
pub struct Handles {
    pub surface: Arc<Mutex<SurfaceState>>,
    pub notices: Arc<Mutex<Vec<String>>>,
    pub list: Arc<Mutex<Vec<ListOp>>>,
}

impl Handles {
    pub fn surface_ops(&self) -> Vec<SurfaceOp> {
        self.surface.lock().unwrap().ops.clone()
    }

    pub fn clear_surface_ops(&self) {
        self.surface.lock().unwrap().ops.clear();
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn list_ops(&self) -> Vec<ListOp> {
        self.list.lock().unwrap().clone()
    }
}

/// Engine wired to recording mocks and the given provider outcome
pub fn engine_with_outcome(
    outcome: std::result::Result<Vec<Business>, SearchError>,
) -> (MapEngine, Handles) {
    let surface_state = Arc::new(Mutex::new(SurfaceState::default()));
    let notices = Arc::new(Mutex::new(Vec::new()));
    let list_ops = Arc::new(Mutex::new(Vec::new()));

    let engine = MapEngineBuilder::new()
        .with_surface(Box::new(MockSurface {
            state: surface_state.clone(),
        }))
        .with_notifier(Box::new(MockNotifier {
            notices: notices.clone(),
        }))
        .with_list_panel(Box::new(MockListPanel {
            ops: list_ops.clone(),
        }))
        .with_provider(Box::new(FixedProvider { outcome }))
        .build()
        .expect("engine builds");

    (
        engine,
        Handles {
            surface: surface_state,
            notices,
            list: list_ops,
        },
    )
}

pub fn business(name: &str, closed: bool) -> Business {
    Business {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        location: BusinessLocation {
            address: "1040 Denman St".to_string(),
            city: "Vancouver".to_string(),
            coordinate: Coordinate {
                latitude: 49.29,
                longitude: -123.13,
            },
        },
        categories: vec![CategoryTag::new("Restaurants", "restaurants")],
        rating: 4.0,
        rating_img_url: "https://img.example.com/4.0.png".to_string(),
        rating_img_url_small: "https://img.example.com/4.0-small.png".to_string(),
        review_count: 12,
        display_phone: "+1-604-555-0100".to_string(),
        url: "https://example.com/biz".to_string(),
        mobile_url: "https://m.example.com/biz".to_string(),
        is_closed: closed,
        distance: 420.5,
    }
}

pub fn default_query() -> SearchQuery {
    SearchQuery {
        category: "restaurants".to_string(),
        radius: 500,
        sort: SortOrder::HighestRated,
    }
}

/// Ids of the markers currently in the engine's set, in result order
pub fn marker_ids(engine: &MapEngine) -> Vec<MarkerId> {
    engine.markers().iter().map(|m| m.id()).collect()
}
