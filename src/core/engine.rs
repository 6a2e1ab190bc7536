//! The map engine
//!
//! [`MapEngine`] owns the result markers, the hover-suppression flag, and
//! the binding of the single shared info popup, and runs the
//! search-and-render pipeline. No external component mutates that state
//! directly; everything flows through the event handlers and the pipeline
//! methods here.
//!
//! The pipeline is split into [`begin_search`](MapEngine::begin_search) and
//! [`apply_response`](MapEngine::apply_response) so that hosts driving an
//! event loop can keep interacting with the previous result set while a
//! request is in flight. Each `begin_search` bumps a generation token;
//! a response carrying a superseded generation is dropped instead of
//! repopulating stale markers.

use crate::{
    core::{
        config::EngineConfig,
        marker::{MarkerId, MarkerSet},
    },
    data::business::Business,
    input::events::MarkerEvent,
    search::provider::{SearchError, SearchOutcome, SearchProvider, SearchQuery, SearchTicket},
    traits::{ListPanel, MapSurface, Notifier},
    ui::view_model::{ListEntry, PopupContent},
};

pub struct MapEngine {
    config: EngineConfig,
    surface: Box<dyn MapSurface>,
    notifier: Box<dyn Notifier>,
    list: Box<dyn ListPanel>,
    provider: Box<dyn SearchProvider>,
    markers: MarkerSet,
    hover_suppressed: bool,
    generation: u64,
    last_error: Option<SearchError>,
}

impl MapEngine {
    pub fn new(
        surface: Box<dyn MapSurface>,
        notifier: Box<dyn Notifier>,
        list: Box<dyn ListPanel>,
        provider: Box<dyn SearchProvider>,
        config: EngineConfig,
    ) -> Self {
        Self {
            config,
            surface,
            notifier,
            list,
            provider,
            markers: MarkerSet::new(),
            hover_suppressed: false,
            generation: 0,
            last_error: None,
        }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn hover_suppressed(&self) -> bool {
        self.hover_suppressed
    }

    /// Transport error from the most recent search, if it failed
    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Search pipeline
    // ------------------------------------------------------------------

    /// Starts a search: synchronously tears down the current result set and
    /// returns the ticket identifying this request.
    ///
    /// Teardown happens here, unconditionally, so no stale markers survive
    /// into the next result set even if the request later fails.
    pub fn begin_search(&mut self, query: SearchQuery) -> SearchTicket {
        self.clear_results();
        self.generation += 1;

        let center = self.surface.center();
        log::debug!(
            "search #{} begins: category={} radius={}m center={}",
            self.generation,
            query.category,
            query.radius,
            center
        );

        SearchTicket {
            generation: self.generation,
            query,
            center,
        }
    }

    /// Applies the outcome of a search. Outcomes for superseded tickets are
    /// dropped.
    pub fn apply_response(&mut self, ticket: &SearchTicket, outcome: SearchOutcome) {
        if ticket.generation != self.generation {
            log::debug!(
                "dropping stale response for search #{} (current #{})",
                ticket.generation,
                self.generation
            );
            return;
        }

        match outcome {
            Ok(businesses) => self.populate(businesses),
            Err(error) => {
                log::warn!("search #{} failed: {}", ticket.generation, error);
                let notice = match error.status {
                    Some(status) => {
                        format!("Restaurant search failed ({} {}).", status, error.message)
                    }
                    None => format!("Restaurant search failed ({}).", error.message),
                };
                self.notifier.error(&notice);
                self.last_error = Some(error);
            }
        }
    }

    /// Convenience wrapper: begin, run the provider, apply.
    pub async fn search(&mut self, query: SearchQuery) {
        let ticket = self.begin_search(query);
        let outcome = self.provider.search(&ticket).await;
        self.apply_response(&ticket, outcome);
    }

    fn clear_results(&mut self) {
        self.surface.close_popup();
        for id in self.markers.clear() {
            self.surface.remove_marker(id);
        }
        self.list.clear();
        self.last_error = None;
    }

    /// Renders markers and list entries for the non-closed businesses, in
    /// the order the provider returned them.
    fn populate(&mut self, businesses: Vec<Business>) {
        // A fresh result set restores hover behavior.
        self.hover_suppressed = false;

        // "Closed" means permanently out of business, not outside opening
        // hours; see the field docs on `Business::is_closed`.
        let open: Vec<Business> = businesses.into_iter().filter(|b| !b.is_closed).collect();

        if open.is_empty() {
            log::info!("search #{} returned no displayable results", self.generation);
            self.notifier.warn("Search returned no results.");
            self.list.show_empty();
            return;
        }

        let entries: Vec<ListEntry> = open
            .iter()
            .enumerate()
            .map(|(i, business)| ListEntry::from_business(business, i + 1))
            .collect();

        for business in open {
            let position = business.coordinate();
            let title = business.name.clone();
            let id = self.markers.push(business);
            self.surface
                .add_marker(id, position, &title, &self.config.icons.default_icon);
        }

        self.list.show_entries(&entries);
        log::info!(
            "search #{} rendered {} markers",
            self.generation,
            self.markers.len()
        );
    }

    // ------------------------------------------------------------------
    // Marker / infowindow state machine
    // ------------------------------------------------------------------

    /// Dispatches one interaction event to the matching handler
    pub fn handle_event(&mut self, event: MarkerEvent) {
        match event {
            MarkerEvent::HoverEnter(id) => self.on_hover_enter(id),
            MarkerEvent::HoverLeave(id) => self.on_hover_leave(id),
            MarkerEvent::Click(id) => self.on_click(id),
            MarkerEvent::PopupClosed => self.on_popup_closed(),
            MarkerEvent::ListViewEntered => self.enter_list_view(),
            MarkerEvent::ListViewExited => self.exit_list_view(),
        }
    }

    /// Hover activates the marker and opens the popup, unless a click has
    /// pinned another marker.
    pub fn on_hover_enter(&mut self, id: MarkerId) {
        if self.hover_suppressed {
            return;
        }
        self.activate(id);
    }

    pub fn on_hover_leave(&mut self, id: MarkerId) {
        if self.hover_suppressed {
            return;
        }
        if self.markers.deactivate(id) {
            self.surface
                .set_marker_icon(id, &self.config.icons.default_icon);
            self.surface.close_popup();
        }
    }

    /// A click pins the marker: the popup stays open and hover activation is
    /// suppressed until the user closes the popup or exits list view.
    pub fn on_click(&mut self, id: MarkerId) {
        if self.markers.get(id).is_none() {
            return;
        }

        if self.hover_suppressed {
            // A previous click pinned another marker; move the pin here.
            self.reset_markers();
            self.activate(id);
        } else if !self.markers.get(id).map(|m| m.is_active()).unwrap_or(false) {
            // Hover normally precedes a click, leaving the marker already
            // active; cover input paths where it didn't (e.g. touch).
            self.activate(id);
        }

        self.hover_suppressed = true;
    }

    /// The user dismissed the popup: hover behavior is fully restored.
    pub fn on_popup_closed(&mut self) {
        self.reset_markers();
        self.hover_suppressed = false;
    }

    /// A modal list view is on top of the map: close whichever marker is
    /// active and suppress accidental hover activation. Idempotent.
    pub fn enter_list_view(&mut self) {
        self.reset_markers();
        self.surface.close_popup();
        self.hover_suppressed = true;
    }

    /// List view closed without a selection
    pub fn exit_list_view(&mut self) {
        self.hover_suppressed = false;
    }

    /// Makes `id` the single active marker and binds the popup to it. Any
    /// other active marker is demoted first.
    fn activate(&mut self, id: MarkerId) {
        let demoted = match self.markers.activate(id) {
            Some(demoted) => demoted,
            None => return,
        };
        for other in demoted {
            self.surface
                .set_marker_icon(other, &self.config.icons.default_icon);
        }
        self.surface
            .set_marker_icon(id, &self.config.icons.active_icon);

        let content = match self.markers.get(id) {
            Some(marker) => PopupContent::from_business(marker.business(), self.config.device),
            None => return,
        };
        self.surface.open_popup(id, &content);
    }

    fn reset_markers(&mut self) {
        for id in self.markers.reset_all() {
            self.surface
                .set_marker_icon(id, &self.config.icons.default_icon);
        }
    }
}
