//! Markers for the current result set
//!
//! A [`MarkerSet`] holds one [`Marker`] per displayed business, in result
//! order. The set is replaced wholesale on every search: the old markers are
//! fully torn down before new ones are added. Invariant: at most one marker
//! is [`MarkerState::Active`] at any instant.

use crate::{data::business::Business, prelude::HashMap};
use serde::{Deserialize, Serialize};

/// Identifier for a marker. Ids stay unique across set replacements so a
/// late event for a torn-down marker can never address a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

/// Visual state of a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerState {
    #[default]
    Default,
    Active,
}

/// One map marker backed by a displayed, non-closed business
#[derive(Debug, Clone)]
pub struct Marker {
    id: MarkerId,
    business: Business,
    index: usize,
    state: MarkerState,
}

impl Marker {
    fn new(id: MarkerId, business: Business, index: usize) -> Self {
        Self {
            id,
            business,
            index,
            state: MarkerState::default(),
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn business(&self) -> &Business {
        &self.business
    }

    /// Zero-based position in the current result ordering
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based index shared by the marker and its list entry
    pub fn display_index(&self) -> usize {
        self.index + 1
    }

    pub fn state(&self) -> MarkerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == MarkerState::Active
    }
}

/// Ordered collection of the current result markers
#[derive(Debug, Default)]
pub struct MarkerSet {
    markers: Vec<Marker>,
    slots: HashMap<MarkerId, usize>,
    next_id: u64,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a marker for `business` at the next result position
    pub fn push(&mut self, business: Business) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;

        let index = self.markers.len();
        self.slots.insert(id, index);
        self.markers.push(Marker::new(id, business, index));
        id
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.slots.get(&id).map(|&slot| &self.markers[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    /// Currently active marker, if any
    pub fn active(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.is_active())
    }

    /// Number of active markers; anything above 1 is a bug
    pub fn active_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_active()).count()
    }

    /// Makes `id` the single active marker. Any other active marker is
    /// demoted first; the demoted ids are returned so the caller can sync
    /// their visuals. Returns `None` when `id` is not in the set.
    pub fn activate(&mut self, id: MarkerId) -> Option<Vec<MarkerId>> {
        let &slot = self.slots.get(&id)?;

        let mut demoted = Vec::new();
        for marker in &mut self.markers {
            if marker.is_active() && marker.id != id {
                marker.state = MarkerState::Default;
                demoted.push(marker.id);
            }
        }
        self.markers[slot].state = MarkerState::Active;
        Some(demoted)
    }

    /// Returns `id` to the default state. True when the marker exists.
    pub fn deactivate(&mut self, id: MarkerId) -> bool {
        match self.slots.get(&id) {
            Some(&slot) => {
                self.markers[slot].state = MarkerState::Default;
                true
            }
            None => false,
        }
    }

    /// Demotes every marker to the default state, returning the ids that
    /// were active
    pub fn reset_all(&mut self) -> Vec<MarkerId> {
        let mut demoted = Vec::new();
        for marker in &mut self.markers {
            if marker.is_active() {
                marker.state = MarkerState::Default;
                demoted.push(marker.id);
            }
        }
        demoted
    }

    /// Tears the set down, returning the removed ids so the caller can drop
    /// them from the surface
    pub fn clear(&mut self) -> Vec<MarkerId> {
        self.slots.clear();
        self.markers.drain(..).map(|m| m.id).collect()
    }
}
