//! Collaborator seams
//!
//! The engine never talks to a concrete rendering surface, notification
//! widget, or list panel. Hosts bind their UI stack through these traits,
//! and tests inject recording mocks so the whole interaction core runs
//! without a live rendering surface.

use crate::{
    core::{geo::LatLng, marker::MarkerId},
    ui::view_model::{ListEntry, PopupContent},
};

/// Map rendering collaborator.
///
/// Owns the visual markers and the single shared info popup. The popup is
/// bound to at most one marker at a time; `open_popup` re-binds it.
pub trait MapSurface: Send {
    /// Create a marker at `position` with the given title and icon
    fn add_marker(&mut self, id: MarkerId, position: LatLng, title: &str, icon: &str);

    /// Remove a marker from the surface
    fn remove_marker(&mut self, id: MarkerId);

    /// Swap a marker's icon
    fn set_marker_icon(&mut self, id: MarkerId, icon: &str);

    /// Open the shared popup bound to the given marker
    fn open_popup(&mut self, id: MarkerId, content: &PopupContent);

    /// Close the shared popup
    fn close_popup(&mut self);

    /// Current visual center of the viewport
    fn center(&self) -> LatLng;
}

/// Notification collaborator; fire-and-forget user-visible notices
pub trait Notifier: Send {
    fn warn(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// List-view UI collaborator
pub trait ListPanel: Send {
    /// Replace the list contents with the given entries
    fn show_entries(&mut self, entries: &[ListEntry]);

    /// Show the explicit no-results entry
    fn show_empty(&mut self);

    /// Clear the list contents
    fn clear(&mut self);
}
