//! Marker interaction events
//!
//! Hover and click are independent input channels that both want to control
//! the same single shared popup; the engine arbitrates between them with the
//! hover-suppression flag (see
//! [`MapEngine::handle_event`](crate::core::engine::MapEngine::handle_event)).

use crate::core::marker::MarkerId;
use serde::{Deserialize, Serialize};

/// Events driving the marker/infowindow state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerEvent {
    /// Pointer entered a marker
    HoverEnter(MarkerId),
    /// Pointer left a marker
    HoverLeave(MarkerId),
    /// Marker was clicked or tapped
    Click(MarkerId),
    /// The user dismissed the shared popup
    PopupClosed,
    /// The modal list view opened on top of the map
    ListViewEntered,
    /// The modal list view closed without a selection
    ListViewExited,
}

impl MarkerEvent {
    /// Marker this event addresses, if any
    pub fn marker(&self) -> Option<MarkerId> {
        match self {
            MarkerEvent::HoverEnter(id)
            | MarkerEvent::HoverLeave(id)
            | MarkerEvent::Click(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether the event comes from the hover input channel
    pub fn is_hover(&self) -> bool {
        matches!(
            self,
            MarkerEvent::HoverEnter(_) | MarkerEvent::HoverLeave(_)
        )
    }
}
