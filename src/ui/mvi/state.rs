//! Marker trait for UI state.

/// Renderable state snapshot.
///
/// Cloneable so the view can hold a copy, comparable so callers can tell
/// whether a transition changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
