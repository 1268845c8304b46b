//! Marker trait for intents.

/// An action that asks the reducer for a state transition.
///
/// In this application every intent originates from a control panel
/// button; there are no background producers.
pub trait Intent: Send + 'static {}
