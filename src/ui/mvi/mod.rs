//! Model-View-Intent (MVI) primitives for the counter UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────── panel ───────────┘
//! ```
//!
//! - **State**: snapshot of everything the view renders
//! - **Intent**: a discrete user action (button activation)
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
