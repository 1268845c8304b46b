mod error;
mod intent;
mod reducer;
mod state;
mod store;

pub use error::CounterError;
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterPatch, CounterState};
pub use store::CounterStore;
