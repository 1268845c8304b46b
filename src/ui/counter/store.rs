//! Owner of the counter state.
//!
//! Every consumer gets the store by reference; there is no global.
//! Reads go through [`CounterStore::state`], writes through the
//! operations below, all of which funnel into [`CounterReducer`].

use crate::config::ThemeStorage;
use crate::numeral::BlockType;
use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::reducer::CounterReducer;
use crate::ui::counter::state::{CounterPatch, CounterState};
use crate::ui::mvi::Reducer;
use crate::ui::theme::Theme;

/// Run the reducer on the current state and store the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct CounterStore {
    state: CounterState,
    storage: Box<dyn ThemeStorage>,
}

impl CounterStore {
    /// Take ownership of the initial state. The range is recomputed once so
    /// it always matches the base, whatever the caller passed in.
    pub fn new(state: CounterState, storage: Box<dyn ThemeStorage>) -> Self {
        let mut store = Self { state, storage };
        store.recompute_range();
        store
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> CounterState {
        self.state.clone()
    }

    pub fn dispatch(&mut self, intent: CounterIntent) {
        tracing::debug!(?intent, "counter intent");
        dispatch_mvi!(self, state, CounterReducer, intent);
    }

    /// Merge `patch` into the state. Callers keep the invariants; only the
    /// base-to-range derivation is enforced here.
    pub fn update(&mut self, patch: CounterPatch) {
        if patch.is_empty() {
            return;
        }
        self.dispatch(CounterIntent::Update(patch));
    }

    pub fn recompute_range(&mut self) {
        let range = self.state.block_type.range();
        self.update(CounterPatch::range(range));
    }

    pub fn reset_indexes(&mut self) {
        self.dispatch(CounterIntent::Reset);
    }

    pub fn increment(&mut self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn add_block(&mut self) {
        self.dispatch(CounterIntent::AddBlock);
    }

    pub fn remove_block(&mut self) {
        self.dispatch(CounterIntent::RemoveBlock);
    }

    /// Switch base; the range follows and every digit resets to its minimum.
    pub fn change_base(&mut self, block_type: BlockType) {
        self.dispatch(CounterIntent::ChangeBase(block_type));
    }

    /// Set, apply and persist the theme.
    ///
    /// The palette is derived from `state.theme` on every draw, so updating
    /// the state applies it. A failed write is logged and otherwise ignored.
    pub fn set_theme(&mut self, theme: Theme) {
        let previous = self.state.theme;
        self.dispatch(CounterIntent::SetTheme(theme));
        tracing::info!(from = %previous, to = %theme, "theme applied");
        if let Err(err) = self.storage.save(theme) {
            tracing::warn!(error = %err, "Failed to persist theme");
        }
    }

    /// Startup restore: the persisted theme if there is one, else `preferred`.
    pub fn restore_theme(&mut self, preferred: Theme) {
        let theme = self.storage.load().unwrap_or(preferred);
        self.set_theme(theme);
    }
}
