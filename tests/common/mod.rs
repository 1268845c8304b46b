//! Shared test helpers.

#![allow(dead_code)]

use kounti::config::MemoryThemeStorage;
use kounti::numeral::{display_glyph, BlockType};
use kounti::ui::counter::{CounterState, CounterStore};

/// State in `block_type` showing `indexes` (least-significant first).
pub fn state_with(block_type: BlockType, indexes: &[u8]) -> CounterState {
    CounterState {
        current_indexes: indexes.to_vec(),
        ..CounterState::with_base(block_type, indexes.len())
    }
}

/// Store over `state` with an in-memory theme slot the test can inspect.
pub fn store_with(state: CounterState) -> (CounterStore, MemoryThemeStorage) {
    let storage = MemoryThemeStorage::default();
    let store = CounterStore::new(state, Box::new(storage.clone()));
    (store, storage)
}

/// Glyphs of `state` in display order (most-significant digit first).
pub fn glyphs(state: &CounterState) -> Vec<&'static str> {
    state
        .current_indexes
        .iter()
        .rev()
        .map(|&value| display_glyph(value))
        .collect()
}

/// Every digit combination of `width` digits in `block_type`.
pub fn all_states(block_type: BlockType, width: usize) -> Vec<CounterState> {
    let radix = usize::from(block_type.radix());
    let total = radix.pow(width as u32);
    (0..total)
        .map(|mut n| {
            let indexes: Vec<u8> = (0..width)
                .map(|_| {
                    let digit = (n % radix) as u8;
                    n /= radix;
                    digit
                })
                .collect();
            state_with(block_type, &indexes)
        })
        .collect()
}
