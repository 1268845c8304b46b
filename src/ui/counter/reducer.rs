use std::cmp::Ordering;

use crate::numeral::BlockType;
use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::{CounterPatch, CounterState};
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Update(patch) => apply_patch(state, patch),
            CounterIntent::Increment => increment(state),
            CounterIntent::Decrement => decrement(state),
            CounterIntent::AddBlock => add_block(state),
            CounterIntent::RemoveBlock => remove_block(state),
            CounterIntent::ChangeBase(block_type) => change_base(state, block_type),
            CounterIntent::Reset => reset(state),
            CounterIntent::SetTheme(theme) => CounterState { theme, ..state },
        }
    }
}

fn apply_patch(mut state: CounterState, patch: CounterPatch) -> CounterState {
    let base_changed = patch
        .block_type
        .is_some_and(|block_type| block_type != state.block_type);

    if let Some(block_type) = patch.block_type {
        state.block_type = block_type;
    }
    if let Some(block_count) = patch.block_count {
        state.block_count = block_count;
    }
    if let Some(indexes) = patch.current_indexes {
        state.current_indexes = indexes;
    }
    if let Some(range) = patch.range {
        state.range = range;
    }
    if let Some(theme) = patch.theme {
        state.theme = theme;
    }

    // Range is derived from the base and follows it in the same transition.
    if base_changed {
        state.range = state.block_type.range();
    }
    state
}

/// Selecting a base always rebuilds its range, even when it is already active.
fn change_base(state: CounterState, block_type: BlockType) -> CounterState {
    let mut state = apply_patch(state, CounterPatch::block_type(block_type));
    state.range = block_type.range();
    reset(state)
}

/// Odometer step up. A carry out of the top digit is dropped.
fn increment(mut state: CounterState) -> CounterState {
    let Some((min, max)) = state.bounds() else {
        return state;
    };
    for digit in state.current_indexes.iter_mut() {
        match (*digit).cmp(&max) {
            Ordering::Less => {
                *digit += 1;
                break;
            }
            Ordering::Equal => *digit = min,
            Ordering::Greater => break,
        }
    }
    state
}

/// Odometer step down. A borrow out of the top digit is dropped.
fn decrement(mut state: CounterState) -> CounterState {
    let Some((min, max)) = state.bounds() else {
        return state;
    };
    for digit in state.current_indexes.iter_mut() {
        match (*digit).cmp(&min) {
            Ordering::Greater => {
                *digit -= 1;
                break;
            }
            Ordering::Equal => *digit = max,
            Ordering::Less => break,
        }
    }
    state
}

fn add_block(mut state: CounterState) -> CounterState {
    state.block_count += 1;
    state.current_indexes.push(0);
    state
}

fn remove_block(mut state: CounterState) -> CounterState {
    state.block_count = state.block_count.saturating_sub(1);
    state.current_indexes.truncate(state.block_count);
    state
}

fn reset(mut state: CounterState) -> CounterState {
    let min = state.range.first().copied().unwrap_or(0);
    state.current_indexes = vec![min; state.block_count];
    state
}
