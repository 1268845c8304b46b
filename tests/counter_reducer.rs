mod common;

use common::{all_states, state_with};
use kounti::numeral::BlockType;
use kounti::ui::counter::{CounterIntent, CounterReducer, CounterState};
use kounti::ui::mvi::Reducer;

fn reduce(state: CounterState, intent: CounterIntent) -> CounterState {
    CounterReducer::reduce(state, intent)
}

#[test]
fn binary_increment_carries_through_two_digits() {
    let next = reduce(state_with(BlockType::Binary, &[1, 1, 0]), CounterIntent::Increment);
    assert_eq!(next.current_indexes, vec![0, 0, 1]);
}

#[test]
fn decimal_single_digit_wraps() {
    let next = reduce(state_with(BlockType::Decimal, &[9]), CounterIntent::Increment);
    assert_eq!(next.current_indexes, vec![0]);
}

#[test]
fn increment_of_all_max_wraps_to_all_min() {
    for &block_type in BlockType::all() {
        let max = block_type.radix() - 1;
        let next = reduce(state_with(block_type, &[max; 4]), CounterIntent::Increment);
        assert_eq!(next.current_indexes, vec![0; 4], "{block_type}");
    }
}

#[test]
fn decrement_of_all_min_wraps_to_all_max() {
    for &block_type in BlockType::all() {
        let max = block_type.radix() - 1;
        let next = reduce(state_with(block_type, &[0; 4]), CounterIntent::Decrement);
        assert_eq!(next.current_indexes, vec![max; 4], "{block_type}");
    }
}

#[test]
fn decrement_undoes_increment_away_from_the_top() {
    for &block_type in &[BlockType::Binary, BlockType::Octal] {
        let max = block_type.radix() - 1;
        for state in all_states(block_type, 3) {
            if state.current_indexes.iter().all(|&d| d == max) {
                continue;
            }
            let round_trip = reduce(
                reduce(state.clone(), CounterIntent::Increment),
                CounterIntent::Decrement,
            );
            assert_eq!(round_trip, state);
        }
    }
}

#[test]
fn increment_counts_up_by_one() {
    let mut state = state_with(BlockType::Decimal, &[0, 0, 0]);
    for expected in 1..=250u128 {
        state = reduce(state, CounterIntent::Increment);
        assert_eq!(state.value(), Some(expected));
    }
}

#[test]
fn change_base_resets_to_new_minimum() {
    for &from in BlockType::all() {
        for &to in BlockType::all() {
            for width in 0..4 {
                let max = from.radix() - 1;
                let start = state_with(from, &vec![max; width]);
                let next = reduce(start, CounterIntent::ChangeBase(to));
                assert_eq!(next.block_type, to);
                assert_eq!(next.range, to.range());
                assert_eq!(next.block_count, width);
                assert_eq!(next.current_indexes, vec![next.range[0]; width]);
            }
        }
    }
}

#[test]
fn change_base_to_active_base_repairs_stale_range() {
    for &block_type in BlockType::all() {
        let mut start = state_with(block_type, &[1, 0, 1]);
        start.range.clear();
        let next = reduce(start, CounterIntent::ChangeBase(block_type));
        assert_eq!(next.range, block_type.range(), "{block_type}");
        assert_eq!(next.current_indexes, vec![0, 0, 0]);

        let stepped = reduce(next, CounterIntent::Increment);
        assert_eq!(stepped.current_indexes, vec![1, 0, 0]);
    }
}

#[test]
fn add_block_appends_zero_as_most_significant() {
    let next = reduce(state_with(BlockType::Hexadecimal, &[15, 3]), CounterIntent::AddBlock);
    assert_eq!(next.block_count, 3);
    assert_eq!(next.current_indexes, vec![15, 3, 0]);
}

#[test]
fn remove_block_drops_most_significant() {
    let next = reduce(state_with(BlockType::Octal, &[1, 2, 7]), CounterIntent::RemoveBlock);
    assert_eq!(next.block_count, 2);
    assert_eq!(next.current_indexes, vec![1, 2]);
}

#[test]
fn remove_down_to_zero_blocks_then_stays() {
    let mut state = state_with(BlockType::Binary, &[1]);
    state = reduce(state, CounterIntent::RemoveBlock);
    assert_eq!(state.block_count, 0);
    assert!(state.current_indexes.is_empty());
    state = reduce(state, CounterIntent::RemoveBlock);
    assert_eq!(state.block_count, 0);

    // Stepping an empty counter changes nothing.
    let stepped = reduce(state.clone(), CounterIntent::Increment);
    assert_eq!(stepped, state);
}

#[test]
fn reset_keeps_block_count() {
    let next = reduce(state_with(BlockType::Decimal, &[4, 5, 6, 7]), CounterIntent::Reset);
    assert_eq!(next.current_indexes, vec![0, 0, 0, 0]);
    assert_eq!(next.block_count, 4);
}

#[test]
fn digits_stay_in_range_through_mixed_sequence() {
    let intents = [
        CounterIntent::AddBlock,
        CounterIntent::Increment,
        CounterIntent::ChangeBase(BlockType::Hexadecimal),
        CounterIntent::Decrement,
        CounterIntent::RemoveBlock,
        CounterIntent::AddBlock,
        CounterIntent::AddBlock,
        CounterIntent::Increment,
        CounterIntent::Reset,
    ];
    let mut state = CounterState::default();
    for intent in intents {
        state = reduce(state, intent);
        assert_eq!(state.current_indexes.len(), state.block_count);
        let max = *state.range.last().unwrap();
        assert!(state.current_indexes.iter().all(|&d| d <= max));
    }
}
