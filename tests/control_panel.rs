mod common;

use common::{glyphs, state_with, store_with};
use kounti::numeral::BlockType;
use kounti::ui::counter::{CounterError, CounterPatch, CounterState};
use kounti::ui::panel::{ControlPanel, PanelButton};
use kounti::ui::theme::Theme;

#[test]
fn each_button_drives_its_operation() {
    let (mut store, storage) = store_with(CounterState::default());

    ControlPanel::activate(&mut store, PanelButton::Increment).unwrap();
    assert_eq!(store.state().current_indexes, vec![1, 0, 0]);

    ControlPanel::activate(&mut store, PanelButton::Decrement).unwrap();
    assert_eq!(store.state().current_indexes, vec![0, 0, 0]);

    ControlPanel::activate(&mut store, PanelButton::BlockAdd).unwrap();
    assert_eq!(store.state().block_count, 4);

    ControlPanel::activate(&mut store, PanelButton::BlockRemove).unwrap();
    assert_eq!(store.state().block_count, 3);

    ControlPanel::activate(&mut store, PanelButton::Base(BlockType::Decimal)).unwrap();
    assert_eq!(store.state().block_type, BlockType::Decimal);

    ControlPanel::activate(&mut store, PanelButton::Increment).unwrap();
    ControlPanel::activate(&mut store, PanelButton::Reset).unwrap();
    assert_eq!(store.state().current_indexes, vec![0, 0, 0]);

    ControlPanel::activate(&mut store, PanelButton::Theme(Theme::Light)).unwrap();
    assert_eq!(store.state().theme, Theme::Light);
    assert_eq!(storage.stored(), Some(Theme::Light));
}

#[test]
fn stepping_with_empty_range_fails_fast() {
    for button in [PanelButton::Increment, PanelButton::Decrement] {
        let (mut store, _) = store_with(state_with(BlockType::Binary, &[1, 0]));
        store.update(CounterPatch::range(Vec::new()));
        let before = store.snapshot();

        let result = ControlPanel::activate(&mut store, button);

        assert_eq!(result, Err(CounterError::RangeUninitialized));
        assert_eq!(store.snapshot(), before);
    }
}

#[test]
fn empty_range_does_not_block_other_buttons() {
    let (mut store, _) = store_with(CounterState::default());
    store.update(CounterPatch::range(Vec::new()));
    assert!(ControlPanel::activate(&mut store, PanelButton::BlockAdd).is_ok());
    ControlPanel::activate(&mut store, PanelButton::Base(BlockType::Octal)).unwrap();
    assert!(ControlPanel::activate(&mut store, PanelButton::Increment).is_ok());
}

#[test]
fn selecting_active_base_restores_range() {
    let (mut store, _) = store_with(CounterState::default());
    store.update(CounterPatch::range(Vec::new()));

    ControlPanel::activate(&mut store, PanelButton::Base(BlockType::Binary)).unwrap();
    assert_eq!(store.state().range, vec![0, 1]);

    ControlPanel::activate(&mut store, PanelButton::Increment).unwrap();
    assert_eq!(store.state().current_indexes, vec![1, 0, 0]);
}

#[test]
fn range_error_message_is_user_facing() {
    assert_eq!(
        CounterError::RangeUninitialized.to_string(),
        "Range was improperly initialized. Could not find min and max."
    );
}

#[test]
fn hexadecimal_glyphs_after_counting_up() {
    let (mut store, _) = store_with(CounterState::default());
    ControlPanel::activate(&mut store, PanelButton::Base(BlockType::Hexadecimal)).unwrap();
    for _ in 0..0xAF {
        ControlPanel::activate(&mut store, PanelButton::Increment).unwrap();
    }
    assert_eq!(glyphs(store.state()), vec!["0", "A", "F"]);
}

#[test]
fn glyphs_read_most_significant_first() {
    let state = state_with(BlockType::Hexadecimal, &[10, 0, 15]);
    assert_eq!(glyphs(&state), vec!["F", "0", "A"]);
}

#[test]
fn selected_buttons_follow_state() {
    let (mut store, _) = store_with(CounterState::default());
    ControlPanel::activate(&mut store, PanelButton::Base(BlockType::Octal)).unwrap();
    let selected: Vec<PanelButton> = PanelButton::all()
        .into_iter()
        .filter(|button| button.is_selected(store.state()))
        .collect();
    assert_eq!(
        selected,
        vec![
            PanelButton::Base(BlockType::Octal),
            PanelButton::Theme(Theme::Dark)
        ]
    );
}
