use crate::numeral::BlockType;
use crate::ui::counter::state::CounterPatch;
use crate::ui::mvi::Intent;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    /// Merge the given fields into the state.
    /// A changed base also recomputes the range.
    Update(CounterPatch),
    /// Add one to the least-significant digit, carrying upwards.
    Increment,
    /// Subtract one from the least-significant digit, borrowing upwards.
    Decrement,
    AddBlock,
    RemoveBlock,
    /// Switch base and clear the displayed value.
    ChangeBase(BlockType),
    /// Set every digit to the range minimum.
    Reset,
    SetTheme(Theme),
}

impl Intent for CounterIntent {}
