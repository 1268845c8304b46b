use crate::numeral::BlockType;
use crate::ui::mvi::UiState;
use crate::ui::theme::Theme;

/// Default number of digit blocks for a new session.
pub const DEFAULT_BLOCK_COUNT: usize = 3;

/// The single counter aggregate.
///
/// `current_indexes` is least-significant digit first and always holds
/// `block_count` entries; `range` is the canonical range of `block_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    pub block_type: BlockType,
    pub block_count: usize,
    pub current_indexes: Vec<u8>,
    pub range: Vec<u8>,
    pub theme: Theme,
}

impl UiState for CounterState {}

impl Default for CounterState {
    fn default() -> Self {
        Self::with_base(BlockType::Binary, DEFAULT_BLOCK_COUNT)
    }
}

impl CounterState {
    /// All-minimum state for the given base and width.
    pub fn with_base(block_type: BlockType, block_count: usize) -> Self {
        let range = block_type.range();
        let min = range.first().copied().unwrap_or(0);
        Self {
            block_type,
            block_count,
            current_indexes: vec![min; block_count],
            range,
            theme: Theme::default(),
        }
    }

    /// `(min, max)` of the active range, or `None` if the range is empty.
    pub fn bounds(&self) -> Option<(u8, u8)> {
        Some((*self.range.first()?, *self.range.last()?))
    }

    /// Numeric value of the digit sequence.
    ///
    /// `None` when it does not fit in a `u128` (very wide counters).
    pub fn value(&self) -> Option<u128> {
        let radix = u128::from(self.block_type.radix());
        self.current_indexes
            .iter()
            .rev()
            .try_fold(0u128, |acc, &digit| {
                acc.checked_mul(radix)?.checked_add(u128::from(digit))
            })
    }
}

/// Partial update of [`CounterState`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterPatch {
    pub block_type: Option<BlockType>,
    pub block_count: Option<usize>,
    pub current_indexes: Option<Vec<u8>>,
    pub range: Option<Vec<u8>>,
    pub theme: Option<Theme>,
}

impl CounterPatch {
    pub fn block_type(block_type: BlockType) -> Self {
        Self {
            block_type: Some(block_type),
            ..Self::default()
        }
    }

    pub fn current_indexes(indexes: Vec<u8>) -> Self {
        Self {
            block_count: Some(indexes.len()),
            current_indexes: Some(indexes),
            ..Self::default()
        }
    }

    pub fn range(range: Vec<u8>) -> Self {
        Self {
            range: Some(range),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
