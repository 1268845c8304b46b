//! Control panel: the buttons that drive every counter mutation.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use crate::numeral::BlockType;
use crate::ui::counter::{CounterError, CounterState, CounterStore};
use crate::ui::theme::{Palette, Theme};

/// Columns between button groups.
const GROUP_GAP: u16 = 4;
/// Rows reserved above the tooltip line.
const BUTTON_ROWS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelButton {
    Base(BlockType),
    Increment,
    Decrement,
    BlockAdd,
    BlockRemove,
    Reset,
    Theme(Theme),
}

/// Buttons grouped into panel columns, in focus order.
const GROUPS: [&[PanelButton]; 5] = [
    &[
        PanelButton::Base(BlockType::Binary),
        PanelButton::Base(BlockType::Octal),
        PanelButton::Base(BlockType::Decimal),
        PanelButton::Base(BlockType::Hexadecimal),
    ],
    &[PanelButton::Increment, PanelButton::Decrement],
    &[PanelButton::BlockAdd, PanelButton::BlockRemove],
    &[PanelButton::Reset],
    &[
        PanelButton::Theme(Theme::Light),
        PanelButton::Theme(Theme::Dark),
    ],
];

impl PanelButton {
    /// Every button in focus order.
    pub fn all() -> Vec<PanelButton> {
        GROUPS.iter().flat_map(|group| group.iter().copied()).collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Base(block_type) => block_type.as_str(),
            Self::Increment => "add +",
            Self::Decrement => "subtract -",
            Self::BlockAdd => "block add +",
            Self::BlockRemove => "block subtract -",
            Self::Reset => "reset",
            Self::Theme(theme) => theme.as_str(),
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Base(block_type) => block_type.description(),
            Self::Increment => "Increment the counter.",
            Self::Decrement => "Decrement the counter.",
            Self::BlockAdd => "Add a block.",
            Self::BlockRemove => "Remove a block.",
            Self::Reset => "Reset the counter.",
            Self::Theme(Theme::Light) => "Light Theme.",
            Self::Theme(Theme::Dark) => "Dark Theme.",
        }
    }

    /// Whether the button reflects the current state (active base or theme).
    pub fn is_selected(&self, state: &CounterState) -> bool {
        match self {
            Self::Base(block_type) => *block_type == state.block_type,
            Self::Theme(theme) => *theme == state.theme,
            _ => false,
        }
    }

    fn width(&self) -> u16 {
        self.label().len() as u16
    }
}

/// Maps button activations onto store operations.
pub struct ControlPanel;

impl ControlPanel {
    /// Run the operation bound to `button`.
    ///
    /// Stepping the counter with an empty range is an invariant violation
    /// and returns [`CounterError::RangeUninitialized`] without touching
    /// the state; the caller treats it as fatal.
    pub fn activate(store: &mut CounterStore, button: PanelButton) -> Result<(), CounterError> {
        match button {
            PanelButton::Increment => {
                ensure_range(store.state())?;
                store.increment();
            }
            PanelButton::Decrement => {
                ensure_range(store.state())?;
                store.decrement();
            }
            PanelButton::BlockAdd => store.add_block(),
            PanelButton::BlockRemove => store.remove_block(),
            PanelButton::Base(block_type) => store.change_base(block_type),
            PanelButton::Reset => store.reset_indexes(),
            PanelButton::Theme(theme) => store.set_theme(theme),
        }
        Ok(())
    }

    /// Area holding the buttons inside a panel of `area`.
    pub fn buttons_area(area: Rect) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        Rect {
            height: inner.height.min(BUTTON_ROWS),
            ..inner
        }
    }

    /// Screen position of every visible button, for rendering and hit tests.
    ///
    /// Groups are laid out as centered columns; buttons that do not fit in
    /// `area` are clipped or left out.
    pub fn button_rects(area: Rect) -> Vec<(PanelButton, Rect)> {
        let widths: Vec<u16> = GROUPS
            .iter()
            .map(|group| group.iter().map(PanelButton::width).max().unwrap_or(0))
            .collect();
        let total = widths.iter().sum::<u16>() + GROUP_GAP * (GROUPS.len() as u16 - 1);

        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let mut rects = Vec::new();
        for (group, width) in GROUPS.iter().zip(widths) {
            for (row, button) in group.iter().enumerate() {
                let rect = Rect {
                    x,
                    y: area.y.saturating_add(row as u16),
                    width: button.width(),
                    height: 1,
                }
                .intersection(area);
                if !rect.is_empty() {
                    rects.push((*button, rect));
                }
            }
            x = x.saturating_add(width + GROUP_GAP);
        }
        rects
    }

    /// Button under a screen cell, if any.
    pub fn button_at(area: Rect, column: u16, row: u16) -> Option<PanelButton> {
        Self::button_rects(area)
            .into_iter()
            .find(|(_, rect)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(button, _)| button)
    }
}

fn ensure_range(state: &CounterState) -> Result<(u8, u8), CounterError> {
    state.bounds().ok_or(CounterError::RangeUninitialized)
}

/// Rendered control panel.
pub struct PanelView<'a> {
    pub state: &'a CounterState,
    pub palette: Palette,
    pub focused: Option<PanelButton>,
    pub hovered: Option<PanelButton>,
}

impl Widget for PanelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" kounti. ")
            .title_style(self.palette.title())
            .borders(Borders::ALL)
            .border_style(self.palette.border());
        let inner = block.inner(area);
        block.render(area, buf);

        let buttons = ControlPanel::buttons_area(area);
        for (button, rect) in ControlPanel::button_rects(buttons) {
            let mut style = Style::default().fg(self.palette.muted);
            if button.is_selected(self.state) {
                style = style.fg(self.palette.text).add_modifier(Modifier::BOLD);
            }
            if self.hovered == Some(button) {
                style = style.fg(self.palette.accent).add_modifier(Modifier::UNDERLINED);
            }
            if self.focused == Some(button) {
                style = style.bg(self.palette.highlight);
            }
            buf.set_stringn(rect.x, rect.y, button.label(), rect.width as usize, style);
        }

        // Tooltip on the last inner row, below a spacer.
        if inner.height > BUTTON_ROWS {
            if let Some(button) = self.hovered.or(self.focused) {
                let y = inner.y + inner.height - 1;
                let text = button.tooltip();
                let width = (text.len() as u16).min(inner.width);
                let x = inner.x + (inner.width - width) / 2;
                buf.set_stringn(x, y, text, width as usize, self.palette.dim());
            }
        }
    }
}
