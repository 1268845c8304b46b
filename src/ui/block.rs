//! Digit block view.
//!
//! Each block is a small odometer window: the previous candidate, the
//! active digit and the next candidate of the range. A candidate is drawn
//! as active only when it equals the digit stored at the block's position.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

use crate::numeral::display_glyph;
use crate::ui::counter::CounterState;
use crate::ui::theme::Palette;

pub const BLOCK_WIDTH: u16 = 7;
pub const BLOCK_HEIGHT: u16 = 5;
const BLOCK_GAP: u16 = 1;

/// Candidates shown in a block, top to bottom, with their active flag.
///
/// Neighbours wrap around the range. A value missing from the range is
/// shown alone.
pub fn odometer_window(value: u8, range: &[u8]) -> Vec<(u8, bool)> {
    let Some(position) = range.iter().position(|&candidate| candidate == value) else {
        return vec![(value, true)];
    };
    let len = range.len();
    let previous = range[(position + len - 1) % len];
    let next = range[(position + 1) % len];
    [previous, value, next]
        .into_iter()
        .enumerate()
        .map(|(row, candidate)| (candidate, row == 1 && candidate == value))
        .collect()
}

/// One digit position.
pub struct DigitBlock<'a> {
    value: u8,
    range: &'a [u8],
    palette: Palette,
}

impl<'a> DigitBlock<'a> {
    pub fn new(value: u8, range: &'a [u8], palette: Palette) -> Self {
        Self {
            value,
            range,
            palette,
        }
    }
}

impl Widget for DigitBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border())
            .style(Style::default().bg(self.palette.block_fill));
        let inner = frame.inner(area);
        frame.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let window = odometer_window(self.value, self.range);
        let top = inner.y + inner.height.saturating_sub(window.len() as u16) / 2;
        let x = inner.x + inner.width / 2;
        for (row, (candidate, active)) in window.into_iter().enumerate() {
            let y = top + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let style = if active {
                Style::default()
                    .fg(self.palette.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                self.palette.dim()
            };
            buf.set_string(x, y, display_glyph(candidate), style);
        }
    }
}

/// All digit blocks, most-significant on the left, centered in the body.
///
/// When the row is too narrow the least-significant blocks are kept and a
/// marker shows how many were left out.
pub struct CounterView<'a> {
    pub state: &'a CounterState,
    pub palette: Palette,
}

impl Widget for CounterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let count = self.state.current_indexes.len();
        let y = area.y + area.height.saturating_sub(BLOCK_HEIGHT) / 2;

        if count == 0 {
            let text = "no blocks";
            let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;
            buf.set_stringn(x, y, text, area.width as usize, self.palette.dim());
            return;
        }

        let fits = usize::from((area.width + BLOCK_GAP) / (BLOCK_WIDTH + BLOCK_GAP)).max(1);
        let (visible, hidden) = if count > fits {
            // One slot goes to the overflow marker.
            let visible = fits.saturating_sub(1).max(1);
            (visible, count - visible)
        } else {
            (count, 0)
        };

        let slots = visible + usize::from(hidden > 0);
        let total = (slots as u16) * (BLOCK_WIDTH + BLOCK_GAP) - BLOCK_GAP;
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        let height = BLOCK_HEIGHT.min(area.height);

        if hidden > 0 {
            let marker = format!("+{hidden}");
            let marker_y = y + height / 2;
            buf.set_stringn(x, marker_y, &marker, BLOCK_WIDTH as usize, self.palette.dim());
            x += BLOCK_WIDTH + BLOCK_GAP;
        }

        // Display order is most-significant first.
        for &value in self.state.current_indexes[..visible].iter().rev() {
            let rect = Rect {
                x,
                y,
                width: BLOCK_WIDTH,
                height,
            }
            .intersection(area);
            DigitBlock::new(value, &self.state.range, self.palette).render(rect, buf);
            x = x.saturating_add(BLOCK_WIDTH + BLOCK_GAP);
        }
    }
}
