use crate::ui::theme::Palette;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ATTRIBUTION: &str = " crafted by Soumyadip Moni 🤖";
const HINTS: &str = "Click or Tab+Enter: Press │ q: Quit";

pub struct Footer;

impl Footer {
    pub fn widget(palette: Palette, area: Rect) -> Paragraph<'static> {
        let right = format!("{HINTS}  v{VERSION} ");

        // Padding by char count, not byte count.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(ATTRIBUTION.chars().count())
            .saturating_sub(right.chars().count());

        let text_style = palette.dim().remove_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(ATTRIBUTION, palette.title()),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border()),
            )
    }
}
