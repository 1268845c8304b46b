use crate::ui::counter::CounterState;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TAGLINE: &str = "A new way to kount.";

pub struct Header;

impl Header {
    pub fn widget(state: &CounterState, area: Rect) -> Paragraph<'static> {
        let palette = state.theme.palette();
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);

        let value = match state.value() {
            Some(value) => value.to_string(),
            None => "…".to_string(),
        };
        let title = vec![
            Span::styled("  kounti.", palette.title()),
            Span::styled("  ", text_style),
            Span::styled(TAGLINE, palette.dim()),
        ];
        let status = vec![
            Span::styled(state.block_type.as_str(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("= {value}"), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(state.theme.as_str(), text_style),
            Span::styled("  ", text_style),
        ];

        // Right-align the status, measured in chars.
        let title_width: usize = title.iter().map(Span::width).sum();
        let status_width: usize = status.iter().map(Span::width).sum();
        let padding = (area.width as usize)
            .saturating_sub(title_width)
            .saturating_sub(status_width);

        let mut spans = title;
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.extend(status);

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(palette.border()),
        )
    }
}
