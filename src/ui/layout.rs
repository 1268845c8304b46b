use ratatui::layout::Rect;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
/// Borders, four button rows, a spacer and the tooltip line.
pub const PANEL_HEIGHT: u16 = 8;

/// Screen split into its four stacked regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub panel: Rect,
    pub footer: Rect,
}

/// Header on top, footer at the bottom, control panel above the footer and
/// the digit blocks in whatever is left. Regions shrink from the body first.
pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let panel_height =
        PANEL_HEIGHT.min(area.height.saturating_sub(header_height + footer_height));
    let body_height = area
        .height
        .saturating_sub(header_height + footer_height + panel_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: body_height,
    };
    let panel = Rect {
        x: area.x,
        y: body.y + body_height,
        width: area.width,
        height: panel_height,
    };
    let footer = Rect {
        x: area.x,
        y: panel.y + panel_height,
        width: area.width,
        height: footer_height,
    };
    Regions {
        header,
        body,
        panel,
        footer,
    }
}
