use crate::ui::app::App;
use crate::ui::block::CounterView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::panel::PanelView;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let palette = state.theme.palette();
    let area = frame.area();
    let regions = layout_regions(area);

    // Root style is the presentation mode: everything below inherits it.
    frame.render_widget(Block::default().style(palette.root()), area);

    frame.render_widget(Header::widget(state, regions.header), regions.header);
    frame.render_widget(CounterView { state, palette }, regions.body);
    frame.render_widget(
        PanelView {
            state,
            palette,
            focused: Some(app.focused()),
            hovered: app.hovered(),
        },
        regions.panel,
    );
    frame.render_widget(Footer::widget(palette, regions.footer), regions.footer);
}
