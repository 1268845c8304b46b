use ratatui::layout::Rect;

use crate::ui::counter::{CounterError, CounterState, CounterStore};
use crate::ui::layout::layout_regions;
use crate::ui::panel::{ControlPanel, PanelButton};

pub struct App {
    store: CounterStore,
    should_quit: bool,
    size: Option<(u16, u16)>,
    buttons: Vec<PanelButton>,
    /// Index into `buttons` of the keyboard-focused button.
    focus: usize,
    hovered: Option<PanelButton>,
}

impl App {
    pub fn new(store: CounterStore) -> Self {
        Self {
            store,
            should_quit: false,
            size: None,
            buttons: PanelButton::all(),
            focus: 0,
            hovered: None,
        }
    }

    pub fn state(&self) -> &CounterState {
        self.store.state()
    }

    /// Consume the app, returning the final counter state.
    pub fn into_state(self) -> CounterState {
        self.store.snapshot()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        // Whatever was under the pointer may have moved.
        self.hovered = None;
    }

    pub fn focused(&self) -> PanelButton {
        self.buttons[self.focus]
    }

    pub fn hovered(&self) -> Option<PanelButton> {
        self.hovered
    }

    /// Move keyboard focus, wrapping at both ends.
    pub fn move_focus(&mut self, forward: bool) {
        let len = self.buttons.len();
        self.focus = if forward {
            (self.focus + 1) % len
        } else {
            (self.focus + len - 1) % len
        };
    }

    /// Activate `button` and give it focus.
    pub fn press(&mut self, button: PanelButton) -> Result<(), CounterError> {
        if let Some(index) = self.buttons.iter().position(|b| *b == button) {
            self.focus = index;
        }
        ControlPanel::activate(&mut self.store, button)
    }

    pub fn press_focused(&mut self) -> Result<(), CounterError> {
        self.press(self.focused())
    }

    pub fn on_mouse_move(&mut self, column: u16, row: u16) {
        self.hovered = self.button_at(column, row);
    }

    /// Left click: activates the button under the pointer, if any.
    pub fn on_click(&mut self, column: u16, row: u16) -> Result<(), CounterError> {
        match self.button_at(column, row) {
            Some(button) => self.press(button),
            None => Ok(()),
        }
    }

    fn button_at(&self, column: u16, row: u16) -> Option<PanelButton> {
        let (cols, rows) = self.size?;
        let panel = layout_regions(Rect::new(0, 0, cols, rows)).panel;
        ControlPanel::button_at(ControlPanel::buttons_area(panel), column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryThemeStorage;
    use crate::numeral::BlockType;
    use crate::ui::counter::CounterPatch;

    fn make_app() -> App {
        let store = CounterStore::new(
            CounterState::default(),
            Box::new(MemoryThemeStorage::default()),
        );
        let mut app = App::new(store);
        app.on_resize(100, 30);
        app
    }

    fn rect_of(button: PanelButton) -> Rect {
        let panel = layout_regions(Rect::new(0, 0, 100, 30)).panel;
        ControlPanel::button_rects(ControlPanel::buttons_area(panel))
            .into_iter()
            .find(|(b, _)| *b == button)
            .map(|(_, rect)| rect)
            .unwrap()
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = make_app();
        assert_eq!(app.focused(), PanelButton::Base(BlockType::Binary));
        app.move_focus(false);
        assert_eq!(app.focused(), PanelButton::Theme(crate::ui::theme::Theme::Dark));
        app.move_focus(true);
        assert_eq!(app.focused(), PanelButton::Base(BlockType::Binary));
    }

    #[test]
    fn click_on_button_runs_it_and_focuses_it() {
        let mut app = make_app();
        let rect = rect_of(PanelButton::Increment);
        app.on_click(rect.x, rect.y).unwrap();
        assert_eq!(app.state().current_indexes, vec![1, 0, 0]);
        assert_eq!(app.focused(), PanelButton::Increment);
    }

    #[test]
    fn click_outside_buttons_is_ignored() {
        let mut app = make_app();
        app.on_click(0, 0).unwrap();
        assert_eq!(app.state(), &CounterState::default());
    }

    #[test]
    fn hover_tracks_pointer() {
        let mut app = make_app();
        let rect = rect_of(PanelButton::Reset);
        app.on_mouse_move(rect.x, rect.y);
        assert_eq!(app.hovered(), Some(PanelButton::Reset));
        app.on_mouse_move(0, 0);
        assert_eq!(app.hovered(), None);
    }

    #[test]
    fn press_with_broken_range_is_fatal() {
        let store = {
            let mut store = CounterStore::new(
                CounterState::default(),
                Box::new(MemoryThemeStorage::default()),
            );
            store.update(CounterPatch::range(Vec::new()));
            store
        };
        let mut app = App::new(store);
        assert_eq!(
            app.press(PanelButton::Decrement),
            Err(CounterError::RangeUninitialized)
        );
    }
}
