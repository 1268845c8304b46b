use crate::ui::app::App;
use crate::ui::counter::CounterError;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Keys only move focus, press the focused button or quit.
/// No key maps to a counter value.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), CounterError> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => app.move_focus(true),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => app.move_focus(false),
        KeyCode::Enter | KeyCode::Char(' ') => return app.press_focused(),
        _ => {}
    }
    Ok(())
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Result<(), CounterError> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_click(mouse.column, mouse.row),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.on_mouse_move(mouse.column, mouse.row);
            Ok(())
        }
        _ => Ok(()),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
