use crate::ui::app::App;
use crate::ui::counter::{CounterState, CounterStore};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the UI until the user quits. Returns the final counter state.
///
/// A counter invariant violation ends the session with an error after the
/// terminal has been restored.
pub fn run(store: CounterStore) -> anyhow::Result<CounterState> {
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let mut app = App::new(store);
    let events = EventHandler::new(POLL_INTERVAL);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let outcome = match events.next(POLL_INTERVAL) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(cols, rows);
                Ok(())
            }
            Err(RecvTimeoutError::Timeout) => Ok(()),
            Err(RecvTimeoutError::Disconnected) => break,
        };

        if let Err(err) = outcome {
            tracing::error!(error = %err, state = ?app.state(), "counter invariant violated");
            drop(guard);
            return Err(err.into());
        }
    }

    drop(guard);
    Ok(app.into_state())
}
