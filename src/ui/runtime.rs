use crate::api::RecordSource;
use crate::config::Config;
use crate::lookup::LookupController;
use crate::ui::app::App;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the TUI until the user quits.
///
/// One task owns the [`App`]; terminal events, fetch resolutions and spinner
/// ticks are multiplexed onto it.
pub async fn run(config: &Config, source: Arc<dyn RecordSource>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let (controller, mut resolutions) = LookupController::new(source, &config.lookup);
    let mut app = App::new(controller);
    app.mount();

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(config.ui.tick_rate_ms));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => handle_key(&mut app, key),
                Some(Ok(Event::Paste(text))) => app.on_paste(&text),
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::error!(error = %err, "Terminal event stream failed");
                    break;
                }
                None => break,
            },
            Some(resolution) = resolutions.recv() => app.on_resolution(resolution),
            _ = ticker.tick() => app.on_tick(),
        }
    }

    drop(guard);
    Ok(())
}
