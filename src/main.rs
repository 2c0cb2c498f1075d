use anyhow::{anyhow, Result};

mod app;
mod config;
mod conversation;
mod gemini;
mod handler;
mod scene;
mod tui;
mod ui;

use app::App;
use gemini::GatewayError;

/// Logs go to a file; the TUI owns the terminal. Best effort: a read-only
/// config dir just means no logs.
fn init_logging() {
    let Ok(dir) = config::Config::data_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    if let Ok(file) = std::fs::File::create(dir.join("gogo.log")) {
        let _ = tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .try_init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    tracing::info!(model = gemini::MODEL, "starting gogo");

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = tui::EventHandler::new();
    let mut app = App::new();

    let result = run(&mut terminal, &mut events, &mut app).await;
    tui::restore()?;
    result
}

async fn run(
    terminal: &mut tui::Tui,
    events: &mut tui::EventHandler,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        // Collapse a finished gateway call into the conversation before the
        // next frame; the tick stream keeps the loop turning while one is
        // in flight, so completion is noticed within a beat.
        if app
            .chat_task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false)
        {
            if let Some(task) = app.chat_task.take() {
                let outcome = match task.await {
                    Ok(result) => result,
                    Err(join_err) => {
                        Err(GatewayError::from(anyhow!("gateway task aborted: {join_err}")))
                    }
                };
                app.finish_submit(outcome);
            }
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event),
            None => break,
        }
    }
    Ok(())
}
