use tcreactions::app::{App, AppMessage};
use tcreactions::cli::{parse_args, run_cli_command};
use tcreactions::config::AppConfig;
use tcreactions::error::UiError;
use tcreactions::logging::init_logging;
use tcreactions::terminal::{setup_panic_hook, TerminalManager};
use tcreactions::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

/// Main loop tick, also the long-press and reveal granularity.
const TICK: std::time::Duration = std::time::Duration::from_millis(16);

fn main() -> Result<()> {
    // Informational flags print and exit before any terminal setup
    let options = run_cli_command(parse_args(std::env::args()));
    let config = options.apply(AppConfig::from_env());

    let log_path = init_logging(config.log_file.as_deref())?;

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(config);

    let result = runtime.block_on(run_app(term_manager.terminal(), &mut app));

    term_manager.restore()?;
    tracing::info!(log = %log_path.display(), "tcreactions exiting");

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal
                .draw(|f| {
                    ui::render(f, &mut *app);
                })
                .map_err(|e| UiError::RenderFailed {
                    component: "frame".to_string(),
                    message: e.to_string(),
                })?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse_event(mouse);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
