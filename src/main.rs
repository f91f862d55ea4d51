use folio::adapters::SystemOpener;
use folio::app::{App, AppMessage};
use folio::cli::{handle_dump_command, parse_args, run_cli_command, CliCommand};
use folio::config::Config;
use folio::input::CommandRegistry;
use folio::loader::source_from_config;
use folio::logging::{default_file_target, init_logging, LogTarget};
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Redraw and status-expiry cadence.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }

    color_eyre::install()?;

    let demo = matches!(
        command,
        CliCommand::Dump { demo: true } | CliCommand::RunTui { demo: true }
    );
    let config = Config::load()?.with_demo_mode(demo);
    config.validate()?;

    let source = source_from_config(&config)?;
    let runtime = tokio::runtime::Runtime::new()?;

    if let CliCommand::Dump { .. } = command {
        init_logging(LogTarget::Stderr)?;
        return runtime.block_on(handle_dump_command(source.as_ref()));
    }

    // stdout belongs to the TUI; without a data dir there is no log at all
    if let Some(target) = default_file_target() {
        init_logging(target)?;
    }
    tracing::info!("Starting folio {} against {}", folio::cli::VERSION, source.describe());

    // Restore the terminal on panic
    setup_panic_hook();

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config, source, Arc::new(SystemOpener::new()));

    let result = runtime.block_on(async {
        app.start_load();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    tracing::info!("folio exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the receiver so select! owns it
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(command) = registry.dispatch(key, &app.input_context()) {
                            app.execute_command(command);
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                    }
                    // Input closed
                    None => app.quit(),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
