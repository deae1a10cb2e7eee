use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use civic::api::CivicClient;
use civic::app::{App, AppMessage};
use civic::cli::{handle_version_command, parse_args, run_check, CliCommand};
use civic::config::Config;
use civic::logging;
use civic::terminal::{setup_panic_hook, TerminalManager};
use civic::ui;

fn main() -> Result<()> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("civic: {}", err);
            std::process::exit(2);
        }
    };

    if args.command == CliCommand::Version {
        handle_version_command();
    }

    color_eyre::install()?;

    let config = Config::from_env().merge_args(&args);
    let log_file = logging::init(&config.log_filter);
    tracing::info!(?log_file, base_url = %config.base_url, "civic starting");

    let client = CivicClient::with_base_url(config.base_url.clone());
    let runtime = tokio::runtime::Runtime::new()?;

    if args.command == CliCommand::Check {
        if let Err(err) = runtime.block_on(run_check(&client)) {
            eprintln!("{}", err);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Restore the terminal on panic
    setup_panic_hook();

    let mut terminal = TerminalManager::new()?;
    let mut app = App::new(client, config);

    let result = runtime.block_on(async {
        app.initialize();
        run_app(terminal.terminal(), &mut app).await
    });

    terminal.restore()?;
    tracing::info!("civic exiting");

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
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {}

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event error");
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
