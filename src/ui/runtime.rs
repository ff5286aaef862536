use crate::api::CatFactsClient;
use crate::config::Config;
use crate::shutdown::{wait_for_signal, ShutdownHandle};
use crate::store::FactStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::Worker;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Pending UI commands before `try_send` starts failing.
const COMMAND_QUEUE: usize = 16;

/// Run the interactive UI until the user quits or a signal arrives.
pub fn run(config: Config) -> anyhow::Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    let client = CatFactsClient::new(&config.api).context("Failed to build HTTP client")?;
    let base_url = client.base_url().to_string();
    let store = FactStore::new(Arc::new(client));

    let shutdown = ShutdownHandle::new();
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone())
        .context("Failed to spawn input thread")?;
    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);

    let worker = Worker::new(store.clone(), events.sender());
    rt.spawn(worker.run(command_rx, shutdown.clone()));

    {
        let events_tx = events.sender();
        let shutdown = shutdown.clone();
        rt.spawn(async move {
            tokio::select! {
                _ = wait_for_signal() => {
                    tracing::info!("Received shutdown signal");
                    let _ = events_tx.send(AppEvent::Shutdown);
                }
                _ = shutdown.wait() => {}
            }
        });
    }

    tracing::info!(base_url = %base_url, "Starting cat facts UI");
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let mut app = App::new(store, base_url, command_tx);

    let result = (|| -> anyhow::Result<()> {
        loop {
            let mut list_max_scroll = 0;
            terminal.draw(|frame| list_max_scroll = draw(frame, &app))?;
            app.set_list_max_scroll(list_max_scroll);
            if app.should_quit() {
                return Ok(());
            }

            match events.next(tick_rate) {
                Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
                Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
                Ok(AppEvent::FactsLoaded(result)) => app.on_facts_loaded(result),
                Ok(AppEvent::SubmitFinished(outcome)) => app.on_submit_finished(outcome),
                Ok(AppEvent::RandomFinished(outcome)) => app.on_random_finished(outcome),
                Ok(AppEvent::Shutdown) => app.request_quit(),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }
    })();

    shutdown.signal();
    drop(guard);
    rt.shutdown_timeout(Duration::from_secs(1));
    result
}
