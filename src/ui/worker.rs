//! Async side of the UI: runs store operations and reports back as events.

use std::sync::mpsc::Sender;

use tokio::sync::mpsc;

use crate::form::submit_fact;
use crate::shutdown::ShutdownHandle;
use crate::store::FactStore;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

pub struct Worker {
    store: FactStore,
    events: Sender<AppEvent>,
}

impl Worker {
    pub fn new(store: FactStore, events: Sender<AppEvent>) -> Self {
        Self { store, events }
    }

    /// Load the initial list, then serve commands until the channel closes or
    /// shutdown is signalled. Each command runs in its own task; requests are
    /// neither serialized nor cancelled.
    pub async fn run(self, mut commands: mpsc::Receiver<UiCommand>, shutdown: ShutdownHandle) {
        {
            let store = self.store.clone();
            let events = self.events.clone();
            tokio::spawn(async move {
                let result = store.load().await.map_err(|err| err.to_string());
                let _ = events.send(AppEvent::FactsLoaded(result));
            });
        }

        loop {
            let command = tokio::select! {
                _ = shutdown.wait() => break,
                command = commands.recv() => command,
            };
            let Some(command) = command else {
                break;
            };

            let store = self.store.clone();
            let events = self.events.clone();
            match command {
                UiCommand::AddFact { text } => {
                    tokio::spawn(async move {
                        let outcome = submit_fact(&store, Some(text.as_str())).await;
                        if events.send(AppEvent::SubmitFinished(outcome)).is_err() {
                            tracing::trace!("SubmitFinished dropped (UI gone)");
                        }
                    });
                }
                UiCommand::FetchRandom => {
                    tokio::spawn(async move {
                        let outcome = store.random_fact().await;
                        if events.send(AppEvent::RandomFinished(outcome)).is_err() {
                            tracing::trace!("RandomFinished dropped (UI gone)");
                        }
                    });
                }
            }
        }

        tracing::debug!("UI worker stopped");
    }
}
