//! App actor - message loop driving the session state and running its effects

use std::collections::VecDeque;

use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::app::{Effect, SessionState};
use crate::constants::TICK_INTERVAL;
use crate::messages::{Event, NetworkCommand, NetworkResponse, RenderState};
use crate::storage::RequestLibrary;

/// App actor that owns the session and performs the effects it asks for
pub struct AppActor {
    state: SessionState,
    library: RequestLibrary,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: SessionState,
        library: RequestLibrary,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            library,
            network_tx,
            render_tx,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run the actor message loop until quit or the UI goes away
    pub async fn run(
        mut self,
        mut event_rx: mpsc::UnboundedReceiver<Event>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let _ = self.render_tx.send(self.state.to_render_state());

        let mut ticker = interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let quit = tokio::select! {
                event = event_rx.recv() => match event {
                    Some(event) => self.dispatch(event),
                    None => true,
                },
                Some(response) = net_rx.recv() => self.dispatch(response.into()),
                _ = ticker.tick() => {
                    if !self.state.loading {
                        continue;
                    }
                    self.dispatch(Event::Tick)
                }
            };

            if quit {
                break;
            }
        }

        tracing::info!("App actor stopping");
        let _ = self.network_tx.send(NetworkCommand::Shutdown);
    }

    /// Feed one event through the state machine and perform the resulting
    /// effects; returns true if quit was requested
    pub fn dispatch(&mut self, event: Event) -> bool {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            for effect in self.state.handle(event) {
                match effect {
                    Effect::Dispatch { id, request } => {
                        let _ = self.network_tx.send(NetworkCommand::Execute { id, request });
                    }
                    Effect::OpenLibrary => {
                        queue.push_back(Event::LibraryLoaded(self.library.load_all()));
                    }
                    Effect::AppendToLibrary(entry) => {
                        match self.library.append(entry) {
                            Ok(()) => {
                                let path = self.library.path().display();
                                tracing::info!(path = %path, "Request saved");
                            }
                            Err(e) => tracing::error!(error = %e, "Failed to save request"),
                        }
                    }
                    Effect::Quit => return true,
                }
            }
        }

        let _ = self.render_tx.send(self.state.to_render_state());
        false
    }
}
