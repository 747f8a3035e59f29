//! Network actor - runs HTTP requests in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::HttpExecutor;

/// Network actor that executes requests off the UI thread
pub struct NetworkActor {
    executor: HttpExecutor,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(
        executor: HttpExecutor,
        response_tx: mpsc::UnboundedSender<NetworkResponse>,
    ) -> Self {
        NetworkActor {
            executor,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Execute { id, request }) => {
                            let response_tx = self.response_tx.clone();
                            let executor = self.executor.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(
                                    id,
                                    url = %request.url,
                                    method = %request.method,
                                    "Executing request"
                                );
                                let outcome = executor.execute(request).await;
                                tracing::info!(
                                    id,
                                    status = ?outcome.status_code,
                                    elapsed = ?outcome.elapsed,
                                    "Request completed"
                                );
                                let completed = NetworkResponse::Completed { id, outcome };
                                let _ = response_tx.send(completed);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
