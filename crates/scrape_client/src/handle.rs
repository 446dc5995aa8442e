use std::sync::{mpsc, Arc};
use std::thread;

use session_logging::{session_debug, session_warn};

use crate::{
    ClientError, ClientEvent, ClientSettings, FailureKind, ReqwestScrapeClient, RequestId,
    ScrapeClient,
};

enum ClientCommand {
    Scrape { request_id: RequestId, target: String },
}

/// Runs scrape requests on a background tokio runtime.
///
/// Completions are delivered as [`ClientEvent`]s on the channel given at construction.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    /// Builds a reqwest client for `settings` and returns the handle with its event receiver.
    pub fn connect(
        settings: ClientSettings,
    ) -> Result<(Self, mpsc::Receiver<ClientEvent>), ClientError> {
        let client = ReqwestScrapeClient::new(settings)?;
        let (event_tx, event_rx) = mpsc::channel();
        let handle = Self::with_client(Arc::new(client), event_tx)?;
        Ok((handle, event_rx))
    }

    pub fn with_client(
        client: Arc<dyn ScrapeClient>,
        event_tx: mpsc::Sender<ClientEvent>,
    ) -> Result<Self, ClientError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(handle_command(client, command, event_tx));
            }
            session_debug!("Client command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    /// Queues one request. Fails only when the worker thread is gone, in which
    /// case no completion will ever be reported for `request_id`.
    pub fn scrape(
        &self,
        request_id: RequestId,
        target: impl Into<String>,
    ) -> Result<(), ClientError> {
        self.cmd_tx
            .send(ClientCommand::Scrape {
                request_id,
                target: target.into(),
            })
            .map_err(|_| ClientError::new(FailureKind::Network, "client worker stopped"))
    }
}

async fn handle_command(
    client: Arc<dyn ScrapeClient>,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Scrape { request_id, target } => {
            // A panicking request still has to settle the session.
            let task = tokio::spawn(async move { client.scrape(&target).await });
            let result = match task.await {
                Ok(result) => result,
                Err(err) => {
                    session_warn!("Scrape request_id={} aborted: {}", request_id, err);
                    Err(ClientError::new(FailureKind::Network, err.to_string()))
                }
            };
            let _ = event_tx.send(ClientEvent::ScrapeCompleted { request_id, result });
        }
    }
}
