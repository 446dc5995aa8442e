use std::sync::mpsc;
use std::thread;

use scrape_client::{
    ClientError, ClientEvent, ClientHandle, ClientSettings, FailureKind, ScrapeResponse,
};
use scrape_core::{
    Effect, ImageItem, LinkItem, Msg, RemoteData, RemoteReply, RequestId, ScrapeOutcome,
};
use session_logging::{session_debug, session_error};

use super::ui::commands::Command;

pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    /// Starts the transport and forwards its completions into the message loop.
    pub fn new(
        settings: ClientSettings,
        cmd_tx: mpsc::Sender<Command>,
    ) -> Result<Self, ClientError> {
        let (client, event_rx) = ClientHandle::connect(settings)?;
        spawn_event_loop(event_rx, cmd_tx);
        Ok(Self { client })
    }

    /// Executes effects. Returns messages for requests that could not even be queued,
    /// so the session still settles.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::Scrape { request_id, target } => {
                    session_debug!("Queue request_id={} target_len={}", request_id, target.len());
                    self.client
                        .scrape(request_id, target)
                        .err()
                        .map(|err| undeliverable(request_id, err))
                }
            })
            .collect()
    }
}

fn undeliverable(request_id: RequestId, err: ClientError) -> Msg {
    session_error!("Scrape request_id={} not sent: {}", request_id, err);
    Msg::ScrapeFinished {
        request_id,
        outcome: ScrapeOutcome::TransportFailed {
            detail: err.to_string(),
        },
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<ClientEvent>, cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if cmd_tx.send(Command::Msg(map_event(event))).is_err() {
                break;
            }
        }
        session_debug!("Client event loop stopped");
    });
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::ScrapeCompleted { request_id, result } => Msg::ScrapeFinished {
            request_id,
            outcome: map_result(result),
        },
    }
}

fn map_result(result: Result<ScrapeResponse, ClientError>) -> ScrapeOutcome {
    match result {
        Ok(response) => ScrapeOutcome::Reply(map_response(response)),
        Err(err) if err.kind == FailureKind::Decode => ScrapeOutcome::Malformed {
            detail: err.to_string(),
        },
        Err(err) => ScrapeOutcome::TransportFailed {
            detail: err.to_string(),
        },
    }
}

/// Null link text becomes empty; links without `href`, images without `src`
/// and null content entries carry nothing to show and are skipped.
fn map_response(response: ScrapeResponse) -> RemoteReply {
    RemoteReply {
        data: response.data.map(|data| RemoteData {
            links: data.links.map(|links| {
                links
                    .into_iter()
                    .filter_map(|link| {
                        Some(LinkItem {
                            href: link.href?,
                            text: link.text.unwrap_or_default(),
                        })
                    })
                    .collect()
            }),
            contents: data
                .contents
                .map(|contents| contents.into_iter().flatten().collect()),
            images: data.images.map(|images| {
                images
                    .into_iter()
                    .filter_map(|image| {
                        Some(ImageItem {
                            src: image.src?,
                            alt: image.alt,
                        })
                    })
                    .collect()
            }),
        }),
        screenshot: response.screenshot,
    }
}
