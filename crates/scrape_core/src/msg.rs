use crate::{Panel, RemoteReply, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the target input box.
    InputChanged(String),
    /// User submitted the current input.
    SubmitClicked,
    /// Replace the input and submit it in one step.
    Submit(String),
    /// The transport finished a previously issued request.
    ScrapeFinished {
        request_id: RequestId,
        outcome: ScrapeOutcome,
    },
    /// User selected a panel header.
    PanelToggled(Panel),
    /// User clicked Close on the open panel.
    PanelClosed,
    /// Fallback for placeholder wiring.
    NoOp,
}

/// How a request ended, as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// The service answered with a decodable body.
    Reply(RemoteReply),
    /// The service answered, but the body could not be decoded.
    Malformed { detail: String },
    /// Network error, non-success status, timeout and the like.
    TransportFailed { detail: String },
}
