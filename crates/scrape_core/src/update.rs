use session_logging::{session_debug, session_info, session_warn};

use crate::{
    normalize, validate, Effect, Msg, Phase, RequestId, ScrapeOutcome, SessionError, SessionState,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::Submit(raw) => {
            state.set_input(raw);
            submit(&mut state)
        }
        Msg::ScrapeFinished {
            request_id,
            outcome,
        } => {
            finish(&mut state, request_id, outcome);
            Vec::new()
        }
        Msg::PanelToggled(panel) => {
            state.toggle_panel(panel);
            Vec::new()
        }
        Msg::PanelClosed => {
            state.close_panel();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut SessionState) -> Vec<Effect> {
    // Single flight: the submit control is busy until the current request settles.
    if state.phase() == Phase::Loading {
        session_debug!(
            "Submit ignored, request {:?} still in flight",
            state.in_flight()
        );
        return Vec::new();
    }

    state.begin_request();
    match validate(state.input()) {
        Ok(target) => {
            let request_id = state.issue_request();
            session_info!("Scrape request_id={} target={}", request_id, target);
            vec![Effect::Scrape {
                request_id,
                target: target.into_string(),
            }]
        }
        Err(err) => {
            session_debug!("Input rejected: {}", err);
            state.fail(err.into());
            Vec::new()
        }
    }
}

fn finish(state: &mut SessionState, request_id: RequestId, outcome: ScrapeOutcome) {
    if state.in_flight() != Some(request_id) {
        session_debug!(
            "Dropping completion for request_id={} (in flight: {:?})",
            request_id,
            state.in_flight()
        );
        return;
    }

    match outcome {
        ScrapeOutcome::Reply(reply) => match normalize(reply, state.service_base()) {
            Ok(result) => {
                session_info!(
                    "Scrape request_id={} ok: {} links, {} contents, {} images, screenshot={}",
                    request_id,
                    result.links.len(),
                    result.contents.len(),
                    result.images.len(),
                    result.screenshot_url.is_some()
                );
                state.succeed(result);
            }
            Err(err) => {
                session_warn!("Scrape request_id={} rejected: {}", request_id, err);
                state.fail_with_empty_result(err.into());
            }
        },
        ScrapeOutcome::Malformed { detail } => {
            session_warn!("Scrape request_id={} undecodable body: {}", request_id, detail);
            state.fail_with_empty_result(SessionError::ResponseShape);
        }
        ScrapeOutcome::TransportFailed { detail } => {
            session_warn!("Scrape request_id={} failed: {}", request_id, detail);
            state.fail(SessionError::Transport);
        }
    }
}
