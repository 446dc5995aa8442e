use std::sync::Once;

use pretty_assertions::assert_eq;
use scrape_core::{
    update, Effect, ImageItem, ImageRow, LinkItem, Msg, Panel, PanelAvailability, PanelView,
    RemoteData, RemoteReply, ScrapeOutcome, SessionState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(session_logging::initialize_for_tests);
}

fn scraped(reply: RemoteReply) -> SessionState {
    let (state, effects) = update(
        SessionState::new("http://svc"),
        Msg::Submit("https://example.com".to_string()),
    );
    let request_id = match effects.as_slice() {
        [Effect::Scrape { request_id, .. }] => *request_id,
        other => panic!("unexpected effects {other:?}"),
    };
    let (mut state, _) = update(
        state,
        Msg::ScrapeFinished {
            request_id,
            outcome: ScrapeOutcome::Reply(reply),
        },
    );
    state.consume_dirty();
    state
}

fn full_reply() -> RemoteReply {
    RemoteReply {
        data: Some(RemoteData {
            links: Some(vec![LinkItem {
                href: "https://a.com".to_string(),
                text: "A".to_string(),
            }]),
            contents: Some(vec!["Hello".to_string()]),
            images: Some(vec![
                ImageItem {
                    src: "https://a.com/x.png".to_string(),
                    alt: Some("x".to_string()),
                },
                ImageItem {
                    src: "https://a.com/y.png".to_string(),
                    alt: None,
                },
            ]),
        }),
        screenshot: Some("/shots/1.png".to_string()),
    }
}

fn toggle(state: SessionState, panel: Panel) -> SessionState {
    let (state, effects) = update(state, Msg::PanelToggled(panel));
    assert!(effects.is_empty());
    state
}

#[test]
fn toggling_twice_restores_previous_panel() {
    init_logging();
    let state = scraped(full_reply());
    for start in [None, Some(Panel::Links), Some(Panel::Screenshot)] {
        let mut state = state.clone();
        if let Some(panel) = start {
            state = toggle(state, panel);
        }
        for panel in Panel::ALL {
            let before = state.active_panel();
            let after = toggle(toggle(state.clone(), panel), panel);
            assert_eq!(after.active_panel(), before, "toggling {panel:?} from {start:?}");
        }
    }
}

#[test]
fn opening_a_panel_closes_the_other() {
    init_logging();
    let state = scraped(full_reply());
    let state = toggle(state, Panel::Links);
    assert_eq!(state.active_panel(), Some(Panel::Links));

    let state = toggle(state, Panel::Images);
    assert_eq!(state.active_panel(), Some(Panel::Images));

    let state = toggle(state, Panel::Images);
    assert_eq!(state.active_panel(), None);
}

#[test]
fn at_most_one_panel_is_active_after_any_sequence() {
    init_logging();
    let sequence = [
        Panel::Links,
        Panel::Contents,
        Panel::Contents,
        Panel::Screenshot,
        Panel::Images,
        Panel::Links,
        Panel::Links,
        Panel::Screenshot,
    ];
    let mut state = scraped(full_reply());
    for panel in sequence {
        state = toggle(state, panel);
        let active = Panel::ALL
            .iter()
            .filter(|candidate| state.active_panel() == Some(**candidate))
            .count();
        assert!(active <= 1);
    }
    assert_eq!(state.active_panel(), Some(Panel::Screenshot));
}

#[test]
fn close_clears_active_panel() {
    init_logging();
    let state = toggle(scraped(full_reply()), Panel::Contents);
    let (mut state, _) = update(state, Msg::PanelClosed);
    assert_eq!(state.active_panel(), None);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::PanelClosed);
    assert!(!state.consume_dirty());
}

#[test]
fn availability_follows_non_empty_sequences() {
    init_logging();
    let state = scraped(full_reply());
    assert_eq!(
        state.panel_availability(),
        PanelAvailability {
            links: true,
            contents: true,
            images: true,
            screenshot: true,
        }
    );

    let state = scraped(RemoteReply {
        data: Some(RemoteData {
            links: None,
            contents: Some(vec!["only text".to_string()]),
            images: None,
        }),
        screenshot: None,
    });
    assert_eq!(state.panel_availability().offered(), vec![Panel::Contents]);
}

#[test]
fn nothing_is_offered_before_success() {
    let state = SessionState::new("http://svc");
    assert_eq!(state.panel_availability(), PanelAvailability::default());

    let (state, _) = update(state, Msg::Submit("https://example.com".to_string()));
    let view = state.view();
    assert!(view.is_loading);
    assert_eq!(view.submit_label, "Scraping...");
    assert!(view.available.offered().is_empty());
}

#[test]
fn open_panel_carries_panel_content() {
    init_logging();
    let state = toggle(scraped(full_reply()), Panel::Images);
    let view = state.view();
    assert_eq!(view.submit_label, "Scrape");
    assert_eq!(
        view.open_panel,
        Some(PanelView::Images(vec![
            ImageRow {
                src: "https://a.com/x.png".to_string(),
                alt: "x".to_string(),
            },
            ImageRow {
                src: "https://a.com/y.png".to_string(),
                alt: "Image".to_string(),
            },
        ]))
    );

    let view = toggle(state, Panel::Screenshot).view();
    assert_eq!(
        view.open_panel,
        Some(PanelView::Screenshot {
            url: "http://svc/shots/1.png".to_string(),
        })
    );
}

#[test]
fn unavailable_active_panel_is_not_rendered() {
    init_logging();
    let state = scraped(RemoteReply {
        data: Some(RemoteData::default()),
        screenshot: None,
    });
    let state = toggle(state, Panel::Screenshot);

    let view = state.view();
    assert_eq!(view.active_panel, Some(Panel::Screenshot));
    assert_eq!(view.open_panel, None);
}

#[test]
fn view_does_not_change_when_render_flag_is_consumed() {
    init_logging();
    let mut state = toggle(scraped(full_reply()), Panel::Links);
    let before = state.view();
    assert!(state.consume_dirty());
    assert_eq!(state.view(), before);
}
