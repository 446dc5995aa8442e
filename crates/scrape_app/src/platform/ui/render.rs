use scrape_core::{PanelView, SessionViewModel};

use super::commands::panel_keyword;

/// Renders the view model as terminal lines.
pub fn render(view: &SessionViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.input.is_empty() {
        lines.push(format!("[{}]", view.submit_label));
    } else {
        lines.push(format!("[{}] {}", view.submit_label, view.input.trim()));
    }

    if let Some(message) = &view.error_message {
        lines.push(format!("! {message}"));
    }

    let offered = view.available.offered();
    if !view.is_loading && !offered.is_empty() {
        let headers = offered
            .iter()
            .map(|panel| {
                let marker = if view.active_panel == Some(*panel) { "*" } else { " " };
                format!("{marker}{} ({})", panel.title(), panel_keyword(*panel))
            })
            .collect::<Vec<_>>();
        lines.push(format!("Panels: {}", headers.join(" | ")));
    }

    if let (Some(panel), Some(open)) = (view.active_panel, &view.open_panel) {
        lines.push(format!("== {} ==", panel.title()));
        lines.extend(panel_lines(open));
        lines.push("(close)".to_string());
    }

    lines
}

fn panel_lines(open: &PanelView) -> Vec<String> {
    match open {
        PanelView::Links(links) => links
            .iter()
            .enumerate()
            .map(|(i, link)| format!("{:>3}. {} <{}>", i + 1, link.text.trim(), link.href))
            .collect(),
        PanelView::Contents(contents) => contents
            .iter()
            .enumerate()
            .map(|(i, text)| format!("{:>3}. {}", i + 1, text))
            .collect(),
        PanelView::Images(images) => images
            .iter()
            .enumerate()
            .map(|(i, image)| format!("{:>3}. {} ({})", i + 1, image.alt, image.src))
            .collect(),
        PanelView::Screenshot { url } => vec![format!("  {url}")],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scrape_core::{
        update, Effect, LinkItem, Msg, Panel, RemoteData, RemoteReply, ScrapeOutcome,
        SessionState,
    };

    use super::*;

    fn scraped() -> SessionState {
        let (state, effects) = update(
            SessionState::new("http://svc"),
            Msg::Submit("https://example.com".to_string()),
        );
        let [Effect::Scrape { request_id, .. }] = effects.as_slice() else {
            panic!("expected one scrape effect");
        };
        let reply = RemoteReply {
            data: Some(RemoteData {
                links: Some(vec![LinkItem {
                    href: "https://a.com".to_string(),
                    text: " A ".to_string(),
                }]),
                contents: Some(vec!["Hello".to_string()]),
                images: None,
            }),
            screenshot: Some("/shots/1.png".to_string()),
        };
        let (state, _) = update(
            state,
            Msg::ScrapeFinished {
                request_id: *request_id,
                outcome: ScrapeOutcome::Reply(reply),
            },
        );
        state
    }

    #[test]
    fn idle_shows_only_the_submit_control() {
        let view = SessionState::new("http://svc").view();
        assert_eq!(render(&view), vec!["[Scrape]".to_string()]);
    }

    #[test]
    fn loading_shows_busy_label() {
        let (state, _) = update(
            SessionState::new("http://svc"),
            Msg::Submit("https://example.com".to_string()),
        );
        assert_eq!(
            render(&state.view()),
            vec!["[Scraping...] https://example.com".to_string()]
        );
    }

    #[test]
    fn failure_shows_message() {
        let (state, _) = update(
            SessionState::new("http://svc"),
            Msg::Submit("example.com".to_string()),
        );
        assert_eq!(
            render(&state.view()),
            vec![
                "[Scrape] example.com".to_string(),
                "! Please enter a valid URL.".to_string(),
            ]
        );
    }

    #[test]
    fn success_offers_available_panels_only() {
        let lines = render(&scraped().view());
        assert_eq!(
            lines[1],
            "Panels:  Scraped Links (links) |  Scraped Content (contents) |  Screenshot (screenshot)"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn open_panel_lists_items() {
        let (state, _) = update(scraped(), Msg::PanelToggled(Panel::Links));
        let lines = render(&state.view());
        assert_eq!(
            lines[1..].to_vec(),
            vec![
                "Panels: *Scraped Links (links) |  Scraped Content (contents) |  Screenshot (screenshot)"
                    .to_string(),
                "== Scraped Links ==".to_string(),
                "  1. A <https://a.com>".to_string(),
                "(close)".to_string(),
            ]
        );
    }

    #[test]
    fn screenshot_panel_shows_absolute_url() {
        let (state, _) = update(scraped(), Msg::PanelToggled(Panel::Screenshot));
        let lines = render(&state.view());
        assert!(lines.contains(&"  http://svc/shots/1.png".to_string()));
    }
}
