use scrape_core::{Msg, Panel};

pub const HELP: &[&str] = &[
    "Enter a URL (or `scrape <url>`) to scrape it.",
    "Panels: `links`, `contents`, `images`, `screenshot` toggle a panel; `close` closes it.",
    "`help` shows this text, `quit` exits.",
];

/// One line of user input, or a transport completion, as seen by the message loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Help,
    Quit,
}

pub fn panel_keyword(panel: Panel) -> &'static str {
    match panel {
        Panel::Links => "links",
        Panel::Contents => "contents",
        Panel::Images => "images",
        Panel::Screenshot => "screenshot",
    }
}

/// Maps an input line to a command. Anything unrecognised is submitted as a target.
pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    let keyword = trimmed.to_ascii_lowercase();
    match keyword.as_str() {
        "quit" | "exit" => return Command::Quit,
        "help" | "?" => return Command::Help,
        "close" => return Command::Msg(Msg::PanelClosed),
        "links" => return Command::Msg(Msg::PanelToggled(Panel::Links)),
        "contents" | "content" => return Command::Msg(Msg::PanelToggled(Panel::Contents)),
        "images" => return Command::Msg(Msg::PanelToggled(Panel::Images)),
        "screenshot" => return Command::Msg(Msg::PanelToggled(Panel::Screenshot)),
        _ => {}
    }

    let target = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) if verb.eq_ignore_ascii_case("scrape") => rest,
        _ => line,
    };
    Command::Msg(Msg::Submit(target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_keywords_toggle_panels() {
        for panel in Panel::ALL {
            assert_eq!(
                parse_line(panel_keyword(panel)),
                Command::Msg(Msg::PanelToggled(panel))
            );
        }
        assert_eq!(
            parse_line("  Content \n"),
            Command::Msg(Msg::PanelToggled(Panel::Contents))
        );
    }

    #[test]
    fn control_words() {
        assert_eq!(parse_line("quit"), Command::Quit);
        assert_eq!(parse_line("EXIT"), Command::Quit);
        assert_eq!(parse_line("help"), Command::Help);
        assert_eq!(parse_line("close"), Command::Msg(Msg::PanelClosed));
    }

    #[test]
    fn other_lines_are_submitted_raw() {
        assert_eq!(
            parse_line(" https://example.com "),
            Command::Msg(Msg::Submit(" https://example.com ".to_string()))
        );
        assert_eq!(
            parse_line("scrape https://example.com"),
            Command::Msg(Msg::Submit("https://example.com".to_string()))
        );
        assert_eq!(parse_line(""), Command::Msg(Msg::Submit(String::new())));
    }
}
