use crate::view_model::{ImageRow, PanelAvailability, PanelView, SessionViewModel};
use crate::{ScrapeResult, SessionError};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// One of the mutually exclusive result views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Links,
    Contents,
    Images,
    Screenshot,
}

impl Panel {
    /// Canonical selector order.
    pub const ALL: [Panel; 4] = [
        Panel::Links,
        Panel::Contents,
        Panel::Images,
        Panel::Screenshot,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Links => "Scraped Links",
            Panel::Contents => "Scraped Content",
            Panel::Images => "Scraped Images",
            Panel::Screenshot => "Screenshot",
        }
    }
}

/// Lifecycle container for one scrape session. Only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    service_base: String,
    input: String,
    phase: Phase,
    result: ScrapeResult,
    error: Option<SessionError>,
    active_panel: Option<Panel>,
    in_flight: Option<RequestId>,
    last_request_id: RequestId,
    dirty: bool,
}

impl SessionState {
    /// Starts an idle session against the given service base address.
    pub fn new(service_base: impl Into<String>) -> Self {
        Self {
            service_base: service_base.into(),
            input: String::new(),
            phase: Phase::Idle,
            result: ScrapeResult::default(),
            error: None,
            active_panel: None,
            in_flight: None,
            last_request_id: 0,
            dirty: false,
        }
    }

    pub fn service_base(&self) -> &str {
        &self.service_base
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last result written to the session. Only meaningful while `Succeeded`.
    pub fn result(&self) -> &ScrapeResult {
        &self.result
    }

    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn active_panel(&self) -> Option<Panel> {
        self.active_panel
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Which panel selectors the presentation layer may offer.
    pub fn panel_availability(&self) -> PanelAvailability {
        if self.phase != Phase::Succeeded {
            return PanelAvailability::default();
        }
        PanelAvailability {
            links: !self.result.links.is_empty(),
            contents: !self.result.contents.is_empty(),
            images: !self.result.images.is_empty(),
            screenshot: self.result.screenshot_url.is_some(),
        }
    }

    pub fn view(&self) -> SessionViewModel {
        let available = self.panel_availability();
        let open_panel = self
            .active_panel
            .filter(|panel| available.is_available(*panel))
            .and_then(|panel| self.panel_view(panel));
        let is_loading = self.phase == Phase::Loading;

        SessionViewModel {
            phase: self.phase,
            input: self.input.clone(),
            is_loading,
            submit_label: if is_loading { "Scraping..." } else { "Scrape" },
            error_message: self.error_message(),
            available,
            active_panel: self.active_panel,
            open_panel,
        }
    }

    /// Returns whether anything changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn panel_view(&self, panel: Panel) -> Option<PanelView> {
        let view = match panel {
            Panel::Links => PanelView::Links(self.result.links.clone()),
            Panel::Contents => PanelView::Contents(self.result.contents.clone()),
            Panel::Images => PanelView::Images(
                self.result
                    .images
                    .iter()
                    .map(|image| ImageRow {
                        src: image.src.clone(),
                        alt: image.alt.clone().unwrap_or_else(|| "Image".to_string()),
                    })
                    .collect(),
            ),
            Panel::Screenshot => PanelView::Screenshot {
                url: self.result.screenshot_url.clone()?,
            },
        };
        Some(view)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    /// Enters `Loading`: clears the error, the screenshot reference and the open panel.
    pub(crate) fn begin_request(&mut self) {
        self.phase = Phase::Loading;
        self.error = None;
        self.result.screenshot_url = None;
        self.active_panel = None;
        self.dirty = true;
    }

    pub(crate) fn issue_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.in_flight = Some(self.last_request_id);
        self.last_request_id
    }

    pub(crate) fn succeed(&mut self, result: ScrapeResult) {
        self.phase = Phase::Succeeded;
        self.result = result;
        self.error = None;
        self.in_flight = None;
        self.dirty = true;
    }

    /// Fails the session, keeping the last-known result.
    pub(crate) fn fail(&mut self, error: SessionError) {
        self.phase = Phase::Failed;
        self.error = Some(error);
        self.in_flight = None;
        self.dirty = true;
    }

    /// Fails the session and replaces the result with an empty one.
    pub(crate) fn fail_with_empty_result(&mut self, error: SessionError) {
        self.result = ScrapeResult::default();
        self.fail(error);
    }

    pub(crate) fn toggle_panel(&mut self, panel: Panel) {
        self.active_panel = if self.active_panel == Some(panel) {
            None
        } else {
            Some(panel)
        };
        self.dirty = true;
    }

    pub(crate) fn close_panel(&mut self) {
        if self.active_panel.take().is_some() {
            self.dirty = true;
        }
    }
}
