use crate::{LinkItem, Panel, Phase};

/// Derived selector availability for each panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelAvailability {
    pub links: bool,
    pub contents: bool,
    pub images: bool,
    pub screenshot: bool,
}

impl PanelAvailability {
    pub fn is_available(&self, panel: Panel) -> bool {
        match panel {
            Panel::Links => self.links,
            Panel::Contents => self.contents,
            Panel::Images => self.images,
            Panel::Screenshot => self.screenshot,
        }
    }

    /// Available panels in selector order.
    pub fn offered(&self) -> Vec<Panel> {
        Panel::ALL
            .into_iter()
            .filter(|panel| self.is_available(*panel))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRow {
    pub src: String,
    pub alt: String,
}

/// Content of the open panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Links(Vec<LinkItem>),
    Contents(Vec<String>),
    Images(Vec<ImageRow>),
    Screenshot { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionViewModel {
    pub phase: Phase,
    pub input: String,
    pub is_loading: bool,
    pub submit_label: &'static str,
    pub error_message: Option<String>,
    pub available: PanelAvailability,
    pub active_panel: Option<Panel>,
    /// Present only when the active panel is also available.
    pub open_panel: Option<PanelView>,
}
