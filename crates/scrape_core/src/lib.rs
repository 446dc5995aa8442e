//! Scrape core: pure session state machine, input validation and view-model helpers.
mod effect;
mod error;
mod msg;
mod result;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use error::{ResponseShapeError, SessionError, ValidationError};
pub use msg::{Msg, ScrapeOutcome};
pub use result::{normalize, ImageItem, LinkItem, RemoteData, RemoteReply, ScrapeResult};
pub use state::{Panel, Phase, RequestId, SessionState};
pub use update::update;
pub use validate::{validate, ValidatedTarget};
pub use view_model::{ImageRow, PanelAvailability, PanelView, SessionViewModel};
