//! Scrape client: transport to the remote scraping service.
mod client;
mod handle;
mod types;

pub use client::{ClientSettings, ReqwestScrapeClient, ScrapeClient};
pub use handle::ClientHandle;
pub use types::{
    ClientError, ClientEvent, FailureKind, RequestId, ScrapeData, ScrapeRequest, ScrapeResponse,
    WireImage, WireLink,
};
