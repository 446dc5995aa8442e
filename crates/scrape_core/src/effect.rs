/// Side effects requested by [`crate::update`], executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST `{"url": target}` to the scraping service.
    Scrape {
        request_id: crate::RequestId,
        target: String,
    },
}
