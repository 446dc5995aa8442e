use crate::ResponseShapeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub src: String,
    pub alt: Option<String>,
}

/// Normalized outcome of a successful scrape. Sequences keep the service's order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrapeResult {
    pub links: Vec<LinkItem>,
    pub contents: Vec<String>,
    pub images: Vec<ImageItem>,
    pub screenshot_url: Option<String>,
}

/// Reply body as the service sent it; every field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteReply {
    pub data: Option<RemoteData>,
    pub screenshot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteData {
    pub links: Option<Vec<LinkItem>>,
    pub contents: Option<Vec<String>>,
    pub images: Option<Vec<ImageItem>>,
}

/// Turns a remote reply into a [`ScrapeResult`].
///
/// Missing sequences become empty. The screenshot path is appended verbatim to
/// `service_base`; no screenshot path means no screenshot URL.
pub fn normalize(reply: RemoteReply, service_base: &str) -> Result<ScrapeResult, ResponseShapeError> {
    let data = reply.data.ok_or(ResponseShapeError)?;
    Ok(ScrapeResult {
        links: data.links.unwrap_or_default(),
        contents: data.contents.unwrap_or_default(),
        images: data.images.unwrap_or_default(),
        screenshot_url: reply
            .screenshot
            .map(|path| format!("{service_base}{path}")),
    })
}
