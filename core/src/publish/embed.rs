use serde::{Deserialize, Serialize};

const EMBED_HEIGHT: u32 = 525;

/// Where an uploaded figure can be viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedReference {
    pub url: String,
    pub embed_url: String,
    pub filename: String,
}

impl EmbedReference {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        let url = url.into();
        let embed_url = format!("{}.embed", url.trim_end_matches('/'));
        Self {
            url,
            embed_url,
            filename: filename.into(),
        }
    }

    /// Iframe snippet for an interactive view of the plot.
    pub fn iframe_html(&self) -> String {
        format!(
            "<iframe id=\"igraph\" scrolling=\"no\" style=\"border:none;\" \
             seamless=\"seamless\" src=\"{}\" height=\"{}\" width=\"100%\"></iframe>",
            self.embed_url, EMBED_HEIGHT
        )
    }
}
