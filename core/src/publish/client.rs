use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tokio::runtime::{Builder, Runtime};

use super::{Credentials, EmbedReference, PublishConfig, PublishError, Publisher};
use crate::figure::Figure;
use crate::telemetry::log::LogManager;

pub const DEFAULT_ENDPOINT: &str = "https://plot.ly";
const UPLOAD_PATH: &str = "clientresp";
const PLATFORM: &str = "rust";

/// Body returned by the upload endpoint. Every field may be absent.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ClientResponse {
    url: String,
    message: String,
    warning: String,
    filename: String,
    error: String,
}

/// Blocking client for the hosted service's `clientresp` upload endpoint.
///
/// The client owns a current-thread runtime so callers stay synchronous. It
/// must not be used or dropped from inside another async runtime.
pub struct PlotlyClient {
    endpoint: String,
    credentials: Credentials,
    http: reqwest::Client,
    runtime: Runtime,
    logger: LogManager,
}

impl PlotlyClient {
    pub fn new(
        endpoint: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self, PublishError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| PublishError::Runtime(e.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            credentials,
            http: reqwest::Client::new(),
            runtime,
            logger: LogManager::new("PlotlyClient"),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn upload_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), UPLOAD_PATH)
    }

    /// The figure as it will be sent: a copy with style stripped and size
    /// released when the config asks for it.
    pub fn prepare(figure: &Figure, config: &PublishConfig) -> Figure {
        let mut prepared = figure.clone();
        if config.strip_style {
            prepared.strip_style();
        }
        if config.resize {
            prepared.resize();
        }
        prepared
    }

    fn form(
        &self,
        figure: &Figure,
        config: &PublishConfig,
    ) -> Result<Vec<(&'static str, String)>, PublishError> {
        let prepared = Self::prepare(figure, config);
        let args = serde_json::to_string(&prepared.data)
            .map_err(|e| PublishError::Encode(format!("encoding traces: {}", e)))?;
        let kwargs = serde_json::to_string(&json!({
            "filename": config.filename,
            "fileopt": config.fileopt.as_str(),
            "world_readable": config.world_readable,
            "layout": prepared.layout,
        }))
        .map_err(|e| PublishError::Encode(format!("encoding options: {}", e)))?;

        Ok(vec![
            ("un", self.credentials.username.clone()),
            ("key", self.credentials.api_key.clone()),
            ("origin", "plot".to_string()),
            ("platform", PLATFORM.to_string()),
            ("version", env!("CARGO_PKG_VERSION").to_string()),
            ("args", args),
            ("kwargs", kwargs),
        ])
    }

    pub async fn publish_async(
        &self,
        figure: &Figure,
        config: &PublishConfig,
    ) -> Result<EmbedReference, PublishError> {
        let form = self.form(figure, config)?;
        let url = self.upload_url();
        self.logger.record(&format!(
            "uploading {} series as '{}' to {}",
            figure.series_count(),
            config.filename,
            url
        ));

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let text = response.text().await.unwrap_or_default();
            return Err(PublishError::Auth(format!("{}: {}", status, text)));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                message: text,
            });
        }

        let body: ClientResponse = response
            .json()
            .await
            .map_err(|e| PublishError::Decode(e.to_string()))?;
        if !body.error.is_empty() {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                message: body.error,
            });
        }
        if !body.warning.is_empty() {
            self.logger.caution(&body.warning);
        }
        if !body.message.is_empty() {
            self.logger.record(&body.message);
        }
        if body.url.is_empty() {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
                message: "response carried no plot url".into(),
            });
        }

        let filename = if body.filename.is_empty() {
            config.filename.clone()
        } else {
            body.filename
        };
        let reference = EmbedReference::new(body.url, filename);
        self.logger.record(&format!("published at {}", reference.url));
        Ok(reference)
    }
}

impl Publisher for PlotlyClient {
    fn publish(
        &self,
        figure: &Figure,
        config: &PublishConfig,
    ) -> Result<EmbedReference, PublishError> {
        self.runtime.block_on(self.publish_async(figure, config))
    }
}
