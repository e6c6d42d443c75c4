//! Upload of a [`Figure`](crate::figure::Figure) to the hosted plotting service.

pub mod client;
pub mod config;
pub mod credentials;
pub mod embed;

pub use client::{PlotlyClient, DEFAULT_ENDPOINT};
pub use config::{FileOpt, PublishConfig, DEFAULT_FILENAME};
pub use credentials::Credentials;
pub use embed::EmbedReference;

use crate::figure::Figure;

#[derive(thiserror::Error, Debug)]
pub enum PublishError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("plot service unreachable: {0}")]
    Network(String),
    #[error("plot service rejected the upload ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("could not encode upload request: {0}")]
    Encode(String),
    #[error("could not decode service response: {0}")]
    Decode(String),
    #[error("could not start the upload runtime: {0}")]
    Runtime(String),
}

/// Anything that can take a figure and hand back where it now lives.
pub trait Publisher {
    fn publish(
        &self,
        figure: &Figure,
        config: &PublishConfig,
    ) -> Result<EmbedReference, PublishError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_and_decode_failures_read_differently() {
        let encode = PublishError::Encode("encoding traces: bad float".into()).to_string();
        let decode = PublishError::Decode("expected value".into()).to_string();
        assert!(encode.starts_with("could not encode upload request"));
        assert!(decode.starts_with("could not decode service response"));
    }
}
