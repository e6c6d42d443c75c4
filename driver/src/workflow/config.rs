use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wavecore::prelude::{StageConfig, DEFAULT_START, DEFAULT_STOP};
use wavecore::publish::{PublishConfig, DEFAULT_ENDPOINT};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkflowConfig {
    pub start: i64,
    pub stop: i64,
    pub endpoint: String,
    /// Optional local copy of the figure; `.svg` or a bitmap extension.
    pub render: Option<PathBuf>,
    /// Credentials file to use instead of the environment / `~/.plotly`.
    pub credentials: Option<PathBuf>,
    pub publish: PublishConfig,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            endpoint: DEFAULT_ENDPOINT.into(),
            render: None,
            credentials: None,
            publish: PublishConfig::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn to_stage_config(&self) -> StageConfig {
        StageConfig {
            start: self.start,
            stop: self.stop,
        }
    }
}
