use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// First abscissa sample produced by default.
pub const DEFAULT_START: i64 = 0;
/// Exclusive upper bound of the default abscissa.
pub const DEFAULT_STOP: i64 = 10;

/// Shared configuration for each processing stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    pub start: i64,
    pub stop: i64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
        }
    }
}

/// Input handed to a processing stage.
#[derive(Debug, Clone, Default)]
pub struct StageInput {
    pub x: Array1<i64>,
}

impl StageInput {
    /// Input for stages that generate their own abscissa.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Output produced by each stage.
#[derive(Debug, Clone)]
pub struct StageOutput {
    pub x: Array1<i64>,
    pub y: Option<Array1<f64>>,
    pub metadata: StageMetadata,
}

/// Metadata used for chaining stages and telemetry.
#[derive(Debug, Clone, Default)]
pub struct StageMetadata {
    pub extent: Option<(f64, f64)>,
    pub rms: Option<f64>,
    pub notes: Vec<String>,
}

/// Common error type for stage execution.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("shape mismatch: x has {x} samples, y has {y}")]
    ShapeMismatch { x: usize, y: usize },
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type StageResult<T> = Result<T, StageError>;

/// Trait describing the pipeline's processing stages.
pub trait ProcessingStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()>;
    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput>;
    fn cleanup(&mut self);
}
