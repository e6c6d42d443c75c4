//! Core of the damped-oscillation plot publisher.
//!
//! The modules cover the numeric stages that build the waveform, an explicit
//! figure model with local rendering, and the client that uploads a figure to
//! a hosted plotting service.

pub mod figure;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod publish;
pub mod telemetry;

pub use figure::Figure;
pub use prelude::{ProcessingStage, StageError, StageInput, StageOutput};
pub use publish::{EmbedReference, PlotlyClient, PublishConfig, Publisher};
