pub mod sequence;
pub mod stats;
pub mod waveform;

pub use sequence::arange;
pub use stats::StatsHelper;
pub use waveform::damped_oscillation;
