pub mod sequence;
pub mod waveform;

pub use sequence::SequenceStage;
pub use waveform::WaveformStage;
