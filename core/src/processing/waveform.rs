use crate::math::stats::StatsHelper;
use crate::math::waveform::damped_oscillation;
use crate::prelude::{
    ProcessingStage, StageConfig, StageError, StageInput, StageMetadata, StageOutput, StageResult,
};
use crate::telemetry::log::LogManager;

/// Maps the abscissa through `sin(exp(x^2))`.
pub struct WaveformStage {
    config: Option<StageConfig>,
    logger: LogManager,
}

impl WaveformStage {
    pub fn new() -> Self {
        Self {
            config: None,
            logger: LogManager::new("WaveformStage"),
        }
    }
}

impl Default for WaveformStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for WaveformStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()> {
        self.config = Some(*config);
        Ok(())
    }

    fn execute(&mut self, input: StageInput) -> StageResult<StageOutput> {
        if self.config.is_none() {
            return Err(StageError::Internal("stage not initialized".into()));
        }
        if input.x.is_empty() {
            return Err(StageError::InvalidInput("no abscissa samples".into()));
        }

        let y = damped_oscillation(&input.x);
        if let Some((index, value)) = y.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(StageError::InvalidInput(format!(
                "exp(x^2) overflows at x = {} (sample {}, value {})",
                input.x[index], index, value
            )));
        }

        let samples = y.to_vec();
        let rms = StatsHelper::rms(&samples);
        let extent = StatsHelper::extent(&samples);
        self.logger.record(&format!("WaveformStage RMS {:.4}", rms));
        self.logger.detail(&format!("y = {:?}", samples));

        let metadata = StageMetadata {
            extent,
            rms: Some(rms),
            notes: vec![format!("Waveform RMS {:.4}", rms)],
        };

        Ok(StageOutput {
            x: input.x,
            y: Some(y),
            metadata,
        })
    }

    fn cleanup(&mut self) {
        self.config = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn initialized() -> WaveformStage {
        let mut stage = WaveformStage::new();
        stage.initialize(&StageConfig::default()).unwrap();
        stage
    }

    #[test]
    fn waveform_stage_maps_every_sample() {
        let mut stage = initialized();
        let x = Array1::from_iter(0..10_i64);
        let output = stage.execute(StageInput { x: x.clone() }).unwrap();

        let y = output.y.unwrap();
        assert_eq!(output.x, x);
        assert_eq!(y.len(), 10);
        for (xi, yi) in x.iter().zip(y.iter()) {
            let expected = ((xi * xi) as f64).exp().sin();
            assert!((yi - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
        assert!(output.metadata.rms.unwrap() > 0.0);
        stage.cleanup();
    }

    #[test]
    fn waveform_stage_reports_overflow() {
        let mut stage = initialized();
        let err = stage
            .execute(StageInput {
                x: Array1::from(vec![1, 40]),
            })
            .unwrap_err();
        match err {
            StageError::InvalidInput(message) => assert!(message.contains("x = 40")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn waveform_stage_rejects_empty_input() {
        let mut stage = initialized();
        assert!(stage.execute(StageInput::empty()).is_err());
    }
}
