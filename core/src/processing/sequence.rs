use crate::math::sequence::arange;
use crate::math::waveform::MAX_ABS_SAMPLE;
use crate::prelude::{
    ProcessingStage, StageConfig, StageError, StageInput, StageMetadata, StageOutput, StageResult,
};
use crate::telemetry::log::LogManager;

/// Stage that lays down the integer abscissa the waveform is sampled on.
pub struct SequenceStage {
    config: Option<StageConfig>,
    logger: LogManager,
}

impl SequenceStage {
    pub fn new() -> Self {
        Self {
            config: None,
            logger: LogManager::new("SequenceStage"),
        }
    }
}

impl Default for SequenceStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStage for SequenceStage {
    fn initialize(&mut self, config: &StageConfig) -> StageResult<()> {
        if config.stop <= config.start {
            return Err(StageError::InvalidInput(format!(
                "empty sequence: stop {} must exceed start {}",
                config.stop, config.start
            )));
        }
        // stop > start here, so stop - 1 cannot underflow.
        if config.start < -MAX_ABS_SAMPLE || config.stop - 1 > MAX_ABS_SAMPLE {
            return Err(StageError::InvalidInput(format!(
                "range [{}, {}) leaves |x| <= {} where exp(x^2) stays finite",
                config.start, config.stop, MAX_ABS_SAMPLE
            )));
        }
        self.config = Some(*config);
        Ok(())
    }

    fn execute(&mut self, _input: StageInput) -> StageResult<StageOutput> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| StageError::Internal("stage not initialized".into()))?;

        let x = arange(config.start, config.stop);
        self.logger.record(&format!(
            "generated {} samples over [{}, {})",
            x.len(),
            config.start,
            config.stop
        ));

        let metadata = StageMetadata {
            extent: Some((config.start as f64, (config.stop - 1) as f64)),
            notes: vec![format!("Sequence length {}", x.len())],
            ..Default::default()
        };

        Ok(StageOutput {
            x,
            y: None,
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

    #[test]
    fn sequence_stage_emits_default_range() {
        let mut stage = SequenceStage::new();
        stage.initialize(&StageConfig::default()).unwrap();

        let output = stage.execute(StageInput::empty()).unwrap();
        assert_eq!(output.x.to_vec(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(output.y.is_none());
        assert_eq!(output.metadata.extent, Some((0.0, 9.0)));
        stage.cleanup();
    }

    #[test]
    fn sequence_stage_rejects_empty_range() {
        let mut stage = SequenceStage::new();
        let err = stage
            .initialize(&StageConfig { start: 4, stop: 4 })
            .unwrap_err();
        assert!(matches!(err, StageError::InvalidInput(_)));
    }

    #[test]
    fn sequence_stage_rejects_unbounded_range_before_allocating() {
        let mut stage = SequenceStage::new();
        let err = stage
            .initialize(&StageConfig {
                start: 0,
                stop: i64::MAX,
            })
            .unwrap_err();
        assert!(matches!(err, StageError::InvalidInput(_)));
        assert!(matches!(
            stage.execute(StageInput::empty()),
            Err(StageError::Internal(_))
        ));
    }

    #[test]
    fn sequence_stage_bounds_follow_finite_waveform() {
        let mut stage = SequenceStage::new();
        assert!(stage
            .initialize(&StageConfig {
                start: -MAX_ABS_SAMPLE,
                stop: MAX_ABS_SAMPLE + 1,
            })
            .is_ok());
        assert_eq!(stage.execute(StageInput::empty()).unwrap().x.len(), 53);

        assert!(stage
            .initialize(&StageConfig {
                start: -MAX_ABS_SAMPLE - 1,
                stop: 0,
            })
            .is_err());
        assert!(stage
            .initialize(&StageConfig {
                start: 0,
                stop: MAX_ABS_SAMPLE + 2,
            })
            .is_err());
    }

    #[test]
    fn sequence_stage_requires_initialization() {
        let mut stage = SequenceStage::new();
        stage.initialize(&StageConfig::default()).unwrap();
        stage.cleanup();
        let err = stage.execute(StageInput::empty()).unwrap_err();
        assert!(matches!(err, StageError::Internal(_)));
    }
}
