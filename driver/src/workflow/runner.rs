use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use wavecore::figure::{render, Figure};
use wavecore::prelude::{ProcessingStage, StageInput};
use wavecore::processing::{SequenceStage, WaveformStage};
use wavecore::publish::{EmbedReference, Publisher};

#[derive(Debug)]
pub struct WorkflowResult {
    pub x: Vec<i64>,
    pub y: Vec<f64>,
    pub figure: Figure,
    pub notes: Vec<String>,
    pub embed: Option<EmbedReference>,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Generate, plot, optionally render, and publish once when a publisher
    /// is supplied.
    pub fn execute(&self, publisher: Option<&dyn Publisher>) -> anyhow::Result<WorkflowResult> {
        let stage_config = self.config.to_stage_config();

        let mut sequence_stage = SequenceStage::new();
        sequence_stage
            .initialize(&stage_config)
            .context("initializing sequence stage")?;
        let sequence_output = sequence_stage
            .execute(StageInput::empty())
            .context("executing sequence stage")?;
        sequence_stage.cleanup();

        let mut waveform_stage = WaveformStage::new();
        waveform_stage
            .initialize(&stage_config)
            .context("initializing waveform stage")?;
        let waveform_output = waveform_stage
            .execute(StageInput {
                x: sequence_output.x.clone(),
            })
            .context("executing waveform stage")?;
        waveform_stage.cleanup();

        let x = waveform_output.x.to_vec();
        let y = waveform_output
            .y
            .context("waveform stage produced no ordinate")?
            .to_vec();

        let abscissa: Vec<f64> = x.iter().map(|&v| v as f64).collect();
        let figure = Figure::line(&abscissa, &y).context("plotting waveform")?;

        if let Some(path) = &self.config.render {
            render::to_file(&figure, path)
                .with_context(|| format!("rendering figure to {}", path.display()))?;
        }

        let embed = match publisher {
            Some(publisher) => Some(
                publisher
                    .publish(&figure, &self.config.publish)
                    .with_context(|| format!("publishing '{}'", self.config.publish.filename))?,
            ),
            None => None,
        };

        let mut notes = sequence_output.metadata.notes;
        notes.extend(waveform_output.metadata.notes);

        Ok(WorkflowResult {
            x,
            y,
            figure,
            notes,
            embed,
        })
    }
}
