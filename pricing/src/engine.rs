use std::sync::OnceLock;

use log::{info, warn};

use crate::artifact;
use crate::error::Result;
use crate::model::LinearModel;
use crate::ols;
use crate::synth::{self, HousingData, SEED};

static ENGINE: OnceLock<Engine> = OnceLock::new();

/// The fitted model bundled with the data it was trained on.
///
/// Built once per process and read-only afterwards; every interaction
/// goes through [`estimate`](crate::estimate) against the same
/// instance.
#[derive(Debug)]
pub struct Engine {
    model: LinearModel,
    data: HousingData,
}

impl Engine {
    /// Synthesizes the training set, fits the model and writes the
    /// model artifact.
    ///
    /// The artifact write is best-effort: a failure is logged and
    /// serving continues without it.
    ///
    /// # Errors
    /// Returns an error if synthesis or the fit fails; a degenerate fit
    /// aborts here rather than serving garbage coefficients.
    pub fn build() -> Result<Self> {
        let data = synth::generate(SEED)?;
        let model = ols::fit(data.features(), data.prices())?;
        info!(
            "pricing model fitted over {} records: intercept {:.2}, coefficients {:?}",
            data.len(),
            model.intercept(),
            model.coefficients(),
        );

        if let Err(e) = artifact::write_model(artifact::ARTIFACT_PATH, &model) {
            warn!("could not write model artifact to {}: {e}", artifact::ARTIFACT_PATH);
        }

        Ok(Self { model, data })
    }

    /// Returns the process-wide engine, building it on first call.
    ///
    /// Later calls return the same instance; the model is never refit
    /// within one process.
    ///
    /// # Errors
    /// Propagates the [`build`](Self::build) error on first call.
    pub fn shared() -> Result<&'static Engine> {
        if let Some(engine) = ENGINE.get() {
            return Ok(engine);
        }

        let engine = Self::build()?;
        Ok(ENGINE.get_or_init(|| engine))
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn data(&self) -> &HousingData {
        &self.data
    }
}
