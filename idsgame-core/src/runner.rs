use crate::{Result, config::ClientConfig, logging::RunLogger, result::ExperimentResult};

/// Trains and evaluates the agents described by a [`ClientConfig`].
pub trait Runner {
    /// Returns the training result followed by the evaluation result of the same run.
    fn run(
        &mut self,
        config: &ClientConfig,
        logger: &RunLogger,
    ) -> Result<(ExperimentResult, ExperimentResult)>;
}

impl<R: Runner + ?Sized> Runner for &mut R {
    fn run(
        &mut self,
        config: &ClientConfig,
        logger: &RunLogger,
    ) -> Result<(ExperimentResult, ExperimentResult)> {
        (**self).run(config, logger)
    }
}
