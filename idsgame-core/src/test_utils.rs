use crate::{
    ExperimentError, Result,
    config::ClientConfig,
    logging::RunLogger,
    plotting::{PlotRequest, Plotter},
    result::ExperimentResult,
    runner::Runner,
};
use std::path::PathBuf;

/// Builds a result with `steps` recorded checkpoints of made up but plausible metrics.
pub fn synthetic_result(steps: usize, epsilon_decay: f64) -> ExperimentResult {
    let mut res = ExperimentResult::default();
    let mut epsilon = 1.;
    let mut attacker_cumulative = 0.;
    for step in 0..steps {
        let hacked = step % 3 == 0;
        let reward = if hacked { 1. } else { -1. };
        attacker_cumulative += reward;
        res.avg_episode_rewards.push(reward);
        res.avg_episode_steps.push((step % 7 + 1) as f64);
        res.epsilon_values.push(epsilon);
        res.hack_probability.push(if hacked { 1. } else { 0. });
        res.attacker_cumulative_reward.push(attacker_cumulative);
        res.defender_cumulative_reward.push(-attacker_cumulative);
        epsilon *= epsilon_decay;
    }
    res
}

#[derive(Debug, Default)]
pub struct StubRunner {
    pub train_steps: usize,
    pub eval_steps: usize,
    pub calls: usize,
}

impl StubRunner {
    pub fn new(train_steps: usize, eval_steps: usize) -> Self {
        Self {
            train_steps,
            eval_steps,
            calls: 0,
        }
    }
}

impl Runner for StubRunner {
    fn run(
        &mut self,
        config: &ClientConfig,
        logger: &RunLogger,
    ) -> Result<(ExperimentResult, ExperimentResult)> {
        self.calls += 1;
        logger.debug(format!("stub run of {}", config.env_name));
        let decay = config.q_agent_config.epsilon_decay;
        Ok((
            synthetic_result(self.train_steps, decay),
            synthetic_result(self.eval_steps, decay),
        ))
    }
}

/// Fails every run the way a crashing python runner would.
#[derive(Debug, Default)]
pub struct FailingRunner {
    pub calls: usize,
}

impl Runner for FailingRunner {
    fn run(
        &mut self,
        _config: &ClientConfig,
        logger: &RunLogger,
    ) -> Result<(ExperimentResult, ExperimentResult)> {
        self.calls += 1;
        logger.warn("runner failing on purpose");
        Err(ExperimentError::Python("runner crashed".to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPlot {
    pub points: usize,
    pub train_log_frequency: usize,
    pub eval_frequency: usize,
    pub eval_log_frequency: usize,
    pub output_dir: PathBuf,
    pub eval: bool,
    pub sim: bool,
}

#[derive(Debug, Default)]
pub struct RecordingPlotter {
    pub calls: Vec<RecordedPlot>,
}

impl Plotter for RecordingPlotter {
    fn plot_results(&mut self, request: &PlotRequest<'_>) -> Result<()> {
        self.calls.push(RecordedPlot {
            points: request.avg_episode_steps.len(),
            train_log_frequency: request.train_log_frequency,
            eval_frequency: request.eval_frequency,
            eval_log_frequency: request.eval_log_frequency,
            output_dir: request.output_dir.to_path_buf(),
            eval: request.eval,
            sim: request.sim,
        });
        Ok(())
    }
}

/// Records the request like `RecordingPlotter`, then fails it.
#[derive(Debug, Default)]
pub struct FailingPlotter {
    pub calls: usize,
}

impl Plotter for FailingPlotter {
    fn plot_results(&mut self, request: &PlotRequest<'_>) -> Result<()> {
        self.calls += 1;
        Err(ExperimentError::Python(format!(
            "plotting into {} failed",
            request.output_dir.display()
        )))
    }
}
