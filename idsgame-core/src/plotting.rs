use crate::Result;
use std::path::Path;

/// Everything a plotter needs to render one result table.
#[derive(Debug, Clone, Copy)]
pub struct PlotRequest<'a> {
    pub avg_episode_rewards: &'a [f64],
    pub avg_episode_steps: &'a [f64],
    pub epsilon_values: &'a [f64],
    pub hack_probability: &'a [f64],
    pub attacker_cumulative_reward: &'a [f64],
    pub defender_cumulative_reward: &'a [f64],
    pub train_log_frequency: usize,
    pub eval_frequency: usize,
    pub eval_log_frequency: usize,
    pub output_dir: &'a Path,
    pub eval: bool,
    pub sim: bool,
}

pub trait Plotter {
    fn plot_results(&mut self, request: &PlotRequest<'_>) -> Result<()>;
}

impl<P: Plotter + ?Sized> Plotter for &mut P {
    fn plot_results(&mut self, request: &PlotRequest<'_>) -> Result<()> {
        (**self).plot_results(request)
    }
}
