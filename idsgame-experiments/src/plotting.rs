use idsgame_core::{
    Result,
    config::ClientConfig,
    plotting::{PlotRequest, Plotter},
    result::{
        ATTACKER_CUMULATIVE_REWARD, AVG_EPISODE_REWARDS, AVG_EPISODE_STEPS,
        DEFENDER_CUMULATIVE_REWARD, EPSILON_VALUES, HACK_PROBABILITY, ResultTable,
    },
};
use std::path::Path;

fn plot_request<'a>(
    config: &'a ClientConfig,
    table: &'a ResultTable,
    eval: bool,
) -> Result<PlotRequest<'a>> {
    let q_agent_config = &config.q_agent_config;
    Ok(PlotRequest {
        avg_episode_rewards: table.column(AVG_EPISODE_REWARDS)?,
        avg_episode_steps: table.column(AVG_EPISODE_STEPS)?,
        epsilon_values: table.column(EPSILON_VALUES)?,
        hack_probability: table.column(HACK_PROBABILITY)?,
        attacker_cumulative_reward: table.column(ATTACKER_CUMULATIVE_REWARD)?,
        defender_cumulative_reward: table.column(DEFENDER_CUMULATIVE_REWARD)?,
        train_log_frequency: q_agent_config.train_log_frequency,
        eval_frequency: q_agent_config.eval_frequency,
        eval_log_frequency: q_agent_config.eval_log_frequency,
        output_dir: &config.output_dir,
        eval,
        sim: false,
    })
}

/// Plots the training table, then the evaluation table.
pub fn plot_csv(
    config: &ClientConfig,
    eval_csv_path: impl AsRef<Path>,
    train_csv_path: impl AsRef<Path>,
    plotter: &mut impl Plotter,
) -> Result<()> {
    let eval_table = ResultTable::read_csv(eval_csv_path)?;
    let train_table = ResultTable::read_csv(train_csv_path)?;
    plotter.plot_results(&plot_request(config, &train_table, false)?)?;
    plotter.plot_results(&plot_request(config, &eval_table, true)?)?;
    Ok(())
}
