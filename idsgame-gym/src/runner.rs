use crate::{PythonPath, py_err};
use idsgame_core::{
    Result,
    config::{ClientConfig, QAgentConfig},
    logging::RunLogger,
    result::ExperimentResult,
    runner::Runner,
};
use pyo3::{
    Bound, PyAny, PyResult, Python,
    types::{PyAnyMethods, PyDict},
};
use std::path::Path;

const Q_AGENT_CONFIG_MODULE: &str = "gym_idsgame.agents.tabular_q_learning.q_agent_config";
const CLIENT_CONFIG_MODULE: &str = "gym_idsgame.config.client_config";
// the module really is spelled like this upstream
const RUNNER_MODULE: &str = "gym_idsgame.runnner";
// same layout as the log4rs pattern of the run log
const PY_LOG_FORMAT: &str = "%(asctime)s - %(name)s - %(levelname)s - %(message)s";
const PY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Runs the experiment with the `Runner` of the gym_idsgame python package.
#[derive(Debug, Clone, Default)]
pub struct PyRunner {
    python_path: PythonPath,
}

impl PyRunner {
    pub fn new(python_path: PythonPath) -> Self {
        Self { python_path }
    }
}

/// The python logger the agents log through, routed to stdout and to the run log file at INFO.
/// Handlers left over from an earlier run with the same name are closed first.
fn python_logger<'py>(py: Python<'py>, logger: &RunLogger) -> PyResult<Bound<'py, PyAny>> {
    let logging = py.import("logging")?;
    let py_logger = logging.call_method1("getLogger", (logger.target(),))?;
    let stale: Vec<Bound<'py, PyAny>> = py_logger.getattr("handlers")?.extract()?;
    for handler in stale {
        py_logger.call_method1("removeHandler", (&handler,))?;
        handler.call_method0("close")?;
    }
    py_logger.call_method1("setLevel", (logging.getattr("INFO")?,))?;
    py_logger.setattr("propagate", false)?;

    let formatter = logging
        .getattr("Formatter")?
        .call1((PY_LOG_FORMAT, PY_DATE_FORMAT))?;
    let stdout = py.import("sys")?.getattr("stdout")?;
    let mut handlers = vec![logging.getattr("StreamHandler")?.call1((stdout,))?];
    if let Some(log_file) = logger.log_file() {
        handlers.push(
            logging
                .getattr("FileHandler")?
                .call1((path_str(log_file),))?,
        );
    }
    for handler in handlers {
        handler.call_method1("setFormatter", (&formatter,))?;
        py_logger.call_method1("addHandler", (handler,))?;
    }
    Ok(py_logger)
}

fn q_agent_config<'py>(
    py: Python<'py>,
    config: &QAgentConfig,
    logger: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    let kwargs = PyDict::new(py);
    kwargs.set_item("gamma", config.gamma)?;
    kwargs.set_item("alpha", config.alpha)?;
    kwargs.set_item("epsilon", config.epsilon)?;
    kwargs.set_item("render", config.render)?;
    kwargs.set_item("eval_sleep", config.eval_sleep)?;
    kwargs.set_item("min_epsilon", config.min_epsilon)?;
    kwargs.set_item("eval_episodes", config.eval_episodes)?;
    kwargs.set_item("train_log_frequency", config.train_log_frequency)?;
    kwargs.set_item("epsilon_decay", config.epsilon_decay)?;
    kwargs.set_item("video", config.video)?;
    kwargs.set_item("eval_log_frequency", config.eval_log_frequency)?;
    kwargs.set_item("video_fps", config.video_fps)?;
    kwargs.set_item("video_dir", path_str(&config.video_dir))?;
    kwargs.set_item("num_episodes", config.num_episodes)?;
    kwargs.set_item("eval_render", config.eval_render)?;
    kwargs.set_item("gifs", config.gifs)?;
    kwargs.set_item("gif_dir", path_str(&config.gif_dir))?;
    kwargs.set_item("eval_frequency", config.eval_frequency)?;
    kwargs.set_item("attacker", config.attacker)?;
    kwargs.set_item("defender", config.defender)?;
    kwargs.set_item("save_dir", path_str(&config.save_dir))?;
    let q_agent_config = py
        .import(Q_AGENT_CONFIG_MODULE)?
        .getattr("QAgentConfig")?
        .call((), Some(&kwargs))?;
    // the python agents log through the config they are handed
    q_agent_config.setattr("logger", logger)?;
    Ok(q_agent_config)
}

fn client_config<'py>(
    py: Python<'py>,
    config: &ClientConfig,
    logger: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    let kwargs = PyDict::new(py);
    kwargs.set_item("env_name", &config.env_name)?;
    kwargs.set_item("attacker_type", config.attacker_type.id())?;
    kwargs.set_item("defender_type", config.defender_type.id())?;
    kwargs.set_item("mode", config.mode.id())?;
    kwargs.set_item(
        "q_agent_config",
        q_agent_config(py, &config.q_agent_config, logger)?,
    )?;
    kwargs.set_item("output_dir", path_str(&config.output_dir))?;
    kwargs.set_item("title", &config.title)?;
    let client_config = py
        .import(CLIENT_CONFIG_MODULE)?
        .getattr("ClientConfig")?
        .call((), Some(&kwargs))?;
    client_config.setattr("logger", logger)?;
    Ok(client_config)
}

fn extract_result(result: &Bound<'_, PyAny>) -> PyResult<ExperimentResult> {
    Ok(ExperimentResult {
        avg_episode_rewards: result.getattr("avg_episode_rewards")?.extract()?,
        avg_episode_steps: result.getattr("avg_episode_steps")?.extract()?,
        epsilon_values: result.getattr("epsilon_values")?.extract()?,
        hack_probability: result.getattr("hack_probability")?.extract()?,
        attacker_cumulative_reward: result.getattr("attacker_cumulative_reward")?.extract()?,
        defender_cumulative_reward: result.getattr("defender_cumulative_reward")?.extract()?,
    })
}

impl Runner for PyRunner {
    fn run(
        &mut self,
        config: &ClientConfig,
        logger: &RunLogger,
    ) -> Result<(ExperimentResult, ExperimentResult)> {
        logger.info(format!(
            "starting python runner for {} in mode {}",
            config.env_name, config.mode
        ));
        let (train, eval) = Python::with_gil(|py| {
            self.python_path.install(py)?;
            let py_logger = python_logger(py, logger)?;
            let client_config = client_config(py, config, &py_logger)?;
            let results = py
                .import(RUNNER_MODULE)?
                .getattr("Runner")?
                .call_method1("run", (client_config,))?;
            let train = extract_result(&results.get_item(0)?)?;
            let eval = extract_result(&results.get_item(1)?)?;
            PyResult::Ok((train, eval))
        })
        .map_err(py_err)?;
        logger.info(format!(
            "python runner finished with {} train and {} eval checkpoints",
            train.len(),
            eval.len()
        ));
        Ok((train, eval))
    }
}
