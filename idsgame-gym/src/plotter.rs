use crate::{PythonPath, py_err};
use idsgame_core::{
    Result,
    plotting::{PlotRequest, Plotter},
};
use pyo3::{
    PyResult, Python,
    types::{PyAnyMethods, PyDict},
};

const PLOTTING_MODULE: &str = "experiments.util.plotting_util";

/// Forwards result tables to `plot_results` of the python plotting utilities.
#[derive(Debug, Clone, Default)]
pub struct PyPlotter {
    python_path: PythonPath,
}

impl PyPlotter {
    pub fn new(python_path: PythonPath) -> Self {
        Self { python_path }
    }
}

impl Plotter for PyPlotter {
    fn plot_results(&mut self, request: &PlotRequest<'_>) -> Result<()> {
        Python::with_gil(|py| {
            self.python_path.install(py)?;
            let plot_results = py.import(PLOTTING_MODULE)?.getattr("plot_results")?;
            let kwargs = PyDict::new(py);
            kwargs.set_item("eval", request.eval)?;
            kwargs.set_item("sim", request.sim)?;
            let args = (
                request.avg_episode_rewards.to_vec(),
                request.avg_episode_steps.to_vec(),
                request.epsilon_values.to_vec(),
                request.hack_probability.to_vec(),
                request.attacker_cumulative_reward.to_vec(),
                request.defender_cumulative_reward.to_vec(),
                request.train_log_frequency,
                request.eval_frequency,
                request.eval_log_frequency,
                request.output_dir.to_string_lossy().into_owned(),
            );
            plot_results.call(args, Some(&kwargs))?;
            PyResult::Ok(())
        })
        .map_err(py_err)
    }
}
