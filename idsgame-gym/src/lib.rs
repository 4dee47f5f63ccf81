// Bridges to the python side of idsgame: the gym environments, the agents that train in them and
// the plotting utilities. Everything runs under the GIL, one call at a time.
mod plotter;
mod runner;

pub use plotter::PyPlotter;
pub use runner::PyRunner;

use idsgame_core::ExperimentError;
use pyo3::{PyErr, PyResult, Python, types::PyAnyMethods};
use std::path::PathBuf;

pub(crate) fn py_err(err: PyErr) -> ExperimentError {
    ExperimentError::Python(err.to_string())
}

/// Extra import roots, prepended to `sys.path` before anything is imported.
#[derive(Debug, Clone, Default)]
pub struct PythonPath(Vec<PathBuf>);

impl PythonPath {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self(roots)
    }

    pub(crate) fn install(&self, py: Python<'_>) -> PyResult<()> {
        let sys_path = py.import("sys")?.getattr("path")?;
        for root in self.0.iter().rev() {
            let root = root.to_string_lossy().into_owned();
            if !sys_path.contains(&root)? {
                sys_path.call_method1("insert", (0, root))?;
            }
        }
        Ok(())
    }
}
