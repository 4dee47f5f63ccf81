use crate::plotting::plot_csv;
use clap::Parser;
use idsgame_core::{
    Result,
    config::{ClientConfig, read_config, write_config_file},
    logging::{setup_logger, time_str},
    plotting::Plotter,
    runner::Runner,
};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const ARTEFACT_DIRS: [&str; 6] = ["logs", "plots", "data", "hyperparameters", "videos", "gifs"];

#[derive(Parser, Debug, Default)]
pub struct Args {
    /// Config file to use. Created with the defaults of the experiment when it does not exist.
    #[arg(long)]
    pub configpath: Option<PathBuf>,
}

/// Loads the config from `configpath`, writing `default_config` there first if the file is
/// missing. Without a path the default config is used as is.
pub fn load_or_default(
    configpath: Option<&Path>,
    default_config: impl FnOnce() -> ClientConfig,
) -> Result<ClientConfig> {
    match configpath {
        Some(path) => {
            if !path.exists() {
                write_config_file(&default_config(), path)?;
            }
            read_config(path)
        }
        None => Ok(default_config()),
    }
}

pub fn create_artefact_dirs(output_dir: impl AsRef<Path>) -> Result<()> {
    for dir in ARTEFACT_DIRS {
        fs::create_dir_all(output_dir.as_ref().join(dir))?;
    }
    Ok(())
}

/// Files produced by a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArtifacts {
    pub time_str: String,
    pub hyperparameters_csv: PathBuf,
    pub train_csv: Option<PathBuf>,
    pub eval_csv: Option<PathBuf>,
}

/// Runs one experiment end to end: artefact directories, logger, hyperparameter dump, training
/// and evaluation, result csvs and plots. Nothing is cleaned up when a step fails.
pub fn run_experiment(
    config: &ClientConfig,
    logger_name: &str,
    mut runner: impl Runner,
    mut plotter: impl Plotter,
) -> Result<RunArtifacts> {
    let time_str = time_str();
    create_artefact_dirs(&config.output_dir)?;
    let logger = setup_logger(logger_name, config.logs_dir(), &time_str)?;
    logger.info(format!("{}: {}", config.title, config.env_name));

    let hyperparameters_csv = config
        .hyperparameters_dir()
        .join(format!("{time_str}.csv"));
    config.q_agent_config.to_csv(&hyperparameters_csv)?;

    let (train_result, eval_result) = runner
        .run(config, &logger)
        .inspect_err(|err| logger.warn(format!("run of {} failed: {err}", config.env_name)))?;
    let mut artifacts = RunArtifacts {
        time_str,
        hyperparameters_csv,
        train_csv: None,
        eval_csv: None,
    };
    if train_result.is_empty() || eval_result.is_empty() {
        logger.debug("nothing recorded, skipping result csvs and plots");
        return Ok(artifacts);
    }

    let data_dir = config.data_dir();
    let train_csv = data_dir.join(format!("{}_train.csv", artifacts.time_str));
    train_result.to_csv(&train_csv)?;
    let eval_csv = data_dir.join(format!("{}_eval.csv", artifacts.time_str));
    eval_result.to_csv(&eval_csv)?;
    plot_csv(config, &eval_csv, &train_csv, &mut plotter)?;
    logger.info(format!(
        "results written to {} and {}",
        train_csv.display(),
        eval_csv.display()
    ));

    artifacts.train_csv = Some(train_csv);
    artifacts.eval_csv = Some(eval_csv);
    Ok(artifacts)
}
