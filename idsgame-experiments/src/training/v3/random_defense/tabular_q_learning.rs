// Tabular Q-learning attacker against the random defender of idsgame v3.
use crate::util::{Args, RunArtifacts, load_or_default, run_experiment};
use idsgame_core::{
    Result,
    config::{AgentType, ClientConfig, QAgentConfig, RunnerMode, write_config_file},
};
use idsgame_gym::{PyPlotter, PyRunner, PythonPath};
use std::path::{Path, PathBuf};

const ENV_NAME: &str = "idsgame-random_defense-v3";
const LOGGER_NAME: &str = "tabular_q_learning_vs_random_defense-v3";

pub fn default_output_dir() -> PathBuf {
    PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/results/v3/random_defense/tabular_q_learning"
    ))
}

pub fn default_config_path() -> PathBuf {
    default_output_dir().join("config.json")
}

pub fn default_config() -> ClientConfig {
    let output_dir = default_output_dir();
    let q_agent_config = QAgentConfig {
        gamma: 0.9,
        alpha: 0.3,
        epsilon: 1.,
        render: false,
        eval_sleep: 0.9,
        min_epsilon: 0.1,
        eval_episodes: 1,
        train_log_frequency: 1,
        epsilon_decay: 0.99,
        video: true,
        eval_log_frequency: 1,
        video_fps: 5,
        video_dir: output_dir.join("videos"),
        num_episodes: 1000,
        eval_render: false,
        gifs: true,
        gif_dir: output_dir.join("gifs"),
        eval_frequency: 100,
        attacker: true,
        defender: false,
        save_dir: output_dir.join("data"),
    };
    ClientConfig {
        env_name: ENV_NAME.to_owned(),
        attacker_type: AgentType::TabularQAgent,
        defender_type: AgentType::Random,
        mode: RunnerMode::TrainAttacker,
        q_agent_config,
        output_dir,
        title: "TrainingQAgent vs RandomDefender".to_owned(),
    }
}

pub fn write_default_config(path: Option<&Path>) -> Result<()> {
    let path = path.map_or_else(default_config_path, Path::to_path_buf);
    write_config_file(&default_config(), path)
}

pub fn run(args: &Args) -> Result<RunArtifacts> {
    let config = load_or_default(args.configpath.as_deref(), default_config)?;
    run_experiment(
        &config,
        LOGGER_NAME,
        PyRunner::new(PythonPath::default()),
        PyPlotter::new(PythonPath::default()),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use idsgame_core::config::read_config;

    #[test]
    fn default_config_is_deterministic() {
        assert_eq!(default_config(), default_config());
    }

    #[test]
    fn default_config_path_is_in_output_dir() {
        let output_dir = default_output_dir();
        assert!(output_dir.starts_with(env!("CARGO_MANIFEST_DIR")));
        assert!(output_dir.ends_with("results/v3/random_defense/tabular_q_learning"));
        assert_eq!(default_config_path(), output_dir.join("config.json"));
        assert_eq!(default_config().output_dir, default_output_dir());
    }

    #[test]
    fn written_default_config_reads_back() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        write_default_config(Some(&path))?;
        assert_eq!(read_config(&path)?, default_config());
        Ok(())
    }

    #[test]
    fn default_hyperparameters() {
        let config = default_config();
        let q = &config.q_agent_config;
        assert_eq!(config.attacker_type, AgentType::TabularQAgent);
        assert_eq!(config.mode, RunnerMode::TrainAttacker);
        assert_eq!((q.gamma, q.alpha, q.epsilon), (0.9, 0.3, 1.));
        assert_eq!((q.num_episodes, q.eval_frequency), (1000, 100));
        assert!(q.attacker && !q.defender);
        assert_eq!(q.save_dir, default_output_dir().join("data"));
    }
}
