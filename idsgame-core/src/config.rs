use crate::Result;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    #[default]
    #[display("random")]
    Random,
    #[display("defend_minimal_value")]
    DefendMinimalValue,
    #[display("tabular_q_agent")]
    TabularQAgent,
    #[display("attack_maximal_value")]
    AttackMaximalValue,
    #[display("manual_attack")]
    ManualAttack,
    #[display("manual_defense")]
    ManualDefense,
}

impl AgentType {
    // the numeric ids gym_idsgame uses
    pub fn id(&self) -> i64 {
        match self {
            Self::Random => 0,
            Self::DefendMinimalValue => 1,
            Self::TabularQAgent => 2,
            Self::AttackMaximalValue => 3,
            Self::ManualAttack => 4,
            Self::ManualDefense => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunnerMode {
    #[display("train_attacker")]
    TrainAttacker,
    #[display("train_defender")]
    TrainDefender,
    #[display("simulate")]
    Simulate,
    #[display("manual_attacker")]
    ManualAttacker,
    #[display("manual_defender")]
    ManualDefender,
}

impl RunnerMode {
    pub fn id(&self) -> i64 {
        match self {
            Self::TrainAttacker => 0,
            Self::TrainDefender => 1,
            Self::Simulate => 2,
            Self::ManualAttacker => 3,
            Self::ManualDefender => 4,
        }
    }
}

/// Hyperparameters of the tabular Q-learning agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QAgentConfig {
    pub gamma: f64,
    pub alpha: f64,
    pub epsilon: f64,
    pub render: bool,
    pub eval_sleep: f64,
    pub min_epsilon: f64,
    pub eval_episodes: usize,
    pub train_log_frequency: usize,
    pub epsilon_decay: f64,
    pub video: bool,
    pub eval_log_frequency: usize,
    pub video_fps: usize,
    pub video_dir: PathBuf,
    pub num_episodes: usize,
    pub eval_render: bool,
    pub gifs: bool,
    pub gif_dir: PathBuf,
    pub eval_frequency: usize,
    pub attacker: bool,
    pub defender: bool,
    pub save_dir: PathBuf,
}

impl QAgentConfig {
    /// Dumps the hyperparameters as a header row plus a single value row.
    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.serialize(self)?;
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub env_name: String,
    pub attacker_type: AgentType,
    #[serde(default)]
    pub defender_type: AgentType,
    pub mode: RunnerMode,
    pub q_agent_config: QAgentConfig,
    pub output_dir: PathBuf,
    pub title: String,
}

impl ClientConfig {
    pub fn logs_dir(&self) -> PathBuf {
        self.output_dir.join("logs")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.output_dir.join("data")
    }

    pub fn hyperparameters_dir(&self) -> PathBuf {
        self.output_dir.join("hyperparameters")
    }
}

pub fn read_config(path: impl AsRef<Path>) -> Result<ClientConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn write_config_file(config: &ClientConfig, path: impl AsRef<Path>) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn config(dir: &Path) -> ClientConfig {
        ClientConfig {
            env_name: "idsgame-random_defense-v3".into(),
            attacker_type: AgentType::TabularQAgent,
            defender_type: AgentType::Random,
            mode: RunnerMode::TrainAttacker,
            q_agent_config: QAgentConfig {
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
                video_dir: dir.join("videos"),
                num_episodes: 1000,
                eval_render: false,
                gifs: true,
                gif_dir: dir.join("gifs"),
                eval_frequency: 100,
                attacker: true,
                defender: false,
                save_dir: dir.join("data"),
            },
            output_dir: dir.to_path_buf(),
            title: "TrainingQAgent vs RandomDefender".into(),
        }
    }

    #[test]
    fn config_file_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.json");
        let config = config(dir.path());
        write_config_file(&config, &path)?;
        assert_eq!(read_config(&path)?, config);
        Ok(())
    }

    #[test]
    fn enums_are_snake_case_in_json() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let json = serde_json::to_value(config(dir.path()))?;
        assert_eq!(json["attacker_type"], "tabular_q_agent");
        assert_eq!(json["mode"], "train_attacker");
        assert_eq!(AgentType::TabularQAgent.to_string(), "tabular_q_agent");
        Ok(())
    }

    #[test]
    fn missing_defender_type_defaults_to_random() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut json = serde_json::to_value(config(dir.path()))?;
        json.as_object_mut().unwrap().remove("defender_type");
        let config: ClientConfig = serde_json::from_value(json)?;
        assert_eq!(config.defender_type, AgentType::Random);
        Ok(())
    }

    #[test]
    fn hyperparameters_dump_is_one_row() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hp.csv");
        config(dir.path()).q_agent_config.to_csv(&path)?;
        let mut reader = csv::Reader::from_path(&path)?;
        let headers = reader.headers()?.clone();
        assert_eq!(&headers[0], "gamma");
        assert_eq!(headers.len(), 21);
        let rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][13], "1000");
        Ok(())
    }
}
