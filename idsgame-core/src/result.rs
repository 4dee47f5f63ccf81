use crate::{ExperimentError, Result};
use serde::Serialize;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub const AVG_EPISODE_REWARDS: &str = "avg_episode_rewards";
pub const AVG_EPISODE_STEPS: &str = "avg_episode_steps";
pub const EPSILON_VALUES: &str = "epsilon_values";
pub const HACK_PROBABILITY: &str = "hack_probability";
pub const ATTACKER_CUMULATIVE_REWARD: &str = "attacker_cumulative_reward";
pub const DEFENDER_CUMULATIVE_REWARD: &str = "defender_cumulative_reward";

/// Per checkpoint metrics collected by a runner, either during training or evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentResult {
    pub avg_episode_rewards: Vec<f64>,
    pub avg_episode_steps: Vec<f64>,
    pub epsilon_values: Vec<f64>,
    pub hack_probability: Vec<f64>,
    pub attacker_cumulative_reward: Vec<f64>,
    pub defender_cumulative_reward: Vec<f64>,
}

#[derive(Serialize)]
struct ResultRow {
    avg_episode_rewards: f64,
    avg_episode_steps: f64,
    epsilon_values: f64,
    hack_probability: f64,
    attacker_cumulative_reward: f64,
    defender_cumulative_reward: f64,
}

impl ExperimentResult {
    /// Number of recorded steps
    pub fn len(&self) -> usize {
        self.avg_episode_steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avg_episode_steps.is_empty()
    }

    fn columns(&self) -> [(&'static str, &[f64]); 6] {
        [
            (AVG_EPISODE_REWARDS, &self.avg_episode_rewards),
            (AVG_EPISODE_STEPS, &self.avg_episode_steps),
            (EPSILON_VALUES, &self.epsilon_values),
            (HACK_PROBABILITY, &self.hack_probability),
            (ATTACKER_CUMULATIVE_REWARD, &self.attacker_cumulative_reward),
            (DEFENDER_CUMULATIVE_REWARD, &self.defender_cumulative_reward),
        ]
    }

    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let expected = self.len();
        for (column, values) in self.columns() {
            if values.len() != expected {
                return Err(ExperimentError::RaggedColumns {
                    column,
                    len: values.len(),
                    expected,
                });
            }
        }
        let mut writer = csv::Writer::from_path(path)?;
        if expected == 0 {
            // serialize writes the header lazily, an empty result still gets one
            writer.write_record(self.columns().map(|(column, _)| column))?;
        }
        for i in 0..expected {
            writer.serialize(ResultRow {
                avg_episode_rewards: self.avg_episode_rewards[i],
                avg_episode_steps: self.avg_episode_steps[i],
                epsilon_values: self.epsilon_values[i],
                hack_probability: self.hack_probability[i],
                attacker_cumulative_reward: self.attacker_cumulative_reward[i],
                defender_cumulative_reward: self.defender_cumulative_reward[i],
            })?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self> {
        let table = ResultTable::read_csv(path)?;
        Ok(Self {
            avg_episode_rewards: table.column(AVG_EPISODE_REWARDS)?.to_vec(),
            avg_episode_steps: table.column(AVG_EPISODE_STEPS)?.to_vec(),
            epsilon_values: table.column(EPSILON_VALUES)?.to_vec(),
            hack_probability: table.column(HACK_PROBABILITY)?.to_vec(),
            attacker_cumulative_reward: table.column(ATTACKER_CUMULATIVE_REWARD)?.to_vec(),
            defender_cumulative_reward: table.column(DEFENDER_CUMULATIVE_REWARD)?.to_vec(),
        })
    }
}

/// A csv file loaded column wise. Every cell has to be numeric.
#[derive(Debug, Clone)]
pub struct ResultTable {
    path: PathBuf,
    columns: HashMap<String, Vec<f64>>,
}

impl ResultTable {
    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut reader = csv::Reader::from_path(&path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
        for (idx, header) in headers.iter().enumerate() {
            if headers[..idx].contains(header) {
                return Err(ExperimentError::DuplicateColumn {
                    column: header.clone(),
                    path,
                });
            }
        }
        let mut columns: Vec<Vec<f64>> = vec![vec![]; headers.len()];
        for record in reader.records() {
            let row: Vec<f64> = record?.deserialize(None)?;
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        Ok(Self {
            path,
            columns: headers.into_iter().zip(columns).collect(),
        })
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ExperimentError::MissingColumn {
                column: name.to_owned(),
                path: self.path.clone(),
            })
    }
}
