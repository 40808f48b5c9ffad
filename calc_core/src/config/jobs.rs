//! Job table loading

use super::ConfigError;
use crate::job::Job;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Container for job configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    pub jobs: Vec<Job>,
}

/// Load job configurations from a TOML file
pub fn load_job_configs(path: &Path) -> Result<HashMap<String, Job>, ConfigError> {
    let config: JobsConfig = super::load_toml(path)?;
    index_jobs(config)
}

/// Load job configurations from a TOML string
pub fn parse_job_configs(content: &str) -> Result<HashMap<String, Job>, ConfigError> {
    let config: JobsConfig = super::parse_toml(content)?;
    index_jobs(config)
}

fn index_jobs(config: JobsConfig) -> Result<HashMap<String, Job>, ConfigError> {
    let mut map = HashMap::new();
    for job in config.jobs {
        if map.contains_key(&job.id) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate job id: {}",
                job.id
            )));
        }
        map.insert(job.id.clone(), job);
    }
    Ok(map)
}

/// Get the built-in job table
pub fn default_jobs() -> HashMap<String, Job> {
    let toml = include_str!("../../config/jobs.toml");
    parse_job_configs(toml).unwrap_or_else(|_| {
        let mut map = HashMap::new();
        map.insert("novice".to_string(), Job::novice());
        map
    })
}
