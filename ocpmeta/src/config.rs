use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{MONITORING_NS, TOKEN_EXPIRATION, WORKER_NODE_SELECTOR};

/// Top-level configuration loaded from `.ocpmeta.yaml` or an explicit path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
  /// Value reported as `metricName` in the collected metadata
  #[serde(default = "default_metric_name")]
  pub metric_name: String,

  /// Namespace of the Prometheus route and service account
  #[serde(default = "default_monitoring_namespace")]
  pub monitoring_namespace: String,

  /// Lifetime of the Prometheus bearer token, in seconds
  #[serde(default = "default_token_expiration_secs")]
  pub token_expiration_secs: u64,

  /// Label selector of the nodes whose running pods are counted
  #[serde(default = "default_worker_node_selector")]
  pub worker_node_selector: String,
}

fn default_metric_name() -> String {
  "clusterMetadata".to_string()
}

fn default_monitoring_namespace() -> String {
  MONITORING_NS.to_string()
}

fn default_token_expiration_secs() -> u64 {
  TOKEN_EXPIRATION.as_secs()
}

fn default_worker_node_selector() -> String {
  WORKER_NODE_SELECTOR.to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      metric_name: default_metric_name(),
      monitoring_namespace: default_monitoring_namespace(),
      token_expiration_secs: default_token_expiration_secs(),
      worker_node_selector: default_worker_node_selector(),
    }
  }
}

impl Config {
  pub fn token_expiration(&self) -> Duration {
    Duration::from_secs(self.token_expiration_secs)
  }
}

const DEFAULT_CONFIG_FILE: &str = ".ocpmeta.yaml";

/// Load configuration from an explicit path, the default `.ocpmeta.yaml` in the
/// current working directory, or fall back to `Config::default()`.
pub fn load(path: Option<&str>) -> Result<Config> {
  load_from(path, std::env::current_dir().ok().as_deref())
}

fn load_from(path: Option<&str>, base_dir: Option<&std::path::Path>) -> Result<Config> {
  if let Some(p) = path {
    let contents = std::fs::read_to_string(p).with_context(|| format!("Failed to read config file: {p}"))?;
    let config: Config =
      serde_yaml::from_str(&contents).with_context(|| format!("Failed to parse config file: {p}"))?;
    return Ok(config);
  }

  if let Some(dir) = base_dir {
    let default_path = dir.join(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
      let contents = std::fs::read_to_string(&default_path)
        .with_context(|| format!("Failed to read config file: {}", default_path.display()))?;
      let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", default_path.display()))?;
      return Ok(config);
    }
  }

  Ok(Config::default())
}
