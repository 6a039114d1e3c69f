pub mod clients;
pub mod config;
pub mod constants;
pub mod k8s;
pub mod metadata;
pub mod nodes;
pub mod output;
pub mod types;
mod version;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{clients::OcpClients, config::Config};

#[derive(Parser, Debug)]
#[command(author, about, version)]
#[command(propagate_version = true)]
pub struct Cli {
  #[command(subcommand)]
  pub commands: Commands,

  /// Path to the configuration file (defaults to ./.ocpmeta.yaml when present)
  #[arg(long, global = true)]
  pub config: Option<String>,

  #[clap(flatten)]
  pub verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  Cluster(Cluster),
  /// Print the Prometheus URL and a bearer token to query it
  Prometheus,
  /// Print the domain of the default ingress controller
  IngressDomain,
  /// Print the number of running pods on worker nodes
  PodCount,
  /// Print the number of running virtual machine instances
  VmiCount,
}

/// Collect the metadata of the OpenShift cluster in the current kubeconfig context
#[derive(Args, Debug, Serialize, Deserialize)]
pub struct Cluster {
  #[arg(short, long, value_enum, default_value_t)]
  pub format: output::Format,

  /// Write to file instead of stdout
  #[arg(short, long)]
  pub output: Option<String>,
}

/// Collect and output the cluster metadata
pub async fn cluster(clients: &impl OcpClients, config: &Config, args: &Cluster) -> Result<()> {
  let metadata = metadata::get_cluster_metadata(clients, config).await?;
  info!(
    "Collected metadata for cluster {}",
    metadata.cluster_name.as_deref().unwrap_or("<unknown>")
  );
  output::output(&metadata, &args.format, &args.output)?;

  Ok(())
}

pub async fn prometheus(clients: &impl OcpClients, config: &Config) -> Result<()> {
  let endpoint = metadata::get_prometheus(clients, config).await?;
  println!("{}\n{}", endpoint.url, endpoint.token);

  Ok(())
}

pub async fn ingress_domain(clients: &impl OcpClients) -> Result<()> {
  let domain = metadata::get_default_ingress_domain(clients).await?;
  println!("{domain}");

  Ok(())
}

pub async fn pod_count(clients: &impl OcpClients, config: &Config) -> Result<()> {
  let count = metadata::get_current_pod_count(clients, config).await?;
  println!("{count}");

  Ok(())
}

pub async fn vmi_count(clients: &impl OcpClients) -> Result<()> {
  let count = metadata::get_current_vmi_count(clients).await?;
  println!("{count}");

  Ok(())
}
