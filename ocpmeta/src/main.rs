use anyhow::Result;
use clap::Parser;
use ocpmeta::{Cli, Commands, clients::RealOcpClients, config};

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // Forward `log` records from dependencies into the tracing subscriber
  tracing_log::LogTracer::init()?;
  let subscriber = tracing_subscriber::fmt()
    .with_max_level(cli.verbose.tracing_level_filter())
    .with_writer(std::io::stderr)
    .finish();
  tracing::subscriber::set_global_default(subscriber)?;

  let config = config::load(cli.config.as_deref())?;
  let clients = RealOcpClients::new().await?;

  match &cli.commands {
    Commands::Cluster(args) => ocpmeta::cluster(&clients, &config, args).await?,
    Commands::Prometheus => ocpmeta::prometheus(&clients, &config).await?,
    Commands::IngressDomain => ocpmeta::ingress_domain(&clients).await?,
    Commands::PodCount => ocpmeta::pod_count(&clients, &config).await?,
    Commands::VmiCount => ocpmeta::vmi_count(&clients).await?,
  }

  Ok(())
}
