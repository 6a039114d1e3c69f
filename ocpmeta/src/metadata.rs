use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
  clients::OcpClients,
  config::Config,
  constants::{DEFAULT_INGRESS_CONTROLLER, INGRESS_OPERATOR_NS, PROMETHEUS, RUNNING},
  nodes,
  types::{ClusterMetadata, non_empty},
  version,
};

/// Collect the cluster metadata in a single pass
///
/// Infrastructure, versions and nodes are required and any failure is
/// returned. Network type, install config and IPsec settings are not readable
/// on every flavor (e.g. hosted control planes), so failures there are logged
/// and the fields are left absent.
pub async fn get_cluster_metadata(clients: &impl OcpClients, config: &Config) -> Result<ClusterMetadata> {
  let mut metadata = ClusterMetadata {
    metric_name: non_empty(config.metric_name.as_str()),
    ..Default::default()
  };

  let infra = clients.get_infrastructure().await?;
  metadata.cluster_name = non_empty(infra.status.infrastructure_name.as_str());
  metadata.platform = non_empty(infra.status.platform.as_str());
  metadata.cluster_type = non_empty(infra.cluster_type());
  metadata.region = non_empty(infra.status.platform_status.aws.region.as_str());
  debug!("Infrastructure {:?} on {:?}", metadata.cluster_name, metadata.platform);

  let cluster_version = clients.get_cluster_version().await?;
  let k8s_version = clients.get_server_version().await?;
  let versions = version::version_info(&cluster_version, &k8s_version)?;
  metadata.ocp_version = non_empty(versions.ocp_version);
  metadata.ocp_major_version = non_empty(versions.ocp_major_version);
  metadata.k8s_version = non_empty(versions.k8s_version);

  let node_list = clients.get_nodes(None).await?;
  nodes::summarize(&node_list, &mut metadata);

  match clients.get_network_config().await {
    Ok(network) => metadata.sdn_type = non_empty(network.status.network_type),
    Err(e) => warn!("Unable to get network type: {e:#}"),
  }

  match clients.get_install_config().await {
    Ok(install_config) => {
      metadata.fips = Some(install_config.fips);
      metadata.publish = non_empty(install_config.publish);
    }
    Err(e) => warn!("Unable to read install config: {e:#}"),
  }

  match clients.get_network_operator().await {
    Ok(network) => {
      let (enabled, mode) = network.ipsec();
      metadata.ipsec = Some(enabled);
      metadata.ipsec_mode = non_empty(mode);
    }
    Err(e) => warn!("Unable to get IPsec configuration: {e:#}"),
  }

  Ok(metadata)
}

/// Prometheus endpoint and a bearer token to query it
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrometheusEndpoint {
  pub url: String,
  pub token: String,
}

/// Returns the URL of the in-cluster Prometheus route and a token for it
pub async fn get_prometheus(clients: &impl OcpClients, config: &Config) -> Result<PrometheusEndpoint> {
  let namespace = config.monitoring_namespace.as_str();
  let route = clients.get_route(namespace, PROMETHEUS).await?;
  if route.spec.host.is_empty() {
    bail!("Route {namespace}/{PROMETHEUS} has no host");
  }

  let token = clients
    .create_token(namespace, PROMETHEUS, config.token_expiration())
    .await?;

  Ok(PrometheusEndpoint {
    url: format!("https://{}", route.spec.host),
    token,
  })
}

/// Returns the domain served by the default ingress controller
pub async fn get_default_ingress_domain(clients: &impl OcpClients) -> Result<String> {
  let controller = clients
    .get_ingress_controller(INGRESS_OPERATOR_NS, DEFAULT_INGRESS_CONTROLLER)
    .await?;

  if controller.status.domain.is_empty() {
    bail!("IngressController {INGRESS_OPERATOR_NS}/{DEFAULT_INGRESS_CONTROLLER} has no domain");
  }

  Ok(controller.status.domain)
}

/// Number of running pods across the worker nodes
pub async fn get_current_pod_count(clients: &impl OcpClients, config: &Config) -> Result<usize> {
  let workers = clients.get_nodes(Some(config.worker_node_selector.as_str())).await?;

  let mut count = 0;
  for node in &workers {
    count += clients.count_running_pods(&node.name).await?;
  }
  debug!("{count} running pods on {} worker nodes", workers.len());

  Ok(count)
}

/// Number of running VirtualMachineInstances in all namespaces
pub async fn get_current_vmi_count(clients: &impl OcpClients) -> Result<usize> {
  let vmis = clients.get_vmis().await?;
  Ok(vmis.iter().filter(|vmi| vmi.status.phase == RUNNING).count())
}
