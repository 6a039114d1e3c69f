use std::{collections::HashMap, time::Duration};

use anyhow::{Result, bail};

use ocpmeta::clients::OcpClients;
use ocpmeta::k8s::Node;
use ocpmeta::types::{
  ClusterVersion, Infrastructure, IngressController, InstallConfig, NetworkConfig, NetworkOperator, Route,
  VirtualMachineInstance,
};

/// Mock OpenShift client for testing. Optional fields set to `None` make the
/// corresponding call fail, to simulate objects that are missing or forbidden.
#[derive(Clone, Default)]
pub struct MockOcpClients {
  pub infrastructure: Infrastructure,
  pub cluster_version: ClusterVersion,
  pub server_version: String,
  pub nodes: Vec<Node>,
  pub network_config: Option<NetworkConfig>,
  pub network_operator: Option<NetworkOperator>,
  pub install_config: Option<InstallConfig>,
  pub routes: HashMap<(String, String), Route>,
  pub ingress_controllers: HashMap<(String, String), IngressController>,
  pub running_pods: HashMap<String, usize>,
  pub vmis: Vec<VirtualMachineInstance>,
}

/// Minimal equality based label selector matching (`key=value`, `key!=value`)
fn matches_selector(node: &Node, selector: &str) -> bool {
  selector.split(',').all(|term| {
    if let Some((key, value)) = term.split_once("!=") {
      node.labels.get(key).map(String::as_str) != Some(value)
    } else if let Some((key, value)) = term.split_once('=') {
      node.labels.get(key).map(String::as_str) == Some(value)
    } else {
      node.labels.contains_key(term)
    }
  })
}

impl OcpClients for MockOcpClients {
  async fn get_infrastructure(&self) -> Result<Infrastructure> {
    Ok(self.infrastructure.clone())
  }

  async fn get_cluster_version(&self) -> Result<ClusterVersion> {
    Ok(self.cluster_version.clone())
  }

  async fn get_server_version(&self) -> Result<String> {
    Ok(self.server_version.clone())
  }

  async fn get_nodes(&self, label_selector: Option<&str>) -> Result<Vec<Node>> {
    Ok(
      self
        .nodes
        .iter()
        .filter(|node| label_selector.is_none_or(|selector| matches_selector(node, selector)))
        .cloned()
        .collect(),
    )
  }

  async fn get_network_config(&self) -> Result<NetworkConfig> {
    match &self.network_config {
      Some(network) => Ok(network.clone()),
      None => bail!("networks.config.openshift.io \"cluster\" is forbidden"),
    }
  }

  async fn get_network_operator(&self) -> Result<NetworkOperator> {
    match &self.network_operator {
      Some(network) => Ok(network.clone()),
      None => bail!("networks.operator.openshift.io \"cluster\" not found"),
    }
  }

  async fn get_install_config(&self) -> Result<InstallConfig> {
    match &self.install_config {
      Some(config) => Ok(config.clone()),
      None => bail!("configmaps \"cluster-config-v1\" not found"),
    }
  }

  async fn get_route(&self, namespace: &str, name: &str) -> Result<Route> {
    let key = (namespace.to_string(), name.to_string());
    self.routes.get(&key).cloned()
      .ok_or_else(|| anyhow::anyhow!("No mock route {namespace}/{name}"))
  }

  async fn get_ingress_controller(&self, namespace: &str, name: &str) -> Result<IngressController> {
    let key = (namespace.to_string(), name.to_string());
    self.ingress_controllers.get(&key).cloned()
      .ok_or_else(|| anyhow::anyhow!("No mock ingress controller {namespace}/{name}"))
  }

  async fn create_token(&self, namespace: &str, service_account: &str, expiration: Duration) -> Result<String> {
    Ok(format!("{namespace}/{service_account}/{}", expiration.as_secs()))
  }

  async fn count_running_pods(&self, node_name: &str) -> Result<usize> {
    Ok(*self.running_pods.get(node_name).unwrap_or(&0))
  }

  async fn get_vmis(&self) -> Result<Vec<VirtualMachineInstance>> {
    Ok(self.vmis.clone())
  }
}

/// Mock that returns errors for all methods — used for error path testing
pub struct MockOcpClientsError;

impl OcpClients for MockOcpClientsError {
  async fn get_infrastructure(&self) -> Result<Infrastructure> { bail!("mock OCP error") }
  async fn get_cluster_version(&self) -> Result<ClusterVersion> { bail!("mock OCP error") }
  async fn get_server_version(&self) -> Result<String> { bail!("mock OCP error") }
  async fn get_nodes(&self, _label_selector: Option<&str>) -> Result<Vec<Node>> { bail!("mock OCP error") }
  async fn get_network_config(&self) -> Result<NetworkConfig> { bail!("mock OCP error") }
  async fn get_network_operator(&self) -> Result<NetworkOperator> { bail!("mock OCP error") }
  async fn get_install_config(&self) -> Result<InstallConfig> { bail!("mock OCP error") }
  async fn get_route(&self, _namespace: &str, _name: &str) -> Result<Route> { bail!("mock OCP error") }
  async fn get_ingress_controller(&self, _namespace: &str, _name: &str) -> Result<IngressController> { bail!("mock OCP error") }
  async fn create_token(&self, _: &str, _: &str, _: Duration) -> Result<String> { bail!("mock OCP error") }
  async fn count_running_pods(&self, _node_name: &str) -> Result<usize> { bail!("mock OCP error") }
  async fn get_vmis(&self) -> Result<Vec<VirtualMachineInstance>> { bail!("mock OCP error") }
}
