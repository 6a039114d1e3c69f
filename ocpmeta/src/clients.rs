use std::{future::Future, time::Duration};

use anyhow::Result;

use crate::{
  constants::{
    CLUSTER, CLUSTER_VERSION, CLUSTER_VERSION_GVR, INFRASTRUCTURE_GVR, INGRESS_CONTROLLER_GVR, NETWORK_CONFIG_GVR,
    NETWORK_OPERATOR_GVR, ROUTE_GVR,
  },
  k8s::{self, Node},
  types::{
    ClusterVersion, Infrastructure, IngressController, InstallConfig, NetworkConfig, NetworkOperator, Route,
    VirtualMachineInstance,
  },
};

/// Trait abstracting all Kubernetes/OpenShift API operations used by ocpmeta
pub trait OcpClients {
  fn get_infrastructure(&self) -> impl Future<Output = Result<Infrastructure>> + Send;
  fn get_cluster_version(&self) -> impl Future<Output = Result<ClusterVersion>> + Send;
  fn get_server_version(&self) -> impl Future<Output = Result<String>> + Send;
  fn get_nodes(&self, label_selector: Option<&str>) -> impl Future<Output = Result<Vec<Node>>> + Send;
  fn get_network_config(&self) -> impl Future<Output = Result<NetworkConfig>> + Send;
  fn get_network_operator(&self) -> impl Future<Output = Result<NetworkOperator>> + Send;
  fn get_install_config(&self) -> impl Future<Output = Result<InstallConfig>> + Send;
  fn get_route(&self, namespace: &str, name: &str) -> impl Future<Output = Result<Route>> + Send;
  fn get_ingress_controller(
    &self,
    namespace: &str,
    name: &str,
  ) -> impl Future<Output = Result<IngressController>> + Send;
  fn create_token(
    &self,
    namespace: &str,
    service_account: &str,
    expiration: Duration,
  ) -> impl Future<Output = Result<String>> + Send;
  fn count_running_pods(&self, node_name: &str) -> impl Future<Output = Result<usize>> + Send;
  fn get_vmis(&self) -> impl Future<Output = Result<Vec<VirtualMachineInstance>>> + Send;
}

/// Real client implementation wrapping kube-rs
pub struct RealOcpClients {
  client: kube::Client,
}

impl RealOcpClients {
  pub async fn new() -> Result<Self> {
    match kube::Client::try_default().await {
      Ok(client) => Ok(Self { client }),
      Err(e) => {
        anyhow::bail!(
          "Unable to connect to cluster: {e}\n\n\
          Ensure a kubeconfig file is present and points to the cluster.\n\
          Try: oc login <api-url> or export KUBECONFIG=<path>"
        );
      }
    }
  }
}

impl OcpClients for RealOcpClients {
  async fn get_infrastructure(&self) -> Result<Infrastructure> {
    k8s::get_object(&self.client, &INFRASTRUCTURE_GVR, None, CLUSTER).await
  }

  async fn get_cluster_version(&self) -> Result<ClusterVersion> {
    k8s::get_object(&self.client, &CLUSTER_VERSION_GVR, None, CLUSTER_VERSION).await
  }

  async fn get_server_version(&self) -> Result<String> {
    k8s::get_server_version(&self.client).await
  }

  async fn get_nodes(&self, label_selector: Option<&str>) -> Result<Vec<Node>> {
    k8s::get_nodes(&self.client, label_selector).await
  }

  async fn get_network_config(&self) -> Result<NetworkConfig> {
    k8s::get_object(&self.client, &NETWORK_CONFIG_GVR, None, CLUSTER).await
  }

  async fn get_network_operator(&self) -> Result<NetworkOperator> {
    k8s::get_object(&self.client, &NETWORK_OPERATOR_GVR, None, CLUSTER).await
  }

  async fn get_install_config(&self) -> Result<InstallConfig> {
    k8s::get_install_config(&self.client).await
  }

  async fn get_route(&self, namespace: &str, name: &str) -> Result<Route> {
    k8s::get_object(&self.client, &ROUTE_GVR, Some(namespace), name).await
  }

  async fn get_ingress_controller(&self, namespace: &str, name: &str) -> Result<IngressController> {
    k8s::get_object(&self.client, &INGRESS_CONTROLLER_GVR, Some(namespace), name).await
  }

  async fn create_token(&self, namespace: &str, service_account: &str, expiration: Duration) -> Result<String> {
    k8s::create_token(&self.client, namespace, service_account, expiration).await
  }

  async fn count_running_pods(&self, node_name: &str) -> Result<usize> {
    k8s::count_running_pods(&self.client, node_name).await
  }

  async fn get_vmis(&self) -> Result<Vec<VirtualMachineInstance>> {
    k8s::get_vmis(&self.client).await
  }
}
