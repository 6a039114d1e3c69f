use serde::{Deserialize, Serialize};

use crate::constants::COMPLETED_UPDATE;

/// Resource tag set on ROSA clusters, its value is reported as the cluster type
const CLUSTER_TYPE_TAG: &str = "red-hat-clustertype";

/// Subset of the `config.openshift.io/v1` Infrastructure object
///
/// Region and resource tags are only populated on AWS; other platforms leave
/// them empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Infrastructure {
  pub status: InfrastructureStatus,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InfrastructureStatus {
  pub infrastructure_name: String,
  pub platform: String,
  #[serde(rename = "type")]
  pub type_: String,
  pub platform_status: PlatformStatus,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PlatformStatus {
  pub aws: AwsPlatformStatus,
  #[serde(rename = "type")]
  pub type_: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AwsPlatformStatus {
  pub region: String,
  pub resource_tags: Vec<ResourceTag>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ResourceTag {
  pub key: String,
  pub value: String,
}

impl Infrastructure {
  /// The ROSA cluster type tag when present, otherwise the platform type
  pub fn cluster_type(&self) -> &str {
    let status = &self.status.platform_status;
    status
      .aws
      .resource_tags
      .iter()
      .find(|tag| tag.key == CLUSTER_TYPE_TAG)
      .map(|tag| tag.value.as_str())
      .unwrap_or(&status.type_)
  }
}

/// Subset of the `config.openshift.io/v1` ClusterVersion object
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ClusterVersion {
  pub status: ClusterVersionStatus,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ClusterVersionStatus {
  pub history: Vec<UpdateHistory>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpdateHistory {
  pub state: String,
  pub version: String,
}

impl ClusterVersion {
  /// Version of the most recent completed update
  ///
  /// History is ordered newest first, so partial updates in progress are
  /// skipped until the last one that finished.
  pub fn latest_completed(&self) -> Option<&str> {
    self
      .status
      .history
      .iter()
      .find(|entry| entry.state == COMPLETED_UPDATE)
      .map(|entry| entry.version.as_str())
  }
}

/// Subset of the `config.openshift.io/v1` Network object
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
  pub status: NetworkConfigStatus,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkConfigStatus {
  pub network_type: String,
}

/// Subset of the `operator.openshift.io/v1` Network object
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct NetworkOperator {
  pub spec: NetworkOperatorSpec,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct NetworkOperatorSpec {
  pub default_network: DefaultNetwork,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultNetwork {
  pub ovn_kubernetes_config: OvnKubernetesConfig,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OvnKubernetesConfig {
  /// `None` when IPsec was never configured
  pub ipsec_config: Option<IpsecConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct IpsecConfig {
  pub mode: String,
}

impl NetworkOperator {
  /// Returns whether IPsec is enabled along with its mode
  ///
  /// Clusters older than 4.15 express IPsec as an empty `ipsecConfig: {}`,
  /// which means full encryption.
  pub fn ipsec(&self) -> (bool, String) {
    match &self.spec.default_network.ovn_kubernetes_config.ipsec_config {
      None => (false, String::new()),
      Some(config) if config.mode.is_empty() => (true, "Full".to_string()),
      Some(config) => (config.mode != "Disabled", config.mode.clone()),
    }
  }
}

/// Subset of the installer configuration stored in `kube-system/cluster-config-v1`
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InstallConfig {
  pub fips: bool,
  pub publish: String,
}

/// Subset of the `route.openshift.io/v1` Route object
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Route {
  pub spec: RouteSpec,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouteSpec {
  pub host: String,
}

/// Subset of the `operator.openshift.io/v1` IngressController object
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct IngressController {
  pub status: IngressControllerStatus,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct IngressControllerStatus {
  pub domain: String,
}

/// Subset of the `kubevirt.io/v1` VirtualMachineInstance object
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct VirtualMachineInstance {
  pub status: VirtualMachineInstanceStatus,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct VirtualMachineInstanceStatus {
  pub phase: String,
}

/// OpenShift and Kubernetes versions of the cluster
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionInfo {
  pub ocp_version: String,
  pub ocp_major_version: String,
  pub k8s_version: String,
}

/// Flat record of cluster-wide facts
///
/// Each field is independently optional. Unknown fields as well as empty
/// strings, zero counts and `false` flags are omitted when serialized.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterMetadata {
  #[serde(skip_serializing_if = "is_unset")]
  pub metric_name: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub platform: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub cluster_type: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub ocp_version: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub ocp_major_version: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub k8s_version: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub master_nodes_type: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub worker_nodes_type: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub master_nodes_count: Option<u32>,
  #[serde(skip_serializing_if = "is_unset")]
  pub infra_nodes_type: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub worker_nodes_count: Option<u32>,
  #[serde(skip_serializing_if = "is_unset")]
  pub infra_nodes_count: Option<u32>,
  #[serde(skip_serializing_if = "is_unset")]
  pub other_nodes_count: Option<u32>,
  #[serde(skip_serializing_if = "is_unset")]
  pub total_nodes: Option<u32>,
  #[serde(skip_serializing_if = "is_unset")]
  pub sdn_type: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub cluster_name: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub region: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub fips: Option<bool>,
  #[serde(skip_serializing_if = "is_unset")]
  pub publish: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub worker_arch: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub control_plane_arch: Option<String>,
  #[serde(skip_serializing_if = "is_unset")]
  pub ipsec: Option<bool>,
  #[serde(skip_serializing_if = "is_unset")]
  pub ipsec_mode: Option<String>,
}

fn is_unset<T: Default + PartialEq>(value: &Option<T>) -> bool {
  value.as_ref().is_none_or(|v| *v == T::default())
}

/// Maps an empty string to `None`
pub(crate) fn non_empty(value: impl Into<String>) -> Option<String> {
  let value = value.into();
  if value.is_empty() { None } else { Some(value) }
}
