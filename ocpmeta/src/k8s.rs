use std::{collections::BTreeMap, time::Duration};

use anyhow::{Context, Result};
use k8s_openapi::api::{
  authentication::v1::{TokenRequest, TokenRequestSpec},
  core::{
    self,
    v1::{ConfigMap, Pod, ServiceAccount},
  },
};
use kube::{
  Client,
  api::{Api, DynamicObject, ListParams, PostParams},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
  constants::{self, INSTALL_CONFIG_CM, INSTALL_CONFIG_KEY, INSTALL_CONFIG_NS, ResourceDescriptor},
  types::{InstallConfig, VirtualMachineInstance},
};

/// Node details as viewed from the Kubernetes API
///
/// Only what is needed to classify the node and report its shape
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Node {
  pub name: String,
  pub labels: BTreeMap<String, String>,
  /// CPU architecture reported by the kubelet (`amd64`, `arm64`, ...)
  pub architecture: String,
}

impl From<core::v1::Node> for Node {
  fn from(node: core::v1::Node) -> Self {
    let architecture = node
      .status
      .and_then(|status| status.node_info)
      .map(|info| info.architecture)
      .unwrap_or_default();

    Node {
      name: node.metadata.name.unwrap_or_default(),
      labels: node.metadata.labels.unwrap_or_default(),
      architecture,
    }
  }
}

fn dynamic_api(client: &Client, descriptor: &ResourceDescriptor, namespace: Option<&str>) -> Api<DynamicObject> {
  let ar = descriptor.api_resource();
  match namespace {
    Some(ns) => Api::namespaced_with(client.clone(), ns, &ar),
    None => Api::all_with(client.clone(), &ar),
  }
}

/// Decode the payload (everything except `metadata`) of a dynamic object
pub(crate) fn decode<T: DeserializeOwned>(object: DynamicObject) -> Result<T> {
  let name = object.metadata.name.unwrap_or_default();
  serde_json::from_value(object.data).with_context(|| format!("Failed to decode object {name}"))
}

/// Get a single object through the dynamic API and decode it into `T`
///
/// Cluster scoped when `namespace` is `None`
pub async fn get_object<T: DeserializeOwned>(
  client: &Client,
  descriptor: &ResourceDescriptor,
  namespace: Option<&str>,
  name: &str,
) -> Result<T> {
  let api = dynamic_api(client, descriptor, namespace);
  let object = api
    .get(name)
    .await
    .with_context(|| format!("Unable to get {}/{name}", descriptor.resource))?;

  decode(object)
}

/// Returns the nodes in the cluster, optionally filtered by a label selector
pub async fn get_nodes(client: &Client, label_selector: Option<&str>) -> Result<Vec<Node>> {
  let api: Api<core::v1::Node> = Api::all(client.clone());
  let params = match label_selector {
    Some(selector) => ListParams::default().labels(selector),
    None => ListParams::default(),
  };
  let node_list = api.list(&params).await.context("Unable to list nodes")?;

  Ok(node_list.items.into_iter().map(Node::from).collect())
}

/// Git version of the API server, e.g. `v1.28.6+6216ea1`
pub async fn get_server_version(client: &Client) -> Result<String> {
  let info = client
    .apiserver_version()
    .await
    .context("Unable to get API server version")?;

  Ok(info.git_version)
}

/// Parse the installer configuration out of its ConfigMap
pub(crate) fn parse_install_config(configmap: &ConfigMap) -> Result<InstallConfig> {
  let raw = configmap
    .data
    .as_ref()
    .and_then(|data| data.get(INSTALL_CONFIG_KEY))
    .context(format!("ConfigMap {INSTALL_CONFIG_CM} has no {INSTALL_CONFIG_KEY} key"))?;

  serde_yaml::from_str(raw).context("Failed to parse install-config as YAML")
}

pub async fn get_install_config(client: &Client) -> Result<InstallConfig> {
  let api: Api<ConfigMap> = Api::namespaced(client.clone(), INSTALL_CONFIG_NS);
  let configmap = api
    .get(INSTALL_CONFIG_CM)
    .await
    .with_context(|| format!("Unable to get ConfigMap {INSTALL_CONFIG_NS}/{INSTALL_CONFIG_CM}"))?;

  parse_install_config(&configmap)
}

/// Request a bound token for a service account
pub async fn create_token(
  client: &Client,
  namespace: &str,
  service_account: &str,
  expiration: Duration,
) -> Result<String> {
  let api: Api<ServiceAccount> = Api::namespaced(client.clone(), namespace);
  let request = TokenRequest {
    spec: TokenRequestSpec {
      expiration_seconds: Some(expiration.as_secs() as i64),
      ..Default::default()
    },
    ..Default::default()
  };

  let response = api
    .create_token_request(service_account, &PostParams::default(), &request)
    .await
    .with_context(|| format!("Unable to create token for service account {namespace}/{service_account}"))?;

  let status = response.status.context("Token request returned no status")?;
  Ok(status.token)
}

/// Number of pods in the running phase scheduled on `node_name`
pub async fn count_running_pods(client: &Client, node_name: &str) -> Result<usize> {
  let api: Api<Pod> = Api::all(client.clone());
  let fields = format!("status.phase={},spec.nodeName={node_name}", constants::RUNNING);
  let pods = api
    .list_metadata(&ListParams::default().fields(&fields))
    .await
    .with_context(|| format!("Unable to list pods on node {node_name}"))?;

  Ok(pods.items.len())
}

/// Returns the VirtualMachineInstances in all namespaces
pub async fn get_vmis(client: &Client) -> Result<Vec<VirtualMachineInstance>> {
  let api = dynamic_api(client, &constants::VMI_GVR, None);
  let vmis = api
    .list(&ListParams::default())
    .await
    .context("Unable to list virtualmachineinstances")?;

  vmis.items.into_iter().map(decode).collect()
}
