use std::collections::{BTreeMap, HashMap};

use ocpmeta::k8s::Node;
use ocpmeta::types::{
  ClusterVersion, Infrastructure, IngressController, InstallConfig, NetworkConfig, NetworkOperator, ResourceTag,
  Route, UpdateHistory, VirtualMachineInstance,
};

use super::mock_ocp::MockOcpClients;

pub const MASTER: &str = "node-role.kubernetes.io/master";
pub const CONTROL_PLANE: &str = "node-role.kubernetes.io/control-plane";
pub const WORKER: &str = "node-role.kubernetes.io/worker";
pub const INFRA: &str = "node-role.kubernetes.io/infra";
pub const WORKLOAD: &str = "node-role.kubernetes.io/workload";

/// Creates a Node with the given role labels, instance type and architecture
pub fn make_node(name: &str, roles: &[&str], instance_type: &str, arch: &str) -> Node {
  let mut labels: BTreeMap<String, String> = roles.iter().map(|role| (role.to_string(), String::new())).collect();
  labels.insert("node.kubernetes.io/instance-type".into(), instance_type.into());
  labels.insert("kubernetes.io/hostname".into(), name.into());

  Node {
    name: name.into(),
    labels,
    architecture: arch.into(),
  }
}

/// Creates a ClusterVersion from `(state, version)` history entries, newest first
pub fn make_cluster_version(history: &[(&str, &str)]) -> ClusterVersion {
  let mut cv = ClusterVersion::default();
  cv.status.history = history
    .iter()
    .map(|(state, version)| UpdateHistory {
      state: state.to_string(),
      version: version.to_string(),
    })
    .collect();
  cv
}

pub fn make_network(network_type: &str) -> NetworkConfig {
  let mut network = NetworkConfig::default();
  network.status.network_type = network_type.into();
  network
}

pub fn make_vmi(phase: &str) -> VirtualMachineInstance {
  let mut vmi = VirtualMachineInstance::default();
  vmi.status.phase = phase.into();
  vmi
}

/// Builds a healthy ROSA cluster on 4.15 with 3 masters, 1 infra and 2 workers
pub fn healthy_rosa() -> MockOcpClients {
  let mut infrastructure = Infrastructure::default();
  infrastructure.status.infrastructure_name = "perf-rosa-x7k2p".into();
  infrastructure.status.platform = "AWS".into();
  infrastructure.status.platform_status.type_ = "AWS".into();
  infrastructure.status.platform_status.aws.region = "us-west-2".into();
  infrastructure.status.platform_status.aws.resource_tags = vec![
    ResourceTag { key: "red-hat-managed".into(), value: "true".into() },
    ResourceTag { key: "red-hat-clustertype".into(), value: "rosa".into() },
  ];

  let mut route = Route::default();
  route.spec.host = "prometheus-k8s-openshift-monitoring.apps.perf-rosa.example.com".into();

  let mut ingress = IngressController::default();
  ingress.status.domain = "apps.perf-rosa.example.com".into();

  MockOcpClients {
    infrastructure,
    cluster_version: make_cluster_version(&[("Completed", "4.15.2"), ("Completed", "4.14.10")]),
    server_version: "v1.28.6+6216ea1".into(),
    nodes: vec![
      make_node("master-0", &[MASTER, CONTROL_PLANE], "m6a.xlarge", "amd64"),
      make_node("master-1", &[MASTER, CONTROL_PLANE], "m6a.xlarge", "amd64"),
      make_node("master-2", &[MASTER, CONTROL_PLANE], "m6a.xlarge", "amd64"),
      make_node("infra-0", &[INFRA, WORKER], "r5.2xlarge", "amd64"),
      make_node("worker-0", &[WORKER], "m6a.2xlarge", "amd64"),
      make_node("worker-1", &[WORKER], "m6a.2xlarge", "amd64"),
    ],
    network_config: Some(make_network("OVNKubernetes")),
    network_operator: Some(NetworkOperator::default()),
    install_config: Some(InstallConfig {
      fips: false,
      publish: "External".into(),
    }),
    routes: HashMap::from([(("openshift-monitoring".into(), "prometheus-k8s".into()), route)]),
    ingress_controllers: HashMap::from([(("openshift-ingress-operator".into(), "default".into()), ingress)]),
    running_pods: HashMap::from([
      ("master-0".into(), 40),
      ("infra-0".into(), 25),
      ("worker-0".into(), 12),
      ("worker-1".into(), 9),
    ]),
    vmis: vec![],
  }
}

/// Builds a self-managed GCP cluster with FIPS, IPsec and arm64 workers
pub fn gcp_fips_ipsec() -> MockOcpClients {
  let mut infrastructure = Infrastructure::default();
  infrastructure.status.infrastructure_name = "perf-gcp-9qz4m".into();
  infrastructure.status.platform = "GCP".into();
  infrastructure.status.platform_status.type_ = "GCP".into();

  let network_operator: NetworkOperator = serde_json::from_value(serde_json::json!({
    "spec": { "defaultNetwork": { "ovnKubernetesConfig": { "ipsecConfig": {} } } }
  }))
  .unwrap();

  MockOcpClients {
    infrastructure,
    cluster_version: make_cluster_version(&[("Completed", "4.16.0")]),
    server_version: "v1.29.5+58452e3".into(),
    nodes: vec![
      make_node("master-0", &[MASTER], "n2-standard-4", "amd64"),
      make_node("master-1", &[MASTER], "n2-standard-4", "amd64"),
      make_node("master-2", &[MASTER], "n2-standard-4", "amd64"),
      make_node("worker-a", &[WORKER], "t2a-standard-4", "arm64"),
      make_node("worker-b", &[WORKER], "t2a-standard-4", "arm64"),
      make_node("worker-c", &[WORKER], "t2a-standard-4", "arm64"),
      make_node("workload-0", &[WORKLOAD, WORKER], "n2-highmem-8", "amd64"),
    ],
    network_config: Some(make_network("OVNKubernetes")),
    network_operator: Some(network_operator),
    install_config: Some(InstallConfig {
      fips: true,
      publish: "External".into(),
    }),
    ..Default::default()
  }
}
