use std::time::Duration;

use kube::{
  api::ApiResource,
  core::{GroupVersionKind, GroupVersionResource},
};

/// Pod and VMI phase counted as active
pub const RUNNING: &str = "Running";

/// ClusterVersion history state of a finished update
pub const COMPLETED_UPDATE: &str = "Completed";

/// Label selector matching plain worker nodes (excludes infra and workload nodes)
pub const WORKER_NODE_SELECTOR: &str =
  "node-role.kubernetes.io/worker=,node-role.kubernetes.io/infra!=,node-role.kubernetes.io/workload!=";

/// Namespace hosting the cluster monitoring stack
pub const MONITORING_NS: &str = "openshift-monitoring";

/// Lifetime requested for service account tokens
pub const TOKEN_EXPIRATION: Duration = Duration::from_secs(10 * 60 * 60);

/// Name of both the Prometheus route and its service account
pub(crate) const PROMETHEUS: &str = "prometheus-k8s";

pub(crate) const INGRESS_OPERATOR_NS: &str = "openshift-ingress-operator";
pub(crate) const DEFAULT_INGRESS_CONTROLLER: &str = "default";

/// Name of the singleton config.openshift.io objects
pub(crate) const CLUSTER: &str = "cluster";
pub(crate) const CLUSTER_VERSION: &str = "version";

pub(crate) const INSTALL_CONFIG_NS: &str = "kube-system";
pub(crate) const INSTALL_CONFIG_CM: &str = "cluster-config-v1";
pub(crate) const INSTALL_CONFIG_KEY: &str = "install-config";

/// Static coordinates of a resource served by an aggregated/custom API group
///
/// The OpenShift and KubeVirt types are not part of `k8s-openapi`, so they are
/// accessed through `Api<DynamicObject>` built from one of these descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
  pub group: &'static str,
  pub version: &'static str,
  pub resource: &'static str,
  pub kind: &'static str,
}

impl ResourceDescriptor {
  pub fn gvr(&self) -> GroupVersionResource {
    GroupVersionResource::gvr(self.group, self.version, self.resource)
  }

  pub fn api_resource(&self) -> ApiResource {
    let gvk = GroupVersionKind::gvk(self.group, self.version, self.kind);
    ApiResource::from_gvk_with_plural(&gvk, self.resource)
  }
}

pub const ROUTE_GVR: ResourceDescriptor = ResourceDescriptor {
  group: "route.openshift.io",
  version: "v1",
  resource: "routes",
  kind: "Route",
};

pub const INGRESS_CONTROLLER_GVR: ResourceDescriptor = ResourceDescriptor {
  group: "operator.openshift.io",
  version: "v1",
  resource: "ingresscontrollers",
  kind: "IngressController",
};

pub const VMI_GVR: ResourceDescriptor = ResourceDescriptor {
  group: "kubevirt.io",
  version: "v1",
  resource: "virtualmachineinstances",
  kind: "VirtualMachineInstance",
};

pub const INFRASTRUCTURE_GVR: ResourceDescriptor = ResourceDescriptor {
  group: "config.openshift.io",
  version: "v1",
  resource: "infrastructures",
  kind: "Infrastructure",
};

pub const CLUSTER_VERSION_GVR: ResourceDescriptor = ResourceDescriptor {
  group: "config.openshift.io",
  version: "v1",
  resource: "clusterversions",
  kind: "ClusterVersion",
};

pub const NETWORK_CONFIG_GVR: ResourceDescriptor = ResourceDescriptor {
  group: "config.openshift.io",
  version: "v1",
  resource: "networks",
  kind: "Network",
};

pub const NETWORK_OPERATOR_GVR: ResourceDescriptor = ResourceDescriptor {
  group: "operator.openshift.io",
  version: "v1",
  resource: "networks",
  kind: "Network",
};
