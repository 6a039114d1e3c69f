use crate::{k8s::Node, types::ClusterMetadata};

const MASTER_LABEL: &str = "node-role.kubernetes.io/master";
const CONTROL_PLANE_LABEL: &str = "node-role.kubernetes.io/control-plane";
const INFRA_LABEL: &str = "node-role.kubernetes.io/infra";
const WORKLOAD_LABEL: &str = "node-role.kubernetes.io/workload";
const WORKER_LABEL: &str = "node-role.kubernetes.io/worker";

const INSTANCE_TYPE_LABEL: &str = "node.kubernetes.io/instance-type";
const BETA_INSTANCE_TYPE_LABEL: &str = "beta.kubernetes.io/instance-type";

/// Role a node is accounted under
///
/// A node carrying several role labels is counted once, under the first
/// matching role in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
  Master,
  Infra,
  Worker,
  Other,
}

impl NodeRole {
  pub fn of(node: &Node) -> Self {
    let has = |label: &str| node.labels.contains_key(label);

    if has(MASTER_LABEL) || has(CONTROL_PLANE_LABEL) {
      NodeRole::Master
    } else if has(INFRA_LABEL) {
      NodeRole::Infra
    } else if has(WORKER_LABEL) && !has(WORKLOAD_LABEL) {
      NodeRole::Worker
    } else {
      NodeRole::Other
    }
  }
}

fn instance_type(node: &Node) -> Option<String> {
  node
    .labels
    .get(INSTANCE_TYPE_LABEL)
    .or_else(|| node.labels.get(BETA_INSTANCE_TYPE_LABEL))
    .filter(|value| !value.is_empty())
    .cloned()
}

fn architecture(node: &Node) -> Option<String> {
  Some(node.architecture.clone()).filter(|arch| !arch.is_empty())
}

/// Fill the node counts, instance types and architectures of `metadata`
///
/// Instance type and architecture are taken from the first node seen for the
/// role; heterogeneous pools are not reported.
pub fn summarize(nodes: &[Node], metadata: &mut ClusterMetadata) {
  let (mut masters, mut infras, mut workers, mut others) = (0u32, 0u32, 0u32, 0u32);

  for node in nodes {
    match NodeRole::of(node) {
      NodeRole::Master => {
        masters += 1;
        metadata.master_nodes_type = metadata.master_nodes_type.take().or_else(|| instance_type(node));
        metadata.control_plane_arch = metadata.control_plane_arch.take().or_else(|| architecture(node));
      }
      NodeRole::Infra => {
        infras += 1;
        metadata.infra_nodes_type = metadata.infra_nodes_type.take().or_else(|| instance_type(node));
      }
      NodeRole::Worker => {
        workers += 1;
        metadata.worker_nodes_type = metadata.worker_nodes_type.take().or_else(|| instance_type(node));
        metadata.worker_arch = metadata.worker_arch.take().or_else(|| architecture(node));
      }
      NodeRole::Other => others += 1,
    }
  }

  metadata.master_nodes_count = Some(masters);
  metadata.infra_nodes_count = Some(infras);
  metadata.worker_nodes_count = Some(workers);
  metadata.other_nodes_count = Some(others);
  metadata.total_nodes = Some(nodes.len() as u32);
}
