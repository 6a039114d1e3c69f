use anyhow::{Context, Result};

use crate::types::{ClusterVersion, VersionInfo};

/// Given a version, return its `major.minor` prefix
///
/// For example, the OpenShift format of 4.15.0-rc.2 returns 4.15
/// Or the Kubernetes format of v1.28.6+6216ea1 returns v1.28
pub(crate) fn major_minor(version: &str) -> Result<String> {
  let mut parts = version.splitn(3, '.');
  let major = parts.next().unwrap_or_default();
  let minor = parts
    .next()
    .filter(|minor| !minor.is_empty())
    .context(format!("Invalid version format '{version}', expected 'X.Y[.Z]'"))?;

  Ok(format!("{major}.{minor}"))
}

/// Combine the ClusterVersion history with the API server version
///
/// A cluster that never completed an update (fresh install in progress)
/// reports empty OpenShift versions.
pub(crate) fn version_info(cluster_version: &ClusterVersion, k8s_git_version: &str) -> Result<VersionInfo> {
  let (ocp_version, ocp_major_version) = match cluster_version.latest_completed() {
    Some(version) => (version.to_owned(), major_minor(version)?),
    None => (String::new(), String::new()),
  };

  Ok(VersionInfo {
    ocp_version,
    ocp_major_version,
    k8s_version: k8s_git_version.to_owned(),
  })
}
