// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! OpenShift Version Resolver Library
//!
//! This library resolves and compares OpenShift versions for cluster
//! provisioning: it reads the version running on a cluster host, lists the
//! versions published in the Red Hat registry and in the OpenShift Origin
//! releases, and filters them against the supported range.

pub mod catalog;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod remote;
pub mod version;

// Re-export commonly used items at the crate root for convenience
pub use catalog::{
    ReleaseTag, VERSIONS_HEADER, print_downstream_versions, print_upstream_versions,
    select_downstream_versions, select_upstream_versions,
};
pub use endpoints::{DEFAULT_VERSION, Endpoints, MIN_SUPPORTED_VERSION};
pub use error::{Result, VersionError};
pub use http::{AttoFetcher, HttpFetcher};
pub use remote::{
    DockerCommander, SshCommander, SystemSsh, get_openshift_version,
    get_openshift_version_without_k8s_and_etcd,
};
pub use version::{
    is_greater_or_equal_to_base_version, is_prerelease, parse_bare_version, strip_version_prefix,
    version_ordinal,
};
