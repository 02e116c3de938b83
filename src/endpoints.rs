// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version catalog endpoints and release defaults
//!
//! The built-in URLs point at the public Red Hat registry and the GitHub API.
//! The command line can replace either one, or root both at a mirror.

/// Tag list of the OpenShift Container Platform image in the Red Hat registry
pub const REGISTRY_TAGS_URL: &str =
    "https://registry.access.redhat.com/v1/repositories/openshift3/ose/tags";

/// Release list of OpenShift Origin on GitHub
pub const ORIGIN_RELEASES_URL: &str = "https://api.github.com/repos/openshift/origin/releases";

/// Oldest OpenShift version that can be provisioned
pub const MIN_SUPPORTED_VERSION: &str = "v3.6.0";

/// OpenShift version provisioned when none is requested
pub const DEFAULT_VERSION: &str = "v3.9.0";

/// Locations of the two version catalogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub registry_tags_url: String,
    pub releases_url: String,
}

impl Endpoints {
    /// Endpoints rooted at a single base URL, as served by a local mirror
    ///
    /// # Examples
    /// ```
    /// use openshift_version::Endpoints;
    /// let endpoints = Endpoints::with_base_url("http://127.0.0.1:8080/");
    /// assert_eq!(endpoints.registry_tags_url, "http://127.0.0.1:8080/v1/repositories/openshift3/ose/tags");
    /// assert_eq!(endpoints.releases_url, "http://127.0.0.1:8080/repos/openshift/origin/releases");
    /// ```
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            registry_tags_url: format!("{base_url}/v1/repositories/openshift3/ose/tags"),
            releases_url: format!("{base_url}/repos/openshift/origin/releases"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            registry_tags_url: REGISTRY_TAGS_URL.to_string(),
            releases_url: ORIGIN_RELEASES_URL.to_string(),
        }
    }
}
