// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Listing of installable OpenShift versions
//!
//! Downstream versions come from the tag list of the Red Hat container
//! registry, upstream versions from the OpenShift Origin GitHub releases.
//! Both lists are filtered against the minimum supported version and printed
//! in plain lexical order of the version strings.

use std::collections::HashMap;
use std::io::Write;

use log::debug;
use serde::Deserialize;

use crate::endpoints::Endpoints;
use crate::error::{Result, VersionError};
use crate::http::HttpFetcher;
use crate::version::{is_greater_or_equal_to_base_version, is_prerelease, version_ordinal};

/// Header line preceding every version listing
pub const VERSIONS_HEADER: &str = "The following OpenShift versions are available:";

/// A single entry of the GitHub release list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseTag {
    pub name: String,
}

/// Fetch the tag map of the OpenShift image from the container registry
///
/// # Errors
/// Returns a network, status or decode error
pub fn fetch_registry_tags<F: HttpFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
) -> Result<HashMap<String, String>> {
    let body = fetcher.get(url)?;
    serde_json::from_reader(body).map_err(|source| VersionError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Fetch the release list of OpenShift Origin from GitHub
///
/// # Errors
/// Returns a network, status or decode error
pub fn fetch_releases<F: HttpFetcher + ?Sized>(fetcher: &F, url: &str) -> Result<Vec<ReleaseTag>> {
    let body = fetcher.get(url)?;
    serde_json::from_reader(body).map_err(|source| VersionError::Decode {
        url: url.to_string(),
        source,
    })
}

/// Select registry tags at or above `min_supported_version`
///
/// Tags are compared by their ordinal encoding. Tags containing "latest" or
/// a hyphen are never selected. The result is sorted lexically.
///
/// # Errors
/// Returns an error if `min_supported_version` has no ordinal encoding
pub fn select_downstream_versions<'a, I>(tags: I, min_supported_version: &str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'a String>,
{
    let min_ordinal = version_ordinal(min_supported_version)?;

    let mut selected: Vec<String> = tags
        .into_iter()
        .filter(|tag| !tag.contains("latest") && !tag.contains('-'))
        .filter(|tag| match version_ordinal(tag) {
            Ok(ordinal) => ordinal >= min_ordinal,
            Err(e) => {
                debug!("Skipping registry tag {tag}: {e}");
                false
            }
        })
        .cloned()
        .collect();

    selected.sort();
    Ok(selected)
}

/// Select release names worth offering to the user
///
/// A release is selected when it does not contain "latest", parses as a
/// semantic version at or above `min_supported_version`, and is either at or
/// above `default_version` or not a pre-release. Releases whose name cannot
/// be compared are dropped. The result is sorted lexically.
#[must_use]
pub fn select_upstream_versions(
    releases: &[ReleaseTag],
    min_supported_version: &str,
    default_version: &str,
) -> Vec<String> {
    let mut selected: Vec<String> = releases
        .iter()
        .map(|release| release.name.as_str())
        .filter(|name| !name.contains("latest"))
        .filter(|name| {
            compares_at_least(name, min_supported_version)
                && (compares_at_least(name, default_version) || !is_prerelease(name))
        })
        .map(str::to_string)
        .collect();

    selected.sort();
    selected
}

fn compares_at_least(name: &str, base_version: &str) -> bool {
    match is_greater_or_equal_to_base_version(name, base_version) {
        Ok(at_least) => at_least,
        Err(e) => {
            debug!("Dropping release {name}: {e}");
            false
        }
    }
}

/// Write the version header followed by one `\t- <version>` line per entry
///
/// # Errors
/// Returns [`VersionError::Io`] if the output cannot be written
pub fn write_versions<W: Write + ?Sized>(output: &mut W, versions: &[String]) -> Result<()> {
    writeln!(output, "{VERSIONS_HEADER}")?;
    for version in versions {
        writeln!(output, "\t- {version}")?;
    }
    Ok(())
}

/// Print the downstream OpenShift versions published in the container registry
///
/// # Errors
/// Returns a network, status or decode error from the fetch, or an I/O error
/// from writing the listing
pub fn print_downstream_versions<F, W>(
    fetcher: &F,
    endpoints: &Endpoints,
    output: &mut W,
    min_supported_version: &str,
) -> Result<()>
where
    F: HttpFetcher + ?Sized,
    W: Write + ?Sized,
{
    let tags = fetch_registry_tags(fetcher, &endpoints.registry_tags_url)?;
    debug!("Registry returned {} tags", tags.len());
    let versions = select_downstream_versions(tags.keys(), min_supported_version)?;
    write_versions(output, &versions)
}

/// Print the upstream OpenShift Origin versions released on GitHub
///
/// # Errors
/// Returns a network, status or decode error from the fetch, or an I/O error
/// from writing the listing
pub fn print_upstream_versions<F, W>(
    fetcher: &F,
    endpoints: &Endpoints,
    output: &mut W,
    min_supported_version: &str,
    default_version: &str,
) -> Result<()>
where
    F: HttpFetcher + ?Sized,
    W: Write + ?Sized,
{
    let releases = fetch_releases(fetcher, &endpoints.releases_url)?;
    debug!("GitHub returned {} releases", releases.len());
    let versions = select_upstream_versions(&releases, min_supported_version, default_version);
    write_versions(output, &versions)
}
