// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Version parsing and comparison helpers for OpenShift version strings
//!
//! Two comparison schemes live here. Registry tags are compared by their
//! ordinal encoding, a purely textual ordering that pads numeric runs so that
//! "v3.10" sorts after "v3.9". Release names are compared with semantic
//! versioning after the version prefix marker is removed.

use semver::Version;

use crate::error::{Result, VersionError};

/// Leading marker stripped from version strings before semantic parsing
pub const VERSION_PREFIX: &str = "v";

/// Substrings that mark a version string as a pre-release
const PRERELEASE_MARKERS: [&str; 3] = ["alpha", "beta", "rc"];

/// Strip the version prefix marker if present
///
/// # Examples
/// ```
/// use openshift_version::version::strip_version_prefix;
/// assert_eq!(strip_version_prefix("v3.6.1"), "3.6.1");
/// assert_eq!(strip_version_prefix("3.6.1"), "3.6.1");
/// ```
#[must_use]
pub fn strip_version_prefix(version: &str) -> &str {
    version.strip_prefix(VERSION_PREFIX).unwrap_or(version)
}

/// Extract the bare OpenShift version from `openshift version` output
///
/// The output looks like:
///
/// ```text
/// openshift v3.6.1+c4dd4cf
/// kubernetes v1.6.1+5115d708d7
/// etcd 3.2.1
/// ```
///
/// The second token of the first line has its build suffix and prefix marker
/// removed. The token itself is not checked to be a valid version.
///
/// # Errors
/// Returns [`VersionError::MalformedOutput`] if the first line has fewer than
/// two whitespace-separated tokens
///
/// # Examples
/// ```
/// use openshift_version::version::parse_bare_version;
/// let output = "openshift v3.6.1+c4dd4cf\nkubernetes v1.6.1+5115d708d7\netcd 3.2.1\n";
/// assert_eq!(parse_bare_version(output).unwrap(), "3.6.1");
/// ```
pub fn parse_bare_version(version_info: &str) -> Result<String> {
    let first_line = version_info.lines().next().unwrap_or_default();
    let with_commit = first_line
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| VersionError::MalformedOutput(first_line.to_string()))?;

    let without_commit = with_commit.split('+').next().unwrap_or(with_commit);
    Ok(strip_version_prefix(without_commit).trim().to_string())
}

/// Check whether a version string names a pre-release
///
/// Matching is a case-sensitive substring search for "alpha", "beta" or "rc".
#[must_use]
pub fn is_prerelease(version: &str) -> bool {
    PRERELEASE_MARKERS
        .iter()
        .any(|marker| version.contains(marker))
}

/// Check if `version` is greater than or equal to `base_version`
///
/// Both inputs may carry the version prefix marker. Ordering follows semantic
/// versioning precedence, so "3.7.0-alpha.0" is below "3.7.0" but above
/// "3.6.1".
///
/// # Errors
/// Returns [`VersionError::InvalidVersionFormat`] if either input is not a
/// semantic version
///
/// # Examples
/// ```
/// use openshift_version::version::is_greater_or_equal_to_base_version;
/// assert!(is_greater_or_equal_to_base_version("v3.6.1", "v3.5.0").unwrap());
/// assert!(!is_greater_or_equal_to_base_version("v3.5.0", "v3.6.1").unwrap());
/// assert!(is_greater_or_equal_to_base_version("notaversion", "v3.5.0").is_err());
/// ```
pub fn is_greater_or_equal_to_base_version(version: &str, base_version: &str) -> Result<bool> {
    let version = parse_semver(version)?;
    let at_least_base = at_least(base_version)?;
    Ok(at_least_base(&version))
}

/// Build a predicate matching every version at or above `base_version`
fn at_least(base_version: &str) -> Result<impl Fn(&Version) -> bool> {
    let base = parse_semver(base_version)?;
    Ok(move |version: &Version| *version >= base)
}

fn parse_semver(version: &str) -> Result<Version> {
    Version::parse(strip_version_prefix(version)).map_err(|source| {
        VersionError::InvalidVersionFormat {
            version: version.to_string(),
            source,
        }
    })
}

/// Encode a version string so that bytewise comparison orders numeric runs
/// by value
///
/// Each run of digits becomes a length byte followed by the digits with
/// leading zeros removed. All other bytes are copied unchanged.
///
/// # Errors
/// Returns [`VersionError::OrdinalOverflow`] for a digit run longer than 255
///
/// # Examples
/// ```
/// use openshift_version::version::version_ordinal;
/// assert!(version_ordinal("v3.10.0").unwrap() > version_ordinal("v3.9.0").unwrap());
/// assert_eq!(version_ordinal("v3.06").unwrap(), version_ordinal("v3.6").unwrap());
/// ```
pub fn version_ordinal(version: &str) -> Result<Vec<u8>> {
    let mut ordinal = Vec::with_capacity(version.len() + 8);
    // Index of the length byte of the digit run being encoded
    let mut run_start: Option<usize> = None;

    for byte in version.bytes() {
        if !byte.is_ascii_digit() {
            ordinal.push(byte);
            run_start = None;
            continue;
        }

        let start = match run_start {
            Some(start) => start,
            None => {
                ordinal.push(0);
                let start = ordinal.len() - 1;
                run_start = Some(start);
                start
            }
        };

        // A run that is just "0" so far gets replaced rather than extended
        if ordinal[start] == 1 && ordinal[start + 1] == b'0' {
            ordinal[start + 1] = byte;
            continue;
        }

        ordinal[start] = ordinal[start]
            .checked_add(1)
            .ok_or_else(|| VersionError::OrdinalOverflow(version.to_string()))?;
        ordinal.push(byte);
    }

    Ok(ordinal)
}
