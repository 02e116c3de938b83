// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error type shared by every version resolver operation

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, VersionError>;

#[derive(Debug, Error)]
pub enum VersionError {
    /// The remote command could not be run or exited with a failure
    #[error("Failed to execute '{command}': {message}")]
    Execution { command: String, message: String },

    /// The remote command succeeded but its output has an unexpected layout
    #[error("Unexpected output from 'openshift version': {0:?}")]
    MalformedOutput(String),

    #[error("Failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: attohttpc::Error,
    },

    #[error("Failed to fetch {url}: server returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid version format '{version}': {source}")]
    InvalidVersionFormat {
        version: String,
        #[source]
        source: semver::Error,
    },

    /// A version has no ordinal encoding (a digit run longer than 255 digits)
    #[error("Invalid version format '{0}': numeric component too long")]
    OrdinalOverflow(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
