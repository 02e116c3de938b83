// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Blocking HTTP access to the version catalogs

use std::io::Read;

use log::{debug, warn};

use crate::error::{Result, VersionError};

/// Fetches the body of a URL as a reader
///
/// The returned reader owns the response. Dropping it releases the
/// underlying connection, which happens on every path out of the decoders.
pub trait HttpFetcher {
    /// Issue a GET request and hand back the response body
    ///
    /// # Errors
    /// Returns [`VersionError::Network`] on transport failure and
    /// [`VersionError::Status`] on a non-success status code
    fn get(&self, url: &str) -> Result<Box<dyn Read>>;
}

/// [`HttpFetcher`] backed by `attohttpc`
#[derive(Debug, Clone)]
pub struct AttoFetcher {
    user_agent: String,
}

impl AttoFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_agent: format!("osver/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for AttoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher for AttoFetcher {
    fn get(&self, url: &str) -> Result<Box<dyn Read>> {
        debug!("GET {url}");

        let network_error = |source| VersionError::Network {
            url: url.to_string(),
            source,
        };

        // GitHub rejects API requests without a User-Agent
        let resp = attohttpc::get(url)
            .try_header(attohttpc::header::USER_AGENT, self.user_agent.as_str())
            .map_err(network_error)?
            .try_header(attohttpc::header::ACCEPT, "application/json")
            .map_err(network_error)?
            .send()
            .map_err(network_error)?;

        let (status, _headers, body) = resp.split();
        if !status.is_success() {
            warn!("{url} returned status {status}");
            return Err(VersionError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(Box::new(body))
    }
}
