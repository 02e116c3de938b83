// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Remote command execution against the cluster host
//!
//! The OpenShift server runs as a container on the remote host. Its version
//! is read by running `openshift version` inside that container through
//! `docker exec`, which in turn is sent over SSH.

use std::path::PathBuf;
use std::process::Command;

use log::debug;
#[cfg(test)]
use mockall::automock;

use crate::error::{Result, VersionError};
use crate::version::parse_bare_version;

/// Name of the container running the OpenShift server
pub const OPENSHIFT_CONTAINER_NAME: &str = "origin";

/// Runs a shell command on the remote host and returns its standard output
#[cfg_attr(test, automock)]
pub trait SshCommander {
    /// # Errors
    /// Returns [`VersionError::Execution`] if the command cannot be started
    /// or exits unsuccessfully
    fn ssh(&self, command: &str) -> Result<String>;
}

/// [`SshCommander`] that shells out to the system `ssh` client
#[derive(Debug, Clone)]
pub struct SystemSsh {
    pub host: String,
    pub user: Option<String>,
    pub port: Option<u16>,
    pub identity_file: Option<PathBuf>,
}

impl SystemSsh {
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: None,
            port: None,
            identity_file: None,
        }
    }

    fn destination(&self) -> String {
        match &self.user {
            Some(user) => format!("{user}@{}", self.host),
            None => self.host.clone(),
        }
    }

    fn build_args(&self, command: &str) -> Vec<String> {
        // Never prompt: a password prompt would hang a non-interactive run
        let mut args = vec!["-o".to_string(), "BatchMode=yes".to_string()];
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        if let Some(identity) = &self.identity_file {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        args.push(self.destination());
        args.push(command.to_string());
        args
    }
}

impl SshCommander for SystemSsh {
    fn ssh(&self, command: &str) -> Result<String> {
        debug!("Running on {}: {command}", self.destination());

        let output = Command::new("ssh")
            .args(self.build_args(command))
            .output()
            .map_err(|e| VersionError::Execution {
                command: command.to_string(),
                message: format!("failed to run 'ssh': {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VersionError::Execution {
                command: command.to_string(),
                message: format!("{} {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Runs `docker` commands on the remote host through an [`SshCommander`]
pub struct DockerCommander<'a, S: SshCommander + ?Sized> {
    commander: &'a S,
}

impl<'a, S: SshCommander + ?Sized> DockerCommander<'a, S> {
    pub fn new(commander: &'a S) -> Self {
        Self { commander }
    }

    /// Run `docker exec <options> <container> <command> <args...>`
    ///
    /// # Errors
    /// Propagates the [`VersionError::Execution`] of the underlying commander
    pub fn exec(&self, options: &str, container: &str, command: &str, args: &str) -> Result<String> {
        let cmd = format!("docker exec {options} {container} {command} {args}");
        self.commander.ssh(&cmd)
    }
}

/// Get the raw `openshift version` output from the OpenShift container
///
/// The output lists the OpenShift, Kubernetes and etcd versions, one per line.
///
/// # Errors
/// Returns [`VersionError::Execution`] if the remote command fails
pub fn get_openshift_version<S: SshCommander + ?Sized>(commander: &S) -> Result<String> {
    DockerCommander::new(commander).exec(" ", OPENSHIFT_CONTAINER_NAME, "openshift", "version")
}

/// Get the bare OpenShift version (e.g. "3.6.1") of the running cluster
///
/// # Errors
/// Returns [`VersionError::Execution`] if the remote command fails and
/// [`VersionError::MalformedOutput`] if the output has no version token
pub fn get_openshift_version_without_k8s_and_etcd<S: SshCommander + ?Sized>(
    commander: &S,
) -> Result<String> {
    let version_info = get_openshift_version(commander)?;
    parse_bare_version(&version_info)
}
