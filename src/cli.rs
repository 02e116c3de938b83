// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
// CLI argument definitions for osver
//
// Separated from main.rs so that build.rs can include this file
// to generate the man page via clap_mangen.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "osver",
    version,
    about = "Resolve, list and compare OpenShift versions"
)]
pub struct Cli {
    /// Make the operation more talkative
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List OpenShift versions available for provisioning
    List(ListArgs),

    /// Print the OpenShift version running on a cluster host
    Cluster(ClusterArgs),

    /// Check whether VERSION is greater than or equal to BASE
    Compare {
        /// Version to check (e.g. v3.6.1)
        #[arg(value_name = "VERSION")]
        version: String,

        /// Version to compare against (e.g. v3.5.0)
        #[arg(value_name = "BASE")]
        base: String,
    },
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// List downstream versions from the Red Hat registry instead of Origin releases
    #[arg(short, long)]
    pub registry: bool,

    /// Oldest version to include (defaults to the oldest supported release)
    #[arg(long = "min", value_name = "VERSION")]
    pub min_supported_version: Option<String>,

    /// Pre-releases older than this version are hidden (upstream only)
    #[arg(long = "default", value_name = "VERSION")]
    pub default_version: Option<String>,

    /// Serve both catalogs from this base URL
    #[arg(long, value_name = "URL", env = "OSVER_MIRROR_URL")]
    pub mirror: Option<String>,

    /// Registry tag list URL
    #[arg(long, value_name = "URL", env = "OSVER_REGISTRY_TAGS_URL")]
    pub registry_tags_url: Option<String>,

    /// GitHub release list URL
    #[arg(long, value_name = "URL", env = "OSVER_RELEASES_URL")]
    pub releases_url: Option<String>,
}

#[derive(clap::Args)]
pub struct ClusterArgs {
    /// Host running the OpenShift container
    #[arg(long, value_name = "HOST")]
    pub host: String,

    /// SSH user
    #[arg(short, long, value_name = "USER")]
    pub user: Option<String>,

    /// SSH port
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// SSH private key
    #[arg(short, long, value_name = "FILE")]
    pub identity: Option<PathBuf>,

    /// Print the full `openshift version` output
    #[arg(long)]
    pub raw: bool,
}
