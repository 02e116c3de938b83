// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! osver - OpenShift version resolver
//!
//! Entry point for the `osver` CLI, which can:
//! - List OpenShift versions available from the Red Hat registry or Origin releases
//! - Read the OpenShift version running on a cluster host over SSH
//! - Compare two OpenShift versions

use std::io;
use std::process::exit;

use clap::Parser;
use log::debug;

use openshift_version::{
    AttoFetcher, DEFAULT_VERSION, Endpoints, MIN_SUPPORTED_VERSION, Result, SystemSsh,
    get_openshift_version, get_openshift_version_without_k8s_and_etcd,
    is_greater_or_equal_to_base_version, print_downstream_versions, print_upstream_versions,
};

mod cli;

use cli::{Cli, ClusterArgs, Command, ListArgs};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    debug!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Command::List(args) => cmd_list(args),
        Command::Cluster(args) => cmd_cluster(args),
        Command::Compare { version, base } => cmd_compare(&version, &base),
    };

    if let Err(e) = result {
        eprintln!("osver: {e}");
        exit(1);
    }
}

/// Log to stderr; `--verbose` enables debug output unless `RUST_LOG` says otherwise
fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let default_filter = format!("openshift_version={level},osver={level}");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Print the versions available from the registry or from Origin releases
fn cmd_list(args: ListArgs) -> Result<()> {
    let endpoints = resolve_endpoints(&args);
    let min_supported_version = args
        .min_supported_version
        .as_deref()
        .unwrap_or(MIN_SUPPORTED_VERSION);
    let default_version = args.default_version.as_deref().unwrap_or(DEFAULT_VERSION);

    let fetcher = AttoFetcher::new();
    let mut stdout = io::stdout().lock();

    if args.registry {
        print_downstream_versions(&fetcher, &endpoints, &mut stdout, min_supported_version)
    } else {
        print_upstream_versions(
            &fetcher,
            &endpoints,
            &mut stdout,
            min_supported_version,
            default_version,
        )
    }
}

/// Individual URL flags win over `--mirror`, which wins over the public URLs
fn resolve_endpoints(args: &ListArgs) -> Endpoints {
    let mut endpoints = match &args.mirror {
        Some(mirror) => Endpoints::with_base_url(mirror),
        None => Endpoints::default(),
    };
    if let Some(url) = &args.registry_tags_url {
        endpoints.registry_tags_url.clone_from(url);
    }
    if let Some(url) = &args.releases_url {
        endpoints.releases_url.clone_from(url);
    }
    debug!("Using endpoints {endpoints:?}");
    endpoints
}

/// Print the OpenShift version running on the given host
fn cmd_cluster(args: ClusterArgs) -> Result<()> {
    let ssh = SystemSsh {
        host: args.host,
        user: args.user,
        port: args.port,
        identity_file: args.identity,
    };

    if args.raw {
        print!("{}", get_openshift_version(&ssh)?);
    } else {
        println!("{}", get_openshift_version_without_k8s_and_etcd(&ssh)?);
    }
    Ok(())
}

fn cmd_compare(version: &str, base: &str) -> Result<()> {
    println!("{}", is_greater_or_equal_to_base_version(version, base)?);
    Ok(())
}
