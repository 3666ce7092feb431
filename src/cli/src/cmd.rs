use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};

use libmunitime::config::RemoteConfig;
use libmunitime::error::TimelineError;
use libmunitime::model::RepoReference;
use libmunitime::session::Session;

pub mod diff;
pub use diff::DiffCmd;

pub mod files;
pub use files::FilesCmd;

pub mod log;
pub use log::LogCmd;

#[async_trait]
pub trait RunCmd {
    fn name(&self) -> &str;
    fn args(&self) -> Command;
    async fn run(&self, args: &ArgMatches) -> Result<(), TimelineError>;
}

pub fn repository_arg() -> Arg {
    Arg::new("repository")
        .help("URL of the repository to inspect, e.g. https://github.com/acme/shapes")
        .required(true)
        .action(clap::ArgAction::Set)
}

/// Opens a session for the repository URL given on the command line,
/// honoring the shared `--local` flag for the diff deployment.
pub async fn session_from_args(args: &ArgMatches) -> Result<Session, TimelineError> {
    let raw = args
        .get_one::<String>("repository")
        .expect("Must supply repository URL");
    let reference = RepoReference::parse(raw)?;

    let mut config = RemoteConfig::from_env();
    // only the diff command defines --local
    let local = args
        .try_get_one::<bool>("local")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);
    if local {
        config = config.with_local_diff();
    }

    Session::open(config, reference).await
}

pub fn local_diff_arg() -> Arg {
    Arg::new("local")
        .long("local")
        .help("Send diff requests to the local diff service deployment")
        .action(clap::ArgAction::SetTrue)
}
