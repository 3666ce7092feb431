use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};

use libmunitime::error::TimelineError;

use crate::cmd::RunCmd;

pub const NAME: &str = "files";
pub struct FilesCmd;

#[async_trait]
impl RunCmd for FilesCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("List the model files a commit changed")
            .arg(crate::cmd::repository_arg())
            .arg(
                Arg::new("commit")
                    .long("commit")
                    .short('c')
                    .help("The commit to inspect. Defaults to the newest commit.")
                    .action(clap::ArgAction::Set),
            )
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), TimelineError> {
        let session = crate::cmd::session_from_args(args).await?;
        let sha = match args.get_one::<String>("commit") {
            Some(sha) => sha.clone(),
            None => session.head_sha()?,
        };

        let files = session.changed_model_files(&sha).await?;
        if files.is_empty() {
            println!("No model files changed in {sha}");
            return Ok(());
        }
        for file in files {
            println!("{file}");
        }
        Ok(())
    }
}
