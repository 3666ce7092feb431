use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;

use libmunitime::error::TimelineError;

use crate::cmd::RunCmd;

pub const NAME: &str = "diff";
pub struct DiffCmd;

#[async_trait]
impl RunCmd for DiffCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("Request model diffs for the files a commit changed")
            .arg(crate::cmd::repository_arg())
            .arg(
                Arg::new("commit")
                    .long("commit")
                    .short('c')
                    .help("The commit to diff against its first parent. Defaults to the newest commit.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("file")
                    .long("file")
                    .short('f')
                    .help("Diff only this file. Defaults to every changed model file.")
                    .action(clap::ArgAction::Set),
            )
            .arg(
                Arg::new("graphical")
                    .long("graphical")
                    .help("Also print the graphical munidiff markup")
                    .action(clap::ArgAction::SetTrue),
            )
            .arg(crate::cmd::local_diff_arg())
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), TimelineError> {
        let session = crate::cmd::session_from_args(args).await?;
        let sha = match args.get_one::<String>("commit") {
            Some(sha) => sha.clone(),
            None => session.head_sha()?,
        };

        let files = match args.get_one::<String>("file") {
            Some(file) => vec![file.clone()],
            None => session.changed_model_files(&sha).await?,
        };
        if files.is_empty() {
            println!("No model files changed in {sha}");
            return Ok(());
        }

        for file in files {
            let Some(result) = session.assemble_and_dispatch(&file, &sha).await? else {
                log::debug!("{file} at {sha} already diffed this session");
                continue;
            };

            println!("{}", format!("=== {file} @ {sha}").bold());
            for line in result.textual_diff.lines() {
                if line.starts_with('+') {
                    println!("{}", line.green());
                } else if line.starts_with('-') {
                    println!("{}", line.red());
                } else {
                    println!("{line}");
                }
            }
            println!("\n{}", "munidiff:".bold());
            println!("{}", result.structured_textual_diff);
            if args.get_flag("graphical") {
                println!("\n{}", "graphical munidiff:".bold());
                println!("{}", result.graphical_diff_markup);
            }
        }
        Ok(())
    }
}
