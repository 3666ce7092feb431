use async_trait::async_trait;
use clap::{Arg, ArgMatches, Command};
use colored::Colorize;
use time::format_description;

use libmunitime::error::TimelineError;

use crate::cmd::RunCmd;

pub const NAME: &str = "log";
pub struct LogCmd;

#[async_trait]
impl RunCmd for LogCmd {
    fn name(&self) -> &str {
        NAME
    }

    fn args(&self) -> Command {
        Command::new(NAME)
            .about("See the commit history of a repository")
            .arg(crate::cmd::repository_arg())
            .arg(
                Arg::new("number")
                    .long("number")
                    .short('n')
                    .help("Number of commits to show")
                    .default_value("20"),
            )
    }

    async fn run(&self, args: &ArgMatches) -> Result<(), TimelineError> {
        let num_commits = args
            .get_one::<String>("number")
            .expect("Must supply number")
            .parse::<usize>()
            .expect("number must be a valid integer.");

        let session = crate::cmd::session_from_args(args).await?;

        // Fri, 21 Oct 2022 16:08:39 +0000
        let format = format_description::parse(
            "[weekday], [day] [month repr:long] [year] [hour]:[minute]:[second] [offset_hour sign:mandatory]",
        ).unwrap();

        for commit in session.commits().iter().take(num_commits) {
            let commit_id_str = format!("commit {}", commit.sha).yellow();
            println!("{commit_id_str}");
            println!("Author: {}", commit.author_name);
            if let Ok(date) = commit.authored_at.format(&format) {
                println!("Date:   {date}");
            }
            println!("\n    {}\n", commit.message);
        }

        Ok(())
    }
}
