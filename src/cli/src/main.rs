use std::collections::HashMap;
use std::process::ExitCode;

use clap::Command;
use env_logger::Env;

pub mod cmd;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(Env::default());

    let cmds: Vec<Box<dyn cmd::RunCmd>> = vec![
        Box::new(cmd::DiffCmd),
        Box::new(cmd::FilesCmd),
        Box::new(cmd::LogCmd),
    ];

    let mut command = Command::new("munitime")
        .version(libmunitime::constants::MUNITIME_VERSION)
        .about("Inspect the evolution of versioned model files in a hosted repository")
        .subcommand_required(true)
        .arg_required_else_help(true);

    // Add all the commands to the command line
    let mut runners: HashMap<String, Box<dyn cmd::RunCmd>> = HashMap::new();
    for cmd in cmds {
        command = command.subcommand(cmd.args());
        runners.insert(cmd.name().to_string(), cmd);
    }

    // Parse the command line args and run the appropriate command
    let matches = command.get_matches();
    match matches.subcommand() {
        Some((name, sub_matches)) => match runners.get(name) {
            Some(runner) => match runner.run(sub_matches).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            },
            None => {
                eprintln!("Unknown command {name}");
                ExitCode::FAILURE
            }
        },
        None => {
            eprintln!("No command provided");
            ExitCode::FAILURE
        }
    }
}
