use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::{advise::AdviseArg, play::PlayArg};

mod advise;
mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Write logs to this file (level controlled by `RUST_LOG`, default `info`)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Print the outcome of a board and the computer's suggested move
    Advise(#[clap(flatten)] AdviseArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg, args.log_file.as_deref())?,
        Mode::Advise(arg) => advise::run(&arg, args.log_file.as_deref())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_args_are_consistent() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_play() {
        let args = CommandArgs::try_parse_from(["tictactoe"]).unwrap();
        assert!(args.mode.is_none());
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_global_log_file() {
        let args =
            CommandArgs::try_parse_from(["tictactoe", "advise", "XO./.X./...", "--log-file", "t.log"])
                .unwrap();
        assert_eq!(args.log_file, Some(PathBuf::from("t.log")));
        assert!(matches!(args.mode, Some(Mode::Advise(_))));
    }
}
