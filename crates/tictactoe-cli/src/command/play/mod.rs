use std::{path::Path, time::Duration};

use tictactoe_engine::GameMode;

use crate::{command::play::app::PlayApp, tui::Tui, util};

mod app;
mod screen;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ModeArg {
    /// Two humans taking turns
    #[default]
    Pvp,
    /// Human (X) against the computer (O)
    Pvc,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PlayerVsPlayer,
            ModeArg::Pvc => GameMode::PlayerVsComputer,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Game mode at startup (switch in game with `p` / `c`)
    #[clap(long, value_enum, default_value_t = ModeArg::Pvp)]
    mode: ModeArg,
    /// Pause before the computer's move, in milliseconds
    #[clap(long, default_value_t = 500)]
    computer_delay_ms: u64,
    /// Ticks per second of the game loop
    #[clap(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..=240))]
    fps: u64,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            mode: ModeArg::Pvp,
            computer_delay_ms: 500,
            fps: 30,
        }
    }
}

pub(crate) fn run(arg: &PlayArg, log_file: Option<&Path>) -> anyhow::Result<()> {
    let PlayArg {
        mode,
        computer_delay_ms,
        fps,
    } = arg;

    // The terminal belongs to the TUI: only log when a file is given.
    util::init_logging(log_file, false)?;
    tracing::info!(?mode, computer_delay_ms, fps, "starting game");

    let mut app = PlayApp::new(
        (*mode).into(),
        *fps,
        Duration::from_millis(*computer_delay_ms),
    );
    Tui::new().run(&mut app)?;

    tracing::info!("game closed");
    Ok(())
}
