use std::{
    io::{self, Write as _},
    path::Path,
};

use anyhow::Context;
use serde::Serialize;
use tictactoe_advisor::{HeuristicAdvisor, MoveAdvisor, Suggestion};
use tictactoe_engine::{Board, Mark, Outcome};

use crate::util;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AdviseArg {
    /// Board in row-major order, e.g. `XO./.X./...` (`.` or `_` for empty)
    board: Board,
    /// Side to advise (defaults to the side to move)
    #[clap(long, value_enum, ignore_case = true)]
    mark: Option<MarkArg>,
    /// Output format
    #[clap(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Serialize)]
struct Report {
    board: String,
    outcome: Outcome,
    mark: Mark,
    suggestion: Option<Suggestion>,
}

pub(crate) fn run(arg: &AdviseArg, log_file: Option<&Path>) -> anyhow::Result<()> {
    util::init_logging(log_file, true)?;

    let report = advise(&arg.board, arg.mark.map(Mark::from))?;
    let mut stdout = io::stdout().lock();
    match arg.format {
        Format::Text => write_text(&mut stdout, &report).context("Failed to write report")?,
        Format::Json => util::write_json(&mut stdout, &report)?,
    }
    Ok(())
}

fn advise(board: &Board, mark: Option<Mark>) -> anyhow::Result<Report> {
    let mark = match mark {
        Some(mark) => mark,
        None => board
            .inferred_turn()
            .with_context(|| format!("Cannot infer the side to move on {board}, pass --mark"))?,
    };
    let outcome = board.detect_outcome();
    let suggestion = if outcome.is_terminal() {
        None
    } else {
        let suggestion = HeuristicAdvisor
            .suggest(board, mark)
            .with_context(|| format!("No move for {mark} on {board}"))?;
        tracing::info!(%board, %mark, position = %suggestion.position(), reason = %suggestion.reason(), "advised");
        Some(suggestion)
    };

    Ok(Report {
        board: board.to_string(),
        outcome,
        mark,
        suggestion,
    })
}

fn write_text<W>(mut writer: W, report: &Report) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(writer, "board:   {}", report.board)?;
    match &report.outcome {
        Outcome::Unset => writeln!(writer, "outcome: in progress")?,
        Outcome::Win { mark, line } => {
            let cells = line
                .positions()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "outcome: {mark} wins on {cells}")?;
        }
        Outcome::Draw => writeln!(writer, "outcome: draw")?,
    }
    if let Some(suggestion) = &report.suggestion {
        writeln!(
            writer,
            "advice:  {} plays {} ({})",
            report.mark,
            suggestion.position(),
            suggestion.reason()
        )?;
    }
    writer.flush()
}
