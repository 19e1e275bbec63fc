//! Console driver: menu loop around a [`PieceSupply`].
//!
//! The loop renders state, reads one selection per line, applies it and
//! reports the outcome. End of input counts as an exit selection. In JSON
//! mode the menu is suppressed and every line of input produces exactly one
//! JSON line of output.

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{KindSelector, PieceSupply, SupplySnapshot};
use crate::input::{parse_selection, MenuSelection};
use crate::term::{describe_invalid, describe_outcome, ConsoleRenderer};
use crate::types::SupplyCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub accepted: u32,
    pub rejected: u32,
    pub invalid: u32,
}

/// One JSON output line.
#[derive(Debug, Serialize)]
struct CommandReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<SupplyCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a str>,
    state: &'a SupplySnapshot,
}

pub fn run_session<S, R, W>(
    supply: &mut PieceSupply<S>,
    input: R,
    renderer: &mut ConsoleRenderer<W>,
    mode: OutputMode,
) -> Result<SessionSummary>
where
    S: KindSelector,
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut snap = SupplySnapshot::default();
    let mut lines = input.lines();

    supply.snapshot_into(&mut snap);
    if mode == OutputMode::Json {
        emit_json(renderer, None, None, None, &snap)?;
    }

    loop {
        if mode == OutputMode::Text {
            renderer.draw_state(&snap)?;
            renderer.draw_menu()?;
            renderer.prompt()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match parse_selection(&line) {
            MenuSelection::Quit => {
                if mode == OutputMode::Text {
                    renderer.draw_line("Exiting...")?;
                }
                break;
            }
            MenuSelection::Invalid(raw) => {
                summary.invalid += 1;
                debug!(input = %raw, "invalid menu selection");
                match mode {
                    OutputMode::Text => renderer.draw_line(&describe_invalid(&raw))?,
                    OutputMode::Json => {
                        emit_json(renderer, None, Some("invalid_selection"), Some(raw.as_str()), &snap)?
                    }
                }
            }
            MenuSelection::Command(command) => {
                let outcome = supply.apply(command);
                match &outcome {
                    Ok(_) => summary.accepted += 1,
                    Err(_) => summary.rejected += 1,
                }
                supply.snapshot_into(&mut snap);
                match mode {
                    OutputMode::Text => renderer.draw_line(&describe_outcome(&outcome))?,
                    OutputMode::Json => {
                        let error = outcome.as_ref().err().map(|e| e.as_str());
                        emit_json(renderer, Some(command), error, None, &snap)?
                    }
                }
            }
        }
    }

    renderer.flush()?;
    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        invalid = summary.invalid,
        "session finished"
    );
    Ok(summary)
}

fn emit_json<W: Write>(
    renderer: &mut ConsoleRenderer<W>,
    command: Option<SupplyCommand>,
    error: Option<&str>,
    input: Option<&str>,
    state: &SupplySnapshot,
) -> Result<()> {
    let report = CommandReport {
        command,
        error,
        input,
        state,
    };
    let line = serde_json::to_string(&report)?;
    renderer.draw_line(&line)
}
