//! Plain-text views of supply state and command outcomes.

use std::fmt::Write as _;

use crate::core::{CommandOutcome, Replenish, SupplyError, SupplySnapshot};
use crate::types::{Piece, SupplyCommand, QUIT_MENU_NUMBER};

/// Shown in place of tokens when a container holds nothing.
pub const EMPTY_MARKER: &str = "(empty)";

pub const QUEUE_LABEL: &str = "Upcoming pieces";
pub const STACK_LABEL: &str = "Reserve stack (top -> base)";

fn join_tokens<'a>(pieces: impl Iterator<Item = &'a Piece>) -> String {
    let mut out = String::new();
    for (i, piece) in pieces.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", piece);
    }
    if out.is_empty() {
        out.push_str(EMPTY_MARKER);
    }
    out
}

/// Queue line, front to back.
pub fn render_queue(snap: &SupplySnapshot) -> String {
    format!("{}: {}", QUEUE_LABEL, join_tokens(snap.queue.iter()))
}

/// Stack line, top to base.
pub fn render_stack(snap: &SupplySnapshot) -> String {
    format!("{}: {}", STACK_LABEL, join_tokens(snap.stack.iter()))
}

pub fn render_menu() -> String {
    let mut out = String::from("Options:\n");
    for command in SupplyCommand::ALL {
        let _ = writeln!(out, "{} - {}", command.menu_number(), command.label());
    }
    let _ = writeln!(out, "{} - Exit", QUIT_MENU_NUMBER);
    out
}

fn describe_replenish(replenish: &Replenish) -> String {
    match replenish {
        Replenish::Enqueued(piece) => format!("new piece queued: {}", piece),
        Replenish::Rejected(err) => format!("no new piece ({})", err),
    }
}

/// One-line summary of a command's result, including rejections.
pub fn describe_outcome(outcome: &Result<CommandOutcome, SupplyError>) -> String {
    match outcome {
        Ok(CommandOutcome::Played(o)) => {
            format!("Played {}; {}", o.played, describe_replenish(&o.replenish))
        }
        Ok(CommandOutcome::Reserved(o)) => {
            format!("Reserved {}; {}", o.reserved, describe_replenish(&o.replenish))
        }
        Ok(CommandOutcome::Used(piece)) => format!("Used reserved piece {}", piece),
        Ok(CommandOutcome::SwappedFront(o)) => format!(
            "Swapped: queue front is now {}, stack top is now {}",
            o.queue_front, o.stack_top
        ),
        Ok(CommandOutcome::SwappedTriple(o)) => format!(
            "Swapped the first 3 queue pieces with the 3 reserved pieces: queue {} {} {}, stack {} {} {}",
            o.queue_front[0],
            o.queue_front[1],
            o.queue_front[2],
            o.stack_top[0],
            o.stack_top[1],
            o.stack_top[2]
        ),
        Err(err) => format!("Rejected: {}", err),
    }
}

pub fn describe_invalid(input: &str) -> String {
    if input.is_empty() {
        "Invalid option, try again".to_string()
    } else {
        format!("Invalid option '{}', try again", input)
    }
}
