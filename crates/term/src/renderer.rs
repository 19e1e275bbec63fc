//! ConsoleRenderer: writes supply state and messages to a terminal stream.
//!
//! Colored output goes through crossterm commands queued on the writer;
//! plain output reuses the [`crate::view`] strings verbatim.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::SupplySnapshot;
use crate::types::{Piece, PieceKind};
use crate::view::{self, EMPTY_MARKER, QUEUE_LABEL, STACK_LABEL};

/// Foreground color used for a piece token.
pub fn kind_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Cyan,
        PieceKind::O => Color::Yellow,
        PieceKind::T => Color::Magenta,
        PieceKind::L => Color::DarkYellow,
    }
}

pub struct ConsoleRenderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Queue and stack lines, followed by a blank line.
    pub fn draw_state(&mut self, snap: &SupplySnapshot) -> Result<()> {
        if !self.color {
            writeln!(self.out, "{}", view::render_queue(snap))?;
            writeln!(self.out, "{}", view::render_stack(snap))?;
            writeln!(self.out)?;
            return Ok(());
        }

        self.draw_tokens(QUEUE_LABEL, snap.queue.iter())?;
        self.draw_tokens(STACK_LABEL, snap.stack.iter())?;
        self.out.queue(Print("\n"))?;
        Ok(())
    }

    fn draw_tokens<'a>(
        &mut self,
        label: &str,
        pieces: impl ExactSizeIterator<Item = &'a Piece>,
    ) -> Result<()> {
        self.out.queue(Print(format!("{}: ", label)))?;
        if pieces.len() == 0 {
            self.out.queue(Print(EMPTY_MARKER))?;
        }
        for (i, piece) in pieces.enumerate() {
            if i > 0 {
                self.out.queue(Print(" "))?;
            }
            self.out
                .queue(SetForegroundColor(kind_color(piece.kind)))?
                .queue(Print(piece))?
                .queue(ResetColor)?;
        }
        self.out.queue(Print("\n"))?;
        Ok(())
    }

    pub fn draw_menu(&mut self) -> Result<()> {
        write!(self.out, "{}", view::render_menu())?;
        Ok(())
    }

    /// Print the selection prompt and flush so it shows before input is read.
    pub fn prompt(&mut self) -> Result<()> {
        write!(self.out, "Option: ")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn draw_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
