#![cfg(feature = "std")]

//! Terminal front end: stdin-backed input and a plain-text renderer.

use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use crate::common::{Cell, GameResult, InputError, PlayerId};
use crate::input::InputSource;
use crate::render::{format_rows, PlayerMarks, Renderer};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Reads lines from any buffered reader, stdin by default.
pub struct LineInput<R> {
    reader: R,
}

impl LineInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Writes boards and messages as plain text.
pub struct ConsoleRenderer<W> {
    out: W,
    clear_screen: bool,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renderer that never clears the screen.
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each board.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, rows: &[Vec<Cell>], marks: &PlayerMarks) -> anyhow::Result<()> {
        if self.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        write!(self.out, "{}", format_rows(rows, marks))?;
        self.out.flush()?;
        Ok(())
    }

    fn introduce(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Welcome to Connect Four!")?;
        Ok(())
    }

    fn prompt(&mut self, _player: PlayerId) -> anyhow::Result<()> {
        write!(
            self.out,
            "Enter the id of the column you would like to put a mark in: "
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn input_error(&mut self, _error: &InputError) -> anyhow::Result<()> {
        writeln!(self.out, "Input Error!")?;
        Ok(())
    }

    fn announce(&mut self, result: GameResult) -> anyhow::Result<()> {
        match result {
            GameResult::Win(player) => writeln!(self.out, "Player {} wins!", player)?,
            GameResult::Tie => writeln!(self.out, "There's finally a tie!")?,
            GameResult::InProgress => {}
        }
        self.out.flush()?;
        Ok(())
    }
}
