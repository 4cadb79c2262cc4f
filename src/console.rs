//! Console rendering and input
//!
//! The board is drawn as four Z-layers side by side with Y running down the
//! screen, so `(1,4,1)` is the top-left cell and `(4,1,4)` the bottom-right.
//!
//! A move is entered as three 1-based prompts (X, Y, Z). At any prompt the
//! player may type `undo`, `quit` or `retry`; `retry` starts the move over
//! from X. End of input counts as `quit`.

use crate::error::AppResult;
use qubic_engine::constants::N;
use qubic_engine::coordinate::position;
use qubic_engine::{Board, Coordinate, Geometry, Player};
use std::io::{BufRead, Write};

/// What the human asked for at the move prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(u8),
    Undo,
    Quit,
}

enum Answer {
    Value(u8),
    Retry,
    Command(Command),
}

/// Board picture, one line per Y row from high to low
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for y in (0..N).rev() {
        for z in 0..N {
            for x in 0..N {
                let marker = board
                    .occupant(position(x, y, z))
                    .map_or('.', Player::marker);
                out.push(marker);
            }
            if z + 1 < N {
                out.push_str("    ");
            }
        }
        out.push('\n');
    }
    out
}

/// Listing of every line and plane with its mask in `base`
pub fn render_geometry(geometry: &Geometry, base: u32) -> String {
    let mut out = String::new();
    out.push_str(&format!("Lines ({}):\n", geometry.lines().len()));
    for line in geometry.lines() {
        out.push_str(&format!(
            "  {} {} {}\n",
            line.mask().to_radix_string(base, true),
            line.mask(),
            line.label()
        ));
    }
    out.push_str(&format!("Planes ({}):\n", geometry.planes().len()));
    for plane in geometry.planes() {
        out.push_str(&format!(
            "  {} {}\n",
            plane.mask().to_radix_string(base, true),
            plane.label()
        ));
    }
    out
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> AppResult<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn show_board(&mut self, board: &Board) -> AppResult<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", render_board(board))?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Prompt until the human picks an empty cell or gives a command
    pub fn ask_position(&mut self, board: &Board) -> AppResult<Command> {
        loop {
            let mut xyz = [0u8; 3];
            let mut retry = false;
            for (slot, prompt) in xyz.iter_mut().zip(["X", "Y", "Z"]) {
                match self.ask(prompt)? {
                    Answer::Value(value) => *slot = value,
                    Answer::Retry => {
                        retry = true;
                        break;
                    }
                    Answer::Command(command) => return Ok(command),
                }
            }
            if retry {
                continue;
            }

            let cell = position(xyz[0], xyz[1], xyz[2]);
            if board.is_empty(cell) {
                return Ok(Command::Move(cell));
            }
            let at = Coordinate::from_index(cell);
            writeln!(self.output, "Square {at} is not empty")?;
        }
    }

    /// Read one coordinate component, zero-based
    fn ask(&mut self, prompt: &str) -> AppResult<Answer> {
        loop {
            write!(self.output, "Enter {prompt}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Answer::Command(Command::Quit));
            }
            let response = line.trim();
            match response {
                "" => continue,
                "quit" => return Ok(Answer::Command(Command::Quit)),
                "undo" => return Ok(Answer::Command(Command::Undo)),
                "retry" => return Ok(Answer::Retry),
                _ => {}
            }
            match response.parse::<u8>() {
                Ok(value) if (1..=N).contains(&value) => return Ok(Answer::Value(value - 1)),
                _ => writeln!(self.output, "Invalid value for {prompt}: {response}")?,
            }
        }
    }
}
