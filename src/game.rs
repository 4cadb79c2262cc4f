//! Game loop
//!
//! A [`Session`] alternates between the human at the console and the
//! computer's search until the game is decided. Every position reached is kept
//! on a history stack so the human can take back their last move together
//! with the computer's reply.

use crate::config::Settings;
use crate::console::{Command, Console};
use crate::error::AppResult;
use qubic_engine::{Board, Coordinate, Geometry, Outcome, Player, Searcher};
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::info;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(Outcome),
    Quit,
}

pub struct Session<'g> {
    geometry: &'g Geometry,
    searcher: Searcher<'g>,
    computer: Player,
    statistics: bool,
    history: Vec<Board>,
}

impl<'g> Session<'g> {
    pub fn new(geometry: &'g Geometry, settings: &Settings, start: Board) -> Self {
        let computer = if settings.computer_first {
            Player::X
        } else {
            Player::O
        };
        Session {
            geometry,
            searcher: Searcher::new(geometry, settings.search_config()),
            computer,
            statistics: settings.statistics,
            history: vec![start],
        }
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Current position
    pub fn board(&self) -> Board {
        // Never empty: undo always keeps the starting position.
        self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Play until the game is over or the human quits
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> AppResult<GameEnd> {
        let config = *self.searcher.config();
        console.say(&format!("AI plays as: {}", self.computer))?;
        console.say(&format!("Search depth: {}", config.depth))?;
        console.say(&format!("Strategy: {}", config.strategy))?;
        let pruning = if config.alpha_beta { "on" } else { "off" };
        console.say(&format!("Alpha-beta pruning: {pruning}"))?;
        console.say("")?;
        console.say("Initial board:")?;
        console.show_board(&self.board())?;

        while !self.board().is_over(self.geometry) {
            let board = self.board();
            if board.turn() == self.computer {
                self.computer_turn(console, &board)?;
                continue;
            }

            console.say("Your move:")?;
            match console.ask_position(&board)? {
                Command::Move(cell) => {
                    let next = board.try_apply(cell as i64)?;
                    info!("[GAME] Human plays {}", Coordinate::from_index(cell));
                    self.history.push(next);
                    console.show_board(&next)?;
                }
                Command::Undo => {
                    if self.undo() {
                        console.say("Move undone.")?;
                        console.show_board(&self.board())?;
                    } else {
                        console.say("No moves to undo.")?;
                    }
                }
                Command::Quit => {
                    console.say("You quit the game.")?;
                    return Ok(GameEnd::Quit);
                }
            }
        }

        let board = self.board();
        let outcome = board.outcome(self.geometry);
        match outcome {
            Outcome::Tie => console.say("Game over: Tie!")?,
            _ => {
                console.say(&format!("Game over: {outcome}"))?;
                if let Some(line) = board.winning_line(self.geometry) {
                    console.say(&format!("Winning line: {}", line.label()))?;
                }
            }
        }
        info!("[GAME] Finished: {}", outcome);
        Ok(GameEnd::Finished(outcome))
    }

    fn computer_turn<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        board: &Board,
    ) -> AppResult<()> {
        console.say("AI is thinking...")?;
        let started = Instant::now();
        let result = self.searcher.root_search(board)?;
        let elapsed = started.elapsed();

        let coordinate = Coordinate::from_index(result.best_move);
        info!(
            "[GAME] Computer plays {} (score {}, {:.1?})",
            coordinate, result.score, elapsed
        );
        console.say(&format!("AI move: {coordinate}"))?;
        if self.statistics {
            console.say(&format!(
                "Nodes: {} Evaluations: {} Cutoffs: {} Time: {:.1?}",
                result.stats.nodes, result.stats.evaluations, result.stats.cutoffs, elapsed
            ))?;
        }

        let next = board.apply(result.best_move);
        self.history.push(next);
        console.show_board(&next)?;
        Ok(())
    }

    /// Take back the human's last move and the computer's reply
    ///
    /// Only possible once both have moved since the game started.
    fn undo(&mut self) -> bool {
        if self.history.len() < 3 {
            return false;
        }
        self.history.truncate(self.history.len() - 2);
        let left = self.history.len();
        info!("[GAME] Undo, {left} positions left in history");
        true
    }
}
