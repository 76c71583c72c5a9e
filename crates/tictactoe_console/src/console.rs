//! Interactive game loop over line-based text I/O.

use crate::config::{ConsoleConfig, FirstPlayer};
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{Game, GameStatus, Mark};
use tracing::{debug, info, instrument};

/// Interprets the answer to the mark prompt: `x` or `X` picks X, anything
/// else picks O.
pub fn parse_mark_choice(answer: &str) -> Mark {
    match answer.trim().chars().next() {
        Some('x' | 'X') => Mark::X,
        _ => Mark::O,
    }
}

/// Parses "row col" into zero-based coordinates.
///
/// Returns `None` unless the line holds exactly two non-negative integers.
/// Range checking is left to the game.
pub fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some((row, col)),
    }
}

/// Text console playing games between a human and the computer.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Consumes the console, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the player declines another or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;

        let mut previous: Option<Game> = None;
        loop {
            let Some(human) = self.choose_mark()? else {
                break;
            };

            let mut game = match previous.take() {
                Some(mut game) if game.human() == human => {
                    game.reset();
                    game
                }
                _ => Game::new(human),
            };

            let outcome = self.play_game(&mut game)?;
            previous = Some(game);
            if outcome.is_none() || !*self.config.replay() || !self.wants_replay()? {
                break;
            }
        }

        info!("Session finished");
        Ok(())
    }

    /// Plays one game to the end.
    ///
    /// Returns the final status, or `None` if input ran out mid-game.
    #[instrument(skip(self, game), fields(human = %game.human()))]
    pub fn play_game(&mut self, game: &mut Game) -> Result<Option<GameStatus>> {
        if *self.config.first_player() == FirstPlayer::Computer && !game.status().is_over() {
            game.apply_computer_move();
        }

        loop {
            write!(self.output, "{}", game.board())?;

            let status = game.status();
            match status {
                GameStatus::Won(mark) if mark == game.human() => {
                    writeln!(self.output, "You win!")?;
                }
                GameStatus::Won(_) => writeln!(self.output, "AI wins!")?,
                GameStatus::Draw => writeln!(self.output, "It's a draw!")?,
                GameStatus::InProgress => {}
            }
            if status.is_over() {
                info!(?status, "Game over");
                return Ok(Some(status));
            }

            let Some(line) = self.prompt("Enter your move (row and column): ")? else {
                return Ok(None);
            };

            let Some((row, col)) = parse_move(&line) else {
                debug!(input = %line.trim(), "Unparsable move");
                writeln!(self.output, "Invalid move, try again!")?;
                continue;
            };

            if let Err(e) = game.apply_human_move(row, col) {
                debug!(error = %e, "Rejected move");
                writeln!(self.output, "Invalid move, try again!")?;
                continue;
            }

            if !game.status().is_over() {
                game.apply_computer_move();
            }
        }
    }

    /// Reads the human's mark from config or by asking.
    fn choose_mark(&mut self) -> Result<Option<Mark>> {
        if let Some(mark) = *self.config.human_mark() {
            return Ok(Some(mark));
        }
        Ok(self
            .prompt("Enter your choice [X or O]: ")?
            .map(|answer| parse_mark_choice(&answer)))
    }

    fn wants_replay(&mut self) -> Result<bool> {
        let answer = self.prompt("Enter 1 to play again, any other key to quit: ")?;
        Ok(answer.is_some_and(|a| a.trim() == "1"))
    }

    /// Writes `text`, then reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}
