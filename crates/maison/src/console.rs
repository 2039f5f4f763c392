//! Terminal collaborators: keyboard input and "typewriter" presentation.

use crate::config::ConsoleConfig;
use crate::render::{self, Symbols};
use maison_tictactoe::{
    Board, GameError, GameOutcome, HumanInput, Marker, Move, Position, Presenter,
};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, instrument, warn};

fn io_error(err: std::io::Error) -> GameError {
    GameError::Presentation(err.to_string())
}

/// Reads human moves from a line-oriented reader.
///
/// Bad input is answered with a message and a fresh prompt until a
/// playable position arrives. Only end of input is an error.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
    symbols: Symbols,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates an input reading from `reader` and prompting on `writer`.
    pub fn new(reader: R, writer: W, symbols: Symbols) -> Self {
        Self {
            reader,
            writer,
            symbols,
        }
    }

    /// Consumes the input, returning the prompt writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn complain(&mut self, message: &str, board: &Board) -> Result<(), GameError> {
        writeln!(self.writer, "{}", message).map_err(io_error)?;
        writeln!(self.writer, "\n{}", render::board(board, &self.symbols)).map_err(io_error)
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleInput<R, W> {
    #[instrument(skip_all)]
    fn request_move(&mut self, board: &Board) -> Result<Position, GameError> {
        loop {
            write!(self.writer, "enter 1-9 : ").map_err(io_error)?;
            self.writer.flush().map_err(io_error)?;

            // Raw bytes: a line that is not UTF-8 is just more bad input.
            let mut raw = Vec::new();
            let read = self
                .reader
                .read_until(b'\n', &mut raw)
                .map_err(|e| GameError::Input(e.to_string()))?;
            if read == 0 {
                return Err(GameError::Input("input closed".to_string()));
            }
            let line = String::from_utf8_lossy(&raw);

            let Ok(number) = line.trim().parse::<i64>() else {
                debug!(input = %line.trim(), "Rejected non-numeric input");
                self.complain("pls try again", board)?;
                continue;
            };

            let Some(pos) = Position::from_number(number) else {
                debug!(number, "Rejected out-of-range input");
                self.complain("it's only 1-9, I told you already", board)?;
                continue;
            };

            if !board.is_playable(pos) {
                debug!(number, "Rejected occupied square");
                self.complain(&format!("{} is taken, try another spot", number), board)?;
                continue;
            }

            return Ok(pos);
        }
    }
}

/// Shows the game on a writer, one character at a time if configured.
#[derive(Debug)]
pub struct ConsolePresenter<W> {
    writer: W,
    config: ConsoleConfig,
    next_quip: usize,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `writer`.
    pub fn new(writer: W, config: ConsoleConfig) -> Self {
        Self {
            writer,
            config,
            next_quip: 0,
        }
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes a line, pausing between characters when a typing delay is set.
    fn type_line(&mut self, text: &str) -> Result<(), GameError> {
        let delay = *self.config.type_delay_ms();
        if delay == 0 {
            writeln!(self.writer, "{}", text).map_err(io_error)?;
        } else {
            for ch in text.chars() {
                thread::sleep(Duration::from_millis(delay));
                write!(self.writer, "{}", ch).map_err(io_error)?;
                self.writer.flush().map_err(io_error)?;
            }
            writeln!(self.writer).map_err(io_error)?;
        }
        self.writer.flush().map_err(io_error)
    }

    fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        let text = render::board(board, &self.config.symbols());
        writeln!(self.writer, "\n{}\n", text).map_err(io_error)
    }

    fn quip(&mut self) -> Result<(), GameError> {
        let quips = self.config.quips();
        if quips.is_empty() {
            return Ok(());
        }
        let line = quips[self.next_quip % quips.len()].clone();
        self.next_quip = self.next_quip.wrapping_add(1);
        self.type_line(&line)
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    #[instrument(skip_all)]
    fn game_started(&mut self, board: &Board) -> Result<(), GameError> {
        self.type_line("Welcome weary traveller to `Maison du Tic Tac Toe`")?;
        self.type_line("I've been waiting for you since time immemorial ...")?;
        self.type_line("Shall we jam?")?;
        self.type_line("I insist on the following position names")?;
        writeln!(self.writer, "\n{}\n", render::legend()).map_err(io_error)?;
        self.type_line("You go first, it doesn't matter to me ... I can't lose")?;
        self.show_board(board)
    }

    #[instrument(skip_all, fields(mv = %mv))]
    fn move_made(&mut self, mv: Move, board: &Board) -> Result<(), GameError> {
        match mv.marker {
            Marker::Human => self.show_board(board),
            Marker::Computer => {
                let pause = *self.config.think_delay_ms();
                if pause > 0 {
                    thread::sleep(Duration::from_millis(pause));
                }
                self.show_board(board)?;
                if !board.outcome().is_terminal() {
                    self.quip()?;
                }
                Ok(())
            }
        }
    }

    #[instrument(skip(self, _board))]
    fn game_over(&mut self, outcome: GameOutcome, _board: &Board) -> Result<(), GameError> {
        let line = match outcome {
            GameOutcome::HumanWin => "you win, how can this be?! this is literally impossible!",
            GameOutcome::ComputerWin => "I win, better luck next time",
            GameOutcome::Draw => "we drew, I'm pretty sure that's the best you can do",
            GameOutcome::InProgress => {
                warn!("Asked to announce an unfinished game");
                return Ok(());
            }
        };
        self.type_line(line)
    }
}
