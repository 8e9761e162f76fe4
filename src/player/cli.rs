use std::io::{BufRead, Write};

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::core::{BoardError, Coordinate, ShotOutcome};

use super::{Player, PlayerError};

/// Reasons a typed target is refused before it reaches the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected two numbers separated by a space, got {0} value(s)")]
    WrongTokenCount(usize),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("coordinates must be between 1 and {size}")]
    OutOfRange { size: usize },
}

/// Parse `"row col"`, both one-based and within `1..=size`, into a zero-based coordinate.
pub fn parse_target(input: &str, size: usize) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongTokenCount(tokens.len()));
    }
    let mut values = [0i32; 2];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber(token.to_string()));
        }
        // all digits, so only overflow can fail here
        let value: usize = token
            .parse()
            .map_err(|_| InputError::OutOfRange { size })?;
        if value < 1 || value > size {
            return Err(InputError::OutOfRange { size });
        }
        *slot = value as i32 - 1;
    }
    Ok(Coordinate::new(values[0], values[1]))
}

/// Human player typing targets on a line-based input.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Prompt until a well-formed target is entered.
    pub fn read_target(&mut self, size: usize) -> Result<Coordinate, PlayerError> {
        loop {
            write!(self.output, "Your move (row col, e.g. 3 5): ")?;
            self.output.flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                writeln!(self.output)?;
                return Err(PlayerError::InputClosed);
            }
            let line = self.line.trim();
            if line.eq_ignore_ascii_case("help") {
                print_targeting_help(&mut self.output, size)?;
                continue;
            }
            match parse_target(line, size) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "✗ Invalid input: {}", e)?,
            }
        }
    }

    /// Consume the player, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        board_size: usize,
    ) -> Result<Coordinate, PlayerError> {
        self.read_target(board_size)
    }

    fn handle_rejected(&mut self, target: Coordinate, err: &BoardError) {
        let _ = writeln!(self.output, "✗ {} ({}), try again.", capitalize(err), target);
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        let msg = match outcome {
            ShotOutcome::Missed => "Miss!",
            ShotOutcome::Damaged => "Ship damaged! Shoot again.",
            ShotOutcome::Destroyed => "Ship destroyed! Shoot again.",
        };
        let _ = writeln!(self.output, "{} → {}", target, msg);
    }
}

fn capitalize(err: &BoardError) -> String {
    let text = err.to_string();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}

fn print_targeting_help<W: Write>(out: &mut W, size: usize) -> std::io::Result<()> {
    writeln!(out, "Enter the row and then the column, each from 1 to {}.", size)?;
    writeln!(out, "  3 5  - row 3, column 5")?;
    writeln!(out, "Board symbols: ■ ship, X hit, T miss, . known empty, O unknown")
}
