//! Turn order and win detection for a game between the user and the computer.

use log::info;
use rand::rngs::SmallRng;

use crate::core::board::Board;
use crate::core::common::ShotOutcome;
use crate::core::config::GameConfig;
use crate::core::coordinate::Coordinate;
use crate::core::generator::{generate_board_retrying, GenerateError};
use crate::player::{Player, PlayerError};

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    User,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::User => Side::Ai,
            Side::Ai => Side::User,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InPlay,
    Finished(Side),
}

/// A shot accepted by the board, as reported by [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    pub state: GameState,
}

/// Owns both boards and both players and alternates turns between them.
///
/// The user's board is rendered openly; the computer's board is hidden.
pub struct Game<'p> {
    user_board: Board,
    ai_board: Board,
    user: Box<dyn Player + 'p>,
    ai: Box<dyn Player + 'p>,
    rng: SmallRng,
    turn: usize,
    state: GameState,
}

impl<'p> Game<'p> {
    /// Generate both boards and start a game. `boards` is the number of fresh
    /// boards tried per side before setup is abandoned.
    pub fn new(
        config: &GameConfig,
        mut rng: SmallRng,
        boards: usize,
        user: Box<dyn Player + 'p>,
        ai: Box<dyn Player + 'p>,
    ) -> Result<Self, GenerateError> {
        let user_board = generate_board_retrying(&mut rng, config, false, boards)?;
        let ai_board = generate_board_retrying(&mut rng, config, true, boards)?;
        Ok(Self::from_boards(user_board, ai_board, user, ai, rng))
    }

    /// Start a game on prepared boards.
    pub fn from_boards(
        user_board: Board,
        ai_board: Board,
        user: Box<dyn Player + 'p>,
        ai: Box<dyn Player + 'p>,
        rng: SmallRng,
    ) -> Self {
        Self {
            user_board,
            ai_board,
            user,
            ai,
            rng,
            turn: 0,
            state: GameState::InPlay,
        }
    }

    pub fn user_board(&self) -> &Board {
        &self.user_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of times the turn has passed.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Side that moves next. The user opens the game.
    pub fn current_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::User
        } else {
            Side::Ai
        }
    }

    /// Let the current side fire one accepted shot. A hit keeps the turn; a
    /// miss passes it. Returns `None` once the game is over.
    pub fn step(&mut self) -> Result<Option<Turn>, PlayerError> {
        if let GameState::Finished(_) = self.state {
            return Ok(None);
        }
        let side = self.current_side();
        let (target, outcome) = match side {
            Side::User => self.user.make_move(&mut self.rng, &mut self.ai_board)?,
            Side::Ai => self.ai.make_move(&mut self.rng, &mut self.user_board)?,
        };
        if !outcome.repeats_turn() {
            self.turn += 1;
        }
        // The computer's fleet is checked first.
        if self.ai_board.ship_count() == 0 {
            self.state = GameState::Finished(Side::User);
        } else if self.user_board.ship_count() == 0 {
            self.state = GameState::Finished(Side::Ai);
        }
        if let GameState::Finished(winner) = self.state {
            info!("game over after {} turns, winner: {:?}", self.turn, winner);
        }
        Ok(Some(Turn {
            side,
            target,
            outcome,
            state: self.state,
        }))
    }

    /// Play until one fleet is gone, calling `observe` before each step and
    /// after every accepted shot. Returns the winner.
    pub fn run<F>(&mut self, mut observe: F) -> Result<Side, PlayerError>
    where
        F: FnMut(&Game<'p>, Option<&Turn>),
    {
        loop {
            if let GameState::Finished(winner) = self.state {
                return Ok(winner);
            }
            observe(self, None);
            if let Some(turn) = self.step()? {
                observe(self, Some(&turn));
            }
        }
    }
}
