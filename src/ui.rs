//! Text rendering of boards and game messages.

use std::fmt;

use crate::core::{Board, Cell, Side, ShotOutcome, Turn};

/// Symbol used for `cell`, honouring the board's concealment.
pub fn cell_symbol(cell: Cell, hidden: bool) -> &'static str {
    match cell {
        Cell::Empty => "O",
        Cell::Ship if hidden => "O",
        Cell::Ship => "■",
        Cell::Hit => "X",
        Cell::Miss => "T",
        Cell::Contour => ".",
    }
}

/// Display adapter drawing a board as a numbered grid.
///
/// ```text
///   | 1 | 2 | 3 |
/// 1 | O | ■ | O |
/// ```
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        write!(f, "  |")?;
        for c in 1..=board.size() {
            write!(f, " {} |", c)?;
        }
        writeln!(f)?;
        for (r, row) in board.rows().enumerate() {
            write!(f, "{} |", r + 1)?;
            for &cell in row {
                write!(f, " {} |", cell_symbol(cell, board.is_hidden()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Both boards, the user's first.
pub fn print_boards(user: &Board, ai: &Board) {
    println!("Your board:");
    print!("{}", BoardView(user));
    println!("\nComputer's board:");
    print!("{}", BoardView(ai));
}

pub fn print_greeting(size: usize) {
    println!("══════════════════════════════════");
    println!("         Welcome to Sea Battle");
    println!("══════════════════════════════════");
    println!("Enter a shot as: row column (each 1-{})", size);
    println!("Type 'help' at the prompt for the symbol legend.\n");
}

/// One line announcing an accepted shot.
pub fn describe_turn(turn: &Turn) -> String {
    let shooter = match turn.side {
        Side::User => "You fire",
        Side::Ai => "Computer fires",
    };
    let result = match turn.outcome {
        ShotOutcome::Missed => "miss",
        ShotOutcome::Damaged => "ship damaged",
        ShotOutcome::Destroyed => "ship destroyed",
    };
    format!("{} at {}: {}", shooter, turn.target, result)
}

pub fn winner_message(winner: Side) -> &'static str {
    match winner {
        Side::User => "You win!",
        Side::Ai => "The computer wins!",
    }
}
