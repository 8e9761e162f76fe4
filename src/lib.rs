pub mod core;
mod logging;
pub mod player;
pub mod ui;

pub use crate::core::*;
pub use logging::init_logging;
pub use player::{parse_target, AiPlayer, CliPlayer, InputError, Player, PlayerError};
