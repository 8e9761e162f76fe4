use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    parse_target, Board, CliPlayer, Coordinate, InputError, Orientation, Player, PlayerError,
    Ship, ShotOutcome,
};

fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

#[test]
fn test_parse_converts_to_zero_based() {
    assert_eq!(parse_target("3 5", 6), Ok(Coordinate::new(2, 4)));
    assert_eq!(parse_target("  1   6 ", 6), Ok(Coordinate::new(0, 5)));
}

#[test]
fn test_parse_rejects_wrong_token_count() {
    assert_eq!(parse_target("", 6), Err(InputError::WrongTokenCount(0)));
    assert_eq!(parse_target("3", 6), Err(InputError::WrongTokenCount(1)));
    assert_eq!(parse_target("1 2 3", 6), Err(InputError::WrongTokenCount(3)));
}

#[test]
fn test_parse_rejects_non_numbers() {
    assert_eq!(
        parse_target("a 2", 6),
        Err(InputError::NotANumber("a".to_string()))
    );
    assert_eq!(
        parse_target("2 -1", 6),
        Err(InputError::NotANumber("-1".to_string()))
    );
    assert_eq!(
        parse_target("+2 1", 6),
        Err(InputError::NotANumber("+2".to_string()))
    );
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert_eq!(parse_target("0 1", 6), Err(InputError::OutOfRange { size: 6 }));
    assert_eq!(parse_target("1 7", 6), Err(InputError::OutOfRange { size: 6 }));
    assert_eq!(
        parse_target("99999999999999999999 1", 6),
        Err(InputError::OutOfRange { size: 6 })
    );
    assert_eq!(parse_target("9 9", 9), Ok(Coordinate::new(8, 8)));
}

#[test]
fn test_reprompts_until_valid() {
    let mut p = player("hello\n7 7\n2 3\n");
    let target = p.read_target(6).unwrap();
    assert_eq!(target, Coordinate::new(1, 2));
    let out = String::from_utf8(p.into_output()).unwrap();
    assert_eq!(out.matches("Your move").count(), 3);
    assert_eq!(out.matches("Invalid input").count(), 2);
}

#[test]
fn test_help_prints_legend() {
    let mut p = player("help\n1 1\n");
    p.read_target(6).unwrap();
    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("Board symbols"));
}

#[test]
fn test_end_of_input_is_reported() {
    let mut p = player("4 4 4\n");
    assert!(matches!(p.read_target(6), Err(PlayerError::InputClosed)));
}

#[test]
fn test_move_retries_after_rejected_shot() {
    let mut enemy = Board::new(6, true);
    enemy
        .add_ship(Ship::new(Coordinate::new(4, 4), 1, Orientation::Vertical).unwrap())
        .unwrap();
    enemy.reset_targeting_history();
    enemy.shoot(Coordinate::new(0, 0)).unwrap();

    let mut p = player("1 1\n5 5\n");
    let mut rng = SmallRng::seed_from_u64(0);
    let (target, outcome) = p.make_move(&mut rng, &mut enemy).unwrap();
    assert_eq!(target, Coordinate::new(4, 4));
    assert_eq!(outcome, ShotOutcome::Destroyed);

    let out = String::from_utf8(p.into_output()).unwrap();
    assert!(out.contains("You have already shot at that cell (1 1)"));
    assert!(out.contains("Ship destroyed!"));
}
