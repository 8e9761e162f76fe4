use seabattle::{BoardError, Coordinate, Orientation, Ship};

#[test]
fn test_horizontal_cells_advance_rows() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(1, 2), 3, Orientation::Horizontal)?;
    assert_eq!(
        ship.cells(),
        vec![
            Coordinate::new(1, 2),
            Coordinate::new(2, 2),
            Coordinate::new(3, 2)
        ]
    );
    Ok(())
}

#[test]
fn test_vertical_cells_advance_columns() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(4, 0), 2, Orientation::Vertical)?;
    assert_eq!(
        ship.cells(),
        vec![Coordinate::new(4, 0), Coordinate::new(4, 1)]
    );
    assert!(ship.contains(Coordinate::new(4, 1)));
    assert!(!ship.contains(Coordinate::new(5, 0)));
    Ok(())
}

#[test]
fn test_new_ship_is_fully_alive() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(0, 0), 3, Orientation::Vertical)?;
    assert_eq!(ship.lives(), 3);
    assert_eq!(ship.length(), 3);
    assert!(ship.is_alive());
    Ok(())
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(
        Ship::new(Coordinate::new(0, 0), 0, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipPlacement
    );
}

#[test]
fn test_ship_beyond_coordinate_range_rejected() {
    let edge = Coordinate::new(i32::MAX, 0);
    assert_eq!(
        Ship::new(edge, 2, Orientation::Horizontal),
        Err(BoardError::ShipPlacement)
    );
    assert!(Ship::new(edge, 2, Orientation::Vertical).is_ok());
    assert_eq!(Ship::new(edge, 1, Orientation::Horizontal).map(|s| s.cells()), Ok(vec![edge]));
}

#[test]
fn test_oversized_length_rejected() {
    let too_long = i32::MAX as usize + 2;
    assert_eq!(
        Ship::new(Coordinate::new(2, 2), too_long, Orientation::Horizontal),
        Err(BoardError::ShipPlacement)
    );
}

#[test]
fn test_cells_match_length() -> Result<(), BoardError> {
    let ship = Ship::new(Coordinate::new(0, 0), 40, Orientation::Vertical)?;
    assert_eq!(ship.cells().len(), ship.length());
    assert_eq!(ship.cells()[39], Coordinate::new(0, 39));
    Ok(())
}
