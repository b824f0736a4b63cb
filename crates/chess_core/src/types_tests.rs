use super::*;

#[test]
fn test_coord_mapping_matches_standard_orientation() {
    let e2 = Square::from_coord("e2").unwrap();
    assert_eq!(e2, Square::new(6, 4));
    assert_eq!(Square::new(0, 0).to_string(), "a8");
    assert_eq!(Square::new(7, 7).to_string(), "h1");
}

#[test]
fn test_coord_rejects_garbage() {
    assert!(Square::from_coord("i1").is_none());
    assert!(Square::from_coord("a9").is_none());
    assert!(Square::from_coord("e").is_none());
    assert!(Square::from_coord("e22").is_none());
}

#[test]
fn test_offset_stays_on_board() {
    let a1 = Square::from_coord("a1").unwrap();
    assert_eq!(a1.offset((-1, 1), 7), Square::from_coord("h8"));
    assert!(a1.offset((1, 0), 1).is_none());
    assert!(a1.offset((0, -1), 1).is_none());
}

#[test]
fn test_direction_classes() {
    for d in ORTHOGONAL {
        assert!(is_orthogonal(d));
        assert!(!is_diagonal(d));
    }
    for d in DIAGONAL {
        assert!(is_diagonal(d));
        assert!(!is_orthogonal(d));
    }
    for d in KNIGHT_OFFSETS {
        assert!(!is_diagonal(d) && !is_orthogonal(d));
    }
}

#[test]
fn test_piece_chars() {
    for c in "PNBRQKpnbrqk".chars() {
        assert_eq!(Piece::from_char(c).unwrap().to_char(), c);
    }
    assert!(Piece::from_char('x').is_none());
}
