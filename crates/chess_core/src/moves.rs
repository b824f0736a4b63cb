//! A single ply and everything needed to take it back.

use std::fmt;

use crate::types::*;

/// One executed or candidate ply.
///
/// A `Move` carries the piece that moved and the piece it captured, so undo
/// never has to look anywhere but the move history. Values are built by the
/// generator against the board they apply to and are meaningless elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    /// For en passant this is the pawn removed from beside the origin square.
    pub piece_captured: Option<Piece>,
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    /// Plain move or capture. Flags promotion when a pawn reaches the far row.
    pub fn new(from: Square, to: Square, piece_moved: Piece, piece_captured: Option<Piece>) -> Self {
        let is_promotion = piece_moved.kind == PieceKind::Pawn
            && to.row == piece_moved.color.other().back_row();
        Self {
            from,
            to,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    pub fn en_passant(from: Square, to: Square, pawn: Piece) -> Self {
        Self {
            from,
            to,
            piece_moved: pawn,
            piece_captured: Some(Piece::new(pawn.color.other(), PieceKind::Pawn)),
            is_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    pub fn castle(from: Square, to: Square, king: Piece) -> Self {
        Self {
            from,
            to,
            piece_moved: king,
            piece_captured: None,
            is_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// Origin/destination identity, 0..4095. Two moves from the same legal set
    /// are equal exactly when their ids are.
    pub fn id(&self) -> u16 {
        (self.from.idx() * 64 + self.to.idx()) as u16
    }

    /// Square whose piece is removed by this move.
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::new(self.from.row, self.to.col)
        } else {
            self.to
        }
    }

    /// Rook origin and destination for a castling move. King side when the king
    /// travels toward the h-file.
    pub fn castle_rook_squares(&self) -> (Square, Square) {
        let row = self.to.row;
        if self.to.col > self.from.col {
            (Square::new(row, 7), Square::new(row, self.to.col - 1))
        } else {
            (Square::new(row, 0), Square::new(row, self.to.col + 1))
        }
    }

    /// Four-character coordinate form, e.g. "e2e4".
    pub fn coords(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
