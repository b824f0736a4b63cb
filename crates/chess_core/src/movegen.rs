use crate::attacks::{Check, PinTable};
use crate::board::BoardState;
use crate::moves::Move;
use crate::types::*;

impl BoardState {
    /// Complete legal-move set for the side to move.
    ///
    /// Also refreshes the check, checkmate and stalemate flags, which are only
    /// meaningful until the next mutation.
    pub fn get_legal_moves(&mut self) -> Vec<Move> {
        let mover = self.side_to_move;
        let scan = self.scan_pins_and_checks();
        self.in_check = scan.in_check;
        let pins = PinTable::from_pins(&scan.pins);
        let king = self.king_locations[mover.idx()];

        let mut moves = Vec::with_capacity(64);
        match scan.checks.as_slice() {
            [] => {
                self.pseudo_legal_moves_into(&pins, &mut moves);
                self.castle_moves_into(king, &mut moves);
            }
            [check] => {
                self.pseudo_legal_moves_into(&pins, &mut moves);
                let targets = self.check_resolving_squares(king, check);
                moves.retain(|mv| {
                    mv.piece_moved.kind == PieceKind::King
                        || targets.contains(&mv.to)
                        || (mv.is_en_passant && mv.capture_square() == check.square)
                });
            }
            _ => {
                // Double check: only the king can move.
                self.king_moves_into(king, &mut moves);
            }
        }

        // Taking en passant lifts two pawns off one row, which can open a line
        // the single-blocker pin scan never sees. Verify those directly.
        moves.retain(|&mv| !mv.is_en_passant || self.leaves_king_safe(mv));

        if moves.is_empty() {
            self.checkmate = self.in_check;
            self.stalemate = !self.in_check;
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        moves
    }

    /// Pseudo-legal moves for the side to move, honoring pins. King moves are
    /// already filtered for safety; castling is not included.
    pub fn pseudo_legal_moves(&mut self, pins: &PinTable) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.pseudo_legal_moves_into(pins, &mut out);
        out
    }

    fn pseudo_legal_moves_into(&mut self, pins: &PinTable, out: &mut Vec<Move>) {
        let mover = self.side_to_move;
        for row in 0..8 {
            for col in 0..8 {
                let from = Square::new(row, col);
                let pc = match self.piece_at(from) {
                    Some(p) if p.color == mover => p,
                    _ => continue,
                };
                match pc.kind {
                    PieceKind::Pawn => self.pawn_moves(from, pc, pins, out),
                    PieceKind::Knight => self.knight_moves(from, pc, pins, out),
                    PieceKind::Bishop => self.sliding_moves(from, pc, &DIAGONAL, pins, out),
                    PieceKind::Rook => self.sliding_moves(from, pc, &ORTHOGONAL, pins, out),
                    PieceKind::Queen => self.sliding_moves(from, pc, &COMPASS, pins, out),
                    PieceKind::King => self.king_moves_into(from, out),
                }
            }
        }
    }

    fn pawn_moves(&self, from: Square, pawn: Piece, pins: &PinTable, out: &mut Vec<Move>) {
        let step = pawn.color.pawn_step();
        let home_row = pawn.color.back_row() + step;

        // Advances
        let forward = (step, 0);
        if pins.allows(from, forward) {
            if let Some(one) = from.offset(forward, 1) {
                if self.piece_at(one).is_none() {
                    out.push(Move::new(from, one, pawn, None));
                    if from.row == home_row {
                        if let Some(two) = from.offset(forward, 2) {
                            if self.piece_at(two).is_none() {
                                out.push(Move::new(from, two, pawn, None));
                            }
                        }
                    }
                }
            }
        }

        // Captures, both diagonals treated alike under pins
        for dc in [-1, 1] {
            let d = (step, dc);
            if !pins.allows(from, d) {
                continue;
            }
            let Some(to) = from.offset(d, 1) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color != pawn.color => {
                    out.push(Move::new(from, to, pawn, Some(target)));
                }
                Some(_) => {}
                None => {
                    if self.en_passant == Some(to) {
                        out.push(Move::en_passant(from, to, pawn));
                    }
                }
            }
        }
    }

    fn knight_moves(&self, from: Square, knight: Piece, pins: &PinTable, out: &mut Vec<Move>) {
        // A pinned knight can never stay on its pin line.
        if pins.is_pinned(from) {
            return;
        }
        for d in KNIGHT_OFFSETS {
            let Some(to) = from.offset(d, 1) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color == knight.color => {}
                target => out.push(Move::new(from, to, knight, target)),
            }
        }
    }

    fn sliding_moves(
        &self,
        from: Square,
        slider: Piece,
        dirs: &[Direction],
        pins: &PinTable,
        out: &mut Vec<Move>,
    ) {
        for &d in dirs {
            if !pins.allows(from, d) {
                continue;
            }
            for i in 1..8 {
                let Some(to) = from.offset(d, i) else {
                    break;
                };
                match self.piece_at(to) {
                    None => out.push(Move::new(from, to, slider, None)),
                    Some(target) => {
                        if target.color != slider.color {
                            out.push(Move::new(from, to, slider, Some(target)));
                        }
                        break;
                    }
                }
            }
        }
    }

    fn king_moves_into(&mut self, from: Square, out: &mut Vec<Move>) {
        let Some(king) = self.piece_at(from) else {
            return;
        };
        for d in COMPASS {
            let Some(to) = from.offset(d, 1) else {
                continue;
            };
            let target = self.piece_at(to);
            if matches!(target, Some(t) if t.color == king.color) {
                continue;
            }
            if self.king_safe_at(king.color, to) {
                out.push(Move::new(from, to, king, target));
            }
        }
    }

    /// Puts the cached king location on `to`, scans, and puts it back.
    fn king_safe_at(&mut self, color: Color, to: Square) -> bool {
        let home = self.king_locations[color.idx()];
        self.king_locations[color.idx()] = to;
        let in_check = self.scan_for(color).in_check;
        self.king_locations[color.idx()] = home;
        !in_check
    }

    fn leaves_king_safe(&mut self, mv: Move) -> bool {
        let mover = mv.piece_moved.color;
        self.make_move(mv);
        let safe = !self.is_king_attacked(mover);
        self.undo_move();
        safe
    }

    /// Squares a non-king piece may land on to answer a single check: the
    /// checker itself, plus every square between it and the king for sliders.
    fn check_resolving_squares(&self, king: Square, check: &Check) -> Vec<Square> {
        let checker = self.piece_at(check.square);
        if matches!(checker, Some(p) if p.kind == PieceKind::Knight) {
            return vec![check.square];
        }
        let mut squares = Vec::with_capacity(7);
        for i in 1..8 {
            let Some(sq) = king.offset(check.direction, i) else {
                break;
            };
            squares.push(sq);
            if sq == check.square {
                break;
            }
        }
        squares
    }

    fn castle_moves_into(&mut self, king: Square, out: &mut Vec<Move>) {
        if self.in_check {
            return;
        }
        let mover = self.side_to_move;
        let Some(king_piece) = self.piece_at(king) else {
            return;
        };
        if king != Square::new(mover.back_row(), 4) {
            return;
        }
        if self.castling.king_side(mover) {
            self.try_castle(king, king_piece, 1, out);
        }
        if self.castling.queen_side(mover) {
            self.try_castle(king, king_piece, -1, out);
        }
    }

    /// `side` is +1 toward the h-file, -1 toward the a-file.
    fn try_castle(&mut self, king: Square, king_piece: Piece, side: i8, out: &mut Vec<Move>) {
        let corner = Square::new(king.row, if side > 0 { 7 } else { 0 });
        if self.piece_at(corner) != Some(Piece::new(king_piece.color, PieceKind::Rook)) {
            return;
        }
        // Every square between king and rook must be empty.
        let mut col = king.col + side;
        while col != corner.col {
            if self.piece_at(Square::new(king.row, col)).is_some() {
                return;
            }
            col += side;
        }
        // The king may not pass through or land on an attacked square.
        let transit = Square::new(king.row, king.col + side);
        let dest = Square::new(king.row, king.col + 2 * side);
        if self.square_under_attack(transit) || self.square_under_attack(dest) {
            return;
        }
        out.push(Move::castle(king, dest, king_piece));
    }

    /// Whether the opponent of the side to move attacks `target`.
    ///
    /// Flips the side to move, regenerates the opponent's pseudo-legal move
    /// set, and tests whether any move lands on `target`.
    pub fn square_under_attack(&mut self, target: Square) -> bool {
        self.side_to_move = self.side_to_move.other();
        let replies = self.attack_moves();
        self.side_to_move = self.side_to_move.other();
        replies.iter().any(|mv| mv.to == target)
    }

    /// Pseudo-legal moves of the side to move as seen by an attack test: no
    /// pin or king-safety filtering, no castling, and pawns contribute their
    /// two capture diagonals instead of their advances.
    fn attack_moves(&self) -> Vec<Move> {
        let mover = self.side_to_move;
        let pins = PinTable::default();
        let mut out = Vec::with_capacity(64);
        for (from, pc) in self.pieces() {
            if pc.color != mover {
                continue;
            }
            match pc.kind {
                PieceKind::Pawn => {
                    for dc in [-1, 1] {
                        if let Some(to) = from.offset((mover.pawn_step(), dc), 1) {
                            out.push(Move::new(from, to, pc, self.piece_at(to)));
                        }
                    }
                }
                PieceKind::Knight => self.knight_moves(from, pc, &pins, &mut out),
                PieceKind::Bishop => self.sliding_moves(from, pc, &DIAGONAL, &pins, &mut out),
                PieceKind::Rook => self.sliding_moves(from, pc, &ORTHOGONAL, &pins, &mut out),
                PieceKind::Queen => self.sliding_moves(from, pc, &COMPASS, &pins, &mut out),
                PieceKind::King => {
                    for d in COMPASS {
                        if let Some(to) = from.offset(d, 1) {
                            out.push(Move::new(from, to, pc, self.piece_at(to)));
                        }
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
