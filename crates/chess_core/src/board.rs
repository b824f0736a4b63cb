use crate::error::{ChessError, ChessResult};
use crate::moves::Move;
use crate::types::*;

pub type Grid = [[Option<Piece>; 8]; 8];

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CastlingRights {
    pub wks: bool,
    pub wqs: bool,
    pub bks: bool,
    pub bqs: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wks: true,
        wqs: true,
        bks: true,
        bqs: true,
    };

    pub fn king_side(&self, c: Color) -> bool {
        match c {
            Color::White => self.wks,
            Color::Black => self.bks,
        }
    }

    pub fn queen_side(&self, c: Color) -> bool {
        match c {
            Color::White => self.wqs,
            Color::Black => self.bqs,
        }
    }

    fn revoke_both(&mut self, c: Color) {
        match c {
            Color::White => {
                self.wks = false;
                self.wqs = false;
            }
            Color::Black => {
                self.bks = false;
                self.bqs = false;
            }
        }
    }

    /// Revokes the right tied to the rook corner `sq`, if `sq` is one for `c`.
    fn revoke_corner(&mut self, c: Color, sq: Square) {
        if sq.row != c.back_row() {
            return;
        }
        match (c, sq.col) {
            (Color::White, 0) => self.wqs = false,
            (Color::White, 7) => self.wks = false,
            (Color::Black, 0) => self.bqs = false,
            (Color::Black, 7) => self.bks = false,
            _ => {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Everything that defines a position, without history or derived flags.
/// Two states with equal snapshots are the same position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: Grid,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub king_locations: [Square; 2],
}

/// The single mutable source of truth for a game.
///
/// All changes go through [`BoardState::make_move`] and
/// [`BoardState::undo_move`]. The history stacks always satisfy
/// `castling_log.len() == en_passant_log.len() == move_log.len() + 1`.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) king_locations: [Square; 2],
    pub(crate) castling: CastlingRights,
    pub(crate) castling_log: Vec<CastlingRights>,
    pub(crate) en_passant: Option<Square>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) move_log: Vec<Move>,
    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl BoardState {
    pub fn new_game() -> Self {
        let mut grid: Grid = [[None; 8]; 8];
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            grid[0][col] = Some(Piece::new(Color::Black, kind));
            grid[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            grid[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            grid[7][col] = Some(Piece::new(Color::White, kind));
        }
        Self::from_parts(
            grid,
            Color::White,
            CastlingRights::ALL,
            None,
            [Square::new(7, 4), Square::new(0, 4)],
        )
    }

    fn from_parts(
        grid: Grid,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Square>,
        king_locations: [Square; 2],
    ) -> Self {
        Self {
            grid,
            side_to_move,
            king_locations,
            castling,
            castling_log: vec![castling],
            en_passant,
            en_passant_log: vec![en_passant],
            move_log: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
        }
    }

    /// Sets up a position from Forsyth-Edwards Notation. The halfmove and
    /// fullmove fields are optional and ignored.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(ChessError::fen("expected at least 4 fields"));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::fen("board section must have 8 ranks"));
        }

        let mut grid: Grid = [[None; 8]; 8];
        let mut kings: [Option<Square>; 2] = [None, None];
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(ChessError::fen(format!("invalid empty run `{ch}`")));
                    }
                    col += d as i8;
                } else {
                    let piece = Piece::from_char(ch)
                        .ok_or_else(|| ChessError::fen(format!("invalid piece char `{ch}`")))?;
                    let sq = Square::checked(row as i8, col)
                        .ok_or_else(|| ChessError::fen(format!("too many files in rank {}", 8 - row)))?;
                    if piece.kind == PieceKind::King {
                        if kings[piece.color.idx()].is_some() {
                            return Err(ChessError::fen(format!("two {:?} kings", piece.color)));
                        }
                        kings[piece.color.idx()] = Some(sq);
                    }
                    grid[sq.row as usize][sq.col as usize] = Some(piece);
                    col += 1;
                }
                if col > 8 {
                    return Err(ChessError::fen(format!("too many files in rank {}", 8 - row)));
                }
            }
            if col != 8 {
                return Err(ChessError::fen(format!("not enough files in rank {}", 8 - row)));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ChessError::fen(format!("invalid side to move `{other}`"))),
        };

        let mut castling = CastlingRights::default();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wks = true,
                    'Q' => castling.wqs = true,
                    'k' => castling.bks = true,
                    'q' => castling.bqs = true,
                    _ => return Err(ChessError::fen(format!("invalid castling char `{c}`"))),
                }
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            Some(
                Square::from_coord(parts[3])
                    .ok_or_else(|| ChessError::InvalidSquare(parts[3].to_string()))?,
            )
        };

        let (Some(white_king), Some(black_king)) = (kings[0], kings[1]) else {
            return Err(ChessError::fen("each side needs exactly one king"));
        };

        if let Some(target) = en_passant {
            check_en_passant_target(&grid, side_to_move, target)?;
        }

        Ok(Self::from_parts(
            grid,
            side_to_move,
            castling,
            en_passant,
            [white_king, black_king],
        ))
    }

    /// Position part of FEN; clocks are written as `0 1`.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for row in 0..8 {
            let mut empty = 0;
            for col in 0..8 {
                match self.grid[row][col] {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let c = self.castling;
        let mut rights = String::new();
        for (held, ch) in [(c.wks, 'K'), (c.wqs, 'Q'), (c.bks, 'k'), (c.bqs, 'q')] {
            if held {
                rights.push(ch);
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }
        out.push_str(&rights);

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }
        out.push_str(" 0 1");
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize]
    }

    pub(crate) fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.grid[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn is_white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    pub fn king_location(&self, c: Color) -> Square {
        self.king_locations[c.idx()]
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_log
    }

    pub fn castling_history(&self) -> &[CastlingRights] {
        &self.castling_log
    }

    /// Whether the side to move was in check at the last legal-move request.
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Valid only right after [`BoardState::get_legal_moves`].
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Valid only right after [`BoardState::get_legal_moves`].
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn outcome(&self) -> GameOutcome {
        if self.checkmate {
            GameOutcome::Checkmate
        } else if self.stalemate {
            GameOutcome::Stalemate
        } else {
            GameOutcome::Ongoing
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            king_locations: self.king_locations,
        }
    }

    /// Occupied squares with their pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8i8).flat_map(move |row| {
            (0..8i8).filter_map(move |col| {
                let sq = Square::new(row, col);
                self.piece_at(sq).map(|pc| (sq, pc))
            })
        })
    }

    /// Applies `mv`, which must come from the latest legal-move set.
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.piece_moved.color;

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(mv.piece_moved));
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.other();

        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[mover.idx()] = mv.to;
        }

        // Queen-only promotion
        if mv.is_promotion {
            self.set_piece(mv.to, Some(Piece::new(mover, PieceKind::Queen)));
        }

        if mv.is_en_passant {
            self.set_piece(mv.capture_square(), None);
        }

        self.en_passant =
            if mv.piece_moved.kind == PieceKind::Pawn && (mv.from.row - mv.to.row).abs() == 2 {
                Some(Square::new((mv.from.row + mv.to.row) / 2, mv.to.col))
            } else {
                None
            };

        if mv.is_castle {
            let (rook_from, rook_to) = mv.castle_rook_squares();
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_from, None);
            self.set_piece(rook_to, rook);
        }

        self.update_castling_rights(&mv);
        self.castling_log.push(self.castling);
        self.en_passant_log.push(self.en_passant);
    }

    /// Takes back the last move. Does nothing at the start of history.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let mover = mv.piece_moved.color;

        self.set_piece(mv.from, Some(mv.piece_moved));
        if mv.is_en_passant {
            self.set_piece(mv.to, None);
            self.set_piece(mv.capture_square(), mv.piece_captured);
        } else {
            self.set_piece(mv.to, mv.piece_captured);
        }
        self.side_to_move = self.side_to_move.other();

        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[mover.idx()] = mv.from;
        }

        if mv.is_castle {
            let (rook_from, rook_to) = mv.castle_rook_squares();
            let rook = self.piece_at(rook_to);
            self.set_piece(rook_to, None);
            self.set_piece(rook_from, rook);
        }

        self.castling_log.pop();
        if let Some(&rights) = self.castling_log.last() {
            self.castling = rights;
        }
        self.en_passant_log.pop();
        if let Some(&target) = self.en_passant_log.last() {
            self.en_passant = target;
        }

        self.checkmate = false;
        self.stalemate = false;
    }

    fn update_castling_rights(&mut self, mv: &Move) {
        let mover = mv.piece_moved.color;
        match mv.piece_moved.kind {
            PieceKind::King => self.castling.revoke_both(mover),
            PieceKind::Rook => self.castling.revoke_corner(mover, mv.from),
            _ => {}
        }
        if let Some(captured) = mv.piece_captured {
            if captured.kind == PieceKind::Rook {
                self.castling.revoke_corner(captured.color, mv.to);
            }
        }
    }
}

/// The en passant square must be the one a pawn of the side not to move just
/// skipped: empty, on that pawn's third row, with the pawn in front of it and
/// its origin square vacated.
fn check_en_passant_target(grid: &Grid, side_to_move: Color, target: Square) -> ChessResult<()> {
    let pusher = side_to_move.other();
    let step = pusher.pawn_step();
    let at = |sq: Square| grid[sq.row as usize][sq.col as usize];

    let consistent = target.row == pusher.back_row() + 2 * step
        && at(target).is_none()
        && at(Square::new(target.row - step, target.col)).is_none()
        && at(Square::new(target.row + step, target.col)) == Some(Piece::new(pusher, PieceKind::Pawn));
    if consistent {
        Ok(())
    } else {
        Err(ChessError::fen(format!(
            "en passant square {target} does not follow a double pawn push"
        )))
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
