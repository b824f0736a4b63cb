//! Check and pin detection by ray-casting out from a king.
//!
//! The scan walks the 8 compass rays from the king square and probes the 8
//! knight offsets. It is recomputed on every legal-move request and never
//! cached across a board mutation.

use crate::board::BoardState;
use crate::types::*;

/// An allied piece that may only move along `direction` (either sense).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    /// Direction from the king outward through the pinned piece.
    pub direction: Direction,
}

/// An enemy piece giving check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Check {
    pub square: Square,
    /// Ray direction from the king, or the knight offset for knight checks.
    pub direction: Direction,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

/// Read-only square → pin axis lookup, built once per legal-move request.
#[derive(Clone, Debug)]
pub struct PinTable {
    axes: [Option<Direction>; 64],
}

impl Default for PinTable {
    fn default() -> Self {
        Self { axes: [None; 64] }
    }
}

impl PinTable {
    pub fn from_pins(pins: &[Pin]) -> Self {
        let mut table = Self::default();
        for pin in pins {
            table.axes[pin.square.idx()] = Some(pin.direction);
        }
        table
    }

    pub fn axis(&self, sq: Square) -> Option<Direction> {
        self.axes[sq.idx()]
    }

    pub fn is_pinned(&self, sq: Square) -> bool {
        self.axes[sq.idx()].is_some()
    }

    /// Whether the piece on `sq` may step in direction `d`.
    pub fn allows(&self, sq: Square, d: Direction) -> bool {
        match self.axis(sq) {
            None => true,
            Some(axis) => axis == d || reverse(axis) == d,
        }
    }
}

impl BoardState {
    /// Scans for checks and pins against the side to move.
    pub fn scan_pins_and_checks(&self) -> ScanResult {
        self.scan_for(self.side_to_move)
    }

    /// Scans from the cached king square of `ally`.
    pub fn scan_for(&self, ally: Color) -> ScanResult {
        let king = self.king_locations[ally.idx()];
        let enemy = ally.other();
        let mut result = ScanResult::default();

        for d in COMPASS {
            let mut candidate_pin: Option<Pin> = None;
            for i in 1..8 {
                let Some(sq) = king.offset(d, i) else {
                    break;
                };
                let Some(pc) = self.piece_at(sq) else {
                    continue;
                };
                if pc.color == ally {
                    // The king itself is transparent so a hypothetical king
                    // square still sees checkers behind the real one.
                    if pc.kind == PieceKind::King {
                        continue;
                    }
                    if candidate_pin.is_some() {
                        break;
                    }
                    candidate_pin = Some(Pin {
                        square: sq,
                        direction: d,
                    });
                    continue;
                }

                debug_assert_eq!(pc.color, enemy);
                if attacks_along(pc, d, i) {
                    match candidate_pin {
                        None => {
                            result.in_check = true;
                            result.checks.push(Check {
                                square: sq,
                                direction: d,
                            });
                        }
                        Some(pin) => result.pins.push(pin),
                    }
                }
                break;
            }
        }

        for d in KNIGHT_OFFSETS {
            let Some(sq) = king.offset(d, 1) else {
                continue;
            };
            if self.piece_at(sq) == Some(Piece::new(enemy, PieceKind::Knight)) {
                result.in_check = true;
                result.checks.push(Check {
                    square: sq,
                    direction: d,
                });
            }
        }

        result
    }

    /// Whether `color`'s king is currently attacked.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.scan_for(color).in_check
    }
}

/// Whether enemy piece `pc`, found `distance` squares from the king along `d`,
/// attacks back down that ray.
fn attacks_along(pc: Piece, d: Direction, distance: i8) -> bool {
    match pc.kind {
        PieceKind::Rook => is_orthogonal(d),
        PieceKind::Bishop => is_diagonal(d),
        PieceKind::Queen => true,
        PieceKind::King => distance == 1,
        // The king must be one pawn step ahead of the pawn, on a diagonal.
        PieceKind::Pawn => distance == 1 && is_diagonal(d) && d.0 == -pc.color.pawn_step(),
        PieceKind::Knight => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
