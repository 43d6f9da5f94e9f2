use crate::board::Position;
use crate::core::{Castling, CastlingSide, Colour, Coordinate};

/******************************************\
|==========================================|
|            Castling Legality             |
|==========================================|
\******************************************/

/// Files strictly between the king and the rook, which must all be empty
const fn intermediary_files(side: CastlingSide) -> &'static [i8] {
    match side {
        CastlingSide::King => &[5, 6],
        CastlingSide::Queen => &[1, 2, 3],
    }
}

/// Files the king crosses or lands on, which must not be attacked
const fn passthrough_files(side: CastlingSide) -> &'static [i8] {
    match side {
        CastlingSide::King => &[5, 6],
        CastlingSide::Queen => &[2, 3],
    }
}

impl Position {
    /// Checks whether a colour may castle to a side right now
    ///
    /// The move is legal only when every one of these holds:
    /// - the colour is the side to move
    /// - the matching castling right is still set
    /// - the king is not currently in check
    /// - every intermediary square is empty
    /// - no passthrough square is attacked by the opponent
    ///
    /// The passthrough scan uses the threat detector with the opposing king
    /// excluded from move generation. Its adjacency rule still reports squares
    /// next to that king as attacked, which both avoids recursion and stops
    /// the king from castling into the enemy king's reach.
    ///
    /// The side-to-move gate comes first. It makes the query safe to ask for
    /// either colour at any time, and it cuts the recursion through
    /// [`Position::is_in_check`] short when the threat detector walks the
    /// opponent's king.
    pub(crate) fn verify_castling_move(&self, side: CastlingSide, colour: Colour) -> bool {
        if colour != self.stm {
            return false;
        }

        if !self.castle.has(Castling::from_parts(colour, side)) {
            return false;
        }

        if self.is_in_check(colour) {
            return false;
        }

        let home_rank = colour.home_rank();

        for &file in intermediary_files(side) {
            if !self.board.is_empty(Coordinate::new(file, home_rank)) {
                return false;
            }
        }

        for &file in passthrough_files(side) {
            if self.is_square_threatened(Coordinate::new(file, home_rank), !colour, true) {
                return false;
            }
        }

        true
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
