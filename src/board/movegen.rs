use std::collections::HashSet;

use crate::board::{Board, Position};
use crate::core::{CastlingSide, Colour, Coordinate, Move, PieceType};

/******************************************\
|==========================================|
|             Move Generation              |
|==========================================|
\******************************************/

/// Walk directions for rooks, and half of the queen's
#[rustfmt::skip]
const ROOK_DIRECTIONS: [Coordinate; 4] = [
    Coordinate::new( 1,  0),
    Coordinate::new(-1,  0),
    Coordinate::new( 0,  1),
    Coordinate::new( 0, -1),
];

/// Walk directions for bishops, and the queen's other half
#[rustfmt::skip]
const BISHOP_DIRECTIONS: [Coordinate; 4] = [
    Coordinate::new( 1,  1),
    Coordinate::new( 1, -1),
    Coordinate::new(-1,  1),
    Coordinate::new(-1, -1),
];

#[rustfmt::skip]
const KNIGHT_OFFSETS: [Coordinate; 8] = [
    Coordinate::new( 2,  1),
    Coordinate::new( 2, -1),
    Coordinate::new(-2,  1),
    Coordinate::new(-2, -1),
    Coordinate::new( 1,  2),
    Coordinate::new( 1, -2),
    Coordinate::new(-1,  2),
    Coordinate::new(-1, -2),
];

#[rustfmt::skip]
const KING_OFFSETS: [Coordinate; 8] = [
    Coordinate::new(-1, -1),
    Coordinate::new( 0, -1),
    Coordinate::new( 1, -1),
    Coordinate::new(-1,  0),
    Coordinate::new( 1,  0),
    Coordinate::new(-1,  1),
    Coordinate::new( 0,  1),
    Coordinate::new( 1,  1),
];

/// Emits a pawn arrival, expanding back-rank landings into the four promotions
fn add_pawn_move(moves: &mut HashSet<Move>, from: Coordinate, to: Coordinate, colour: Colour) {
    if to.rank == colour.promotion_rank() {
        for promotion in PieceType::PROMOTION_TARGETS {
            moves.insert(Move::Promotion {
                from,
                to,
                promotion,
            });
        }
    } else {
        moves.insert(Move::Basic { from, to });
    }
}

impl Position {
    /// Generates every legal move for the side to move
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::Position;
    ///
    /// let position = Position::default();
    /// assert_eq!(position.generate_moves().len(), 20);
    /// ```
    pub fn generate_moves(&self) -> HashSet<Move> {
        let mut moves = HashSet::new();

        for (square, _) in self.board.occupied_by(self.stm) {
            moves.extend(self.moves_for_piece(square, true));
        }

        moves
    }

    /// Generates the legal moves for the piece on `square`
    ///
    /// Panics if the square is empty. Callers pick squares off the board, so
    /// an empty source means the caller and the position have desynchronised.
    pub fn generate_moves_for_piece(&self, square: Coordinate) -> HashSet<Move> {
        self.moves_for_piece(square, true)
    }

    /// Checks whether a move is legal in this position
    ///
    /// This is the guard in front of [`Position::do_move`]: it accepts
    /// arbitrary move values and never panics, returning false for off-board
    /// squares, empty sources and opponent pieces. A move passes exactly when
    /// move generation would produce it.
    pub fn verify_move(&self, mv: Move) -> bool {
        if let Move::Castle { side, colour } = mv {
            return self.verify_castling_move(side, colour);
        }

        let from = mv.from();
        if !Board::contains(from) {
            return false;
        }

        let Some(piece) = self.board.on(from) else {
            return false;
        };
        if piece.colour() != self.stm {
            return false;
        }

        self.generate_moves_for_piece(from).contains(&mv)
    }

    /// Checks whether the side to move is checkmated
    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check(self.stm) && self.generate_moves().is_empty()
    }

    /// Checks whether the side to move is stalemated
    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check(self.stm) && self.generate_moves().is_empty()
    }

    /// Generates moves for the piece on `square`, optionally unfiltered
    ///
    /// With `must_evade_check` unset the raw pseudo-legal set comes back.
    /// The threat detector and the castling checks run in that mode, since
    /// filtering would send legality simulation and threat detection into
    /// mutual recursion.
    pub(crate) fn moves_for_piece(
        &self,
        square: Coordinate,
        must_evade_check: bool,
    ) -> HashSet<Move> {
        let piece = self
            .board
            .on(square)
            .expect("Tried to generate moves for an empty square");

        let mut moves = match piece.pt() {
            PieceType::King => self.king_moves(square, piece.colour()),
            PieceType::Queen => {
                let mut moves = self.slider_moves(square, piece.colour(), &ROOK_DIRECTIONS);
                moves.extend(self.slider_moves(square, piece.colour(), &BISHOP_DIRECTIONS));
                moves
            }
            PieceType::Rook => self.slider_moves(square, piece.colour(), &ROOK_DIRECTIONS),
            PieceType::Bishop => self.slider_moves(square, piece.colour(), &BISHOP_DIRECTIONS),
            PieceType::Knight => self.knight_moves(square, piece.colour()),
            PieceType::Pawn => self.pawn_moves(square, piece.colour()),
        };

        if must_evade_check {
            moves.retain(|&mv| self.move_evades_check(mv));
        }

        moves
    }

    /// Simulates a move on a clone and checks the mover's king survives it
    fn move_evades_check(&self, mv: Move) -> bool {
        let mover = match mv {
            Move::Castle { colour, .. } => colour,
            _ => self
                .board
                .on(mv.from())
                .expect("Legality simulation requires an occupied source square")
                .colour(),
        };

        let mut simulation = self.clone();
        simulation.do_move(mv);
        !simulation.is_in_check(mover)
    }

    fn slider_moves(
        &self,
        from: Coordinate,
        colour: Colour,
        directions: &[Coordinate; 4],
    ) -> HashSet<Move> {
        let mut moves = HashSet::new();

        for &direction in directions {
            let mut to = from + direction;

            while Board::contains(to) {
                match self.board.on(to) {
                    None => {
                        moves.insert(Move::Basic { from, to });
                    }
                    Some(occupant) => {
                        if occupant.colour() != colour {
                            moves.insert(Move::Basic { from, to });
                        }
                        break;
                    }
                }

                to = to + direction;
            }
        }

        moves
    }

    fn knight_moves(&self, from: Coordinate, colour: Colour) -> HashSet<Move> {
        let mut moves = HashSet::new();

        for &offset in &KNIGHT_OFFSETS {
            let to = from + offset;
            if !Board::contains(to) {
                continue;
            }

            if let Some(occupant) = self.board.on(to) {
                if occupant.colour() == colour {
                    continue;
                }
            }

            moves.insert(Move::Basic { from, to });
        }

        moves
    }

    fn king_moves(&self, from: Coordinate, colour: Colour) -> HashSet<Move> {
        let mut moves = HashSet::new();
        let enemy_king = self.board.king_square(!colour);

        for &offset in &KING_OFFSETS {
            let to = from + offset;
            if !Board::contains(to) {
                continue;
            }

            // Kings may never end up next to each other
            if Coordinate::is_adjacent(to, enemy_king) {
                continue;
            }

            if let Some(occupant) = self.board.on(to) {
                if occupant.colour() == colour {
                    continue;
                }
            }

            moves.insert(Move::Basic { from, to });
        }

        for side in [CastlingSide::King, CastlingSide::Queen] {
            if self.verify_castling_move(side, colour) {
                moves.insert(Move::Castle { side, colour });
            }
        }

        moves
    }

    fn pawn_moves(&self, from: Coordinate, colour: Colour) -> HashSet<Move> {
        let mut moves = HashSet::new();
        let forward = colour.forward();

        let ahead = from + forward;
        if Board::contains(ahead) && self.board.is_empty(ahead) {
            add_pawn_move(&mut moves, from, ahead, colour);

            let double_ahead = ahead + forward;
            if from.rank == colour.pawn_rank() && self.board.is_empty(double_ahead) {
                moves.insert(Move::DoublePush {
                    from,
                    to: double_ahead,
                });
            }
        }

        for file_offset in [-1, 1] {
            let diagonal = from + Coordinate::new(file_offset, forward.rank);
            if !Board::contains(diagonal) {
                continue;
            }

            if let Some(occupant) = self.board.on(diagonal) {
                if occupant.colour() != colour {
                    add_pawn_move(&mut moves, from, diagonal, colour);
                }
            }

            // The en-passant window belongs to the side to move, and its
            // target square is always empty, so this cannot collide with the
            // capture above
            if self.enpassant == Some(diagonal) && colour == self.stm {
                moves.insert(Move::EnPassant { from, to: diagonal });
            }
        }

        moves
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
