use crate::board::Position;
use crate::core::{Castling, CastlingSide, Colour, Coordinate, Move, Piece, PieceType};

/******************************************\
|==========================================|
|               Move Applier               |
|==========================================|
\******************************************/

/// Castling rights mask for a vacated or landed-on square
///
/// Only the six king and rook home squares ever carry a right, so the piece
/// kind never needs inspecting: while a right is alive its square can only be
/// left by the king or rook itself, or landed on by a capture of it.
const fn rights_mask(square: Coordinate) -> Castling {
    match (square.file, square.rank) {
        (0, 0) => Castling(Castling::ALL.0 & !Castling::WQ.0),
        (4, 0) => Castling(Castling::ALL.0 & !Castling::WHITE_CASTLING.0),
        (7, 0) => Castling(Castling::ALL.0 & !Castling::WK.0),
        (0, 7) => Castling(Castling::ALL.0 & !Castling::BQ.0),
        (4, 7) => Castling(Castling::ALL.0 & !Castling::BLACK_CASTLING.0),
        (7, 7) => Castling(Castling::ALL.0 & !Castling::BK.0),
        _ => Castling::ALL,
    }
}

/// Castling rights a move leaves intact, from the squares it touches
const fn surviving_rights(mv: Move) -> Castling {
    Castling(rights_mask(mv.from()).0 & rights_mask(mv.to()).0)
}

impl Position {
    /// Applies a move to the position
    ///
    /// The move must have passed [`Position::verify_move`]; nothing is
    /// re-checked here. Applying a move whose source square is empty panics,
    /// since it means a caller skipped verification.
    ///
    /// Beyond the board mutation this maintains the bookkeeping state:
    /// castling rights shrink by the squares the move touches, the halfmove
    /// clock resets on captures and pawn moves and ticks otherwise, the
    /// fullmove counter advances after Black's move, the en-passant window
    /// opens for a double push and closes for everything else, and the side
    /// to move flips.
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::{Position, core::Move};
    ///
    /// let mut position = Position::default();
    /// let mv = Move::DoublePush {
    ///     from: "e2".parse().unwrap(),
    ///     to: "e4".parse().unwrap(),
    /// };
    /// assert!(position.verify_move(mv));
    /// position.do_move(mv);
    /// assert_eq!(position.ep(), Some("e3".parse().unwrap()));
    /// ```
    pub fn do_move(&mut self, mv: Move) {
        self.castle.mask(surviving_rights(mv));

        let mut new_enpassant = None;

        match mv {
            Move::Basic { from, to } => {
                let piece = self
                    .board
                    .on(from)
                    .expect("Tried to apply a move from an empty square");
                let captured = self.board.move_piece(from, to);

                if captured.is_some() || piece.pt() == PieceType::Pawn {
                    self.halfmove_clock = 0;
                } else {
                    self.halfmove_clock = self.halfmove_clock.saturating_add(1);
                }
            }
            Move::DoublePush { from, to } => {
                let pawn = self
                    .board
                    .on(from)
                    .expect("Tried to apply a move from an empty square");
                self.board.move_piece(from, to);
                self.halfmove_clock = 0;
                new_enpassant = Some(from + pawn.colour().forward());
            }
            Move::EnPassant { from, to } => {
                let pawn = self
                    .board
                    .on(from)
                    .expect("Tried to apply a move from an empty square");
                self.board.move_piece(from, to);
                // The captured pawn sits behind the target square, not on it
                self.board.remove_piece(to - pawn.colour().forward());
                self.halfmove_clock = 0;
            }
            Move::Promotion {
                from,
                to,
                promotion,
            } => {
                let pawn = self.board.remove_piece(from);
                if !self.board.is_empty(to) {
                    self.board.remove_piece(to);
                }
                self.board
                    .add_piece(to, Piece::from_parts(pawn.colour(), promotion));
                self.halfmove_clock = 0;
            }
            Move::Castle { side, colour } => {
                let home_rank = colour.home_rank();
                self.board.move_piece(
                    Coordinate::new(CastlingSide::KING_START_FILE, home_rank),
                    Coordinate::new(side.king_target_file(), home_rank),
                );
                self.board.move_piece(
                    Coordinate::new(side.rook_start_file(), home_rank),
                    Coordinate::new(side.rook_target_file(), home_rank),
                );
                // Neither a capture nor a pawn move
                self.halfmove_clock = self.halfmove_clock.saturating_add(1);
            }
        }

        if self.stm == Colour::Black {
            self.fullmoves += 1;
        }
        self.enpassant = new_enpassant;
        self.stm = !self.stm;
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
