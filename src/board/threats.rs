use crate::board::Position;
use crate::core::{Colour, Coordinate, Move, PieceType};

/******************************************\
|==========================================|
|             Threat Detection             |
|==========================================|
\******************************************/

impl Position {
    /// Checks whether any piece of `by` attacks `square`
    ///
    /// A square is threatened when some piece of `by` has an unfiltered
    /// capture-shaped move onto it: a basic move, an en-passant capture, or a
    /// capture promotion. Quiet pawn pushes and push promotions never attack
    /// the square ahead of the pawn, and a pawn's diagonal only shows up as a
    /// threat while a move onto it exists. Castles attack nothing.
    ///
    /// Kings are special-cased: every square around `by`'s king counts as
    /// threatened without generating the king's moves. King move generation
    /// itself needs threat information, so answering king threats from pure
    /// adjacency is what keeps the two queries from recursing forever.
    /// `exclude_king` controls only whether the king joins the generation
    /// scan; the adjacency rule always applies.
    ///
    /// Panics if `by` has no king on the board.
    pub fn is_square_threatened(&self, square: Coordinate, by: Colour, exclude_king: bool) -> bool {
        for (source, piece) in self.board.occupied_by(by) {
            if exclude_king && piece.pt() == PieceType::King {
                continue;
            }

            let attacks_square = self
                .moves_for_piece(source, false)
                .into_iter()
                .any(|mv| match mv {
                    Move::Basic { from, to } => {
                        to == square && !(piece.pt() == PieceType::Pawn && from.file == to.file)
                    }
                    Move::EnPassant { to, .. } => to == square,
                    Move::Promotion { from, to, .. } => to == square && from.file != to.file,
                    _ => false,
                });
            if attacks_square {
                return true;
            }
        }

        Coordinate::is_adjacent(self.board.king_square(by), square)
    }

    /// Checks whether a colour's king is attacked
    ///
    /// The opposing king is left out of the generation scan and evaluated
    /// through the adjacency rule instead, keeping the query recursion-free.
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::{Position, core::Colour};
    ///
    /// let position = Position::default();
    /// assert!(!position.is_in_check(Colour::White));
    /// assert!(!position.is_in_check(Colour::Black));
    /// ```
    pub fn is_in_check(&self, colour: Colour) -> bool {
        let king = self.board.king_square(colour);
        self.is_square_threatened(king, !colour, true)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_threatens_occupied_diagonals_only() {
        let position = Position::from_fen("4k3/8/8/3p1p2/4P3/8/8/4K3 w - - 0 1").unwrap();

        assert!(position.is_square_threatened(coord("d5"), Colour::White, false));
        assert!(position.is_square_threatened(coord("f5"), Colour::White, false));

        // The square ahead of a pawn is pushed to, not attacked
        assert!(!position.is_square_threatened(coord("e5"), Colour::White, false));
        assert!(!position.is_square_threatened(coord("d4"), Colour::White, false));

        // The black pawns eye the white pawn but not the empty squares beside it
        assert!(position.is_square_threatened(coord("e4"), Colour::Black, false));
        assert!(!position.is_square_threatened(coord("c4"), Colour::Black, false));
        assert!(!position.is_square_threatened(coord("d4"), Colour::Black, false));
    }

    #[test]
    fn test_knight_threats() {
        let position = Position::from_fen("4k3/8/8/8/3N4/8/8/4K3 w - - 0 1").unwrap();

        for target in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
            assert!(position.is_square_threatened(coord(target), Colour::White, false));
        }
        assert!(!position.is_square_threatened(coord("d5"), Colour::White, false));
        assert!(!position.is_square_threatened(coord("c4"), Colour::White, false));
    }

    #[test]
    fn test_slider_threats_stop_at_blockers() {
        let position = Position::from_fen("4k3/8/8/8/1R2p3/8/8/4K3 w - - 0 1").unwrap();

        assert!(position.is_square_threatened(coord("a4"), Colour::White, false));
        assert!(position.is_square_threatened(coord("c4"), Colour::White, false));
        assert!(position.is_square_threatened(coord("d4"), Colour::White, false));
        // The blocking pawn's square is attacked, squares behind it are not
        assert!(position.is_square_threatened(coord("e4"), Colour::White, false));
        assert!(!position.is_square_threatened(coord("f4"), Colour::White, false));
        assert!(!position.is_square_threatened(coord("h4"), Colour::White, false));

        assert!(position.is_square_threatened(coord("b8"), Colour::White, false));
        assert!(position.is_square_threatened(coord("b1"), Colour::White, false));
    }

    #[test]
    fn test_king_adjacency_is_unconditional() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();

        for target in ["d1", "d2", "e2", "f2", "f1"] {
            assert!(position.is_square_threatened(coord(target), Colour::White, false));
            // Excluding the king from the scan does not hide its reach
            assert!(position.is_square_threatened(coord(target), Colour::White, true));
        }

        assert!(!position.is_square_threatened(coord("e3"), Colour::White, true));
        assert!(!position.is_square_threatened(coord("c1"), Colour::White, true));
        assert!(position.is_square_threatened(coord("e7"), Colour::Black, true));
    }

    #[test]
    fn test_capture_promotion_threatens_back_rank() {
        let position = Position::from_fen("3k1r2/4P3/8/8/8/8/8/4K3 b - - 0 1").unwrap();

        // The pawn's capture squares promote, yet still attack
        assert!(position.is_square_threatened(coord("d8"), Colour::White, false));
        assert!(position.is_square_threatened(coord("f8"), Colour::White, false));
        // The push promotion square is not attacked
        assert!(!position.is_square_threatened(coord("e8"), Colour::White, false));

        assert!(position.is_in_check(Colour::Black));
    }

    #[test]
    fn test_enpassant_threatens_target_square() {
        let position =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 3")
                .unwrap();

        assert!(position.is_square_threatened(coord("e3"), Colour::Black, false));
    }

    #[test]
    fn test_is_in_check_rook_on_file() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();

        assert!(position.is_in_check(Colour::Black));
        assert!(!position.is_in_check(Colour::White));
    }

    #[test]
    fn test_is_in_check_blocked_by_own_piece() {
        let position = Position::from_fen("4k3/4n3/8/8/8/8/8/4RK2 b - - 0 1").unwrap();

        assert!(!position.is_in_check(Colour::Black));
    }

    #[test]
    fn test_is_in_check_pawn() {
        let position = Position::from_fen("8/8/8/3k4/2P5/8/8/4K3 b - - 0 1").unwrap();

        assert!(position.is_in_check(Colour::Black));
        assert!(!position.is_in_check(Colour::White));
    }

    #[test]
    fn test_start_position_threats() {
        let position = Position::default();

        assert!(!position.is_in_check(Colour::White));
        assert!(!position.is_in_check(Colour::Black));
        // Knights reach past the pawn wall, nothing reaches the fourth rank
        assert!(position.is_square_threatened(coord("f3"), Colour::White, false));
        assert!(position.is_square_threatened(coord("f6"), Colour::Black, false));
        assert!(!position.is_square_threatened(coord("e4"), Colour::White, false));
        assert!(!position.is_square_threatened(coord("e5"), Colour::Black, false));
    }
}
