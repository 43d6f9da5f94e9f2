// Board module exports

pub mod castling;
pub mod fen;
pub mod movegen;
pub mod movement;
pub mod threats;

pub use fen::{FenParseError, START_FEN};

use crate::core::{Castling, Colour, Coordinate, Piece, PieceType};

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// # Board representation
///
/// An 8x8 matrix of optional pieces, indexed `[rank][file]`.
///
/// The board itself knows nothing about legality; it only answers occupancy
/// queries and performs the three primitive mutations the move applier is
/// built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    /// Board edge length in squares
    pub const SIZE: i8 = 8;

    /// Creates a board with no pieces on it
    pub const fn empty() -> Board {
        Board([[None; 8]; 8])
    }

    /// Checks whether a coordinate names a real square
    ///
    /// Coordinate arithmetic is free to wander off the board; this is the
    /// single place bounds are enforced.
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::{Board, core::Coordinate};
    ///
    /// assert!(Board::contains(Coordinate::new(0, 0)));
    /// assert!(Board::contains(Coordinate::new(7, 7)));
    /// assert!(!Board::contains(Coordinate::new(8, 0)));
    /// assert!(!Board::contains(Coordinate::new(0, -1)));
    /// ```
    pub const fn contains(coordinate: Coordinate) -> bool {
        coordinate.file >= 0
            && coordinate.file < Board::SIZE
            && coordinate.rank >= 0
            && coordinate.rank < Board::SIZE
    }

    /// Returns the piece standing on a square, if any
    #[inline]
    pub fn on(&self, square: Coordinate) -> Option<Piece> {
        debug_assert!(Board::contains(square), "Square out of bounds");
        self.0[square.rank as usize][square.file as usize]
    }

    /// Checks whether a square has no piece on it
    #[inline]
    pub fn is_empty(&self, square: Coordinate) -> bool {
        self.on(square).is_none()
    }

    /// Places a piece on an empty square
    pub(crate) fn add_piece(&mut self, square: Coordinate, piece: Piece) {
        debug_assert!(self.is_empty(square), "Square already occupied");
        self.0[square.rank as usize][square.file as usize] = Some(piece);
    }

    /// Removes and returns the piece on a square
    ///
    /// Panics if the square is empty; the callers already verified occupancy.
    pub(crate) fn remove_piece(&mut self, square: Coordinate) -> Piece {
        debug_assert!(Board::contains(square), "Square out of bounds");
        self.0[square.rank as usize][square.file as usize]
            .take()
            .expect("Tried to remove a piece from an empty square")
    }

    /// Relocates the piece on `from` to `to`, returning any captured occupant
    ///
    /// Panics if `from` is empty.
    pub(crate) fn move_piece(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        let piece = self.remove_piece(from);
        debug_assert!(Board::contains(to), "Square out of bounds");
        self.0[to.rank as usize][to.file as usize].replace(piece)
    }

    /// Locates the king of a colour
    ///
    /// A position without both kings is corrupt; this panics rather than
    /// letting the engine limp on with it.
    pub fn king_square(&self, colour: Colour) -> Coordinate {
        self.occupied_by(colour)
            .find(|(_, piece)| piece.pt() == PieceType::King)
            .map(|(square, _)| square)
            .unwrap_or_else(|| panic!("No {colour:?} king on the board"))
    }

    /// Iterates over every square occupied by a piece of `colour`
    pub fn occupied_by(&self, colour: Colour) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.squares()
            .filter(move |(_, piece)| piece.colour() == colour)
    }

    /// Iterates over every occupied square, rank by rank
    fn squares(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        (0..Board::SIZE).flat_map(move |rank| {
            (0..Board::SIZE).filter_map(move |file| {
                let coordinate = Coordinate::new(file, rank);
                self.on(coordinate).map(|piece| (coordinate, piece))
            })
        })
    }
}

/******************************************\
|==========================================|
|                 Position                 |
|==========================================|
\******************************************/

/// # Position representation
///
/// The aggregate state of a game: the board plus side to move, castling
/// rights, en-passant target and the two move counters.
///
/// A live `Position` is only ever mutated through
/// [`do_move`](Position::do_move); the legality filter works on structural
/// clones and discards them, so a rejected simulation can never corrupt the
/// real state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) stm: Colour,
    pub(crate) castle: Castling,
    pub(crate) enpassant: Option<Coordinate>,
    pub(crate) halfmove_clock: u8,
    pub(crate) fullmoves: u16,
}

impl Default for Position {
    /// The standard initial position
    fn default() -> Position {
        Position::from_fen(START_FEN).unwrap()
    }
}

impl Position {
    /// Creates a position with an empty board and no rights set
    pub fn empty() -> Position {
        Position {
            board: Board::empty(),
            stm: Colour::White,
            castle: Castling::NONE,
            enpassant: None,
            halfmove_clock: 0,
            fullmoves: 1,
        }
    }

    /// The board grid
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece standing on a square, if any
    #[inline]
    pub fn on(&self, square: Coordinate) -> Option<Piece> {
        self.board.on(square)
    }

    /// The side to move
    #[inline]
    pub fn stm(&self) -> Colour {
        self.stm
    }

    /// The castling rights still available
    #[inline]
    pub fn castling(&self) -> Castling {
        self.castle
    }

    /// The en-passant target square, set for exactly one ply after a double push
    #[inline]
    pub fn ep(&self) -> Option<Coordinate> {
        self.enpassant
    }

    /// Plies since the last capture or pawn move
    #[inline]
    pub fn halfmove_clock(&self) -> u8 {
        self.halfmove_clock
    }

    /// The fullmove number, starting at 1 and incremented after Black moves
    #[inline]
    pub fn fullmoves(&self) -> u16 {
        self.fullmoves
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "\n     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in (0..Board::SIZE).rev() {
            write!(f, " {}   |", rank + 1)?;

            for file in 0..Board::SIZE {
                let square = Coordinate::new(file, rank);
                let cell = match self.board.on(square) {
                    Some(piece) => piece.to_string(),
                    None => " ".to_string(),
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Current Side: {:?}", self.stm)?;
        writeln!(f, "Castling: {}", self.castle)?;
        writeln!(
            f,
            "En Passant Square: {}",
            match self.enpassant {
                Some(square) => square.to_string(),
                None => "None".to_string(),
            }
        )?;
        writeln!(f, "Half Move Clock: {}", self.halfmove_clock)?;
        writeln!(f, "Full Move: {}", self.fullmoves)?;
        writeln!(f, "Fen: {}", self.fen())?;

        Ok(())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
