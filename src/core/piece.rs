use thiserror::Error;

use crate::core::Colour;

/******************************************\
|==========================================|
|                Piece Type                |
|==========================================|
\******************************************/

/// # Piece Type representation
///
/// - Represents the different chess piece types
#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
   King, Queen, Rook, Bishop, Knight, Pawn,
}

impl PieceType {
    /// Number of elements in the PieceType enum
    pub const NUM: usize = 6;

    /// Piece types a pawn may promote to, in generation order
    pub const PROMOTION_TARGETS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];
}

crate::impl_from_to_primitive!(PieceType);
crate::impl_enum_iter!(PieceType);

/// String to convert from piece type to its string representation, indexed by discriminant
const PIECE_TYPE_STR: &str = "kqrbnp";

/******************************************\
|==========================================|
|                  Piece                   |
|==========================================|
\******************************************/

/// # Piece representation
///
/// - Represents a coloured chess piece as a (colour, piece type) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    colour: Colour,
    piece_type: PieceType,
}

impl Piece {
    /// Combines a colour and piece type pair to create a piece
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Piece, Colour, PieceType};
    ///
    /// let pawn = Piece::from_parts(Colour::White, PieceType::Pawn);
    /// assert_eq!(pawn.colour(), Colour::White);
    /// assert_eq!(pawn.pt(), PieceType::Pawn);
    /// ```
    pub const fn from_parts(colour: Colour, piece_type: PieceType) -> Self {
        Piece { colour, piece_type }
    }

    /// Returns the piece type of the piece
    pub const fn pt(self) -> PieceType {
        self.piece_type
    }

    /// Returns the colour of the piece
    pub const fn colour(self) -> Colour {
        self.colour
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for PieceType {
    /// Displays the piece type as its lowercase character (Queen => 'q')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let piece_char = PIECE_TYPE_STR.chars().nth(self.index()).unwrap();
        write!(f, "{}", piece_char)
    }
}

impl std::fmt::Display for Piece {
    /// Displays the piece as its FEN character, uppercase for White
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let piece_char = PIECE_TYPE_STR.chars().nth(self.piece_type.index()).unwrap();
        let piece_char = match self.colour {
            Colour::White => piece_char.to_ascii_uppercase(),
            Colour::Black => piece_char,
        };
        write!(f, "{}", piece_char)
    }
}

/******************************************\
|==========================================|
|                Parse Piece               |
|==========================================|
\******************************************/

impl std::str::FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse the piece character into a piece, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Piece, Colour, PieceType, ParsePieceError};
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Piece::from_str("P").unwrap(), Piece::from_parts(Colour::White, PieceType::Pawn));
    /// assert_eq!("k".parse::<Piece>().unwrap(), Piece::from_parts(Colour::Black, PieceType::King));
    /// assert!(matches!("X".parse::<Piece>(), Err(ParsePieceError::InvalidChar('X'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(ParsePieceError::InvalidLength(s.len()));
        }

        let piece_char = s.chars().next().ok_or(ParsePieceError::InvalidLength(0))?;
        let colour = match piece_char.is_ascii_uppercase() {
            true => Colour::White,
            false => Colour::Black,
        };
        let index = PIECE_TYPE_STR
            .chars()
            .position(|c| c == piece_char.to_ascii_lowercase())
            .ok_or(ParsePieceError::InvalidChar(piece_char))? as u8;

        unsafe { Ok(Piece::from_parts(colour, PieceType::from_unchecked(index))) }
    }
}

/******************************************\
|==========================================|
|            Piece Parse Error             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePieceError {
    #[error("Invalid length for piece string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for piece string: '{0}', expected one of 'KQRBNPkqrbnp'")]
    InvalidChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
