use super::Coordinate;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.
#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);

impl Colour {
    /// Returns the forward offset (a pawn's single push) for a colour
    pub const fn forward(&self) -> Coordinate {
        match self {
            Colour::White => Coordinate::new(0, 1),
            Colour::Black => Coordinate::new(0, -1),
        }
    }

    /// Returns the rank a colour's pawns start on (double pushes come from here)
    pub const fn pawn_rank(&self) -> i8 {
        match self {
            Colour::White => 1,
            Colour::Black => 6,
        }
    }

    /// Returns the rank a colour's pawns promote on
    pub const fn promotion_rank(&self) -> i8 {
        match self {
            Colour::White => 7,
            Colour::Black => 0,
        }
    }

    /// Returns the rank a colour's king and rooks start on
    pub const fn home_rank(&self) -> i8 {
        match self {
            Colour::White => 0,
            Colour::Black => 7,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

/******************************************\
|==========================================|
|              Castling Sides              |
|==========================================|
\******************************************/

/// # Castling Side Representation
///
/// Represents the two wings a king may castle towards.
#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    King,
    Queen
}

impl CastlingSide {
    /// Number of elements in the CastlingSide enum
    pub const NUM: usize = 2;

    /// The file the king starts on, shared by both sides
    pub const KING_START_FILE: i8 = 4;

    /// Returns the file the king lands on when castling to this side
    pub const fn king_target_file(&self) -> i8 {
        match self {
            CastlingSide::King => 6,
            CastlingSide::Queen => 2,
        }
    }

    /// Returns the file this side's rook starts on
    pub const fn rook_start_file(&self) -> i8 {
        match self {
            CastlingSide::King => 7,
            CastlingSide::Queen => 0,
        }
    }

    /// Returns the file this side's rook lands on when castling
    pub const fn rook_target_file(&self) -> i8 {
        match self {
            CastlingSide::King => 5,
            CastlingSide::Queen => 3,
        }
    }
}

crate::impl_from_to_primitive!(CastlingSide);

/******************************************\
|==========================================|
|                 Castling                 |
|==========================================|
\******************************************/

/// # Castling Representation
///
/// Represents the castling rights for a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castling(pub u8);

impl Default for Castling {
    fn default() -> Self {
        Castling::ALL
    }
}

crate::impl_bit_ops!(Castling);

impl Castling {
    // Atomic castling rights
    pub const WK: Castling = Castling(1);
    pub const WQ: Castling = Castling(2);
    pub const BK: Castling = Castling(4);
    pub const BQ: Castling = Castling(8);
    // Board colour castling rights
    pub const WHITE_CASTLING: Castling = Castling(3);
    pub const BLACK_CASTLING: Castling = Castling(12);
    // All or nothing castling rights
    pub const ALL: Castling = Castling(15);
    pub const NONE: Castling = Castling(0);

    /// Helper function to check if a castling right has another castling right as a subset
    pub fn has(self, right: Castling) -> bool {
        self & right != Castling::NONE
    }

    /// Helper function to set castling rights
    pub fn set(&mut self, right: Castling) {
        *self |= right;
    }

    /// Helper function to remove castling rights
    pub fn remove(&mut self, right: Castling) {
        *self &= !right;
    }

    /// Mask the castling rights using `mask`
    ///
    /// Rights only ever shrink over a game; this is the single mutation the
    /// move applier performs on them.
    #[inline]
    pub fn mask(&mut self, mask: Castling) {
        self.0 &= mask.0;
    }

    /// Get the atomic castling right for a colour and side pair
    #[inline]
    pub const fn from_parts(colour: Colour, side: CastlingSide) -> Self {
        match (colour, side) {
            (Colour::White, CastlingSide::King) => Castling::WK,
            (Colour::White, CastlingSide::Queen) => Castling::WQ,
            (Colour::Black, CastlingSide::King) => Castling::BK,
            (Colour::Black, CastlingSide::Queen) => Castling::BQ,
        }
    }
}

impl std::ops::Not for Castling {
    type Output = Self;

    /// Invert the bits to give the opposite castling rights
    #[inline]
    fn not(self) -> Self::Output {
        Castling(!self.0 & 0x0F)
    }
}

impl std::fmt::Display for Castling {
    /// Displays castling right in the `KQkq` format
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }

        let mut s = String::new();
        if self.has(Castling::WK) {
            s.push('K');
        }
        if self.has(Castling::WQ) {
            s.push('Q');
        }
        if self.has(Castling::BK) {
            s.push('k');
        }
        if self.has(Castling::BQ) {
            s.push('q');
        }

        write!(f, "{}", s)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
