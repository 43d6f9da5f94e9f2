use thiserror::Error;

/******************************************\
|==========================================|
|               Coordinates                |
|==========================================|
\******************************************/

/// # Coordinate representation
///
/// - Represents a (file, rank) pair on a chess board, file 0 = 'a', rank 0 = '1'
///
/// The fields are signed so that offset arithmetic may wander off the board;
/// only [`crate::board::Board::contains`] decides whether a coordinate names a real square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub file: i8,
    pub rank: i8,
}

impl Coordinate {
    /// Creates a coordinate from a file and rank pair
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::Coordinate;
    ///
    /// let e4 = Coordinate::new(4, 3);
    /// assert_eq!(e4.file, 4);
    /// assert_eq!(e4.rank, 3);
    /// ```
    pub const fn new(file: i8, rank: i8) -> Self {
        Coordinate { file, rank }
    }

    /// Returns the absolute distance in the files of two coordinates
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::Coordinate;
    ///
    /// assert_eq!(Coordinate::file_dist(Coordinate::new(0, 0), Coordinate::new(3, 0)), 3);
    /// assert_eq!(Coordinate::file_dist(Coordinate::new(7, 7), Coordinate::new(0, 7)), 7);
    /// ```
    pub const fn file_dist(a: Coordinate, b: Coordinate) -> i8 {
        (a.file - b.file).abs()
    }

    /// Returns the absolute distance in the ranks of two coordinates
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::Coordinate;
    ///
    /// assert_eq!(Coordinate::rank_dist(Coordinate::new(4, 1), Coordinate::new(4, 3)), 2);
    /// assert_eq!(Coordinate::rank_dist(Coordinate::new(0, 0), Coordinate::new(0, 7)), 7);
    /// ```
    pub const fn rank_dist(a: Coordinate, b: Coordinate) -> i8 {
        (a.rank - b.rank).abs()
    }

    /// Checks whether two distinct coordinates touch, including diagonally
    ///
    /// A coordinate is not adjacent to itself.
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::Coordinate;
    ///
    /// let e4 = Coordinate::new(4, 3);
    /// assert!(Coordinate::is_adjacent(e4, Coordinate::new(4, 4)));
    /// assert!(Coordinate::is_adjacent(e4, Coordinate::new(5, 4)));
    /// assert!(!Coordinate::is_adjacent(e4, e4));
    /// assert!(!Coordinate::is_adjacent(e4, Coordinate::new(4, 5)));
    /// ```
    pub const fn is_adjacent(a: Coordinate, b: Coordinate) -> bool {
        !(a.file == b.file && a.rank == b.rank)
            && Coordinate::file_dist(a, b) <= 1
            && Coordinate::rank_dist(a, b) <= 1
    }
}

/******************************************\
|==========================================|
|                Arithmetic                |
|==========================================|
\******************************************/

impl std::ops::Add for Coordinate {
    type Output = Self;

    /// Offsets a coordinate by another, without bounds checking
    fn add(self, rhs: Self) -> Self::Output {
        Coordinate::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl std::ops::Sub for Coordinate {
    type Output = Self;

    /// Offsets a coordinate by the negation of another, without bounds checking
    fn sub(self, rhs: Self) -> Self::Output {
        Coordinate::new(self.file - rhs.file, self.rank - rhs.rank)
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Coordinate {
    /// Displays the coordinate in algebraic notation (file 4, rank 3 => "e4")
    ///
    /// Only meaningful for on-board coordinates.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.file as u8) as char,
            (b'1' + self.rank as u8) as char
        )
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parses an algebraic notation string into a coordinate, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Coordinate, ParseCoordinateError};
    /// use std::str::FromStr;
    ///
    /// assert_eq!(Coordinate::from_str("a1").unwrap(), Coordinate::new(0, 0));
    /// assert_eq!("h8".parse::<Coordinate>().unwrap(), Coordinate::new(7, 7));
    /// assert!(matches!("e9".parse::<Coordinate>(), Err(ParseCoordinateError::InvalidRankChar('9'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(ParseCoordinateError::InvalidLength(s.len()));
        }

        let mut chars = s.chars();
        let file_char = chars.next().unwrap();
        let rank_char = chars.next().unwrap();

        let file = match file_char {
            'a'..='h' => file_char as u8 - b'a',
            _ => return Err(ParseCoordinateError::InvalidFileChar(file_char)),
        };
        let rank = match rank_char {
            '1'..='8' => rank_char as u8 - b'1',
            _ => return Err(ParseCoordinateError::InvalidRankChar(rank_char)),
        };

        Ok(Coordinate::new(file as i8, rank as i8))
    }
}

/******************************************\
|==========================================|
|          Coordinate Parse Errors         |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordinateError {
    #[error("Invalid length for coordinate string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'a'-'h'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
