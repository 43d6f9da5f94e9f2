use thiserror::Error;

use crate::board::{Board, Position};
use crate::core::{Castling, Colour, Coordinate, Piece};

/******************************************\
|==========================================|
|              FEN Constants               |
|==========================================|
\******************************************/

/// FEN string for an empty board
pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

/// FEN string for the standard chess starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FEN string for a well known tactical middlegame position ("Kiwipete")
pub const TRICKY_FEN: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

/// FEN string for a sparse rook endgame position
pub const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

/******************************************\
|==========================================|
|               FEN Parsing                |
|==========================================|
\******************************************/

impl Position {
    /// Parses a FEN record into a position, with error checking
    ///
    /// The record must carry exactly six whitespace-separated fields: piece
    /// placement, side to move, castling rights, en-passant target square,
    /// halfmove clock and fullmove number.
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::{Position, board::START_FEN, core::Colour};
    ///
    /// let position = Position::from_fen(START_FEN).unwrap();
    /// assert_eq!(position.stm(), Colour::White);
    /// assert_eq!(position.fullmoves(), 1);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Position, FenParseError> {
        let mut position = Position::empty();
        let mut fields = fen.split_whitespace();

        position.parse_piece_placement(fields.next().ok_or(FenParseError::InvalidNumberOfFields)?)?;
        position.parse_side_to_move(fields.next().ok_or(FenParseError::InvalidNumberOfFields)?)?;
        position.parse_castling(fields.next().ok_or(FenParseError::InvalidNumberOfFields)?)?;
        position.parse_enpassant(fields.next().ok_or(FenParseError::InvalidNumberOfFields)?)?;
        position.parse_halfmove_clock(fields.next().ok_or(FenParseError::InvalidNumberOfFields)?)?;
        position.parse_fullmove_number(fields.next().ok_or(FenParseError::InvalidNumberOfFields)?)?;

        if fields.next().is_some() {
            return Err(FenParseError::InvalidNumberOfFields);
        }

        Ok(position)
    }

    /// Parses the piece placement field, ranks listed from the 8th down
    fn parse_piece_placement(&mut self, field: &str) -> Result<(), FenParseError> {
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenParseError::InvalidRankFormat(field.to_string()));
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as i8;
            let mut file: i8 = 0;

            for c in rank_str.chars() {
                match c {
                    '1'..='8' => file += c as i8 - '0' as i8,
                    _ => {
                        let piece = c
                            .to_string()
                            .parse::<Piece>()
                            .map_err(|_| FenParseError::InvalidPiecePlacementChar(c))?;
                        if file >= Board::SIZE {
                            return Err(FenParseError::InvalidRankFormat(rank_str.to_string()));
                        }
                        self.board.add_piece(Coordinate::new(file, rank), piece);
                        file += 1;
                    }
                }
            }

            if file != Board::SIZE {
                return Err(FenParseError::InvalidRankFormat(rank_str.to_string()));
            }
        }

        Ok(())
    }

    /// Parses the side to move field
    fn parse_side_to_move(&mut self, field: &str) -> Result<(), FenParseError> {
        self.stm = match field {
            "w" => Colour::White,
            "b" => Colour::Black,
            _ => return Err(FenParseError::InvalidSideToMove(field.to_string())),
        };
        Ok(())
    }

    /// Parses the castling rights field
    fn parse_castling(&mut self, field: &str) -> Result<(), FenParseError> {
        self.castle = Castling::NONE;
        if field == "-" {
            return Ok(());
        }

        for c in field.chars() {
            match c {
                'K' => self.castle.set(Castling::WK),
                'Q' => self.castle.set(Castling::WQ),
                'k' => self.castle.set(Castling::BK),
                'q' => self.castle.set(Castling::BQ),
                _ => return Err(FenParseError::InvalidCastlingChar(c)),
            }
        }
        Ok(())
    }

    /// Parses the en-passant target square field
    ///
    /// The target can only ever sit on the rank a pawn skips during a double
    /// push, so anything outside ranks 3 and 6 is rejected.
    fn parse_enpassant(&mut self, field: &str) -> Result<(), FenParseError> {
        if field == "-" {
            self.enpassant = None;
            return Ok(());
        }

        let square = field
            .parse::<Coordinate>()
            .map_err(|_| FenParseError::InvalidEnPassantSquare(field.to_string()))?;
        if square.rank != 2 && square.rank != 5 {
            return Err(FenParseError::InvalidEnPassantSquare(field.to_string()));
        }

        self.enpassant = Some(square);
        Ok(())
    }

    /// Parses the halfmove clock field
    fn parse_halfmove_clock(&mut self, field: &str) -> Result<(), FenParseError> {
        self.halfmove_clock = field
            .parse::<u8>()
            .map_err(|_| FenParseError::InvalidHalfmoveClock(field.to_string()))?;
        Ok(())
    }

    /// Parses the fullmove number field, which starts counting from 1
    fn parse_fullmove_number(&mut self, field: &str) -> Result<(), FenParseError> {
        let fullmoves = field
            .parse::<u16>()
            .map_err(|_| FenParseError::InvalidFullmoveNumber(field.to_string()))?;
        if fullmoves == 0 {
            return Err(FenParseError::InvalidFullmoveNumber(field.to_string()));
        }
        self.fullmoves = fullmoves;
        Ok(())
    }
}

/******************************************\
|==========================================|
|             FEN Serialization            |
|==========================================|
\******************************************/

impl Position {
    /// Serializes the position back into a FEN record
    ///
    /// The inverse of [`Position::from_fen`]: parsing the output reproduces
    /// this position exactly.
    pub fn fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..Board::SIZE).rev() {
            let mut empty_count = 0;

            for file in 0..Board::SIZE {
                match self.board.on(Coordinate::new(file, rank)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push_str(&piece.to_string());
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        let side = match self.stm {
            Colour::White => "w",
            Colour::Black => "b",
        };
        let enpassant = match self.enpassant {
            Some(square) => square.to_string(),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            fen, side, self.castle, enpassant, self.halfmove_clock, self.fullmoves
        )
    }
}

/******************************************\
|==========================================|
|             FEN Parse Errors             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenParseError {
    #[error("Invalid number of fields in FEN string, expected 6")]
    InvalidNumberOfFields,
    #[error("Invalid character in piece placement: '{0}'")]
    InvalidPiecePlacementChar(char),
    #[error("Invalid rank format in piece placement: \"{0}\"")]
    InvalidRankFormat(String),
    #[error("Invalid side to move: \"{0}\", expected 'w' or 'b'")]
    InvalidSideToMove(String),
    #[error("Invalid character in castling rights: '{0}', expected one of \"KQkq\"")]
    InvalidCastlingChar(char),
    #[error("Invalid en passant square: \"{0}\"")]
    InvalidEnPassantSquare(String),
    #[error("Invalid halfmove clock: \"{0}\"")]
    InvalidHalfmoveClock(String),
    #[error("Invalid fullmove number: \"{0}\"")]
    InvalidFullmoveNumber(String),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
