use thiserror::Error;

use crate::core::{CastlingSide, Colour, Coordinate, PieceType};

/******************************************\
|==========================================|
|                  Moves                   |
|==========================================|
\******************************************/

/// # Move representation
///
/// The closed set of move shapes the rules of chess allow. Every consumer
/// matches on this exhaustively, so adding a variant forces every site to
/// handle it.
///
/// `Castle` carries no squares: the king's trip is implied by the side and
/// colour pair and recoverable through [`Move::from`] and [`Move::to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Basic {
        from: Coordinate,
        to: Coordinate,
    },
    DoublePush {
        from: Coordinate,
        to: Coordinate,
    },
    EnPassant {
        from: Coordinate,
        to: Coordinate,
    },
    Promotion {
        from: Coordinate,
        to: Coordinate,
        promotion: PieceType,
    },
    Castle {
        side: CastlingSide,
        colour: Colour,
    },
}

impl Move {
    /// Returns the source square of the move (the king's start square for castles)
    pub const fn from(&self) -> Coordinate {
        match *self {
            Move::Basic { from, .. }
            | Move::DoublePush { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Promotion { from, .. } => from,
            Move::Castle { colour, .. } => {
                Coordinate::new(CastlingSide::KING_START_FILE, colour.home_rank())
            }
        }
    }

    /// Returns the target square of the move (the king's landing square for castles)
    pub const fn to(&self) -> Coordinate {
        match *self {
            Move::Basic { to, .. }
            | Move::DoublePush { to, .. }
            | Move::EnPassant { to, .. }
            | Move::Promotion { to, .. } => to,
            Move::Castle { side, colour } => {
                Coordinate::new(side.king_target_file(), colour.home_rank())
            }
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Move {
    /// Displays the move as its source and target squares (`e2e4`), with the
    /// promotion piece character appended for promotions (`e7e8q`)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Promotion { promotion, .. } => {
                write!(f, "{}{}{}", self.from(), self.to(), promotion)
            }
            _ => write!(f, "{}{}", self.from(), self.to()),
        }
    }
}

/******************************************\
|==========================================|
|               Wire Encoding              |
|==========================================|
\******************************************/

const TAG_BASIC: u8 = 0;
const TAG_DOUBLE_PUSH: u8 = 1;
const TAG_EN_PASSANT: u8 = 2;
const TAG_PROMOTION: u8 = 3;
const TAG_CASTLE: u8 = 4;

impl Move {
    /// Encodes the move into its wire format
    ///
    /// The layout is a 1-byte variant tag, the source and target squares as
    /// ASCII file and rank characters, and for promotions a trailing piece
    /// type character. 5 bytes for every variant except promotions (6).
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::core::{Coordinate, Move};
    ///
    /// let mv = Move::Basic { from: Coordinate::new(4, 1), to: Coordinate::new(4, 3) };
    /// assert_eq!(mv.encode(), vec![0, b'e', b'2', b'e', b'4']);
    /// ```
    pub fn encode(&self) -> Vec<u8> {
        let tag = match self {
            Move::Basic { .. } => TAG_BASIC,
            Move::DoublePush { .. } => TAG_DOUBLE_PUSH,
            Move::EnPassant { .. } => TAG_EN_PASSANT,
            Move::Promotion { .. } => TAG_PROMOTION,
            Move::Castle { .. } => TAG_CASTLE,
        };

        let mut bytes = vec![tag];
        encode_coordinate(self.from(), &mut bytes);
        encode_coordinate(self.to(), &mut bytes);

        if let Move::Promotion { promotion, .. } = self {
            bytes.push(promotion_byte(*promotion));
        }

        bytes
    }

    /// Decodes a move from its wire format, with error checking
    ///
    /// Accepts exactly the byte strings [`Move::encode`] produces:
    /// `decode(encode(m)) == m` for every move the generator can emit.
    pub fn decode(bytes: &[u8]) -> Result<Move, DecodeMoveError> {
        let tag = *bytes.first().ok_or(DecodeMoveError::InvalidLength(0))?;

        let expected_len = match tag {
            TAG_PROMOTION => 6,
            TAG_BASIC | TAG_DOUBLE_PUSH | TAG_EN_PASSANT | TAG_CASTLE => 5,
            unknown => return Err(DecodeMoveError::UnknownTag(unknown)),
        };
        if bytes.len() != expected_len {
            return Err(DecodeMoveError::InvalidLength(bytes.len()));
        }

        let from = decode_coordinate(bytes[1], bytes[2])?;
        let to = decode_coordinate(bytes[3], bytes[4])?;

        match tag {
            TAG_BASIC => Ok(Move::Basic { from, to }),
            TAG_DOUBLE_PUSH => Ok(Move::DoublePush { from, to }),
            TAG_EN_PASSANT => Ok(Move::EnPassant { from, to }),
            TAG_PROMOTION => {
                let promotion = match bytes[5] {
                    b'q' => PieceType::Queen,
                    b'r' => PieceType::Rook,
                    b'b' => PieceType::Bishop,
                    b'n' => PieceType::Knight,
                    invalid => return Err(DecodeMoveError::InvalidPromotionPiece(invalid)),
                };
                Ok(Move::Promotion {
                    from,
                    to,
                    promotion,
                })
            }
            TAG_CASTLE => {
                let colour = match from.rank {
                    0 => Colour::White,
                    7 => Colour::Black,
                    _ => return Err(DecodeMoveError::InvalidCastleSquares),
                };
                let side = match to.file {
                    6 => CastlingSide::King,
                    2 => CastlingSide::Queen,
                    _ => return Err(DecodeMoveError::InvalidCastleSquares),
                };
                if from.file != CastlingSide::KING_START_FILE || to.rank != from.rank {
                    return Err(DecodeMoveError::InvalidCastleSquares);
                }
                Ok(Move::Castle { side, colour })
            }
            _ => unreachable!(),
        }
    }
}

/// Appends a coordinate as its ASCII file and rank characters
fn encode_coordinate(coordinate: Coordinate, bytes: &mut Vec<u8>) {
    bytes.push(b'a' + coordinate.file as u8);
    bytes.push(b'1' + coordinate.rank as u8);
}

/// Reads a coordinate from its ASCII file and rank characters, with error checking
fn decode_coordinate(file_byte: u8, rank_byte: u8) -> Result<Coordinate, DecodeMoveError> {
    let file = match file_byte {
        b'a'..=b'h' => (file_byte - b'a') as i8,
        invalid => return Err(DecodeMoveError::InvalidFileByte(invalid)),
    };
    let rank = match rank_byte {
        b'1'..=b'8' => (rank_byte - b'1') as i8,
        invalid => return Err(DecodeMoveError::InvalidRankByte(invalid)),
    };
    Ok(Coordinate::new(file, rank))
}

/// The ASCII character for a promotable piece type
fn promotion_byte(piece_type: PieceType) -> u8 {
    match piece_type {
        PieceType::Queen => b'q',
        PieceType::Rook => b'r',
        PieceType::Bishop => b'b',
        PieceType::Knight => b'n',
        _ => panic!("Invalid promotion piece type!"),
    }
}

/******************************************\
|==========================================|
|            Move Decode Errors            |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeMoveError {
    #[error("Unknown move tag byte: {0}, expected 0-4")]
    UnknownTag(u8),
    #[error("Invalid length for move bytes: {0}, expected 5 or 6")]
    InvalidLength(usize),
    #[error("Invalid file byte: {0}, expected b'a'-b'h'")]
    InvalidFileByte(u8),
    #[error("Invalid rank byte: {0}, expected b'1'-b'8'")]
    InvalidRankByte(u8),
    #[error("Invalid promotion piece byte: {0}, expected one of b\"qrbn\"")]
    InvalidPromotionPiece(u8),
    #[error("Castle squares do not match any castling king trip")]
    InvalidCastleSquares,
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
    fn test_move_accessors() {
        let mv = Move::Basic {
            from: coord("e2"),
            to: coord("e4"),
        };
        assert_eq!(mv.from(), coord("e2"));
        assert_eq!(mv.to(), coord("e4"));

        let mv = Move::Promotion {
            from: coord("e7"),
            to: coord("d8"),
            promotion: PieceType::Queen,
        };
        assert_eq!(mv.from(), coord("e7"));
        assert_eq!(mv.to(), coord("d8"));
    }

    #[test]
    fn test_castle_move_accessors() {
        let mv = Move::Castle {
            side: CastlingSide::King,
            colour: Colour::White,
        };
        assert_eq!(mv.from(), coord("e1"));
        assert_eq!(mv.to(), coord("g1"));

        let mv = Move::Castle {
            side: CastlingSide::Queen,
            colour: Colour::White,
        };
        assert_eq!(mv.from(), coord("e1"));
        assert_eq!(mv.to(), coord("c1"));

        let mv = Move::Castle {
            side: CastlingSide::King,
            colour: Colour::Black,
        };
        assert_eq!(mv.from(), coord("e8"));
        assert_eq!(mv.to(), coord("g8"));

        let mv = Move::Castle {
            side: CastlingSide::Queen,
            colour: Colour::Black,
        };
        assert_eq!(mv.from(), coord("e8"));
        assert_eq!(mv.to(), coord("c8"));
    }

    #[test]
    fn test_move_equality() {
        assert_eq!(
            Move::Basic {
                from: coord("e2"),
                to: coord("e4")
            },
            Move::Basic {
                from: coord("e2"),
                to: coord("e4")
            }
        );
        assert_ne!(
            Move::Basic {
                from: coord("e2"),
                to: coord("e4")
            },
            Move::DoublePush {
                from: coord("e2"),
                to: coord("e4")
            }
        );

        assert_eq!(
            Move::Castle {
                side: CastlingSide::King,
                colour: Colour::White
            },
            Move::Castle {
                side: CastlingSide::King,
                colour: Colour::White
            }
        );
        assert_ne!(
            Move::Castle {
                side: CastlingSide::King,
                colour: Colour::White
            },
            Move::Castle {
                side: CastlingSide::Queen,
                colour: Colour::White
            }
        );
        assert_ne!(
            Move::Castle {
                side: CastlingSide::King,
                colour: Colour::White
            },
            Move::Castle {
                side: CastlingSide::King,
                colour: Colour::Black
            }
        );
    }

    #[test]
    fn test_move_display() {
        assert_eq!(
            Move::Basic {
                from: coord("e2"),
                to: coord("e4")
            }
            .to_string(),
            "e2e4"
        );
        assert_eq!(
            Move::DoublePush {
                from: coord("d7"),
                to: coord("d5")
            }
            .to_string(),
            "d7d5"
        );
        assert_eq!(
            Move::EnPassant {
                from: coord("d5"),
                to: coord("e6")
            }
            .to_string(),
            "d5e6"
        );
        assert_eq!(
            Move::Promotion {
                from: coord("e7"),
                to: coord("e8"),
                promotion: PieceType::Queen
            }
            .to_string(),
            "e7e8q"
        );
        assert_eq!(
            Move::Promotion {
                from: coord("b2"),
                to: coord("a1"),
                promotion: PieceType::Knight
            }
            .to_string(),
            "b2a1n"
        );
        assert_eq!(
            Move::Castle {
                side: CastlingSide::King,
                colour: Colour::White
            }
            .to_string(),
            "e1g1"
        );
        assert_eq!(
            Move::Castle {
                side: CastlingSide::Queen,
                colour: Colour::Black
            }
            .to_string(),
            "e8c8"
        );
    }

    #[test]
    fn test_encode_layout() {
        let mv = Move::Basic {
            from: coord("e2"),
            to: coord("e4"),
        };
        assert_eq!(mv.encode(), vec![0, b'e', b'2', b'e', b'4']);

        let mv = Move::DoublePush {
            from: coord("d7"),
            to: coord("d5"),
        };
        assert_eq!(mv.encode(), vec![1, b'd', b'7', b'd', b'5']);

        let mv = Move::Promotion {
            from: coord("e7"),
            to: coord("e8"),
            promotion: PieceType::Rook,
        };
        assert_eq!(mv.encode(), vec![3, b'e', b'7', b'e', b'8', b'r']);

        let mv = Move::Castle {
            side: CastlingSide::King,
            colour: Colour::White,
        };
        assert_eq!(mv.encode(), vec![4, b'e', b'1', b'g', b'1']);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let moves = [
            Move::Basic {
                from: coord("g1"),
                to: coord("f3"),
            },
            Move::Basic {
                from: coord("a1"),
                to: coord("a8"),
            },
            Move::DoublePush {
                from: coord("e2"),
                to: coord("e4"),
            },
            Move::EnPassant {
                from: coord("d5"),
                to: coord("e6"),
            },
            Move::Promotion {
                from: coord("e7"),
                to: coord("e8"),
                promotion: PieceType::Queen,
            },
            Move::Promotion {
                from: coord("a2"),
                to: coord("b1"),
                promotion: PieceType::Rook,
            },
            Move::Promotion {
                from: coord("h7"),
                to: coord("h8"),
                promotion: PieceType::Bishop,
            },
            Move::Promotion {
                from: coord("c2"),
                to: coord("c1"),
                promotion: PieceType::Knight,
            },
            Move::Castle {
                side: CastlingSide::King,
                colour: Colour::White,
            },
            Move::Castle {
                side: CastlingSide::Queen,
                colour: Colour::White,
            },
            Move::Castle {
                side: CastlingSide::King,
                colour: Colour::Black,
            },
            Move::Castle {
                side: CastlingSide::Queen,
                colour: Colour::Black,
            },
        ];

        for mv in moves {
            assert_eq!(Move::decode(&mv.encode()), Ok(mv));
        }
    }

    #[test]
    fn test_decode_invalid_tag() {
        assert!(matches!(
            Move::decode(&[9, b'e', b'2', b'e', b'4']),
            Err(DecodeMoveError::UnknownTag(9))
        ));
        assert!(matches!(
            Move::decode(&[255, b'e', b'2', b'e', b'4']),
            Err(DecodeMoveError::UnknownTag(255))
        ));
    }

    #[test]
    fn test_decode_invalid_length() {
        assert!(matches!(
            Move::decode(&[]),
            Err(DecodeMoveError::InvalidLength(0))
        ));
        assert!(matches!(
            Move::decode(&[0, b'e', b'2']),
            Err(DecodeMoveError::InvalidLength(3))
        ));
        assert!(matches!(
            Move::decode(&[0, b'e', b'2', b'e', b'4', b'q']),
            Err(DecodeMoveError::InvalidLength(6))
        ));
        assert!(matches!(
            Move::decode(&[3, b'e', b'7', b'e', b'8']),
            Err(DecodeMoveError::InvalidLength(5))
        ));
    }

    #[test]
    fn test_decode_invalid_coordinates() {
        assert!(matches!(
            Move::decode(&[0, b'i', b'2', b'e', b'4']),
            Err(DecodeMoveError::InvalidFileByte(b'i'))
        ));
        assert!(matches!(
            Move::decode(&[0, b'e', b'9', b'e', b'4']),
            Err(DecodeMoveError::InvalidRankByte(b'9'))
        ));
        assert!(matches!(
            Move::decode(&[0, b'e', b'2', b'0', b'4']),
            Err(DecodeMoveError::InvalidFileByte(b'0'))
        ));
        assert!(matches!(
            Move::decode(&[0, b'e', b'2', b'e', b'a']),
            Err(DecodeMoveError::InvalidRankByte(b'a'))
        ));
    }

    #[test]
    fn test_decode_invalid_promotion_piece() {
        assert!(matches!(
            Move::decode(&[3, b'e', b'7', b'e', b'8', b'k']),
            Err(DecodeMoveError::InvalidPromotionPiece(b'k'))
        ));
        assert!(matches!(
            Move::decode(&[3, b'e', b'7', b'e', b'8', b'p']),
            Err(DecodeMoveError::InvalidPromotionPiece(b'p'))
        ));
    }

    #[test]
    fn test_decode_invalid_castle_squares() {
        // King trip starting off the home ranks
        assert!(matches!(
            Move::decode(&[4, b'e', b'4', b'g', b'4']),
            Err(DecodeMoveError::InvalidCastleSquares)
        ));
        // Landing on a non-castling file
        assert!(matches!(
            Move::decode(&[4, b'e', b'1', b'f', b'1']),
            Err(DecodeMoveError::InvalidCastleSquares)
        ));
        // Source is not the king start square
        assert!(matches!(
            Move::decode(&[4, b'd', b'1', b'g', b'1']),
            Err(DecodeMoveError::InvalidCastleSquares)
        ));
        // Trip changes rank
        assert!(matches!(
            Move::decode(&[4, b'e', b'1', b'g', b'8']),
            Err(DecodeMoveError::InvalidCastleSquares)
        ));
    }

    #[test]
    #[should_panic(expected = "Invalid promotion piece type!")]
    fn test_encode_invalid_promotion_piece() {
        let mv = Move::Promotion {
            from: coord("e7"),
            to: coord("e8"),
            promotion: PieceType::King,
        };
        let _ = mv.encode();
    }
}
