// Core module exports

// Value type submodules
pub mod coordinate;
pub mod macros;
pub mod moves;
pub mod piece;
pub mod types;

// Re-export common types for easier access
pub use coordinate::{Coordinate, ParseCoordinateError};
pub use moves::{DecodeMoveError, Move};
pub use piece::{ParsePieceError, Piece, PieceType};
pub use types::{Castling, CastlingSide, Colour};
