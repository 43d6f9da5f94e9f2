//! # Chess Rules Engine
//!
//! A Rust chess rules engine covering move generation, legality and game state.
pub mod board;
pub mod core;
pub mod utils;

pub use board::{Board, Position};
pub use core::*;
