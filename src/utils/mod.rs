pub mod perft;

pub use perft::perft;
