use crate::board::Position;

/******************************************\
|==========================================|
|           Perft Node Counting            |
|==========================================|
\******************************************/

/// Counts the leaf nodes of the legal move tree to a fixed depth
///
/// Walks every legal move by cloning and applying, the same way the legality
/// filter simulates. The well-known node counts per position make this the
/// main correctness harness for generation, legality and application
/// together: a single wrong edge case shifts the totals.
pub fn perft(position: &Position, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = position.generate_moves();

    if depth == 1 {
        return moves.len();
    }

    let mut nodes = 0;

    for mv in moves {
        let mut next = position.clone();
        next.do_move(mv);
        nodes += perft(&next, depth - 1);
    }

    nodes
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
