//! Sources for the opponent's move.
//!
//! [`GameState`](crate::GameState) only ever asks a [`MoveSource`] for the next move, so
//! tests can swap the uniform random source for a scripted one.

use rand::{
    rngs::{StdRng, ThreadRng},
    thread_rng, Rng, SeedableRng,
};

use crate::Move;

pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

/// Picks uniformly from [`Move::ALL`].
#[derive(Debug, Clone)]
pub struct RandomMoves<R> {
    rng: R,
}

impl RandomMoves<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: thread_rng() }
    }
}

impl RandomMoves<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.gen_range(0..Move::ALL.len())]
    }
}

/// Replays a fixed list of moves, starting over once it runs out.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    moves: Vec<Move>,
    next: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `moves` is empty.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let moves: Vec<Move> = moves.into_iter().collect();
        assert!(!moves.is_empty(), "SequenceSource needs at least one move");
        Self { moves, next: 0 }
    }
}

impl MoveSource for SequenceSource {
    fn next_move(&mut self) -> Move {
        let m = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        m
    }
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{MoveSource, RandomMoves, SequenceSource};
    use crate::Move;

    #[test]
    fn uniform_distribution() {
        const TRIALS: usize = 10_000;
        let mut source = RandomMoves::seeded(0x5eed);
        let mut buckets: HashMap<Move, usize> = HashMap::new();
        for _ in 0..TRIALS {
            *buckets.entry(source.next_move()).or_default() += 1;
        }

        let expected = TRIALS as f64 / 3.;
        for m in Move::ALL {
            let count = buckets.get(&m).copied().unwrap_or_default() as f64;
            assert!(
                (count - expected).abs() <= expected * 0.05,
                "{m} was drawn {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn seeded_sources_agree() {
        let mut a = RandomMoves::seeded(42);
        let mut b = RandomMoves::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_move(), b.next_move());
        }
    }

    #[test]
    fn sequence_cycles() {
        let mut source = SequenceSource::new([Move::Paper, Move::Rock]);
        let drawn: Vec<Move> = (0..5).map(|_| source.next_move()).collect();
        assert_eq!(
            drawn,
            [Move::Paper, Move::Rock, Move::Paper, Move::Rock, Move::Paper]
        );
    }

    #[test]
    #[should_panic]
    fn empty_sequence() {
        SequenceSource::new([]);
    }
}
